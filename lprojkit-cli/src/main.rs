mod delete;
mod detect;
mod import;
mod locales;
mod progress;
mod recent;
mod stats;
mod validation;
mod view;

use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use crate::delete::{DeleteCommandOptions, run_delete_command};
use crate::detect::run_detect_command;
use crate::import::{ImportCommandOptions, run_import_command};
use crate::locales::run_locales_command;
use crate::recent::run_recent_command;
use crate::stats::run_stats_command;
use crate::view::run_view_command;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Detect the localization layout of a project.
    Detect {
        /// Project directory to inspect
        path: PathBuf,

        /// Print the configuration as JSON
        #[arg(long)]
        json: bool,

        /// Record the project in the recent-projects store
        #[arg(long)]
        save: bool,
    },

    /// View string table entries across the project's languages.
    View {
        /// Project directory to inspect
        path: PathBuf,

        /// Optional language code to filter entries by
        #[arg(short, long)]
        lang: Option<String>,

        /// Display full values without truncation (even in terminal)
        #[arg(long)]
        full: bool,

        /// Print entries as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show per-language translation statistics.
    Stats {
        /// Project directory to inspect
        path: PathBuf,

        /// Optional language code to filter statistics by
        #[arg(short, long)]
        lang: Option<String>,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Import translations from a source file into the project's tables.
    Import {
        /// Translation source file (CSV, TSV or JSON)
        source: PathBuf,

        /// Project directory to import into
        path: PathBuf,

        /// Source format override (csv, tsv, json); inferred from the
        /// extension when omitted
        #[arg(short, long)]
        format: Option<String>,

        /// Default language override
        #[arg(short, long)]
        language: Option<String>,

        /// Table name override (defaults to the detected table)
        #[arg(short, long)]
        table: Option<String>,

        /// Write the import report as JSON to this file
        #[arg(long)]
        report_json: Option<PathBuf>,
    },

    /// Delete keys from every language's string table.
    Delete {
        /// Project directory to clean
        path: PathBuf,

        /// Keys to delete
        keys: Vec<String>,

        /// Read additional keys from a file, one per line
        #[arg(long)]
        keys_file: Option<PathBuf>,

        /// Table name override (defaults to the detected table)
        #[arg(short, long)]
        table: Option<String>,

        /// Write the deletion report as JSON to this file
        #[arg(long)]
        report_json: Option<PathBuf>,
    },

    /// List supported locales, or resolve one to its .lproj directory.
    Locales {
        /// Locale identifier to resolve (e.g. en_GB)
        locale: Option<String>,
    },

    /// Show or manage the recent-projects store.
    Recent {
        /// Forget one project by path
        #[arg(long)]
        remove: Option<PathBuf>,

        /// Forget every project
        #[arg(long, conflicts_with = "remove")]
        clear: bool,
    },

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn main() {
    let args = Args::parse();

    let result = match args.commands {
        Commands::Detect { path, json, save } => run_detect_command(path, json, save),
        Commands::View {
            path,
            lang,
            full,
            json,
        } => run_view_command(path, lang, full, json),
        Commands::Stats { path, lang, json } => run_stats_command(path, lang, json),
        Commands::Import {
            source,
            path,
            format,
            language,
            table,
            report_json,
        } => run_import_command(ImportCommandOptions {
            source,
            path,
            format,
            language,
            table,
            report_json,
        }),
        Commands::Delete {
            path,
            keys,
            keys_file,
            table,
            report_json,
        } => run_delete_command(DeleteCommandOptions {
            path,
            keys,
            keys_file,
            table,
            report_json,
        }),
        Commands::Locales { locale } => run_locales_command(locale),
        Commands::Recent { remove, clear } => run_recent_command(remove, clear),
        Commands::Completions { shell } => {
            let mut command = Args::command();
            let name = command.get_name().to_string();
            clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
