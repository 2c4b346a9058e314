use std::path::PathBuf;
use std::str::FromStr;

use lprojkit::source::SourceFormat;
use lprojkit::{ImportOptions, detect, import_rows, read_rows};

use crate::progress::{self, ConsoleProgress};
use crate::validation::{
    validate_file_path, validate_language_code, validate_output_path, validate_project_path,
};

#[derive(Debug, Clone)]
pub struct ImportCommandOptions {
    pub source: PathBuf,
    pub path: PathBuf,
    pub format: Option<String>,
    pub language: Option<String>,
    pub table: Option<String>,
    pub report_json: Option<PathBuf>,
}

/// Run the import command: merge translation source rows into the project's
/// string tables.
pub fn run_import_command(opts: ImportCommandOptions) -> Result<(), String> {
    validate_file_path(&opts.source)?;
    validate_project_path(&opts.path)?;
    if let Some(language) = &opts.language {
        validate_language_code(language)?;
    }
    if let Some(report_path) = &opts.report_json {
        validate_output_path(report_path)?;
    }

    let format = opts
        .format
        .as_deref()
        .map(SourceFormat::from_str)
        .transpose()
        .map_err(|e| e.to_string())?;

    let spinner = progress::spinner("Detecting project configuration...");
    let Some(config) = detect(&opts.path) else {
        spinner.finish_with_message("❌ No string tables found");
        return Err(format!(
            "No string tables found under {}",
            opts.path.display()
        ));
    };
    spinner.finish_with_message(format!(
        "✅ Detected {} language(s)",
        config.available_languages.len()
    ));

    let default_language = opts
        .language
        .clone()
        .unwrap_or_else(|| config.default_language.clone());
    let table_name = opts
        .table
        .clone()
        .unwrap_or_else(|| config.selected_table_name.clone());

    println!("📁 Source file: {}", opts.source.display());
    println!("📂 Project path: {}", config.localization_root.display());
    println!("   Default language: {}", default_language);
    println!("   Table: {}", table_name);
    println!();

    let spinner = progress::spinner("Reading translation source...");
    let rows = match read_rows(&opts.source, format) {
        Ok(rows) => rows,
        Err(e) => {
            spinner.finish_with_message("❌ Error reading translation source");
            return Err(e.to_string());
        }
    };
    spinner.finish_with_message(format!("✅ Read {} row(s)", rows.len()));

    let options = ImportOptions::new(&config.localization_root, default_language)
        .with_table_name(table_name);
    let report = import_rows(&rows, &options, &ConsoleProgress).map_err(|e| e.to_string())?;

    if let Some(report_path) = &opts.report_json {
        let text = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("Failed to serialize report JSON: {}", e))?;
        std::fs::write(report_path, text).map_err(|e| {
            format!(
                "Failed to write report JSON '{}': {}",
                report_path.display(),
                e
            )
        })?;
        println!("Report JSON written: {}", report_path.display());
    }

    if !report.failed_files.is_empty() {
        return Err(format!(
            "{} file(s) failed to import",
            report.failed_files.len()
        ));
    }

    Ok(())
}
