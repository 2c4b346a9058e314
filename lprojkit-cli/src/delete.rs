use std::path::PathBuf;

use lprojkit::{DEFAULT_TABLE_NAME, DeleteOptions, delete_keys, detect};

use crate::progress::ConsoleProgress;
use crate::validation::{validate_file_path, validate_output_path, validate_project_path};

#[derive(Debug, Clone)]
pub struct DeleteCommandOptions {
    pub path: PathBuf,
    pub keys: Vec<String>,
    pub keys_file: Option<PathBuf>,
    pub table: Option<String>,
    pub report_json: Option<PathBuf>,
}

/// Run the delete command: remove keys from every language's string table.
pub fn run_delete_command(opts: DeleteCommandOptions) -> Result<(), String> {
    validate_project_path(&opts.path)?;
    if let Some(keys_file) = &opts.keys_file {
        validate_file_path(keys_file)?;
    }
    if let Some(report_path) = &opts.report_json {
        validate_output_path(report_path)?;
    }

    let mut keys = opts.keys.clone();
    if let Some(keys_file) = &opts.keys_file {
        let content = std::fs::read_to_string(keys_file)
            .map_err(|e| format!("Failed to read keys file '{}': {}", keys_file.display(), e))?;
        keys.extend(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from),
        );
    }
    if keys.is_empty() {
        return Err("No keys given; pass keys as arguments or use --keys-file".to_string());
    }

    let table_name = opts
        .table
        .clone()
        .or_else(|| detect(&opts.path).map(|config| config.selected_table_name))
        .unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string());

    let options = DeleteOptions::new(&opts.path).with_table_name(table_name);
    let report = delete_keys(&keys, &options, &ConsoleProgress).map_err(|e| e.to_string())?;

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
            "{} file(s) failed to update",
            report.failed_files.len()
        ));
    }

    Ok(())
}
