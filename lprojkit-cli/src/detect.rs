use std::path::PathBuf;

use lprojkit::{ProjectStore, detect, language, project_name};

use crate::progress;
use crate::recent::store_path;
use crate::validation::validate_project_path;

/// Run the detect command: infer the project's localization layout.
pub fn run_detect_command(path: PathBuf, json: bool, save: bool) -> Result<(), String> {
    validate_project_path(&path)?;

    let spinner = progress::spinner("Scanning for .lproj directories...");
    let Some(config) = detect(&path) else {
        spinner.finish_with_message("❌ No string tables found");
        return Err(format!("No string tables found under {}", path.display()));
    };
    spinner.finish_with_message(format!(
        "✅ Detected {} language(s)",
        config.available_languages.len()
    ));

    if json {
        let text = serde_json::to_string_pretty(&config)
            .map_err(|e| format!("Failed to serialize configuration: {}", e))?;
        println!("{}", text);
    } else {
        println!("Project: {}", project_name(&path));
        println!("Localization root: {}", config.localization_root.display());
        println!(
            "Default language: {}",
            language::display_name(&config.default_language)
        );
        println!("Languages:");
        for code in &config.available_languages {
            println!("  {}", language::display_name(code));
        }
        println!("Tables: {}", config.available_table_names.join(", "));
        println!("Selected table: {}", config.selected_table_name);
    }

    if save {
        let mut store = ProjectStore::load(store_path()?);
        store.record(&path, project_name(&path), config);
        store
            .save()
            .map_err(|e| format!("Failed to save recent projects: {}", e))?;
        println!("📌 Saved to recent projects");
    }

    Ok(())
}
