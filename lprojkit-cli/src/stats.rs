use std::collections::BTreeSet;
use std::path::PathBuf;

use rayon::prelude::*;
use serde::Serialize;

use lprojkit::{StringTable, detect, language};

use crate::progress;
use crate::validation::{validate_language_code, validate_project_path};

#[derive(Debug, Serialize)]
struct LanguageStats {
    language: String,
    total: usize,
    empty_values: usize,
    missing: usize,
    completion_percent: f64,
}

#[derive(Debug, Serialize)]
struct StatsReport {
    project: String,
    default_language: String,
    table: String,
    unique_keys: usize,
    languages: Vec<LanguageStats>,
}

fn completion_percent(translated: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        100.0
    } else {
        let percent = (translated as f64) * 100.0 / (denominator as f64);
        (percent * 100.0).round() / 100.0
    }
}

/// Run the stats command: per-language totals and completion against the
/// default language's key set.
pub fn run_stats_command(
    path: PathBuf,
    lang_filter: Option<String>,
    json: bool,
) -> Result<(), String> {
    validate_project_path(&path)?;
    if let Some(lang) = &lang_filter {
        validate_language_code(lang)?;
    }

    let spinner = progress::spinner("Reading string tables...");
    let Some(config) = detect(&path) else {
        spinner.finish_with_message("❌ No string tables found");
        return Err(format!("No string tables found under {}", path.display()));
    };

    let default_keys: BTreeSet<String> =
        StringTable::load(config.table_file_path(&config.default_language)).keys();

    let codes: Vec<String> = config
        .available_languages
        .iter()
        .filter(|code| match &lang_filter {
            Some(lang) => *code == lang,
            None => true,
        })
        .cloned()
        .collect();

    if codes.is_empty() {
        spinner.finish_with_message("❌ No languages matched");
        return Err(match lang_filter {
            Some(lang) => format!("No languages matching '{}' in {}", lang, path.display()),
            None => format!("No languages found in {}", path.display()),
        });
    }

    let languages: Vec<LanguageStats> = codes
        .par_iter()
        .map(|code| {
            let entries = StringTable::load(config.table_file_path(code)).entries();
            let total = entries.len();
            let empty_values = entries.iter().filter(|entry| entry.value.is_empty()).count();
            let translated = entries
                .iter()
                .filter(|entry| !entry.value.is_empty() && default_keys.contains(&entry.key))
                .count();
            let missing = default_keys
                .iter()
                .filter(|key| !entries.iter().any(|entry| entry.key == **key))
                .count();
            LanguageStats {
                language: code.clone(),
                total,
                empty_values,
                missing,
                completion_percent: completion_percent(translated, default_keys.len()),
            }
        })
        .collect();

    spinner.finish_with_message(format!("✅ Analyzed {} language(s)", languages.len()));

    let report = StatsReport {
        project: lprojkit::project_name(&path),
        default_language: config.default_language.clone(),
        table: config.selected_table_name.clone(),
        unique_keys: default_keys.len(),
        languages,
    };

    if json {
        let body = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("Failed to serialize statistics: {}", e))?;
        println!("{}", body);
        return Ok(());
    }

    println!("=== Stats ===");
    println!("Project: {}", report.project);
    println!("Table: {}", report.table);
    println!(
        "Default language: {}",
        language::display_name(&report.default_language)
    );
    println!("Unique keys: {}", report.unique_keys);

    for stats in &report.languages {
        println!("\nLanguage: {}", language::display_name(&stats.language));
        println!("  Total: {}", stats.total);
        println!("  Empty values: {}", stats.empty_values);
        println!("  Missing: {}", stats.missing);
        println!("  Completion: {:.2}%", stats.completion_percent);
    }

    Ok(())
}
