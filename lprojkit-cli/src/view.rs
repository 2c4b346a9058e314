use std::path::PathBuf;

use rayon::prelude::*;
use serde_json::json;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use lprojkit::scan::LanguageDirectory;
use lprojkit::table::Entry;
use lprojkit::{StringTable, detect, language};

use crate::progress;
use crate::validation::{validate_language_code, validate_project_path};

/// Width assumed when the terminal size cannot be queried.
const FALLBACK_TERMINAL_WIDTH: usize = 80;

/// Run the view command: print the selected table's entries per language.
pub fn run_view_command(
    path: PathBuf,
    lang_filter: Option<String>,
    full: bool,
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

    let directories: Vec<LanguageDirectory> = config
        .available_languages
        .iter()
        .map(|code| LanguageDirectory {
            code: code.clone(),
            path: config
                .localization_root
                .join(format!("{code}.lproj")),
        })
        .filter(|directory| match &lang_filter {
            Some(lang) => directory.code == *lang || directory.matches_language(lang),
            None => true,
        })
        .collect();

    if directories.is_empty() {
        spinner.finish_with_message("❌ No languages matched");
        return Err(match lang_filter {
            Some(lang) => format!("No languages matching '{}' in {}", lang, path.display()),
            None => format!("No languages found in {}", path.display()),
        });
    }

    let tables: Vec<(String, Vec<Entry>)> = directories
        .par_iter()
        .map(|directory| {
            let table = StringTable::load(directory.table_path(&config.selected_table_name));
            (directory.code.clone(), table.entries())
        })
        .collect();

    spinner.finish_with_message(format!("✅ Found {} language(s)", tables.len()));

    if json {
        let languages: Vec<serde_json::Value> = tables
            .iter()
            .map(|(code, entries)| {
                json!({
                    "language": code,
                    "table": config.selected_table_name,
                    "entries": entries
                        .iter()
                        .map(|entry| json!({ "key": entry.key, "value": entry.value }))
                        .collect::<Vec<_>>(),
                })
            })
            .collect();
        let body = serde_json::to_string_pretty(&languages)
            .map_err(|e| format!("Failed to serialize entries: {}", e))?;
        println!("{}", body);
        return Ok(());
    }

    let truncate = !full && atty::is(atty::Stream::Stdout);
    let terminal_width = crossterm::terminal::size()
        .map(|(width, _)| width as usize)
        .unwrap_or(FALLBACK_TERMINAL_WIDTH);

    for (code, entries) in &tables {
        println!("\n=== {} ===", language::display_name(code));
        println!("Entries: {}", entries.len());

        let key_width = entries
            .iter()
            .map(|entry| entry.key.width())
            .max()
            .unwrap_or(0);
        // Two-space indent, " = " separator.
        let value_width = terminal_width.saturating_sub(key_width + 5);

        for entry in entries {
            let padding = " ".repeat(key_width.saturating_sub(entry.key.width()));
            let value = if truncate {
                truncate_to_width(&entry.value, value_width)
            } else {
                entry.value.clone()
            };
            println!("  {}{} = {}", entry.key, padding, value);
        }
    }

    Ok(())
}

fn truncate_to_width(value: &str, max_width: usize) -> String {
    if value.width() <= max_width {
        return value.to_string();
    }

    let budget = max_width.saturating_sub(3);
    let mut truncated = String::new();
    let mut used = 0;
    for character in value.chars() {
        let width = character.width().unwrap_or(0);
        if used + width > budget {
            break;
        }
        truncated.push(character);
        used += width;
    }
    truncated.push_str("...");
    truncated
}
