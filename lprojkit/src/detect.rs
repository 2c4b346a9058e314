//! Project configuration inference.
//!
//! Scans a project tree for language directories, works out which `.strings`
//! table their contents have in common, and picks a default language by a
//! fixed priority. The result is a [`ProjectConfig`] the import and delete
//! engines (and the CLI) run against.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::scan::{self, LanguageDirectory};

/// Table name assumed when nothing better can be inferred.
pub const DEFAULT_TABLE_NAME: &str = "Localizable";

/// File extension of string-table files, without the dot.
pub const TABLE_FILE_EXTENSION: &str = "strings";

/// Table reserved for bundle metadata; never a translation-table candidate.
pub const PLATFORM_METADATA_TABLE: &str = "InfoPlist";

/// Everything the engines need to know about one project's localizations.
///
/// Older stored configs predate table-name inference, so the two table-name
/// fields fall back to `"Localizable"` when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Language code whose table is the completeness baseline.
    pub default_language: String,
    /// Directory containing the language directories.
    pub localization_root: PathBuf,
    /// Language codes in priority order, default language first.
    pub available_languages: Vec<String>,
    /// Table names shared across the language directories, sorted ascending.
    #[serde(default = "default_table_names")]
    pub available_table_names: Vec<String>,
    /// The table the engines operate on.
    #[serde(default = "default_selected_table")]
    pub selected_table_name: String,
}

fn default_table_names() -> Vec<String> {
    vec![DEFAULT_TABLE_NAME.to_string()]
}

fn default_selected_table() -> String {
    DEFAULT_TABLE_NAME.to_string()
}

impl ProjectConfig {
    /// Path of the selected table file for one language.
    pub fn table_file_path(&self, language: &str) -> PathBuf {
        self.localization_root
            .join(format!("{language}.lproj"))
            .join(format!("{}.{}", self.selected_table_name, TABLE_FILE_EXTENSION))
    }

    /// Directory name of the default language (`"es"` → `"es.lproj"`).
    pub fn default_directory_name(&self) -> String {
        format!("{}.lproj", self.default_language)
    }
}

/// Infers a [`ProjectConfig`] from the language directories under `root`.
///
/// Table-name inference: names present in every language directory win; when
/// there are none, names present in at least half the directories (rounded
/// up); when still none, `"Localizable"`. Among the inferred names,
/// `"Localizable"` is preferred, then the alphabetically first. Directories
/// without the selected table file are dropped, and the default language is
/// the highest-priority remaining code (es, then en, then Base, then
/// alphabetical). Returns `None` when no directory holds the selected table.
pub fn detect(root: &Path) -> Option<ProjectConfig> {
    let directories = scan::language_directories(root);
    if directories.is_empty() {
        return None;
    }

    let mut name_counts: BTreeMap<String, usize> = BTreeMap::new();
    for directory in &directories {
        for name in table_name_candidates(&directory.path) {
            *name_counts.entry(name).or_insert(0) += 1;
        }
    }

    let mut common_names: Vec<String> = name_counts
        .iter()
        .filter(|(_, count)| **count == directories.len())
        .map(|(name, _)| name.clone())
        .collect();
    if common_names.is_empty() {
        let threshold = directories.len().div_ceil(2);
        common_names = name_counts
            .iter()
            .filter(|(_, count)| **count >= threshold)
            .map(|(name, _)| name.clone())
            .collect();
    }
    if common_names.is_empty() {
        common_names = vec![DEFAULT_TABLE_NAME.to_string()];
    }

    let selected_table_name = if common_names.iter().any(|name| name == DEFAULT_TABLE_NAME) {
        DEFAULT_TABLE_NAME.to_string()
    } else {
        common_names[0].clone()
    };

    let mut localized: Vec<&LanguageDirectory> = directories
        .iter()
        .filter(|directory| directory.table_path(&selected_table_name).is_file())
        .collect();
    if localized.is_empty() {
        return None;
    }
    localized.sort_by(|a, b| {
        language_priority(&b.code)
            .cmp(&language_priority(&a.code))
            .then_with(|| a.code.cmp(&b.code))
    });

    let localization_root = localized[0]
        .path
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .to_path_buf();

    Some(ProjectConfig {
        default_language: localized[0].code.clone(),
        localization_root,
        available_languages: localized
            .iter()
            .map(|directory| directory.code.clone())
            .collect(),
        available_table_names: common_names,
        selected_table_name,
    })
}

/// The stem of the first `*.xcodeproj` entry directly under `path`, else the
/// final path component.
pub fn project_name(path: &Path) -> String {
    if let Ok(entries) = fs::read_dir(path) {
        for entry in entries.flatten() {
            let entry_path = entry.path();
            if entry_path.extension().and_then(|extension| extension.to_str()) == Some("xcodeproj")
            {
                if let Some(stem) = entry_path.file_stem().and_then(|stem| stem.to_str()) {
                    return stem.to_string();
                }
            }
        }
    }
    path.file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default()
        .to_string()
}

/// Table names offered by one language directory: stems of its direct-child
/// `.strings` files, minus the platform metadata table.
fn table_name_candidates(directory: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(directory) else {
        return Vec::new();
    };
    entries
        .flatten()
        .filter_map(|entry| {
            let path = entry.path();
            if !path.is_file()
                || path.extension().and_then(|extension| extension.to_str())
                    != Some(TABLE_FILE_EXTENSION)
            {
                return None;
            }
            let stem = path.file_stem()?.to_str()?;
            if stem == PLATFORM_METADATA_TABLE {
                return None;
            }
            Some(stem.to_string())
        })
        .collect()
}

fn language_priority(code: &str) -> u8 {
    match code {
        "es" => 3,
        "en" => 2,
        "Base" => 1,
        _ => 0,
    }
}
