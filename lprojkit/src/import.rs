//! The import merge engine.
//!
//! Takes normalized translation rows (from any [`crate::source`] reader),
//! resolves each row's locale to a language directory, fills keys that have
//! no default-language value, and patches one table file per directory.
//! Files are independent: one file's write failure is reported and counted,
//! and the remaining files are still patched.

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{
    detect::DEFAULT_TABLE_NAME,
    error::Error,
    locale,
    progress::ProgressSink,
    source::TranslationRow,
    table,
};

/// Where and how an import applies.
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Directory containing the `<language>.lproj` directories.
    pub root: PathBuf,
    /// Language whose table must end up holding every imported key.
    pub default_language: String,
    /// Table name to patch in each language directory.
    pub table_name: String,
}

impl ImportOptions {
    /// Options for the `"Localizable"` table under `root`.
    pub fn new(root: impl Into<PathBuf>, default_language: impl Into<String>) -> Self {
        ImportOptions {
            root: root.into(),
            default_language: default_language.into(),
            table_name: DEFAULT_TABLE_NAME.to_string(),
        }
    }

    /// Patches `<table_name>.strings` instead of the default table.
    pub fn with_table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = table_name.into();
        self
    }
}

/// Aggregated outcome of one import pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportReport {
    /// Table files patched, including ones that needed no change.
    pub files_processed: usize,
    /// Entry lines rewritten across all files.
    pub updated: usize,
    /// Entries newly inserted across all files.
    pub inserted: usize,
    /// Keys inserted into at least one file.
    #[serde(skip_serializing_if = "BTreeSet::is_empty", default)]
    pub inserted_keys: BTreeSet<String>,
    /// Source locales with no directory mapping; their rows were dropped.
    #[serde(skip_serializing_if = "BTreeSet::is_empty", default)]
    pub skipped_locales: BTreeSet<String>,
    /// Table files whose write failed.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub failed_files: Vec<PathBuf>,
}

/// Imports translation rows into the project's table files.
///
/// Keys that never appear for the default language are first added to it
/// with the key string as the value, so the default table stays complete.
/// Rows are then grouped by resolved language directory and each group is
/// applied with [`table::patch_file`]; rows with unmapped locales are
/// collected into the report instead of failing the batch.
pub fn import_rows(
    rows: &[TranslationRow],
    options: &ImportOptions,
    progress: &dyn ProgressSink,
) -> Result<ImportReport, Error> {
    if !options.root.exists() {
        return Err(Error::ProjectNotFound(options.root.clone()));
    }

    let default_directory = format!("{}.lproj", options.default_language);

    let all_keys: BTreeSet<&str> = rows.iter().map(|row| row.key.as_str()).collect();
    let default_keys: BTreeSet<&str> = rows
        .iter()
        .filter(|row| locale::resolve_directory(&row.locale) == Some(default_directory.as_str()))
        .map(|row| row.key.as_str())
        .collect();
    let missing: Vec<&str> = all_keys.difference(&default_keys).copied().collect();

    let mut synthesized = Vec::new();
    if !missing.is_empty() {
        progress.log(&format!(
            "🔑 Found {} key(s) without value in default language ({})",
            missing.len(),
            options.default_language
        ));
        progress.log("   Adding them with key as value...");

        // The source may only carry regional locales (e.g. "en_GB" for
        // "en.lproj"), so attribute the fallback rows to the first locale
        // resolving to the default directory.
        let default_locale = locale::default_locale_for_directory(&default_directory)
            .unwrap_or(options.default_language.as_str());
        for key in &missing {
            synthesized.push(TranslationRow {
                bundle: String::new(),
                locale: default_locale.to_string(),
                key: (*key).to_string(),
                value: (*key).to_string(),
            });
        }

        progress.log(&format!(
            "   ✓ Added {} key(s) to {}",
            missing.len(),
            options.default_language
        ));
        progress.log("");
    }

    let mut grouped: BTreeMap<String, BTreeMap<String, String>> = BTreeMap::new();
    let mut skipped_locales = BTreeSet::new();
    for row in rows.iter().chain(synthesized.iter()) {
        let Some(directory) = locale::resolve_directory(&row.locale) else {
            skipped_locales.insert(row.locale.clone());
            continue;
        };
        grouped
            .entry(directory.to_string())
            .or_default()
            .insert(row.key.clone(), row.value.clone());
    }

    if !skipped_locales.is_empty() {
        progress.log(&format!(
            "⚠️  Skipped unsupported locales: {}",
            skipped_locales.iter().cloned().collect::<Vec<_>>().join(", ")
        ));
        progress.log("");
    }

    progress.log(&format!("📝 Updating {} locale(s)...", grouped.len()));

    let mut report = ImportReport {
        skipped_locales,
        ..ImportReport::default()
    };
    for (directory, updates) in &grouped {
        let language = directory.trim_end_matches(".lproj");
        let path = options
            .root
            .join(directory)
            .join(format!("{}.strings", options.table_name));
        match table::patch_file(&path, updates) {
            Ok(patch) => {
                report.files_processed += 1;
                report.updated += patch.updated;
                report.inserted += patch.inserted();
                report
                    .inserted_keys
                    .extend(patch.inserted_keys.iter().cloned());
                if patch.changed() {
                    progress.log(&format!("   {language}"));
                    progress.log(&format!(
                        "   updated {}, added {}",
                        patch.updated,
                        patch.inserted()
                    ));
                    progress.log("");
                }
            }
            Err(error) => {
                progress.log(&format!("   ❌ {language}: {error}"));
                report.failed_files.push(path);
            }
        }
    }

    progress.log("");
    progress.log("✅ Import completed!");
    progress.log(&format!(
        "   • Processed: {} file(s)",
        report.files_processed
    ));
    progress.log(&format!("   • Updated: {}", report.updated));
    progress.log(&format!("   • Added: {}", report.inserted));
    if !report.failed_files.is_empty() {
        progress.log(&format!(
            "   • Failed: {} file(s)",
            report.failed_files.len()
        ));
    }
    if !report.inserted_keys.is_empty() {
        progress.log("");
        progress.log("➕ Added keys:");
        progress.log(&format!(
            "   {}",
            report
                .inserted_keys
                .iter()
                .cloned()
                .collect::<Vec<_>>()
                .join(", ")
        ));
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::fs;

    use tempfile::tempdir;

    use super::*;
    use crate::progress::NullProgress;

    fn row(locale: &str, key: &str, value: &str) -> TranslationRow {
        TranslationRow {
            bundle: "app".to_string(),
            locale: locale.to_string(),
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_import_groups_rows_by_locale_directory() {
        let temp = tempdir().unwrap();
        let rows = vec![
            row("es_ES", "greeting", "Hola"),
            row("en_GB", "greeting", "Hello"),
        ];
        let options = ImportOptions::new(temp.path(), "en");
        let report = import_rows(&rows, &options, &NullProgress).unwrap();

        assert_eq!(report.files_processed, 2);
        assert_eq!(report.inserted, 2);
        assert!(report.skipped_locales.is_empty());
        let spanish =
            fs::read_to_string(temp.path().join("es.lproj/Localizable.strings")).unwrap();
        assert!(spanish.contains("\"greeting\" = \"Hola\";"));
        let english =
            fs::read_to_string(temp.path().join("en.lproj/Localizable.strings")).unwrap();
        assert!(english.contains("\"greeting\" = \"Hello\";"));
    }

    #[test]
    fn test_import_fills_missing_default_language_keys() {
        let temp = tempdir().unwrap();
        let rows = vec![
            row("es_ES", "x", "equis"),
            row("es_ES", "y", "i griega"),
            row("en_GB", "x", "ex"),
        ];
        let options = ImportOptions::new(temp.path(), "en");
        let report = import_rows(&rows, &options, &NullProgress).unwrap();

        // "y" has no English row, so it lands in en.lproj with the key as value.
        let english =
            fs::read_to_string(temp.path().join("en.lproj/Localizable.strings")).unwrap();
        assert!(english.contains("\"y\" = \"y\";"));
        assert!(report.inserted_keys.contains("y"));
    }

    #[test]
    fn test_import_skips_unsupported_locales() {
        let temp = tempdir().unwrap();
        let rows = vec![row("es_ES", "greeting", "Hola"), row("xx_XX", "other", "?")];
        let options = ImportOptions::new(temp.path(), "es");
        let report = import_rows(&rows, &options, &NullProgress).unwrap();

        assert_eq!(
            report.skipped_locales,
            BTreeSet::from(["xx_XX".to_string()])
        );
        assert!(temp.path().join("es.lproj/Localizable.strings").exists());
        // Nothing else was created for the skipped locale.
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_import_missing_root_fails() {
        let temp = tempdir().unwrap();
        let missing = temp.path().join("gone");
        let error = import_rows(
            &[row("es_ES", "k", "v")],
            &ImportOptions::new(&missing, "es"),
            &NullProgress,
        )
        .unwrap_err();
        assert!(matches!(error, Error::ProjectNotFound(path) if path == missing));
    }

    #[test]
    fn test_import_is_idempotent() {
        let temp = tempdir().unwrap();
        let rows = vec![row("es_ES", "greeting", "Hola")];
        let options = ImportOptions::new(temp.path(), "es");
        import_rows(&rows, &options, &NullProgress).unwrap();
        let before =
            fs::read_to_string(temp.path().join("es.lproj/Localizable.strings")).unwrap();

        let second = import_rows(&rows, &options, &NullProgress).unwrap();
        assert_eq!(second.updated, 0);
        assert_eq!(second.inserted, 0);
        let after =
            fs::read_to_string(temp.path().join("es.lproj/Localizable.strings")).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_import_last_row_wins_per_key() {
        let temp = tempdir().unwrap();
        let rows = vec![row("es_ES", "greeting", "Buenas"), row("es_ES", "greeting", "Hola")];
        let options = ImportOptions::new(temp.path(), "es");
        import_rows(&rows, &options, &NullProgress).unwrap();
        let spanish =
            fs::read_to_string(temp.path().join("es.lproj/Localizable.strings")).unwrap();
        assert!(spanish.contains("\"greeting\" = \"Hola\";"));
        assert!(!spanish.contains("Buenas"));
    }

    #[test]
    fn test_import_with_custom_table_name() {
        let temp = tempdir().unwrap();
        let rows = vec![row("es_ES", "buy", "Comprar")];
        let options = ImportOptions::new(temp.path(), "es").with_table_name("Shop");
        import_rows(&rows, &options, &NullProgress).unwrap();
        assert!(temp.path().join("es.lproj/Shop.strings").exists());
    }

    #[test]
    fn test_import_default_without_locale_mapping_skips_fallback() {
        // No locale resolves to Base.lproj, so the synthesized fallback rows
        // end up skipped rather than guessed into a directory.
        let temp = tempdir().unwrap();
        let rows = vec![row("es_ES", "greeting", "Hola")];
        let options = ImportOptions::new(temp.path(), "Base");
        let report = import_rows(&rows, &options, &NullProgress).unwrap();
        assert_eq!(report.skipped_locales, BTreeSet::from(["Base".to_string()]));
        assert!(!temp.path().join("Base.lproj").exists());
    }

    #[test]
    fn test_import_logs_summary() {
        let temp = tempdir().unwrap();
        let messages = RefCell::new(Vec::new());
        let sink = |message: &str| messages.borrow_mut().push(message.to_string());
        let rows = vec![row("es_ES", "greeting", "Hola")];
        import_rows(&rows, &ImportOptions::new(temp.path(), "es"), &sink).unwrap();

        let messages = messages.into_inner();
        assert!(messages.iter().any(|message| message == "✅ Import completed!"));
        assert!(messages.iter().any(|message| message.contains("➕ Added keys:")));
    }
}
