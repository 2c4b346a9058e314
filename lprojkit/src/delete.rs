//! The delete engine.
//!
//! Removes keys from one table across every language directory of a project.
//! Directories are found with the scanner's exclusion rules, so vendored
//! copies of a project never lose keys. Files are independent: a failed
//! write is reported and the remaining files are still cleaned.

use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{
    detect::DEFAULT_TABLE_NAME,
    error::Error,
    progress::ProgressSink,
    scan, table,
};

/// Where and how a deletion applies.
#[derive(Debug, Clone)]
pub struct DeleteOptions {
    /// Directory containing the `<language>.lproj` directories.
    pub root: PathBuf,
    /// Table name to clean in each language directory.
    pub table_name: String,
}

impl DeleteOptions {
    /// Options for the `"Localizable"` table under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DeleteOptions {
            root: root.into(),
            table_name: DEFAULT_TABLE_NAME.to_string(),
        }
    }

    /// Cleans `<table_name>.strings` instead of the default table.
    pub fn with_table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = table_name.into();
        self
    }
}

/// Aggregated outcome of one deletion pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteReport {
    /// Existing table files examined.
    pub files_processed: usize,
    /// Entries removed across all files.
    pub deleted: usize,
    /// Table files whose write failed.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub failed_files: Vec<PathBuf>,
}

/// Deletes `keys` from the configured table in every language directory.
///
/// Fails fast when `keys` is empty or the project root does not exist.
/// Directories without the table file are skipped; a file without any of the
/// keys counts as processed with zero deletions and is left untouched.
pub fn delete_keys(
    keys: &[String],
    options: &DeleteOptions,
    progress: &dyn ProgressSink,
) -> Result<DeleteReport, Error> {
    if keys.is_empty() {
        return Err(Error::EmptyKeys);
    }
    if !options.root.exists() {
        return Err(Error::ProjectNotFound(options.root.clone()));
    }

    progress.log("🗑️  Starting deletion process...");
    progress.log(&format!("📂 Project path: {}", options.root.display()));
    progress.log(&format!("   Keys to delete: {}", keys.len()));
    progress.log("");

    let key_set: BTreeSet<String> = keys.iter().cloned().collect();
    let directories = scan::language_directories(&options.root);
    progress.log(&format!("🔍 Found {} .lproj directories", directories.len()));
    progress.log("");
    progress.log("🧹 Cleaning files...");

    let mut report = DeleteReport::default();
    for directory in &directories {
        let path = directory.table_path(&options.table_name);
        if !path.is_file() {
            continue;
        }
        match table::delete_keys_in_file(&path, &key_set) {
            Ok(deleted) => {
                report.files_processed += 1;
                report.deleted += deleted;
                if deleted > 0 {
                    progress.log(&format!("   {}: deleted {deleted}", directory.code));
                }
            }
            Err(error) => {
                progress.log(&format!("   ❌ {}: {error}", directory.code));
                report.failed_files.push(path);
            }
        }
    }

    progress.log("");
    progress.log("✅ Deletion completed!");
    progress.log(&format!(
        "   • Processed: {} file(s)",
        report.files_processed
    ));
    progress.log(&format!("   • Deleted: {} key(s)", report.deleted));
    if !report.failed_files.is_empty() {
        progress.log(&format!(
            "   • Failed: {} file(s)",
            report.failed_files.len()
        ));
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use tempfile::tempdir;

    use super::*;
    use crate::progress::NullProgress;

    fn add_table(root: &Path, language: &str, table: &str, content: &str) {
        let directory = root.join(format!("{language}.lproj"));
        fs::create_dir_all(&directory).unwrap();
        fs::write(directory.join(format!("{table}.strings")), content).unwrap();
    }

    fn keys(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_delete_across_languages() {
        let temp = tempdir().unwrap();
        let content = "\"gone\" = \"x\";\n\"kept\" = \"y\";\n";
        add_table(temp.path(), "en", "Localizable", content);
        add_table(temp.path(), "es", "Localizable", content);

        let report = delete_keys(
            &keys(&["gone"]),
            &DeleteOptions::new(temp.path()),
            &NullProgress,
        )
        .unwrap();

        assert_eq!(report.files_processed, 2);
        assert_eq!(report.deleted, 2);
        for language in ["en", "es"] {
            let table = fs::read_to_string(
                temp.path().join(format!("{language}.lproj/Localizable.strings")),
            )
            .unwrap();
            assert!(!table.contains("gone"));
            assert!(table.contains("kept"));
        }
    }

    #[test]
    fn test_delete_requires_keys() {
        let temp = tempdir().unwrap();
        let error = delete_keys(&[], &DeleteOptions::new(temp.path()), &NullProgress).unwrap_err();
        assert!(matches!(error, Error::EmptyKeys));
    }

    #[test]
    fn test_delete_missing_project_fails() {
        let temp = tempdir().unwrap();
        let missing = temp.path().join("gone");
        let error = delete_keys(
            &keys(&["k"]),
            &DeleteOptions::new(&missing),
            &NullProgress,
        )
        .unwrap_err();
        assert!(matches!(error, Error::ProjectNotFound(path) if path == missing));
    }

    #[test]
    fn test_delete_skips_directories_without_the_table() {
        let temp = tempdir().unwrap();
        add_table(temp.path(), "en", "Localizable", "\"gone\" = \"x\";\n");
        fs::create_dir_all(temp.path().join("fr.lproj")).unwrap();

        let report = delete_keys(
            &keys(&["gone"]),
            &DeleteOptions::new(temp.path()),
            &NullProgress,
        )
        .unwrap();
        assert_eq!(report.files_processed, 1);
        assert_eq!(report.deleted, 1);
    }

    #[test]
    fn test_delete_unknown_keys_is_a_no_op() {
        let temp = tempdir().unwrap();
        let content = "\"kept\" = \"y\";\n";
        add_table(temp.path(), "en", "Localizable", content);

        let report = delete_keys(
            &keys(&["absent"]),
            &DeleteOptions::new(temp.path()),
            &NullProgress,
        )
        .unwrap();
        assert_eq!(report.files_processed, 1);
        assert_eq!(report.deleted, 0);
        assert_eq!(
            fs::read_to_string(temp.path().join("en.lproj/Localizable.strings")).unwrap(),
            content
        );
    }

    #[test]
    fn test_delete_never_touches_vendor_directories() {
        let temp = tempdir().unwrap();
        add_table(temp.path(), "en", "Localizable", "\"gone\" = \"x\";\n");
        let vendored = temp.path().join("Pods/Lib");
        add_table(&vendored, "en", "Localizable", "\"gone\" = \"x\";\n");

        let report = delete_keys(
            &keys(&["gone"]),
            &DeleteOptions::new(temp.path()),
            &NullProgress,
        )
        .unwrap();
        assert_eq!(report.files_processed, 1);
        assert_eq!(
            fs::read_to_string(vendored.join("en.lproj/Localizable.strings")).unwrap(),
            "\"gone\" = \"x\";\n"
        );
    }

    #[test]
    fn test_delete_with_custom_table_name() {
        let temp = tempdir().unwrap();
        add_table(temp.path(), "en", "Shop", "\"buy\" = \"Buy\";\n");
        add_table(temp.path(), "en", "Localizable", "\"buy\" = \"Buy\";\n");

        let options = DeleteOptions::new(temp.path()).with_table_name("Shop");
        let report = delete_keys(&keys(&["buy"]), &options, &NullProgress).unwrap();
        assert_eq!(report.deleted, 1);
        // Only the selected table is cleaned.
        assert_eq!(
            fs::read_to_string(temp.path().join("en.lproj/Localizable.strings")).unwrap(),
            "\"buy\" = \"Buy\";\n"
        );
    }
}
