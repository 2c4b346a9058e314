//! Discovery of `.lproj` language directories under a project root.
//!
//! Uses the same walker as the CLI's path handling ([`ignore::WalkBuilder`])
//! with vendor checkouts, build products and hidden directories filtered out,
//! so detection and imports never touch third-party copies of a project's
//! string tables.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use unic_langid::LanguageIdentifier;

/// Directory names that hold third-party or generated code, never the
/// project's own localizations.
pub const EXCLUDED_DIRECTORY_NAMES: &[&str] = &[
    "Pods",
    "Carthage",
    "node_modules",
    "Vendor",
    "vendor",
    "DerivedData",
    "Build",
    "build",
];

/// Directory extensions treated as opaque packages; their contents are never
/// scanned.
pub const EXCLUDED_DIRECTORY_EXTENSIONS: &[&str] =
    &["bundle", "framework", "xcframework", "app", "appex", "xcarchive"];

/// A `<code>.lproj` directory discovered under a project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageDirectory {
    /// Language identifier taken from the directory name (e.g. `"en-US"`,
    /// `"Base"`).
    pub code: String,
    /// Path to the directory itself.
    pub path: PathBuf,
}

impl LanguageDirectory {
    /// Path of the named `.strings` table inside this directory.
    pub fn table_path(&self, table_name: &str) -> PathBuf {
        self.path.join(format!("{table_name}.strings"))
    }

    /// Parses the directory's code as a BCP 47 identifier. `Base.lproj` and
    /// other non-language directories yield `None`.
    pub fn parse_language_identifier(&self) -> Option<LanguageIdentifier> {
        self.code.parse().ok()
    }

    /// Check if this directory localizes the given language, comparing
    /// primary language subtags so `en-US.lproj` matches `"en"`.
    pub fn matches_language(&self, lang: &str) -> bool {
        match (
            self.parse_language_identifier(),
            lang.parse::<LanguageIdentifier>(),
        ) {
            (Some(dir_lang), Ok(target_lang)) => dir_lang.language == target_lang.language,
            _ => false,
        }
    }
}

/// Extracts the language identifier from an `.lproj` path
/// (`"Resources/es.lproj"` → `"es"`).
pub fn language_identifier(path: &Path) -> Option<&str> {
    path.file_stem().and_then(|stem| stem.to_str())
}

fn is_excluded(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
        return false;
    };
    if EXCLUDED_DIRECTORY_NAMES.contains(&name) {
        return true;
    }
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| EXCLUDED_DIRECTORY_EXTENSIONS.contains(&extension))
}

/// Walks `root` and returns every `.lproj` directory, sorted by path.
///
/// The root itself is exempt from the exclusion rules, so a project checked
/// out into a directory named `build` still scans. A missing or unreadable
/// root yields an empty list.
pub fn language_directories(root: &Path) -> Vec<LanguageDirectory> {
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .hidden(true)
        .filter_entry(|entry| entry.depth() == 0 || !is_excluded(entry.path()))
        .build();

    let mut directories = Vec::new();
    for entry in walker.flatten() {
        let path = entry.path();
        let is_directory = entry.file_type().is_some_and(|file_type| file_type.is_dir());
        if !is_directory || path.extension().and_then(|extension| extension.to_str()) != Some("lproj")
        {
            continue;
        }
        if let Some(code) = language_identifier(path) {
            directories.push(LanguageDirectory {
                code: code.to_string(),
                path: path.to_path_buf(),
            });
        }
    }
    directories.sort_by(|a, b| a.path.cmp(&b.path));
    directories
}
