//! Line-preserving reader and editor for Apple `.strings` tables.
//!
//! A [`StringTable`] keeps the file verbatim as a list of lines. Edits touch
//! only the lines they must: updating a key rewrites that key's line,
//! inserting a key splices a three-line block at its sorted position, and
//! deleting a key removes the entry line together with its attached comment
//! and spacing. Every other line (comments, blank lines, ordering,
//! unrecognized text) survives untouched.

use std::collections::{BTreeMap, BTreeSet};
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{error::Error, traits::Parser};

// Static regex pattern for a whole entry line.
lazy_static! {
    static ref ENTRY_LINE: Regex = Regex::new(r#"^\s*"(.+?)"\s*=\s*"(.*?)";\s*$"#).unwrap();
}

/// Comment line written above entries inserted by [`StringTable::patch`].
pub const INSERTED_ENTRY_COMMENT: &str = "/* No comment provided by engineer. */";

/// A single key-value pair from a `.strings` table.
///
/// Its `Display` form is the canonical entry line: `"key" = "value";`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The key for this localization entry. Never empty.
    pub key: String,
    /// The value for this localization entry. May be empty.
    pub value: String,
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\" = \"{}\";", self.key, self.value)
    }
}

/// Parses an entry from one line, if the whole line is one.
///
/// An entry line is `"key" = "value";` with optional surrounding whitespace.
/// The key must be non-empty; the value may be empty. Escape sequences inside
/// the quotes are kept verbatim.
pub fn entry_from_line(line: &str) -> Option<Entry> {
    ENTRY_LINE.captures(line).map(|captures| Entry {
        key: captures[1].to_string(),
        value: captures[2].to_string(),
    })
}

/// An Apple `.strings` file held as its exact sequence of lines.
///
/// A missing file is the empty table (no lines); an existing empty file is a
/// single empty line. The distinction keeps writes byte-faithful.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringTable {
    /// The file content split on `'\n'`, including any trailing empty segment.
    pub lines: Vec<String>,
}

impl StringTable {
    /// Creates an empty table, as if the file did not exist.
    pub fn new() -> Self {
        StringTable { lines: Vec::new() }
    }

    /// Reads a table from disk. A missing or unreadable file yields the empty
    /// table; parsing itself never fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        Self::read_from(path).unwrap_or_default()
    }

    /// All entries in document order. Duplicate keys appear once per line.
    pub fn entries(&self) -> Vec<Entry> {
        self.lines
            .iter()
            .filter_map(|line| entry_from_line(line))
            .collect()
    }

    /// All entries sorted by key ascending, for presentation.
    pub fn sorted_entries(&self) -> Vec<Entry> {
        let mut entries = self.entries();
        entries.sort_by(|a, b| a.key.cmp(&b.key));
        entries
    }

    /// The set of keys defined in this table.
    pub fn keys(&self) -> BTreeSet<String> {
        self.entries().into_iter().map(|entry| entry.key).collect()
    }

    /// Applies key-value pairs to this table.
    ///
    /// A key already in the table has its line rewritten to the canonical
    /// form, but only when the trimmed line differs from it (so untouched
    /// entries keep their indentation). A key not in the table is inserted in
    /// ascending key order relative to all other keys, as a blank line, the
    /// [`INSERTED_ENTRY_COMMENT`] line, and the entry line. When a table has
    /// the same key on several lines, the last one is the one patched.
    pub fn patch(&mut self, entries: &BTreeMap<String, String>) -> PatchReport {
        let mut report = PatchReport::default();
        let existing = key_line_indices(&self.lines);

        let mut new_keys = Vec::new();
        for (key, value) in entries {
            match existing.get(key) {
                Some(&index) => {
                    let canonical = Entry {
                        key: key.clone(),
                        value: value.clone(),
                    }
                    .to_string();
                    if self.lines[index].trim() != canonical {
                        self.lines[index] = canonical;
                        report.updated += 1;
                    }
                }
                None => new_keys.push(key.as_str()),
            }
        }

        let mut all_keys: Vec<&str> = existing
            .keys()
            .map(String::as_str)
            .chain(new_keys.iter().copied())
            .collect();
        all_keys.sort_unstable();

        for key in new_keys {
            let entry = Entry {
                key: key.to_string(),
                value: entries[key].clone(),
            };
            let position = all_keys
                .binary_search(&key)
                .unwrap_or_else(|position| position);
            let insert_at = if position == 0 {
                0
            } else {
                // Earlier keys in this loop are already spliced in, so the
                // predecessor is always findable; the fallback appends.
                match last_entry_line(&self.lines, all_keys[position - 1]) {
                    Some(index) => index + 1,
                    None => self.lines.len(),
                }
            };
            self.lines.splice(
                insert_at..insert_at,
                [
                    String::new(),
                    INSERTED_ENTRY_COMMENT.to_string(),
                    entry.to_string(),
                ],
            );
            report.inserted_keys.push(entry.key);
        }

        report
    }

    /// Removes every entry whose key is in `keys`, along with the whole-line
    /// comments directly above it and the blank lines above those. Returns
    /// the number of entries removed.
    pub fn delete_keys(&mut self, keys: &BTreeSet<String>) -> usize {
        let mut kept: Vec<String> = Vec::with_capacity(self.lines.len());
        let mut removed = 0;

        for line in &self.lines {
            if let Some(entry) = entry_from_line(line) {
                if keys.contains(&entry.key) {
                    while kept.last().is_some_and(|last| is_whole_line_comment(last)) {
                        kept.pop();
                    }
                    while kept.last().is_some_and(|last| last.trim().is_empty()) {
                        kept.pop();
                    }
                    removed += 1;
                    continue;
                }
            }
            kept.push(line.clone());
        }

        if removed > 0 {
            self.lines = kept;
        }
        removed
    }
}

impl Default for StringTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for StringTable {
    fn from_reader<R: std::io::BufRead>(mut reader: R) -> Result<Self, Error> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Ok(from_content(&content))
    }

    fn to_writer<W: std::io::Write>(&self, mut writer: W) -> Result<(), Error> {
        writer
            .write_all(self.lines.join("\n").as_bytes())
            .map_err(Error::Io)
    }

    /// Override default file reading to support BOM-aware decoding (Xcode
    /// historically wrote `.strings` as UTF-16).
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let file = File::open(path).map_err(Error::Io)?;
        let mut decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
            .encoding(Some(encoding_rs::UTF_8))
            .bom_override(true)
            .build(file);

        let mut decoded = String::new();
        decoder.read_to_string(&mut decoded).map_err(Error::Io)?;

        Ok(from_content(&decoded))
    }
}

/// The changes one [`StringTable::patch`] call made.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchReport {
    /// Entries whose line was rewritten with a new value.
    pub updated: usize,
    /// Keys newly inserted with the boilerplate comment, in insertion order.
    pub inserted_keys: Vec<String>,
}

impl PatchReport {
    /// Number of entries newly inserted.
    pub fn inserted(&self) -> usize {
        self.inserted_keys.len()
    }

    /// True when the patch changed at least one line.
    pub fn changed(&self) -> bool {
        self.updated > 0 || !self.inserted_keys.is_empty()
    }
}

/// Patches the table at `path` and writes it back only when something
/// changed. The parent directory is created when a write happens, so patching
/// into a not-yet-localized `.lproj` directory works.
pub fn patch_file(path: &Path, entries: &BTreeMap<String, String>) -> Result<PatchReport, Error> {
    let mut table = StringTable::load(path);
    let report = table.patch(entries);
    if report.changed() {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        table.write_to(path)?;
    }
    Ok(report)
}

/// Deletes keys from the table at `path` and writes it back only when at
/// least one entry was removed. A missing file is left missing and counts
/// zero removals.
pub fn delete_keys_in_file(path: &Path, keys: &BTreeSet<String>) -> Result<usize, Error> {
    let mut table = StringTable::load(path);
    let removed = table.delete_keys(keys);
    if removed > 0 {
        table.write_to(path)?;
    }
    Ok(removed)
}

fn from_content(content: &str) -> StringTable {
    StringTable {
        lines: content.split('\n').map(str::to_string).collect(),
    }
}

fn key_line_indices(lines: &[String]) -> BTreeMap<String, usize> {
    let mut indices = BTreeMap::new();
    for (index, line) in lines.iter().enumerate() {
        if let Some(entry) = entry_from_line(line) {
            indices.insert(entry.key, index);
        }
    }
    indices
}

fn last_entry_line(lines: &[String], key: &str) -> Option<usize> {
    lines
        .iter()
        .rposition(|line| entry_from_line(line).is_some_and(|entry| entry.key == key))
}

fn is_whole_line_comment(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with("/*") && trimmed.ends_with("*/")
}
