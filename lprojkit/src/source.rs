//! Readers for upstream translation sources.
//!
//! Translation batches arrive as spreadsheet exports (CSV/TSV) or JSON. All
//! readers produce the same normalized row list; the import engine is
//! agnostic to where the rows came from. Source problems abort the whole
//! import before any table file is touched.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Required column headers of a delimited source.
pub const BUNDLE_COLUMN: &str = "Bundle Code";
pub const LOCALE_COLUMN: &str = "Locale";
pub const KEY_COLUMN: &str = "Text Key";
pub const VALUE_COLUMN: &str = "Text Value";

/// One translation from an upstream source: which bundle it belongs to, the
/// locale it targets, and the key/value pair itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationRow {
    pub bundle: String,
    pub locale: String,
    pub key: String,
    pub value: String,
}

/// Supported source file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    Tsv,
    Json,
}

impl SourceFormat {
    /// Infers the format from a file extension, case-insensitively.
    pub fn from_path(path: &Path) -> Option<SourceFormat> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "csv" => Some(SourceFormat::Csv),
            "tsv" | "tab" => Some(SourceFormat::Tsv),
            "json" => Some(SourceFormat::Json),
            _ => None,
        }
    }
}

impl FromStr for SourceFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "csv" => Ok(SourceFormat::Csv),
            "tsv" | "tab" => Ok(SourceFormat::Tsv),
            "json" => Ok(SourceFormat::Json),
            other => Err(Error::invalid_source(format!(
                "unknown source format: {other}"
            ))),
        }
    }
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceFormat::Csv => write!(f, "csv"),
            SourceFormat::Tsv => write!(f, "tsv"),
            SourceFormat::Json => write!(f, "json"),
        }
    }
}

/// Reads translation rows from a source file.
///
/// `format` may be given explicitly; otherwise it is inferred from the file
/// extension. Cell whitespace is trimmed and rows without a locale or a key
/// are dropped.
pub fn read_rows(path: &Path, format: Option<SourceFormat>) -> Result<Vec<TranslationRow>, Error> {
    let format = match format {
        Some(format) => format,
        None => SourceFormat::from_path(path).ok_or_else(|| {
            Error::invalid_source(format!(
                "cannot infer source format from {}",
                path.display()
            ))
        })?,
    };
    let file = File::open(path)
        .map_err(|error| Error::invalid_source(format!("cannot read {}: {error}", path.display())))?;
    rows_from_reader(BufReader::new(file), format)
}

/// Reads translation rows from any reader in the given format.
pub fn rows_from_reader<R: BufRead>(
    reader: R,
    format: SourceFormat,
) -> Result<Vec<TranslationRow>, Error> {
    match format {
        SourceFormat::Csv => delimited_rows(reader, b','),
        SourceFormat::Tsv => delimited_rows(reader, b'\t'),
        SourceFormat::Json => json_rows(reader),
    }
}

fn delimited_rows<R: BufRead>(reader: R, delimiter: u8) -> Result<Vec<TranslationRow>, Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|header| header.trim_start_matches('\u{feff}').trim() == name)
    };

    let bundle_at = column(BUNDLE_COLUMN);
    let locale_at = column(LOCALE_COLUMN);
    let key_at = column(KEY_COLUMN);
    let value_at = column(VALUE_COLUMN);
    let (Some(bundle_at), Some(locale_at), Some(key_at), Some(value_at)) =
        (bundle_at, locale_at, key_at, value_at)
    else {
        let missing = [
            (BUNDLE_COLUMN, bundle_at),
            (LOCALE_COLUMN, locale_at),
            (KEY_COLUMN, key_at),
            (VALUE_COLUMN, value_at),
        ]
        .iter()
        .filter(|(_, position)| position.is_none())
        .map(|(name, _)| name.to_string())
        .collect();
        return Err(Error::MissingColumns(missing));
    };

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let field = |index: usize| record.get(index).unwrap_or("").trim().to_string();
        let row = TranslationRow {
            bundle: field(bundle_at),
            locale: field(locale_at),
            key: field(key_at),
            value: field(value_at),
        };
        if row.locale.is_empty() || row.key.is_empty() {
            continue;
        }
        rows.push(row);
    }
    Ok(rows)
}

// Accepts either `{"entries": [...]}` or a bare array of rows.
#[derive(Deserialize)]
#[serde(untagged)]
enum SourceDocument {
    Wrapped { entries: Vec<TranslationRow> },
    Rows(Vec<TranslationRow>),
}

fn json_rows<R: BufRead>(reader: R) -> Result<Vec<TranslationRow>, Error> {
    let document: SourceDocument = serde_json::from_reader(reader)?;
    let rows = match document {
        SourceDocument::Wrapped { entries } => entries,
        SourceDocument::Rows(rows) => rows,
    };
    Ok(rows
        .into_iter()
        .map(|row| TranslationRow {
            bundle: row.bundle.trim().to_string(),
            locale: row.locale.trim().to_string(),
            key: row.key.trim().to_string(),
            value: row.value.trim().to_string(),
        })
        .filter(|row| !row.locale.is_empty() && !row.key.is_empty())
        .collect())
}
