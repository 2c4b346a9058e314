//! All error types for the lprojkit crate.
//!
//! These are returned from all fallible operations (scanning, importing, deleting, etc.).

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parse error: {0}")]
    CsvParse(#[from] csv::Error),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("project path not found: {}", .0.display())]
    ProjectNotFound(PathBuf),

    #[error("no keys provided to delete")]
    EmptyKeys,

    #[error("invalid translation source: {0}")]
    InvalidSource(String),

    #[error("translation source missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("unsupported locale: {0}")]
    UnsupportedLocale(String),
}

impl Error {
    /// Creates a new invalid-source error from any message.
    pub fn invalid_source(message: impl Into<String>) -> Self {
        Error::InvalidSource(message.into())
    }

    /// Creates a new unsupported-locale error.
    pub fn unsupported_locale(locale: impl Into<String>) -> Self {
        Error::UnsupportedLocale(locale.into())
    }
}
