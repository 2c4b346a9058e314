#![forbid(unsafe_code)]
//! Localization resource engine for Apple-style `.lproj` projects.
//!
//! Discovers `<language>.lproj` directories, infers a project configuration,
//! and edits `.strings` tables line by line: imports merge translation rows
//! into every language's table, deletions clean a key out of all of them,
//! and untouched lines survive byte for byte.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use lprojkit::{detect, import_rows, read_rows, ImportOptions, NullProgress};
//!
//! let config = detect(Path::new("MyApp")).ok_or("no localizations found")?;
//! let rows = read_rows(Path::new("translations.csv"), None)?;
//! let options = ImportOptions::new(&config.localization_root, &config.default_language)
//!     .with_table_name(&config.selected_table_name);
//! let report = import_rows(&rows, &options, &NullProgress)?;
//! println!("updated {}, added {}", report.updated, report.inserted);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Layout
//!
//! - [`scan`]: find language directories, with vendor/build trees excluded
//! - [`detect`]: infer the default language and table name of a project
//! - [`table`]: the line-preserving `.strings` codec (parse, patch, delete)
//! - [`locale`]: locale identifier → `.lproj` directory mapping
//! - [`source`]: CSV/TSV/JSON translation source readers
//! - [`import`] / [`delete`]: the engines driving the codec across a project
//! - [`store`]: recently opened projects with their detected configuration

pub mod delete;
pub mod detect;
pub mod error;
pub mod import;
pub mod language;
pub mod locale;
pub mod progress;
pub mod scan;
pub mod source;
pub mod store;
pub mod table;
pub mod traits;

// Re-export most used types for easy consumption
pub use crate::{
    delete::{DeleteOptions, DeleteReport, delete_keys},
    detect::{DEFAULT_TABLE_NAME, ProjectConfig, detect, project_name},
    error::Error,
    import::{ImportOptions, ImportReport, import_rows},
    progress::{NullProgress, ProgressSink},
    scan::{LanguageDirectory, language_directories},
    source::{SourceFormat, TranslationRow, read_rows},
    store::{ProjectStore, RecentProject},
    table::{Entry, PatchReport, StringTable},
    traits::Parser,
};
