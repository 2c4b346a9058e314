//! CLI library for testing purposes

pub mod validation;

pub use validation::{validate_language_code, validate_project_path};
