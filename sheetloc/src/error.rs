//! All error types for the sheetloc crate.
//!
//! These are returned from all fallible operations (configuration loading,
//! fetching, processing, export). Row-level problems are *not* errors; they
//! are collected as [`crate::processor::ParseIssue`] values and reported.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("provider `{name}` error: {message}")]
    Provider { name: String, message: String },

    #[error("sheet `{0}` not found")]
    SheetNotFound(String),

    #[error("unknown format `{0}`")]
    UnknownFormat(String),

    #[error("export error: {0}")]
    Export(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    /// Creates a new provider error for the named source kind.
    pub fn provider(name: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Provider {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration(message.into())
    }
}
