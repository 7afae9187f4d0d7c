#![forbid(unsafe_code)]
//! Spreadsheet-to-translation-file pipeline for Rust.
//!
//! Turns a tabular translation matrix — rows are hierarchical message keys,
//! columns are locale codes — into per-locale resource files (YAML, JSON,
//! PHP arrays, or XLIFF) for a runtime message-translation system.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use sheetloc::{Config, Translator};
//!
//! let config = Config::from_file("sheetloc.yaml")?;
//! let translator = Translator::new(config.books);
//!
//! // Process every sheet of the first configured book...
//! let outcome = translator.process_book("")?;
//! println!("{} files written", outcome.artifacts.len());
//!
//! // ...or a single sheet of a named book.
//! translator.process_sheet("common", "frontend")?;
//! # Ok::<(), sheetloc::Error>(())
//! ```
//!
//! # Pipeline
//!
//! Configuration → provider fetch → raw matrix → key/row parsing →
//! per-locale [`TranslationTree`] → exporter → artifact files named
//! `{prefix}{sheet}.{locale}.{extension}`.
//!
//! Providers (`google_drive`, `local_file`) and exporters (`yml`, `json`,
//! `php`, `xliff`) are selected from lookup tables keyed by the
//! configuration's `name`/`format` strings; adding a variant means adding
//! one table row. Everything order-sensitive (book registry, locale columns,
//! tree entries) preserves insertion order so repeated runs are
//! byte-identical.

pub mod config;
pub mod error;
pub mod exporters;
pub mod keypath;
pub mod locale;
pub mod matrix;
pub mod processor;
pub mod providers;
pub mod tree;

// Re-export most used types for easy consumption
pub use crate::{
    config::{
        BookConfig, Config, DuplicatePolicy, ExporterConfig, ProcessPolicy, ProviderConfig,
        Registry, SharedConfig,
    },
    error::Error,
    exporters::{ExportArtifact, Format},
    keypath::KeyPath,
    locale::Locale,
    matrix::{RawMatrix, Sheet, Workbook},
    processor::{BookOutcome, ParseIssue, SheetOutcome, Translator},
    tree::TranslationTree,
};
