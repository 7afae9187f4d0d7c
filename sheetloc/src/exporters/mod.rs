//! Multi-format export of one locale's translation tree.
//!
//! The output format is polymorphic over the configuration's `format` string:
//! each variant has one serializer, selected from a lookup table keyed by
//! [`Format`]. Files land at
//! `destination_folder / prefix + sheet + "." + locale + "." + extension`,
//! written through a temp file and renamed into place so a reader never
//! observes a half-written artifact.

pub mod json;
pub mod php;
pub mod xliff;
pub mod yaml;

pub use json::JsonExporter;
pub use php::PhpExporter;
pub use xliff::XliffExporter;
pub use yaml::YamlExporter;

use std::{
    fmt::{Display, Formatter},
    fs,
    io::Write,
    path::{Path, PathBuf},
    str::FromStr,
};

use tempfile::NamedTempFile;
use tracing::info;

use crate::{config::ExporterConfig, error::Error, locale::Locale, tree::TranslationTree};

/// All supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Yaml,
    Json,
    Php,
    Xliff,
}

impl Format {
    /// The canonical file extension, regardless of which alias the
    /// configuration used (`yaml` still yields `.yml`, `xliff` yields `.xlf`).
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Yaml => "yml",
            Format::Json => "json",
            Format::Php => "php",
            Format::Xliff => "xlf",
        }
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Yaml => write!(f, "yml"),
            Format::Json => write!(f, "json"),
            Format::Php => write!(f, "php"),
            Format::Xliff => write!(f, "xliff"),
        }
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yml" | "yaml" => Ok(Format::Yaml),
            "json" => Ok(Format::Json),
            "php" => Ok(Format::Php),
            "xliff" | "xlf" => Ok(Format::Xliff),
            other => Err(Error::UnknownFormat(other.to_string())),
        }
    }
}

/// Everything a serializer may need besides the tree itself.
pub struct ExportContext<'a> {
    /// The sheet the tree came from.
    pub sheet: &'a str,
    /// The locale this artifact targets.
    pub locale: &'a Locale,
    /// The book's source language, e.g. `en`.
    pub default_locale: &'a str,
    /// The book's key segment separator.
    pub separator: &'a str,
}

/// Capability contract for one output format.
pub trait Exporter: Send + Sync {
    fn format(&self) -> Format;

    /// Serializes the tree to the bytes of one artifact file, preserving
    /// first-seen key order.
    fn serialize(&self, tree: &TranslationTree, ctx: &ExportContext) -> Result<Vec<u8>, Error>;
}

/// Instantiates the exporter for the configuration's `format` string.
///
/// Unrecognized names fail with [`Error::UnknownFormat`]; nothing is written.
pub fn exporter_for(format: &str) -> Result<Box<dyn Exporter>, Error> {
    Ok(match Format::from_str(format)? {
        Format::Yaml => Box::new(YamlExporter),
        Format::Json => Box::new(JsonExporter),
        Format::Php => Box::new(PhpExporter),
        Format::Xliff => Box::new(XliffExporter),
    })
}

/// One exported file: where it went and what was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub sheet: String,
    pub locale: Locale,
    pub format: Format,
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

/// Computes `destination_folder / prefix + sheet + "." + locale + "." + ext`.
pub fn destination_path(
    config: &ExporterConfig,
    format: Format,
    sheet: &str,
    locale: &Locale,
) -> PathBuf {
    Path::new(&config.destination_folder).join(format!(
        "{}{}.{}.{}",
        config.prefix,
        sheet,
        locale.code(),
        format.extension()
    ))
}

/// Writes artifact bytes: parent directories are created, the bytes go to a
/// temp file in the destination directory, and the temp file is renamed over
/// any existing artifact.
pub fn write_artifact(path: &Path, bytes: &[u8]) -> Result<(), Error> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(bytes)?;
    tmp.persist(path)
        .map_err(|e| Error::Export(format!("failed to replace {}: {e}", path.display())))?;
    info!(path = %path.display(), bytes = bytes.len(), "artifact written");
    Ok(())
}

/// Serializes and writes one artifact.
pub fn export_tree(
    config: &ExporterConfig,
    tree: &TranslationTree,
    ctx: &ExportContext,
) -> Result<ExportArtifact, Error> {
    let exporter = exporter_for(&config.format)?;
    let bytes = exporter.serialize(tree, ctx)?;
    let path = destination_path(config, exporter.format(), ctx.sheet, ctx.locale);
    write_artifact(&path, &bytes)?;
    Ok(ExportArtifact {
        sheet: ctx.sheet.to_string(),
        locale: ctx.locale.clone(),
        format: exporter.format(),
        path,
        bytes,
    })
}
