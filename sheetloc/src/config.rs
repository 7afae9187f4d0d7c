//! Book configuration: loading, the `%project_dir%` placeholder, and
//! resolution of a requested book name against the registry.
//!
//! A configuration file is a YAML document with one entry per *book* — a
//! named provider/exporter/shared triple describing one translatable
//! document set:
//!
//! ```yaml
//! books:
//!   frontend:
//!     provider:
//!       name: google_drive
//!       source_resource: "https://docs.google.com/spreadsheets/d/abc123/edit"
//!     exporter:
//!       format: yml
//!       prefix: demo_
//!       destination_folder: "%project_dir%/translations"
//!     shared:
//!       default_locale: en
//!       name_separator: "."
//! ```
//!
//! Book order in the file is significant: an empty requested book name
//! resolves to the first book.

use std::{fmt, fs, path::Path};

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, Visitor},
    ser::SerializeMap,
};

use crate::error::Error;

const PROJECT_DIR_PLACEHOLDER: &str = "%project_dir%";

fn default_timeout_secs() -> u64 {
    30
}

fn default_workers() -> usize {
    1
}

/// How the book processor reacts to a sheet-level failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessPolicy {
    /// Abort the whole book on the first failing sheet. Artifacts already
    /// written stay on disk.
    #[default]
    FailFast,
    /// Keep processing the remaining sheets and report per-sheet failures.
    BestEffort,
}

/// What happens when two rows produce the same key path in one sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Last write wins.
    #[default]
    Overwrite,
    /// Keep the first value and record the collision as a parse issue.
    Reject,
}

/// Which source to fetch the raw matrix from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProviderConfig {
    /// Provider discriminator, e.g. `google_drive` or `local_file`.
    pub name: String,
    /// Provider-specific resource locator (URL or file path).
    pub source_resource: String,
    /// Upper bound for a single fetch.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Where and how exported files are written.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExporterConfig {
    /// Output format discriminator: `yml`/`yaml`, `json`, `php`, or `xliff`.
    pub format: String,
    /// File name prefix, e.g. `demo_`.
    #[serde(default)]
    pub prefix: String,
    /// Target directory; `%project_dir%` is substituted at load time.
    pub destination_folder: String,
}

/// Settings shared by parsing and export.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SharedConfig {
    /// Source language of the spreadsheet, e.g. `en`.
    pub default_locale: String,
    /// Separator splitting a key cell into path segments, e.g. `.` or `_`.
    pub name_separator: String,
}

/// One book: everything needed to process one translatable document set.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BookConfig {
    pub provider: ProviderConfig,
    pub exporter: ExporterConfig,
    pub shared: SharedConfig,
    /// Explicit sheet list; all sheets present in the source when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheets: Option<Vec<String>>,
    #[serde(default)]
    pub policy: ProcessPolicy,
    #[serde(default)]
    pub on_duplicate: DuplicatePolicy,
    /// Worker count for parallel sheet processing; 1 means sequential.
    #[serde(default = "default_workers")]
    pub workers: usize,
}

/// The ordered book registry. Insertion order from the configuration file is
/// preserved so that an empty book name deterministically picks the first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Registry {
    books: Vec<(String, BookConfig)>,
}

impl Registry {
    pub fn new(books: Vec<(String, BookConfig)>) -> Self {
        Registry { books }
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BookConfig)> {
        self.books.iter().map(|(name, book)| (name.as_str(), book))
    }

    pub fn get(&self, name: &str) -> Option<&BookConfig> {
        self.books
            .iter()
            .find(|(book_name, _)| book_name == name)
            .map(|(_, book)| book)
    }

    /// Resolves a requested book name.
    ///
    /// An empty name picks the first configured book; a non-empty name must
    /// match exactly. Returns the resolved name together with the book.
    pub fn resolve(&self, name: &str) -> Result<(&str, &BookConfig), Error> {
        if name.is_empty() {
            return self
                .books
                .first()
                .map(|(name, book)| (name.as_str(), book))
                .ok_or_else(|| Error::configuration("no configuration available"));
        }
        self.books
            .iter()
            .find(|(book_name, _)| book_name == name)
            .map(|(name, book)| (name.as_str(), book))
            .ok_or_else(|| {
                Error::configuration(format!("configuration for book `{name}` not found"))
            })
    }
}

impl<'de> Deserialize<'de> for Registry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RegistryVisitor;

        impl<'de> Visitor<'de> for RegistryVisitor {
            type Value = Registry;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "a mapping of book names to book configurations")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Registry, A::Error> {
                let mut books = Vec::new();
                while let Some((name, book)) = map.next_entry::<String, BookConfig>()? {
                    books.push((name, book));
                }
                Ok(Registry { books })
            }
        }

        deserializer.deserialize_map(RegistryVisitor)
    }
}

impl Serialize for Registry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.books.len()))?;
        for (name, book) in &self.books {
            map.serialize_entry(name, book)?;
        }
        map.end()
    }
}

/// The whole configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub books: Registry,
}

impl Config {
    pub fn from_yaml_str(content: &str) -> Result<Self, Error> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Replaces the `%project_dir%` placeholder in every destination folder.
    pub fn substitute_project_dir(&mut self, project_dir: &Path) {
        let project_dir = project_dir.to_string_lossy();
        for (_, book) in &mut self.books.books {
            book.exporter.destination_folder = book
                .exporter
                .destination_folder
                .replace(PROJECT_DIR_PLACEHOLDER, &project_dir);
        }
    }
}
