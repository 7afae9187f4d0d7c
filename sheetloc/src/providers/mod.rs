//! Raw-data retrieval, polymorphic over the source kind.
//!
//! A provider turns a `source_resource` locator into a [`Workbook`]. Concrete
//! providers are selected from a lookup table keyed by the configuration's
//! `provider.name` string — adding a source kind means adding one table row.

pub mod google_drive;
pub mod local_file;

pub use google_drive::GoogleDriveProvider;
pub use local_file::LocalFileProvider;

use calamine::Data;

use crate::{
    config::ProviderConfig,
    error::Error,
    matrix::{RawMatrix, Sheet, Workbook},
};

/// Capability contract for one source kind.
///
/// `fetch` blocks for the full duration of the I/O; implementations bound it
/// with `config.timeout_secs` where the transport supports timeouts.
pub trait Provider: Send + Sync {
    /// The discriminator this provider registers under.
    fn name(&self) -> &'static str;

    /// Fetches the raw cell matrix for every sheet, rows in source order.
    fn fetch(&self, config: &ProviderConfig) -> Result<Workbook, Error>;
}

impl std::fmt::Debug for dyn Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Provider").field("name", &self.name()).finish()
    }
}

type ProviderCtor = fn() -> Box<dyn Provider>;

const PROVIDERS: &[(&str, ProviderCtor)] = &[
    ("google_drive", GoogleDriveProvider::boxed),
    ("local_file", LocalFileProvider::boxed),
];

/// Instantiates the provider registered under `name`.
pub fn provider_for(name: &str) -> Result<Box<dyn Provider>, Error> {
    PROVIDERS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, ctor)| ctor())
        .ok_or_else(|| Error::configuration(format!("unknown provider `{name}`")))
}

/// Renders a spreadsheet cell to the string the parser works with.
/// Error cells count as blank.
pub(crate) fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(value) => value.clone(),
        Data::Bool(value) => value.to_string(),
        Data::Int(value) => value.to_string(),
        Data::Float(value) => value.to_string(),
        Data::DateTime(value) => value.as_f64().to_string(),
        Data::DateTimeIso(value) | Data::DurationIso(value) => value.clone(),
        _ => String::new(),
    }
}

/// Drains every sheet of an open calamine workbook into a [`Workbook`].
pub(crate) fn read_calamine_workbook<RS, R>(
    reader: &mut R,
    provider: &str,
) -> Result<Workbook, Error>
where
    RS: std::io::Read + std::io::Seek,
    R: calamine::Reader<RS>,
    R::Error: std::fmt::Display,
{
    let mut sheets = Vec::new();
    for name in reader.sheet_names().to_vec() {
        let range = reader.worksheet_range(&name).map_err(|e| {
            Error::provider(provider, format!("failed to read sheet `{name}`: {e}"))
        })?;
        let rows = range
            .rows()
            .map(|row| row.iter().map(cell_to_string).collect())
            .collect();
        sheets.push(Sheet {
            name,
            matrix: RawMatrix::new(rows),
        });
    }
    Ok(Workbook::new(sheets))
}
