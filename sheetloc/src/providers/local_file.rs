//! Local tabular sources: `.xlsx`/`.ods` workbooks, single `.csv`/`.tsv`
//! files, or a directory of delimited files (one sheet per file).
//!
//! Delimited files are decoded BOM-aware so spreadsheets saved from desktop
//! tools (UTF-8 BOM, UTF-16) parse cleanly.

use std::{
    fs,
    fs::File,
    path::{Path, PathBuf},
};

use calamine::open_workbook_auto;
use encoding_rs_io::DecodeReaderBytesBuilder;
use tracing::debug;

use crate::{
    config::ProviderConfig,
    error::Error,
    matrix::{RawMatrix, Sheet, Workbook},
    providers::{Provider, read_calamine_workbook},
};

const NAME: &str = "local_file";

pub struct LocalFileProvider;

impl LocalFileProvider {
    pub(crate) fn boxed() -> Box<dyn Provider> {
        Box::new(LocalFileProvider)
    }
}

impl Provider for LocalFileProvider {
    fn name(&self) -> &'static str {
        NAME
    }

    fn fetch(&self, config: &ProviderConfig) -> Result<Workbook, Error> {
        let path = Path::new(&config.source_resource);
        debug!(path = %path.display(), "reading local source");

        if path.is_dir() {
            return read_directory(path);
        }

        let extension = path
            .extension()
            .and_then(|extension| extension.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("xlsx" | "xlsm" | "xls" | "ods") => {
                let mut workbook = open_workbook_auto(path).map_err(|e| {
                    Error::provider(NAME, format!("failed to open {}: {e}", path.display()))
                })?;
                read_calamine_workbook(&mut workbook, NAME)
            }
            Some("csv") => Ok(Workbook::new(vec![read_delimited(path, b',')?])),
            Some("tsv") => Ok(Workbook::new(vec![read_delimited(path, b'\t')?])),
            _ => Err(Error::provider(
                NAME,
                format!("unsupported source `{}`", path.display()),
            )),
        }
    }
}

fn sheet_name_of(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("sheet")
        .to_string()
}

fn read_delimited(path: &Path, delimiter: u8) -> Result<Sheet, Error> {
    let file = File::open(path)?;
    // Auto-detect BOM, decode to UTF-8; passthrough UTF-8
    let decoder = DecodeReaderBytesBuilder::new().bom_override(true).build(file);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(decoder);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(Sheet {
        name: sheet_name_of(path),
        matrix: RawMatrix::new(rows),
    })
}

/// Every `.csv`/`.tsv` file in the directory becomes one sheet, in file-name
/// order so repeated runs see the same sheet sequence.
fn read_directory(dir: &Path) -> Result<Workbook, Error> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            matches!(
                path.extension().and_then(|extension| extension.to_str()),
                Some("csv" | "tsv")
            )
        })
        .collect();
    paths.sort();

    let mut sheets = Vec::new();
    for path in paths {
        let delimiter = match path.extension().and_then(|extension| extension.to_str()) {
            Some("tsv") => b'\t',
            _ => b',',
        };
        sheets.push(read_delimited(&path, delimiter)?);
    }
    Ok(Workbook::new(sheets))
}
