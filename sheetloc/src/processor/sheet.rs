//! Sheet processing: header → locale columns, data rows → per-locale trees,
//! one export per non-empty tree.

use std::str::FromStr;

use tracing::{debug, warn};

use crate::{
    config::{BookConfig, DuplicatePolicy, SharedConfig},
    error::Error,
    exporters::{ExportArtifact, ExportContext, export_tree},
    keypath::{KeyPath, KeyPathError},
    locale::Locale,
    matrix::{Sheet, Workbook},
    processor::ParseIssue,
    tree::TranslationTree,
};

/// Everything one sheet run produced.
#[derive(Debug, Default)]
pub struct SheetOutcome {
    /// Artifacts written, in locale column order.
    pub artifacts: Vec<ExportArtifact>,
    /// Rows that were skipped as malformed.
    pub issues: Vec<ParseIssue>,
}

/// The parsed-but-not-yet-exported form of a sheet: one tree per locale
/// column, in header order.
#[derive(Debug, Default)]
pub struct LocaleTrees {
    pub trees: Vec<(Locale, TranslationTree)>,
    pub issues: Vec<ParseIssue>,
}

/// Parses the locale columns out of the header row.
///
/// Column 0 is the key column and is never a locale. Blank or malformed
/// locale cells skip that column; the rest of the sheet is unaffected.
fn parse_header(sheet: &Sheet) -> Vec<(usize, Locale)> {
    let Some(header) = sheet.matrix.header() else {
        return Vec::new();
    };

    let mut locales = Vec::new();
    for (column, cell) in header.iter().enumerate().skip(1) {
        let cell = cell.trim();
        if cell.is_empty() {
            warn!(sheet = %sheet.name, column, "blank header cell, column skipped");
            continue;
        }
        match Locale::from_str(cell) {
            Ok(locale) => locales.push((column, locale)),
            Err(_) => {
                warn!(
                    sheet = %sheet.name,
                    column,
                    cell = %cell,
                    "malformed locale code, column skipped"
                );
            }
        }
    }
    locales
}

/// Builds one translation tree per locale column from the sheet's data rows.
pub fn build_trees(
    sheet: &Sheet,
    shared: &SharedConfig,
    on_duplicate: DuplicatePolicy,
) -> LocaleTrees {
    let locales = parse_header(sheet);
    let mut trees: Vec<(Locale, TranslationTree)> = locales
        .iter()
        .map(|(_, locale)| (locale.clone(), TranslationTree::new()))
        .collect();
    let mut issues = Vec::new();

    for (row_number, row) in sheet.matrix.data_rows() {
        let key_cell = row.first().map(String::as_str).unwrap_or_default();

        let path = match KeyPath::parse(key_cell, &shared.name_separator) {
            Ok(path) => path,
            Err(KeyPathError::Blank) => {
                debug!(sheet = %sheet.name, row = row_number, "blank key cell, row skipped");
                continue;
            }
            Err(error) => {
                issues.push(ParseIssue {
                    sheet: sheet.name.clone(),
                    row: row_number,
                    key: key_cell.trim().to_string(),
                    message: error.to_string(),
                });
                continue;
            }
        };

        for (slot, (column, _)) in locales.iter().enumerate() {
            let value = row.get(*column).map(String::as_str).unwrap_or_default();
            if value.trim().is_empty() {
                continue;
            }
            let tree = &mut trees[slot].1;
            match on_duplicate {
                DuplicatePolicy::Overwrite => {
                    tree.insert(&path, value);
                }
                DuplicatePolicy::Reject => {
                    if let Err(error) = tree.insert_unique(&path, value) {
                        issues.push(ParseIssue {
                            sheet: sheet.name.clone(),
                            row: row_number,
                            key: key_cell.trim().to_string(),
                            message: format!("{error} for locale `{}`", trees[slot].0),
                        });
                    }
                }
            }
        }
    }

    LocaleTrees { trees, issues }
}

/// Fully processes one named sheet: locate it, build the per-locale trees,
/// and export every locale that has at least one message.
pub fn process_sheet(
    book: &BookConfig,
    workbook: &Workbook,
    sheet_name: &str,
) -> Result<SheetOutcome, Error> {
    let sheet = workbook
        .sheet(sheet_name)
        .ok_or_else(|| Error::SheetNotFound(sheet_name.to_string()))?;

    let LocaleTrees { trees, issues } = build_trees(sheet, &book.shared, book.on_duplicate);

    let mut artifacts = Vec::new();
    for (locale, tree) in &trees {
        if tree.is_empty() {
            debug!(sheet = sheet_name, locale = %locale, "no messages, locale skipped");
            continue;
        }
        let ctx = ExportContext {
            sheet: sheet_name,
            locale,
            default_locale: &book.shared.default_locale,
            separator: &book.shared.name_separator,
        };
        artifacts.push(export_tree(&book.exporter, tree, &ctx)?);
    }

    Ok(SheetOutcome { artifacts, issues })
}
