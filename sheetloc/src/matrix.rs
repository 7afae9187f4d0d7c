//! Raw tabular data as fetched by a provider.
//!
//! A [`Workbook`] is an ordered list of named [`Sheet`]s; each sheet wraps a
//! [`RawMatrix`] of string cells. Row 0 is the header, column 0 the key
//! column, columns 1..n the locale columns. Rows stay in source order.

use std::fmt::Display;

/// An ordered grid of cell values, header row included.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawMatrix {
    rows: Vec<Vec<String>>,
}

impl RawMatrix {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        RawMatrix { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The header row (row 0), if the matrix has one.
    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Data rows with their 1-based source row numbers (header is row 1, the
    /// first data row is row 2 — matching what a spreadsheet user sees).
    pub fn data_rows(&self) -> impl Iterator<Item = (usize, &[String])> {
        self.rows
            .iter()
            .enumerate()
            .skip(1)
            .map(|(index, row)| (index + 1, row.as_slice()))
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }
}

impl From<Vec<Vec<String>>> for RawMatrix {
    fn from(rows: Vec<Vec<String>>) -> Self {
        RawMatrix::new(rows)
    }
}

/// One named tabular unit within a provider's source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    pub name: String,
    pub matrix: RawMatrix,
}

impl Display for Sheet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} rows)", self.name, self.matrix.row_count())
    }
}

/// Everything a provider fetched, sheets in source order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new(sheets: Vec<Sheet>) -> Self {
        Workbook { sheets }
    }

    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|sheet| sheet.name == name)
    }

    pub fn sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|sheet| sheet.name.clone()).collect()
    }
}
