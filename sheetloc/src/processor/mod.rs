//! Orchestration: sheet-level processing, book-level iteration, and the
//! [`Translator`] facade tying configuration resolution to both.

pub mod book;
pub mod sheet;

pub use book::{BookOutcome, process_book};
pub use sheet::{SheetOutcome, process_sheet};

use std::fmt::Display;

use tracing::info;

use crate::{config::Registry, error::Error, providers::provider_for};

/// A recoverable row-level problem. The offending row was skipped; the rest
/// of the sheet was processed normally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    /// Sheet the row belongs to.
    pub sheet: String,
    /// 1-based source row number, as a spreadsheet user would count.
    pub row: usize,
    /// The raw key cell.
    pub key: String,
    /// What was wrong with it.
    pub message: String,
}

impl Display for ParseIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "sheet `{}` row {} (`{}`): {}",
            self.sheet, self.row, self.key, self.message
        )
    }
}

/// Entry point over a configured book registry.
///
/// Mirrors the two invocation shapes of the external command surface:
/// process one named sheet, or process a whole book. An empty book name
/// resolves to the first configured book.
pub struct Translator {
    registry: Registry,
}

impl Translator {
    pub fn new(registry: Registry) -> Self {
        Translator { registry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Fully processes one named sheet of the resolved book.
    pub fn process_sheet(&self, sheet_name: &str, book_name: &str) -> Result<SheetOutcome, Error> {
        let (resolved, book) = self.registry.resolve(book_name)?;
        info!(book = resolved, sheet = sheet_name, "processing sheet");

        let provider = provider_for(&book.provider.name)?;
        let workbook = provider.fetch(&book.provider)?;
        process_sheet(book, &workbook, sheet_name)
    }

    /// Processes every sheet belonging to the resolved book.
    pub fn process_book(&self, book_name: &str) -> Result<BookOutcome, Error> {
        let (resolved, book) = self.registry.resolve(book_name)?;
        info!(book = resolved, "processing book");
        process_book(book)
    }
}
