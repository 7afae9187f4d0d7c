//! Book processing: fetch once, then run every sheet of the book through the
//! sheet processor, honoring the configured failure policy and worker count.

use rayon::prelude::*;
use tracing::{info, warn};

use crate::{
    config::{BookConfig, ProcessPolicy},
    error::Error,
    exporters::ExportArtifact,
    matrix::Workbook,
    processor::{ParseIssue, SheetOutcome, process_sheet},
    providers::provider_for,
};

/// Everything one book run produced.
#[derive(Debug, Default)]
pub struct BookOutcome {
    /// Artifacts from all successfully processed sheets, in sheet order.
    pub artifacts: Vec<ExportArtifact>,
    /// Skipped rows from all processed sheets.
    pub issues: Vec<ParseIssue>,
    /// Per-sheet failures. Empty under `fail_fast` (the first one aborts the
    /// run instead); possibly non-empty under `best_effort`.
    pub failures: Vec<(String, Error)>,
}

/// Processes every sheet belonging to `book`.
///
/// The sheet list comes from the `sheets` configuration key, or, when that is
/// omitted, from whatever sheets the provider's data contains, in source
/// order. The workbook is fetched once and shared by all sheets.
pub fn process_book(book: &BookConfig) -> Result<BookOutcome, Error> {
    let provider = provider_for(&book.provider.name)?;
    let workbook = provider.fetch(&book.provider)?;

    let sheet_names = match &book.sheets {
        Some(names) => names.clone(),
        None => workbook.sheet_names(),
    };
    info!(sheets = sheet_names.len(), workers = book.workers, "processing book sheets");

    let results = run_sheets(book, &workbook, &sheet_names)?;

    let mut outcome = BookOutcome::default();
    for (name, result) in results {
        match result {
            Ok(SheetOutcome { artifacts, issues }) => {
                outcome.artifacts.extend(artifacts);
                outcome.issues.extend(issues);
            }
            Err(error) => match book.policy {
                // Artifacts already written by earlier sheets stay on disk.
                ProcessPolicy::FailFast => return Err(error),
                ProcessPolicy::BestEffort => {
                    warn!(sheet = %name, error = %error, "sheet failed, continuing");
                    outcome.failures.push((name, error));
                }
            },
        }
    }
    Ok(outcome)
}

/// Runs the sheet processor over every name, sequentially or on a bounded
/// worker pool. Results always come back in sheet order, so error selection
/// under `fail_fast` is deterministic either way.
fn run_sheets(
    book: &BookConfig,
    workbook: &Workbook,
    sheet_names: &[String],
) -> Result<Vec<(String, Result<SheetOutcome, Error>)>, Error> {
    if book.workers <= 1 {
        return Ok(sheet_names
            .iter()
            .map(|name| (name.clone(), process_sheet(book, workbook, name)))
            .collect());
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(book.workers)
        .build()
        .map_err(|e| Error::configuration(format!("failed to build worker pool: {e}")))?;
    Ok(pool.install(|| {
        sheet_names
            .par_iter()
            .map(|name| (name.clone(), process_sheet(book, workbook, name)))
            .collect()
    }))
}
