//! Remote Google Sheets source.
//!
//! The configured `source_resource` is the document's sharing/editing URL.
//! It is rewritten to the xlsx export endpoint, downloaded with a bounded
//! timeout, and parsed in memory.

use std::{io::Cursor, time::Duration};

use calamine::{Reader, Xlsx};
use tracing::debug;

use crate::{
    config::ProviderConfig,
    error::Error,
    matrix::Workbook,
    providers::{Provider, read_calamine_workbook},
};

const NAME: &str = "google_drive";

pub struct GoogleDriveProvider;

impl GoogleDriveProvider {
    pub(crate) fn boxed() -> Box<dyn Provider> {
        Box::new(GoogleDriveProvider)
    }
}

/// Rewrites a sharing URL like
/// `https://docs.google.com/spreadsheets/d/<id>/edit#gid=0` to the
/// `export?format=xlsx` endpoint. URLs already pointing at an export
/// endpoint pass through untouched.
fn export_url(source: &str) -> String {
    if let Some(position) = source.find("/edit") {
        format!(
            "{}/export?format=xlsx",
            source[..position].trim_end_matches('/')
        )
    } else if source.contains("/export") {
        source.to_string()
    } else {
        format!("{}/export?format=xlsx", source.trim_end_matches('/'))
    }
}

impl Provider for GoogleDriveProvider {
    fn name(&self) -> &'static str {
        NAME
    }

    fn fetch(&self, config: &ProviderConfig) -> Result<Workbook, Error> {
        let url = export_url(&config.source_resource);
        debug!(url = %url, timeout_secs = config.timeout_secs, "downloading workbook");

        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::provider(NAME, format!("failed to build HTTP client: {e}")))?;
        let response = client
            .get(&url)
            .send()
            .map_err(|e| Error::provider(NAME, format!("request failed: {e}")))?;
        if !response.status().is_success() {
            return Err(Error::provider(
                NAME,
                format!("HTTP {} fetching {url}", response.status()),
            ));
        }
        let bytes = response
            .bytes()
            .map_err(|e| Error::provider(NAME, format!("failed to read response body: {e}")))?;

        let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes.to_vec()))
            .map_err(|e| Error::provider(NAME, format!("response is not a spreadsheet: {e}")))?;
        read_calamine_workbook(&mut workbook, NAME)
    }
}
