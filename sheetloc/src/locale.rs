//! Locale codes as they appear in translation matrix headers.
//!
//! A locale column header is a `language[_COUNTRY]` code such as `en` or
//! `es_ES`. The original spelling is kept verbatim because it becomes part of
//! the exported file name.

use std::{fmt::Display, str::FromStr};

use lazy_static::lazy_static;
use regex::Regex;
use unic_langid::LanguageIdentifier;

use crate::error::Error;

lazy_static! {
    static ref LOCALE_REGEX: Regex = Regex::new(r"^[a-z]{2,3}(_[A-Z]{2})?$").unwrap();
}

/// A validated locale code from a matrix header cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    code: String,
}

impl Locale {
    /// The code exactly as configured, e.g. `es_ES`.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The bare language subtag, e.g. `es` for `es_ES`.
    pub fn language(&self) -> &str {
        self.code.split('_').next().unwrap_or(&self.code)
    }

    /// The canonical BCP-47 spelling (`es_ES` → `es-ES`), used where the
    /// output format mandates it (XLIFF language attributes).
    pub fn bcp47(&self) -> String {
        self.identifier()
            .map(|id| id.to_string())
            .unwrap_or_else(|| self.code.replace('_', "-"))
    }

    /// Parses the code into a structured language identifier, if possible.
    pub fn identifier(&self) -> Option<LanguageIdentifier> {
        self.code.parse().ok()
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        if !LOCALE_REGEX.is_match(code) || code.parse::<LanguageIdentifier>().is_err() {
            return Err(Error::configuration(format!("invalid locale code `{s}`")));
        }
        Ok(Locale {
            code: code.to_string(),
        })
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}
