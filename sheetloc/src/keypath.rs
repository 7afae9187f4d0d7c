//! Hierarchical message keys.
//!
//! A key cell like `homepage.title` is split on the book's configured
//! separator into an ordered path of non-empty segments. Empty segments mean
//! the row is malformed and gets skipped by the processor.

use std::fmt::Display;

use thiserror::Error;

/// Why a key cell could not be turned into a [`KeyPath`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyPathError {
    #[error("blank key")]
    Blank,

    #[error("empty segment at position {0}")]
    EmptySegment(usize),
}

/// An ordered, non-empty path of key segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// Splits a key cell on `separator`.
    ///
    /// The cell is trimmed first; a blank cell yields [`KeyPathError::Blank`]
    /// and any empty segment (leading, trailing, or doubled separator) yields
    /// [`KeyPathError::EmptySegment`] with its 1-based position.
    pub fn parse(raw: &str, separator: &str) -> Result<Self, KeyPathError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(KeyPathError::Blank);
        }

        let mut segments = Vec::new();
        for (index, segment) in raw.split(separator).enumerate() {
            if segment.is_empty() {
                return Err(KeyPathError::EmptySegment(index + 1));
            }
            segments.push(segment.to_string());
        }
        Ok(KeyPath { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl Display for KeyPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}
