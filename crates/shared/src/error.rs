//! Document errors.

use thiserror::Error;

/// Errors from reading or writing a character sheet document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Input is not parseable structured data. The record was not touched.
    #[error("Malformed character document: {0}")]
    Malformed(#[source] serde_json::Error),

    /// The document could not be written out
    #[error("Failed to encode character document: {0}")]
    Encode(#[source] serde_json::Error),
}

impl DocumentError {
    /// True for the "input is not a document at all" case.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed(_))
    }
}
