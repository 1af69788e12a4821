//! Service layer error types
//!
//! This module defines errors that can occur in the application service layer,
//! wrapping domain, document, and store errors.

use sheetkeep_domain::{DomainError, SectionKind};
use sheetkeep_shared::DocumentError;

use crate::ports::outbound::StoreError;

/// Errors that can occur in service operations
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The loaded bytes were not a document; the sheet is unchanged
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// Reading or writing the saved sheet failed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// An edit addressed a field that does not exist
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// No entry at that display position
    #[error("{kind} has no row {}", .position + 1)]
    NoSuchRow { kind: SectionKind, position: usize },
}

impl ServiceError {
    /// Check if this is a malformed-document error
    pub fn is_malformed_document(&self) -> bool {
        matches!(self, ServiceError::Document(err) if err.is_malformed())
    }

    /// Check if the saved sheet does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::Store(StoreError::NotFound(_)))
    }
}
