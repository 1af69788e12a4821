//! Unified error types for the domain layer
//!
//! Only the editing surface produces errors. Adding, removing, and the
//! default-row policy never fail: short or long value lists are padded or
//! truncated to the schema instead.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Section name did not match any known section kind
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    /// Field name is not part of the section's schema
    #[error("Unknown field '{field}' in {section}")]
    UnknownField { section: &'static str, field: String },

    /// Positional field index outside the schema
    #[error("Field index {index} out of range for {target} ({len} fields)")]
    FieldOutOfRange {
        target: &'static str,
        index: usize,
        len: usize,
    },
}

impl DomainError {
    /// Create an unknown section error
    pub fn unknown_section(name: impl Into<String>) -> Self {
        Self::UnknownSection(name.into())
    }

    /// Create an unknown field error
    pub fn unknown_field(section: &'static str, field: impl Into<String>) -> Self {
        Self::UnknownField {
            section,
            field: field.into(),
        }
    }

    /// Create a field index error
    pub fn field_out_of_range(target: &'static str, index: usize, len: usize) -> Self {
        Self::FieldOutOfRange { target, index, len }
    }
}
