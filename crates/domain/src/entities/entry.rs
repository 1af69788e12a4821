//! Entry entity - One row of a repeated character sheet section
//!
//! An entry always holds exactly one value per field of its section's
//! schema. Construction pads missing trailing values with empty strings and
//! drops values past the schema length, so no entry with the wrong arity can
//! exist.

use crate::character_sheet::{FieldSchema, SectionKind};
use crate::error::DomainError;
use crate::ids::EntryId;

/// A single row of a section (one attack, one skill, one note, ...)
///
/// # Invariants
///
/// - `values.len() == kind.schema().len()`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    id: EntryId,
    kind: SectionKind,
    values: Vec<String>,
}

impl Entry {
    /// Create an entry from positional values.
    ///
    /// Values are matched to the schema by position, not by name. A short
    /// list is padded with empty strings, a long one is truncated.
    pub fn new<I, S>(kind: SectionKind, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let arity = kind.schema().len();
        let mut values: Vec<String> = values.into_iter().take(arity).map(Into::into).collect();
        values.resize(arity, String::new());
        Self {
            id: EntryId::new(),
            kind,
            values,
        }
    }

    /// Create an entry with every field empty.
    pub fn blank(kind: SectionKind) -> Self {
        Self::new(kind, std::iter::empty::<String>())
    }

    #[inline]
    pub fn id(&self) -> EntryId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> SectionKind {
        self.kind
    }

    #[inline]
    pub fn schema(&self) -> &'static FieldSchema {
        self.kind.schema()
    }

    /// Field values in schema order.
    #[inline]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Value of a field by its label.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.schema()
            .position(field)
            .map(|index| self.values[index].as_str())
    }

    /// Pairs of (field label, value) in schema order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.schema()
            .fields
            .iter()
            .copied()
            .zip(self.values.iter().map(String::as_str))
    }

    /// True when every field is empty.
    pub fn is_blank(&self) -> bool {
        self.values.iter().all(String::is_empty)
    }

    /// Replace the value at a schema position.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::FieldOutOfRange` if `index` is not a field of the schema.
    pub fn set_value(&mut self, index: usize, value: impl Into<String>) -> Result<(), DomainError> {
        let len = self.values.len();
        let slot = self.values.get_mut(index).ok_or_else(|| {
            DomainError::field_out_of_range(self.kind.document_key(), index, len)
        })?;
        *slot = value.into();
        Ok(())
    }

    /// Replace the value of a field by its label.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownField` if the schema has no such field.
    pub fn set_field(&mut self, field: &str, value: impl Into<String>) -> Result<(), DomainError> {
        let index = self
            .schema()
            .position(field)
            .ok_or_else(|| DomainError::unknown_field(self.kind.document_key(), field))?;
        self.set_value(index, value)
    }
}
