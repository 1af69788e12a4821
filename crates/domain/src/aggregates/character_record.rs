//! CharacterRecord aggregate - The whole character sheet form state
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: sections are reachable only through accessors
//! - **Always complete**: all six sections exist from construction onwards
//! - **Explicitly owned**: there is no ambient "current sheet"; callers own a
//!   record and pass it to each operation

use crate::character_sheet::{SectionKind, CHARACTER_INFO_FIELDS};
use crate::entities::Section;
use crate::error::DomainError;

/// The full character sheet: positional character info plus six sections.
///
/// # Invariants
///
/// - `character_info.len() == CHARACTER_INFO_FIELDS.len()`
/// - `sections[k.index()].kind() == k` for every `SectionKind`
///
/// A freshly constructed record has empty sections. Run
/// [`crate::EntryCollectionManager::ensure_default_rows`] before showing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterRecord {
    character_info: Vec<String>,
    sections: [Section; 6],
}

impl Default for CharacterRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterRecord {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Create an empty record: blank character info, no entries.
    pub fn new() -> Self {
        Self {
            character_info: vec![String::new(); CHARACTER_INFO_FIELDS.len()],
            sections: SectionKind::ALL.map(Section::new),
        }
    }

    // =========================================================================
    // Character Info
    // =========================================================================

    /// Character info values in form order.
    #[inline]
    pub fn character_info(&self) -> &[String] {
        &self.character_info
    }

    /// Character info value by its label.
    pub fn character_info_field(&self, field: &str) -> Option<&str> {
        CHARACTER_INFO_FIELDS
            .iter()
            .position(|f| *f == field)
            .map(|index| self.character_info[index].as_str())
    }

    /// Set one character info value by position.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::FieldOutOfRange` if `index` is past the last scalar field.
    pub fn set_character_info(
        &mut self,
        index: usize,
        value: impl Into<String>,
    ) -> Result<(), DomainError> {
        let len = self.character_info.len();
        let slot = self
            .character_info
            .get_mut(index)
            .ok_or_else(|| DomainError::field_out_of_range("characterInfo", index, len))?;
        *slot = value.into();
        Ok(())
    }

    /// Overwrite all character info positionally.
    ///
    /// Missing positions become empty strings and extra values are ignored.
    pub fn replace_character_info<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut values = values.into_iter();
        for slot in &mut self.character_info {
            *slot = values.next().map(Into::into).unwrap_or_default();
        }
    }

    // =========================================================================
    // Sections
    // =========================================================================

    #[inline]
    pub fn section(&self, kind: SectionKind) -> &Section {
        &self.sections[kind.index()]
    }

    #[inline]
    pub fn section_mut(&mut self, kind: SectionKind) -> &mut Section {
        &mut self.sections[kind.index()]
    }

    /// All sections in the fixed sheet order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }
}
