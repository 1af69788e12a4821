//! Restoring a character record from a document.
//!
//! Restoration is all-or-nothing at the parse stage: bytes that are not JSON
//! leave the record untouched. Past that point nothing is rejected; every
//! missing or odd value is substituted (see [`CharacterDocument::from_value`]).

use sheetkeep_domain::{
    add_entry, clear_section, ensure_default_rows, CharacterRecord, DefaultRowAdded, SectionKind,
};

use crate::character_sheet::CharacterDocument;
use crate::error::DocumentError;

/// What a restore did, for logging and re-rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestoreSummary {
    /// Entries taken from the document, per section in sheet order
    pub restored: Vec<(SectionKind, usize)>,
    /// Blank rows added because a section came back empty
    pub defaults_added: Vec<DefaultRowAdded>,
}

impl RestoreSummary {
    /// Entries restored into one section.
    pub fn restored_in(&self, kind: SectionKind) -> usize {
        self.restored
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }
}

/// Replace a record's contents with a document.
///
/// 1. character info is overwritten positionally (missing → `""`, extras ignored)
/// 2. each section, in sheet order, is cleared and refilled from its rows
/// 3. the default-row policy runs, so no section is left empty
pub fn apply_document(
    record: &mut CharacterRecord,
    document: &CharacterDocument,
) -> RestoreSummary {
    record.replace_character_info(document.character_info.iter().map(String::as_str));

    let mut restored = Vec::with_capacity(SectionKind::ALL.len());
    for kind in SectionKind::ALL {
        let section = record.section_mut(kind);
        clear_section(section);
        let rows = document.rows(kind);
        for row in rows {
            add_entry(section, row.iter().map(String::as_str));
        }
        restored.push((kind, rows.len()));
    }

    let defaults_added = ensure_default_rows(record);
    RestoreSummary {
        restored,
        defaults_added,
    }
}

/// Parse bytes and restore them into an existing record.
///
/// # Errors
///
/// Returns `DocumentError::Malformed` if `bytes` are not JSON; `record` is
/// unchanged in that case.
pub fn restore(
    record: &mut CharacterRecord,
    bytes: &[u8],
) -> Result<RestoreSummary, DocumentError> {
    let document = CharacterDocument::from_slice(bytes).inspect_err(|err| {
        tracing::warn!(error = %err, "Rejected character document");
    })?;
    let summary = apply_document(record, &document);
    tracing::debug!(
        restored = ?summary.restored,
        defaults_added = summary.defaults_added.len(),
        "Restored character sheet"
    );
    Ok(summary)
}

/// Build a fresh record from bytes.
pub fn load(bytes: &[u8]) -> Result<CharacterRecord, DocumentError> {
    let mut record = CharacterRecord::new();
    restore(&mut record, bytes)?;
    Ok(record)
}
