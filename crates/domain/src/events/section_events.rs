//! Section mutation events
//!
//! These enums communicate what happened when entries were added to or
//! removed from a section.

use crate::character_sheet::SectionKind;
use crate::entities::Entry;
use crate::ids::EntryId;

/// Outcome of asking to remove an entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalOutcome {
    /// Confirmed and removed; the entry is handed back to the caller
    Removed {
        kind: SectionKind,
        entry: Entry,
        position: usize,
        /// The section has no entries left
        section_empty: bool,
    },
    /// The user declined; the section is untouched
    Declined { kind: SectionKind, entry_id: EntryId },
    /// No entry with that id in the section; nothing was asked or changed
    NotFound { kind: SectionKind, entry_id: EntryId },
}

impl RemovalOutcome {
    /// True when the section changed.
    pub fn is_removed(&self) -> bool {
        matches!(self, Self::Removed { .. })
    }

    /// Section the removal targeted.
    pub fn kind(&self) -> SectionKind {
        match self {
            Self::Removed { kind, .. } | Self::Declined { kind, .. } | Self::NotFound { kind, .. } => {
                *kind
            }
        }
    }
}

/// A blank row inserted by the default-row policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultRowAdded {
    pub kind: SectionKind,
    pub entry_id: EntryId,
}
