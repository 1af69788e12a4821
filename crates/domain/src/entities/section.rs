//! Section entity - An ordered collection of entries of one kind

use crate::character_sheet::{FieldSchema, SectionKind};
use crate::entities::Entry;
use crate::ids::EntryId;

/// An ordered sequence of entries sharing one schema.
///
/// Insertion order is display order and serialization order. Mutation goes
/// through [`crate::EntryCollectionManager`]; a section may be empty only
/// transiently, between a clear and the default-row policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    kind: SectionKind,
    entries: Vec<Entry>,
}

impl Section {
    /// Create an empty section.
    pub fn new(kind: SectionKind) -> Self {
        Self {
            kind,
            entries: Vec::new(),
        }
    }

    #[inline]
    pub fn kind(&self) -> SectionKind {
        self.kind
    }

    #[inline]
    pub fn schema(&self) -> &'static FieldSchema {
        self.kind.schema()
    }

    #[inline]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Display position of an entry.
    pub fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|e| e.id() == id)
    }

    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub fn get_mut(&mut self, id: EntryId) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|e| e.id() == id)
    }

    /// Entry at a display position.
    pub fn entry_at(&self, position: usize) -> Option<&Entry> {
        self.entries.get(position)
    }

    pub fn entry_at_mut(&mut self, position: usize) -> Option<&mut Entry> {
        self.entries.get_mut(position)
    }

    /// Values of every entry, in order.
    pub fn rows(&self) -> Vec<Vec<String>> {
        self.entries.iter().map(|e| e.values().to_vec()).collect()
    }

    pub(crate) fn push(&mut self, entry: Entry) -> EntryId {
        debug_assert_eq!(entry.kind(), self.kind);
        let id = entry.id();
        self.entries.push(entry);
        id
    }

    pub(crate) fn remove_at(&mut self, position: usize) -> Entry {
        self.entries.remove(position)
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}
