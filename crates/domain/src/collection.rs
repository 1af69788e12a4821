//! Entry collection management
//!
//! Adds and removes entries within a record's sections and enforces the
//! default-row policy: once state settles, every section shows at least one
//! entry.
//!
//! Removal needs the user's consent. The consent step is a capability
//! injected at construction ([`RemovalConfirmation`]), so the domain never
//! talks to a dialog and tests can answer deterministically.

use crate::aggregates::CharacterRecord;
use crate::character_sheet::SectionKind;
use crate::entities::{Entry, Section};
use crate::events::{DefaultRowAdded, RemovalOutcome};
use crate::ids::EntryId;

/// Asks the user whether an entry may be removed.
pub trait RemovalConfirmation {
    /// Returns true if the user confirmed removal of `entry`.
    fn confirm_removal(&self, kind: SectionKind, entry: &Entry) -> bool;
}

impl<F> RemovalConfirmation for F
where
    F: Fn(SectionKind, &Entry) -> bool,
{
    fn confirm_removal(&self, kind: SectionKind, entry: &Entry) -> bool {
        self(kind, entry)
    }
}

/// Confirmation that always agrees. Used when no user is in the loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl RemovalConfirmation for AlwaysConfirm {
    fn confirm_removal(&self, _kind: SectionKind, _entry: &Entry) -> bool {
        true
    }
}

/// Append an entry built from positional values to a section.
///
/// Values are matched to the schema by position: missing trailing values
/// become empty strings, surplus values are dropped. Never fails.
pub fn add_entry<I, S>(section: &mut Section, values: I) -> EntryId
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    section.push(Entry::new(section.kind(), values))
}

/// Discard every entry of a section without asking.
///
/// Used by restoration, which replaces sections wholesale.
pub fn clear_section(section: &mut Section) {
    section.clear();
}

/// Give every empty section exactly one blank entry.
///
/// Sections are visited in the fixed sheet order. Non-empty sections are left
/// alone, so a second call right after the first changes nothing.
pub fn ensure_default_rows(record: &mut CharacterRecord) -> Vec<DefaultRowAdded> {
    SectionKind::ALL
        .into_iter()
        .filter_map(|kind| {
            let section = record.section_mut(kind);
            section.is_empty().then(|| DefaultRowAdded {
                kind,
                entry_id: add_entry(section, std::iter::empty::<String>()),
            })
        })
        .collect()
}

/// Owns add/remove of entries and the default-row policy.
///
/// Generic over the confirmation capability; closures of type
/// `Fn(SectionKind, &Entry) -> bool` work directly.
#[derive(Debug, Clone, Default)]
pub struct EntryCollectionManager<C> {
    confirm: C,
}

impl<C: RemovalConfirmation> EntryCollectionManager<C> {
    pub fn new(confirm: C) -> Self {
        Self { confirm }
    }

    /// Append an entry to the section of `kind`. See [`add_entry`].
    pub fn add_entry<I, S>(
        &self,
        record: &mut CharacterRecord,
        kind: SectionKind,
        values: I,
    ) -> EntryId
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        add_entry(record.section_mut(kind), values)
    }

    /// Remove an entry after the user confirms.
    ///
    /// Declining leaves the section exactly as it was. A missing entry is a
    /// no-op and the user is not asked. The section may end up empty; it is
    /// the caller's job to run [`Self::ensure_default_rows`] afterwards.
    pub fn remove_entry(&self, section: &mut Section, entry_id: EntryId) -> RemovalOutcome {
        let kind = section.kind();
        let Some(position) = section.position(entry_id) else {
            return RemovalOutcome::NotFound { kind, entry_id };
        };

        let confirmed = section
            .entry_at(position)
            .is_some_and(|entry| self.confirm.confirm_removal(kind, entry));
        if !confirmed {
            return RemovalOutcome::Declined { kind, entry_id };
        }

        let entry = section.remove_at(position);
        RemovalOutcome::Removed {
            kind,
            entry,
            position,
            section_empty: section.is_empty(),
        }
    }

    /// See [`ensure_default_rows`].
    pub fn ensure_default_rows(&self, record: &mut CharacterRecord) -> Vec<DefaultRowAdded> {
        ensure_default_rows(record)
    }

    // =========================================================================
    // Per-section "Add" buttons
    // =========================================================================

    pub fn add_attack<I, S>(&self, record: &mut CharacterRecord, values: I) -> EntryId
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_entry(record, SectionKind::Attacks, values)
    }

    pub fn add_skill<I, S>(&self, record: &mut CharacterRecord, values: I) -> EntryId
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_entry(record, SectionKind::Skills, values)
    }

    pub fn add_achievement<I, S>(&self, record: &mut CharacterRecord, values: I) -> EntryId
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_entry(record, SectionKind::Achievements, values)
    }

    pub fn add_item<I, S>(&self, record: &mut CharacterRecord, values: I) -> EntryId
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_entry(record, SectionKind::Inventory, values)
    }

    pub fn add_player_note<I, S>(&self, record: &mut CharacterRecord, values: I) -> EntryId
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_entry(record, SectionKind::PlayerNotes, values)
    }

    pub fn add_gm_note<I, S>(&self, record: &mut CharacterRecord, values: I) -> EntryId
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_entry(record, SectionKind::GmNotes, values)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn no_values() -> std::iter::Empty<String> {
        std::iter::empty()
    }

    mod adding {
        use super::*;

        #[test]
        fn appends_to_the_end() {
            let manager = EntryCollectionManager::new(AlwaysConfirm);
            let mut record = CharacterRecord::new();
            let first = manager.add_item(&mut record, ["Rope"]);
            let second = manager.add_item(&mut record, ["Torch"]);

            let section = record.section(SectionKind::Inventory);
            assert_eq!(section.position(first), Some(0));
            assert_eq!(section.position(second), Some(1));
        }

        #[test]
        fn pads_short_values() {
            let mut section = Section::new(SectionKind::Achievements);
            let id = add_entry(&mut section, ["a"]);
            assert_eq!(
                section.get(id).map(Entry::values),
                Some(&["a".to_string(), String::new(), String::new()][..])
            );
        }

        #[test]
        fn truncates_long_values() {
            let mut section = Section::new(SectionKind::Skills);
            add_entry(&mut section, ["a", "b", "c", "d", "e", "f"]);
            assert_eq!(section.rows(), vec![vec!["a", "b", "c", "d"]]);
        }

        #[test]
        fn per_section_helpers_target_their_section() {
            let manager = EntryCollectionManager::new(AlwaysConfirm);
            let mut record = CharacterRecord::new();
            manager.add_attack(&mut record, no_values());
            manager.add_skill(&mut record, no_values());
            manager.add_achievement(&mut record, no_values());
            manager.add_item(&mut record, no_values());
            manager.add_player_note(&mut record, no_values());
            manager.add_gm_note(&mut record, no_values());

            for section in record.sections() {
                assert_eq!(section.len(), 1, "{}", section.kind());
                assert_eq!(section.entries()[0].kind(), section.kind());
            }
        }
    }

    mod removing {
        use super::*;

        #[test]
        fn confirmed_removal_drops_the_entry() {
            let manager = EntryCollectionManager::new(AlwaysConfirm);
            let mut record = CharacterRecord::new();
            let keep = manager.add_skill(&mut record, ["Stealth"]);
            let drop = manager.add_skill(&mut record, ["Arcana"]);

            let outcome = manager.remove_entry(record.section_mut(SectionKind::Skills), drop);

            match outcome {
                RemovalOutcome::Removed {
                    kind,
                    entry,
                    position,
                    section_empty,
                } => {
                    assert_eq!(kind, SectionKind::Skills);
                    assert_eq!(entry.get("Skill Name"), Some("Arcana"));
                    assert_eq!(position, 1);
                    assert!(!section_empty);
                }
                other => panic!("expected removal, got {other:?}"),
            }
            let section = record.section(SectionKind::Skills);
            assert_eq!(section.len(), 1);
            assert!(section.get(keep).is_some());
        }

        #[test]
        fn declined_removal_leaves_section_identical() {
            let manager = EntryCollectionManager::new(|_: SectionKind, _: &Entry| false);
            let mut record = CharacterRecord::new();
            manager.add_attack(&mut record, ["Claw", "Melee"]);
            let target = manager.add_attack(&mut record, ["Bite"]);
            let before = record.section(SectionKind::Attacks).clone();

            let outcome = manager.remove_entry(record.section_mut(SectionKind::Attacks), target);

            assert_eq!(
                outcome,
                RemovalOutcome::Declined {
                    kind: SectionKind::Attacks,
                    entry_id: target
                }
            );
            let after = record.section(SectionKind::Attacks);
            assert_eq!(after, &before);
            let ids_before: Vec<_> = before.entries().iter().map(Entry::id).collect();
            let ids_after: Vec<_> = after.entries().iter().map(Entry::id).collect();
            assert_eq!(ids_before, ids_after);
        }

        #[test]
        fn missing_entry_is_not_asked_about() {
            let asked = Cell::new(0);
            let manager = EntryCollectionManager::new(|_: SectionKind, _: &Entry| {
                asked.set(asked.get() + 1);
                true
            });
            let mut section = Section::new(SectionKind::GmNotes);
            add_entry(&mut section, ["secret"]);

            let missing = EntryId::new();
            let outcome = manager.remove_entry(&mut section, missing);

            assert_eq!(
                outcome,
                RemovalOutcome::NotFound {
                    kind: SectionKind::GmNotes,
                    entry_id: missing
                }
            );
            assert_eq!(asked.get(), 0);
            assert_eq!(section.len(), 1);
        }

        #[test]
        fn confirmation_sees_the_targeted_entry() {
            let seen = Cell::new(None);
            let manager = EntryCollectionManager::new(|kind: SectionKind, entry: &Entry| {
                seen.set(Some((kind, entry.id())));
                true
            });
            let mut section = Section::new(SectionKind::PlayerNotes);
            let id = add_entry(&mut section, ["remember the map"]);

            manager.remove_entry(&mut section, id);
            assert_eq!(seen.get(), Some((SectionKind::PlayerNotes, id)));
        }

        #[test]
        fn removing_last_entry_does_not_repopulate() {
            let manager = EntryCollectionManager::new(AlwaysConfirm);
            let mut section = Section::new(SectionKind::Inventory);
            let id = add_entry(&mut section, ["Rope"]);

            let outcome = manager.remove_entry(&mut section, id);

            assert!(matches!(
                outcome,
                RemovalOutcome::Removed {
                    section_empty: true,
                    ..
                }
            ));
            assert!(section.is_empty());
        }
    }

    mod default_rows {
        use super::*;

        #[test]
        fn fills_every_empty_section_with_one_blank_entry() {
            let mut record = CharacterRecord::new();
            let added = ensure_default_rows(&mut record);

            let kinds: Vec<_> = added.iter().map(|a| a.kind).collect();
            assert_eq!(kinds, SectionKind::ALL.to_vec());
            for section in record.sections() {
                assert_eq!(section.len(), 1);
                assert!(section.entries()[0].is_blank());
                assert_eq!(section.entries()[0].values().len(), section.schema().len());
            }
        }

        #[test]
        fn is_idempotent() {
            let mut record = CharacterRecord::new();
            ensure_default_rows(&mut record);
            let before = record.clone();

            let added = ensure_default_rows(&mut record);

            assert!(added.is_empty());
            assert_eq!(record, before);
        }

        #[test]
        fn leaves_populated_sections_alone() {
            let manager = EntryCollectionManager::new(AlwaysConfirm);
            let mut record = CharacterRecord::new();
            manager.add_skill(&mut record, ["Athletics"]);
            manager.add_skill(&mut record, ["Insight"]);

            let added = manager.ensure_default_rows(&mut record);

            assert_eq!(added.len(), 5);
            assert!(added.iter().all(|a| a.kind != SectionKind::Skills));
            assert_eq!(record.section(SectionKind::Skills).len(), 2);
        }

        #[test]
        fn restores_invariant_after_removal_empties_a_section() {
            let manager = EntryCollectionManager::new(AlwaysConfirm);
            let mut record = CharacterRecord::new();
            manager.ensure_default_rows(&mut record);
            let only = record.section(SectionKind::GmNotes).entries()[0].id();

            manager.remove_entry(record.section_mut(SectionKind::GmNotes), only);
            assert!(record.section(SectionKind::GmNotes).is_empty());

            let added = manager.ensure_default_rows(&mut record);
            assert_eq!(added.len(), 1);
            assert_eq!(added[0].kind, SectionKind::GmNotes);
            assert_ne!(added[0].entry_id, only);
        }
    }
}
