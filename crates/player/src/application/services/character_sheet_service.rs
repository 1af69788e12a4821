//! Character Sheet Service - Application service for the character sheet form
//!
//! Owns the active [`CharacterRecord`] and applies user actions to it: form
//! activation, adding and removing entries, editing fields, saving, and
//! loading. Each action runs to completion and then re-renders what changed,
//! so every section shows at least one entry whenever control returns to the
//! user.

use std::sync::Arc;

use sheetkeep_domain::{
    CharacterRecord, DefaultRowAdded, Entry, EntryCollectionManager, EntryId,
    RemovalConfirmation, RemovalOutcome, SectionKind,
};
use sheetkeep_shared::RestoreSummary;

use crate::application::ServiceError;
use crate::ports::outbound::{ConfirmPort, DocumentStorePort, RenderPort};

/// Message shown before an entry is removed.
pub const REMOVE_ENTRY_PROMPT: &str = "Are you sure you want to remove this entry?";

/// Bridges the user-facing confirm port to the domain's removal capability.
struct PromptedRemoval {
    confirm: Arc<dyn ConfirmPort>,
}

impl RemovalConfirmation for PromptedRemoval {
    fn confirm_removal(&self, _kind: SectionKind, _entry: &Entry) -> bool {
        self.confirm.confirm(REMOVE_ENTRY_PROMPT)
    }
}

/// Character sheet form session
///
/// The record is owned here and handed out by reference; there is no shared
/// "current sheet" elsewhere in the process.
pub struct CharacterSheetService {
    record: CharacterRecord,
    manager: EntryCollectionManager<PromptedRemoval>,
    store: Arc<dyn DocumentStorePort>,
    renderer: Arc<dyn RenderPort>,
    file_name: String,
}

impl CharacterSheetService {
    /// Create a session over a blank record.
    ///
    /// The record has no rows until [`Self::on_form_activated`] runs.
    pub fn new(
        confirm: Arc<dyn ConfirmPort>,
        store: Arc<dyn DocumentStorePort>,
        renderer: Arc<dyn RenderPort>,
        file_name: impl Into<String>,
    ) -> Self {
        Self {
            record: CharacterRecord::new(),
            manager: EntryCollectionManager::new(PromptedRemoval { confirm }),
            store,
            renderer,
            file_name: file_name.into(),
        }
    }

    pub fn record(&self) -> &CharacterRecord {
        &self.record
    }

    /// Name the sheet is saved under and loaded from.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    // =========================================================================
    // Form lifecycle
    // =========================================================================

    /// The form became visible: fill empty sections and draw everything.
    pub fn on_form_activated(&mut self) -> Vec<DefaultRowAdded> {
        let added = self.manager.ensure_default_rows(&mut self.record);
        tracing::debug!(defaults_added = added.len(), "Character sheet form activated");
        self.render_all();
        added
    }

    /// Throw the sheet away and start over with a blank, activated form.
    pub fn reset(&mut self) {
        self.record = CharacterRecord::new();
        tracing::info!("Started a new character sheet");
        self.on_form_activated();
    }

    /// Draw the character info and every section.
    pub fn render_all(&self) {
        self.renderer.render_character_info(&self.record);
        for section in self.record.sections() {
            self.renderer.render_section(section);
        }
    }

    /// Draw one section.
    pub fn render_section(&self, kind: SectionKind) {
        self.renderer.render_section(self.record.section(kind));
    }

    // =========================================================================
    // Entries
    // =========================================================================

    /// Append an entry. Values are positional; see `sheetkeep_domain::add_entry`.
    pub fn add_entry(&mut self, kind: SectionKind, values: Vec<String>) -> EntryId {
        let entry_id = self.manager.add_entry(&mut self.record, kind, values);
        tracing::debug!(section = %kind, entry_id = %entry_id, "Added entry");
        self.render_section(kind);
        entry_id
    }

    /// Remove an entry after asking the user.
    ///
    /// If the removal leaves the section empty, a blank row is put back so
    /// the section never disappears from the form.
    pub fn remove_entry(&mut self, kind: SectionKind, entry_id: EntryId) -> RemovalOutcome {
        let outcome = self
            .manager
            .remove_entry(self.record.section_mut(kind), entry_id);

        match &outcome {
            RemovalOutcome::Removed {
                position,
                section_empty,
                ..
            } => {
                tracing::debug!(section = %kind, entry_id = %entry_id, position, "Removed entry");
                if *section_empty {
                    self.manager.ensure_default_rows(&mut self.record);
                }
                self.render_section(kind);
            }
            RemovalOutcome::Declined { .. } => {
                tracing::debug!(section = %kind, entry_id = %entry_id, "Removal declined");
            }
            RemovalOutcome::NotFound { .. } => {
                tracing::warn!(section = %kind, entry_id = %entry_id, "Removal of unknown entry");
            }
        }
        outcome
    }

    /// Remove the entry shown at `position` (0-based).
    pub fn remove_entry_at(
        &mut self,
        kind: SectionKind,
        position: usize,
    ) -> Result<RemovalOutcome, ServiceError> {
        let entry_id = self
            .record
            .section(kind)
            .entry_at(position)
            .map(Entry::id)
            .ok_or(ServiceError::NoSuchRow { kind, position })?;
        Ok(self.remove_entry(kind, entry_id))
    }

    // =========================================================================
    // Field edits
    // =========================================================================

    /// Set one character info value by form position.
    pub fn set_character_info(
        &mut self,
        index: usize,
        value: impl Into<String>,
    ) -> Result<(), ServiceError> {
        self.record.set_character_info(index, value)?;
        self.renderer.render_character_info(&self.record);
        Ok(())
    }

    /// Set one field of the entry shown at `position` (both 0-based).
    pub fn set_entry_value(
        &mut self,
        kind: SectionKind,
        position: usize,
        field_index: usize,
        value: impl Into<String>,
    ) -> Result<(), ServiceError> {
        self.record
            .section_mut(kind)
            .entry_at_mut(position)
            .ok_or(ServiceError::NoSuchRow { kind, position })?
            .set_value(field_index, value)?;
        self.render_section(kind);
        Ok(())
    }

    // =========================================================================
    // Save / Load
    // =========================================================================

    /// Serialize the sheet and hand it to the store. Returns where it went.
    pub async fn save(&self) -> Result<String, ServiceError> {
        let bytes = sheetkeep_shared::save(&self.record)?;
        let location = self.store.write_bytes(&self.file_name, &bytes).await?;
        tracing::info!(location = %location, bytes = bytes.len(), "Saved character sheet");
        Ok(location)
    }

    /// Read the saved sheet and restore it over the current one.
    ///
    /// On any error the current sheet is left exactly as it was.
    pub async fn load(&mut self) -> Result<RestoreSummary, ServiceError> {
        let bytes = self.store.read_bytes(&self.file_name).await?;
        let summary = sheetkeep_shared::restore(&mut self.record, &bytes)?;
        tracing::info!(
            file = %self.file_name,
            defaults_added = summary.defaults_added.len(),
            "Loaded character sheet"
        );
        self.render_all();
        Ok(summary)
    }

    /// Load from a different name, remembering it for later saves.
    pub async fn load_from(
        &mut self,
        file_name: impl Into<String>,
    ) -> Result<RestoreSummary, ServiceError> {
        let previous = std::mem::replace(&mut self.file_name, file_name.into());
        let result = self.load().await;
        if result.is_err() {
            self.file_name = previous;
        }
        result
    }
}
