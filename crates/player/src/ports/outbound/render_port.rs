//! RenderPort - showing the sheet

use sheetkeep_domain::{CharacterRecord, Section};

/// Presentation boundary. Called after every settled change.
#[cfg_attr(test, mockall::automock)]
pub trait RenderPort: Send + Sync {
    /// Show the top-level character info fields.
    fn render_character_info(&self, record: &CharacterRecord);

    /// Show one section with all of its entries.
    fn render_section(&self, section: &Section);
}
