pub mod aggregates;
pub mod character_sheet;
pub mod collection;
pub mod entities;
pub mod error;
pub mod events;
pub mod ids;

pub use aggregates::CharacterRecord;
pub use error::DomainError;

// Re-export entities
pub use entities::{Entry, Section};

// Re-export collection management
pub use collection::{
    add_entry, clear_section, ensure_default_rows, AlwaysConfirm, EntryCollectionManager,
    RemovalConfirmation,
};

// Re-export schema registry
pub use character_sheet::{FieldSchema, SectionKind, CHARACTER_INFO_FIELDS};

// Re-export events
pub use events::{DefaultRowAdded, RemovalOutcome};

// Re-export ID types
pub use ids::EntryId;
