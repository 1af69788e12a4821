//! Sheetkeep Shared - the character sheet document
//!
//! This crate converts between the in-memory [`CharacterRecord`] and the
//! transportable JSON document:
//! - [`serialize`] / [`save`] capture a record
//! - [`restore`] / [`load`] rebuild one, tolerating partial documents
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, serde_json, thiserror, and tracing
//! 2. **No I/O** - bytes in, bytes out; moving files is the caller's job
//! 3. **Lossless** - any string the form can hold survives a save/load cycle
//!
//! [`CharacterRecord`]: sheetkeep_domain::CharacterRecord

pub mod character_sheet;
pub mod error;
pub mod restore;

pub use character_sheet::{save, serialize, CharacterDocument, Row, DEFAULT_FILE_NAME};
pub use error::DocumentError;
pub use restore::{apply_document, load, restore, RestoreSummary};
