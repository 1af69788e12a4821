//! Aggregate roots - domain objects that own their related data
//!
//! Each aggregate:
//! - Owns all its constituent parts (enforced by Rust ownership)
//! - Exposes behavior through methods, not public fields
//! - Is passed explicitly to every operation, never held globally

pub mod character_record;

pub use character_record::CharacterRecord;
