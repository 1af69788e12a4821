//! Domain Events
//!
//! Return types from collection mutations, communicating what happened when
//! a section was modified so the boundary layer can re-render or log.

pub mod section_events;

pub use section_events::*;
