//! Domain entities - Core sheet objects with identity

mod entry;
mod section;

pub use entry::Entry;
pub use section::Section;
