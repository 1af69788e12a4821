//! Identity for sheet entries.
//!
//! The saved document is positional and never carries ids; they live only for
//! the lifetime of a record so the form can address one entry among identical
//! looking rows.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque handle to one [`Entry`](crate::Entry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for EntryId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}
