//! Character Sheet Document - the transportable form of a character record
//!
//! # Document Shape
//!
//! ```text
//! {
//!   "characterInfo": ["...", ...],
//!   "attacks":       [["...", ...], ...],
//!   "skills":        [...],
//!   "achievements":  [...],
//!   "inventory":     [...],
//!   "playerNotes":   [...],
//!   "gmNotes":       [...]
//! }
//! ```
//!
//! Everything is positional: character info follows the form's field order and
//! each entry is the list of its values in schema order. Field names are never
//! written. Every key is always written, even for an empty section.
//!
//! # Reading
//!
//! Reading is lenient once the bytes parse as JSON at all. Missing keys,
//! non-array sections, non-array rows, and non-string values are substituted
//! with empty data rather than rejected. See [`CharacterDocument::from_value`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use sheetkeep_domain::{CharacterRecord, SectionKind};

use crate::error::DocumentError;

/// File name the save collaborator uses when none is configured.
pub const DEFAULT_FILE_NAME: &str = "character.json";

/// UTF-8 byte-order mark some editors put in front of text files.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Positional values of one entry.
pub type Row = Vec<String>;

// =============================================================================
// Character Document
// =============================================================================

/// Serialized character sheet.
///
/// Field order here is the key order of the written document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterDocument {
    #[serde(default)]
    pub character_info: Vec<String>,
    #[serde(default)]
    pub attacks: Vec<Row>,
    #[serde(default)]
    pub skills: Vec<Row>,
    #[serde(default)]
    pub achievements: Vec<Row>,
    #[serde(default)]
    pub inventory: Vec<Row>,
    #[serde(default)]
    pub player_notes: Vec<Row>,
    #[serde(default)]
    pub gm_notes: Vec<Row>,
}

impl CharacterDocument {
    /// Capture a record. Never fails.
    pub fn from_record(record: &CharacterRecord) -> Self {
        let mut document = Self {
            character_info: record.character_info().to_vec(),
            ..Self::default()
        };
        for section in record.sections() {
            *document.rows_mut(section.kind()) = section.rows();
        }
        document
    }

    /// Rows of one section.
    pub fn rows(&self, kind: SectionKind) -> &[Row] {
        match kind {
            SectionKind::Attacks => &self.attacks,
            SectionKind::Skills => &self.skills,
            SectionKind::Achievements => &self.achievements,
            SectionKind::Inventory => &self.inventory,
            SectionKind::PlayerNotes => &self.player_notes,
            SectionKind::GmNotes => &self.gm_notes,
        }
    }

    pub fn rows_mut(&mut self, kind: SectionKind) -> &mut Vec<Row> {
        match kind {
            SectionKind::Attacks => &mut self.attacks,
            SectionKind::Skills => &mut self.skills,
            SectionKind::Achievements => &mut self.achievements,
            SectionKind::Inventory => &mut self.inventory,
            SectionKind::PlayerNotes => &mut self.player_notes,
            SectionKind::GmNotes => &mut self.gm_notes,
        }
    }

    /// Read a document out of any parsed JSON value.
    ///
    /// - a value that is not an object reads as an empty document
    /// - a missing or non-array `characterInfo` or section reads as empty
    /// - a row that is not an array reads as a row with no values
    /// - any non-string leaf reads as `""`
    ///
    /// Keys outside the document shape are ignored. Lengths are kept as given;
    /// fitting them to the schemas happens when the document is applied.
    pub fn from_value(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };

        let mut document = Self {
            character_info: object
                .get("characterInfo")
                .map(strings_from_value)
                .unwrap_or_default(),
            ..Self::default()
        };
        for kind in SectionKind::ALL {
            *document.rows_mut(kind) = object
                .get(kind.document_key())
                .map(rows_from_value)
                .unwrap_or_default();
        }
        document
    }

    /// Parse raw bytes. A leading UTF-8 byte-order mark is skipped.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::Malformed` if the bytes are not JSON.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DocumentError> {
        let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
        let value: Value = serde_json::from_slice(bytes).map_err(DocumentError::Malformed)?;
        Ok(Self::from_value(&value))
    }

    /// Pretty-printed JSON bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, DocumentError> {
        serde_json::to_vec_pretty(self).map_err(DocumentError::Encode)
    }
}

fn strings_from_value(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().map(string_from_value).collect(),
        _ => Vec::new(),
    }
}

fn rows_from_value(value: &Value) -> Vec<Row> {
    match value {
        Value::Array(rows) => rows.iter().map(strings_from_value).collect(),
        _ => Vec::new(),
    }
}

fn string_from_value(value: &Value) -> String {
    value.as_str().map(str::to_owned).unwrap_or_default()
}

// =============================================================================
// Serializer
// =============================================================================

/// Capture a record as a document.
pub fn serialize(record: &CharacterRecord) -> CharacterDocument {
    CharacterDocument::from_record(record)
}

/// Capture a record as pretty-printed JSON bytes, ready to be written.
pub fn save(record: &CharacterRecord) -> Result<Vec<u8>, DocumentError> {
    let bytes = serialize(record).to_bytes()?;
    tracing::debug!(bytes = bytes.len(), "Serialized character sheet");
    Ok(bytes)
}
