//! Character Sheet Schema Registry
//!
//! This module defines the fixed shape of the character sheet form: the
//! top-level character info fields and the six repeated sections, each with
//! its own ordered field list.
//!
//! # Design Philosophy
//!
//! - **Positional**: field order is the serialization order, names are display-only
//! - **Static**: every schema is a `'static` constant, there is no runtime registration
//! - **Fixed section order**: attacks, skills, achievements, inventory, player notes, GM notes

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

// =============================================================================
// Field Schema
// =============================================================================

/// Ordered field names for one section kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSchema {
    /// Field labels in display and serialization order
    pub fields: &'static [&'static str],
    /// Whether entries are edited as multi-line text
    pub multiline: bool,
}

impl FieldSchema {
    /// Number of fields every entry of this schema holds.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Position of a field by its label.
    pub fn position(&self, field: &str) -> Option<usize> {
        self.fields.iter().position(|f| *f == field)
    }
}

const ATTACK_SCHEMA: FieldSchema = FieldSchema {
    fields: &["Attack Name", "Type", "Ability Used", "Attack Bonus", "Damage"],
    multiline: false,
};

const SKILL_SCHEMA: FieldSchema = FieldSchema {
    fields: &["Skill Name", "Base Ability", "Level", "Benefit"],
    multiline: false,
};

const ACHIEVEMENT_SCHEMA: FieldSchema = FieldSchema {
    fields: &["Achievement Name", "How Earned", "Benefits"],
    multiline: false,
};

const ITEM_SCHEMA: FieldSchema = FieldSchema {
    fields: &["Item Name", "Type", "Benefits / Effects"],
    multiline: false,
};

const NOTE_SCHEMA: FieldSchema = FieldSchema {
    fields: &["Note"],
    multiline: true,
};

/// Labels of the top-level scalar inputs, in form order.
///
/// Character info is serialized positionally, so this order is part of the
/// document format.
pub const CHARACTER_INFO_FIELDS: &[&str] = &[
    "Character Name",
    "Player Name",
    "Class",
    "Level",
    "Race / Ancestry",
    "Background",
    "Alignment",
    "Experience",
    "Hit Points",
    "Armor Class",
    "Speed",
    "Strength",
    "Dexterity",
    "Constitution",
    "Intelligence",
    "Wisdom",
    "Charisma",
];

// =============================================================================
// Section Kind
// =============================================================================

/// One of the six repeated sections of the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKind {
    Attacks,
    Skills,
    Achievements,
    Inventory,
    PlayerNotes,
    GmNotes,
}

impl SectionKind {
    /// All section kinds in the fixed sheet order.
    pub const ALL: [SectionKind; 6] = [
        Self::Attacks,
        Self::Skills,
        Self::Achievements,
        Self::Inventory,
        Self::PlayerNotes,
        Self::GmNotes,
    ];

    /// The field schema for entries of this kind.
    pub fn schema(self) -> &'static FieldSchema {
        match self {
            Self::Attacks => &ATTACK_SCHEMA,
            Self::Skills => &SKILL_SCHEMA,
            Self::Achievements => &ACHIEVEMENT_SCHEMA,
            Self::Inventory => &ITEM_SCHEMA,
            Self::PlayerNotes | Self::GmNotes => &NOTE_SCHEMA,
        }
    }

    /// Key of this section in the saved document.
    pub fn document_key(self) -> &'static str {
        match self {
            Self::Attacks => "attacks",
            Self::Skills => "skills",
            Self::Achievements => "achievements",
            Self::Inventory => "inventory",
            Self::PlayerNotes => "playerNotes",
            Self::GmNotes => "gmNotes",
        }
    }

    /// Header shown above the section.
    pub fn label(self) -> &'static str {
        match self {
            Self::Attacks => "Attacks",
            Self::Skills => "Skills",
            Self::Achievements => "Achievements",
            Self::Inventory => "Inventory",
            Self::PlayerNotes => "Player Notes",
            Self::GmNotes => "GM Notes",
        }
    }

    /// Position of this kind in [`SectionKind::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Self::Attacks => 0,
            Self::Skills => 1,
            Self::Achievements => 2,
            Self::Inventory => 3,
            Self::PlayerNotes => 4,
            Self::GmNotes => 5,
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.document_key())
    }
}

impl std::str::FromStr for SectionKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "attacks" | "attack" => Ok(Self::Attacks),
            "skills" | "skill" => Ok(Self::Skills),
            "achievements" | "achievement" => Ok(Self::Achievements),
            "inventory" | "items" | "item" => Ok(Self::Inventory),
            "playernotes" | "player_notes" | "notes" => Ok(Self::PlayerNotes),
            "gmnotes" | "gm_notes" | "gm" => Ok(Self::GmNotes),
            _ => Err(DomainError::unknown_section(s)),
        }
    }
}
