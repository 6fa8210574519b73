use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Unique hero id, as assigned by the stats provider
pub type EntryId = u32;

/// Base URL for hero images and icons
pub const STEAM_CDN_URL: &str = "https://cdn.cloudflare.steamstatic.com";

/// Primary attribute of a hero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Attribute {
    #[serde(rename = "str")]
    Strength,
    #[serde(rename = "agi")]
    Agility,
    #[serde(rename = "int")]
    Intelligence,
    #[serde(rename = "all")]
    Universal,
}

impl Attribute {
    pub const ALL: [Attribute; 4] = [
        Attribute::Strength,
        Attribute::Agility,
        Attribute::Intelligence,
        Attribute::Universal,
    ];

    /// Position in [`Attribute::ALL`]
    pub fn index(self) -> usize {
        match self {
            Attribute::Strength => 0,
            Attribute::Agility => 1,
            Attribute::Intelligence => 2,
            Attribute::Universal => 3,
        }
    }

    /// Short tag as used by the stats provider ("str", "agi", ...)
    pub fn short(self) -> &'static str {
        match self {
            Attribute::Strength => "str",
            Attribute::Agility => "agi",
            Attribute::Intelligence => "int",
            Attribute::Universal => "all",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Attribute::Strength => "Strength",
            Attribute::Agility => "Agility",
            Attribute::Intelligence => "Intelligence",
            Attribute::Universal => "Universal",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackType {
    Melee,
    Ranged,
}

impl fmt::Display for AttackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttackType::Melee => write!(f, "Melee"),
            AttackType::Ranged => write!(f, "Ranged"),
        }
    }
}

/// A playable hero. Immutable once loaded.
///
/// Field names follow the provider's hero stats payload. Anything the draft
/// logic does not use is kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    /// Display name, also the text the search box matches against
    #[serde(rename = "localized_name")]
    pub name: String,
    /// Provider-internal name, e.g. `npc_dota_hero_antimage`
    #[serde(rename = "name", default)]
    pub internal_name: String,
    pub primary_attr: Attribute,
    #[serde(default)]
    pub attack_type: Option<AttackType>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub img: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub base_str: f64,
    #[serde(default)]
    pub str_gain: f64,
    #[serde(default)]
    pub base_agi: f64,
    #[serde(default)]
    pub agi_gain: f64,
    #[serde(default)]
    pub base_int: f64,
    #[serde(default)]
    pub int_gain: f64,
    #[serde(default)]
    pub move_speed: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Entry {
    /// Minimal entry with only the fields the listing needs
    pub fn new(id: EntryId, name: impl Into<String>, primary_attr: Attribute) -> Self {
        Self {
            id,
            name: name.into(),
            internal_name: String::new(),
            primary_attr,
            attack_type: None,
            roles: Vec::new(),
            img: None,
            icon: None,
            base_str: 0.0,
            str_gain: 0.0,
            base_agi: 0.0,
            agi_gain: 0.0,
            base_int: 0.0,
            int_gain: 0.0,
            move_speed: 0.0,
            extra: Map::new(),
        }
    }

    pub fn image_url(&self) -> Option<String> {
        self.img.as_ref().map(|path| format!("{}{}", STEAM_CDN_URL, path))
    }

    pub fn icon_url(&self) -> Option<String> {
        self.icon.as_ref().map(|path| format!("{}{}", STEAM_CDN_URL, path))
    }

    /// `base +gain` for each attribute, in str/agi/int order
    pub fn attribute_growth(&self) -> [(Attribute, f64, f64); 3] {
        [
            (Attribute::Strength, self.base_str, self.str_gain),
            (Attribute::Agility, self.base_agi, self.agi_gain),
            (Attribute::Intelligence, self.base_int, self.int_gain),
        ]
    }
}

#[cfg(test)]
#[path = "entry_tests.rs"]
mod entry_tests;
