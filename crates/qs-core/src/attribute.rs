use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the six ability scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Attribute {
    /// Strength.
    #[serde(rename = "STR")]
    Str,
    /// Dexterity.
    #[serde(rename = "DEX")]
    Dex,
    /// Constitution.
    #[serde(rename = "CON")]
    Con,
    /// Intelligence.
    #[serde(rename = "INT")]
    Int,
    /// Wisdom.
    #[serde(rename = "WIS")]
    Wis,
    /// Charisma.
    #[serde(rename = "CHA")]
    Cha,
}

impl Attribute {
    /// All six attributes in sheet order.
    pub const ALL: [Attribute; 6] = [
        Self::Str,
        Self::Dex,
        Self::Con,
        Self::Int,
        Self::Wis,
        Self::Cha,
    ];

    /// Three-letter abbreviation (e.g. "STR").
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::Str => "STR",
            Self::Dex => "DEX",
            Self::Con => "CON",
            Self::Int => "INT",
            Self::Wis => "WIS",
            Self::Cha => "CHA",
        }
    }

    /// Full rules name (e.g. "Strength").
    pub fn name(self) -> &'static str {
        match self {
            Self::Str => "Strength",
            Self::Dex => "Dexterity",
            Self::Con => "Constitution",
            Self::Int => "Intelligence",
            Self::Wis => "Wisdom",
            Self::Cha => "Charisma",
        }
    }

    /// The everyday habit this attribute stands for.
    pub fn life_label(self) -> &'static str {
        match self {
            Self::Str => "Force",
            Self::Dex => "Speed",
            Self::Con => "Health",
            Self::Int => "Logic",
            Self::Wis => "Will",
            Self::Cha => "Social",
        }
    }

    /// Parse an abbreviation or full name, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|a| {
            a.abbreviation().eq_ignore_ascii_case(&lower) || a.name().to_lowercase() == lower
        })
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// One of the three saving throws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Save {
    /// Fortitude, governed by Constitution.
    #[serde(rename = "Fort")]
    Fortitude,
    /// Reflex, governed by Dexterity.
    #[serde(rename = "Ref")]
    Reflex,
    /// Will, governed by Wisdom.
    #[serde(rename = "Will")]
    Will,
}

impl Save {
    /// All three saves in sheet order.
    pub const ALL: [Save; 3] = [Self::Fortitude, Self::Reflex, Self::Will];

    /// The ability whose modifier is added to this save.
    pub fn ability(self) -> Attribute {
        match self {
            Self::Fortitude => Attribute::Con,
            Self::Reflex => Attribute::Dex,
            Self::Will => Attribute::Wis,
        }
    }

    /// Parse "fort", "fortitude", "ref", "reflex" or "will".
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "fort" | "fortitude" => Some(Self::Fortitude),
            "ref" | "reflex" => Some(Self::Reflex),
            "will" => Some(Self::Will),
            _ => None,
        }
    }
}

impl fmt::Display for Save {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fortitude => write!(f, "Fortitude"),
            Self::Reflex => write!(f, "Reflex"),
            Self::Will => write!(f, "Will"),
        }
    }
}
