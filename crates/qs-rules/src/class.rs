//! The Pathfinder 1e core classes, each mapped onto a real-life working style.
//!
//! A class fixes the hit die, attack and save progressions, a suggested
//! primary attribute, and the level-0 spells a new character starts with.

use qs_core::{Attribute, Save};

use crate::progression::{
    BabProgression, base_attack_bonus, max_hit_points, saving_throw_base,
};

/// A playable class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassDefinition {
    /// Class name.
    pub name: &'static str,
    /// Rules description.
    pub description: &'static str,
    /// How the class maps onto everyday life.
    pub life_philosophy: &'static str,
    /// Hit die size (daily energy).
    pub hit_die: u32,
    /// Attack bonus progression (task momentum).
    pub bab: BabProgression,
    /// Saves with the good progression.
    pub good_saves: &'static [Save],
    /// Suggested focus attribute.
    pub primary_attribute: Attribute,
    /// Level-0 spells granted at creation.
    pub starting_spells: &'static [&'static str],
}

impl ClassDefinition {
    /// Returns true if `save` uses the good progression for this class.
    pub fn has_good_save(&self, save: Save) -> bool {
        self.good_saves.contains(&save)
    }
}

/// All core classes, in alphabetical order.
pub const PF1_CLASSES: &[ClassDefinition] = &[
    ClassDefinition {
        name: "Barbarian",
        description: "A fierce warrior of primitive background who can enter a battle rage.",
        life_philosophy: "The Athlete. You rely on bursts of high energy and physical prowess. Great for heavy labor or intense workout regimes.",
        hit_die: 12,
        bab: BabProgression::Full,
        good_saves: &[Save::Fortitude],
        primary_attribute: Attribute::Str,
        starting_spells: &[],
    },
    ClassDefinition {
        name: "Bard",
        description: "A performer whose music and poetics produce magical effects.",
        life_philosophy: "The Networker. You thrive on social connection, communication, and adaptability. Great for sales, management, or content creation.",
        hit_die: 8,
        bab: BabProgression::Medium,
        good_saves: &[Save::Reflex, Save::Will],
        primary_attribute: Attribute::Cha,
        starting_spells: &[
            "Detect Magic",
            "Prestidigitation",
            "Read Magic",
            "Summon Instrument",
        ],
    },
    ClassDefinition {
        name: "Cleric",
        description: "A master of divine magic and a capable warrior.",
        life_philosophy: "The Caregiver. You focus on wellness, routine, and supporting others. Great for healthcare, service, or self-improvement focus.",
        hit_die: 8,
        bab: BabProgression::Medium,
        good_saves: &[Save::Fortitude, Save::Will],
        primary_attribute: Attribute::Wis,
        starting_spells: &["Create Water", "Detect Magic", "Light", "Purify Food and Drink"],
    },
    ClassDefinition {
        name: "Druid",
        description: "A worshiper of the wild nature, maintaining balance.",
        life_philosophy: "The Naturalist. You seek balance in environment and self. Great for outdoor work, biology, or sustainable living.",
        hit_die: 8,
        bab: BabProgression::Medium,
        good_saves: &[Save::Fortitude, Save::Will],
        primary_attribute: Attribute::Wis,
        starting_spells: &["Detect Magic", "Know Direction", "Light", "Stabilize"],
    },
    ClassDefinition {
        name: "Fighter",
        description: "A master of martial combat, skilled with many weapons.",
        life_philosophy: "The Grinder. You are disciplined, consistent, and tackle tasks head-on. The ultimate generalist productivity build.",
        hit_die: 10,
        bab: BabProgression::Full,
        good_saves: &[Save::Fortitude],
        primary_attribute: Attribute::Str,
        starting_spells: &[],
    },
    ClassDefinition {
        name: "Monk",
        description: "A student of martial arts who trains his body and mind.",
        life_philosophy: "The Disciplined. You value habit stacking, perfectionism, and mental clarity. Excellent for strict routines.",
        hit_die: 8,
        bab: BabProgression::Medium,
        good_saves: &[Save::Fortitude, Save::Reflex, Save::Will],
        primary_attribute: Attribute::Wis,
        starting_spells: &[],
    },
    ClassDefinition {
        name: "Paladin",
        description: "A holy warrior bound to a sacred oath.",
        life_philosophy: "The Crusader. You are driven by a strict code of conduct or moral cause. High discipline and charisma. Leadership roles.",
        hit_die: 10,
        bab: BabProgression::Full,
        good_saves: &[Save::Fortitude, Save::Will],
        primary_attribute: Attribute::Str,
        starting_spells: &["Detect Poison", "Read Magic"],
    },
    ClassDefinition {
        name: "Ranger",
        description: "A warrior who uses martial prowess and nature magic to combat threats.",
        life_philosophy: "The Strategist. You specialize in tracking specific goals (Favored Enemies). Great for project management or research.",
        hit_die: 10,
        bab: BabProgression::Full,
        good_saves: &[Save::Fortitude, Save::Reflex],
        primary_attribute: Attribute::Dex,
        starting_spells: &["Read Magic"],
    },
    ClassDefinition {
        name: "Rogue",
        description: "A skillful thief who relies on stealth and sneak attacks.",
        life_philosophy: "The Freelancer. You are adaptable, skill-focused, and work best with flexible hours and varied tasks.",
        hit_die: 8,
        bab: BabProgression::Medium,
        good_saves: &[Save::Reflex],
        primary_attribute: Attribute::Dex,
        starting_spells: &[],
    },
    ClassDefinition {
        name: "Sorcerer",
        description: "A spellcaster born with innate magical ability.",
        life_philosophy: "The Prodigy. You rely on natural talent and force of personality rather than book learning. High burst output.",
        hit_die: 6,
        bab: BabProgression::Poor,
        good_saves: &[Save::Will],
        primary_attribute: Attribute::Cha,
        starting_spells: &["Acid Splash", "Detect Magic", "Mage Hand", "Read Magic"],
    },
    ClassDefinition {
        name: "Wizard",
        description: "A scholarly magic-user capable of manipulating reality.",
        life_philosophy: "The Academic. You focus on deep work, study, and mental expansion. Low physical stamina, but high output in complex tasks.",
        hit_die: 6,
        bab: BabProgression::Poor,
        good_saves: &[Save::Will],
        primary_attribute: Attribute::Int,
        starting_spells: &["Detect Magic", "Light", "Mage Hand", "Prestidigitation"],
    },
];

/// Index of the Fighter in [`PF1_CLASSES`], used for unknown class names.
const FALLBACK_CLASS: usize = 4;

/// Look up a class by name (case-insensitive), falling back to Fighter.
pub fn find_class(name: &str) -> &'static ClassDefinition {
    let lower = name.trim().to_lowercase();
    PF1_CLASSES
        .iter()
        .find(|c| c.name.to_lowercase() == lower)
        .unwrap_or(&PF1_CLASSES[FALLBACK_CLASS])
}

/// Combat numbers a class grants at a given level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseStats {
    /// Base attack bonus.
    pub bab: u32,
    /// Fortitude base save.
    pub base_fort: u32,
    /// Reflex base save.
    pub base_ref: u32,
    /// Will base save.
    pub base_will: u32,
    /// Maximum hit points.
    pub hp_max: u32,
}

impl BaseStats {
    /// Compute the class's base numbers at `level`.
    pub fn for_class(class: &ClassDefinition, level: u32) -> Self {
        let save = |s: Save| saving_throw_base(class.has_good_save(s), level);
        Self {
            bab: base_attack_bonus(class.bab, level),
            base_fort: save(Save::Fortitude),
            base_ref: save(Save::Reflex),
            base_will: save(Save::Will),
            hp_max: max_hit_points(class.hit_die, level),
        }
    }
}
