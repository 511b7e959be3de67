//! Derived, read-only view of a stored character.
//!
//! The stored record only holds inputs (base scores, ranks, misc
//! modifiers). [`SheetView`] recomputes every number a character sheet
//! displays, so derived values never go stale.

use qs_core::{Attribute, CharacterStats, Save};

use crate::ability::{ability_modifier, saving_throw_total, skill_total, total_ability_score};
use crate::progression::{XpProgress, experience_threshold_for_level, header_progress};

/// One ability score with its derived modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbilityView {
    /// Which ability.
    pub attribute: Attribute,
    /// Stored base score.
    pub base: i32,
    /// Temporary modifier.
    pub temp: i32,
    /// Base plus temporary.
    pub total: i32,
    /// Modifier of the total.
    pub modifier: i32,
}

/// One saving throw broken into its parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveView {
    /// Which save.
    pub save: Save,
    /// Base value.
    pub base: i32,
    /// Misc modifier.
    pub misc: i32,
    /// Governing ability modifier.
    pub ability_modifier: i32,
    /// Sum of the parts.
    pub total: i32,
}

/// One skill with its computed total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillView {
    /// Skill name.
    pub name: String,
    /// Governing ability.
    pub attribute: Attribute,
    /// Invested ranks.
    pub ranks: u32,
    /// Class skill flag.
    pub is_class_skill: bool,
    /// Misc modifier.
    pub misc_mod: i32,
    /// Computed total.
    pub total: i32,
}

/// Every derived number of a character sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetView {
    /// Abilities in sheet order.
    pub abilities: Vec<AbilityView>,
    /// Fortitude, Reflex, Will.
    pub saves: Vec<SaveView>,
    /// Skills in stored order.
    pub skills: Vec<SkillView>,
    /// Experience needed to reach the next level.
    pub next_level_xp: u32,
    /// Header bar progress (`level * 100` denominator).
    pub header: XpProgress,
}

impl SheetView {
    /// Compute the view for a character.
    pub fn new(stats: &CharacterStats) -> Self {
        let total = |attr: Attribute| total_ability_score(stats.base_score(attr), stats.temp_score(attr));

        let abilities = Attribute::ALL
            .into_iter()
            .map(|attribute| {
                let total = total(attribute);
                AbilityView {
                    attribute,
                    base: stats.base_score(attribute),
                    temp: stats.temp_score(attribute),
                    total,
                    modifier: ability_modifier(total),
                }
            })
            .collect();

        let saves = Save::ALL
            .into_iter()
            .map(|save| {
                let ability_total = total(save.ability());
                SaveView {
                    save,
                    base: stats.save_base(save),
                    misc: stats.save_misc(save),
                    ability_modifier: ability_modifier(ability_total),
                    total: saving_throw_total(
                        stats.save_base(save),
                        stats.save_misc(save),
                        ability_total,
                    ),
                }
            })
            .collect();

        let skills = stats
            .skills
            .iter()
            .map(|skill| SkillView {
                name: skill.name.clone(),
                attribute: skill.attribute,
                ranks: skill.ranks,
                is_class_skill: skill.is_class_skill,
                misc_mod: skill.misc_mod,
                total: skill_total(skill, total(skill.attribute)),
            })
            .collect();

        Self {
            abilities,
            saves,
            skills,
            next_level_xp: experience_threshold_for_level(stats.level),
            header: header_progress(stats.level, stats.xp),
        }
    }

    /// The view of one ability.
    pub fn ability(&self, attribute: Attribute) -> &AbilityView {
        // `abilities` always holds all six in `Attribute::ALL` order.
        &self.abilities[attribute as usize]
    }

    /// The view of one save.
    pub fn save(&self, save: Save) -> &SaveView {
        &self.saves[save as usize]
    }

    /// The view of a skill by name.
    pub fn skill(&self, name: &str) -> Option<&SkillView> {
        self.skills.iter().find(|s| s.name == name)
    }
}

/// Format a modifier with an explicit sign (`+2`, `0`, `-1`).
pub fn signed(value: i32) -> String {
    if value > 0 {
        format!("+{value}")
    } else {
        value.to_string()
    }
}
