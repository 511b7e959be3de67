use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::attribute::{Attribute, Save};
use crate::error::{CoreError, CoreResult};
use crate::id::SpellId;

/// The Pathfinder 1e skill list with each skill's governing ability.
pub const PF1_SKILLS: &[(&str, Attribute)] = &[
    ("Acrobatics", Attribute::Dex),
    ("Appraise", Attribute::Int),
    ("Bluff", Attribute::Cha),
    ("Climb", Attribute::Str),
    ("Craft", Attribute::Int),
    ("Diplomacy", Attribute::Cha),
    ("Disable Device", Attribute::Dex),
    ("Disguise", Attribute::Cha),
    ("Escape Artist", Attribute::Dex),
    ("Fly", Attribute::Dex),
    ("Handle Animal", Attribute::Cha),
    ("Heal", Attribute::Wis),
    ("Intimidate", Attribute::Cha),
    ("Knowledge (Arcana)", Attribute::Int),
    ("Knowledge (Dungeoneering)", Attribute::Int),
    ("Knowledge (Engineering)", Attribute::Int),
    ("Knowledge (Geography)", Attribute::Int),
    ("Knowledge (History)", Attribute::Int),
    ("Knowledge (Local)", Attribute::Int),
    ("Knowledge (Nature)", Attribute::Int),
    ("Knowledge (Nobility)", Attribute::Int),
    ("Knowledge (Planes)", Attribute::Int),
    ("Knowledge (Religion)", Attribute::Int),
    ("Linguistics", Attribute::Int),
    ("Perception", Attribute::Wis),
    ("Perform", Attribute::Cha),
    ("Profession", Attribute::Wis),
    ("Ride", Attribute::Dex),
    ("Sense Motive", Attribute::Wis),
    ("Sleight of Hand", Attribute::Dex),
    ("Spellcraft", Attribute::Int),
    ("Stealth", Attribute::Dex),
    ("Survival", Attribute::Wis),
    ("Swim", Attribute::Str),
    ("Use Magic Device", Attribute::Cha),
];

/// A trained or untrained skill on the character sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    /// Skill name, unique within a character.
    pub name: String,
    /// The ability whose modifier applies.
    pub attribute: Attribute,
    /// Invested ranks.
    pub ranks: u32,
    /// Class skills gain +3 once any ranks are invested.
    pub is_class_skill: bool,
    /// Miscellaneous modifier (items, traits, circumstance).
    pub misc_mod: i32,
}

impl Skill {
    /// A skill with no ranks, no class-skill flag and no misc modifier.
    pub fn untrained(name: impl Into<String>, attribute: Attribute) -> Self {
        Self {
            name: name.into(),
            attribute,
            ranks: 0,
            is_class_skill: false,
            misc_mod: 0,
        }
    }

    /// The full PF1 skill list with zero ranks.
    pub fn pf1_defaults() -> Vec<Self> {
        PF1_SKILLS
            .iter()
            .map(|(name, attr)| Self::untrained(*name, *attr))
            .collect()
    }
}

/// A granular change to one skill; unset fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillPatch {
    /// New rank count.
    pub ranks: Option<u32>,
    /// New class-skill flag.
    pub is_class_skill: Option<bool>,
    /// New miscellaneous modifier.
    pub misc_mod: Option<i32>,
}

impl SkillPatch {
    /// Returns true if the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.ranks.is_none() && self.is_class_skill.is_none() && self.misc_mod.is_none()
    }

    /// Merge this patch into a skill.
    pub fn apply(&self, skill: &mut Skill) {
        if let Some(ranks) = self.ranks {
            skill.ranks = ranks;
        }
        if let Some(flag) = self.is_class_skill {
            skill.is_class_skill = flag;
        }
        if let Some(misc) = self.misc_mod {
            skill.misc_mod = misc;
        }
    }
}

/// A spell known by the character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spell {
    /// Identifier within the character's spell list.
    pub id: SpellId,
    /// Spell level, 0 (cantrip/orison) through 9.
    pub level: u8,
    /// Spell name.
    pub name: String,
    /// Optional rules or flavour text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Prepared for the day.
    pub prepared: bool,
    /// Already cast today.
    pub used: bool,
}

impl Spell {
    /// Highest spell level.
    pub const MAX_LEVEL: u8 = 9;

    /// A new, unprepared and unused spell.
    pub fn new(id: SpellId, level: u8, name: impl Into<String>) -> Self {
        Self {
            id,
            level,
            name: name.into(),
            description: None,
            prepared: false,
            used: false,
        }
    }
}

/// The singleton character record.
///
/// Field names serialize in camelCase (`classType`, `strTemp`, `baseFort`,
/// `hpMax`, ...) so stored documents keep their established shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterStats {
    /// Character name.
    pub name: String,
    /// Free-form class label, e.g. "Wizard 3 / Fighter 1".
    pub class_type: String,
    /// Character level, starting at 1.
    pub level: u32,
    /// Accumulated experience.
    pub xp: u32,

    /// Base Strength.
    pub str: i32,
    /// Base Dexterity.
    pub dex: i32,
    /// Base Constitution.
    pub con: i32,
    /// Base Intelligence.
    pub int: i32,
    /// Base Wisdom.
    pub wis: i32,
    /// Base Charisma.
    pub cha: i32,

    /// Temporary Strength modifier.
    pub str_temp: i32,
    /// Temporary Dexterity modifier.
    pub dex_temp: i32,
    /// Temporary Constitution modifier.
    pub con_temp: i32,
    /// Temporary Intelligence modifier.
    pub int_temp: i32,
    /// Temporary Wisdom modifier.
    pub wis_temp: i32,
    /// Temporary Charisma modifier.
    pub cha_temp: i32,

    /// Base attack bonus.
    pub bab: i32,
    /// Maximum hit points.
    pub hp_max: i32,
    /// Current hit points.
    pub hp_current: i32,
    /// Armor class.
    pub ac: i32,

    /// Fortitude base save.
    pub base_fort: i32,
    /// Reflex base save.
    pub base_ref: i32,
    /// Will base save.
    pub base_will: i32,
    /// Fortitude misc modifier.
    pub misc_fort: i32,
    /// Reflex misc modifier.
    pub misc_ref: i32,
    /// Will misc modifier.
    pub misc_will: i32,

    /// Skills in sheet order.
    pub skills: Vec<Skill>,
    /// Known spells in insertion order.
    pub spells: Vec<Spell>,
}

impl Default for CharacterStats {
    /// The placeholder character seeded on first launch.
    fn default() -> Self {
        Self {
            name: Self::PLACEHOLDER_NAME.to_string(),
            class_type: "Commoner 1".to_string(),
            level: 1,
            xp: 0,
            str: 10,
            dex: 10,
            con: 10,
            int: 10,
            wis: 10,
            cha: 10,
            str_temp: 0,
            dex_temp: 0,
            con_temp: 0,
            int_temp: 0,
            wis_temp: 0,
            cha_temp: 0,
            bab: 0,
            hp_max: 10,
            hp_current: 10,
            ac: 10,
            base_fort: 0,
            base_ref: 0,
            base_will: 0,
            misc_fort: 0,
            misc_ref: 0,
            misc_will: 0,
            skills: Skill::pf1_defaults(),
            spells: Vec::new(),
        }
    }
}

impl CharacterStats {
    /// Name given to the seeded placeholder character.
    pub const PLACEHOLDER_NAME: &'static str = "Adventurer";

    /// Returns true while the character is still the untouched seed, i.e.
    /// character creation has not happened yet.
    pub fn is_placeholder(&self) -> bool {
        self.name == Self::PLACEHOLDER_NAME && self.level == 1 && self.str == 10 && self.xp == 0
    }

    /// Base score of an attribute.
    pub fn base_score(&self, attr: Attribute) -> i32 {
        match attr {
            Attribute::Str => self.str,
            Attribute::Dex => self.dex,
            Attribute::Con => self.con,
            Attribute::Int => self.int,
            Attribute::Wis => self.wis,
            Attribute::Cha => self.cha,
        }
    }

    /// Mutable base score of an attribute.
    pub fn base_score_mut(&mut self, attr: Attribute) -> &mut i32 {
        match attr {
            Attribute::Str => &mut self.str,
            Attribute::Dex => &mut self.dex,
            Attribute::Con => &mut self.con,
            Attribute::Int => &mut self.int,
            Attribute::Wis => &mut self.wis,
            Attribute::Cha => &mut self.cha,
        }
    }

    /// Temporary modifier of an attribute.
    pub fn temp_score(&self, attr: Attribute) -> i32 {
        match attr {
            Attribute::Str => self.str_temp,
            Attribute::Dex => self.dex_temp,
            Attribute::Con => self.con_temp,
            Attribute::Int => self.int_temp,
            Attribute::Wis => self.wis_temp,
            Attribute::Cha => self.cha_temp,
        }
    }

    /// Mutable temporary modifier of an attribute.
    pub fn temp_score_mut(&mut self, attr: Attribute) -> &mut i32 {
        match attr {
            Attribute::Str => &mut self.str_temp,
            Attribute::Dex => &mut self.dex_temp,
            Attribute::Con => &mut self.con_temp,
            Attribute::Int => &mut self.int_temp,
            Attribute::Wis => &mut self.wis_temp,
            Attribute::Cha => &mut self.cha_temp,
        }
    }

    /// Base value of a saving throw.
    pub fn save_base(&self, save: Save) -> i32 {
        match save {
            Save::Fortitude => self.base_fort,
            Save::Reflex => self.base_ref,
            Save::Will => self.base_will,
        }
    }

    /// Misc modifier of a saving throw.
    pub fn save_misc(&self, save: Save) -> i32 {
        match save {
            Save::Fortitude => self.misc_fort,
            Save::Reflex => self.misc_ref,
            Save::Will => self.misc_will,
        }
    }

    /// Find a skill by exact name.
    pub fn skill(&self, name: &str) -> Option<&Skill> {
        self.skills.iter().find(|s| s.name == name)
    }

    /// Find a spell by id.
    pub fn spell(&self, id: SpellId) -> Option<&Spell> {
        self.spells.iter().find(|s| s.id == id)
    }

    /// The id a newly added spell should receive.
    pub fn next_spell_id(&self) -> SpellId {
        let max = self.spells.iter().map(|s| s.id.0).max().unwrap_or(0);
        SpellId(max.saturating_add(1))
    }

    /// Check the record's invariants.
    pub fn validate(&self) -> CoreResult<()> {
        if self.level == 0 {
            return Err(CoreError::Validation("level must be at least 1".to_string()));
        }
        validate_skills(&self.skills)?;
        validate_spells(&self.spells)
    }
}

fn validate_skills(skills: &[Skill]) -> CoreResult<()> {
    let mut seen = HashSet::new();
    for skill in skills {
        if !seen.insert(skill.name.as_str()) {
            return Err(CoreError::DuplicateSkill(skill.name.clone()));
        }
    }
    Ok(())
}

fn validate_spells(spells: &[Spell]) -> CoreResult<()> {
    let mut seen = HashSet::new();
    for spell in spells {
        if spell.level > Spell::MAX_LEVEL {
            return Err(CoreError::InvalidSpellLevel(spell.level));
        }
        if !seen.insert(spell.id) {
            return Err(CoreError::Validation(format!(
                "duplicate spell id {}",
                spell.id
            )));
        }
    }
    Ok(())
}

/// A partial update of the character record.
///
/// Every `Some` field replaces the stored value; `None` fields are left
/// untouched. `skills` and `spells` replace the whole list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CharacterPatch {
    /// New name.
    pub name: Option<String>,
    /// New class label.
    pub class_type: Option<String>,
    /// New level.
    pub level: Option<u32>,
    /// New experience total.
    pub xp: Option<u32>,
    /// New base Strength.
    pub str: Option<i32>,
    /// New base Dexterity.
    pub dex: Option<i32>,
    /// New base Constitution.
    pub con: Option<i32>,
    /// New base Intelligence.
    pub int: Option<i32>,
    /// New base Wisdom.
    pub wis: Option<i32>,
    /// New base Charisma.
    pub cha: Option<i32>,
    /// New temporary Strength modifier.
    pub str_temp: Option<i32>,
    /// New temporary Dexterity modifier.
    pub dex_temp: Option<i32>,
    /// New temporary Constitution modifier.
    pub con_temp: Option<i32>,
    /// New temporary Intelligence modifier.
    pub int_temp: Option<i32>,
    /// New temporary Wisdom modifier.
    pub wis_temp: Option<i32>,
    /// New temporary Charisma modifier.
    pub cha_temp: Option<i32>,
    /// New base attack bonus.
    pub bab: Option<i32>,
    /// New maximum hit points.
    pub hp_max: Option<i32>,
    /// New current hit points.
    pub hp_current: Option<i32>,
    /// New armor class.
    pub ac: Option<i32>,
    /// New Fortitude base save.
    pub base_fort: Option<i32>,
    /// New Reflex base save.
    pub base_ref: Option<i32>,
    /// New Will base save.
    pub base_will: Option<i32>,
    /// New Fortitude misc modifier.
    pub misc_fort: Option<i32>,
    /// New Reflex misc modifier.
    pub misc_ref: Option<i32>,
    /// New Will misc modifier.
    pub misc_will: Option<i32>,
    /// Replacement skill list.
    pub skills: Option<Vec<Skill>>,
    /// Replacement spell list.
    pub spells: Option<Vec<Spell>>,
}

impl CharacterPatch {
    /// A patch that replaces the skill list.
    pub fn skills(skills: Vec<Skill>) -> Self {
        Self {
            skills: Some(skills),
            ..Self::default()
        }
    }

    /// A patch that replaces the spell list.
    pub fn spells(spells: Vec<Spell>) -> Self {
        Self {
            spells: Some(spells),
            ..Self::default()
        }
    }

    /// A patch that sets one base score.
    pub fn base_score(attr: Attribute, value: i32) -> Self {
        let mut patch = Self::default();
        *patch.base_slot(attr) = Some(value);
        patch
    }

    /// A patch that sets one temporary modifier.
    pub fn temp_score(attr: Attribute, value: i32) -> Self {
        let mut patch = Self::default();
        *patch.temp_slot(attr) = Some(value);
        patch
    }

    /// A patch that sets the base value of a save.
    pub fn save_base(save: Save, value: i32) -> Self {
        let mut patch = Self::default();
        match save {
            Save::Fortitude => patch.base_fort = Some(value),
            Save::Reflex => patch.base_ref = Some(value),
            Save::Will => patch.base_will = Some(value),
        }
        patch
    }

    /// A patch that sets the misc modifier of a save.
    pub fn save_misc(save: Save, value: i32) -> Self {
        let mut patch = Self::default();
        match save {
            Save::Fortitude => patch.misc_fort = Some(value),
            Save::Reflex => patch.misc_ref = Some(value),
            Save::Will => patch.misc_will = Some(value),
        }
        patch
    }

    fn base_slot(&mut self, attr: Attribute) -> &mut Option<i32> {
        match attr {
            Attribute::Str => &mut self.str,
            Attribute::Dex => &mut self.dex,
            Attribute::Con => &mut self.con,
            Attribute::Int => &mut self.int,
            Attribute::Wis => &mut self.wis,
            Attribute::Cha => &mut self.cha,
        }
    }

    fn temp_slot(&mut self, attr: Attribute) -> &mut Option<i32> {
        match attr {
            Attribute::Str => &mut self.str_temp,
            Attribute::Dex => &mut self.dex_temp,
            Attribute::Con => &mut self.con_temp,
            Attribute::Int => &mut self.int_temp,
            Attribute::Wis => &mut self.wis_temp,
            Attribute::Cha => &mut self.cha_temp,
        }
    }

    /// Merge the patch into `stats`.
    ///
    /// The patch is validated first; on error `stats` is unchanged.
    pub fn apply(self, stats: &mut CharacterStats) -> CoreResult<()> {
        if self.level == Some(0) {
            return Err(CoreError::Validation("level must be at least 1".to_string()));
        }
        if let Some(skills) = &self.skills {
            validate_skills(skills)?;
        }
        if let Some(spells) = &self.spells {
            validate_spells(spells)?;
        }

        fn set<T>(slot: &mut T, value: Option<T>) {
            if let Some(v) = value {
                *slot = v;
            }
        }

        set(&mut stats.name, self.name);
        set(&mut stats.class_type, self.class_type);
        set(&mut stats.level, self.level);
        set(&mut stats.xp, self.xp);
        set(&mut stats.str, self.str);
        set(&mut stats.dex, self.dex);
        set(&mut stats.con, self.con);
        set(&mut stats.int, self.int);
        set(&mut stats.wis, self.wis);
        set(&mut stats.cha, self.cha);
        set(&mut stats.str_temp, self.str_temp);
        set(&mut stats.dex_temp, self.dex_temp);
        set(&mut stats.con_temp, self.con_temp);
        set(&mut stats.int_temp, self.int_temp);
        set(&mut stats.wis_temp, self.wis_temp);
        set(&mut stats.cha_temp, self.cha_temp);
        set(&mut stats.bab, self.bab);
        set(&mut stats.hp_max, self.hp_max);
        set(&mut stats.hp_current, self.hp_current);
        set(&mut stats.ac, self.ac);
        set(&mut stats.base_fort, self.base_fort);
        set(&mut stats.base_ref, self.base_ref);
        set(&mut stats.base_will, self.base_will);
        set(&mut stats.misc_fort, self.misc_fort);
        set(&mut stats.misc_ref, self.misc_ref);
        set(&mut stats.misc_will, self.misc_will);
        set(&mut stats.skills, self.skills);
        set(&mut stats.spells, self.spells);
        Ok(())
    }
}
