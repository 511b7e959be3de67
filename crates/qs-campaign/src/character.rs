//! Character record operations.

use qs_core::{
    Attribute, CharacterPatch, CharacterStats, CoreError, JournalEntry, SkillPatch, Spell,
    SpellId,
};
use qs_rules::{BaseStats, CharacterDraft, SheetView, find_class, sheet_value};

use crate::backend::Backend;
use crate::campaign::Campaign;
use crate::error::{CampaignError, CampaignResult};

impl<B: Backend> Campaign<B> {
    /// The character record.
    pub fn character(&self) -> CampaignResult<&CharacterStats> {
        self.database().character()
    }

    /// Derived sheet numbers for the character.
    pub fn sheet(&self) -> CampaignResult<SheetView> {
        Ok(SheetView::new(self.character()?))
    }

    /// True while the character is still the unnamed placeholder.
    pub fn needs_creation(&self) -> bool {
        match self.character() {
            Ok(stats) => stats.is_placeholder(),
            Err(_) => true,
        }
    }

    /// Merge a partial update into the character.
    ///
    /// Fields absent from the patch are left as they are. Skill and spell
    /// lists in the patch replace the stored lists wholesale.
    pub fn update_character(&mut self, patch: CharacterPatch) -> CampaignResult<()> {
        self.transaction("update character", |db| {
            patch.apply(db.character_mut()?)?;
            Ok(())
        })
    }

    /// Set one base ability score.
    pub fn set_base_score(&mut self, attr: Attribute, value: i32) -> CampaignResult<()> {
        self.update_character(CharacterPatch::base_score(attr, value))
    }

    /// Set one temporary ability modifier.
    pub fn set_temp_score(&mut self, attr: Attribute, value: i32) -> CampaignResult<()> {
        self.update_character(CharacterPatch::temp_score(attr, value))
    }

    /// Change one skill's ranks, class-skill flag, or misc modifier.
    pub fn update_skill(&mut self, name: &str, patch: SkillPatch) -> CampaignResult<()> {
        self.transaction("update skill", |db| {
            let stats = db.character_mut()?;
            let mut skills = stats.skills.clone();
            let skill = skills
                .iter_mut()
                .find(|s| s.name.eq_ignore_ascii_case(name.trim()))
                .ok_or_else(|| CoreError::UnknownSkill(name.to_string()))?;
            patch.apply(skill);
            CharacterPatch::skills(skills).apply(stats)?;
            Ok(())
        })
    }

    /// Learn a new spell. Returns its id.
    pub fn add_spell(
        &mut self,
        name: &str,
        level: u8,
        description: Option<String>,
    ) -> CampaignResult<SpellId> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CampaignError::Validation(
                "spell name must not be empty".into(),
            ));
        }
        if level > Spell::MAX_LEVEL {
            return Err(CoreError::InvalidSpellLevel(level).into());
        }
        self.transaction("add spell", |db| {
            let stats = db.character_mut()?;
            let id = stats.next_spell_id();
            let mut spell = Spell::new(id, level, name);
            spell.description = description.filter(|d| !d.trim().is_empty());
            let mut spells = stats.spells.clone();
            spells.push(spell);
            CharacterPatch::spells(spells).apply(stats)?;
            Ok(id)
        })
    }

    /// Forget a spell.
    pub fn remove_spell(&mut self, id: SpellId) -> CampaignResult<()> {
        self.transaction("remove spell", |db| {
            let stats = db.character_mut()?;
            if stats.spell(id).is_none() {
                return Err(CoreError::SpellNotFound(id).into());
            }
            let spells = stats.spells.iter().filter(|s| s.id != id).cloned().collect();
            CharacterPatch::spells(spells).apply(stats)?;
            Ok(())
        })
    }

    /// Flip a spell's prepared flag. Returns the new value.
    pub fn toggle_spell_prepared(&mut self, id: SpellId) -> CampaignResult<bool> {
        self.modify_spell("toggle prepared", id, |spell| {
            spell.prepared = !spell.prepared;
            spell.prepared
        })
    }

    /// Flip a spell's used flag. Returns the new value.
    pub fn toggle_spell_used(&mut self, id: SpellId) -> CampaignResult<bool> {
        self.modify_spell("toggle used", id, |spell| {
            spell.used = !spell.used;
            spell.used
        })
    }

    fn modify_spell<T>(
        &mut self,
        operation: &str,
        id: SpellId,
        change: impl FnOnce(&mut Spell) -> T,
    ) -> CampaignResult<T> {
        self.transaction(operation, |db| {
            let stats = db.character_mut()?;
            let mut spells = stats.spells.clone();
            let spell = spells
                .iter_mut()
                .find(|s| s.id == id)
                .ok_or(CoreError::SpellNotFound(id))?;
            let value = change(spell);
            CharacterPatch::spells(spells).apply(stats)?;
            Ok(value)
        })
    }

    /// Recompute class-derived numbers for a class and level.
    ///
    /// Sets the class label, level, attack bonus, base saves, and maximum
    /// hit points, and heals to full. Unknown class names use Fighter.
    pub fn apply_class(&mut self, class_name: &str, level: u32) -> CampaignResult<()> {
        if level == 0 {
            return Err(CampaignError::Validation("level must be at least 1".into()));
        }
        let class = find_class(class_name);
        let base = BaseStats::for_class(class, level);
        let patch = CharacterPatch {
            class_type: Some(format!("{} {level}", class.name)),
            level: Some(level),
            bab: Some(sheet_value(base.bab)),
            base_fort: Some(sheet_value(base.base_fort)),
            base_ref: Some(sheet_value(base.base_ref)),
            base_will: Some(sheet_value(base.base_will)),
            hp_max: Some(sheet_value(base.hp_max)),
            hp_current: Some(sheet_value(base.hp_max)),
            ..CharacterPatch::default()
        };
        tracing::info!(class = class.name, level, "applied class");
        self.update_character(patch)
    }

    /// Replace the character with a freshly created one.
    ///
    /// The new record and the journey-start journal entry are written in
    /// one transaction.
    pub fn create_character(&mut self, draft: &CharacterDraft) -> CampaignResult<()> {
        let stats = draft.build();
        stats.validate()?;
        let entry = draft.journey_entry();
        self.transaction("create character", |db| {
            db.stats = Some(stats);
            db.journal
                .insert_with(|id| JournalEntry::new(id, entry, None));
            Ok(())
        })?;
        tracing::info!(name = %draft.name, class = draft.class.name, "character created");
        Ok(())
    }
}
