//! Character creation: picking ability scores and building the level-1 sheet.
//!
//! Scores come from the standard array, a rolled pool (4d6 drop lowest, six
//! times), or manual entry. Array and rolled pools are handed out through a
//! [`ScorePool`], a multiset that tracks how many copies of each value are
//! still free, so a pool like `[15, 14, 14, 12, 10, 9]` lets two attributes
//! take a 14 but not three.

use std::collections::BTreeMap;
use std::fmt;

use rand::rngs::StdRng;

use qs_core::{Attribute, CharacterStats, Spell, SpellId};

use crate::class::{BaseStats, ClassDefinition};
use crate::dice::roll_drop_lowest;
use crate::error::{RulesError, RulesResult};
use crate::progression::sheet_value;

/// The Pathfinder standard array.
pub const STANDARD_ARRAY: [i32; 6] = [16, 14, 13, 12, 10, 8];

/// Score assumed for an attribute left unassigned.
const DEFAULT_SCORE: i32 = 10;

/// How ability scores are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatMethod {
    /// Assign the standard array.
    #[default]
    StandardArray,
    /// Assign a rolled pool.
    Rolled,
    /// Type each score freely.
    Manual,
}

impl StatMethod {
    /// Parse "array", "roll" or "manual".
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "array" | "standard" | "standard-array" => Some(Self::StandardArray),
            "roll" | "rolled" | "dice" => Some(Self::Rolled),
            "manual" => Some(Self::Manual),
            _ => None,
        }
    }
}

impl fmt::Display for StatMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StandardArray => write!(f, "standard array"),
            Self::Rolled => write!(f, "rolled"),
            Self::Manual => write!(f, "manual"),
        }
    }
}

/// Roll six ability scores with 4d6 drop lowest, sorted highest first.
pub fn roll_ability_pool(rng: &mut StdRng) -> Vec<i32> {
    let mut pool: Vec<i32> = (0..6)
        .map(|_| roll_drop_lowest(rng, 4, 6).total() as i32)
        .collect();
    pool.sort_unstable_by(|a, b| b.cmp(a));
    pool
}

/// A bag of scores with per-value use counts.
#[derive(Debug, Clone, Default)]
pub struct ScorePool {
    counts: BTreeMap<i32, u32>,
    assignments: BTreeMap<Attribute, i32>,
}

impl ScorePool {
    /// A pool holding exactly `values`.
    pub fn new(values: &[i32]) -> Self {
        let mut counts = BTreeMap::new();
        for v in values {
            *counts.entry(*v).or_insert(0) += 1;
        }
        Self {
            counts,
            assignments: BTreeMap::new(),
        }
    }

    /// A pool holding the standard array.
    pub fn standard_array() -> Self {
        Self::new(&STANDARD_ARRAY)
    }

    /// A freshly rolled pool.
    pub fn rolled(rng: &mut StdRng) -> Self {
        Self::new(&roll_ability_pool(rng))
    }

    fn used(&self, value: i32) -> u32 {
        self.assignments.values().filter(|v| **v == value).count() as u32
    }

    /// How many unassigned copies of `value` remain.
    pub fn available(&self, value: i32) -> u32 {
        let total = self.counts.get(&value).copied().unwrap_or(0);
        total.saturating_sub(self.used(value))
    }

    /// Assign `value` to `attr`, returning its previous value to the pool.
    ///
    /// Fails when every copy of `value` is held by other attributes; the
    /// pool is unchanged in that case.
    pub fn assign(&mut self, attr: Attribute, value: i32) -> RulesResult<()> {
        if self.assignments.get(&attr) == Some(&value) {
            return Ok(());
        }
        let previous = self.assignments.remove(&attr);
        if self.available(value) == 0 {
            if let Some(prev) = previous {
                self.assignments.insert(attr, prev);
            }
            return Err(RulesError::ScoreUnavailable(value));
        }
        self.assignments.insert(attr, value);
        Ok(())
    }

    /// Clear an attribute's assignment, returning the released value.
    pub fn unassign(&mut self, attr: Attribute) -> Option<i32> {
        self.assignments.remove(&attr)
    }

    /// The value currently held by `attr`.
    pub fn assigned(&self, attr: Attribute) -> Option<i32> {
        self.assignments.get(&attr).copied()
    }

    /// Unassigned values, highest first.
    pub fn remaining(&self) -> Vec<i32> {
        let mut out = Vec::new();
        for value in self.counts.keys().rev() {
            for _ in 0..self.available(*value) {
                out.push(*value);
            }
        }
        out
    }

    /// Returns true once all six attributes hold a value.
    pub fn is_complete(&self) -> bool {
        Attribute::ALL.iter().all(|a| self.assignments.contains_key(a))
    }

    /// Fill unassigned attributes with the highest free values, `primary`
    /// first and then in sheet order.
    pub fn auto_assign(&mut self, primary: Attribute) {
        let order = std::iter::once(primary)
            .chain(Attribute::ALL.into_iter().filter(|a| *a != primary));
        for attr in order {
            if self.assignments.contains_key(&attr) {
                continue;
            }
            let Some(best) = self.remaining().first().copied() else {
                break;
            };
            self.assignments.insert(attr, best);
        }
    }

    /// All assignments so far.
    pub fn assignments(&self) -> &BTreeMap<Attribute, i32> {
        &self.assignments
    }
}

/// A character being created, before it replaces the placeholder.
#[derive(Debug, Clone)]
pub struct CharacterDraft {
    /// Chosen name; blank keeps the placeholder name.
    pub name: String,
    /// Chosen class.
    pub class: &'static ClassDefinition,
    /// Chosen base scores.
    pub scores: BTreeMap<Attribute, i32>,
}

impl CharacterDraft {
    /// Start a draft with no scores chosen.
    pub fn new(name: impl Into<String>, class: &'static ClassDefinition) -> Self {
        Self {
            name: name.into(),
            class,
            scores: BTreeMap::new(),
        }
    }

    /// Set one base score.
    pub fn with_score(mut self, attr: Attribute, value: i32) -> Self {
        self.scores.insert(attr, value);
        self
    }

    /// Take every assignment from a score pool.
    pub fn with_pool(mut self, pool: &ScorePool) -> RulesResult<Self> {
        if let Some(missing) = Attribute::ALL
            .into_iter()
            .find(|a| pool.assigned(*a).is_none())
        {
            return Err(RulesError::Unassigned(missing));
        }
        self.scores.extend(pool.assignments());
        Ok(self)
    }

    /// Take six manually entered scores in sheet order (STR to CHA).
    pub fn with_manual_scores(mut self, values: &[i32]) -> RulesResult<Self> {
        if values.len() != Attribute::ALL.len() {
            return Err(RulesError::InvalidPool(format!(
                "expected {} scores, got {}",
                Attribute::ALL.len(),
                values.len()
            )));
        }
        self.scores.extend(Attribute::ALL.into_iter().zip(values.iter().copied()));
        Ok(self)
    }

    fn score(&self, attr: Attribute) -> i32 {
        match self.scores.get(&attr) {
            Some(v) if *v > 0 => *v,
            _ => DEFAULT_SCORE,
        }
    }

    /// Build the level-1 character record.
    ///
    /// Missing or non-positive scores become 10, hit points start full, and
    /// the class's starting spells are known and prepared.
    pub fn build(&self) -> CharacterStats {
        let base = BaseStats::for_class(self.class, 1);
        let mut stats = CharacterStats {
            name: if self.name.trim().is_empty() {
                CharacterStats::PLACEHOLDER_NAME.to_string()
            } else {
                self.name.trim().to_string()
            },
            class_type: format!("{} 1", self.class.name),
            bab: sheet_value(base.bab),
            base_fort: sheet_value(base.base_fort),
            base_ref: sheet_value(base.base_ref),
            base_will: sheet_value(base.base_will),
            hp_max: sheet_value(base.hp_max),
            hp_current: sheet_value(base.hp_max),
            ..CharacterStats::default()
        };
        for attr in Attribute::ALL {
            *stats.base_score_mut(attr) = self.score(attr);
        }
        stats.spells = self
            .class
            .starting_spells
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let mut spell = Spell::new(SpellId(i as u64 + 1), 0, *name);
                spell.prepared = true;
                spell
            })
            .collect();
        stats
    }

    /// The journal line recorded when the journey begins.
    pub fn journey_entry(&self) -> String {
        format!(
            "I have begun my journey as a {}. My focus is on {}",
            self.class.name, self.class.life_philosophy
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::find_class;
    use rand::SeedableRng;

    #[test]
    fn rolled_pool_is_sorted_and_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool = roll_ability_pool(&mut rng);
        assert_eq!(pool.len(), 6);
        assert!(pool.windows(2).all(|w| w[0] >= w[1]));
        assert!(pool.iter().all(|v| (3..=18).contains(v)));
    }

    #[test]
    fn assign_and_release() {
        let mut pool = ScorePool::standard_array();
        pool.assign(Attribute::Str, 16).unwrap();
        assert_eq!(pool.available(16), 0);
        assert!(matches!(
            pool.assign(Attribute::Dex, 16),
            Err(RulesError::ScoreUnavailable(16))
        ));

        pool.assign(Attribute::Str, 14).unwrap();
        assert_eq!(pool.available(16), 1);
        assert_eq!(pool.available(14), 0);
        assert_eq!(pool.assigned(Attribute::Str), Some(14));
    }

    #[test]
    fn failed_assign_keeps_previous_value() {
        let mut pool = ScorePool::standard_array();
        pool.assign(Attribute::Str, 16).unwrap();
        pool.assign(Attribute::Dex, 14).unwrap();
        assert!(pool.assign(Attribute::Dex, 16).is_err());
        assert_eq!(pool.assigned(Attribute::Dex), Some(14));
    }

    #[test]
    fn duplicates_tracked_by_count() {
        let mut pool = ScorePool::new(&[15, 14, 14, 12, 10, 9]);
        pool.assign(Attribute::Str, 14).unwrap();
        pool.assign(Attribute::Dex, 14).unwrap();
        assert!(pool.assign(Attribute::Con, 14).is_err());
        assert_eq!(pool.remaining(), vec![15, 12, 10, 9]);
    }

    #[test]
    fn unassign_returns_value() {
        let mut pool = ScorePool::standard_array();
        pool.assign(Attribute::Wis, 13).unwrap();
        assert_eq!(pool.unassign(Attribute::Wis), Some(13));
        assert_eq!(pool.available(13), 1);
    }

    #[test]
    fn auto_assign_puts_best_on_primary() {
        let mut pool = ScorePool::standard_array();
        pool.auto_assign(Attribute::Int);
        assert!(pool.is_complete());
        assert_eq!(pool.assigned(Attribute::Int), Some(16));
        assert_eq!(pool.assigned(Attribute::Str), Some(14));
        assert_eq!(pool.assigned(Attribute::Cha), Some(8));
        assert!(pool.remaining().is_empty());
    }

    #[test]
    fn draft_requires_complete_pool() {
        let mut pool = ScorePool::standard_array();
        pool.assign(Attribute::Str, 16).unwrap();
        let draft = CharacterDraft::new("Mira", find_class("Fighter"));
        assert!(matches!(
            draft.with_pool(&pool),
            Err(RulesError::Unassigned(Attribute::Dex))
        ));
    }

    #[test]
    fn build_wizard() {
        let mut pool = ScorePool::standard_array();
        pool.auto_assign(Attribute::Int);
        let draft = CharacterDraft::new("Mira", find_class("Wizard"))
            .with_pool(&pool)
            .unwrap();
        let stats = draft.build();

        assert_eq!(stats.name, "Mira");
        assert_eq!(stats.class_type, "Wizard 1");
        assert_eq!(stats.level, 1);
        assert_eq!(stats.int, 16);
        assert_eq!(stats.hp_max, 6);
        assert_eq!(stats.hp_current, 6);
        assert_eq!(stats.base_will, 2);
        assert_eq!(stats.spells.len(), 4);
        assert!(stats.spells.iter().all(|s| s.prepared && !s.used && s.level == 0));
        assert_eq!(stats.spells[0].id, SpellId(1));
        assert!(!stats.is_placeholder());
    }

    #[test]
    fn build_defaults_missing_scores() {
        let draft = CharacterDraft::new("  ", find_class("Rogue"))
            .with_score(Attribute::Dex, 17)
            .with_score(Attribute::Str, 0);
        let stats = draft.build();
        assert_eq!(stats.name, "Adventurer");
        assert_eq!(stats.dex, 17);
        assert_eq!(stats.str, 10);
        assert_eq!(stats.cha, 10);
        assert!(stats.spells.is_empty());
    }

    #[test]
    fn journey_entry_mentions_class() {
        let draft = CharacterDraft::new("Mira", find_class("Monk"));
        assert!(draft.journey_entry().starts_with("I have begun my journey as a Monk."));
    }

    #[test]
    fn stat_method_parse() {
        assert_eq!(StatMethod::parse("array"), Some(StatMethod::StandardArray));
        assert_eq!(StatMethod::parse("Roll"), Some(StatMethod::Rolled));
        assert_eq!(StatMethod::parse("manual"), Some(StatMethod::Manual));
        assert_eq!(StatMethod::parse("point-buy"), None);
    }

    #[test]
    fn manual_scores_in_sheet_order() {
        let draft = CharacterDraft::new("Ana", find_class("Bard"))
            .with_manual_scores(&[8, 12, 14, 10, 0, 18])
            .unwrap();
        let stats = draft.build();
        assert_eq!(stats.str, 8);
        assert_eq!(stats.con, 14);
        assert_eq!(stats.wis, 10);
        assert_eq!(stats.cha, 18);
    }

    #[test]
    fn manual_scores_need_six_values() {
        let result = CharacterDraft::new("Ana", find_class("Bard")).with_manual_scores(&[10, 10]);
        assert!(matches!(result, Err(RulesError::InvalidPool(_))));
    }
}
