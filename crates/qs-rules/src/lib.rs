//! Pathfinder 1e rules engine for Questsheet.
//!
//! Pure functions for ability modifiers, saving throws, skill totals,
//! base-attack-bonus and save progression, hit points, and experience
//! thresholds; the PF1 class table; a derived [`SheetView`] over a stored
//! character; and helpers for the character-creation flow (standard array,
//! rolled pools, and score assignment).

pub mod ability;
pub mod class;
pub mod creation;
pub mod dice;
pub mod error;
pub mod progression;
pub mod sheet;

pub use ability::{ability_modifier, saving_throw_total, skill_total, total_ability_score};
pub use class::{BaseStats, ClassDefinition, PF1_CLASSES, find_class};
pub use creation::{CharacterDraft, STANDARD_ARRAY, ScorePool, StatMethod, roll_ability_pool};
pub use error::{RulesError, RulesResult};
pub use progression::{
    BabProgression, XpProgress, base_attack_bonus, experience_threshold_for_level,
    header_progress, max_hit_points, saving_throw_base, sheet_value,
};
pub use sheet::SheetView;
