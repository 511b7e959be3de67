//! Core record types for Questsheet: the character sheet, quests, journal
//! entries, and feats.
//!
//! This crate defines the persisted data model. It knows nothing about
//! storage or derived rules; [`CharacterStats`] can be built from the
//! default seed, deserialized from JSON, or patched with a
//! [`CharacterPatch`].

/// Ability scores and saving throws.
pub mod attribute;
/// Record timestamps.
mod clock;
/// The singleton character record, skills, spells, and partial updates.
pub mod character;
/// Error types used throughout the crate.
pub mod error;
/// Feats and class features.
pub mod feat;
/// Integer record identifiers.
pub mod id;
/// Free-text journal entries.
pub mod journal;
/// Lenient parsing of user-entered numbers.
pub mod lenient;
/// Quests (tasks) that reward an attribute on completion.
pub mod quest;

/// Re-export attribute types.
pub use attribute::{Attribute, Save};
/// Re-export character types.
pub use character::{CharacterPatch, CharacterStats, PF1_SKILLS, Skill, SkillPatch, Spell};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export feat types.
pub use feat::{Feat, FeatKind};
/// Re-export identifier types.
pub use id::{FeatId, JournalEntryId, QuestId, SpellId};
/// Re-export journal types.
pub use journal::JournalEntry;
/// Re-export lenient parsing.
pub use lenient::lenient_int;
/// Re-export quest types.
pub use quest::Quest;
