//! The quest completion transaction.
//!
//! Completing a quest touches two records: the quest is marked done, and
//! the character gains experience, possibly a level, and one point in the
//! quest's attribute. Both changes commit together or not at all.

use qs_core::{Attribute, CharacterStats, QuestId};
use qs_rules::experience_threshold_for_level;

use crate::backend::Backend;
use crate::campaign::Campaign;
use crate::error::{CampaignError, CampaignResult};

/// What a completed quest did to the character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestCompletion {
    /// The completed quest.
    pub quest_id: QuestId,
    /// The attribute that was raised.
    pub attribute: Attribute,
    /// Experience before the reward.
    pub xp_before: u32,
    /// Experience after the reward.
    pub xp_after: u32,
    /// Level before the reward.
    pub level_before: u32,
    /// Level after the reward.
    pub level_after: u32,
    /// The raised base score.
    pub new_score: i32,
}

impl QuestCompletion {
    /// True if the reward crossed a level threshold.
    pub fn leveled_up(&self) -> bool {
        self.level_after > self.level_before
    }
}

/// Apply one quest reward to a character.
///
/// Adds `reward` experience, gains at most one level when the new total
/// reaches `level × 1000`, and raises `attribute` by one.
pub fn apply_reward(
    stats: &mut CharacterStats,
    quest_id: QuestId,
    attribute: Attribute,
    reward: u32,
) -> QuestCompletion {
    let xp_before = stats.xp;
    let level_before = stats.level;

    stats.xp = stats.xp.saturating_add(reward);
    if stats.xp >= experience_threshold_for_level(stats.level) {
        stats.level = stats.level.saturating_add(1);
    }
    let score = stats.base_score_mut(attribute);
    *score = score.saturating_add(1);
    let new_score = *score;

    QuestCompletion {
        quest_id,
        attribute,
        xp_before,
        xp_after: stats.xp,
        level_before,
        level_after: stats.level,
        new_score,
    }
}

impl<B: Backend> Campaign<B> {
    /// Complete a quest and reward the character.
    ///
    /// Fails with [`CampaignError::QuestAlreadyCompleted`] for a quest that
    /// has already paid out. On any failure neither record changes.
    pub fn complete_quest(&mut self, id: QuestId) -> CampaignResult<QuestCompletion> {
        let reward = self.config().quest_xp_reward;
        let completion = self.transaction("complete quest", |db| {
            let quest = db.quests.get_mut(id).ok_or(CampaignError::QuestNotFound(id))?;
            if quest.is_completed {
                return Err(CampaignError::QuestAlreadyCompleted(id));
            }
            quest.is_completed = true;
            let attribute = quest.attribute;
            Ok(apply_reward(db.character_mut()?, id, attribute, reward))
        })?;

        tracing::info!(
            quest = %id,
            attribute = %completion.attribute,
            xp = completion.xp_after,
            "quest completed"
        );
        if completion.leveled_up() {
            tracing::info!(level = completion.level_after, "level up");
        }
        Ok(completion)
    }
}
