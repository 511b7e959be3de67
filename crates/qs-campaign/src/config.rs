//! Configuration for a campaign.

use std::path::{Path, PathBuf};

/// Experience granted for each completed quest.
pub const DEFAULT_QUEST_XP_REWARD: u32 = 25;

/// File used when no data path is given.
pub const DEFAULT_DATA_FILE: &str = "questsheet.json";

/// Configuration for opening a campaign.
#[derive(Debug, Clone)]
pub struct CampaignConfig {
    /// Where the JSON file backend stores the campaign.
    pub data_path: PathBuf,
    /// Experience granted per completed quest.
    pub quest_xp_reward: u32,
}

impl Default for CampaignConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
            quest_xp_reward: DEFAULT_QUEST_XP_REWARD,
        }
    }
}

impl CampaignConfig {
    /// Set the data file path.
    pub fn with_data_path(mut self, path: impl AsRef<Path>) -> Self {
        self.data_path = path.as_ref().to_path_buf();
        self
    }

    /// Set the experience reward per quest.
    pub fn with_quest_xp_reward(mut self, xp: u32) -> Self {
        self.quest_xp_reward = xp;
        self
    }
}
