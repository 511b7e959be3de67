//! The whole stored campaign document.

use serde::{Deserialize, Serialize};

use qs_core::{CharacterStats, Feat, JournalEntry, Quest};

use crate::error::{CampaignError, CampaignResult};
use crate::schema::SchemaVersion;
use crate::table::Table;

/// Everything persisted for one campaign.
///
/// `stats` holds the singleton character; it is `None` only in a document
/// that lost it, which [`crate::Campaign`] repairs by re-seeding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Database {
    /// Schema version the document conforms to.
    pub schema_version: u64,
    /// The singleton character.
    pub stats: Option<CharacterStats>,
    /// Quests.
    pub quests: Table<Quest>,
    /// Journal entries.
    pub journal: Table<JournalEntry>,
    /// Feats and class features.
    pub feats: Table<Feat>,
}

impl Database {
    /// An empty document at the current schema version.
    pub fn empty() -> Self {
        Self {
            schema_version: SchemaVersion::CURRENT.number(),
            stats: None,
            quests: Table::new(),
            journal: Table::new(),
            feats: Table::new(),
        }
    }

    /// A first-run document: the placeholder character and the starter feat.
    pub fn seeded() -> Self {
        let mut db = Self::empty();
        db.stats = Some(CharacterStats::default());
        db.feats.insert_with(Feat::seed);
        db
    }

    /// The character record.
    pub fn character(&self) -> CampaignResult<&CharacterStats> {
        self.stats.as_ref().ok_or(CampaignError::CharacterNotFound)
    }

    /// The character record, for modification.
    pub fn character_mut(&mut self) -> CampaignResult<&mut CharacterStats> {
        self.stats.as_mut().ok_or(CampaignError::CharacterNotFound)
    }

    /// Fix derived bookkeeping after loading.
    pub(crate) fn repair(&mut self) {
        self.quests.repair_next_id();
        self.journal.repair_next_id();
        self.feats.repair_next_id();
    }
}
