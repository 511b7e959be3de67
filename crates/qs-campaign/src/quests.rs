//! The quest ledger.

use std::cmp::Reverse;

use qs_core::{Attribute, Quest, QuestId};

use crate::backend::Backend;
use crate::campaign::Campaign;
use crate::error::{CampaignError, CampaignResult};

impl<B: Backend> Campaign<B> {
    /// Add an incomplete quest. Returns its id.
    pub fn add_quest(&mut self, title: &str, attribute: Attribute) -> CampaignResult<QuestId> {
        self.add_quest_with_description(title, attribute, None)
    }

    /// Add an incomplete quest with an optional description.
    ///
    /// A blank description is stored as none.
    pub fn add_quest_with_description(
        &mut self,
        title: &str,
        attribute: Attribute,
        description: Option<&str>,
    ) -> CampaignResult<QuestId> {
        let title = title.trim();
        if title.is_empty() {
            return Err(CampaignError::Validation(
                "quest title must not be empty".into(),
            ));
        }
        let description = description.map(str::trim).filter(|d| !d.is_empty());
        let id = self.transaction("add quest", |db| {
            Ok(db.quests.insert_with(|id| {
                let quest = Quest::new(id, title, attribute);
                match description {
                    Some(d) => quest.with_description(d),
                    None => quest,
                }
            }))
        })?;
        tracing::debug!(%id, %attribute, "quest added");
        Ok(id)
    }

    /// Look up one quest.
    pub fn get_quest(&self, id: QuestId) -> CampaignResult<&Quest> {
        self.database()
            .quests
            .get(id)
            .ok_or(CampaignError::QuestNotFound(id))
    }

    /// Remove a quest, completed or not.
    pub fn delete_quest(&mut self, id: QuestId) -> CampaignResult<()> {
        self.transaction("delete quest", |db| {
            db.quests
                .remove(id)
                .map(|_| ())
                .ok_or(CampaignError::QuestNotFound(id))
        })
    }

    /// Quests, newest first.
    ///
    /// Without `include_completed` only active quests are returned. With it,
    /// every active quest comes before every completed one.
    pub fn quests(&self, include_completed: bool) -> Vec<&Quest> {
        let mut quests: Vec<&Quest> = self
            .database()
            .quests
            .iter()
            .filter(|q| include_completed || !q.is_completed)
            .collect();
        quests.sort_by_key(|q| (q.is_completed, Reverse(q.created_at), Reverse(q.id)));
        quests
    }
}
