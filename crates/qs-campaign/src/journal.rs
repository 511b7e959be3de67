//! The journal: an append-only log with deletion.

use std::cmp::Reverse;

use qs_core::{JournalEntry, JournalEntryId};

use crate::backend::Backend;
use crate::campaign::Campaign;
use crate::error::{CampaignError, CampaignResult};

impl<B: Backend> Campaign<B> {
    /// Append an entry. Returns its id.
    pub fn append_journal(
        &mut self,
        content: &str,
        image: Option<String>,
    ) -> CampaignResult<JournalEntryId> {
        let content = content.trim();
        if content.is_empty() {
            return Err(CampaignError::Validation(
                "journal entry must not be empty".into(),
            ));
        }
        let image = image.filter(|i| !i.trim().is_empty());
        self.transaction("append journal", |db| {
            Ok(db
                .journal
                .insert_with(|id| JournalEntry::new(id, content, image)))
        })
    }

    /// Remove an entry.
    pub fn delete_journal_entry(&mut self, id: JournalEntryId) -> CampaignResult<()> {
        self.transaction("delete journal entry", |db| {
            db.journal
                .remove(id)
                .map(|_| ())
                .ok_or(CampaignError::JournalEntryNotFound(id))
        })
    }

    /// All entries, newest first.
    pub fn journal(&self) -> Vec<&JournalEntry> {
        let mut entries: Vec<&JournalEntry> = self.database().journal.iter().collect();
        entries.sort_by_key(|e| (Reverse(e.created_at), Reverse(e.id)));
        entries
    }
}
