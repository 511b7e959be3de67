//! Auto-incrementing record collections.

use serde::{Deserialize, Serialize};

use qs_core::{Feat, FeatId, JournalEntry, JournalEntryId, Quest, QuestId};

/// A stored record with an auto-assigned integer id.
pub trait Record {
    /// The record's identifier type.
    type Id: Copy + Eq + From<u64> + Into<u64>;

    /// The record's identifier.
    fn id(&self) -> Self::Id;
}

impl Record for Quest {
    type Id = QuestId;

    fn id(&self) -> QuestId {
        self.id
    }
}

impl Record for JournalEntry {
    type Id = JournalEntryId;

    fn id(&self) -> JournalEntryId {
        self.id
    }
}

impl Record for Feat {
    type Id = FeatId;

    fn id(&self) -> FeatId {
        self.id
    }
}

/// A collection of records in insertion order.
///
/// Ids start at 1 and are never reused, even after deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table<T> {
    #[serde(default = "first_id")]
    next_id: u64,
    rows: Vec<T>,
}

fn first_id() -> u64 {
    1
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            next_id: first_id(),
            rows: Vec::new(),
        }
    }
}

impl<T: Record> Table<T> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id, build the record with it, and store it.
    pub fn insert_with(&mut self, build: impl FnOnce(T::Id) -> T) -> T::Id {
        let id = T::Id::from(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        self.rows.push(build(id));
        id
    }

    /// Look up a record.
    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.rows.iter().find(|r| r.id() == id)
    }

    /// Look up a record for modification.
    pub fn get_mut(&mut self, id: T::Id) -> Option<&mut T> {
        self.rows.iter_mut().find(|r| r.id() == id)
    }

    /// Remove a record, returning it.
    pub fn remove(&mut self, id: T::Id) -> Option<T> {
        let index = self.rows.iter().position(|r| r.id() == id)?;
        Some(self.rows.remove(index))
    }

    /// All records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.rows.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Make sure `next_id` is past every stored id.
    ///
    /// Hand-edited or older documents may carry a stale counter.
    pub fn repair_next_id(&mut self) {
        let max = self
            .rows
            .iter()
            .map(|r| Into::<u64>::into(r.id()))
            .max()
            .unwrap_or(0);
        self.next_id = self.next_id.max(max.saturating_add(1));
    }
}
