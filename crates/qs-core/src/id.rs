use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

record_id!(
    /// Auto-assigned identifier of a quest.
    QuestId
);
record_id!(
    /// Auto-assigned identifier of a journal entry.
    JournalEntryId
);
record_id!(
    /// Auto-assigned identifier of a feat.
    FeatId
);
record_id!(
    /// Identifier of a spell, unique within one character's spell list.
    SpellId
);
