use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::FeatId;

/// Whether a perk was picked as a feat or granted by the class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeatKind {
    /// A chosen feat.
    #[default]
    Feat,
    /// A feature granted by the character's class.
    ClassFeature,
}

impl fmt::Display for FeatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Feat => write!(f, "feat"),
            Self::ClassFeature => write!(f, "class feature"),
        }
    }
}

/// An unlocked perk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feat {
    /// Auto-assigned identifier.
    pub id: FeatId,
    /// Short title.
    pub title: String,
    /// What the perk does.
    pub description: String,
    /// Feat or class feature.
    #[serde(rename = "type")]
    pub kind: FeatKind,
    /// Creation time, stored as epoch milliseconds.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl Feat {
    /// A new feat created now.
    pub fn new(
        id: FeatId,
        title: impl Into<String>,
        description: impl Into<String>,
        kind: FeatKind,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            kind,
            created_at: crate::clock::now(),
        }
    }

    /// The feat every new campaign starts with.
    pub fn seed(id: FeatId) -> Self {
        Self::new(
            id,
            "Task Initiation",
            "You can start tasks within 5 minutes of thinking about them.",
            FeatKind::ClassFeature,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_screaming() {
        let feat = Feat::seed(FeatId(1));
        let json = serde_json::to_value(&feat).unwrap();
        assert_eq!(json["type"], "CLASS_FEATURE");
        assert_eq!(json["title"], "Task Initiation");
    }
}
