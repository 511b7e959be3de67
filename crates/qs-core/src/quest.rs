use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::attribute::Attribute;
use crate::id::QuestId;

/// A real-life task that rewards an attribute when completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
    /// Auto-assigned identifier.
    pub id: QuestId,
    /// Short title.
    pub title: String,
    /// Optional longer description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Attribute whose base score grows on completion.
    pub attribute: Attribute,
    /// Set once by the completion transaction.
    pub is_completed: bool,
    /// Creation time, stored as epoch milliseconds.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl Quest {
    /// A new, incomplete quest created now.
    pub fn new(id: QuestId, title: impl Into<String>, attribute: Attribute) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            attribute,
            is_completed: false,
            created_at: crate::clock::now(),
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialized_shape() {
        let quest = Quest::new(QuestId(3), "Go for a run", Attribute::Con);
        let json = serde_json::to_value(&quest).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["attribute"], "CON");
        assert_eq!(json["isCompleted"], false);
        assert!(json["createdAt"].is_i64());
        assert!(json.get("description").is_none());
    }

    #[test]
    fn description_is_serialized_when_set() {
        let quest = Quest::new(QuestId(4), "Stretch", Attribute::Dex)
            .with_description("Ten minutes after waking up");
        let json = serde_json::to_value(&quest).unwrap();
        assert_eq!(json["description"], "Ten minutes after waking up");
        let back: Quest = serde_json::from_value(json).unwrap();
        assert_eq!(back.description.as_deref(), Some("Ten minutes after waking up"));
    }

    #[test]
    fn created_at_round_trips_in_millis() {
        let quest = Quest::new(QuestId(1), "Read a chapter", Attribute::Int);
        let json = serde_json::to_string(&quest).unwrap();
        let back: Quest = serde_json::from_str(&json).unwrap();
        assert_eq!(
            back.created_at.timestamp_millis(),
            quest.created_at.timestamp_millis()
        );
    }
}
