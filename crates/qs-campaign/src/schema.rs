//! Versioned document migration.
//!
//! Each stored document carries a `schemaVersion`. On open the document is
//! upgraded one version at a time until it reaches [`SchemaVersion::CURRENT`]
//! and only then deserialized into a [`Database`]. Documents without a
//! version are treated as version 1.
//!
//! | version | change |
//! |---|---|
//! | 1 | quests, journal, character |
//! | 2 | feats collection |
//! | 3 | skills, spells, saves, attack bonus, hit points, armor class |
//! | 4 | temporary ability modifiers |

use serde_json::{Map, Value, json};

use qs_core::Skill;

use crate::database::Database;
use crate::error::{CampaignError, CampaignResult};

/// A stored document schema version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SchemaVersion {
    /// Quests, journal, and the basic character.
    V1,
    /// Adds feats.
    V2,
    /// Adds the Pathfinder sheet fields.
    V3,
    /// Adds temporary ability modifiers.
    V4,
}

impl SchemaVersion {
    /// The version new documents are written with.
    pub const CURRENT: Self = Self::V4;

    /// Map a stored version number.
    pub fn from_number(n: u64) -> Option<Self> {
        match n {
            1 => Some(Self::V1),
            2 => Some(Self::V2),
            3 => Some(Self::V3),
            4 => Some(Self::V4),
            _ => None,
        }
    }

    /// The stored version number.
    pub fn number(self) -> u64 {
        match self {
            Self::V1 => 1,
            Self::V2 => 2,
            Self::V3 => 3,
            Self::V4 => 4,
        }
    }

    /// Transform a document from this version to the next one.
    ///
    /// Returns the version the document now conforms to.
    fn upgrade(self, doc: &mut Map<String, Value>) -> Self {
        match self {
            Self::V1 => {
                doc.entry("feats")
                    .or_insert_with(|| json!({ "nextId": 1, "rows": [] }));
                Self::V2
            }
            Self::V2 => {
                if let Some(Value::Object(stats)) = doc.get_mut("stats") {
                    fill_missing(
                        stats,
                        [
                            ("skills", json!(Skill::pf1_defaults())),
                            ("spells", json!([])),
                            ("baseFort", json!(0)),
                            ("baseRef", json!(0)),
                            ("baseWill", json!(0)),
                            ("miscFort", json!(0)),
                            ("miscRef", json!(0)),
                            ("miscWill", json!(0)),
                            ("bab", json!(0)),
                            ("ac", json!(10)),
                            ("hpMax", json!(10)),
                            ("hpCurrent", json!(10)),
                        ],
                    );
                }
                Self::V3
            }
            Self::V3 => {
                if let Some(Value::Object(stats)) = doc.get_mut("stats") {
                    fill_missing(
                        stats,
                        [
                            ("strTemp", json!(0)),
                            ("dexTemp", json!(0)),
                            ("conTemp", json!(0)),
                            ("intTemp", json!(0)),
                            ("wisTemp", json!(0)),
                            ("chaTemp", json!(0)),
                        ],
                    );
                }
                Self::V4
            }
            Self::V4 => Self::V4,
        }
    }
}

/// Set each field that is absent or null.
fn fill_missing<const N: usize>(record: &mut Map<String, Value>, fields: [(&str, Value); N]) {
    for (key, default) in fields {
        match record.get(key) {
            Some(v) if !v.is_null() => {}
            _ => {
                record.insert(key.to_string(), default);
            }
        }
    }
}

/// Upgrade a stored document to the current schema and deserialize it.
///
/// Returns the database and the version the document was stored with.
pub fn migrate(document: Value) -> CampaignResult<(Database, SchemaVersion)> {
    let Value::Object(mut doc) = document else {
        return Err(CampaignError::CorruptDocument(
            "top level is not an object".to_string(),
        ));
    };

    let stored = match doc.get("schemaVersion") {
        None | Some(Value::Null) => SchemaVersion::V1,
        Some(v) => {
            let n = v.as_u64().ok_or_else(|| {
                CampaignError::CorruptDocument(format!("schemaVersion is not a number: {v}"))
            })?;
            SchemaVersion::from_number(n).ok_or(CampaignError::UnsupportedSchema(n))?
        }
    };

    let mut version = stored;
    while version < SchemaVersion::CURRENT {
        let next = version.upgrade(&mut doc);
        tracing::debug!(
            from = version.number(),
            to = next.number(),
            "upgraded campaign document"
        );
        version = next;
    }
    doc.insert(
        "schemaVersion".to_string(),
        json!(SchemaVersion::CURRENT.number()),
    );

    let mut db: Database = serde_json::from_value(Value::Object(doc))?;
    db.repair();
    Ok((db, stored))
}

#[cfg(test)]
mod tests {
    use super::*;
    use qs_core::{Attribute, PF1_SKILLS};

    fn v1_document() -> Value {
        json!({
            "quests": {
                "nextId": 2,
                "rows": [{
                    "id": 1,
                    "title": "Stretch",
                    "attribute": "DEX",
                    "isCompleted": false,
                    "createdAt": 1_700_000_000_000i64
                }]
            },
            "journal": { "nextId": 1, "rows": [] },
            "stats": {
                "name": "Old Hero",
                "classType": "Fighter 2",
                "level": 2,
                "xp": 1100,
                "str": 14, "dex": 12, "con": 13,
                "int": 10, "wis": 8, "cha": 11
            }
        })
    }

    #[test]
    fn v1_upgrades_to_current() {
        let (db, stored) = migrate(v1_document()).unwrap();
        assert_eq!(stored, SchemaVersion::V1);
        assert_eq!(db.schema_version, 4);

        let stats = db.character().unwrap();
        assert_eq!(stats.name, "Old Hero");
        assert_eq!(stats.str, 14);
        assert_eq!(stats.str_temp, 0);
        assert_eq!(stats.ac, 10);
        assert_eq!(stats.hp_max, 10);
        assert_eq!(stats.skills.len(), PF1_SKILLS.len());
        assert!(stats.spells.is_empty());

        assert!(db.feats.is_empty());
        assert_eq!(db.quests.len(), 1);
        assert_eq!(db.quests.iter().next().unwrap().attribute, Attribute::Dex);
    }

    #[test]
    fn v3_keeps_existing_fields() {
        let mut doc = v1_document();
        doc["schemaVersion"] = json!(3);
        doc["feats"] = json!({ "nextId": 1, "rows": [] });
        let stats = doc["stats"].as_object_mut().unwrap();
        stats.insert("skills".into(), json!([]));
        stats.insert("spells".into(), json!([]));
        for key in [
            "baseFort", "baseRef", "baseWill", "miscFort", "miscRef", "miscWill", "bab",
        ] {
            stats.insert(key.into(), json!(1));
        }
        stats.insert("ac".into(), json!(15));
        stats.insert("hpMax".into(), json!(20));
        stats.insert("hpCurrent".into(), json!(18));
        stats.insert("strTemp".into(), json!(2));

        let (db, stored) = migrate(doc).unwrap();
        assert_eq!(stored, SchemaVersion::V3);
        let stats = db.character().unwrap();
        assert_eq!(stats.ac, 15);
        assert_eq!(stats.hp_current, 18);
        assert!(stats.skills.is_empty());
        assert_eq!(stats.str_temp, 2);
        assert_eq!(stats.dex_temp, 0);
    }

    #[test]
    fn current_document_round_trips() {
        let db = Database::seeded();
        let doc = serde_json::to_value(&db).unwrap();
        let (back, stored) = migrate(doc).unwrap();
        assert_eq!(stored, SchemaVersion::CURRENT);
        assert_eq!(back, db);
    }

    #[test]
    fn future_version_is_rejected() {
        let mut doc = serde_json::to_value(Database::seeded()).unwrap();
        doc["schemaVersion"] = json!(99);
        assert!(matches!(
            migrate(doc),
            Err(CampaignError::UnsupportedSchema(99))
        ));
    }

    #[test]
    fn non_object_is_corrupt() {
        assert!(matches!(
            migrate(json!([1, 2, 3])),
            Err(CampaignError::CorruptDocument(_))
        ));
    }

    #[test]
    fn version_numbers() {
        for n in 1..=4 {
            assert_eq!(SchemaVersion::from_number(n).unwrap().number(), n);
        }
        assert!(SchemaVersion::from_number(0).is_none());
    }
}
