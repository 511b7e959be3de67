//! The campaign handle and its transaction primitive.

use crate::backend::{Backend, JsonFileBackend, MemoryBackend};
use crate::config::CampaignConfig;
use crate::database::Database;
use crate::error::{CampaignError, CampaignResult};
use crate::schema::{self, SchemaVersion};

/// An open campaign: the in-memory document plus the backend it came from.
///
/// Reads borrow the current document. Every write goes through
/// [`Campaign::transaction`], which commits to the backend before the new
/// state becomes visible.
pub struct Campaign<B: Backend> {
    backend: B,
    db: Database,
    config: CampaignConfig,
}

impl Campaign<JsonFileBackend> {
    /// Open (or create) the campaign stored at `config.data_path`.
    pub fn open_file(config: CampaignConfig) -> CampaignResult<Self> {
        let backend = JsonFileBackend::new(&config.data_path);
        Self::open(backend, config)
    }
}

impl Campaign<MemoryBackend> {
    /// A fresh, seeded campaign that is never written to disk.
    pub fn in_memory() -> CampaignResult<Self> {
        Self::open(MemoryBackend::new(), CampaignConfig::default())
    }
}

impl<B: Backend> Campaign<B> {
    /// Load the stored document, migrating or seeding it as needed.
    ///
    /// A missing document is seeded with the placeholder character and the
    /// starter feat. An older document is upgraded and written back once.
    pub fn open(mut backend: B, config: CampaignConfig) -> CampaignResult<Self> {
        let (db, dirty) = match backend.load()? {
            None => {
                tracing::info!("no campaign found, seeding a new one");
                (Database::seeded(), true)
            }
            Some(document) => {
                let (db, stored) = schema::migrate(document)?;
                if stored != SchemaVersion::CURRENT {
                    tracing::info!(
                        from = stored.number(),
                        to = SchemaVersion::CURRENT.number(),
                        "migrated campaign document"
                    );
                }
                (db, stored != SchemaVersion::CURRENT)
            }
        };
        if dirty {
            backend.save(&db)?;
        }

        let mut campaign = Self {
            backend,
            db,
            config,
        };
        campaign.ensure_character()?;
        tracing::debug!(
            quests = campaign.db.quests.len(),
            journal = campaign.db.journal.len(),
            feats = campaign.db.feats.len(),
            "campaign opened"
        );
        Ok(campaign)
    }

    /// The current document.
    pub fn database(&self) -> &Database {
        &self.db
    }

    /// The configuration this campaign was opened with.
    pub fn config(&self) -> &CampaignConfig {
        &self.config
    }

    /// The backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The backend, for modification.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Consume the handle and return its backend.
    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Run `apply` against a copy of the document and commit it.
    ///
    /// The copy replaces the current document only after the backend has
    /// saved it. If `apply` returns an error, nothing is saved; if saving
    /// fails, the error is reported as [`CampaignError::Transaction`]. In
    /// both cases the previous state stays in place.
    pub fn transaction<T>(
        &mut self,
        operation: &str,
        apply: impl FnOnce(&mut Database) -> CampaignResult<T>,
    ) -> CampaignResult<T> {
        let mut next = self.db.clone();
        let value = apply(&mut next)?;
        self.backend
            .save(&next)
            .map_err(|e| CampaignError::Transaction {
                operation: operation.to_string(),
                reason: e.to_string(),
            })?;
        self.db = next;
        tracing::debug!(operation, "transaction committed");
        Ok(value)
    }

    /// Re-seed the character record if the document has lost it.
    pub fn ensure_character(&mut self) -> CampaignResult<()> {
        if self.db.stats.is_some() {
            return Ok(());
        }
        tracing::warn!("character record missing, re-seeding defaults");
        self.transaction("seed character", |db| {
            db.stats = Some(Default::default());
            Ok(())
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;

    /// A backend whose saves can be switched off.
    #[derive(Default)]
    pub(crate) struct FlakyBackend {
        pub(crate) inner: MemoryBackend,
        pub(crate) fail: bool,
    }

    impl Backend for FlakyBackend {
        fn load(&mut self) -> CampaignResult<Option<serde_json::Value>> {
            self.inner.load()
        }

        fn save(&mut self, db: &Database) -> CampaignResult<()> {
            if self.fail {
                return Err(CampaignError::Io(std::io::Error::other("disk full")));
            }
            self.inner.save(db)
        }
    }

    pub(crate) fn flaky() -> Campaign<FlakyBackend> {
        Campaign::open(FlakyBackend::default(), CampaignConfig::default()).unwrap()
    }

    #[test]
    fn open_seeds_and_saves() {
        let campaign = Campaign::in_memory().unwrap();
        assert_eq!(campaign.database().character().unwrap().name, "Adventurer");
        let doc = campaign.backend().document().unwrap();
        assert_eq!(doc["feats"]["rows"][0]["title"], "Task Initiation");
    }

    #[test]
    fn open_repairs_missing_character() {
        let mut doc = serde_json::to_value(Database::seeded()).unwrap();
        doc["stats"] = serde_json::Value::Null;
        let campaign =
            Campaign::open(MemoryBackend::with_document(doc), CampaignConfig::default()).unwrap();
        assert!(campaign.database().stats.is_some());
        assert!(!campaign.backend().document().unwrap()["stats"].is_null());
    }

    #[test]
    fn open_rejects_future_schema() {
        let doc = json!({ "schemaVersion": 7 });
        let result = Campaign::open(MemoryBackend::with_document(doc), CampaignConfig::default());
        assert!(matches!(result, Err(CampaignError::UnsupportedSchema(7))));
    }

    #[test]
    fn open_writes_back_migrated_document() {
        let doc = json!({
            "quests": { "nextId": 1, "rows": [] },
            "journal": { "nextId": 1, "rows": [] },
            "stats": null
        });
        let campaign =
            Campaign::open(MemoryBackend::with_document(doc), CampaignConfig::default()).unwrap();
        let stored = campaign.backend().document().unwrap();
        assert_eq!(stored["schemaVersion"], 4);
        assert!(stored["feats"]["rows"].as_array().unwrap().is_empty());
    }

    #[test]
    fn failed_closure_changes_nothing() {
        let mut campaign = Campaign::in_memory().unwrap();
        let before = campaign.database().clone();
        let result: CampaignResult<()> = campaign.transaction("noop", |db| {
            db.character_mut()?.xp = 999;
            Err(CampaignError::Validation("nope".into()))
        });
        assert!(result.is_err());
        assert_eq!(campaign.database(), &before);
    }

    #[test]
    fn failed_save_changes_nothing() {
        let mut campaign = flaky();
        let before = campaign.database().clone();
        campaign.backend_mut().fail = true;
        let result = campaign.transaction("bump xp", |db| {
            db.character_mut()?.xp = 999;
            Ok(())
        });
        match result {
            Err(CampaignError::Transaction { operation, reason }) => {
                assert_eq!(operation, "bump xp");
                assert!(reason.contains("disk full"));
            }
            other => panic!("expected transaction error, got {other:?}"),
        }
        assert_eq!(campaign.database(), &before);
    }

    #[test]
    fn file_campaign_persists_between_opens() {
        let dir = tempfile::tempdir().unwrap();
        let config = CampaignConfig::default().with_data_path(dir.path().join("hero.json"));
        {
            let mut campaign = Campaign::open_file(config.clone()).unwrap();
            campaign
                .transaction("rename", |db| {
                    db.character_mut()?.name = "Mira".into();
                    Ok(())
                })
                .unwrap();
        }
        let campaign = Campaign::open_file(config).unwrap();
        assert_eq!(campaign.database().character().unwrap().name, "Mira");
    }
}
