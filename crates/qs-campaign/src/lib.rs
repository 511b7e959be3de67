//! Persistent campaign store for Questsheet.
//!
//! A [`Campaign`] is the single handle to one character's data: the
//! character record, the quest ledger, the journal, and the feat catalog.
//! It is opened explicitly over a [`Backend`], migrates and seeds the stored
//! document once at startup, and runs every mutation as an all-or-nothing
//! transaction. [`Campaign::complete_quest`] is the one operation that
//! spans two records: it marks the quest done and rewards the character in
//! the same transaction.

pub mod backend;
pub mod campaign;
pub mod character;
pub mod completion;
pub mod config;
pub mod database;
pub mod error;
pub mod export;
pub mod feats;
pub mod journal;
pub mod quests;
pub mod schema;
pub mod table;

pub use backend::{Backend, JsonFileBackend, MemoryBackend};
pub use campaign::Campaign;
pub use completion::QuestCompletion;
pub use config::CampaignConfig;
pub use database::Database;
pub use error::{CampaignError, CampaignResult};
pub use export::ExportFormat;
pub use schema::SchemaVersion;
pub use table::{Record, Table};
