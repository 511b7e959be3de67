//! Storage backends for the campaign document.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::database::Database;
use crate::error::CampaignResult;

/// Where a campaign document lives.
///
/// A backend stores one whole document. `load` returns `None` when nothing
/// has been stored yet; `save` must either replace the stored document
/// completely or fail without changing it.
pub trait Backend {
    /// Read the stored document, if any.
    fn load(&mut self) -> CampaignResult<Option<Value>>;

    /// Replace the stored document.
    fn save(&mut self, db: &Database) -> CampaignResult<()>;
}

/// Keeps the document in memory. Used by tests and dry runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    document: Option<Value>,
}

impl MemoryBackend {
    /// An empty backend; opening a campaign over it seeds a new one.
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend pre-loaded with a raw document.
    pub fn with_document(document: Value) -> Self {
        Self {
            document: Some(document),
        }
    }

    /// The document as last saved.
    pub fn document(&self) -> Option<&Value> {
        self.document.as_ref()
    }
}

impl Backend for MemoryBackend {
    fn load(&mut self) -> CampaignResult<Option<Value>> {
        Ok(self.document.clone())
    }

    fn save(&mut self, db: &Database) -> CampaignResult<()> {
        self.document = Some(serde_json::to_value(db)?);
        Ok(())
    }
}

/// Stores the document as pretty-printed JSON in a single file.
///
/// Writes go to a temporary file in the same directory, which is then
/// renamed over the target.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    /// A backend for the file at `path`. The file need not exist yet.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The data file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        }
    }
}

impl Backend for JsonFileBackend {
    fn load(&mut self) -> CampaignResult<Option<Value>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let source = fs::read_to_string(&self.path)?;
        if source.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&source)?))
    }

    fn save(&mut self, db: &Database) -> CampaignResult<()> {
        let dir = self.parent_dir();
        fs::create_dir_all(dir)?;
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(tmp.as_file_mut(), db)?;
        tmp.as_file_mut().write_all(b"\n")?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        tracing::trace!(path = %self.path.display(), "campaign document written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_round_trip() {
        let mut backend = MemoryBackend::new();
        assert!(backend.load().unwrap().is_none());
        backend.save(&Database::seeded()).unwrap();
        let doc = backend.load().unwrap().unwrap();
        assert_eq!(doc["stats"]["name"], "Adventurer");
    }

    #[test]
    fn file_missing_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = JsonFileBackend::new(dir.path().join("hero.json"));
        assert!(backend.load().unwrap().is_none());
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("hero.json");
        let mut backend = JsonFileBackend::new(&path);
        backend.save(&Database::seeded()).unwrap();
        assert!(path.exists());

        let doc = backend.load().unwrap().unwrap();
        assert_eq!(doc["schemaVersion"], 4);
        assert_eq!(doc["feats"]["rows"][0]["title"], "Task Initiation");

        // No temporary files are left behind.
        let leftovers = fs::read_dir(path.parent().unwrap()).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[test]
    fn file_with_garbage_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hero.json");
        fs::write(&path, "not json").unwrap();
        let mut backend = JsonFileBackend::new(&path);
        assert!(backend.load().is_err());
    }
}
