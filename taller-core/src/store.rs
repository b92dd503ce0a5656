use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::StoreError;

/// Bumped when the built-in seed rosters change shape.
const SEED_MARKER_VERSION: &str = "1";

/// A named persisted collection. The storage keys are kept identical to the
/// historical layout so existing data directories keep working.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Workers,
    Projects,
    Logs,
}

impl Collection {
    pub fn key(self) -> &'static str {
        match self {
            Collection::Workers => "workshop_workers",
            Collection::Projects => "workshop_projects",
            Collection::Logs => "workshop_time_logs",
        }
    }
}

/// Key-value persistence for the kiosk collections.
///
/// `get` returns the raw JSON payload, `None` when the collection has never
/// been written. Decoding, and tolerance of malformed payloads, happens in
/// the repository layer. The seed marker records that first-run seeding has
/// already happened; a deliberately emptied collection must not reseed.
pub trait CollectionStore {
    fn get(&self, collection: Collection) -> Result<Option<String>, StoreError>;

    /// Fully overwrites any prior content of the collection.
    fn set(&mut self, collection: Collection, payload: &str) -> Result<(), StoreError>;

    /// Clears the collection entirely, as if it had never been written.
    fn reset(&mut self, collection: Collection) -> Result<(), StoreError>;

    fn is_seeded(&self) -> bool;

    fn mark_seeded(&mut self) -> Result<(), StoreError>;
}

/// File-backed store: one JSON file per collection under a data directory,
/// plus a `seeded` marker file.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn collection_path(&self, collection: Collection) -> PathBuf {
        self.root.join(format!("{}.json", collection.key()))
    }

    fn seed_marker_path(&self) -> PathBuf {
        self.root.join("seeded")
    }

    fn write_file(path: &Path, content: &str) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }
}

impl CollectionStore for FileStore {
    fn get(&self, collection: Collection) -> Result<Option<String>, StoreError> {
        let path = self.collection_path(collection);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&path)?))
    }

    fn set(&mut self, collection: Collection, payload: &str) -> Result<(), StoreError> {
        debug!("writing {} ({} bytes)", collection.key(), payload.len());
        Self::write_file(&self.collection_path(collection), payload)
    }

    fn reset(&mut self, collection: Collection) -> Result<(), StoreError> {
        let path = self.collection_path(collection);
        if path.exists() {
            debug!("resetting {}", collection.key());
            fs::remove_file(path)?;
        }
        Ok(())
    }

    fn is_seeded(&self) -> bool {
        self.seed_marker_path().exists()
    }

    fn mark_seeded(&mut self) -> Result<(), StoreError> {
        Self::write_file(&self.seed_marker_path(), SEED_MARKER_VERSION)
    }
}

/// In-memory store for tests and dev runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<Collection, String>,
    seeded: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CollectionStore for MemoryStore {
    fn get(&self, collection: Collection) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(&collection).cloned())
    }

    fn set(&mut self, collection: Collection, payload: &str) -> Result<(), StoreError> {
        self.entries.insert(collection, payload.to_string());
        Ok(())
    }

    fn reset(&mut self, collection: Collection) -> Result<(), StoreError> {
        self.entries.remove(&collection);
        Ok(())
    }

    fn is_seeded(&self) -> bool {
        self.seeded
    }

    fn mark_seeded(&mut self) -> Result<(), StoreError> {
        self.seeded = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_store_roundtrips_a_collection() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());

        assert!(store.get(Collection::Workers).unwrap().is_none());
        store.set(Collection::Workers, r#"[{"id":"w1","name":"Juan"}]"#).unwrap();
        assert_eq!(
            store.get(Collection::Workers).unwrap().as_deref(),
            Some(r#"[{"id":"w1","name":"Juan"}]"#)
        );
    }

    #[test]
    fn file_store_reset_removes_the_collection() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());

        store.set(Collection::Logs, "[]").unwrap();
        store.reset(Collection::Logs).unwrap();
        assert!(store.get(Collection::Logs).unwrap().is_none());
        // Resetting an absent collection is a no-op, not an error.
        store.reset(Collection::Logs).unwrap();
    }

    #[test]
    fn file_store_seed_marker_persists() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());

        assert!(!store.is_seeded());
        store.mark_seeded().unwrap();
        assert!(store.is_seeded());

        // A second store over the same directory sees the marker.
        let reopened = FileStore::new(dir.path());
        assert!(reopened.is_seeded());
    }

    #[test]
    fn set_overwrites_prior_content() {
        let mut store = MemoryStore::new();
        store.set(Collection::Projects, "[1]").unwrap();
        store.set(Collection::Projects, "[2]").unwrap();
        assert_eq!(store.get(Collection::Projects).unwrap().as_deref(), Some("[2]"));
    }
}
