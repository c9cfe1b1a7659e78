use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::config::Config;
use crate::error::HrError;

/// Local key-value storage in the shape of browser storage: opaque text
/// values under string keys. Readers treat a missing value and an
/// unreadable store the same way.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), HrError>;
    fn remove(&mut self, key: &str) -> Result<(), HrError>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), HrError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), HrError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// A single JSON object file holding the whole map. Opening a missing or
/// corrupt file yields an empty store; only writes surface errors.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileStore {
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(map) => map,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Session store unreadable, starting empty");
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };

        Self { path, entries }
    }

    fn flush(&self) -> Result<(), HrError> {
        let text = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), HrError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), HrError> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

pub fn open_store(config: &Config) -> FileStore {
    FileStore::open(&config.store_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k"), None);

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k"), Some("v".to_string()));

        store.remove("k").unwrap();
        assert_eq!(store.get("k"), None);
    }

    #[test]
    fn file_store_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut store = FileStore::open(&path);
        store.set("session", r#"{"id":"M-001"}"#).unwrap();
        drop(store);

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("session"), Some(r#"{"id":"M-001"}"#.to_string()));
    }

    #[test]
    fn file_store_opens_empty_on_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "{not json").unwrap();

        let store = FileStore::open(&path);
        assert_eq!(store.get("session"), None);
    }

    #[test]
    fn file_store_remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut store = FileStore::open(&path);
        store.remove("absent").unwrap();
        store.set("k", "v").unwrap();
        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert_eq!(store.get("k"), None);
    }
}
