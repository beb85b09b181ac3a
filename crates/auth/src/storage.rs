//! Durable key/value slot abstraction for the session store.
//!
//! The session store only ever touches one key. Implementations: in-memory
//! and one-file-per-key on disk.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("session storage unavailable: {0}")]
    Unavailable(String),

    #[error("session storage io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Process-local string key/value slot.
pub trait SessionStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    /// Remove `key`; removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<S> SessionStorage for Arc<S>
where
    S: SessionStorage + ?Sized,
{
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// In-memory slot for tests/dev.
#[derive(Debug, Default)]
pub struct InMemorySessionStorage {
    inner: RwLock<HashMap<String, String>>,
}

impl InMemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> StorageError {
    StorageError::Unavailable("lock poisoned".to_string())
}

impl SessionStorage for InMemorySessionStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        Ok(map.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        map.remove(key);
        Ok(())
    }
}

/// One file per key under a directory.
#[derive(Debug, Clone)]
pub struct FileSessionStorage {
    dir: PathBuf,
}

impl FileSessionStorage {
    /// Use `dir` for the slot files, creating it if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let file: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '.' || c == '-' { c } else { '_' })
            .collect();
        self.dir.join(format!("{file}.json"))
    }
}

impl SessionStorage for FileSessionStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // Slot contents are replaced atomically via rename.
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise(storage: &dyn SessionStorage) {
        assert_eq!(storage.get("user").unwrap(), None);
        storage.set("user", "{\"a\":1}").unwrap();
        assert_eq!(storage.get("user").unwrap().as_deref(), Some("{\"a\":1}"));
        storage.set("user", "{\"a\":2}").unwrap();
        assert_eq!(storage.get("user").unwrap().as_deref(), Some("{\"a\":2}"));
        storage.remove("user").unwrap();
        storage.remove("user").unwrap();
        assert_eq!(storage.get("user").unwrap(), None);
    }

    #[test]
    fn in_memory_slot_semantics() {
        exercise(&InMemorySessionStorage::new());
    }

    #[test]
    fn file_slot_semantics() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileSessionStorage::open(dir.path().join("session")).unwrap();
        exercise(&storage);
    }

    #[test]
    fn file_slot_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        FileSessionStorage::open(dir.path()).unwrap().set("mfgerp.session.user", "x").unwrap();

        let reopened = FileSessionStorage::open(dir.path()).unwrap();
        assert_eq!(reopened.get("mfgerp.session.user").unwrap().as_deref(), Some("x"));
    }
}
