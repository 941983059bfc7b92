//! Key-value persistence backends.
//!
//! [`Persister`] is the localStorage analogue: string keys mapping to JSON
//! payloads. All methods take `&self`, so implementations use interior
//! mutability where needed and can be shared behind an `Arc`.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use thiserror::Error;

/// Errors from a persistence backend.
#[derive(Debug, Error)]
pub enum PersistError {
    /// Filesystem operation failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A payload could not be serialized.
    #[error("storage serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// A key-value persistence backend.
///
/// Returns `Ok(None)` from [`get`](Persister::get) for unknown keys;
/// deleting an unknown key is not an error.
pub trait Persister: Send + Sync {
    /// Retrieve the payload stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `PersistError` when the backend fails to read.
    fn get(&self, key: &str) -> Result<Option<String>, PersistError>;

    /// Store `value` under `key`, replacing any previous payload.
    ///
    /// # Errors
    ///
    /// Returns `PersistError` when the backend fails to write.
    fn put(&self, key: &str, value: &str) -> Result<(), PersistError>;

    /// Remove the payload stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `PersistError` when the backend fails to delete.
    fn delete(&self, key: &str) -> Result<(), PersistError>;
}

/// File-backed persister: one `<key>.json` file per key under a directory.
pub struct FilePersister {
    dir: PathBuf,
}

impl FilePersister {
    /// Open (creating if needed) a persister rooted at `dir`.
    ///
    /// # Errors
    ///
    /// Returns `PersistError` when the directory cannot be created.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, PersistError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Persister for FilePersister {
    fn get(&self, key: &str) -> Result<Option<String>, PersistError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn put(&self, key: &str, value: &str) -> Result<(), PersistError> {
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), PersistError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory persister for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryPersister {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryPersister {
    /// Create an empty in-memory persister.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Persister for MemoryPersister {
    fn get(&self, key: &str) -> Result<Option<String>, PersistError> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), PersistError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), PersistError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.remove(key);
        Ok(())
    }
}
