//! Key-value backend abstraction.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Low-level storage failure.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StorageError {
    #[error("storage I/O error on key '{key}': {reason}")]
    Io { key: String, reason: String },
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}

impl StorageError {
    pub fn io(key: &str, reason: impl ToString) -> Self {
        Self::Io {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Synchronous string key/value store holding whole serialized collections.
///
/// Implementations use `&self` so one backend can be shared by both stores.
pub trait KeyValueBackend: Send + Sync {
    /// Read the raw entry for `key`; `Ok(None)` when the key was never written.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the entry for `key`.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S> KeyValueBackend for Arc<S>
where
    S: KeyValueBackend + ?Sized,
{
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }
}

/// In-memory backend for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    inner: RwLock<HashMap<String, String>>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate an entry (e.g. to simulate state left by a previous run).
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        if let Ok(mut map) = self.inner.write() {
            map.insert(key.to_string(), value.to_string());
        }
        self
    }
}

impl KeyValueBackend for InMemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let map = self
            .inner
            .read()
            .map_err(|_| StorageError::Unavailable("lock poisoned".to_string()))?;
        Ok(map.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| StorageError::Unavailable("lock poisoned".to_string()))?;
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
