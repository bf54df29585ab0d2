//! Persistence bridge: typed load/save of whole collections.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::backend::{KeyValueBackend, StorageError};

/// Outcome of loading one collection.
///
/// `Absent` and `Unreadable` are deliberately distinct: a missing key means
/// "first run", while an unreadable entry still counts as existing state.
#[derive(Debug, Clone, PartialEq)]
pub enum Loaded<T> {
    /// The key has never been written.
    Absent,
    /// The entry parsed into a collection (possibly empty).
    Parsed(Vec<T>),
    /// The entry exists but could not be read or parsed; treat as empty.
    Unreadable,
}

impl<T> Loaded<T> {
    /// Collapse to the records to start with; `None` only when the key is absent.
    pub fn into_records(self) -> Option<Vec<T>> {
        match self {
            Loaded::Absent => None,
            Loaded::Parsed(records) => Some(records),
            Loaded::Unreadable => Some(Vec::new()),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Loaded::Absent)
    }
}

/// Non-fatal failure to persist a collection.
///
/// Callers log and continue; the in-memory collection stays authoritative.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("failed to serialize '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Typed JSON bridge over a [`KeyValueBackend`].
#[derive(Debug, Clone)]
pub struct PersistenceBridge<B> {
    backend: B,
}

impl<B: KeyValueBackend> PersistenceBridge<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Load the collection stored under `key`.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Loaded<T> {
        let raw = match self.backend.read(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!(key, "no persisted entry");
                return Loaded::Absent;
            }
            Err(err) => {
                tracing::warn!(key, error = %err, "failed to read persisted entry; starting empty");
                return Loaded::Unreadable;
            }
        };

        match serde_json::from_str::<Vec<T>>(&raw) {
            Ok(records) => {
                tracing::debug!(key, count = records.len(), "loaded persisted entry");
                Loaded::Parsed(records)
            }
            Err(err) => {
                tracing::warn!(key, error = %err, "persisted entry is corrupt; starting empty");
                Loaded::Unreadable
            }
        }
    }

    /// Serialize `records` and overwrite the entry under `key`.
    pub fn save<T: Serialize>(&self, key: &str, records: &[T]) -> Result<(), PersistenceError> {
        let payload =
            serde_json::to_string(records).map_err(|source| PersistenceError::Serialize {
                key: key.to_string(),
                source,
            })?;
        self.backend.write(key, &payload)?;
        tracing::debug!(key, count = records.len(), "persisted collection");
        Ok(())
    }
}
