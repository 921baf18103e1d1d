use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// The persisted key layout.
///
/// Exactly the original browser-storage surface: three presentation keys
/// plus the JSON-encoded progress blob.
pub mod keys {
    pub const THEME: &str = "theme";
    pub const TEXT_SIZE: &str = "textSize";
    pub const HIGH_CONTRAST: &str = "highContrast";
    pub const USER_PROGRESS: &str = "userProgress";
}

/// A durable string-keyed key-value store.
///
/// All application state persists through this one contract: values are
/// opaque strings, and every write replaces the stored value wholesale.
/// There is exactly one writer (the UI event loop), so no further
/// coordination is layered on top.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Fetch a value by key.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on backend failures; a missing key is `None`,
    /// not an error.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store or replace a value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be stored.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a key. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on backend failures.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Simple in-memory store for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryKvStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryKvStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KvStore for InMemoryKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(key);
        Ok(())
    }
}

/// Aggregates the store behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub kv: Arc<dyn KvStore>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            kv: Arc::new(InMemoryKvStore::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_get_remove_round_trip() {
        let store = InMemoryKvStore::new();
        assert_eq!(store.get(keys::THEME).await.unwrap(), None);

        store.set(keys::THEME, "dark").await.unwrap();
        assert_eq!(
            store.get(keys::THEME).await.unwrap(),
            Some("dark".to_string())
        );

        store.set(keys::THEME, "light").await.unwrap();
        assert_eq!(
            store.get(keys::THEME).await.unwrap(),
            Some("light".to_string())
        );

        store.remove(keys::THEME).await.unwrap();
        assert_eq!(store.get(keys::THEME).await.unwrap(), None);
        // Removing again is fine.
        store.remove(keys::THEME).await.unwrap();
    }

    #[tokio::test]
    async fn keys_are_independent() {
        let store = InMemoryKvStore::new();
        store.set(keys::TEXT_SIZE, "1.2").await.unwrap();
        store.set(keys::HIGH_CONTRAST, "true").await.unwrap();
        store.remove(keys::TEXT_SIZE).await.unwrap();
        assert_eq!(
            store.get(keys::HIGH_CONTRAST).await.unwrap(),
            Some("true".to_string())
        );
    }
}
