//! In-memory store backend.

use crate::{KeyValueStore, StorageError};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

/// In-memory key-value store.
///
/// Holds everything in a `HashMap`; contents are lost when the store is
/// dropped. Intended for tests and for running without durable storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    /// Check whether the store holds no keys.
    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError> {
        self.entries.lock().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.lock().await.remove(key);
        Ok(())
    }
}
