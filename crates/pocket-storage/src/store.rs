//! The key-value store trait.

use crate::StorageError;
use async_trait::async_trait;

/// Byte-oriented key-value store backend.
///
/// All methods take `&self`; implementations use interior mutability so a
/// single store handle can be shared across tasks behind an `Arc`.
///
/// Values are raw bytes. Serialization is the caller's concern, which keeps
/// the storage boundary ignorant of domain types.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Retrieve a value by key.
    ///
    /// Returns `Ok(None)` if the key does not exist.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Insert or overwrite a value.
    async fn set(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError>;

    /// Remove a value by key.
    ///
    /// Returns `Ok(())` even if the key did not exist.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}
