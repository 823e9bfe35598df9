//! Async key-value persistence layer for PocketStore.
//!
//! This crate provides the durable storage boundary the cart survives
//! restarts through:
//! - `KeyValueStore` - The byte-oriented store trait
//! - `MemoryStore` - In-memory backend for tests and ephemeral use
//! - `FileStore` - One-file-per-key backend for on-device durability
//!
//! # Example
//!
//! ```rust,ignore
//! use pocket_storage::{FileStore, KeyValueStore};
//!
//! let store = FileStore::open("/data/pocketstore")?;
//!
//! store.set("cart:v1", serde_json::to_vec(&cart)?).await?;
//!
//! if let Some(bytes) = store.get("cart:v1").await? {
//!     // restore from bytes
//! }
//! ```

mod error;
mod file;
mod memory;
mod store;

pub use error::StorageError;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use store::KeyValueStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FileStore, KeyValueStore, MemoryStore, StorageError};
}
