//! File-backed store backend.

use crate::{KeyValueStore, StorageError};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Durable key-value store keeping one file per key under a directory.
///
/// Keys are escaped into filesystem-safe file names, so any string key is
/// accepted. Writes go to a temp file first and are renamed into place, so a
/// crash mid-write leaves the previous value intact rather than a truncated
/// blob.
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a store rooted at the given directory, creating it if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        std::fs::create_dir_all(&root)
            .map_err(|e| StorageError::OpenError(format!("{}: {e}", root.display())))?;
        Ok(Self { root })
    }

    /// Directory this store keeps its files in.
    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(escape_key(key))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        match tokio::fs::read(self.path_for(key)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError> {
        let name = escape_key(key);
        let path = self.root.join(&name);
        // `~` never appears in escaped names, so temp files cannot collide
        // with another key's file.
        let tmp = self.root.join(format!("{name}~"));
        tokio::fs::write(&tmp, &value).await?;
        tokio::fs::rename(&tmp, &path).await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        match tokio::fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Escape a key into a filesystem-safe file name.
///
/// Alphanumerics, `-`, `_` and `.` pass through; every other byte becomes
/// `%XX`. The mapping is injective, so distinct keys never collide.
fn escape_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for byte in key.bytes() {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'_' | b'.' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02x}")),
        }
    }
    out
}
