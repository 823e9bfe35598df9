//! Write-through persistence queue for the cart.
//!
//! Every mutating command hands the full serialized cart to [`WriteThrough`];
//! a single background task drains the queue and writes to storage. The queue
//! is a `tokio::sync::watch` channel, which gives exactly the ordering policy
//! the cart needs: one in-flight write at a time, and rapid successive
//! snapshots coalesce so the last value stored is always the most recent
//! in-memory state.
//!
//! Write failures are logged and dropped; the in-memory cart stays the source
//! of truth for the rest of the session.

use pocket_storage::KeyValueStore;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::warn;

/// Storage key the serialized cart lives under.
pub const CART_STORAGE_KEY: &str = "pocketstore:cart";

#[derive(Debug, Clone, Default)]
struct Snapshot {
    /// Monotonic sequence number; `flush` waits on it.
    seq: u64,
    bytes: Vec<u8>,
}

/// Single-writer save queue with latest-state-wins coalescing.
pub struct WriteThrough {
    tx: watch::Sender<Snapshot>,
    done: watch::Receiver<u64>,
}

impl WriteThrough {
    /// Spawn the writer task against a storage backend and key.
    ///
    /// Must be called within a tokio runtime. The task exits after the
    /// `WriteThrough` handle is dropped and the final snapshot is written.
    pub fn spawn(backend: Arc<dyn KeyValueStore>, key: &str) -> Self {
        let key = key.to_string();
        let (tx, mut rx) = watch::channel(Snapshot::default());
        let (done_tx, done) = watch::channel(0u64);

        tokio::spawn(async move {
            while rx.changed().await.is_ok() {
                let snapshot = rx.borrow_and_update().clone();
                if let Err(error) = backend.set(&key, snapshot.bytes).await {
                    // Not retried: a later mutation will overwrite the key
                    // anyway, and the in-memory state is authoritative.
                    warn!(%error, key = %key, seq = snapshot.seq, "cart save failed");
                }
                let _ = done_tx.send(snapshot.seq);
            }
        });

        Self { tx, done }
    }

    /// Submit a serialized cart snapshot for writing.
    ///
    /// Returns immediately; an unwritten earlier snapshot is superseded.
    pub fn submit(&self, bytes: Vec<u8>) {
        self.tx.send_modify(|snapshot| {
            snapshot.seq += 1;
            snapshot.bytes = bytes;
        });
    }

    /// Wait until the latest submitted snapshot has been processed.
    ///
    /// "Processed" includes failed writes; this is a completion barrier, not
    /// a durability guarantee.
    pub async fn flush(&self) {
        let target = self.tx.borrow().seq;
        let mut done = self.done.clone();
        loop {
            if *done.borrow_and_update() >= target {
                return;
            }
            if done.changed().await.is_err() {
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pocket_storage::MemoryStore;

    #[tokio::test]
    async fn test_writes_submitted_snapshot() {
        let store = Arc::new(MemoryStore::new());
        let writer = WriteThrough::spawn(store.clone(), "test:key");

        writer.submit(b"hello".to_vec());
        writer.flush().await;

        assert_eq!(store.get("test:key").await.unwrap(), Some(b"hello".to_vec()));
    }

    #[tokio::test]
    async fn test_rapid_submits_end_with_latest() {
        let store = Arc::new(MemoryStore::new());
        let writer = WriteThrough::spawn(store.clone(), "test:key");

        for n in 0..100u32 {
            writer.submit(n.to_string().into_bytes());
        }
        writer.flush().await;

        assert_eq!(store.get("test:key").await.unwrap(), Some(b"99".to_vec()));
    }

    #[tokio::test]
    async fn test_flush_with_nothing_submitted_returns() {
        let store = Arc::new(MemoryStore::new());
        let writer = WriteThrough::spawn(store.clone(), "test:key");

        writer.flush().await;
        assert_eq!(store.get("test:key").await.unwrap(), None);
    }
}
