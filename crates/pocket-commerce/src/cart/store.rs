//! The cart store.
//!
//! `CartStore` owns the authoritative [`CartState`] and is the only writer to
//! it. Commands run synchronously to completion; persistence is a side effect
//! scheduled after the transition, never a gate on it. Construct one store at
//! the application root and hand references to whichever screens need it.

use crate::cart::persist::{WriteThrough, CART_STORAGE_KEY};
use crate::cart::state::{CartCommand, CartItem, CartState};
use crate::catalog::Product;
use pocket_storage::KeyValueStore;
use std::sync::Arc;
use tracing::{debug, warn};

struct Persistence {
    backend: Arc<dyn KeyValueStore>,
    writer: WriteThrough,
    restored: bool,
}

/// Owner of the in-memory cart and its storage synchronization.
///
/// All command methods are synchronous and infallible: storage failures are
/// logged and swallowed, and the in-memory state remains the source of truth
/// for the session.
pub struct CartStore {
    state: CartState,
    persist: Option<Persistence>,
}

impl CartStore {
    /// Create a store with no persistence. The cart lives only in memory.
    pub fn new() -> Self {
        Self {
            state: CartState::new(),
            persist: None,
        }
    }

    /// Create a store that writes through to the given storage backend.
    ///
    /// Spawns the background writer task, so this must be called within a
    /// tokio runtime. Call [`restore`](Self::restore) afterwards to pick up
    /// the previous session's cart.
    pub fn with_storage(backend: Arc<dyn KeyValueStore>) -> Self {
        let writer = WriteThrough::spawn(backend.clone(), CART_STORAGE_KEY);
        Self {
            state: CartState::new(),
            persist: Some(Persistence {
                backend,
                writer,
                restored: false,
            }),
        }
    }

    /// Load the previously persisted cart, replacing the in-memory state.
    ///
    /// Runs at most once per store; later calls are no-ops. An absent key,
    /// a storage failure, or an undecodable blob all leave the current state
    /// untouched and are logged. Restoring never writes back to storage.
    pub async fn restore(&mut self) {
        let Some(persist) = &mut self.persist else {
            return;
        };
        if persist.restored {
            return;
        }
        persist.restored = true;

        match persist.backend.get(CART_STORAGE_KEY).await {
            Ok(Some(bytes)) => match serde_json::from_slice::<Vec<CartItem>>(&bytes) {
                Ok(items) => {
                    debug!(items = items.len(), "restored cart from storage");
                    self.state.apply(CartCommand::Restore { items });
                }
                Err(error) => warn!(%error, "ignoring undecodable cart blob"),
            },
            Ok(None) => debug!("no persisted cart found"),
            Err(error) => warn!(%error, "failed to load cart from storage"),
        }
    }

    /// Add `quantity` units of a product, merging with an existing line.
    pub fn add_to_cart(&mut self, product: Product, quantity: i64) {
        self.dispatch(CartCommand::Add { product, quantity });
    }

    /// Remove a product's line from the cart; no-op if absent.
    pub fn remove_from_cart(&mut self, product_id: u64) {
        self.dispatch(CartCommand::Remove { product_id });
    }

    /// Set a line's quantity absolutely. `quantity <= 0` removes the line;
    /// no-op if the product is not in the cart.
    pub fn update_quantity(&mut self, product_id: u64, quantity: i64) {
        self.dispatch(CartCommand::SetQuantity {
            product_id,
            quantity,
        });
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.dispatch(CartCommand::Clear);
    }

    /// Sum of `price * quantity` over all items.
    pub fn total_price(&self) -> f64 {
        self.state.total_price()
    }

    /// Sum of quantities over all items.
    pub fn total_items(&self) -> i64 {
        self.state.total_items()
    }

    /// The item sequence, in display order.
    pub fn items(&self) -> &[CartItem] {
        self.state.items()
    }

    /// Check if the cart holds no items.
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Wait until every scheduled save has been processed.
    ///
    /// Useful on shutdown; without it a save scheduled by the last command
    /// may still be in flight when the process exits.
    pub async fn flush(&self) {
        if let Some(persist) = &self.persist {
            persist.writer.flush().await;
        }
    }

    fn dispatch(&mut self, command: CartCommand) {
        let applied = self.state.apply(command);
        if applied.changed && applied.write_through {
            self.schedule_save();
        }
    }

    fn schedule_save(&mut self) {
        let Some(persist) = &self.persist else {
            return;
        };
        match serde_json::to_vec(self.state.items()) {
            Ok(bytes) => persist.writer.submit(bytes),
            Err(error) => warn!(%error, "failed to serialize cart for save"),
        }
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Rating;
    use pocket_storage::{MemoryStore, StorageError};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn product(id: u64, price: f64) -> Product {
        Product {
            id,
            title: format!("Product {id}"),
            price,
            description: "Test Description".to_string(),
            category: "test".to_string(),
            image: "https://example.com/image.jpg".to_string(),
            rating: Rating {
                rate: 4.5,
                count: 100,
            },
        }
    }

    /// Wraps a MemoryStore and counts writes.
    #[derive(Default)]
    struct CountingStore {
        inner: MemoryStore,
        sets: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl KeyValueStore for CountingStore {
        async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
            self.inner.get(key).await
        }

        async fn set(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError> {
            self.sets.fetch_add(1, Ordering::SeqCst);
            self.inner.set(key, value).await
        }

        async fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.inner.remove(key).await
        }
    }

    /// Fails every operation, simulating a broken storage layer.
    struct BrokenStore;

    #[async_trait::async_trait]
    impl KeyValueStore for BrokenStore {
        async fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, StorageError> {
            Err(StorageError::StoreError("disk on fire".to_string()))
        }

        async fn set(&self, _key: &str, _value: Vec<u8>) -> Result<(), StorageError> {
            Err(StorageError::StoreError("disk on fire".to_string()))
        }

        async fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::StoreError("disk on fire".to_string()))
        }
    }

    #[test]
    fn test_in_memory_store_commands() {
        let mut store = CartStore::new();
        store.add_to_cart(product(1, 10.99), 2);
        store.add_to_cart(product(2, 5.0), 1);
        store.update_quantity(2, 3);
        store.remove_from_cart(99);

        assert_eq!(store.total_items(), 5);
        assert!((store.total_price() - 36.98).abs() < 1e-9);
        assert_eq!(store.items().len(), 2);

        store.clear_cart();
        assert!(store.is_empty());
        assert_eq!(store.total_price(), 0.0);
    }

    #[tokio::test]
    async fn test_round_trip_across_restart() {
        let backend = Arc::new(MemoryStore::new());

        let mut store = CartStore::with_storage(backend.clone());
        store.restore().await;
        store.add_to_cart(product(1, 10.99), 2);
        store.add_to_cart(product(2, 5.25), 1);
        store.update_quantity(1, 3);
        store.flush().await;
        let saved_items = store.items().to_vec();
        drop(store);

        // "Restart": a fresh store over the same backend.
        let mut revived = CartStore::with_storage(backend);
        revived.restore().await;

        assert_eq!(revived.items(), saved_items.as_slice());
        assert_eq!(revived.total_items(), 4);
    }

    #[tokio::test]
    async fn test_restore_with_empty_storage_leaves_cart_empty() {
        let backend = Arc::new(MemoryStore::new());
        let mut store = CartStore::with_storage(backend);
        store.restore().await;
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_restore_does_not_write_back() {
        let backend = Arc::new(CountingStore::default());
        let blob = serde_json::to_vec(&[CartItem {
            product: product(1, 10.0),
            quantity: 2,
        }])
        .unwrap();
        backend.inner.set(CART_STORAGE_KEY, blob).await.unwrap();

        let mut store = CartStore::with_storage(backend.clone());
        store.restore().await;
        store.flush().await;

        assert_eq!(store.total_items(), 2);
        assert_eq!(backend.sets.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_restore_runs_only_once() {
        let backend = Arc::new(MemoryStore::new());
        let blob = serde_json::to_vec(&[CartItem {
            product: product(1, 10.0),
            quantity: 1,
        }])
        .unwrap();
        backend.set(CART_STORAGE_KEY, blob).await.unwrap();

        let mut store = CartStore::with_storage(backend);
        store.restore().await;
        store.add_to_cart(product(2, 5.0), 1);

        // A second restore must not clobber the session's mutations.
        store.restore().await;
        assert_eq!(store.items().len(), 2);
    }

    #[tokio::test]
    async fn test_corrupt_blob_is_ignored() {
        let backend = Arc::new(MemoryStore::new());
        backend
            .set(CART_STORAGE_KEY, b"not json at all".to_vec())
            .await
            .unwrap();

        let mut store = CartStore::with_storage(backend);
        store.restore().await;
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_broken_storage_never_surfaces() {
        let backend = Arc::new(BrokenStore);
        let mut store = CartStore::with_storage(backend);

        store.restore().await;
        store.add_to_cart(product(1, 10.99), 2);
        store.flush().await;

        // In-memory state is unaffected by the failed load and save.
        assert_eq!(store.total_items(), 2);
        assert!((store.total_price() - 21.98).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_storage_reflects_latest_state_after_rapid_mutation() {
        let backend = Arc::new(MemoryStore::new());
        let mut store = CartStore::with_storage(backend.clone());
        store.restore().await;

        for n in 1..=50 {
            store.add_to_cart(product(n, 1.0), 1);
            store.update_quantity(n, 2);
        }
        store.remove_from_cart(25);
        store.flush().await;

        let bytes = backend.get(CART_STORAGE_KEY).await.unwrap().unwrap();
        let persisted: Vec<CartItem> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(persisted, store.items().to_vec());
    }

    #[tokio::test]
    async fn test_noop_commands_schedule_no_save() {
        let backend = Arc::new(CountingStore::default());
        let mut store = CartStore::with_storage(backend.clone());
        store.restore().await;

        store.remove_from_cart(42);
        store.update_quantity(42, 3);
        store.flush().await;

        assert_eq!(backend.sets.load(Ordering::SeqCst), 0);
    }
}
