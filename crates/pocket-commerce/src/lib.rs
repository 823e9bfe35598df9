//! E-commerce domain types and cart logic for PocketStore.
//!
//! This crate provides the stateful core of a mobile storefront client:
//!
//! - **Catalog**: The product record shape served by the catalog API
//! - **Cart**: Cart state machine, the owning store, write-through persistence
//! - **Checkout**: Checkout form validation and simulated order placement
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use pocket_commerce::prelude::*;
//! use pocket_storage::FileStore;
//!
//! let storage = Arc::new(FileStore::open(data_dir)?);
//! let mut cart = CartStore::with_storage(storage);
//!
//! // Restore whatever the last session left behind.
//! cart.restore().await;
//!
//! cart.add_to_cart(product, 2);
//! println!("{} items, total {}", cart.total_items(), cart.total_price());
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;

pub use error::CheckoutError;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CheckoutError;

    // Catalog
    pub use crate::catalog::{Product, ProductFilter, Rating};

    // Cart
    pub use crate::cart::{Applied, CartCommand, CartItem, CartState, CartStore, CART_STORAGE_KEY};

    // Checkout
    pub use crate::checkout::{
        place_order, CheckoutForm, OrderConfirmation, OrderLine, OrderSummary, PaymentMethod,
    };
}
