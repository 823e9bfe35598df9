//! Product types.
//!
//! These mirror the catalog API's wire format exactly: records deserialize
//! straight off the `/products` endpoints and are stored verbatim in cart
//! snapshots. The store never mutates a product after it enters the cart.

use serde::{Deserialize, Serialize};

/// A product in the remote catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier, stable across fetches.
    pub id: u64,
    /// Product title.
    pub title: String,
    /// Unit price as a decimal amount (two decimal places expected).
    pub price: f64,
    /// Full description.
    pub description: String,
    /// Category name (also used for server-side filtering).
    pub category: String,
    /// Image URI.
    pub image: String,
    /// Aggregate customer rating.
    pub rating: Rating,
}

impl Product {
    /// Format the unit price for display (e.g., "$49.99").
    pub fn price_display(&self) -> String {
        format!("${:.2}", self.price)
    }
}

/// Aggregate rating for a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rating {
    /// Average rating, 0 to 5.
    pub rate: f64,
    /// Number of ratings.
    pub count: u64,
}
