//! Product catalog module.
//!
//! Contains the product record shape served by the catalog API and
//! client-side filtering over fetched product lists.

mod product;
mod search;

pub use product::{Product, Rating};
pub use search::ProductFilter;
