//! Cart state machine.
//!
//! `CartState` is transformed exclusively by `apply`, a pure synchronous
//! transition over a tagged command enum. Keeping the transition free of I/O
//! lets every invariant be tested without storage in the picture; the owning
//! [`CartStore`](crate::cart::CartStore) layers persistence on top.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// One line in the cart: a product snapshot and how many of it.
///
/// The product is the snapshot taken when the item was first added; later
/// adds of the same product merge quantities without refreshing the fields.
/// Quantity is kept >= 1 by the transition logic, not the type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// The product as it looked when first added.
    pub product: Product,
    /// Number of units.
    pub quantity: i64,
}

impl CartItem {
    /// Line total: unit price times quantity.
    pub fn line_total(&self) -> f64 {
        self.product.price * self.quantity as f64
    }
}

/// A command against the cart.
///
/// `Restore` exists only for the load-on-start path: it replaces the item
/// sequence verbatim, bypassing merge and quantity normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum CartCommand {
    /// Add `quantity` units of a product, merging with an existing line.
    Add { product: Product, quantity: i64 },
    /// Remove the line for a product, if present.
    Remove { product_id: u64 },
    /// Set a line's quantity absolutely; `quantity <= 0` removes the line.
    SetQuantity { product_id: u64, quantity: i64 },
    /// Empty the cart.
    Clear,
    /// Replace the item sequence with previously persisted items.
    Restore { items: Vec<CartItem> },
}

/// Outcome of applying a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Applied {
    /// Whether the state differs from before the command.
    pub changed: bool,
    /// Whether the change should be written through to storage.
    ///
    /// False for `Restore`: loading persisted state back must not trigger a
    /// redundant save of that same state.
    pub write_through: bool,
}

impl Applied {
    fn mutated(changed: bool) -> Self {
        Self {
            changed,
            write_through: changed,
        }
    }

    fn restored(changed: bool) -> Self {
        Self {
            changed,
            write_through: false,
        }
    }
}

/// The authoritative cart contents: an ordered item sequence, unique by
/// product id.
///
/// Insertion order is preserved across adds; consumers treat it as display
/// order only.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CartState {
    items: Vec<CartItem>,
}

impl CartState {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a command, returning what happened.
    pub fn apply(&mut self, command: CartCommand) -> Applied {
        match command {
            CartCommand::Add { product, quantity } => {
                if let Some(existing) = self.items.iter_mut().find(|i| i.product.id == product.id) {
                    // Saturating keeps the command total: a merge past
                    // i64::MAX pins at the max instead of panicking.
                    let merged = existing.quantity.saturating_add(quantity);
                    if merged <= 0 {
                        // A non-positive merge collapses to removal, the same
                        // rule SetQuantity applies.
                        let id = product.id;
                        self.items.retain(|i| i.product.id != id);
                        Applied::mutated(true)
                    } else {
                        let changed = merged != existing.quantity;
                        existing.quantity = merged;
                        Applied::mutated(changed)
                    }
                } else if quantity <= 0 {
                    Applied::mutated(false)
                } else {
                    self.items.push(CartItem { product, quantity });
                    Applied::mutated(true)
                }
            }

            CartCommand::Remove { product_id } => {
                let before = self.items.len();
                self.items.retain(|i| i.product.id != product_id);
                Applied::mutated(self.items.len() < before)
            }

            CartCommand::SetQuantity {
                product_id,
                quantity,
            } => {
                if quantity <= 0 {
                    return self.apply(CartCommand::Remove { product_id });
                }
                match self.items.iter_mut().find(|i| i.product.id == product_id) {
                    Some(item) if item.quantity == quantity => Applied::mutated(false),
                    Some(item) => {
                        item.quantity = quantity;
                        Applied::mutated(true)
                    }
                    None => Applied::mutated(false),
                }
            }

            CartCommand::Clear => {
                let changed = !self.items.is_empty();
                self.items.clear();
                Applied::mutated(changed)
            }

            CartCommand::Restore { items } => {
                // Loaded items are trusted verbatim.
                let changed = self.items != items;
                self.items = items;
                Applied::restored(changed)
            }
        }
    }

    /// Sum of `price * quantity` over all items; 0 for an empty cart.
    pub fn total_price(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Sum of quantities over all items, saturating at `i64::MAX`.
    pub fn total_items(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |total, i| total.saturating_add(i.quantity))
    }

    /// Check if the cart holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The item sequence, in display order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Look up the line for a product.
    pub fn get(&self, product_id: u64) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product.id == product_id)
    }
}
