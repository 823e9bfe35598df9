//! Shopping cart module.
//!
//! Contains the cart state machine, the owning store, and the write-through
//! persistence queue.

mod persist;
mod state;
mod store;

pub use persist::{WriteThrough, CART_STORAGE_KEY};
pub use state::{Applied, CartCommand, CartItem, CartState};
pub use store::CartStore;
