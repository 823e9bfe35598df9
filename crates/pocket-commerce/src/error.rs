//! Commerce error types.

use thiserror::Error;

/// Errors that can occur when placing an order.
///
/// The cart command API itself is total: every cart operation succeeds, so
/// only the checkout boundary has a failure path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// The customer name field is blank.
    #[error("Please enter your name")]
    MissingName,

    /// The delivery address field is blank.
    #[error("Please enter your address")]
    MissingAddress,

    /// An order cannot be placed against an empty cart.
    #[error("Cart is empty")]
    EmptyCart,
}
