//! Checkout module.
//!
//! Contains the checkout form, its validation rules, and simulated order
//! placement.

mod form;
mod order;

pub use form::{CheckoutForm, PaymentMethod};
pub use order::{place_order, OrderConfirmation, OrderLine, OrderSummary};
