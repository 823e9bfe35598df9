//! Order summary and simulated placement.
//!
//! There is no order backend: placing an order validates the form, snapshots
//! the cart into a confirmation, and leaves clearing the cart to the caller.

use crate::cart::CartItem;
use crate::checkout::form::{CheckoutForm, PaymentMethod};
use crate::error::CheckoutError;

/// One line of the order summary shown before placing the order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    /// Product title.
    pub title: String,
    /// Units ordered.
    pub quantity: i64,
    /// Unit price times quantity.
    pub line_total: f64,
}

impl OrderLine {
    /// Format as the summary row text, e.g. "Backpack x 2".
    pub fn display(&self) -> String {
        format!("{} x {}", self.title, self.quantity)
    }
}

/// The order summary: per-line totals plus the grand total.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary {
    pub lines: Vec<OrderLine>,
    pub total: f64,
}

impl OrderSummary {
    /// Build a summary from the current cart items.
    pub fn from_items(items: &[CartItem]) -> Self {
        let lines: Vec<OrderLine> = items
            .iter()
            .map(|item| OrderLine {
                title: item.product.title.clone(),
                quantity: item.quantity,
                line_total: item.line_total(),
            })
            .collect();
        let total = items.iter().map(CartItem::line_total).sum();
        Self { lines, total }
    }
}

/// Receipt for a successfully placed (simulated) order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderConfirmation {
    /// Customer name, trimmed.
    pub customer_name: String,
    /// Payment method chosen on the form.
    pub payment_method: PaymentMethod,
    /// Grand total at the time of placement.
    pub total: f64,
}

impl OrderConfirmation {
    /// The thank-you message shown to the customer.
    pub fn message(&self) -> String {
        format!(
            "Thank you for your order, {}! Your order total is ${:.2}.",
            self.customer_name, self.total
        )
    }
}

/// Validate the form and place an order against the given cart items.
///
/// Fails if the form is invalid or the cart is empty. On success the caller
/// is expected to clear the cart.
pub fn place_order(
    form: &CheckoutForm,
    items: &[CartItem],
) -> Result<OrderConfirmation, CheckoutError> {
    form.validate()?;
    if items.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    Ok(OrderConfirmation {
        customer_name: form.name.trim().to_string(),
        payment_method: form.payment_method,
        total: items.iter().map(CartItem::line_total).sum(),
    })
}
