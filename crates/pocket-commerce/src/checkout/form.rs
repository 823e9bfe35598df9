//! Checkout form and validation.

use crate::error::CheckoutError;
use serde::{Deserialize, Serialize};

/// How the customer pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Credit,
    Debit,
    Paypal,
    Cash,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Credit => "credit",
            PaymentMethod::Debit => "debit",
            PaymentMethod::Paypal => "paypal",
            PaymentMethod::Cash => "cash",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "credit" => Some(PaymentMethod::Credit),
            "debit" => Some(PaymentMethod::Debit),
            "paypal" => Some(PaymentMethod::Paypal),
            "cash" => Some(PaymentMethod::Cash),
            _ => None,
        }
    }

    /// Human-readable label for form display.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Credit => "Credit Card",
            PaymentMethod::Debit => "Debit Card",
            PaymentMethod::Paypal => "PayPal",
            PaymentMethod::Cash => "Cash on Delivery",
        }
    }

    /// All methods, in form display order.
    pub fn all() -> [PaymentMethod; 4] {
        [
            PaymentMethod::Credit,
            PaymentMethod::Debit,
            PaymentMethod::Paypal,
            PaymentMethod::Cash,
        ]
    }
}

/// Details the customer fills in before placing an order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutForm {
    /// Customer name.
    pub name: String,
    /// Delivery address.
    pub address: String,
    /// Selected payment method.
    pub payment_method: PaymentMethod,
}

impl CheckoutForm {
    /// Create a form with the given name and address.
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            payment_method: PaymentMethod::default(),
        }
    }

    /// Select a payment method.
    pub fn with_payment_method(mut self, method: PaymentMethod) -> Self {
        self.payment_method = method;
        self
    }

    /// Validate the form, reporting the first failing rule.
    ///
    /// Name is checked before address, matching the order the form presents
    /// its fields. Whitespace-only input counts as blank.
    pub fn validate(&self) -> Result<(), CheckoutError> {
        if self.name.trim().is_empty() {
            return Err(CheckoutError::MissingName);
        }
        if self.address.trim().is_empty() {
            return Err(CheckoutError::MissingAddress);
        }
        Ok(())
    }
}
