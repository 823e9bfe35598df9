//! Client-side product filtering.
//!
//! The catalog API only filters by category server-side; the search box on
//! the product list filters an already-fetched page locally. This is that
//! logic, kept pure so it can be tested without any fetching.

use crate::catalog::Product;

/// Filter over a fetched product list: an optional text query plus an
/// optional category.
///
/// The query matches case-insensitively against title and description; a
/// blank or whitespace-only query matches everything. The category is an
/// exact match against [`Product::category`]; `None` means all categories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    query: Option<String>,
    category: Option<String>,
}

impl ProductFilter {
    /// A filter that matches every product.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search query. Trimmed and lowercased up front; a blank query
    /// is the same as no query.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        let query = query.into().trim().to_lowercase();
        self.query = if query.is_empty() { None } else { Some(query) };
        self
    }

    /// Restrict to a single category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Check whether a single product passes the filter.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(query) = &self.query {
            let in_title = product.title.to_lowercase().contains(query);
            let in_description = product.description.to_lowercase().contains(query);
            if !in_title && !in_description {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if product.category != *category {
                return false;
            }
        }
        true
    }

    /// Apply the filter to a product list, preserving order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}
