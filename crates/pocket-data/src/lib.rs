//! Product catalog API client for PocketStore.
//!
//! A thin, read-only client over the public demo catalog
//! ([Fake Store API](https://fakestoreapi.com)) with automatic JSON decoding.
//! Failures map to [`FetchError`]; there is no retry or caching here.
//!
//! # Example
//!
//! ```rust,ignore
//! use pocket_data::CatalogClient;
//!
//! let catalog = CatalogClient::new();
//!
//! let products = catalog.products().await?;
//! let shirts = catalog.products_in_category("men's clothing").await?;
//! let featured = catalog.product(1).await?;
//! ```

mod error;

pub use error::FetchError;

use pocket_commerce::catalog::Product;
use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Base URL of the public demo catalog.
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

/// Read-only client for the product catalog API.
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogClient {
    /// Create a client against the default catalog.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a different base URL (tests, mirrors).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch the full product list.
    pub async fn products(&self) -> Result<Vec<Product>, FetchError> {
        let url = self.endpoint(&["products"])?;
        self.get_json(url).await
    }

    /// Fetch a single product by id.
    pub async fn product(&self, id: u64) -> Result<Product, FetchError> {
        let url = self.endpoint(&["products", &id.to_string()])?;
        self.get_json(url).await
    }

    /// Fetch the list of category names.
    pub async fn categories(&self) -> Result<Vec<String>, FetchError> {
        let url = self.endpoint(&["products", "categories"])?;
        self.get_json(url).await
    }

    /// Fetch products filtered server-side by category.
    ///
    /// Category names come back verbatim from [`categories`](Self::categories)
    /// and may contain spaces or apostrophes; they are encoded as a single
    /// path segment here.
    pub async fn products_in_category(&self, category: &str) -> Result<Vec<Product>, FetchError> {
        let url = self.endpoint(&["products", "category", category])?;
        self.get_json(url).await
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, FetchError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| FetchError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        debug!(%url, "fetching catalog resource");
        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| FetchError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_urls() {
        let client = CatalogClient::new();
        assert_eq!(
            client.endpoint(&["products"]).unwrap().as_str(),
            "https://fakestoreapi.com/products"
        );
        assert_eq!(
            client.endpoint(&["products", "7"]).unwrap().as_str(),
            "https://fakestoreapi.com/products/7"
        );
        assert_eq!(
            client.endpoint(&["products", "categories"]).unwrap().as_str(),
            "https://fakestoreapi.com/products/categories"
        );
    }

    #[test]
    fn test_category_segment_is_encoded() {
        let client = CatalogClient::new();
        let url = client
            .endpoint(&["products", "category", "men's clothing"])
            .unwrap();
        assert_eq!(url.path(), "/products/category/men's%20clothing");
    }

    #[test]
    fn test_trailing_slash_in_base_url() {
        let client = CatalogClient::with_base_url("https://example.com/");
        let url = client.endpoint(&["products"]).unwrap();
        assert_eq!(url.as_str(), "https://example.com/products");
    }

    #[test]
    fn test_unparseable_base_url_is_rejected() {
        let client = CatalogClient::with_base_url("not a url");
        assert!(matches!(
            client.endpoint(&["products"]),
            Err(FetchError::InvalidUrl(_))
        ));
    }
}
