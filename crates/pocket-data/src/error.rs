//! Catalog client error types.

use thiserror::Error;

/// Errors that can occur when fetching from the catalog API.
///
/// All variants surface to the caller as-is; the client performs no retry or
/// backoff. The UI layer decides on messaging and retry affordances.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Failed to send the request (network, DNS, TLS).
    #[error("Request failed: {0}")]
    Request(String),

    /// The base URL cannot be used to build endpoint URLs.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The server answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    Http { status: u16, url: String },

    /// The response body is not the expected JSON shape.
    #[error("Failed to parse response: {0}")]
    Parse(String),
}
