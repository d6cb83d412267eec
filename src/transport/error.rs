//! Error types for transport operations.

use thiserror::Error;

/// Error raised when a request never produced an HTTP response.
///
/// Non-2xx responses are not errors at this layer; they come back as an
/// [`ApiResponse`](super::ApiResponse) and the caller decides what a bad
/// status means. Nothing here is retried.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// Covers DNS resolution failures, refused connections and errors
    /// while reading the response body.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The transport's default timeout elapsed.
    #[error("Request timed out")]
    Timeout,

    /// The request could not be built (bad URL, bad header).
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
