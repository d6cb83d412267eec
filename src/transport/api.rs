//! JSON request executor on top of an [`HttpClient`].

use http::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;

use super::{HttpClient, HttpError, HttpRequest, ResponseContent};

/// A decoded API response: status plus content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: http::StatusCode,
    /// Decoded body
    pub content: ResponseContent,
}

impl ApiResponse {
    /// Returns true for any status below 400.
    ///
    /// Informational and redirect statuses count as success, matching how
    /// the API is consumed: only 4xx and 5xx are failures.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status.as_u16() < 400
    }
}

/// Error returned by [`ApiClient::execute`].
#[derive(Debug, thiserror::Error)]
pub enum ExecuteError {
    /// The request body could not be serialized.
    #[error("Failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    /// The request did not produce a response.
    #[error(transparent)]
    Http(#[from] HttpError),
}

/// Sends JSON requests and decodes their responses.
///
/// Every call is a single attempt; there is no retry and no timeout
/// beyond the underlying client's defaults.
#[derive(Debug, Clone)]
pub struct ApiClient<H> {
    client: H,
}

impl<H: HttpClient> ApiClient<H> {
    /// Wraps an HTTP client.
    #[must_use]
    pub const fn new(client: H) -> Self {
        Self { client }
    }

    /// Returns the wrapped client.
    #[must_use]
    pub const fn inner(&self) -> &H {
        &self.client
    }

    /// Executes one request.
    ///
    /// When `body` is `Some` it is serialized to JSON; when `None` no body
    /// is sent at all. The response body is decoded with
    /// [`ResponseContent::decode`] regardless of the status.
    ///
    /// # Errors
    ///
    /// Returns [`ExecuteError`] if the body cannot be encoded or the
    /// transport fails. HTTP error statuses are returned as a normal
    /// [`ApiResponse`].
    pub async fn execute<B>(
        &self,
        method: http::Method,
        url: url::Url,
        body: Option<&B>,
        headers: HeaderMap,
    ) -> Result<ApiResponse, ExecuteError>
    where
        B: Serialize + ?Sized,
    {
        let mut request = HttpRequest::new(method, url).with_headers(headers);
        if let Some(body) = body {
            request = request.with_body(serde_json::to_vec(body)?);
        }

        tracing::debug!("{} {}", request.method, request.url);
        let response = self.client.request(request).await?;
        tracing::debug!("Response status: {}", response.status);

        Ok(ApiResponse {
            status: response.status,
            content: ResponseContent::decode(&response.body, response.status),
        })
    }
}

/// Headers for a JSON request without authentication.
#[must_use]
pub fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}
