//! Error type for a provisioning run.

use thiserror::Error;

use crate::transport::{ExecuteError, ResponseContent};

/// Everything that can end a provisioning run early.
///
/// Each variant is fatal for the run: nothing is retried and resources
/// created before the failure are left in place.
#[derive(Debug, Error)]
pub enum ProvisionError {
    /// The identity service rejected the credentials.
    #[error(
        "Could not authenticate with the credentials provided (HTTP {status}). \
         Please check the values and try again"
    )]
    Authentication {
        /// Status returned by the identity service
        status: http::StatusCode,
    },

    /// A group or webhook creation call returned a status of 400 or above.
    #[error("The {action} request failed (HTTP {status}):\n{content}")]
    RequestFailed {
        /// What was being attempted, e.g. "group creation"
        action: &'static str,
        /// Status returned by the API
        status: http::StatusCode,
        /// Decoded (possibly degraded) response body
        content: ResponseContent,
    },

    /// A successful authentication response lacked a required field.
    #[error("Authentication response is missing '{field}'")]
    MissingField {
        /// JSON pointer of the missing field
        field: &'static str,
    },

    /// A successful response did not have the expected shape.
    #[error("Unexpected {context} response: {reason}")]
    MalformedResponse {
        /// Which response was being read
        context: &'static str,
        /// What was wrong with it
        reason: String,
    },

    /// An endpoint URL could not be built.
    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    /// The token cannot be sent as a header value.
    #[error("Invalid auth token: {0}")]
    InvalidToken(String),

    /// The request could not be encoded or sent.
    #[error(transparent)]
    Execute(#[from] ExecuteError),

    /// Writing progress output failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl ProvisionError {
    /// Creates a `MalformedResponse` error.
    #[must_use]
    pub fn malformed(context: &'static str, reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            context,
            reason: reason.into(),
        }
    }

    /// Returns true if the failure came from the identity service.
    #[must_use]
    pub const fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication { .. } | Self::MissingField { .. })
    }
}
