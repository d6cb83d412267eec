//! Authentication against the cloud identity service.
//!
//! One POST exchanges a username and API key for a token and the
//! account (tenant) number that prefixes every autoscale URL.

use std::fmt;

use http::header::HeaderValue;
use serde::Serialize;
use serde_json::Value;

use crate::provision::ProvisionError;
use crate::transport::{ApiClient, HttpClient, json_headers};

#[cfg(test)]
#[path = "identity_tests.rs"]
mod tests;

/// Header carrying the token on autoscale requests.
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// Account credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub api_key: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// An authenticated session.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    pub account_number: String,
    pub token: String,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("account_number", &self.account_number)
            .field("token", &"<redacted>")
            .finish()
    }
}

impl Session {
    /// Headers for an authenticated JSON request.
    ///
    /// # Errors
    ///
    /// Returns [`ProvisionError::InvalidToken`] if the token contains
    /// bytes that cannot appear in a header.
    pub fn headers(&self) -> Result<http::HeaderMap, ProvisionError> {
        let mut token = HeaderValue::from_str(&self.token)
            .map_err(|e| ProvisionError::InvalidToken(e.to_string()))?;
        token.set_sensitive(true);

        let mut headers = json_headers();
        headers.insert(AUTH_TOKEN_HEADER, token);
        Ok(headers)
    }
}

#[derive(Serialize)]
struct AuthRequest<'a> {
    auth: AuthBody<'a>,
}

#[derive(Serialize)]
struct AuthBody<'a> {
    #[serde(rename = "RAX-KSKEY:apiKeyCredentials")]
    api_key_credentials: ApiKeyCredentials<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiKeyCredentials<'a> {
    api_key: &'a str,
    username: &'a str,
}

impl<'a> From<&'a Credentials> for AuthRequest<'a> {
    fn from(credentials: &'a Credentials) -> Self {
        Self {
            auth: AuthBody {
                api_key_credentials: ApiKeyCredentials {
                    api_key: &credentials.api_key,
                    username: &credentials.username,
                },
            },
        }
    }
}

/// Exchanges credentials for a [`Session`].
///
/// # Errors
///
/// - [`ProvisionError::Authentication`] when the identity service answers
///   with a status of 400 or above
/// - [`ProvisionError::MissingField`] when `access.token.id` or
///   `access.token.tenant.id` is absent from a successful response
/// - [`ProvisionError::Execute`] on transport failure
pub async fn authenticate<H: HttpClient>(
    api: &ApiClient<H>,
    identity_url: &url::Url,
    credentials: &Credentials,
) -> Result<Session, ProvisionError> {
    tracing::debug!("Authenticating as {}", credentials.username);

    let response = api
        .execute(
            http::Method::POST,
            identity_url.clone(),
            Some(&AuthRequest::from(credentials)),
            json_headers(),
        )
        .await?;

    if !response.is_ok() {
        return Err(ProvisionError::Authentication {
            status: response.status,
        });
    }

    let content = response.content.as_json();
    let token = string_at(content, "/access/token/id")?;
    let account_number = string_at(content, "/access/token/tenant/id")?;

    tracing::debug!("Authenticated against account {account_number}");
    Ok(Session {
        account_number,
        token,
    })
}

fn string_at(content: Option<&Value>, pointer: &'static str) -> Result<String, ProvisionError> {
    match content.and_then(|value| value.pointer(pointer)) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        _ => Err(ProvisionError::MissingField { field: pointer }),
    }
}
