//! Transport layer for talking to the identity and autoscale APIs.
//!
//! This module provides:
//! - HTTP request/response values ([`HttpRequest`], [`HttpResponse`])
//! - The HTTP client abstraction ([`HttpClient`]) and its reqwest
//!   implementation ([`ReqwestClient`])
//! - The JSON request executor ([`ApiClient`]) returning decoded
//!   [`ApiResponse`]s
//! - Response body decoding with an HTML fallback ([`ResponseContent`])

mod api;
mod client;
mod content;
mod error;
mod http;

#[cfg(test)]
mod content_tests;
#[cfg(test)]
pub(crate) mod test_fixtures;

pub use api::{ApiClient, ApiResponse, ExecuteError, json_headers};
pub use client::ReqwestClient;
pub use content::ResponseContent;
pub use error::HttpError;
pub use self::http::{HttpClient, HttpRequest, HttpResponse};
