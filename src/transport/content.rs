//! Decoding of API response bodies.
//!
//! Successful responses are JSON. Error responses from the gateways in
//! front of the API are sometimes HTML pages; for those the body is
//! reduced to a best-effort diagnostic string. The reduction is lossy
//! and only meant to be shown to a human, never parsed further.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

static HTML_BODY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<body>(.+?)</body>").expect("static regex is valid"));

static HTML_NOISE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n|\r|\s\s+?|<br />|<h1>").expect("static regex is valid"));

static HEADING_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</h1>").expect("static regex is valid"));

/// The decoded content of a response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseContent {
    /// The body was valid JSON.
    Json(Value),
    /// The body was not JSON; this is a diagnostic summary of it.
    Degraded(String),
}

impl ResponseContent {
    /// Decodes a response body.
    ///
    /// Tries JSON first. Otherwise extracts the text of an HTML `<body>`
    /// element with whitespace, line breaks and heading tags stripped.
    /// If there is no body element the content is a fixed message that
    /// carries the status code.
    #[must_use]
    pub fn decode(body: &[u8], status: http::StatusCode) -> Self {
        if let Ok(value) = serde_json::from_slice::<Value>(body) {
            return Self::Json(value);
        }

        let text = String::from_utf8_lossy(body);
        let summary = summarize_html(&text).unwrap_or_else(|| {
            format!("No content received. Status Code: {}", status.as_u16())
        });

        Self::Degraded(summary)
    }

    /// Returns the JSON value, if the body was JSON.
    #[must_use]
    pub const fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Degraded(_) => None,
        }
    }
}

impl fmt::Display for ResponseContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(value) => write!(f, "{value}"),
            Self::Degraded(text) => f.write_str(text),
        }
    }
}

/// Reduces the first `<body>` element of an HTML page to a single line.
fn summarize_html(text: &str) -> Option<String> {
    let inner = HTML_BODY.captures(text)?.get(1)?.as_str();
    let stripped = HTML_NOISE.replace_all(inner, "");
    Some(HEADING_CLOSE.replace_all(&stripped, "<br />").into_owned())
}
