//! Typed views over autoscale API responses.

use serde::Deserialize;
use serde_json::Value;

/// Link relation naming a webhook's anonymous execution URL.
pub const CAPABILITY_REL: &str = "capability";

/// A group as returned by `POST /groups`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedGroup {
    pub id: String,
    /// Created policies, in creation order.
    #[serde(default)]
    pub scaling_policies: Vec<CreatedPolicy>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedPolicy {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct GroupEnvelope {
    group: CreatedGroup,
}

impl CreatedGroup {
    /// Extracts the group from a creation response body.
    ///
    /// # Errors
    ///
    /// Returns the deserialization error if `group.id` or any policy's
    /// `id`/`name` is missing or mistyped.
    pub fn from_response(content: &Value) -> Result<Self, serde_json::Error> {
        GroupEnvelope::deserialize(content).map(|envelope| envelope.group)
    }
}

/// A webhook as returned by `POST .../webhooks`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedWebhook {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Link {
    pub rel: String,
    pub href: String,
}

#[derive(Debug, Deserialize)]
struct WebhookEnvelope {
    webhooks: Vec<CreatedWebhook>,
}

impl CreatedWebhook {
    /// Extracts the created webhooks from a creation response body.
    ///
    /// # Errors
    ///
    /// Returns the deserialization error if the `webhooks` list is
    /// missing or malformed.
    pub fn list_from_response(content: &Value) -> Result<Vec<Self>, serde_json::Error> {
        WebhookEnvelope::deserialize(content).map(|envelope| envelope.webhooks)
    }

    /// Returns the href of the capability link, if any.
    #[must_use]
    pub fn capability_url(&self) -> Option<&str> {
        self.links
            .iter()
            .find(|link| link.rel == CAPABILITY_REL)
            .map(|link| link.href.as_str())
    }
}
