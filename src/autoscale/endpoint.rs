//! Endpoint URLs for the identity and autoscale APIs.

use url::Url;

/// Default identity (token) endpoint.
pub const IDENTITY_URL: &str = "https://identity.api.rackspacecloud.com/v2.0/tokens";

/// Default autoscale base URL; `{region}` is replaced by the lowercased region.
pub const AUTOSCALE_URL_TEMPLATE: &str = "https://{region}.autoscale.api.rackspacecloud.com/v1.0";

/// Placeholder substituted with the region in an autoscale URL template.
pub const REGION_PLACEHOLDER: &str = "{region}";

/// The API endpoints a provisioning run talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Token endpoint receiving the credential POST.
    pub identity: Url,
    /// Autoscale base URL template, without the account segment.
    pub autoscale: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            identity: Url::parse(IDENTITY_URL).expect("default identity URL is valid"),
            autoscale: AUTOSCALE_URL_TEMPLATE.to_string(),
        }
    }
}

impl Endpoints {
    /// URL for creating groups: `<base>/<account>/groups`.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting URL does not parse.
    pub fn groups(&self, region: &str, account: &str) -> Result<Url, url::ParseError> {
        self.autoscale_url(region, account, "/groups")
    }

    /// URL for creating webhooks on one policy of a group.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting URL does not parse.
    pub fn webhooks(
        &self,
        region: &str,
        account: &str,
        group_id: &str,
        policy_id: &str,
    ) -> Result<Url, url::ParseError> {
        self.autoscale_url(
            region,
            account,
            &format!("/groups/{group_id}/policies/{policy_id}/webhooks"),
        )
    }

    fn autoscale_url(
        &self,
        region: &str,
        account: &str,
        uri: &str,
    ) -> Result<Url, url::ParseError> {
        let base = self
            .autoscale
            .replace(REGION_PLACEHOLDER, &region.to_lowercase());
        Url::parse(&format!("{}/{account}{uri}", base.trim_end_matches('/')))
    }
}
