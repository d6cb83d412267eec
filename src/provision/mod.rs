//! The provisioning sequence.
//!
//! One run walks a fixed sequence with no way back:
//!
//! 1. Authenticate
//! 2. Build the group payload
//! 3. On a dry run, print the group request and one representative
//!    webhook request, then stop
//! 4. Create the group
//! 5. Create one webhook per returned policy, in order
//! 6. Print the webhook URLs
//!
//! Any failure ends the run with a [`ProvisionError`]. Resources created
//! before the failure are not rolled back.

mod error;
mod report;


use std::io::Write;

use url::Url;

use crate::autoscale::{
    CreatedGroup, CreatedWebhook, Endpoints, GroupOptions, GroupRequest, build_group_request,
    build_webhook_request,
};
use crate::identity::{self, Credentials, Session};
use crate::transport::{ApiClient, ApiResponse, HttpClient, ResponseContent};

pub use error::ProvisionError;
pub use report::{EXECUTE_DOC_URL, Report, to_pretty_json};

/// Group id shown in the dry-run webhook URL.
pub const DRY_RUN_GROUP_ID: &str = "[GROUP-ID]";

/// Policy id shown in the dry-run webhook URL.
pub const DRY_RUN_POLICY_ID: &str = "[POLICY-ID]";

/// Everything one run needs, already validated.
#[derive(Debug, Clone)]
pub struct Plan {
    pub credentials: Credentials,
    /// Data center region, e.g. `DFW`
    pub region: String,
    pub group: GroupOptions,
    /// Name given to every created webhook
    pub webhook_name: String,
    /// Print the requests instead of sending them
    pub dry_run: bool,
    /// Dump every payload and response
    pub verbose: bool,
}

/// A created policy together with its callable webhook URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionedWebhook {
    pub policy_id: String,
    pub policy_name: String,
    pub webhook_url: String,
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The group and its webhooks exist.
    Provisioned {
        group_id: String,
        /// One entry per policy, in creation order
        webhooks: Vec<ProvisionedWebhook>,
    },
    /// Nothing was created.
    DryRun,
}

/// Drives a provisioning run against the API.
#[derive(Debug)]
pub struct Provisioner<H> {
    api: ApiClient<H>,
    endpoints: Endpoints,
}

impl<H: HttpClient> Provisioner<H> {
    /// Creates a provisioner using `client` for every request.
    #[must_use]
    pub const fn new(client: H, endpoints: Endpoints) -> Self {
        Self {
            api: ApiClient::new(client),
            endpoints,
        }
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn client(&self) -> &H {
        self.api.inner()
    }

    /// Runs the full sequence, writing progress to `out`.
    ///
    /// # Errors
    ///
    /// Returns the first [`ProvisionError`] encountered; see the module
    /// documentation for the sequence.
    pub async fn run<W: Write>(
        &self,
        plan: &Plan,
        out: &mut W,
    ) -> Result<Outcome, ProvisionError> {
        let mut report = Report::new(out, plan.verbose);
        report.starting(plan.dry_run)?;

        let session =
            identity::authenticate(&self.api, &self.endpoints.identity, &plan.credentials).await?;

        let group_request = build_group_request(&plan.group);
        let groups_url = self.endpoints.groups(&plan.region, &session.account_number)?;

        if plan.dry_run {
            self.preview(plan, &session, &groups_url, &group_request, &mut report)?;
            tracing::info!("Dry run complete, nothing was created");
            return Ok(Outcome::DryRun);
        }

        let headers = session.headers()?;
        let group = self
            .create_group(groups_url, &group_request, &headers, &mut report)
            .await?;
        tracing::info!(
            "Created group {} with {} policies",
            group.id,
            group.scaling_policies.len()
        );

        let mut webhooks = Vec::with_capacity(group.scaling_policies.len());
        for policy in &group.scaling_policies {
            let url = self.endpoints.webhooks(
                &plan.region,
                &session.account_number,
                &group.id,
                &policy.id,
            )?;
            let webhook_url = self
                .create_webhook(url, &plan.webhook_name, &headers, &mut report)
                .await?;

            webhooks.push(ProvisionedWebhook {
                policy_id: policy.id.clone(),
                policy_name: policy.name.clone(),
                webhook_url,
            });
        }

        report.webhook_urls(&webhooks)?;

        Ok(Outcome::Provisioned {
            group_id: group.id,
            webhooks,
        })
    }

    /// Prints the group request and one webhook request.
    ///
    /// Every policy gets an identical webhook body, so a single request
    /// with placeholder ids stands for all of them.
    fn preview<W: Write>(
        &self,
        plan: &Plan,
        session: &Session,
        groups_url: &Url,
        group_request: &GroupRequest,
        report: &mut Report<'_, W>,
    ) -> Result<(), ProvisionError> {
        report.group_preview(groups_url, group_request)?;

        let webhooks_url = self.endpoints.webhooks(
            &plan.region,
            &session.account_number,
            DRY_RUN_GROUP_ID,
            DRY_RUN_POLICY_ID,
        )?;
        report.webhook_preview(&webhooks_url, &build_webhook_request(&plan.webhook_name))?;
        report.planned_policies(
            group_request
                .scaling_policies
                .iter()
                .map(|policy| policy.name.as_str()),
        )?;

        Ok(())
    }

    async fn create_group<W: Write>(
        &self,
        url: Url,
        request: &GroupRequest,
        headers: &http::HeaderMap,
        report: &mut Report<'_, W>,
    ) -> Result<CreatedGroup, ProvisionError> {
        report.sending("group", &url, request)?;

        let response = self
            .api
            .execute(http::Method::POST, url, Some(request), headers.clone())
            .await?;
        let content = successful_json(response, "group creation")?;
        report.group_created(&content)?;

        CreatedGroup::from_response(&content)
            .map_err(|e| ProvisionError::malformed("group creation", e.to_string()))
    }

    async fn create_webhook<W: Write>(
        &self,
        url: Url,
        name: &str,
        headers: &http::HeaderMap,
        report: &mut Report<'_, W>,
    ) -> Result<String, ProvisionError> {
        let body = build_webhook_request(name);
        report.sending("webhook", &url, &body)?;

        let response = self
            .api
            .execute(http::Method::POST, url, Some(&body), headers.clone())
            .await?;
        let content = successful_json(response, "webhook creation")?;
        report.webhook_created(&content)?;

        let webhooks = CreatedWebhook::list_from_response(&content)
            .map_err(|e| ProvisionError::malformed("webhook creation", e.to_string()))?;

        webhooks
            .first()
            .and_then(CreatedWebhook::capability_url)
            .map(ToString::to_string)
            .ok_or_else(|| ProvisionError::malformed("webhook creation", "no capability link"))
    }
}

/// Fails on a status of 400 or above, then requires a JSON body.
fn successful_json(
    response: ApiResponse,
    action: &'static str,
) -> Result<serde_json::Value, ProvisionError> {
    if !response.is_ok() {
        return Err(ProvisionError::RequestFailed {
            action,
            status: response.status,
            content: response.content,
        });
    }

    match response.content {
        ResponseContent::Json(value) => Ok(value),
        ResponseContent::Degraded(text) => Err(ProvisionError::malformed(
            action,
            format!("body is not JSON: {text}"),
        )),
    }
}
