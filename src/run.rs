//! Application execution logic.
//!
//! This module turns the validated configuration into a provisioning
//! plan and runs it against the live API.

use ascend::config::ValidatedConfig;
use ascend::provision::{Outcome, Plan, ProvisionError, Provisioner};
use ascend::transport::ReqwestClient;

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Builds a [`Plan`] from validated config.
///
/// Endpoints stay behind in the config; they belong to the provisioner,
/// not the plan.
fn plan_from(config: &ValidatedConfig) -> Plan {
    Plan {
        credentials: config.credentials.clone(),
        region: config.region.clone(),
        group: config.group.clone(),
        webhook_name: config.webhook_name.clone(),
        dry_run: config.dry_run,
        verbose: config.verbose,
    }
}

/// Executes one provisioning run.
///
/// The report is written to stdout; logs go to stderr.
///
/// # Errors
///
/// Returns the [`ProvisionError`] that ended the run.
pub async fn execute(config: &ValidatedConfig) -> Result<Outcome, ProvisionError> {
    let plan = plan_from(config);
    let provisioner = Provisioner::new(ReqwestClient::new(), config.endpoints.clone());

    if plan.dry_run {
        tracing::info!("Dry run: no group or webhook will be created");
    }

    let mut out = std::io::stdout().lock();
    provisioner.run(&plan, &mut out).await
}
