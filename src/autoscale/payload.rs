//! Request bodies for group and webhook creation.
//!
//! Builders here are pure: the same [`GroupOptions`] always produce the
//! same [`GroupRequest`]. Field order in the serialized JSON follows the
//! struct declarations.

use std::collections::BTreeMap;

use serde::Serialize;

/// Network UUID of the public internet network.
pub const PUBLIC_NET: &str = "00000000-0000-0000-0000-000000000000";

/// Network UUID of the provider's internal service network.
pub const SERVICE_NET: &str = "11111111-1111-1111-1111-111111111111";

/// Suffix appended to the mirrored scale-down policy name.
pub const REMOVE_SUFFIX: &str = " Remove";

/// Everything needed to describe a group, its launch template and policies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupOptions {
    /// Group name
    pub name: String,
    /// Seconds between group-level scaling actions
    pub cooldown: u32,
    /// Lower bound on the number of servers
    pub min_entities: u32,
    /// Upper bound on the number of servers
    pub max_entities: u32,
    /// Flavor every server is built with
    pub flavor: String,
    /// Image every server is built from
    pub image: String,
    /// Prefix for generated server names
    pub server_name: Option<String>,
    /// Server metadata; `None` leaves the field out of the payload
    pub metadata: Option<BTreeMap<String, String>>,
    /// Skip the public network
    pub no_public: bool,
    /// Skip the service network
    pub no_service: bool,
    /// Extra network UUIDs, attached after the defaults
    pub networks: Vec<String>,
    /// Name of the primary scaling policy
    pub policy_name: String,
    /// Seconds between executions of a policy
    pub policy_cooldown: u32,
    /// Servers added (or removed, if negative) by the primary policy
    pub policy_change: i32,
}

/// Body of `POST /groups`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupRequest {
    pub group_configuration: GroupConfiguration,
    pub launch_configuration: LaunchConfiguration,
    pub scaling_policies: Vec<PolicySpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupConfiguration {
    pub cooldown: u32,
    pub min_entities: u32,
    pub max_entities: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchConfiguration {
    pub args: LaunchArgs,
    #[serde(rename = "type")]
    pub kind: LaunchKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LaunchKind {
    LaunchServer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchArgs {
    pub server: ServerTemplate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerTemplate {
    pub flavor_ref: String,
    pub image_ref: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, String>>,
    pub networks: Vec<Network>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Network {
    pub uuid: String,
}

/// A scaling policy executed through a webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolicySpec {
    pub cooldown: u32,
    pub change: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PolicyKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    Webhook,
}

/// One entry of the `POST .../webhooks` body (the body is a list).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookSpec {
    pub name: String,
}

/// Builds the group creation payload.
#[must_use]
pub fn build_group_request(options: &GroupOptions) -> GroupRequest {
    GroupRequest {
        group_configuration: GroupConfiguration {
            cooldown: options.cooldown,
            min_entities: options.min_entities,
            max_entities: options.max_entities,
            name: options.name.clone(),
        },
        launch_configuration: LaunchConfiguration {
            args: LaunchArgs {
                server: ServerTemplate {
                    flavor_ref: options.flavor.clone(),
                    image_ref: options.image.clone(),
                    name: options.server_name.clone(),
                    metadata: options.metadata.clone(),
                    networks: build_networks(
                        options.no_public,
                        options.no_service,
                        &options.networks,
                    ),
                },
            },
            kind: LaunchKind::LaunchServer,
        },
        scaling_policies: build_policies(
            &options.policy_name,
            options.policy_cooldown,
            options.policy_change,
        ),
    }
}

/// Builds the policy list.
///
/// A positive change gets a mirrored policy that undoes it, named
/// `"<name> Remove"`. Zero or negative changes produce a single policy.
#[must_use]
pub fn build_policies(name: &str, cooldown: u32, change: i32) -> Vec<PolicySpec> {
    let mut policies = vec![PolicySpec {
        cooldown,
        change,
        name: name.to_string(),
        kind: PolicyKind::Webhook,
    }];

    if change > 0 {
        policies.push(PolicySpec {
            cooldown,
            change: -change,
            name: format!("{name}{REMOVE_SUFFIX}"),
            kind: PolicyKind::Webhook,
        });
    }

    policies
}

/// Builds the network list: public, then service, then `extra` in order.
#[must_use]
pub fn build_networks(no_public: bool, no_service: bool, extra: &[String]) -> Vec<Network> {
    let defaults = [(no_public, PUBLIC_NET), (no_service, SERVICE_NET)]
        .into_iter()
        .filter(|(skip, _)| !skip)
        .map(|(_, uuid)| uuid.to_string());

    defaults
        .chain(extra.iter().cloned())
        .map(|uuid| Network { uuid })
        .collect()
}

/// Parses `key=value` tokens into a metadata map.
///
/// Splits at the first `=`, so values may contain `=`. Tokens without
/// `=` or with an empty key are skipped with a warning. A repeated key
/// keeps the last value.
#[must_use]
pub fn parse_metadata<S: AsRef<str>>(tokens: &[S]) -> BTreeMap<String, String> {
    let mut metadata = BTreeMap::new();

    for token in tokens {
        let token = token.as_ref();
        match token.split_once('=') {
            Some((key, value)) if !key.is_empty() => {
                metadata.insert(key.to_string(), value.to_string());
            }
            _ => {
                tracing::warn!(
                    "Metadata not added as it was not formatted correctly \
                     (use Meta-Key=Meta-Value): {token}"
                );
            }
        }
    }

    metadata
}

/// Builds the webhook creation payload.
#[must_use]
pub fn build_webhook_request(name: &str) -> Vec<WebhookSpec> {
    vec![WebhookSpec {
        name: name.to_string(),
    }]
}
