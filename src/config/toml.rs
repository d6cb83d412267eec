//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Account and region
    #[serde(default)]
    pub account: AccountSection,

    /// Group configuration
    #[serde(default)]
    pub group: GroupSection,

    /// Launch configuration (server template)
    #[serde(default)]
    pub launch: LaunchSection,

    /// Scaling policy configuration
    #[serde(default)]
    pub policy: PolicySection,

    /// Webhook configuration
    #[serde(default)]
    pub webhook: WebhookSection,

    /// API endpoint overrides
    #[serde(default)]
    pub endpoints: EndpointsSection,
}

/// Account configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccountSection {
    /// Cloud account user name
    pub username: Option<String>,

    /// API key
    pub api_key: Option<String>,

    /// Data center region
    pub region: Option<String>,
}

/// Group configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupSection {
    /// Group name
    pub name: Option<String>,

    /// Group cooldown in seconds
    pub cooldown: Option<u32>,

    /// Minimum number of servers
    pub min: Option<u32>,

    /// Maximum number of servers
    pub max: Option<u32>,
}

/// Launch configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LaunchSection {
    /// Flavor ID
    pub flavor: Option<String>,

    /// Image UUID
    pub image: Option<String>,

    /// Server name prefix
    pub server_name: Option<String>,

    /// Server metadata
    pub metadata: Option<BTreeMap<String, String>>,

    /// Extra network UUIDs
    #[serde(default)]
    pub networks: Vec<String>,

    /// Do not attach PublicNet
    #[serde(default)]
    pub no_public: bool,

    /// Do not attach ServiceNet
    #[serde(default)]
    pub no_service: bool,
}

/// Scaling policy configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicySection {
    /// Policy name
    pub name: Option<String>,

    /// Policy cooldown in seconds
    pub cooldown: Option<u32>,

    /// Servers added (or removed, if negative) per execution
    pub change: Option<i32>,
}

/// Webhook configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebhookSection {
    /// Webhook name
    pub name: Option<String>,
}

/// Endpoint override section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EndpointsSection {
    /// Identity token endpoint
    pub identity: Option<String>,

    /// Autoscale base URL, `{region}` is substituted
    pub autoscale: Option<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# Ascend Configuration File
# Every value can also be given on the command line; CLI values win.

[account]
# Cloud account user name (required)
# username = "jdoe"

# API key (required)
# api_key = "0123456789abcdef"

# Data center region to create the group in (required)
# region = "DFW"

[group]
# Group name (required)
# name = "web"

# Seconds to wait between scaling actions (default: 60)
# cooldown = 60

# Minimum number of servers (default: 0)
# min = 0

# Maximum number of servers (default: 10)
# max = 10

[launch]
# Flavor ID for every server (required)
# flavor = "performance1-1"

# Image UUID for every server (required)
# image = "00000000-0000-0000-0000-000000000000"

# Prefix for generated server names
# server_name = "web"

# Additional network UUIDs
# Note: --networks on the CLI REPLACES this list (not merged)
# networks = []

# Skip PublicNet / ServiceNet
# no_public = false
# no_service = false

# Server metadata
# Note: --meta on the CLI REPLACES this table (not merged)
# [launch.metadata]
# role = "web"

[policy]
# Policy name (default: "Default Policy")
# A positive change also creates "<name> Remove" with the opposite change
# name = "Default Policy"

# Seconds to wait between executions (default: 60)
# cooldown = 60

# Servers to add, or remove if negative (default: 1)
# change = 1

[webhook]
# Webhook name (default: "Default Webhook")
# name = "Default Webhook"

[endpoints]
# Identity token endpoint
# identity = "https://identity.api.rackspacecloud.com/v2.0/tokens"

# Autoscale base URL, {region} is replaced by the lowercased region
# autoscale = "https://{region}.autoscale.api.rackspacecloud.com/v1.0"
"#
    .to_string()
}
