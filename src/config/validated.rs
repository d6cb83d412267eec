//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::{Path, PathBuf};

use url::Url;

use crate::autoscale::endpoint::{AUTOSCALE_URL_TEMPLATE, IDENTITY_URL, REGION_PLACEHOLDER};
use crate::autoscale::{Endpoints, GroupOptions, parse_metadata};
use crate::identity::Credentials;

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
/// The function validates all inputs and returns errors for invalid configurations.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Account credentials (required)
    pub credentials: Credentials,

    /// Data center region (required)
    pub region: String,

    /// Group, launch and policy options
    pub group: GroupOptions,

    /// Name given to every webhook
    pub webhook_name: String,

    /// API endpoints
    pub endpoints: Endpoints,

    /// Dry-run mode (print requests without creating anything)
    pub dry_run: bool,

    /// Verbose output and logging
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ user: {}, region: {}, group: {}, size: {}..={}, flavor: {}, image: {}, \
             networks: {}, policy: {} ({:+}), webhook: {}, dry_run: {} }}",
            self.credentials.username,
            self.region,
            self.group.name,
            self.group.min_entities,
            self.group.max_entities,
            self.group.flavor,
            self.group.image,
            self.group.networks.len(),
            self.group.policy_name,
            self.group.policy_change,
            self.webhook_name,
            self.dry_run,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required fields are missing or blank (`username`, `api_key`,
    ///   `region`, `name`, `flavor`, `image`)
    /// - The group minimum exceeds the maximum
    /// - An endpoint override is not a valid URL
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let credentials = Self::resolve_credentials(cli, toml)?;

        let region = required(
            cli.region.as_deref(),
            toml.and_then(|t| t.account.region.as_deref()),
            field::REGION,
            "Use --region or set account.region in config file",
        )?;

        let group = Self::resolve_group(cli, toml)?;

        let webhook_name = cli
            .webhook_name
            .clone()
            .or_else(|| toml.and_then(|t| t.webhook.name.clone()))
            .unwrap_or_else(|| defaults::WEBHOOK_NAME.to_string());

        let endpoints = Self::resolve_endpoints(toml)?;

        Ok(Self {
            credentials,
            region,
            group,
            webhook_name,
            endpoints,
            dry_run: cli.dry_run,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path (a
    /// leading `~` is expanded). Otherwise the file under the platform
    /// config directory is used when it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let path = cli
            .config
            .as_deref()
            .map(expand_tilde)
            .or_else(default_config_path);

        let toml = match path {
            Some(path) => {
                tracing::debug!("Loading config file {}", path.display());
                Some(TomlConfig::load(&path)?)
            }
            None => None,
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_credentials(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<Credentials, ConfigError> {
        let account = toml.map(|t| &t.account);

        let username = required(
            cli.username.as_deref(),
            account.and_then(|a| a.username.as_deref()),
            field::USERNAME,
            "Use --username or set account.username in config file",
        )?;

        let api_key = required(
            cli.api_key.as_deref(),
            account.and_then(|a| a.api_key.as_deref()),
            field::API_KEY,
            "Use --api-key or set account.api_key in config file",
        )?;

        Ok(Credentials { username, api_key })
    }

    fn resolve_group(cli: &Cli, toml: Option<&TomlConfig>) -> Result<GroupOptions, ConfigError> {
        let group = toml.map(|t| &t.group);
        let launch = toml.map(|t| &t.launch);
        let policy = toml.map(|t| &t.policy);

        let name = required(
            cli.group_name.as_deref(),
            group.and_then(|g| g.name.as_deref()),
            field::GROUP_NAME,
            "Use --name or set group.name in config file",
        )?;

        let flavor = required(
            cli.flavor.as_deref(),
            launch.and_then(|l| l.flavor.as_deref()),
            field::FLAVOR,
            "Use --flavor or set launch.flavor in config file",
        )?;

        let image = required(
            cli.image.as_deref(),
            launch.and_then(|l| l.image.as_deref()),
            field::IMAGE,
            "Use --image or set launch.image in config file",
        )?;

        // Priority: CLI explicit > TOML > default
        let min_entities = cli
            .group_min
            .or_else(|| group.and_then(|g| g.min))
            .unwrap_or(defaults::GROUP_MIN_ENTITIES);

        let max_entities = cli
            .group_max
            .or_else(|| group.and_then(|g| g.max))
            .unwrap_or(defaults::GROUP_MAX_ENTITIES);

        if min_entities > max_entities {
            return Err(ConfigError::InvalidGroupBounds {
                min: min_entities,
                max: max_entities,
            });
        }

        // CLI lists replace TOML lists entirely
        let metadata = if cli.meta.is_empty() {
            launch.and_then(|l| l.metadata.clone())
        } else {
            Some(parse_metadata(cli.meta.as_slice()))
        };

        let networks = if cli.networks.is_empty() {
            launch.map(|l| l.networks.clone()).unwrap_or_default()
        } else {
            cli.networks.clone()
        };

        Ok(GroupOptions {
            name,
            cooldown: cli
                .group_cooldown
                .or_else(|| group.and_then(|g| g.cooldown))
                .unwrap_or(defaults::GROUP_COOLDOWN_SECS),
            min_entities,
            max_entities,
            flavor,
            image,
            server_name: cli
                .server_name
                .clone()
                .or_else(|| launch.and_then(|l| l.server_name.clone())),
            metadata,
            no_public: cli.no_public || launch.is_some_and(|l| l.no_public),
            no_service: cli.no_service || launch.is_some_and(|l| l.no_service),
            networks,
            policy_name: cli
                .policy_name
                .clone()
                .or_else(|| policy.and_then(|p| p.name.clone()))
                .unwrap_or_else(|| defaults::POLICY_NAME.to_string()),
            policy_cooldown: cli
                .policy_cooldown
                .or_else(|| policy.and_then(|p| p.cooldown))
                .unwrap_or(defaults::POLICY_COOLDOWN_SECS),
            policy_change: cli
                .policy_change
                .or_else(|| policy.and_then(|p| p.change))
                .unwrap_or(defaults::POLICY_CHANGE),
        })
    }

    fn resolve_endpoints(toml: Option<&TomlConfig>) -> Result<Endpoints, ConfigError> {
        let section = toml.map(|t| &t.endpoints);

        let identity_str = section
            .and_then(|s| s.identity.as_deref())
            .unwrap_or(IDENTITY_URL);
        let identity = Url::parse(identity_str).map_err(|e| ConfigError::InvalidUrl {
            url: identity_str.to_string(),
            reason: e.to_string(),
        })?;

        let autoscale = section
            .and_then(|s| s.autoscale.as_deref())
            .unwrap_or(AUTOSCALE_URL_TEMPLATE);
        Url::parse(&autoscale.replace(REGION_PLACEHOLDER, "region")).map_err(|e| {
            ConfigError::InvalidUrl {
                url: autoscale.to_string(),
                reason: e.to_string(),
            }
        })?;

        Ok(Endpoints {
            identity,
            autoscale: autoscale.to_string(),
        })
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

/// Picks the CLI value, then the TOML value; blank values are rejected.
fn required(
    cli: Option<&str>,
    toml: Option<&str>,
    field: &'static str,
    hint: &'static str,
) -> Result<String, ConfigError> {
    let value = cli
        .or(toml)
        .ok_or_else(|| ConfigError::missing(field, hint))?;

    if value.trim().is_empty() {
        return Err(ConfigError::EmptyValue { field });
    }

    Ok(value.to_string())
}

/// Expands a leading `~` to the home directory.
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };

    dirs::home_dir().map_or_else(|| path.to_path_buf(), |home| home.join(rest))
}

/// The default config file, if it exists.
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(defaults::CONFIG_FILE))
        .filter(|path| path.is_file())
}
