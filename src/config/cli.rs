//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Ascend: Auto Scale group, policy, webhook and launch configuration setup
///
/// Creates an autoscale group with a scale-up policy (and its mirrored
/// scale-down policy), attaches a webhook to every policy and prints the
/// webhook URLs.
#[derive(Debug, Parser)]
#[command(name = "ascend")]
#[command(version, about, long_about = None)]
#[command(subcommand_precedence_over_arg = true)]
#[allow(clippy::struct_excessive_bools)] // CLI flags are naturally boolean
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Cloud account user name
    #[arg(short, long, value_name = "USERNAME")]
    pub username: Option<String>,

    /// Cloud user's API key
    #[arg(short = 'k', long = "api-key", value_name = "API_KEY")]
    pub api_key: Option<String>,

    /// Data center region to create the autoscale group in
    #[arg(short, long, value_name = "REGION")]
    pub region: Option<String>,

    /// Name for the autoscale group being created
    #[arg(short = 'n', long = "name", value_name = "GROUP_NAME")]
    pub group_name: Option<String>,

    /// Flavor ID used for all servers created in the group
    #[arg(long = "flavor", value_name = "FLAVOR_ID")]
    pub flavor: Option<String>,

    /// Image UUID used to create every server in the group
    #[arg(long = "image", value_name = "IMAGE_UUID")]
    pub image: Option<String>,

    /// Prefix for the automatically generated server names
    #[arg(long = "server-name", value_name = "SERVER_NAME")]
    pub server_name: Option<String>,

    /// Metadata key/value pairs set on each created server
    #[arg(long = "meta", value_name = "KEY=VALUE", num_args = 1..)]
    pub meta: Vec<String>,

    /// Do not connect new servers to PublicNet
    #[arg(long = "no-public")]
    pub no_public: bool,

    /// Do not connect new servers to ServiceNet
    #[arg(long = "no-service")]
    pub no_service: bool,

    /// Additional network UUIDs to connect new servers to
    #[arg(long = "networks", value_name = "NETWORK_UUID", num_args = 1..)]
    pub networks: Vec<String>,

    /// Group cooldown in seconds [default: 60]
    #[arg(long = "group-cooldown", value_name = "SECONDS")]
    pub group_cooldown: Option<u32>,

    /// Minimum number of servers in the group [default: 0]
    #[arg(long = "group-min", value_name = "MIN_SERVERS")]
    pub group_min: Option<u32>,

    /// Maximum number of servers in the group [default: 10]
    #[arg(long = "group-max", value_name = "MAX_SERVERS")]
    pub group_max: Option<u32>,

    /// Policy cooldown in seconds [default: 60]
    #[arg(long = "policy-cooldown", value_name = "SECONDS")]
    pub policy_cooldown: Option<u32>,

    /// Servers to add (positive) or remove (negative) when the policy runs [default: 1]
    #[arg(long = "policy-change", value_name = "CHANGE", allow_negative_numbers = true)]
    pub policy_change: Option<i32>,

    /// Name of the policy to create [default: "Default Policy"]
    #[arg(long = "policy-name", value_name = "POLICY_NAME")]
    pub policy_name: Option<String>,

    /// Name of the webhooks to create [default: "Default Webhook"]
    #[arg(long = "webhook-name", value_name = "WEBHOOK_NAME")]
    pub webhook_name: Option<String>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Display URLs and data objects for the group and webhooks without creating anything
    #[arg(long)]
    pub dry_run: bool,

    /// Show all information
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for ascend
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "ascend.toml")]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Parses CLI arguments from an iterator, returning clap's error.
    ///
    /// # Errors
    ///
    /// Returns the clap error for unknown flags or unparsable values.
    pub fn try_parse_from_iter<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(iter)
    }
}
