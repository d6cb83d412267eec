//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
///
/// Covers errors from parsing, validation, and file operations. All of
/// them are raised before any network activity.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to write configuration file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Missing required field that must be provided by CLI or config file.
    #[error("Missing required field: {field}. {hint}")]
    MissingRequired {
        /// Name of the missing field
        field: &'static str,
        /// Hint for how to provide the value
        hint: &'static str,
    },

    /// A required text field was given but is blank.
    #[error("Field {field} must not be empty")]
    EmptyValue {
        /// Name of the blank field
        field: &'static str,
    },

    /// Invalid endpoint URL provided.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The invalid URL string
        url: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Group bounds are inconsistent.
    #[error("Invalid group size: minimum ({min}) is greater than maximum ({max})")]
    InvalidGroupBounds {
        /// Minimum number of servers
        min: u32,
        /// Maximum number of servers
        max: u32,
    },
}

/// Well-known field names for `MissingRequired` errors.
///
/// Use these constants for compile-time safety when matching field names.
pub mod field {
    /// The account user name.
    pub const USERNAME: &str = "username";
    /// The account API key.
    pub const API_KEY: &str = "api_key";
    /// The data center region.
    pub const REGION: &str = "region";
    /// The group name.
    pub const GROUP_NAME: &str = "name";
    /// The server flavor.
    pub const FLAVOR: &str = "flavor";
    /// The server image.
    pub const IMAGE: &str = "image";
}

impl ConfigError {
    /// Creates a `MissingRequired` error for a required field.
    #[must_use]
    pub const fn missing(field: &'static str, hint: &'static str) -> Self {
        Self::MissingRequired { field, hint }
    }
}
