//! Configuration layer for ascend.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **TOML config file** - Values from the configuration file
//! 3. **Built-in defaults** - Hardcoded default values
//!
//! Required fields without defaults (`username`, `api_key`, `region`,
//! `name`, `flavor`, `image`) must come from one of the first two.
//!
//! For list options (`--meta`, `--networks`), CLI values **replace** the
//! TOML values entirely (not merged).
//!
//! # Boolean Flag Semantics
//!
//! Boolean flags (`--no-public`, `--no-service`) use OR semantics:
//! - If set `true` in either CLI or TOML, the result is `true`.
//! - Once set `true` in TOML, CLI cannot override to `false` (flags only enable, not disable).
//!
//! # TOML-Only Options
//!
//! Endpoint overrides (`endpoints.identity`, `endpoints.autoscale`) are
//! only available in the config file.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod toml_tests;
#[cfg(test)]
mod validated_tests;

pub use cli::{Cli, Command};
pub use error::{ConfigError, field};
pub use toml::{TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, expand_tilde, write_default_config};
