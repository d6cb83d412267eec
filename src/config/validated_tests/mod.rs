//! Tests for validated configuration.

use super::ConfigError;
use super::cli::Cli;
use super::toml::TomlConfig;
use super::validated::ValidatedConfig;

/// Helper to create CLI args from a slice
fn cli(args: &[&str]) -> Cli {
    let mut full_args = vec!["ascend"];
    full_args.extend(args);
    Cli::parse_from_iter(full_args)
}

/// CLI args carrying every required field
fn minimal_cli(extra: &[&str]) -> Cli {
    let mut args = vec![
        "-u", "jdoe", "-k", "secret", "-r", "DFW", "-n", "web", "--flavor", "general1-1",
        "--image", "img-uuid",
    ];
    args.extend(extra);
    cli(&args)
}

/// Helper to parse TOML config
fn toml(content: &str) -> TomlConfig {
    TomlConfig::parse(content).unwrap()
}
