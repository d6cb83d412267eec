//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

/// Default group cooldown in seconds.
pub const GROUP_COOLDOWN_SECS: u32 = 60;

/// Default minimum number of servers in a group.
pub const GROUP_MIN_ENTITIES: u32 = 0;

/// Default maximum number of servers in a group.
pub const GROUP_MAX_ENTITIES: u32 = 10;

/// Default policy cooldown in seconds.
pub const POLICY_COOLDOWN_SECS: u32 = 60;

/// Default number of servers a policy adds.
pub const POLICY_CHANGE: i32 = 1;

/// Default policy name.
pub const POLICY_NAME: &str = "Default Policy";

/// Default webhook name.
pub const WEBHOOK_NAME: &str = "Default Webhook";

/// Config file looked up under the platform config directory when `--config` is absent.
pub const CONFIG_FILE: &str = "ascend/config.toml";
