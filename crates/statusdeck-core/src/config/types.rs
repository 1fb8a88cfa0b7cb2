//! Configuration type definitions for statusdeck.
//!
//! These types are deserialized from TOML config files. Every field is
//! optional so that a project config can override a single value of the
//! user config without restating the rest; the accessor methods in
//! [`super::defaults`] resolve the effective values.
//!
//! # Example Configuration
//!
//! ```toml
//! [api]
//! base_url = "https://discordstatus.com/api/v2"
//! user_agent = "statusdeck"
//!
//! [refresh]
//! interval_secs = 30
//! loading_clear_delay_ms = 500
//!
//! [display]
//! max_components = 12
//! max_incidents = 3
//! color = true
//! ```

use serde::{Deserialize, Serialize};

/// Main configuration loaded from TOML config files.
///
/// Loaded from:
/// 1. User config: `~/.statusdeck/config.toml`
/// 2. Project config: `./.statusdeck/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StatusDeckConfig {
    /// Upstream status API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Refresh scheduling settings
    #[serde(default)]
    pub refresh: RefreshConfig,

    /// Dashboard presentation settings
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Upstream status API configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ApiConfig {
    /// Base URL the endpoint paths are appended to.
    /// Default: `https://discordstatus.com/api/v2`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// User agent sent with every request.
    /// Default: `statusdeck`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

/// Refresh scheduling configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RefreshConfig {
    /// Seconds between automatic refresh cycles. Zero disables the timer.
    /// Default: 30 seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_secs: Option<u64>,

    /// Delay before the busy indicator is cleared at the end of a cycle.
    /// Default: 500ms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loading_clear_delay_ms: Option<u64>,
}

/// Dashboard presentation configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DisplayConfig {
    /// Maximum number of top-level components shown.
    /// Default: 12.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_components: Option<usize>,

    /// Maximum number of incident cards shown.
    /// Default: 3.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_incidents: Option<usize>,

    /// Whether the terminal dashboard uses ANSI colours.
    /// Default: true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
}
