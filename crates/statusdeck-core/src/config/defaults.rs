//! Default values for configuration types.
//!
//! The config structs keep every field optional; the accessors here resolve
//! the effective value, falling back to the built-in default.

use std::time::Duration;

use crate::config::types::{ApiConfig, DisplayConfig, RefreshConfig};

/// Statuspage v2 API of the service watched out of the box.
pub const DEFAULT_BASE_URL: &str = "https://discordstatus.com/api/v2";

pub const DEFAULT_USER_AGENT: &str = "statusdeck";

pub const DEFAULT_INTERVAL_SECS: u64 = 30;

/// Keeps the busy indicator from flickering on fast responses.
pub const DEFAULT_LOADING_CLEAR_DELAY_MS: u64 = 500;

pub const DEFAULT_MAX_COMPONENTS: usize = 12;

pub const DEFAULT_MAX_INCIDENTS: usize = 3;

impl ApiConfig {
    /// Returns the base URL, defaulting to the Discord status page API.
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Returns the user agent, defaulting to `statusdeck`.
    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }
}

impl RefreshConfig {
    /// Returns the refresh interval in seconds, defaulting to 30.
    pub fn interval_secs(&self) -> u64 {
        self.interval_secs.unwrap_or(DEFAULT_INTERVAL_SECS)
    }

    /// Returns the loading-clear delay, defaulting to 500ms.
    pub fn loading_clear_delay(&self) -> Duration {
        Duration::from_millis(
            self.loading_clear_delay_ms
                .unwrap_or(DEFAULT_LOADING_CLEAR_DELAY_MS),
        )
    }
}

impl DisplayConfig {
    /// Returns the component row limit, defaulting to 12.
    pub fn max_components(&self) -> usize {
        self.max_components.unwrap_or(DEFAULT_MAX_COMPONENTS)
    }

    /// Returns the incident card limit, defaulting to 3.
    pub fn max_incidents(&self) -> usize {
        self.max_incidents.unwrap_or(DEFAULT_MAX_INCIDENTS)
    }

    /// Returns whether colour output is enabled, defaulting to true.
    pub fn color(&self) -> bool {
        self.color.unwrap_or(true)
    }
}
