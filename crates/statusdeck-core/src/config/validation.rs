//! Configuration validation logic.
//!
//! Runs on the merged configuration, before anything is built from it.

use url::Url;

use crate::config::types::StatusDeckConfig;
use crate::errors::ConfigError;

/// URL schemes the upstream API may be reached over.
pub const VALID_SCHEMES: [&str; 2] = ["http", "https"];

/// Validate a StatusDeckConfig, returning an error if any values are invalid.
///
/// # Validation Rules
///
/// - The API base URL must be an absolute http(s) URL
/// - Component and incident limits must be at least 1
///
/// # Errors
///
/// Returns `ConfigError::InvalidBaseUrl` if the base URL does not parse or
/// uses another scheme, `ConfigError::InvalidConfiguration` for bad limits.
pub fn validate_config(config: &StatusDeckConfig) -> Result<(), ConfigError> {
    validate_base_url(config.api.base_url())?;

    if config.display.max_components() == 0 {
        return Err(ConfigError::InvalidConfiguration {
            message: "display.max_components must be at least 1".to_string(),
        });
    }

    if config.display.max_incidents() == 0 {
        return Err(ConfigError::InvalidConfiguration {
            message: "display.max_incidents must be at least 1".to_string(),
        });
    }

    Ok(())
}

/// Check that `base_url` is an absolute URL with an http(s) scheme.
pub fn validate_base_url(base_url: &str) -> Result<(), ConfigError> {
    let parsed = Url::parse(base_url).map_err(|e| ConfigError::InvalidBaseUrl {
        url: base_url.to_string(),
        reason: e.to_string(),
    })?;

    if !VALID_SCHEMES.contains(&parsed.scheme()) {
        return Err(ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: format!("scheme must be one of: {}", VALID_SCHEMES.join(", ")),
        });
    }

    Ok(())
}
