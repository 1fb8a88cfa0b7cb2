//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.statusdeck/config.toml` (global user preferences)
//! 3. **Project config** - `./.statusdeck/config.toml` (directory-specific overrides)
//! 4. **CLI arguments** - Command-line flags (highest priority, applied by the CLI)

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::types::{ApiConfig, DisplayConfig, RefreshConfig, StatusDeckConfig};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;

const CONFIG_DIR: &str = ".statusdeck";
const CONFIG_FILE: &str = "config.toml";

/// Load configuration from the hierarchy of config files.
///
/// # Errors
///
/// Returns an error if a config file exists but cannot be read or parsed, or
/// if the merged configuration fails validation. Missing files are not errors.
pub fn load_hierarchy() -> Result<StatusDeckConfig, ConfigError> {
    let mut paths = Vec::new();
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(CONFIG_DIR).join(CONFIG_FILE));
    }
    paths.push(std::env::current_dir()?.join(CONFIG_DIR).join(CONFIG_FILE));

    load_from_paths(&paths)
}

/// Load and merge the given config files in order, then validate.
///
/// Later paths override earlier ones. Paths that do not exist are skipped.
pub fn load_from_paths(paths: &[PathBuf]) -> Result<StatusDeckConfig, ConfigError> {
    let mut config = StatusDeckConfig::default();

    for path in paths {
        match load_config_file(path) {
            Ok(file_config) => {
                debug!(event = "core.config.file_loaded", path = %path.display());
                config = merge_configs(config, file_config);
            }
            Err(ConfigError::ConfigNotFound { .. }) => {}
            Err(e) => return Err(e),
        }
    }

    validate_config(&config)?;

    Ok(config)
}

/// Load a single configuration file.
pub fn load_config_file(path: &Path) -> Result<StatusDeckConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Merge two configurations, with override_config taking precedence.
///
/// Override values replace base values only if present.
pub fn merge_configs(base: StatusDeckConfig, override_config: StatusDeckConfig) -> StatusDeckConfig {
    StatusDeckConfig {
        api: ApiConfig {
            base_url: override_config.api.base_url.or(base.api.base_url),
            user_agent: override_config.api.user_agent.or(base.api.user_agent),
        },
        refresh: RefreshConfig {
            interval_secs: override_config
                .refresh
                .interval_secs
                .or(base.refresh.interval_secs),
            loading_clear_delay_ms: override_config
                .refresh
                .loading_clear_delay_ms
                .or(base.refresh.loading_clear_delay_ms),
        },
        display: DisplayConfig {
            max_components: override_config
                .display
                .max_components
                .or(base.display.max_components),
            max_incidents: override_config
                .display
                .max_incidents
                .or(base.display.max_incidents),
            color: override_config.display.color.or(base.display.color),
        },
    }
}
