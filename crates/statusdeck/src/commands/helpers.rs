use clap::ArgMatches;
use tracing::warn;

use statusdeck_core::StatusDeckConfig;
use statusdeck_core::errors::ConfigError;

/// Load the config hierarchy, falling back to defaults with a warning.
pub fn load_config_with_warning() -> StatusDeckConfig {
    match StatusDeckConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.statusdeck/config.toml and ./.statusdeck/config.toml for errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            StatusDeckConfig::default()
        }
    }
}

/// Apply the command-line overrides on top of the loaded config and
/// validate the result.
pub fn apply_cli_overrides(
    mut config: StatusDeckConfig,
    matches: &ArgMatches,
) -> Result<StatusDeckConfig, ConfigError> {
    if let Some(base_url) = matches.get_one::<String>("base-url") {
        config.api.base_url = Some(base_url.clone());
    }

    if matches.get_flag("no-color") {
        config.display.color = Some(false);
    }

    // Only `watch` defines --interval
    if let Ok(Some(interval)) = matches.try_get_one::<u64>("interval") {
        config.refresh.interval_secs = Some(*interval);
    }

    config.validate()?;
    Ok(config)
}
