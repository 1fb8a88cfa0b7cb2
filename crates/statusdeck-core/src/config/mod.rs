//! # Configuration System
//!
//! Hierarchical TOML configuration for statusdeck.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.statusdeck/config.toml`
//! 3. **Project config** - `./.statusdeck/config.toml`
//! 4. **CLI arguments** - Command-line flags (highest priority)
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use statusdeck_core::config::StatusDeckConfig;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = StatusDeckConfig::load_hierarchy()?;
//!     println!("watching {}", config.api.base_url());
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

pub use types::{ApiConfig, DisplayConfig, RefreshConfig, StatusDeckConfig};
pub use validation::{VALID_SCHEMES, validate_base_url, validate_config};

impl StatusDeckConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, crate::errors::ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }
}
