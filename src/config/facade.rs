//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::NavConfig;
use config::ConfigError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from defaults, an optional file, and environment.
    pub fn load(config_file: Option<&Path>) -> Result<NavConfig, ConfigError> {
        MergeService::load(config_file)
    }

    /// Load configuration and reject values the session cannot run with.
    pub fn load_validated(config_file: Option<&Path>) -> Result<NavConfig, crate::error::ApiError> {
        let config = Self::load(config_file)?;
        config.validate()?;
        Ok(config)
    }

    /// Create default configuration.
    pub fn default() -> NavConfig {
        NavConfig::default()
    }
}
