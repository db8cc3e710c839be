//! MergeService: orchestrates sources and deserializes to NavConfig.

use crate::config::sources::{defaults, environment, file};
use crate::config::NavConfig;
use config::{Config, ConfigError};
use std::path::Path;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Precedence: defaults (lowest) -> config file -> environment (highest).
    pub fn load(config_file: Option<&Path>) -> Result<NavConfig, ConfigError> {
        let builder = defaults::add_to_builder(Config::builder())?;
        let builder = match config_file {
            Some(path) => file::add_to_builder(builder, path)?,
            None => builder,
        };
        let builder = environment::add_to_builder(builder)?;

        let config = builder.build()?;
        config.try_deserialize()
    }
}
