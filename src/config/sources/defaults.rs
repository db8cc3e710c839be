//! Built-in defaults as the lowest-precedence source.

use crate::config::NavConfig;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Ok(builder.add_source(Config::try_from(&NavConfig::default())?))
}
