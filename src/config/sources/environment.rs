//! Environment variable source: FOLDERTRAIL_* prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Add environment variable overlay to builder.
/// `FOLDERTRAIL__API__TIMEOUT_SECS=5` sets `api.timeout_secs`.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix("FOLDERTRAIL")
            .separator("__")
            .try_parsing(true),
    );
    Ok(builder)
}
