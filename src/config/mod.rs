//! Configuration
//!
//! `NavConfig` is assembled by [`ConfigLoader`] from built-in defaults, an
//! optional TOML file and `FOLDERTRAIL__*` environment variables, in that
//! order of increasing precedence.

pub mod facade;
pub mod merge;
pub mod sources;

pub use facade::ConfigLoader;

use crate::colors::default_palette;
use crate::error::ApiError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NavConfig {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl NavConfig {
    pub fn validate(&self) -> Result<(), ApiError> {
        self.api.validate()?;
        self.session.validate()
    }
}

/// Folder/file API endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL the endpoint paths are appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:5000/api".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> Result<(), ApiError> {
        let url = self.base_url.trim();
        let Some(rest) = url
            .strip_prefix("http://")
            .or_else(|| url.strip_prefix("https://"))
        else {
            return Err(ApiError::ConfigError(format!(
                "API base URL must start with http:// or https://: {}",
                self.base_url
            )));
        };
        let host = rest.split('/').next().unwrap_or_default();
        if host.is_empty() || rest.chars().any(char::is_whitespace) {
            return Err(ApiError::ConfigError(format!(
                "Invalid API base URL: {}",
                self.base_url
            )));
        }
        if self.timeout_secs == 0 {
            return Err(ApiError::ConfigError(
                "API timeout must be at least one second".to_string(),
            ));
        }
        Ok(())
    }
}

/// Navigation session behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Colors handed out to category labels in first-seen order
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,

    /// Drop folder listings that settle after a newer one was already shown
    #[serde(default)]
    pub discard_stale_responses: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            palette: default_palette(),
            discard_stale_responses: false,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.palette.is_empty() {
            return Err(ApiError::ConfigError(
                "session.palette must contain at least one color".to_string(),
            ));
        }
        if let Some(blank) = self.palette.iter().position(|c| c.trim().is_empty()) {
            return Err(ApiError::ConfigError(format!(
                "session.palette entry {} is blank",
                blank
            )));
        }
        Ok(())
    }
}
