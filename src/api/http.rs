//! reqwest-backed [`TreeApi`] implementation.

use super::envelope::decode_body;
use super::TreeApi;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::types::{EntityId, FileDetail, FolderListing, FolderNode, TreePayload};
use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// HTTP client for the folder/file API
pub struct HttpTreeApi {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpTreeApi {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        config.validate()?;
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            ApiError::ConfigError(format!("Invalid API base URL {}: {}", config.base_url, e))
        })?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client, base_url })
    }

    /// Append path segments to the base URL, percent-encoding each one
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ApiError::ConfigError(format!("API base URL cannot take a path: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        debug!(url = %url, "GET");
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        let body = response.text().await?;
        let decoded = decode_body(&body);
        if status.is_success() {
            return decoded;
        }
        match decoded {
            // An error envelope explains a non-2xx better than the status line
            Err(err @ ApiError::Server { .. }) => Err(err),
            _ => Err(ApiError::Transport(format!(
                "GET {} returned HTTP {}",
                url, status
            ))),
        }
    }
}

#[async_trait]
impl TreeApi for HttpTreeApi {
    async fn fetch_tree(&self) -> Result<Vec<FolderNode>, ApiError> {
        let payload: TreePayload = self.get_json(self.endpoint(&["folders", "tree"])?).await?;
        Ok(payload.into_forest())
    }

    async fn fetch_children(&self, folder_id: &EntityId) -> Result<FolderListing, ApiError> {
        self.get_json(self.endpoint(&["folders", folder_id.as_str(), "children"])?)
            .await
    }

    async fn fetch_file_detail(&self, file_id: &EntityId) -> Result<FileDetail, ApiError> {
        self.get_json(self.endpoint(&["files", file_id.as_str()])?).await
    }
}
