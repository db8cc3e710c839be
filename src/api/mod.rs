//! Folder/file API boundary
//!
//! The session talks to the server only through [`TreeApi`]. [`HttpTreeApi`]
//! is the reqwest-backed implementation; tests substitute in-memory fakes.

pub mod envelope;
pub mod http;

use crate::error::ApiError;
use crate::types::{EntityId, FileDetail, FolderListing, FolderNode};
use async_trait::async_trait;

pub use envelope::{unwrap_envelope, Envelope};
pub use http::HttpTreeApi;

/// Read-only endpoints the navigation session consumes
#[async_trait]
pub trait TreeApi: Send + Sync {
    /// Full folder tree as a forest of roots; a single-root payload becomes a
    /// one-element forest
    async fn fetch_tree(&self) -> Result<Vec<FolderNode>, ApiError>;

    /// Immediate child folders and files of one folder
    async fn fetch_children(&self, folder_id: &EntityId) -> Result<FolderListing, ApiError>;

    async fn fetch_file_detail(&self, file_id: &EntityId) -> Result<FileDetail, ApiError>;
}
