//! Scripted in-memory API shared by the integration tests.

use async_trait::async_trait;
use foldertrail::api::TreeApi;
use foldertrail::types::{
    EntityId, FileDetail, FileSummary, FolderListing, FolderNode, FolderSummary,
};
use foldertrail::ApiError;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::oneshot;

#[derive(Default)]
pub struct ScriptedApi {
    pub tree: Mutex<Vec<FolderNode>>,
    pub children: Mutex<HashMap<EntityId, FolderListing>>,
    pub details: Mutex<HashMap<EntityId, FileDetail>>,
    /// Folder ids whose listing is held back until the test releases it
    gates: Mutex<HashMap<EntityId, oneshot::Receiver<FolderListing>>>,
    pub fail_tree: AtomicBool,
    pub fail_children: AtomicBool,
    pub fail_detail: AtomicBool,
    pub tree_calls: AtomicUsize,
    pub children_calls: AtomicUsize,
    pub detail_calls: AtomicUsize,
}

impl ScriptedApi {
    pub fn with_tree(tree: Vec<FolderNode>) -> Self {
        let api = Self::default();
        *api.tree.lock() = tree;
        api
    }

    /// Hold the next listing for `folder_id` until the returned sender fires
    pub fn gate(&self, folder_id: &str) -> oneshot::Sender<FolderListing> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().insert(EntityId::from(folder_id), rx);
        tx
    }
}

fn transport_failure() -> ApiError {
    ApiError::Transport("connection refused".to_string())
}

#[async_trait]
impl TreeApi for ScriptedApi {
    async fn fetch_tree(&self) -> Result<Vec<FolderNode>, ApiError> {
        self.tree_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_tree.load(Ordering::SeqCst) {
            return Err(transport_failure());
        }
        Ok(self.tree.lock().clone())
    }

    async fn fetch_children(&self, folder_id: &EntityId) -> Result<FolderListing, ApiError> {
        self.children_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_children.load(Ordering::SeqCst) {
            return Err(transport_failure());
        }
        let gate = self.gates.lock().remove(folder_id);
        if let Some(rx) = gate {
            return rx
                .await
                .map_err(|_| ApiError::Transport("request abandoned".to_string()));
        }
        Ok(self
            .children
            .lock()
            .get(folder_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn fetch_file_detail(&self, file_id: &EntityId) -> Result<FileDetail, ApiError> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_detail.load(Ordering::SeqCst) {
            return Err(transport_failure());
        }
        self.details
            .lock()
            .get(file_id)
            .cloned()
            .ok_or_else(|| ApiError::Server {
                code: 404,
                message: "File not found".to_string(),
            })
    }
}

/// root(1) / docs(2) / reports(3), decoded from the wire format
pub fn sample_tree() -> Vec<FolderNode> {
    let json = r#"[{"id":1,"name":"root","children":[
        {"id":2,"name":"docs","parent_id":1,"children":[
            {"id":3,"name":"reports","parent_id":2}
        ]}
    ]}]"#;
    serde_json::from_str(json).unwrap()
}

pub fn listing(parent: &str, folders: &[&str], files: &[&str]) -> FolderListing {
    FolderListing {
        folders: folders
            .iter()
            .map(|name| FolderSummary {
                id: EntityId::new(format!("{}/{}", parent, name)),
                name: name.to_string(),
                parent_id: Some(EntityId::from(parent)),
            })
            .collect(),
        files: files
            .iter()
            .map(|name| FileSummary {
                id: EntityId::new(format!("{}/{}", parent, name)),
                name: name.to_string(),
                size: Some(1024),
                uploaded_at: None,
            })
            .collect(),
    }
}

pub fn file_detail(id: &str, folder_ids: &[&str], categories: &[&str]) -> FileDetail {
    let tags: Vec<serde_json::Value> = categories
        .iter()
        .map(|c| serde_json::json!({ "name": c.to_lowercase(), "category": c }))
        .collect();
    serde_json::from_value(serde_json::json!({
        "id": id,
        "name": format!("{}.pdf", id),
        "size": 2048,
        "folder_ids": folder_ids,
        "tags": tags,
    }))
    .unwrap()
}
