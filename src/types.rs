//! Core types shared by the tree index, the detail cache and the session.
//!
//! Wire types mirror the folder/file API payloads; they are decoded and
//! validated at the fetch boundary and never passed around as raw JSON.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// EntityId: opaque, stable identifier of a folder or file
///
/// The API may send ids as JSON strings or integers; both decode to the same
/// textual id, so `1` and `"1"` are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(from = "RawId")]
pub struct EntityId(String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        EntityId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        EntityId(id.to_string())
    }
}

impl From<String> for EntityId {
    fn from(id: String) -> Self {
        EntityId(id)
    }
}

impl Serialize for EntityId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

impl From<RawId> for EntityId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(s) => EntityId(s),
            RawId::Signed(n) => EntityId(n.to_string()),
            RawId::Unsigned(n) => EntityId(n.to_string()),
        }
    }
}

/// Folder node as served by the tree endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderNode {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<EntityId>,
    /// Absent, null, or non-array values all mean "no children"
    #[serde(default, deserialize_with = "lenient_children")]
    pub children: Vec<FolderNode>,
}

impl FolderNode {
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>, parent_id: Option<EntityId>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent_id,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<FolderNode>) -> Self {
        self.children = children;
        self
    }
}

fn lenient_children<'de, D>(deserializer: D) -> Result<Vec<FolderNode>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::Array(items)) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(serde::de::Error::custom))
            .collect(),
        _ => Ok(Vec::new()),
    }
}

/// Tree endpoint payload: one root object or a list of sibling roots
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TreePayload {
    Forest(Vec<FolderNode>),
    Root(FolderNode),
}

impl TreePayload {
    pub fn into_forest(self) -> Vec<FolderNode> {
        match self {
            TreePayload::Forest(roots) => roots,
            TreePayload::Root(root) => vec![root],
        }
    }
}

/// FlatEntry: the projection of a folder kept in the hierarchy index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatEntry {
    pub id: EntityId,
    pub name: String,
    pub parent_id: Option<EntityId>,
}

impl From<&FolderNode> for FlatEntry {
    fn from(node: &FolderNode) -> Self {
        Self {
            id: node.id.clone(),
            name: node.name.clone(),
            parent_id: node.parent_id.clone(),
        }
    }
}

/// Root-first ancestor chain ending at the queried folder
pub type Breadcrumb = Vec<FlatEntry>;

/// Child folder in a folder listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderSummary {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<EntityId>,
}

/// File in a folder listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileSummary {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub uploaded_at: Option<String>,
}

/// Immediate children of one folder
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FolderListing {
    #[serde(default)]
    pub folders: Vec<FolderSummary>,
    #[serde(default)]
    pub files: Vec<FileSummary>,
}

/// Tag attached to a file; `category` drives the chip color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(default)]
    pub id: Option<EntityId>,
    pub name: String,
    pub category: String,
}

/// Full detail of one file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileDetail {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub upload_path: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub uploaded_at: Option<String>,
    /// Folders the file is filed under (a file may live in several)
    #[serde(default)]
    pub folder_ids: Vec<EntityId>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    /// Fields this crate does not interpret
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
