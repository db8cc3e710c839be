//! Path resolution
//!
//! Walks parent links in a [`HierarchyIndex`] to produce the root-first
//! ancestor chain of a folder.

use crate::tree::index::HierarchyIndex;
use crate::types::{Breadcrumb, EntityId};
use tracing::warn;

/// Resolve the ancestor path of `id`, root first, ending at `id` itself.
///
/// An id missing from the index yields an empty path. A parent id missing
/// from the index ends the walk there, so the result is the chain up to the
/// break. Parent cycles are invalid input; the walk is capped at the index
/// size and returns what it collected so far.
pub fn resolve_path(id: &EntityId, index: &HierarchyIndex) -> Breadcrumb {
    let mut path = Vec::new();
    let mut current = index.get(id);
    while let Some(entry) = current {
        if path.len() == index.len() {
            warn!(folder_id = %id, "Parent cycle detected while resolving path; truncating");
            break;
        }
        path.push(entry.clone());
        current = entry.parent_id.as_ref().and_then(|parent| index.get(parent));
    }
    path.reverse();
    path
}

/// Same walk as [`resolve_path`], keeping only display names
pub fn resolve_path_names(id: &EntityId, index: &HierarchyIndex) -> Vec<String> {
    resolve_path(id, index)
        .into_iter()
        .map(|entry| entry.name)
        .collect()
}
