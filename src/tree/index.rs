//! Hierarchy Index
//!
//! Provides O(1) lookup of folder entries by id. An index is immutable once
//! built; a changed tree means building a new one and swapping it in whole.

use crate::tree::path::resolve_path_names;
use crate::types::{EntityId, FlatEntry};
use std::collections::HashMap;
use tracing::debug;

/// Id-keyed folder lookup table
#[derive(Debug, Clone, Default)]
pub struct HierarchyIndex {
    entries: HashMap<EntityId, FlatEntry>,
    duplicates: usize,
}

/// Folder search hit with its full name path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderMatch {
    pub entry: FlatEntry,
    pub full_path: Vec<String>,
}

impl HierarchyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from flattened entries.
    ///
    /// When an id repeats, the later entry replaces the earlier one. Each
    /// replacement is counted and logged; the data is not repaired.
    pub fn build<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = FlatEntry>,
    {
        let mut map = HashMap::new();
        let mut duplicates = 0;
        for entry in entries {
            let id = entry.id.clone();
            if map.insert(id.clone(), entry).is_some() {
                duplicates += 1;
                debug!(folder_id = %id, "Replacing entry with duplicate id");
            }
        }
        HierarchyIndex {
            entries: map,
            duplicates,
        }
    }

    pub fn get(&self, id: &EntityId) -> Option<&FlatEntry> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &EntityId) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries overwritten by a later entry with the same id
    pub fn duplicate_count(&self) -> usize {
        self.duplicates
    }

    pub fn iter(&self) -> impl Iterator<Item = &FlatEntry> {
        self.entries.values()
    }

    /// Find folders whose name contains `query`, ignoring ASCII case.
    ///
    /// Results are ordered by full path so output is stable across rebuilds.
    pub fn search(&self, query: &str) -> Vec<FolderMatch> {
        let needle = query.trim().to_ascii_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        let mut matches: Vec<FolderMatch> = self
            .entries
            .values()
            .filter(|entry| entry.name.to_ascii_lowercase().contains(&needle))
            .map(|entry| FolderMatch {
                entry: entry.clone(),
                full_path: resolve_path_names(&entry.id, self),
            })
            .collect();
        matches.sort_by(|a, b| {
            a.full_path
                .cmp(&b.full_path)
                .then_with(|| a.entry.id.cmp(&b.entry.id))
        });
        matches
    }
}
