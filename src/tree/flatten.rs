//! Tree flattening
//!
//! Depth-first pre-order walk over a folder forest using an explicit
//! worklist, so tree depth never turns into call-stack depth.

use crate::types::{EntityId, FlatEntry, FolderNode};
use std::collections::{HashMap, HashSet};

/// Flatten a forest of sibling roots into one entry per node, in pre-order.
///
/// An empty forest yields an empty vector. Duplicate ids are emitted as-is.
pub fn flatten(forest: &[FolderNode]) -> Vec<FlatEntry> {
    let mut entries = Vec::new();
    // Children are pushed in reverse so they pop in document order
    let mut stack: Vec<&FolderNode> = forest.iter().rev().collect();
    while let Some(node) = stack.pop() {
        entries.push(FlatEntry::from(node));
        stack.extend(node.children.iter().rev());
    }
    entries
}

/// Flatten a single root and its descendants
pub fn flatten_root(root: &FolderNode) -> Vec<FlatEntry> {
    flatten(std::slice::from_ref(root))
}

/// Ids that occur more than once, in order of their second occurrence
pub fn duplicate_ids(entries: &[FlatEntry]) -> Vec<EntityId> {
    let mut counts: HashMap<&EntityId, usize> = HashMap::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();
    for entry in entries {
        let count = counts.entry(&entry.id).or_insert(0);
        *count += 1;
        if *count > 1 && reported.insert(&entry.id) {
            duplicates.push(entry.id.clone());
        }
    }
    duplicates
}
