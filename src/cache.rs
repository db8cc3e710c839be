//! Entity Detail Cache
//!
//! Provides O(1) access to the last fetched detail object for a file or
//! folder id. Entries live as long as the cache; there is no eviction.

use crate::types::EntityId;
use std::collections::HashMap;
use std::sync::Arc;

/// Detail cache: EntityId -> last stored detail
///
/// Values are opaque to the cache. `get` hands back the same `Arc` that was
/// stored, not a copy.
#[derive(Debug)]
pub struct DetailCache<T> {
    pub(crate) entries: HashMap<EntityId, Arc<T>>,
}

impl<T> Default for DetailCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DetailCache<T> {
    pub fn new() -> Self {
        DetailCache {
            entries: HashMap::new(),
        }
    }

    /// Store `detail` under `id`, replacing whatever was there
    pub fn store(&mut self, id: EntityId, detail: Arc<T>) {
        self.entries.insert(id, detail);
    }

    pub fn get(&self, id: &EntityId) -> Option<Arc<T>> {
        self.entries.get(id).cloned()
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
}
