//! Id-keyed cache for fetched ERP entities.
//!
//! A single in-memory map per entity kind (invoices, accounts, contacts).
//! Lookups are by the entity's server id; there is no eviction, callers
//! invalidate on mutation.

use std::collections::HashMap;

/// In-memory cache keyed by entity id.
pub struct EntityCache<T> {
    entries: HashMap<String, T>,
}

impl<T> EntityCache<T> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Stores `entity` under `id`, replacing any cached value.
    pub fn insert(&mut self, id: &str, entity: T) {
        self.entries.insert(id.to_string(), entity);
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.entries.get(id)
    }

    /// Drops the cached value for `id`, returning it if present.
    pub fn invalidate(&mut self, id: &str) -> Option<T> {
        self.entries.remove(id)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for EntityCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
