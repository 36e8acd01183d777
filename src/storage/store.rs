//! Key-value storage seam for LedgerDesk client state.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::types::errors::StoreError;

/// A string-keyed, string-valued store.
///
/// Methods take `&self`: implementations manage their own interior
/// mutability, matching the single-threaded access model of the shell.
pub trait KeyValueStore {
    /// Reads the value at `key`, or `None` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Writes `value` under `key`, replacing any existing value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Deletes `key` entirely. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// In-memory store for tests and private-window sessions.
///
/// Contents are lost when the store is dropped.
#[derive(Default)]
pub struct MemoryStore {
    map: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.map.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.map
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.map.borrow_mut().remove(key);
        Ok(())
    }
}
