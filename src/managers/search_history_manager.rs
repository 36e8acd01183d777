//! Search History Manager for LedgerDesk.
//!
//! Maintains the bounded, deduplicated list of recent global-search
//! queries shown in the shell's search dropdown, persisted through a
//! [`KeyValueStore`].
//!
//! The in-memory list is authoritative for the current session: storage
//! reads and writes are best-effort, and failures are logged rather than
//! surfaced, so search keeps working when persistence does not.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::storage::KeyValueStore;
use crate::types::search::SearchHistoryEntry;

/// Storage key the entry list is persisted under.
pub const RECENT_SEARCHES_KEY: &str = "recent_searches";

/// Maximum number of entries kept in the history.
pub const MAX_ENTRIES: usize = 5;

/// Trait defining search history operations.
pub trait SearchHistoryManagerTrait {
    fn add(&mut self, query: &str);
    fn clear(&mut self);
    fn entries(&self) -> &[SearchHistoryEntry];
}

/// Search history manager backed by a key-value store.
pub struct SearchHistoryManager<'a> {
    store: &'a dyn KeyValueStore,
    entries: Vec<SearchHistoryEntry>,
}

impl<'a> SearchHistoryManager<'a> {
    /// Creates a manager over `store`, eagerly loading the persisted history.
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        let entries = Self::load(store);
        Self { store, entries }
    }

    /// Reads the persisted list.
    ///
    /// An absent key yields an empty list. A value that cannot be read or
    /// decoded is treated the same way and logged; the stored value is left
    /// in place until the next successful write overwrites it.
    fn load(store: &dyn KeyValueStore) -> Vec<SearchHistoryEntry> {
        let raw = match store.get(RECENT_SEARCHES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("failed to read recent searches: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("discarding malformed recent searches: {}", e);
                Vec::new()
            }
        }
    }

    /// Returns the current UNIX timestamp in milliseconds.
    fn now_millis() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64
    }

    /// Serializes the current list and writes it under the fixed key.
    fn persist(&self) {
        let json = match serde_json::to_string(&self.entries) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("failed to serialize recent searches: {}", e);
                return;
            }
        };
        if let Err(e) = self.store.set(RECENT_SEARCHES_KEY, &json) {
            log::warn!("failed to persist recent searches: {}", e);
        }
    }
}

impl SearchHistoryManagerTrait for SearchHistoryManager<'_> {
    /// Records a query at the front of the history.
    ///
    /// The query is trimmed first; a query that is blank after trimming is
    /// ignored entirely. A repeated query moves to the front instead of
    /// duplicating, and the list is capped at [`MAX_ENTRIES`], dropping the
    /// oldest entries off the tail. The result is persisted; a failed write
    /// does not roll back the in-memory update.
    fn add(&mut self, query: &str) {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return;
        }

        self.entries.retain(|e| e.query != trimmed);
        self.entries.insert(
            0,
            SearchHistoryEntry {
                query: trimmed.to_string(),
                timestamp: Self::now_millis(),
            },
        );
        self.entries.truncate(MAX_ENTRIES);

        self.persist();
    }

    /// Empties the history and removes the persisted key entirely.
    ///
    /// A failed removal is logged; the in-memory list stays cleared.
    fn clear(&mut self) {
        self.entries.clear();
        if let Err(e) = self.store.remove(RECENT_SEARCHES_KEY) {
            log::warn!("failed to remove recent searches: {}", e);
        }
    }

    /// The current entries, most recent first.
    fn entries(&self) -> &[SearchHistoryEntry] {
        &self.entries
    }
}
