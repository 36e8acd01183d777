//! LedgerDesk client storage layer.
//!
//! The shell persists small client-side blobs (recent searches, UI state)
//! under fixed string keys. [`KeyValueStore`] is the seam the managers
//! program against; [`SqliteStore`] is the durable implementation and
//! [`MemoryStore`] the ephemeral one.
//!
//! # Usage
//!
//! ```no_run
//! use ledgerdesk_core::storage::{KeyValueStore, SqliteStore};
//!
//! // Open a persistent store
//! let store = SqliteStore::open("ledgerdesk.db").expect("failed to open store");
//!
//! // Or use an in-memory store for testing
//! let store = SqliteStore::open_in_memory().expect("failed to open in-memory store");
//!
//! store.set("recent_searches", "[]").expect("write failed");
//! ```

pub mod migrations;
pub mod sqlite;
pub mod store;

pub use sqlite::SqliteStore;
pub use store::{KeyValueStore, MemoryStore};
