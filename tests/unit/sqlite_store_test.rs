//! Unit tests for the SQLite-backed key-value store.
//!
//! These tests exercise the `KeyValueStore` operations against in-memory
//! and on-disk databases, plus the migration bookkeeping.

use ledgerdesk_core::storage::{migrations, KeyValueStore, SqliteStore};

#[test]
fn test_get_absent_key_returns_none() {
    let store = SqliteStore::open_in_memory().unwrap();
    assert_eq!(store.get("missing").unwrap(), None);
}

#[test]
fn test_set_then_get_round_trips() {
    let store = SqliteStore::open_in_memory().unwrap();
    store.set("recent_searches", "[]").unwrap();
    assert_eq!(
        store.get("recent_searches").unwrap().as_deref(),
        Some("[]")
    );
}

#[test]
fn test_set_replaces_existing_value() {
    let store = SqliteStore::open_in_memory().unwrap();
    store.set("k", "old").unwrap();
    store.set("k", "new").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("new"));
}

#[test]
fn test_remove_deletes_key() {
    let store = SqliteStore::open_in_memory().unwrap();
    store.set("k", "v").unwrap();
    store.remove("k").unwrap();
    assert_eq!(store.get("k").unwrap(), None);
}

#[test]
fn test_remove_absent_key_is_ok() {
    let store = SqliteStore::open_in_memory().unwrap();
    assert!(store.remove("missing").is_ok());
}

#[test]
fn test_values_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.db");

    {
        let store = SqliteStore::open(&path).unwrap();
        store.set("k", "v").unwrap();
    }

    let store = SqliteStore::open(&path).unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
}

#[test]
fn test_keys_are_independent() {
    let store = SqliteStore::open_in_memory().unwrap();
    store.set("a", "1").unwrap();
    store.set("b", "2").unwrap();
    store.remove("a").unwrap();
    assert_eq!(store.get("a").unwrap(), None);
    assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
}

#[test]
fn test_migrations_are_idempotent() {
    let conn = rusqlite::Connection::open_in_memory().unwrap();
    migrations::run_all(&conn).unwrap();
    migrations::run_all(&conn).unwrap();
    assert_eq!(
        migrations::get_schema_version(&conn),
        migrations::CURRENT_SCHEMA_VERSION
    );
}
