//! SQLite-backed key-value store.
//!
//! Wraps a `rusqlite::Connection` holding a single `kv_store` table and
//! runs schema migrations on open.

use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use super::migrations;
use super::store::KeyValueStore;
use crate::platform;
use crate::types::errors::StoreError;

/// File name of the client store inside the platform data directory.
const STORE_FILE: &str = "ledgerdesk.db";

/// Durable key-value store backed by SQLite.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) the store at the given file path and runs migrations.
    ///
    /// # Errors
    /// Returns `StoreError::Database` if the connection cannot be established
    /// or migrations fail.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn =
            Connection::open(path).map_err(|e| StoreError::Database(e.to_string()))?;
        Self::from_connection(conn)
    }

    /// Opens an in-memory store, discarded on drop. Useful for testing.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn =
            Connection::open_in_memory().map_err(|e| StoreError::Database(e.to_string()))?;
        Self::from_connection(conn)
    }

    /// Opens the store at its default location in the platform data
    /// directory, creating the directory if needed.
    pub fn open_default() -> Result<Self, StoreError> {
        let data_dir = platform::get_data_dir();
        std::fs::create_dir_all(&data_dir)
            .map_err(|e| StoreError::Io(format!("Failed to create data directory: {}", e)))?;
        Self::open(data_dir.join(STORE_FILE))
    }

    fn from_connection(conn: Connection) -> Result<Self, StoreError> {
        migrations::run_all(&conn).map_err(|e| StoreError::Database(e.to_string()))?;
        Ok(Self { conn })
    }

    /// Returns the current UNIX timestamp in seconds.
    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| StoreError::Database(e.to_string()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn
            .execute(
                "INSERT OR REPLACE INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)",
                params![key, value, Self::now()],
            )
            .map_err(|e| StoreError::Database(e.to_string()))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.conn
            .execute("DELETE FROM kv_store WHERE key = ?1", params![key])
            .map_err(|e| StoreError::Database(e.to_string()))?;
        Ok(())
    }
}
