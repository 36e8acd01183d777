use std::fmt;

// === StoreError ===

/// Errors raised by the key-value storage medium.
#[derive(Debug)]
pub enum StoreError {
    /// A file system error occurred while opening or writing the store.
    Io(String),
    /// The underlying database operation failed.
    Database(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(msg) => write!(f, "Store I/O error: {}", msg),
            StoreError::Database(msg) => write!(f, "Store database error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

// === ShortcutError ===

/// Errors related to keyboard shortcut dispatch.
#[derive(Debug)]
pub enum ShortcutError {
    /// No binding exists for the given action.
    NotFound(String),
    /// The key chord is already bound to another action.
    Conflict(String),
    /// The provided key chord is invalid.
    InvalidKeys(String),
}

impl fmt::Display for ShortcutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShortcutError::NotFound(action) => {
                write!(f, "Shortcut not found for action: {}", action)
            }
            ShortcutError::Conflict(msg) => write!(f, "Shortcut conflict: {}", msg),
            ShortcutError::InvalidKeys(keys) => write!(f, "Invalid shortcut keys: {}", keys),
        }
    }
}

impl std::error::Error for ShortcutError {}
