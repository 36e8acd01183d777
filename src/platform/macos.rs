// LedgerDesk platform paths for macOS
// Data: ~/Library/Application Support/LedgerDesk

use std::env;
use std::path::PathBuf;

/// Returns the home directory on macOS.
fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Returns the data directory for LedgerDesk on macOS.
/// `~/Library/Application Support/LedgerDesk`
pub fn get_data_dir() -> PathBuf {
    home_dir()
        .join("Library")
        .join("Application Support")
        .join("LedgerDesk")
}
