// LedgerDesk platform paths for Linux
// Data: ~/.local/share/ledgerdesk

use std::env;
use std::path::PathBuf;

/// Returns the data directory for LedgerDesk on Linux.
/// Uses `$XDG_DATA_HOME/ledgerdesk` if set, otherwise `~/.local/share/ledgerdesk`.
pub fn get_data_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg).join("ledgerdesk")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("ledgerdesk")
    }
}
