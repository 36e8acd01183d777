use serde::{Deserialize, Serialize};

/// One recorded global-search query and when it was recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHistoryEntry {
    pub query: String,
    /// Milliseconds since the UNIX epoch.
    pub timestamp: i64,
}
