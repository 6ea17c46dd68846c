//! Directory listing entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry returned by a directory listing on the share.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteEntry {
    /// Entry name (no path).
    pub name: String,
    /// Whether the entry is a directory.
    pub is_directory: bool,
    /// Size in bytes (0 for directories).
    pub size_bytes: u64,
    /// Last write time reported by the share.
    pub modified_at: DateTime<Utc>,
}

impl RemoteEntry {
    /// Whether this is the `.` or `..` pseudo-entry.
    pub fn is_pseudo(&self) -> bool {
        self.name == "." || self.name == ".."
    }
}
