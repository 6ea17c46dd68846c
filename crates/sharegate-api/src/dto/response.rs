//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use sharegate_core::types::RemoteEntry;

/// One file in a folder listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntryResponse {
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// Last write time.
    pub modified: DateTime<Utc>,
}

impl From<RemoteEntry> for FileEntryResponse {
    fn from(entry: RemoteEntry) -> Self {
        Self {
            name: entry.name,
            size: entry.size_bytes,
            modified: entry.modified_at,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub success: bool,
    pub status: String,
    pub version: String,
}

/// Share reachability response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareHealthResponse {
    pub success: bool,
    pub provider: String,
    pub reachable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
