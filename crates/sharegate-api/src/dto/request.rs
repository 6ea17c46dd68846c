//! Request DTOs.

use serde::{Deserialize, Serialize};

/// `?folder=` query parameter; absent means the base path itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FolderQuery {
    #[serde(default)]
    pub folder: String,
}

/// Body of `POST /api/download-multiple`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DownloadMultipleRequest {
    /// File names inside `folder`.
    #[serde(default)]
    pub files: Vec<String>,
    #[serde(default)]
    pub folder: String,
}
