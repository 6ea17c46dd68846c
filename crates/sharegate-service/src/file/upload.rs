//! Batch upload with folder routing derived from each filename.

use bytes::Bytes;
use serde::Serialize;
use tracing::{info, warn};

use sharegate_core::error::AppError;
use sharegate_core::path::{extract_folder, join_file_path, resolve_remote_path};
use sharegate_storage::ShareSession;

use super::sanitize::secure_filename;
use super::service::FileService;

/// One file received from the caller.
#[derive(Debug, Clone)]
pub struct UploadFile {
    /// Filename as supplied by the client.
    pub filename: String,
    /// Full file content.
    pub content: Bytes,
}

/// A successfully stored file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadResult {
    pub filename: String,
    #[serde(rename = "folder")]
    pub destination_folder: String,
}

/// A per-item failure inside a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemError {
    pub filename: String,
    pub message: String,
}

impl ItemError {
    pub(crate) fn new(filename: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            message: message.into(),
        }
    }
}

/// Result of a whole upload batch.
#[derive(Debug, Clone, Default)]
pub struct UploadOutcome {
    pub uploaded: Vec<UploadResult>,
    pub errors: Vec<ItemError>,
    pub succeeded_count: usize,
}

impl UploadOutcome {
    /// A batch succeeds when at least one file was stored.
    pub fn is_success(&self) -> bool {
        self.succeeded_count > 0
    }
}

/// Probe whether `path` is a listable directory.
///
/// Any listing failure counts as "does not exist": a permission problem or a
/// transient transport error is indistinguishable from absence here, and the
/// follow-up create call reports the real failure.
pub(crate) async fn directory_exists(session: &ShareSession, path: &str) -> bool {
    session.list(path).await.is_ok()
}

impl FileService {
    /// Store every file under the folder its name routes to.
    ///
    /// One session serves the whole batch. Per-file failures are collected in
    /// the outcome; only a failure to open the session fails the call.
    pub async fn upload_files(&self, files: Vec<UploadFile>) -> Result<UploadOutcome, AppError> {
        let session = self.open_session().await?;
        let mut outcome = UploadOutcome::default();

        for file in files {
            if file.filename.is_empty() {
                continue;
            }
            match self.upload_one(&session, &file).await {
                Ok(result) => {
                    info!(
                        filename = %result.filename,
                        folder = %result.destination_folder,
                        "Uploaded file"
                    );
                    outcome.uploaded.push(result);
                }
                Err(error) => {
                    warn!(filename = %error.filename, error = %error.message, "Upload item failed");
                    outcome.errors.push(error);
                }
            }
        }

        session.close();
        outcome.succeeded_count = outcome.uploaded.len();
        Ok(outcome)
    }

    async fn upload_one(
        &self,
        session: &ShareSession,
        file: &UploadFile,
    ) -> Result<UploadResult, ItemError> {
        let filename = secure_filename(&file.filename);
        if filename.is_empty() {
            return Err(ItemError::new(&file.filename, "Invalid file name"));
        }

        let folder = extract_folder(&filename)
            .ok_or_else(|| ItemError::new(&filename, "Could not extract folder name"))?;

        let folder_path = resolve_remote_path(&self.config.base_path, &folder);
        if !directory_exists(session, &folder_path).await {
            session.create_dir(&folder_path).await.map_err(|e| {
                ItemError::new(
                    &filename,
                    format!("Failed to create folder {folder}: {}", e.message),
                )
            })?;
        }

        let file_path = join_file_path(&folder_path, &filename);
        session
            .store(&file_path, file.content.clone())
            .await
            .map_err(|e| ItemError::new(&filename, e.message))?;

        Ok(UploadResult {
            filename,
            destination_folder: folder,
        })
    }
}
