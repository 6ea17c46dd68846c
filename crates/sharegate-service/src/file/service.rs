//! File service: list, download, and delete files inside a folder.

use std::sync::Arc;

use bytes::Bytes;
use tracing::info;

use sharegate_core::config::ShareConfig;
use sharegate_core::error::{AppError, ErrorKind};
use sharegate_core::path::{is_single_segment, join_file_path, listing_path, resolve_remote_path};
use sharegate_core::traits::ShareConnector;
use sharegate_core::types::RemoteEntry;
use sharegate_storage::ShareSession;

/// File operations against the configured share.
#[derive(Debug, Clone)]
pub struct FileService {
    /// Transport used to open sessions.
    pub(crate) connector: Arc<dyn ShareConnector>,
    /// Share settings.
    pub(crate) config: Arc<ShareConfig>,
}

impl FileService {
    /// Creates a new file service.
    pub fn new(connector: Arc<dyn ShareConnector>, config: Arc<ShareConfig>) -> Self {
        Self { connector, config }
    }

    pub(crate) async fn open_session(&self) -> Result<ShareSession, AppError> {
        ShareSession::open(self.connector.as_ref(), &self.config).await
    }

    /// Share-relative path of `filename` inside `folder`.
    fn file_path(&self, filename: &str, folder: &str) -> Result<String, AppError> {
        if !is_single_segment(filename) {
            return Err(AppError::validation(format!("Invalid file name: {filename}")));
        }
        let folder_path = resolve_remote_path(&self.config.base_path, folder);
        Ok(join_file_path(&folder_path, filename))
    }

    /// Files (not directories) in `folder`, in the order the share reports them.
    pub async fn list_files(&self, folder: &str) -> Result<Vec<RemoteEntry>, AppError> {
        let session = self.open_session().await?;
        let path = resolve_remote_path(&self.config.base_path, folder);
        let listed = session.list(listing_path(&path)).await;
        session.close();

        let entries = listed.map_err(|e| {
            AppError::with_source(
                ErrorKind::Listing,
                format!("Failed to list files in '{folder}': {}", e.message),
                e,
            )
        })?;

        Ok(entries
            .into_iter()
            .filter(|entry| !entry.is_directory)
            .collect())
    }

    /// Full content of `filename` in `folder`.
    pub async fn download_file(&self, filename: &str, folder: &str) -> Result<Bytes, AppError> {
        let path = self.file_path(filename, folder)?;

        let session = self.open_session().await?;
        let retrieved = session.retrieve(&path).await;
        session.close();

        let data = retrieved.map_err(|e| transfer_error("download", filename, e))?;
        info!(path, bytes = data.len(), "Downloaded file");
        Ok(data)
    }

    /// Delete `filename` from `folder`.
    pub async fn delete_file(&self, filename: &str, folder: &str) -> Result<(), AppError> {
        let path = self.file_path(filename, folder)?;

        let session = self.open_session().await?;
        let deleted = session.delete(&path).await;
        session.close();

        deleted.map_err(|e| transfer_error("delete", filename, e))?;
        info!(path, "Deleted file");
        Ok(())
    }
}

/// Keep not-found distinct; everything else becomes a transfer failure.
fn transfer_error(action: &str, filename: &str, err: AppError) -> AppError {
    let kind = match err.kind {
        ErrorKind::NotFound | ErrorKind::Validation => err.kind,
        _ => ErrorKind::Transfer,
    };
    AppError::with_source(
        kind,
        format!("Failed to {action} '{filename}': {}", err.message),
        err,
    )
}
