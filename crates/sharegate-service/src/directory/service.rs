//! Directory service: lists the folders under the configured base path.

use std::sync::Arc;

use sharegate_core::config::ShareConfig;
use sharegate_core::error::{AppError, ErrorKind};
use sharegate_core::path::{listing_path, resolve_remote_path};
use sharegate_core::traits::ShareConnector;
use sharegate_storage::ShareSession;

/// Lists subdirectories of the base path.
#[derive(Debug, Clone)]
pub struct DirectoryService {
    /// Transport used to open sessions.
    connector: Arc<dyn ShareConnector>,
    /// Share settings.
    config: Arc<ShareConfig>,
}

impl DirectoryService {
    /// Creates a new directory service.
    pub fn new(connector: Arc<dyn ShareConnector>, config: Arc<ShareConfig>) -> Self {
        Self { connector, config }
    }

    /// Names of all folders directly under the base path, sorted ascending.
    pub async fn list_directories(&self) -> Result<Vec<String>, AppError> {
        let session = ShareSession::open(self.connector.as_ref(), &self.config).await?;
        let root = resolve_remote_path(&self.config.base_path, "");
        let listed = session.list(listing_path(&root)).await;
        session.close();

        let entries = listed.map_err(|e| {
            AppError::with_source(
                ErrorKind::Listing,
                format!("Failed to list directories: {}", e.message),
                e,
            )
        })?;

        let mut directories: Vec<String> = entries
            .into_iter()
            .filter(|entry| entry.is_directory && !entry.is_pseudo())
            .map(|entry| entry.name)
            .collect();
        directories.sort();

        Ok(directories)
    }

    /// Open and close one session to check that the share is reachable.
    pub async fn probe_share(&self) -> Result<(), AppError> {
        let session = ShareSession::open(self.connector.as_ref(), &self.config).await?;
        session.close();
        Ok(())
    }

    /// Name of the transport in use.
    pub fn provider(&self) -> &str {
        self.connector.provider_type()
    }
}
