//! Application state shared across all handlers.

use std::sync::Arc;

use sharegate_core::config::AppConfig;
use sharegate_core::traits::ShareConnector;
use sharegate_service::{ArchiveBuilder, DirectoryService, FileService};

/// Shared application state, cheaply cloneable.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Folder listing and share probing.
    pub directory_service: Arc<DirectoryService>,
    /// File listing, upload, download, and delete.
    pub file_service: Arc<FileService>,
    /// Bulk download archives.
    pub archive_builder: Arc<ArchiveBuilder>,
}

impl AppState {
    /// Wire every service to the same connector and share settings.
    pub fn new(config: AppConfig, connector: Arc<dyn ShareConnector>) -> Self {
        let share = Arc::new(config.share.clone());

        Self {
            directory_service: Arc::new(DirectoryService::new(
                Arc::clone(&connector),
                Arc::clone(&share),
            )),
            file_service: Arc::new(FileService::new(Arc::clone(&connector), Arc::clone(&share))),
            archive_builder: Arc::new(ArchiveBuilder::new(connector, share)),
            config: Arc::new(config),
        }
    }
}
