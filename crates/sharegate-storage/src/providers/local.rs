//! Local directory standing in for a remote share.
//!
//! Each share name maps to `<root>/<share name>`; paths inside it are
//! share-relative. Used for development and for exercising the services
//! without a Samba server.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use tokio::fs;
use tracing::debug;

use sharegate_core::error::{AppError, ErrorKind};
use sharegate_core::result::AppResult;
use sharegate_core::traits::{ShareConnection, ShareConnector};
use sharegate_core::types::{RemoteEntry, ShareTarget};

/// Connector serving shares out of a local directory.
#[derive(Debug, Clone)]
pub struct LocalShareConnector {
    /// Directory holding one subdirectory per share name.
    root: PathBuf,
}

impl LocalShareConnector {
    /// Create a connector rooted at the given path, creating it if needed.
    pub async fn new(root_path: &str) -> AppResult<Self> {
        let root = PathBuf::from(root_path);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Configuration,
                format!("Failed to create local share root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }
}

#[async_trait]
impl ShareConnector for LocalShareConnector {
    fn provider_type(&self) -> &str {
        "local"
    }

    async fn connect(&self, target: &ShareTarget) -> AppResult<Box<dyn ShareConnection>> {
        let share_root = self.root.join(&target.share_name);
        fs::create_dir_all(&share_root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Connection,
                format!("Failed to open local share: {}", share_root.display()),
                e,
            )
        })?;
        Ok(Box::new(LocalShareConnection { share_root }))
    }
}

/// Connection to one local share directory.
#[derive(Debug)]
pub struct LocalShareConnection {
    share_root: PathBuf,
}

impl LocalShareConnection {
    /// Resolve a share-relative path, refusing to leave the share root.
    fn resolve(&self, path: &str) -> AppResult<PathBuf> {
        let clean = path.replace('\\', "/");
        let relative = Path::new(clean.trim_start_matches('/'));
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return Err(AppError::validation(format!("Path escapes share: {path}")));
        }
        Ok(self.share_root.join(relative))
    }
}

fn map_io(err: std::io::Error, kind: ErrorKind, message: String) -> AppError {
    if err.kind() == std::io::ErrorKind::NotFound {
        AppError::with_source(ErrorKind::NotFound, message, err)
    } else {
        AppError::with_source(kind, message, err)
    }
}

#[async_trait]
impl ShareConnection for LocalShareConnection {
    async fn list(&self, path: &str) -> AppResult<Vec<RemoteEntry>> {
        let full_path = self.resolve(path)?;
        let mut dir = fs::read_dir(&full_path).await.map_err(|e| {
            map_io(e, ErrorKind::Listing, format!("Failed to list directory: {path}"))
        })?;

        let mut entries = Vec::new();
        while let Some(entry) = dir.next_entry().await? {
            let meta = entry.metadata().await?;
            let modified_at = meta
                .modified()
                .map(DateTime::<Utc>::from)
                .unwrap_or_else(|_| Utc::now());

            entries.push(RemoteEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_directory: meta.is_dir(),
                size_bytes: if meta.is_dir() { 0 } else { meta.len() },
                modified_at,
            });
        }

        Ok(entries)
    }

    async fn create_dir(&self, path: &str) -> AppResult<()> {
        let full_path = self.resolve(path)?;
        fs::create_dir_all(&full_path).await.map_err(|e| {
            map_io(e, ErrorKind::Transfer, format!("Failed to create directory: {path}"))
        })?;
        debug!(path, "Created directory");
        Ok(())
    }

    async fn store(&self, path: &str, data: Bytes) -> AppResult<()> {
        let full_path = self.resolve(path)?;
        fs::write(&full_path, &data)
            .await
            .map_err(|e| map_io(e, ErrorKind::Transfer, format!("Failed to write file: {path}")))?;
        debug!(path, bytes = data.len(), "Wrote file");
        Ok(())
    }

    async fn retrieve(&self, path: &str) -> AppResult<Bytes> {
        let full_path = self.resolve(path)?;
        let data = fs::read(&full_path)
            .await
            .map_err(|e| map_io(e, ErrorKind::Transfer, format!("Failed to read file: {path}")))?;
        Ok(Bytes::from(data))
    }

    async fn delete(&self, path: &str) -> AppResult<()> {
        let full_path = self.resolve(path)?;
        fs::remove_file(&full_path).await.map_err(|e| {
            map_io(e, ErrorKind::Transfer, format!("Failed to delete file: {path}"))
        })?;
        debug!(path, "Deleted file");
        Ok(())
    }

    fn close(&mut self) {}
}
