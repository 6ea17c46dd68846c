use std::collections::HashSet;
use std::io::{Cursor, Write};
use std::sync::Arc;

use bytes::Bytes;
use tracing::{info, warn};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use sharegate_core::config::ShareConfig;
use sharegate_core::error::{AppError, ErrorKind};
use sharegate_core::path::{is_single_segment, join_file_path, resolve_remote_path};
use sharegate_core::traits::ShareConnector;
use sharegate_storage::ShareSession;

use crate::file::ItemError;

/// Download name for an archive of `folder`.
pub fn archive_file_name(folder: &str) -> String {
    let label = if folder.is_empty() { "root" } else { folder };
    format!("smb-files-{label}.zip")
}

/// A finished archive and what went into it.
#[derive(Debug, Clone)]
pub struct Archive {
    pub file_name: String,
    pub bytes: Bytes,
    /// Member names written, in request order.
    pub included: Vec<String>,
    /// Members that were left out, with the reason.
    pub failed: Vec<ItemError>,
}

/// Retrieves files from one folder and packs them into a ZIP.
#[derive(Debug, Clone)]
pub struct ArchiveBuilder {
    connector: Arc<dyn ShareConnector>,
    config: Arc<ShareConfig>,
}

impl ArchiveBuilder {
    pub fn new(connector: Arc<dyn ShareConnector>, config: Arc<ShareConfig>) -> Self {
        Self { connector, config }
    }

    /// Build an archive of `filenames` from `folder`.
    ///
    /// Members that cannot be retrieved or written are skipped, and a name
    /// repeated in `filenames` is packed once. The archive holds whatever
    /// could be read, possibly nothing.
    pub async fn build_archive(
        &self,
        filenames: &[String],
        folder: &str,
    ) -> Result<Archive, AppError> {
        let session = ShareSession::open(self.connector.as_ref(), &self.config).await?;
        let folder_path = resolve_remote_path(&self.config.base_path, folder);

        let mut members = Vec::new();
        let mut failed = Vec::new();
        let mut seen = HashSet::new();

        for filename in filenames {
            if !seen.insert(filename.as_str()) {
                warn!(filename, "Skipping duplicate archive member");
                failed.push(ItemError::new(filename.as_str(), "Duplicate file name"));
                continue;
            }
            match retrieve_member(&session, &folder_path, filename).await {
                Ok(data) => members.push((filename.clone(), data)),
                Err(e) => {
                    warn!(filename, error = %e.message, "Skipping archive member");
                    failed.push(ItemError::new(filename.as_str(), e.message));
                }
            }
        }

        session.close();

        let (bytes, included) = write_archive(&members, &mut failed)?;

        info!(
            folder,
            included = included.len(),
            failed = failed.len(),
            bytes = bytes.len(),
            "Built archive"
        );

        Ok(Archive {
            file_name: archive_file_name(folder),
            bytes,
            included,
            failed,
        })
    }
}

async fn retrieve_member(
    session: &ShareSession,
    folder_path: &str,
    filename: &str,
) -> Result<Bytes, AppError> {
    if !is_single_segment(filename) {
        return Err(AppError::validation(format!("Invalid file name: {filename}")));
    }
    session.retrieve(&join_file_path(folder_path, filename)).await
}

/// Deflate `members` into an in-memory ZIP, in order.
///
/// A member the writer rejects is recorded in `failed` and left out; only
/// finishing the archive can fail the whole call.
fn write_archive(
    members: &[(String, Bytes)],
    failed: &mut Vec<ItemError>,
) -> Result<(Bytes, Vec<String>), AppError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
    let mut included = Vec::with_capacity(members.len());

    for (filename, data) in members {
        let added = writer
            .start_file(filename.as_str(), options)
            .map_err(|e| format!("Failed to add '{filename}' to archive: {e}"))
            .and_then(|()| {
                writer
                    .write_all(data)
                    .map_err(|e| format!("Failed to write '{filename}' to archive: {e}"))
            });

        match added {
            Ok(()) => included.push(filename.clone()),
            Err(message) => {
                warn!(filename, error = %message, "Skipping archive member");
                failed.push(ItemError::new(filename.as_str(), message));
            }
        }
    }

    let cursor = writer
        .finish()
        .map_err(|e| AppError::with_source(ErrorKind::Archive, "Failed to finish archive", e))?;
    Ok((Bytes::from(cursor.into_inner()), included))
}
