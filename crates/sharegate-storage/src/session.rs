//! Scoped share sessions.
//!
//! A [`ShareSession`] owns one connection for the duration of a single
//! logical operation. The connection is released exactly once: by an
//! explicit [`ShareSession::close`], or by `Drop` on any other exit path
//! (early return, panic, or a cancelled request future).

use bytes::Bytes;
use tracing::debug;

use sharegate_core::config::ShareConfig;
use sharegate_core::result::AppResult;
use sharegate_core::traits::{ShareConnection, ShareConnector};
use sharegate_core::types::{RemoteEntry, ShareTarget};

/// One authenticated connection, closed when the session ends.
pub struct ShareSession {
    connection: Box<dyn ShareConnection>,
    label: String,
    closed: bool,
}

impl std::fmt::Debug for ShareSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShareSession")
            .field("label", &self.label)
            .field("closed", &self.closed)
            .finish()
    }
}

impl ShareSession {
    /// Resolve the share address from `config` and connect.
    pub async fn open(connector: &dyn ShareConnector, config: &ShareConfig) -> AppResult<Self> {
        let target = ShareTarget::from_config(config)?;
        let connection = connector.connect(&target).await?;
        let label = target.unc();

        debug!(share = %label, provider = connector.provider_type(), "Session opened");
        Ok(Self {
            connection,
            label,
            closed: false,
        })
    }

    /// List the entries of a directory.
    pub async fn list(&self, path: &str) -> AppResult<Vec<RemoteEntry>> {
        self.connection.list(path).await
    }

    /// Create a directory.
    pub async fn create_dir(&self, path: &str) -> AppResult<()> {
        self.connection.create_dir(path).await
    }

    /// Store a file's full content.
    pub async fn store(&self, path: &str, data: Bytes) -> AppResult<()> {
        self.connection.store(path, data).await
    }

    /// Retrieve a file's full content.
    pub async fn retrieve(&self, path: &str) -> AppResult<Bytes> {
        self.connection.retrieve(path).await
    }

    /// Delete a file.
    pub async fn delete(&self, path: &str) -> AppResult<()> {
        self.connection.delete(path).await
    }

    /// End the session and release the transport.
    pub fn close(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        self.connection.close();
        debug!(share = %self.label, "Session closed");
    }
}

impl Drop for ShareSession {
    fn drop(&mut self) {
        self.release();
    }
}
