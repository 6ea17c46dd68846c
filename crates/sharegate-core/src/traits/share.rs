//! Transport traits for reaching a remote share.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;
use crate::types::{RemoteEntry, ShareTarget};

/// Opens authenticated connections to a share.
///
/// The [`ShareConnector`] trait is defined here in `sharegate-core` and
/// implemented in `sharegate-storage`.
#[async_trait]
pub trait ShareConnector: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "smbclient", "local").
    fn provider_type(&self) -> &str;

    /// Establish an authenticated connection to `target`.
    ///
    /// Fails with a `Connection` or `Authentication` error when the share
    /// cannot be reached or rejects the credentials.
    async fn connect(&self, target: &ShareTarget) -> AppResult<Box<dyn ShareConnection>>;
}

/// One connected, authenticated handle to a share.
///
/// All paths are share-relative with `/` separators.
#[async_trait]
pub trait ShareConnection: Send + Sync {
    /// List the entries of a directory.
    async fn list(&self, path: &str) -> AppResult<Vec<RemoteEntry>>;

    /// Create a directory.
    async fn create_dir(&self, path: &str) -> AppResult<()>;

    /// Store `data` as the full content of the file at `path`.
    async fn store(&self, path: &str, data: Bytes) -> AppResult<()>;

    /// Retrieve the full content of the file at `path`.
    async fn retrieve(&self, path: &str) -> AppResult<Bytes>;

    /// Delete the file at `path`.
    async fn delete(&self, path: &str) -> AppResult<()>;

    /// Release the transport. Must not fail and must tolerate repeated calls.
    fn close(&mut self);
}
