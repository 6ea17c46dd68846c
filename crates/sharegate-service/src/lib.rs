//! # sharegate-service
//!
//! Share operations for ShareGate. Every public operation opens exactly one
//! [`ShareSession`](sharegate_storage::ShareSession), performs its steps
//! sequentially, and closes the session before returning.

pub mod archive;
pub mod directory;
pub mod file;

#[cfg(test)]
pub(crate) mod testing;

pub use archive::{Archive, ArchiveBuilder};
pub use directory::DirectoryService;
pub use file::{FileService, ItemError, UploadFile, UploadOutcome, UploadResult};
