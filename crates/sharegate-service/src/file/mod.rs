//! File listing, upload with folder routing, download, and delete.

pub mod sanitize;
pub mod service;
pub mod upload;

pub use service::FileService;
pub use upload::{ItemError, UploadFile, UploadOutcome, UploadResult};
