//! Top-level folder listing.

pub mod service;

pub use service::DirectoryService;
