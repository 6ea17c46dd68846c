//! Bulk downloads bundled into a single ZIP archive.

pub mod builder;

pub use builder::{Archive, ArchiveBuilder, archive_file_name};
