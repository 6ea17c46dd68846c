//! # sharegate-core
//!
//! Core crate for ShareGate. Contains configuration schemas, the remote path
//! rules, share types, transport traits, and the unified error system.
//!
//! This crate has **no** internal dependencies on other ShareGate crates.

pub mod config;
pub mod error;
pub mod path;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
