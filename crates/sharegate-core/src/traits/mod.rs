//! Core traits defined in `sharegate-core` and implemented by other crates.

pub mod share;

pub use share::{ShareConnection, ShareConnector};
