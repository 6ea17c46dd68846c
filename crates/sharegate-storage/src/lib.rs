//! # sharegate-storage
//!
//! Share transport implementations for ShareGate and the scoped
//! [`ShareSession`] every operation uses to talk to the share.

pub mod manager;
pub mod providers;
pub mod session;

pub use manager::connector_for;
pub use session::ShareSession;
