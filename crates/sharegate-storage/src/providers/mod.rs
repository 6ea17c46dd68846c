//! Share transport implementations.

pub mod local;
pub mod smbclient;

pub use local::LocalShareConnector;
pub use smbclient::SmbClientConnector;
