//! Shared domain types.

pub mod entry;
pub mod target;

pub use entry::RemoteEntry;
pub use target::ShareTarget;
