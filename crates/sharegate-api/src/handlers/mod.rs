//! Route handlers organized by domain.

pub mod directory;
pub mod file;
pub mod health;
