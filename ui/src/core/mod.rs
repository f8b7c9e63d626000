//! Platform-agnostic helpers shared by the report views.

pub mod format;
pub mod loader;
pub mod platform;
