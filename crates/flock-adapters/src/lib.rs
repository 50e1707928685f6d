//! Infrastructure adapters for Flock.
//!
//! This crate implements the ports defined in `flock-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod package_tool;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use package_tool::{ScriptedPackageTool, SwiftPackageManager};
