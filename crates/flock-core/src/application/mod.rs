//! Application layer for Flock.
//!
//! This layer contains:
//! - **Services**: the init workflow and its steps
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: non-fatal failures the workflow records and moves past
//!
//! The application layer sequences the domain layer; file contents and
//! manifest inference rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    DependencyPrefetcher, FileScaffolder, GitIgnoreOutcome, GitIgnoreUpdater, InitReport,
    InitService, ManifestIntrospector, PrefetchOutcome, ScaffoldReport, SkippedEnvironment,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, InitStep, NoopReporter, PackageTool, ProgressReporter};

pub use error::{IntrospectionError, ToolError};
