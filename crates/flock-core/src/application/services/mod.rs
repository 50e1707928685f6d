//! Application services - orchestrate use cases.
//!
//! [`InitService`] is the entry point; the other services are its steps and
//! are public so they can be exercised on their own.

pub mod gitignore;
pub mod init_service;
pub mod introspector;
pub mod prefetcher;
pub mod scaffolder;

pub use gitignore::{GitIgnoreOutcome, GitIgnoreUpdater};
pub use init_service::{InitReport, InitService};
pub use introspector::ManifestIntrospector;
pub use prefetcher::{DependencyPrefetcher, PrefetchOutcome};
pub use scaffolder::{FileScaffolder, ScaffoldReport, SkippedEnvironment};
