//! Flock Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for `flock init`,
//! which scaffolds a Flock deployment project inside an existing Swift
//! package.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            flock-cli (CLI)              │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  InitService → FileScaffolder →         │
//! │  GitIgnoreUpdater → DependencyPrefetcher│
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, PackageTool, Reporter)     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     flock-adapters (Infrastructure)     │
//! │ (LocalFilesystem, SwiftPackageManager)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use flock_core::prelude::*;
//!
//! let service = InitService::new(FlockPaths::new("."), filesystem, tool);
//! let report = service.execute()?;
//! for line in InitReport::instructions(service.paths()) {
//!     println!("{line}");
//! }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GitIgnoreOutcome, InitReport, InitService, InitStep, IntrospectionError, PrefetchOutcome,
        ScaffoldReport, ToolError,
        ports::{Filesystem, PackageTool, ProgressReporter},
    };
    pub use crate::domain::{
        Environment, FlockPaths, FrameworkType, PackageManifest, ProjectDefaults,
    };
    pub use crate::error::{FlockError, FlockResult};
}
