//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `flock-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `PackageTool`: Manifest dump and builds via SwiftPM
//!   - `ProgressReporter`: Step announcements (implemented by the CLI)

pub mod output;

pub use output::{Filesystem, InitStep, NoopReporter, PackageTool, ProgressReporter};

#[cfg(test)]
pub use output::{MockFilesystem, MockPackageTool};
