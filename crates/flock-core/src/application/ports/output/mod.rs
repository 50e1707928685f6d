//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the init workflow needs from the outside world.
//! The `flock-adapters` crate provides implementations; the CLI provides the
//! progress reporter.

use std::path::Path;

use crate::application::ToolError;
use crate::domain::PackageManifest;
use crate::error::FlockResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `flock_adapters::filesystem::LocalFilesystem` (production)
/// - `flock_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Paths are passed already resolved against the project root.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> FlockResult<()>;

    /// Write content to a file, replacing anything already there.
    fn write_file(&self, path: &Path, content: &str) -> FlockResult<()>;

    /// Write content to a file that must not exist yet.
    fn create_new(&self, path: &Path, content: &str) -> FlockResult<()>;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> FlockResult<String>;

    /// Append raw bytes to an existing file.
    fn append(&self, path: &Path, bytes: &[u8]) -> FlockResult<()>;

    /// Create `link` pointing at `target`.
    ///
    /// `target` is interpreted relative to the directory containing `link`,
    /// as with a relative symlink. A link already pointing at `target` is
    /// left alone; any other file at `link` is replaced.
    fn link(&self, link: &Path, target: &Path) -> FlockResult<()>;
}

/// Port for the Swift package tool.
///
/// Implemented by:
/// - `flock_adapters::package_tool::SwiftPackageManager` (production)
/// - `flock_adapters::package_tool::ScriptedPackageTool` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait PackageTool: Send + Sync {
    /// Dump and parse the host package's manifest.
    fn query_manifest(&self) -> Result<PackageManifest, ToolError>;

    /// Build the flock directory's package.
    fn build(&self, silent: bool) -> Result<(), ToolError>;

    /// Download and resolve the flock directory's dependencies.
    ///
    /// A silent build is the only way to get there before the project
    /// compiles, so that is the default.
    fn prefetch_dependencies(&self) -> Result<(), ToolError> {
        self.build(true)
    }
}

/// A user-visible phase of `flock init`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitStep {
    CreateFiles,
    UpdateGitIgnore,
    FetchDependencies,
}

impl InitStep {
    pub fn started_message(self) -> &'static str {
        match self {
            Self::CreateFiles => "Creating Flock files...",
            Self::UpdateGitIgnore => "Adding Flock files to .gitignore...",
            Self::FetchDependencies => "Downloading and building dependencies...",
        }
    }

    pub fn finished_message(self) -> &'static str {
        match self {
            Self::CreateFiles => "Successfully created Flock files",
            Self::UpdateGitIgnore => "Successfully added Flock files to .gitignore",
            Self::FetchDependencies => "Successfully downloaded dependencies",
        }
    }
}

/// Port for announcing workflow progress.
pub trait ProgressReporter: Send + Sync {
    fn step_started(&self, step: InitStep);
    fn step_finished(&self, step: InitStep);
}

/// Reporter that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn step_started(&self, _step: InitStep) {}
    fn step_finished(&self, _step: InitStep) {}
}
