//! Where the scaffold lives on disk.

use std::fmt;
use std::path::{Path, PathBuf};

/// Deployment environment that gets its own configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Environment {
    Base,
    Production,
    Staging,
}

impl Environment {
    /// Every environment, in creation order.
    pub const ALL: [Environment; 3] = [Self::Base, Self::Production, Self::Staging];

    /// File name inside the deploy directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Base => "Always.swift",
            Self::Production => "Production.swift",
            Self::Staging => "Staging.swift",
        }
    }

    /// Swift class the file declares.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Base => "Base",
            Self::Production => "Production",
            Self::Staging => "Staging",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base => write!(f, "base"),
            Self::Production => write!(f, "production"),
            Self::Staging => write!(f, "staging"),
        }
    }
}

/// Every path the initializer reads or writes.
///
/// Relative paths are stored as-is so they can be written into `.gitignore`
/// and user instructions; [`FlockPaths::resolve`] joins them onto `root` for
/// filesystem access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlockPaths {
    pub root: PathBuf,
    pub flockfile: PathBuf,
    pub flock_directory: PathBuf,
    pub deploy_directory: PathBuf,
    pub dependencies_file: PathBuf,
    pub build_directory: PathBuf,
    pub packages_directory: PathBuf,
    pub gitignore: PathBuf,
}

impl FlockPaths {
    /// Standard layout rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let flock_directory = PathBuf::from(".flock");
        let deploy_directory = PathBuf::from("config").join("deploy");
        Self {
            root: root.into(),
            flockfile: PathBuf::from("Flockfile"),
            dependencies_file: deploy_directory.join("FlockDependencies.json"),
            build_directory: flock_directory.join(".build"),
            packages_directory: flock_directory.join("Packages"),
            gitignore: PathBuf::from(".gitignore"),
            flock_directory,
            deploy_directory,
        }
    }

    /// Join a layout-relative path onto the project root.
    pub fn resolve(&self, relative: &Path) -> PathBuf {
        self.root.join(relative)
    }

    /// Paths whose presence means Flock was already initialised.
    pub fn precondition_paths(&self) -> [&Path; 2] {
        [&self.flock_directory, &self.flockfile]
    }

    /// Layout-relative path of an environment's configuration file.
    pub fn environment_file(&self, env: Environment) -> PathBuf {
        self.deploy_directory.join(env.file_name())
    }

    /// Layout-relative path of the flock directory's entry point.
    pub fn main_file(&self) -> PathBuf {
        self.flock_directory.join("main.swift")
    }

    /// Layout-relative path of the generated dependency package manifest.
    pub fn package_file(&self) -> PathBuf {
        self.flock_directory.join("Package.swift")
    }
}

impl Default for FlockPaths {
    fn default() -> Self {
        Self::new(".")
    }
}
