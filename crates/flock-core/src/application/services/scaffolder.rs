//! Materialises the scaffold on disk.
//!
//! Each artifact has its own idempotence rule:
//!
//! | Artifact              | Rule                                            |
//! |-----------------------|-------------------------------------------------|
//! | `Flockfile`           | written unconditionally                         |
//! | deploy directory      | created unconditionally, OS failure is fatal    |
//! | environment files     | created only if absent, failures discarded      |
//! | dependency descriptor | written only if absent, presence is not an error|
//! | flock directory       | created fresh, failures are fatal               |

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        IntrospectionError,
        ports::{Filesystem, PackageTool},
        services::introspector::ManifestIntrospector,
    },
    domain::{DependencyList, Environment, FlockPaths, ProjectDefaults, content},
    error::{FlockError, FlockResult},
};

/// An environment file that was not written, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEnvironment {
    pub environment: Environment,
    pub error: FlockError,
}

/// What the scaffolder did, including the failures it tolerated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    /// Defaults rendered into the base environment.
    pub defaults: ProjectDefaults,
    /// Why introspection fell back to placeholders, if it did.
    pub introspection_error: Option<IntrospectionError>,
    /// Environment files left untouched.
    pub skipped_environments: Vec<SkippedEnvironment>,
    /// `false` when a dependency descriptor was already present.
    pub dependencies_file_written: bool,
}

impl ScaffoldReport {
    pub fn is_skipped(&self, environment: Environment) -> bool {
        self.skipped_environments
            .iter()
            .any(|s| s.environment == environment)
    }
}

pub struct FileScaffolder<'a> {
    paths: &'a FlockPaths,
    filesystem: &'a dyn Filesystem,
    tool: &'a dyn PackageTool,
}

impl<'a> FileScaffolder<'a> {
    pub fn new(
        paths: &'a FlockPaths,
        filesystem: &'a dyn Filesystem,
        tool: &'a dyn PackageTool,
    ) -> Self {
        Self {
            paths,
            filesystem,
            tool,
        }
    }

    /// Create every artifact of the scaffold.
    ///
    /// Does not check whether Flock is already initialised; that is the
    /// workflow's job and must happen before this is called.
    #[instrument(skip_all, fields(root = %self.paths.root.display()))]
    pub fn scaffold(&self) -> FlockResult<ScaffoldReport> {
        let flockfile = self.paths.resolve(&self.paths.flockfile);
        self.filesystem.write_file(&flockfile, &content::flockfile())?;

        self.filesystem
            .create_dir_all(&self.paths.resolve(&self.paths.deploy_directory))?;

        let (defaults, introspection_error) = match ManifestIntrospector::new(self.tool).introspect()
        {
            Ok(defaults) => (defaults, None),
            Err(e) => {
                debug!(error = %e, "Falling back to placeholder defaults");
                (ProjectDefaults::placeholder(), Some(e))
            }
        };

        let mut skipped_environments = Vec::new();
        for environment in Environment::ALL {
            let lines = match environment {
                Environment::Base => content::base_environment_lines(&defaults),
                Environment::Production | Environment::Staging => {
                    content::environment_example_lines()
                }
            };

            if let Err(error) = self.create_environment(environment, &lines) {
                debug!(%environment, %error, "Environment file skipped");
                skipped_environments.push(SkippedEnvironment { environment, error });
            }
        }

        let dependencies_file = self.paths.resolve(&self.paths.dependencies_file);
        let dependencies_file_written = if self.filesystem.exists(&dependencies_file) {
            debug!(path = %dependencies_file.display(), "Keeping existing dependency descriptor");
            false
        } else {
            self.filesystem
                .write_file(&dependencies_file, &content::dependencies_file())?;
            true
        };

        self.form_flock_directory()?;

        info!(
            skipped = skipped_environments.len(),
            inferred = introspection_error.is_none(),
            "Scaffold written"
        );

        Ok(ScaffoldReport {
            defaults,
            introspection_error,
            skipped_environments,
            dependencies_file_written,
        })
    }

    /// Write one environment file, refusing to overwrite an existing one.
    pub fn create_environment(&self, environment: Environment, lines: &[String]) -> FlockResult<()> {
        let path = self.paths.resolve(&self.paths.environment_file(environment));
        self.filesystem
            .create_new(&path, &content::environment_file(environment, lines))
    }

    /// Build the hidden directory SwiftPM compiles the deployment from.
    ///
    /// It links the Flockfile in as `main.swift`, links every environment
    /// file, and carries a `Package.swift` generated from the dependency
    /// descriptor.
    fn form_flock_directory(&self) -> FlockResult<()> {
        let paths = self.paths;
        self.filesystem
            .create_dir_all(&paths.resolve(&paths.flock_directory))?;

        self.filesystem.link(
            &paths.resolve(&paths.main_file()),
            &self.from_flock_directory(&paths.flockfile),
        )?;

        for environment in Environment::ALL {
            let file = paths.environment_file(environment);
            if !self.filesystem.exists(&paths.resolve(&file)) {
                warn!(%environment, "Environment file missing, not linking");
                continue;
            }
            let link = paths.flock_directory.join(environment.file_name());
            self.filesystem
                .link(&paths.resolve(&link), &self.from_flock_directory(&file))?;
        }

        let descriptor = paths.resolve(&paths.dependencies_file);
        let json = self.filesystem.read_to_string(&descriptor)?;
        let dependencies = DependencyList::from_json(&json)
            .map_err(|e| FlockError::operation_failed("parse dependencies", &descriptor, e))?;

        self.filesystem.write_file(
            &paths.resolve(&paths.package_file()),
            &content::package_manifest(&dependencies),
        )
    }

    /// Express a root-relative path as seen from inside the flock directory.
    fn from_flock_directory(&self, relative: &Path) -> PathBuf {
        self.paths
            .flock_directory
            .components()
            .map(|_| Path::new(".."))
            .collect::<PathBuf>()
            .join(relative)
    }
}
