//! Init Service - the `flock init` workflow.
//!
//! Steps run strictly in order, each finishing before the next starts:
//! 1. Refuse to run if Flock is already initialised (nothing mutated)
//! 2. Scaffold files (fatal on failure, no rollback)
//! 3. Update `.gitignore` (fatal on failure)
//! 4. Pre-fetch dependencies (failure discarded)

use std::path::Path;

use tracing::{info, instrument};

use crate::{
    application::{
        ports::{Filesystem, InitStep, NoopReporter, PackageTool, ProgressReporter},
        services::{
            gitignore::{GitIgnoreOutcome, GitIgnoreUpdater},
            prefetcher::{DependencyPrefetcher, PrefetchOutcome},
            scaffolder::{FileScaffolder, ScaffoldReport},
        },
    },
    domain::{Environment, FlockPaths},
    error::{FlockError, FlockResult},
};

/// Everything a successful run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitReport {
    pub scaffold: ScaffoldReport,
    pub gitignore: GitIgnoreOutcome,
    pub prefetch: PrefetchOutcome,
}

impl InitReport {
    /// Follow-up steps for the user, referencing the generated paths.
    ///
    /// Paths are shown relative to the working directory: prefixed with the
    /// project root unless it is `.`.
    pub fn instructions(paths: &FlockPaths) -> Vec<String> {
        let shown = |relative: &Path| {
            if paths.root == Path::new(".") {
                relative.display().to_string()
            } else {
                paths.resolve(relative).display().to_string()
            }
        };
        let env = |e: Environment| shown(&paths.environment_file(e));
        vec![
            format!(
                "1. Add `exclude: [\"{}\"]` to the end of your {}",
                paths.flockfile.display(),
                shown(Path::new("Package.swift"))
            ),
            format!(
                "2. Update the required fields in {}",
                env(Environment::Base)
            ),
            format!(
                "3. Add your servers to {} and {}",
                env(Environment::Production),
                env(Environment::Staging)
            ),
            format!(
                "4. List any additional Flock plugins in {}",
                shown(&paths.dependencies_file)
            ),
        ]
    }
}

/// Orchestrates initialisation against injected adapters.
pub struct InitService {
    paths: FlockPaths,
    filesystem: Box<dyn Filesystem>,
    tool: Box<dyn PackageTool>,
    reporter: Box<dyn ProgressReporter>,
    fetch_dependencies: bool,
}

impl InitService {
    /// Create a new init service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use flock_core::application::InitService;
    /// use flock_core::domain::FlockPaths;
    ///
    /// let service = InitService::new(
    ///     FlockPaths::new("."),
    ///     filesystem, // impl Filesystem
    ///     tool,       // impl PackageTool
    /// );
    /// let report = service.execute()?;
    /// ```
    pub fn new(
        paths: FlockPaths,
        filesystem: Box<dyn Filesystem>,
        tool: Box<dyn PackageTool>,
    ) -> Self {
        Self {
            paths,
            filesystem,
            tool,
            reporter: Box::new(NoopReporter),
            fetch_dependencies: true,
        }
    }

    /// Announce steps through `reporter`.
    pub fn with_reporter(mut self, reporter: Box<dyn ProgressReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Enable or disable the dependency pre-fetch.
    pub fn with_prefetch(mut self, enabled: bool) -> Self {
        self.fetch_dependencies = enabled;
        self
    }

    pub fn paths(&self) -> &FlockPaths {
        &self.paths
    }

    /// Run the whole workflow.
    #[instrument(skip_all, fields(root = %self.paths.root.display()))]
    pub fn execute(&self) -> FlockResult<InitReport> {
        self.check_not_initialized()?;

        let scaffold = self.step(InitStep::CreateFiles, || {
            FileScaffolder::new(&self.paths, self.filesystem.as_ref(), self.tool.as_ref())
                .scaffold()
        })?;

        let gitignore = self.step(InitStep::UpdateGitIgnore, || {
            GitIgnoreUpdater::new(&self.paths, self.filesystem.as_ref()).update()
        })?;

        let prefetch = if self.fetch_dependencies {
            self.step(InitStep::FetchDependencies, || {
                Ok(DependencyPrefetcher::new(self.tool.as_ref()).prefetch())
            })?
        } else {
            info!("Dependency pre-fetch disabled");
            PrefetchOutcome::Skipped
        };

        info!(?gitignore, ?prefetch, "Flock initialized");
        Ok(InitReport {
            scaffold,
            gitignore,
            prefetch,
        })
    }

    /// Fail if either root artifact exists. Runs before any mutation.
    pub fn check_not_initialized(&self) -> FlockResult<()> {
        for path in self.paths.precondition_paths() {
            if self.filesystem.exists(&self.paths.resolve(path)) {
                return Err(FlockError::AlreadyInitialized {
                    path: path.to_path_buf(),
                });
            }
        }
        Ok(())
    }

    fn step<T>(&self, step: InitStep, run: impl FnOnce() -> FlockResult<T>) -> FlockResult<T> {
        self.reporter.step_started(step);
        let value = run()?;
        self.reporter.step_finished(step);
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockFilesystem, MockPackageTool};
    use std::sync::{Arc, Mutex};

    #[derive(Default, Clone)]
    struct RecordingReporter {
        events: Arc<Mutex<Vec<String>>>,
    }

    impl ProgressReporter for RecordingReporter {
        fn step_started(&self, step: InitStep) {
            self.events.lock().unwrap().push(step.started_message().into());
        }
        fn step_finished(&self, step: InitStep) {
            self.events.lock().unwrap().push(step.finished_message().into());
        }
    }

    #[test]
    fn existing_flockfile_blocks_without_mutation() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .returning(|p| p == Path::new("/proj/Flockfile"));
        // No write/create/append expectations: any mutation panics.
        let tool = MockPackageTool::new();

        let service = InitService::new(FlockPaths::new("/proj"), Box::new(fs), Box::new(tool));
        let err = service.execute().unwrap_err();
        assert_eq!(
            err,
            FlockError::AlreadyInitialized {
                path: "Flockfile".into()
            }
        );
    }

    #[test]
    fn existing_flock_directory_blocks_without_mutation() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .times(1)
            .returning(|p| p == Path::new("/proj/.flock"));
        let service = InitService::new(
            FlockPaths::new("/proj"),
            Box::new(fs),
            Box::new(MockPackageTool::new()),
        );
        assert!(matches!(
            service.execute(),
            Err(FlockError::AlreadyInitialized { .. })
        ));
    }

    #[test]
    fn failed_step_is_not_reported_finished() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_write_file()
            .returning(|p, _| Err(FlockError::operation_failed("write", p, "disk full")));
        let reporter = RecordingReporter::default();
        let events = reporter.events.clone();

        let service = InitService::new(
            FlockPaths::new("/proj"),
            Box::new(fs),
            Box::new(MockPackageTool::new()),
        )
        .with_reporter(Box::new(reporter));

        assert!(service.execute().is_err());
        assert_eq!(*events.lock().unwrap(), vec!["Creating Flock files..."]);
    }

    #[test]
    fn instructions_reference_deploy_files() {
        let steps = InitReport::instructions(&FlockPaths::default());
        assert_eq!(
            steps[0],
            "1. Add `exclude: [\"Flockfile\"]` to the end of your Package.swift"
        );
        assert!(steps[1].ends_with(" config/deploy/Always.swift"));
        assert!(steps[2].contains("Production.swift"));
        assert!(steps[2].contains("Staging.swift"));
        assert!(steps[3].ends_with(" config/deploy/FlockDependencies.json"));
    }

    #[test]
    fn instructions_prefix_non_default_root() {
        let steps = InitReport::instructions(&FlockPaths::new("/srv/api"));
        assert!(steps[0].ends_with(" /srv/api/Package.swift"));
        assert!(steps[1].ends_with(" /srv/api/config/deploy/Always.swift"));
        assert!(steps[2].contains("/srv/api/config/deploy/Production.swift"));
        assert!(steps[3].ends_with(" /srv/api/config/deploy/FlockDependencies.json"));
    }
}
