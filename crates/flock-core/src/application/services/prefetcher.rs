//! Warms the local package cache before the first real build.

use tracing::{debug, instrument};

use crate::application::{ToolError, ports::PackageTool};

/// Result of the pre-fetch step. Never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrefetchOutcome {
    Fetched,
    /// The build failed. Expected while the deploy files are unfinished.
    Failed(ToolError),
    /// Disabled by configuration.
    Skipped,
}

pub struct DependencyPrefetcher<'a> {
    tool: &'a dyn PackageTool,
}

impl<'a> DependencyPrefetcher<'a> {
    pub fn new(tool: &'a dyn PackageTool) -> Self {
        Self { tool }
    }

    /// Run the tool once to download dependencies, discarding any failure.
    #[instrument(skip_all)]
    pub fn prefetch(&self) -> PrefetchOutcome {
        match self.tool.prefetch_dependencies() {
            Ok(()) => PrefetchOutcome::Fetched,
            Err(e) => {
                debug!(error = %e, "Pre-fetch build failed (expected)");
                PrefetchOutcome::Failed(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockPackageTool;

    #[test]
    fn build_failure_is_captured() {
        let mut tool = MockPackageTool::new();
        tool.expect_prefetch_dependencies().times(1).returning(|| {
            Err(ToolError::NonZeroExit {
                command: "swift build".into(),
                status: "exit status: 1".into(),
                stderr: "error: no such module 'Flock'".into(),
            })
        });

        let outcome = DependencyPrefetcher::new(&tool).prefetch();
        assert!(matches!(
            outcome,
            PrefetchOutcome::Failed(ToolError::NonZeroExit { .. })
        ));
    }

    #[test]
    fn successful_build_is_fetched() {
        let mut tool = MockPackageTool::new();
        tool.expect_prefetch_dependencies()
            .times(1)
            .returning(|| Ok(()));
        assert_eq!(
            DependencyPrefetcher::new(&tool).prefetch(),
            PrefetchOutcome::Fetched
        );
    }
}
