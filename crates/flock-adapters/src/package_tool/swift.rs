//! SwiftPM adapter: shells out to the `swift` executable.

use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use tracing::{debug, instrument};

use flock_core::{
    application::{ToolError, ports::PackageTool},
    domain::{FlockPaths, PackageManifest},
};

/// Runs `swift package dump-package` and `swift build`.
///
/// Calls block until the process exits; there is no timeout.
#[derive(Debug, Clone)]
pub struct SwiftPackageManager {
    executable: PathBuf,
    package_root: PathBuf,
    build_root: PathBuf,
}

impl SwiftPackageManager {
    /// `package_root` holds the host `Package.swift`; builds run against the
    /// flock directory inside it.
    pub fn new(executable: impl Into<PathBuf>, paths: &FlockPaths) -> Self {
        Self {
            executable: executable.into(),
            package_root: paths.root.clone(),
            build_root: paths.resolve(&paths.flock_directory),
        }
    }

    fn describe(&self, args: &[&str]) -> String {
        format!("{} {}", self.executable.display(), args.join(" "))
    }

    fn spawn_error(&self, args: &[&str], e: std::io::Error) -> ToolError {
        ToolError::Spawn {
            command: self.describe(args),
            reason: e.to_string(),
        }
    }

    fn check_status(&self, args: &[&str], output: &Output) -> Result<(), ToolError> {
        if output.status.success() {
            return Ok(());
        }
        Err(ToolError::NonZeroExit {
            command: self.describe(args),
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
        })
    }
}

impl PackageTool for SwiftPackageManager {
    #[instrument(skip_all, fields(root = %self.package_root.display()))]
    fn query_manifest(&self) -> Result<PackageManifest, ToolError> {
        const ARGS: [&str; 2] = ["package", "dump-package"];

        let output = Command::new(&self.executable)
            .args(ARGS)
            .current_dir(&self.package_root)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| self.spawn_error(&ARGS, e))?;
        self.check_status(&ARGS, &output)?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        debug!(bytes = stdout.len(), "Manifest dumped");
        PackageManifest::from_json(&stdout).map_err(|e| ToolError::InvalidOutput {
            command: self.describe(&ARGS),
            reason: e.to_string(),
        })
    }

    #[instrument(skip_all, fields(root = %self.build_root.display(), silent = silent))]
    fn build(&self, silent: bool) -> Result<(), ToolError> {
        let build_root = self.build_root.display().to_string();
        let args = ["build", "--package-path", build_root.as_str()];

        let mut command = Command::new(&self.executable);
        command.args(args).stdin(Stdio::null());
        if silent {
            command.stdout(Stdio::null()).stderr(Stdio::null());
        }

        let status = command.status().map_err(|e| self.spawn_error(&args, e))?;
        if status.success() {
            Ok(())
        } else {
            Err(ToolError::NonZeroExit {
                command: self.describe(&args),
                status: status.to_string(),
                stderr: String::new(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_executable_is_spawn_error() {
        let tool = SwiftPackageManager::new(
            "/nonexistent/swift-toolchain/swift",
            &FlockPaths::new("."),
        );
        assert!(matches!(
            tool.query_manifest(),
            Err(ToolError::Spawn { .. })
        ));
        assert!(matches!(tool.build(true), Err(ToolError::Spawn { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn failing_process_is_non_zero_exit() {
        let tool = SwiftPackageManager::new("false", &FlockPaths::new("."));
        assert!(matches!(
            tool.query_manifest(),
            Err(ToolError::NonZeroExit { .. })
        ));
        assert!(matches!(
            tool.prefetch_dependencies(),
            Err(ToolError::NonZeroExit { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn empty_output_is_invalid() {
        let tool = SwiftPackageManager::new("true", &FlockPaths::new("."));
        let err = tool.query_manifest().unwrap_err();
        assert!(matches!(err, ToolError::InvalidOutput { .. }));
        assert!(err.to_string().contains("true package dump-package"));
    }
}
