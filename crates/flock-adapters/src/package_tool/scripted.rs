//! Scripted package tool for testing.

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use flock_core::{
    application::{ToolError, ports::PackageTool},
    domain::PackageManifest,
};

/// Package tool that replays canned results and counts calls.
///
/// Cloning shares the counters. By default the manifest query fails (as if
/// `swift` were not installed) and builds fail (as an incomplete deployment
/// project would).
#[derive(Debug, Clone)]
pub struct ScriptedPackageTool {
    manifest: Arc<Mutex<Result<PackageManifest, ToolError>>>,
    build_result: Arc<Mutex<Result<(), ToolError>>>,
    manifest_queries: Arc<AtomicUsize>,
    builds: Arc<AtomicUsize>,
    silent_builds: Arc<AtomicUsize>,
}

impl ScriptedPackageTool {
    pub fn new() -> Self {
        Self {
            manifest: Arc::new(Mutex::new(Err(ToolError::Spawn {
                command: "swift package dump-package".into(),
                reason: "scripted: no manifest".into(),
            }))),
            build_result: Arc::new(Mutex::new(Err(ToolError::NonZeroExit {
                command: "swift build".into(),
                status: "exit status: 1".into(),
                stderr: "scripted: build failed".into(),
            }))),
            manifest_queries: Arc::new(AtomicUsize::new(0)),
            builds: Arc::new(AtomicUsize::new(0)),
            silent_builds: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Answer manifest queries with `manifest`.
    pub fn with_manifest(self, manifest: PackageManifest) -> Self {
        if let Ok(mut slot) = self.manifest.lock() {
            *slot = Ok(manifest);
        }
        self
    }

    /// Answer manifest queries by parsing `json`, as the real tool would.
    pub fn with_manifest_json(self, json: &str) -> Self {
        let parsed = PackageManifest::from_json(json).map_err(|e| ToolError::InvalidOutput {
            command: "swift package dump-package".into(),
            reason: e.to_string(),
        });
        if let Ok(mut slot) = self.manifest.lock() {
            *slot = parsed;
        }
        self
    }

    /// Make builds return `result`.
    pub fn with_build_result(self, result: Result<(), ToolError>) -> Self {
        if let Ok(mut slot) = self.build_result.lock() {
            *slot = result;
        }
        self
    }

    pub fn manifest_queries(&self) -> usize {
        self.manifest_queries.load(Ordering::SeqCst)
    }

    pub fn builds(&self) -> usize {
        self.builds.load(Ordering::SeqCst)
    }

    pub fn silent_builds(&self) -> usize {
        self.silent_builds.load(Ordering::SeqCst)
    }
}

impl Default for ScriptedPackageTool {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageTool for ScriptedPackageTool {
    fn query_manifest(&self) -> Result<PackageManifest, ToolError> {
        self.manifest_queries.fetch_add(1, Ordering::SeqCst);
        self.manifest
            .lock()
            .map_err(|_| ToolError::Spawn {
                command: "swift package dump-package".into(),
                reason: "scripted: lock poisoned".into(),
            })?
            .clone()
    }

    fn build(&self, silent: bool) -> Result<(), ToolError> {
        self.builds.fetch_add(1, Ordering::SeqCst);
        if silent {
            self.silent_builds.fetch_add(1, Ordering::SeqCst);
        }
        self.build_result
            .lock()
            .map_err(|_| ToolError::Spawn {
                command: "swift build".into(),
                reason: "scripted: lock poisoned".into(),
            })?
            .clone()
    }
}
