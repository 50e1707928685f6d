//! Unified error handling for Flock Core.
//!
//! Only two conditions are fatal to an init run: the project is already
//! initialised, or an operation required for a usable scaffold failed.
//! Everything else (manifest introspection, per-environment files, the
//! dependency pre-fetch) is captured in a report value by the caller and
//! never surfaces as a [`FlockError`].

use std::path::PathBuf;
use thiserror::Error;

/// Root error type for Flock Core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FlockError {
    /// A root artifact (`Flockfile` or `.flock`) already exists.
    #[error("Flock has already been initialized: {} must not already exist", path.display())]
    AlreadyInitialized { path: PathBuf },

    /// A filesystem or stream operation needed by the scaffold failed.
    #[error("Failed to {operation} at {}: {reason}", path.display())]
    OperationFailed {
        operation: &'static str,
        path: PathBuf,
        reason: String,
    },
}

impl FlockError {
    /// Shorthand for building an [`FlockError::OperationFailed`].
    pub fn operation_failed(
        operation: &'static str,
        path: impl Into<PathBuf>,
        reason: impl ToString,
    ) -> Self {
        Self::OperationFailed {
            operation,
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::AlreadyInitialized { path } => vec![
                format!("'{}' is left over from a previous initialization", path.display()),
                "Flock is already set up in this directory; nothing was changed".into(),
                format!("To start over, remove it first: rm -rf {}", path.display()),
            ],
            Self::OperationFailed { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Files written before the failure were left in place".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::AlreadyInitialized { .. } => ErrorCategory::Precondition,
            Self::OperationFailed { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Precondition,
    Internal,
}

/// Convenient result type alias.
pub type FlockResult<T> = Result<T, FlockError>;

/// Extension trait for turning I/O-ish errors into [`FlockError::OperationFailed`].
pub trait Context<T> {
    /// Attach the failed operation and the path it touched.
    fn context(self, operation: &'static str, path: impl Into<PathBuf>) -> FlockResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, operation: &'static str, path: impl Into<PathBuf>) -> FlockResult<T> {
        self.map_err(|e| FlockError::operation_failed(operation, path, e))
    }
}
