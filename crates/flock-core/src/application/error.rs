//! Non-fatal application errors.
//!
//! These describe failures the init workflow tolerates. They are returned by
//! ports and services so the caller can record them, but never escalate to a
//! [`crate::error::FlockError`].

use thiserror::Error;

/// A call into the external package tool failed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ToolError {
    /// The tool could not be started at all (not installed, not on PATH).
    #[error("failed to launch `{command}`: {reason}")]
    Spawn { command: String, reason: String },

    /// The tool ran but reported failure.
    #[error("`{command}` exited with {status}")]
    NonZeroExit {
        command: String,
        status: String,
        stderr: String,
    },

    /// The tool succeeded but its output could not be understood.
    #[error("`{command}` produced unreadable output: {reason}")]
    InvalidOutput { command: String, reason: String },
}

/// Defaults could not be inferred from the host package.
///
/// A dump without a string `name` fails to parse and arrives here as
/// [`ToolError::InvalidOutput`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IntrospectionError {
    #[error("manifest query failed: {0}")]
    Query(#[from] ToolError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_error_converts_into_introspection_error() {
        let err: IntrospectionError = ToolError::Spawn {
            command: "swift package dump-package".into(),
            reason: "No such file or directory".into(),
        }
        .into();
        assert!(err.to_string().contains("dump-package"));
    }
}
