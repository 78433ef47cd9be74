//! Error taxonomy for sandboxed path validation and file operations.

use std::io;

use thiserror::Error;

/// Errors that can occur during path validation or a sandboxed file operation.
///
/// Paths in these errors are the caller-supplied relative strings, not the
/// resolved absolute paths, so messages never reveal where the sandbox root
/// lives on the host.
#[derive(Debug, Error)]
pub enum SandboxError {
    /// The caller supplied an absolute path.
    #[error("Path '{path}' cannot be absolute")]
    InvalidPath { path: String },

    /// The resolved path is outside the root or the allowed subdirectories,
    /// or (for delete) targets a sandbox boundary directory itself.
    #[error("Path '{path}' is not allowed")]
    NotAllowed { path: String },

    /// The target does not exist where existence was required.
    #[error("Path '{path}' does not exist")]
    NotFound { path: String },

    /// The target already exists where non-existence was required.
    #[error("Path '{path}' already exists")]
    AlreadyExists { path: String },

    /// An underlying filesystem call failed for reasons unrelated to
    /// sandboxing (permissions, disk errors).
    #[error("Could not {operation} '{path}': {source}")]
    Io {
        operation: &'static str,
        path: String,
        #[source]
        source: io::Error,
    },
}

impl SandboxError {
    /// Create a new "invalid path" error.
    pub fn invalid_path(path: impl Into<String>) -> Self {
        Self::InvalidPath { path: path.into() }
    }

    /// Create a new "not allowed" error.
    pub fn not_allowed(path: impl Into<String>) -> Self {
        Self::NotAllowed { path: path.into() }
    }

    /// Create a new "not found" error.
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Create a new "already exists" error.
    pub fn already_exists(path: impl Into<String>) -> Self {
        Self::AlreadyExists { path: path.into() }
    }

    /// Create a new I/O error tagged with the failed operation.
    pub fn io(operation: &'static str, path: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }
}
