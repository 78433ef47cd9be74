//! Sandboxed file operations.
//!
//! Every operation follows the same pattern: resolve the caller-supplied
//! path(s), check them against the sandbox policy, and only then touch the
//! filesystem, mapping any underlying failure into [`SandboxError`]. There
//! is no retry logic anywhere; filesystem failures are not assumed
//! transient.

use std::fs;

use crate::core::config::SandboxConfig;
use crate::core::security::{PathResolver, SandboxError, SandboxPolicy};

/// What kind of entry a delete operation removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletedEntry {
    File,
    Directory,
}

impl DeletedEntry {
    /// Human-readable label for result messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Directory => "directory",
        }
    }
}

/// The sandboxed filesystem operations exposed to MCP clients.
///
/// Holds the resolver and the policy built from the immutable sandbox
/// configuration; the service itself carries no mutable state, so it is safe
/// to share across concurrently served tool calls. Validation and the
/// filesystem action are still two separate steps; a caller racing the
/// filesystem between them is an accepted residual risk.
#[derive(Debug, Clone)]
pub struct FileService {
    resolver: PathResolver,
    policy: SandboxPolicy,
}

impl FileService {
    /// Build the service from the sandbox configuration.
    pub fn new(config: &SandboxConfig) -> Self {
        Self {
            resolver: PathResolver::new(config.root_dir.clone()),
            policy: SandboxPolicy::new(config.root_dir.clone(), &config.allowed_subdirs),
        }
    }

    /// List the names of the regular files directly under `directory`,
    /// sorted by name.
    ///
    /// Subdirectories are excluded from the listing rather than reported as
    /// an error.
    pub fn list_files(&self, directory: &str) -> Result<Vec<String>, SandboxError> {
        let full_path = self.resolver.resolve(directory)?;

        if !full_path.is_dir() {
            return Err(SandboxError::not_found(directory));
        }
        if !self.policy.is_allowed(&full_path) {
            return Err(SandboxError::not_allowed(directory));
        }

        let entries =
            fs::read_dir(&full_path).map_err(|e| SandboxError::io("list", directory, e))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| SandboxError::io("list", directory, e))?;
            if entry.path().is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Read the full contents of a file as text.
    pub fn read_file(&self, file_path: &str) -> Result<String, SandboxError> {
        let full_path = self.resolver.resolve(file_path)?;

        if !full_path.is_file() {
            return Err(SandboxError::not_found(file_path));
        }
        if !self.policy.is_allowed(&full_path) {
            return Err(SandboxError::not_allowed(file_path));
        }

        fs::read_to_string(&full_path).map_err(|e| SandboxError::io("read", file_path, e))
    }

    /// Write `content` to a file, fully replacing any existing content.
    ///
    /// Missing parent directories are created first; creating them is
    /// idempotent, and a failure there is reported distinctly from a failure
    /// of the write itself.
    pub fn write_file(&self, file_path: &str, content: &str) -> Result<(), SandboxError> {
        let full_path = self.resolver.resolve(file_path)?;

        if !self.policy.is_allowed(&full_path) {
            return Err(SandboxError::not_allowed(file_path));
        }

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| SandboxError::io("create destination for", file_path, e))?;
        }

        fs::write(&full_path, content).map_err(|e| SandboxError::io("write", file_path, e))
    }

    /// Create a new directory and any missing ancestors.
    ///
    /// An already existing path is an error, not a no-op.
    pub fn create_directory(&self, directory: &str) -> Result<(), SandboxError> {
        let full_path = self.resolver.resolve(directory)?;

        if full_path.exists() {
            return Err(SandboxError::already_exists(directory));
        }
        if !self.policy.is_allowed(&full_path) {
            return Err(SandboxError::not_allowed(directory));
        }

        fs::create_dir_all(&full_path)
            .map_err(|e| SandboxError::io("create directory", directory, e))
    }

    /// Delete a file (single unlink) or a directory (recursive removal).
    ///
    /// The sandbox root and the allowed subdirectories themselves are
    /// protected and can never be deleted. A path that is neither an
    /// existing file nor an existing directory is an error, not a silent
    /// no-op.
    pub fn delete_path(&self, path_str: &str) -> Result<DeletedEntry, SandboxError> {
        let full_path = self.resolver.resolve(path_str)?;

        if !self.policy.is_allowed(&full_path) {
            return Err(SandboxError::not_allowed(path_str));
        }
        if self.policy.is_protected(&full_path) {
            return Err(SandboxError::not_allowed(path_str));
        }

        if full_path.is_dir() {
            fs::remove_dir_all(&full_path)
                .map_err(|e| SandboxError::io("delete", path_str, e))?;
            Ok(DeletedEntry::Directory)
        } else if full_path.is_file() {
            fs::remove_file(&full_path).map_err(|e| SandboxError::io("delete", path_str, e))?;
            Ok(DeletedEntry::File)
        } else {
            Err(SandboxError::not_found(path_str))
        }
    }

    /// Move or rename a file or directory.
    ///
    /// Both endpoints must be allowed. An existing destination is
    /// overwritten per the underlying filesystem semantics, with no
    /// rollback if the rename partially fails.
    pub fn move_file(
        &self,
        source_path: &str,
        destination_path: &str,
    ) -> Result<(), SandboxError> {
        let full_source = self.resolver.resolve(source_path)?;
        let full_destination = self.resolver.resolve(destination_path)?;

        if !self.policy.is_allowed(&full_source) {
            return Err(SandboxError::not_allowed(source_path));
        }
        if !self.policy.is_allowed(&full_destination) {
            return Err(SandboxError::not_allowed(destination_path));
        }
        if !full_source.exists() {
            return Err(SandboxError::not_found(source_path));
        }

        fs::rename(&full_source, &full_destination)
            .map_err(|e| SandboxError::io("move", source_path, e))
    }
}
