//! Resolution of caller-supplied path strings against the sandbox root.

use std::path::{Path, PathBuf};

use super::error::SandboxError;

/// Anchors caller-supplied relative paths at the configured root directory.
///
/// Resolution is purely lexical: the candidate is joined onto the root with
/// no `..` or symlink resolution at this stage. Containment decisions on the
/// joined path belong to [`SandboxPolicy`](super::SandboxPolicy), which
/// compares canonical real paths.
#[derive(Debug, Clone)]
pub struct PathResolver {
    root: PathBuf,
}

impl PathResolver {
    /// Create a resolver anchored at `root`.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// The configured root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a caller-supplied path string to an absolute path under the
    /// root.
    ///
    /// Absolute candidates are rejected before any filesystem access, so a
    /// caller can never name a location outside the root directly.
    pub fn resolve(&self, candidate: &str) -> Result<PathBuf, SandboxError> {
        if Path::new(candidate).is_absolute() {
            return Err(SandboxError::invalid_path(candidate));
        }
        Ok(self.root.join(candidate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_joins_relative_path() {
        let resolver = PathResolver::new(PathBuf::from("/sandbox"));
        let resolved = resolver.resolve("docs/notes.txt").unwrap();
        assert_eq!(resolved, PathBuf::from("/sandbox/docs/notes.txt"));
    }

    #[test]
    fn test_resolve_rejects_absolute_path() {
        let resolver = PathResolver::new(PathBuf::from("/sandbox"));
        let result = resolver.resolve("/etc/passwd");
        assert!(matches!(result, Err(SandboxError::InvalidPath { .. })));
    }

    #[test]
    fn test_resolve_keeps_traversal_segments_unresolved() {
        // `..` segments are not collapsed here; the policy decides on the
        // canonical form later.
        let resolver = PathResolver::new(PathBuf::from("/sandbox"));
        let resolved = resolver.resolve("docs/../other").unwrap();
        assert_eq!(resolved, PathBuf::from("/sandbox/docs/../other"));
    }

    #[test]
    fn test_resolve_never_touches_the_filesystem() {
        // A root that does not exist anywhere still resolves; only the
        // policy and the operations consult the filesystem.
        let resolver = PathResolver::new(PathBuf::from("/no/such/root/anywhere"));
        assert!(resolver.resolve("file.txt").is_ok());
        assert!(matches!(
            resolver.resolve("/abs"),
            Err(SandboxError::InvalidPath { .. })
        ));
    }

    #[test]
    fn test_resolve_empty_candidate_yields_root() {
        let resolver = PathResolver::new(PathBuf::from("/sandbox"));
        let resolved = resolver.resolve("").unwrap();
        assert_eq!(resolved, PathBuf::from("/sandbox/"));
    }
}
