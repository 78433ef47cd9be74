//! Sandbox containment policy.
//!
//! Decides whether a resolved path lies inside the configured sandbox. Every
//! decision compares canonical real paths: both the candidate and the
//! boundary directories are resolved through symlinks and `.`/`..` segments
//! before any containment check. Raw string-prefix comparison is not enough
//! here; a symlink or a `..` segment can make a path that textually starts
//! with the root point anywhere on the host.

use std::ffi::OsString;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Allow/deny decisions for resolved absolute paths.
///
/// A path is allowed iff its canonical real form lies within the root
/// directory AND within at least one allow-listed subdirectory. An empty
/// allow-list permits nothing.
#[derive(Debug, Clone)]
pub struct SandboxPolicy {
    root: PathBuf,
    allowed: Vec<PathBuf>,
}

impl SandboxPolicy {
    /// Build a policy from the root directory and the allow-listed
    /// subdirectory names, each interpreted relative to the root.
    pub fn new(root: PathBuf, subdirs: &[String]) -> Self {
        let allowed = subdirs.iter().map(|s| root.join(s)).collect();
        Self { root, allowed }
    }

    /// Whether `path` lies within the root and within at least one allowed
    /// subdirectory, after resolving both sides to canonical real form.
    ///
    /// Canonicalization failures (symlink loops, permission errors,
    /// dangling symlinks) fail closed: the path is reported as not allowed.
    pub fn is_allowed(&self, path: &Path) -> bool {
        let Ok(real) = canonicalize_lenient(path) else {
            return false;
        };
        let Ok(real_root) = self.root.canonicalize() else {
            return false;
        };
        if !real.starts_with(&real_root) {
            return false;
        }
        self.allowed
            .iter()
            .any(|dir| match canonicalize_lenient(dir) {
                Ok(real_dir) => real.starts_with(&real_dir),
                Err(_) => false,
            })
    }

    /// Whether `path` is a sandbox boundary directory: the root itself or
    /// the top level of an allowed subdirectory.
    ///
    /// Protected paths may never be deleted. Fails closed: a path that
    /// cannot be canonicalized is reported as protected.
    pub fn is_protected(&self, path: &Path) -> bool {
        let Ok(real) = canonicalize_lenient(path) else {
            return true;
        };
        if self.root.canonicalize().is_ok_and(|r| r == real) {
            return true;
        }
        self.allowed
            .iter()
            .any(|dir| dir.canonicalize().is_ok_and(|d| d == real))
    }
}

enum Tail {
    Parent,
    Normal(OsString),
}

/// Canonicalize a path whose tail may not exist yet.
///
/// The longest existing ancestor is canonicalized through the filesystem and
/// the remaining components are reapplied lexically (`.` skipped, `..`
/// popped). Components that do not exist cannot be symlinks, so the lexical
/// tail cannot hide an escape from the containment check. A dangling symlink
/// is not a missing component: it still occupies its lexical position, and
/// resolving past it would follow the link target, so it is rejected.
fn canonicalize_lenient(path: &Path) -> io::Result<PathBuf> {
    let mut pending: Vec<Tail> = Vec::new();
    let mut current = path.to_path_buf();
    loop {
        match current.canonicalize() {
            Ok(mut real) => {
                for part in pending.drain(..).rev() {
                    match part {
                        Tail::Parent => {
                            real.pop();
                        }
                        Tail::Normal(name) => real.push(name),
                    }
                }
                return Ok(real);
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                if current.symlink_metadata().is_ok() {
                    // Dangling symlink or unresolvable link chain.
                    return Err(e);
                }
                match current.components().next_back() {
                    Some(Component::Normal(name)) => {
                        pending.push(Tail::Normal(name.to_os_string()));
                    }
                    Some(Component::ParentDir) => pending.push(Tail::Parent),
                    Some(Component::CurDir) => {}
                    _ => return Err(e),
                }
                let Some(parent) = current.parent() else {
                    return Err(e);
                };
                current = parent.to_path_buf();
            }
            Err(e) => return Err(e),
        }
    }
}
