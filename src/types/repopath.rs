use std::path::{Component, Path, PathBuf};

use super::errors::{Error, ErrorKind, Result};

/// Data-only type for root-anchored path handling.
/// Centralized under `crate::types` for cross-layer reuse.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepoPath {
    /// The repository root this path is anchored to
    root: PathBuf,
    /// The relative path component
    rel: PathBuf,
}

impl RepoPath {
    /// Creates a new RepoPath from a root and candidate path.
    ///
    /// This function ensures that the candidate path is within the root path
    /// and does not contain any unsafe components like dotdot (..).
    ///
    /// # Arguments
    ///
    /// * `root` - The repository root the candidate should be within
    /// * `candidate` - The path to check and anchor
    ///
    /// # Returns
    ///
    /// * `Result<Self>` - A RepoPath if the candidate is valid, or an error otherwise
    pub fn from_rooted(root: &Path, candidate: &Path) -> Result<Self> {
        if !root.is_absolute() {
            return Err(Error {
                kind: ErrorKind::InvalidPath,
                msg: "root must be absolute".into(),
            });
        }
        let effective = if candidate.is_absolute() {
            match candidate.strip_prefix(root) {
                Ok(p) => p.to_path_buf(),
                Err(_) => {
                    return Err(Error {
                        kind: ErrorKind::InvalidPath,
                        msg: format!("path escapes root: {}", candidate.display()),
                    })
                }
            }
        } else {
            candidate.to_path_buf()
        };

        let mut rel = PathBuf::new();
        for seg in effective.components() {
            match seg {
                Component::CurDir => {}
                Component::Normal(p) => rel.push(p),
                Component::ParentDir => {
                    return Err(Error {
                        kind: ErrorKind::InvalidPath,
                        msg: format!("dotdot: {}", candidate.display()),
                    });
                }
                _ => {
                    return Err(Error {
                        kind: ErrorKind::InvalidPath,
                        msg: format!("unsupported component: {}", candidate.display()),
                    });
                }
            }
        }
        Ok(RepoPath {
            root: root.to_path_buf(),
            rel,
        })
    }

    /// Returns the full path by joining the root and relative components.
    #[must_use]
    pub fn as_path(&self) -> PathBuf {
        self.root.join(&self.rel)
    }

    /// Returns a reference to the repository root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns a reference to the relative path component.
    #[must_use]
    pub fn rel(&self) -> &Path {
        &self.rel
    }

    /// Canonical identity of this path within its tree: the relative portion
    /// rendered as a string, `"."` for the root itself. Used as the map/set
    /// key throughout closure building so results are root-independent.
    #[must_use]
    pub fn rel_str(&self) -> String {
        if self.rel.as_os_str().is_empty() {
            ".".to_string()
        } else {
            self.rel.to_string_lossy().into_owned()
        }
    }

    /// True when this path is the repository root itself.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.rel.as_os_str().is_empty()
    }

    /// The enclosing directory within the same root, or `None` at the root.
    /// The walk is purely lexical; no filesystem access.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        let parent_rel = self.rel.parent()?;
        Some(RepoPath {
            root: self.root.clone(),
            rel: parent_rel.to_path_buf(),
        })
    }

    /// Appends a single name to the relative portion (e.g. a listing
    /// filename under a directory).
    #[must_use]
    pub fn child(&self, name: &str) -> Self {
        RepoPath {
            root: self.root.clone(),
            rel: self.rel.join(name),
        }
    }
}
