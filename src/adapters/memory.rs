use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use super::oracle::{PathKind, PathOracle};
use crate::types::errors::{Error, ErrorKind, Result};
use crate::types::repopath::RepoPath;

/// In-memory repository tree for tests and embedding.
///
/// Paths are keyed by the relative portion of a `RepoPath`, so the same
/// fixture works under any root. Registering a file registers all its
/// ancestor directories; the root directory always exists.
#[derive(Clone, Debug, Default)]
pub struct MemoryOracle {
    files: BTreeMap<PathBuf, Vec<String>>,
    dirs: BTreeSet<PathBuf>,
}

impl MemoryOracle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a directory (and its ancestors).
    #[must_use]
    pub fn dir(mut self, rel: &str) -> Self {
        self.add_dir_chain(Path::new(rel));
        self
    }

    /// Register a file with newline-delimited contents (and its ancestor
    /// directories).
    #[must_use]
    pub fn file(mut self, rel: &str, contents: &str) -> Self {
        let p = PathBuf::from(rel);
        if let Some(parent) = p.parent() {
            self.add_dir_chain(parent);
        }
        self.files
            .insert(p, contents.lines().map(str::to_string).collect());
        self
    }

    fn add_dir_chain(&mut self, rel: &Path) {
        let mut cur = PathBuf::new();
        for seg in rel.components() {
            cur.push(seg);
            self.dirs.insert(cur.clone());
        }
    }
}

impl PathOracle for MemoryOracle {
    fn kind(&self, path: &RepoPath) -> PathKind {
        let rel = path.rel();
        if rel.as_os_str().is_empty() {
            return PathKind::Dir;
        }
        if self.files.contains_key(rel) {
            PathKind::File
        } else if self.dirs.contains(rel) {
            PathKind::Dir
        } else {
            PathKind::Missing
        }
    }

    fn read_lines(&self, path: &RepoPath) -> Result<Vec<String>> {
        self.files.get(path.rel()).cloned().ok_or_else(|| Error {
            kind: ErrorKind::Io,
            msg: format!("no such fixture file: {}", path.rel_str()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_registration_implies_ancestor_dirs() {
        let oracle = MemoryOracle::new().file("a/b/c.txt", "x");
        let root = Path::new("/repo");
        let dir = RepoPath::from_rooted(root, Path::new("a/b")).unwrap();
        let file = RepoPath::from_rooted(root, Path::new("a/b/c.txt")).unwrap();
        let missing = RepoPath::from_rooted(root, Path::new("a/zzz")).unwrap();
        assert_eq!(oracle.kind(&dir), PathKind::Dir);
        assert_eq!(oracle.kind(&file), PathKind::File);
        assert_eq!(oracle.kind(&missing), PathKind::Missing);
    }

    #[test]
    fn root_always_exists() {
        let oracle = MemoryOracle::new();
        let root = Path::new("/repo");
        let top = RepoPath::from_rooted(root, Path::new("")).unwrap();
        assert_eq!(oracle.kind(&top), PathKind::Dir);
    }
}
