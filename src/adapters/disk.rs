use std::path::Path;

use super::oracle::{PathKind, PathOracle};
use crate::types::errors::{Error, ErrorKind, Result};
use crate::types::repopath::RepoPath;

/// Production oracle over the real filesystem. Non-mutating probes only;
/// symlinks are followed, so a link to a regular file reads as a file.
#[derive(Clone, Copy, Debug, Default)]
pub struct DiskOracle;

impl DiskOracle {
    fn classify(path: &Path) -> PathKind {
        match std::fs::metadata(path) {
            Ok(md) if md.is_file() => PathKind::File,
            Ok(md) if md.is_dir() => PathKind::Dir,
            _ => PathKind::Missing,
        }
    }
}

impl PathOracle for DiskOracle {
    fn kind(&self, path: &RepoPath) -> PathKind {
        Self::classify(&path.as_path())
    }

    fn read_lines(&self, path: &RepoPath) -> Result<Vec<String>> {
        let raw = std::fs::read_to_string(path.as_path()).map_err(|e| Error {
            kind: ErrorKind::Io,
            msg: format!("{}: {e}", path.rel_str()),
        })?;
        Ok(raw.lines().map(str::to_string).collect())
    }
}
