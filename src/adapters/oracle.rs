use crate::types::{errors::Result, repopath::RepoPath};

/// Classification of a node in the repository tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathKind {
    File,
    Dir,
    Missing,
}

/// Capability trait over the repository tree.
///
/// The closure and sufficiency algorithms only ever classify nodes and read
/// line-oriented listings, so this is the entire surface they need from
/// storage. Production wires `DiskOracle`; tests use `MemoryOracle`.
pub trait PathOracle {
    /// Classify `path` as a file, a directory, or missing.
    fn kind(&self, path: &RepoPath) -> PathKind;

    /// Read the raw lines of a listing at `path`.
    /// # Errors
    /// Returns an error if the listing cannot be read.
    fn read_lines(&self, path: &RepoPath) -> Result<Vec<String>>;
}
