use crate::adapters::{PathKind, PathOracle};
use crate::policy::Policy;
use crate::types::errors::Result;
use crate::types::repopath::RepoPath;

/// Return the dependency entries a directory declares, or empty when it
/// carries no dependency listing. Entries are returned verbatim (trimmed,
/// non-blank); existence is checked lazily when each entry is visited.
pub fn dependencies_of(
    oracle: &dyn PathOracle,
    policy: &Policy,
    dir: &RepoPath,
) -> Result<Vec<String>> {
    let listing = dir.child(&policy.dependencies_file);
    match oracle.kind(&listing) {
        PathKind::File => super::read_listing(oracle, &listing),
        _ => Ok(Vec::new()),
    }
}
