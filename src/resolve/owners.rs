use crate::adapters::{PathKind, PathOracle};
use crate::policy::Policy;
use crate::types::errors::{Error, ErrorKind, Result};
use crate::types::repopath::RepoPath;

/// Compute the owning directory for a path: a file maps to its enclosing
/// directory, a directory to itself.
///
/// # Errors
/// `NotFound` when the path is neither a file nor a directory. Stale
/// dependency targets fail here, at visit time, instead of sending the
/// upward walk past the root.
pub fn base_dir(oracle: &dyn PathOracle, path: &RepoPath) -> Result<RepoPath> {
    match oracle.kind(path) {
        PathKind::Dir => Ok(path.clone()),
        // A file below the root always has a parent; fall through to the
        // root itself if the lexical parent is somehow absent.
        PathKind::File => Ok(path.parent().unwrap_or_else(|| path.clone())),
        PathKind::Missing => Err(Error {
            kind: ErrorKind::NotFound,
            msg: format!("not a file or directory: {}", path.rel_str()),
        }),
    }
}

/// Resolve the owners authorized to approve a change to `path`: walk upward
/// from its owning directory to the nearest ownership listing, the
/// repository root included.
///
/// # Errors
/// - `NotFound` when `path` does not exist.
/// - `MissingOwners` when no ownership listing exists up to the root.
/// - `MalformedListing` when the nearest listing has no identifiers after
///   trimming, which would otherwise leave an affected directory ownerless.
pub fn owners_for(oracle: &dyn PathOracle, policy: &Policy, path: &RepoPath) -> Result<Vec<String>> {
    let mut dir = base_dir(oracle, path)?;
    loop {
        let listing = dir.child(&policy.owners_file);
        if oracle.kind(&listing) == PathKind::File {
            let owners = super::read_listing(oracle, &listing)?;
            if owners.is_empty() {
                return Err(Error {
                    kind: ErrorKind::MalformedListing,
                    msg: format!("ownership listing has no identifiers: {}", listing.rel_str()),
                });
            }
            return Ok(owners);
        }
        match dir.parent() {
            Some(parent) => dir = parent,
            None => {
                return Err(Error {
                    kind: ErrorKind::MissingOwners,
                    msg: format!("no ownership listing above: {}", path.rel_str()),
                })
            }
        }
    }
}
