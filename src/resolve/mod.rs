//! Listing resolution: nearest-enclosing ownership and per-directory
//! dependency declarations.
//!
//! Both resolvers run against the `PathOracle` capability trait and perform
//! no mutation. Entries are whitespace-trimmed; blank lines are skipped.

pub mod deps;
pub mod owners;

pub use deps::dependencies_of;
pub use owners::{base_dir, owners_for};

use crate::adapters::PathOracle;
use crate::types::errors::Result;
use crate::types::repopath::RepoPath;

/// Read a listing's lines, trimmed, with blank lines dropped.
pub(crate) fn read_listing(oracle: &dyn PathOracle, listing: &RepoPath) -> Result<Vec<String>> {
    Ok(oracle
        .read_lines(listing)?
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
