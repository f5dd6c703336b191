use std::collections::{BTreeMap, BTreeSet};

/// Result of the closure stage: the full affected-directory set plus the
/// owner-to-directories approval map accumulated while visiting it.
///
/// Directories are identified by their root-relative rendering
/// (`RepoPath::rel_str`), so closures are comparable across roots. BTree
/// containers give stable iteration order for reporting and facts.
///
/// Invariant: every member of `affected` appears as a value under at least
/// one `approvals` key, because a directory's resolved owners are recorded
/// at the moment it is visited.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Closure {
    pub approvals: BTreeMap<String, BTreeSet<String>>,
    pub affected: BTreeSet<String>,
}

impl Closure {
    /// Record one visited directory and the owners that may approve it.
    pub(crate) fn record(&mut self, owners: &[String], dir: &str) {
        for owner in owners {
            self.approvals
                .entry(owner.clone())
                .or_default()
                .insert(dir.to_string());
        }
        self.affected.insert(dir.to_string());
    }

    /// Directories a given identifier has authority over; empty for
    /// identifiers that own nothing in this closure.
    #[must_use]
    pub fn authority_of(&self, approver: &str) -> BTreeSet<String> {
        self.approvals.get(approver).cloned().unwrap_or_default()
    }

    /// Owners of one affected directory, in stable order.
    #[must_use]
    pub fn owners_of(&self, dir: &str) -> Vec<String> {
        self.approvals
            .iter()
            .filter(|(_, dirs)| dirs.contains(dir))
            .map(|(owner, _)| owner.clone())
            .collect()
    }
}
