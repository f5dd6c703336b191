use crate::constants::{DEPENDENCIES_FILE, OWNERS_FILE};

use super::types::{DependencyBase, Quorum};

/// Policy governs listing filenames, dependency entry interpretation, and
/// the per-directory approval quorum for a validation run.
#[derive(Clone, Debug)]
pub struct Policy {
    /// Filename of the per-directory ownership listing.
    pub owners_file: String,
    /// Filename of the per-directory dependency listing.
    pub dependencies_file: String,
    /// How dependency entries are resolved to paths.
    pub dependency_base: DependencyBase,
    /// How many distinct matching approvers each affected directory needs.
    pub quorum: Quorum,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            owners_file: OWNERS_FILE.to_string(),
            dependencies_file: DEPENDENCIES_FILE.to_string(),
            dependency_base: DependencyBase::default(),
            quorum: Quorum::default(),
        }
    }
}

impl Policy {
    /// Construct a Policy requiring **two distinct approvers per affected
    /// directory** (co-sign), with all other knobs at their defaults.
    ///
    /// # Example
    /// ```rust
    /// use signoff::policy::{Policy, Quorum};
    ///
    /// let policy = Policy::strict_preset();
    /// assert_eq!(policy.quorum, Quorum::AtLeast(2));
    /// ```
    #[must_use]
    pub fn strict_preset() -> Self {
        let mut p = Self::default();
        p.quorum = Quorum::AtLeast(2);
        p
    }
}
