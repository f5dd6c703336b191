/// Interpretation base for dependency listing entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DependencyBase {
    /// Entries name paths relative to the repository root.
    RootRelative,
    /// Entries name paths relative to the directory declaring them.
    DeclaringDir,
}

impl Default for DependencyBase {
    fn default() -> Self {
        DependencyBase::RootRelative
    }
}

/// Per-directory approval quorum. `AtLeast(1)` is plain set cover: one
/// matching owner suffices for a directory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quorum {
    AtLeast(usize),
}

impl Default for Quorum {
    fn default() -> Self {
        Quorum::AtLeast(1)
    }
}

impl Quorum {
    /// Number of distinct matching approvers a directory needs. A configured
    /// zero is treated as one; an uncovered directory can never be waived.
    #[must_use]
    pub const fn required(self) -> usize {
        match self {
            Quorum::AtLeast(0) => 1,
            Quorum::AtLeast(n) => n,
        }
    }
}
