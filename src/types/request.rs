use super::repopath::RepoPath;

/// Input value for one validation run: the changed paths and the approver
/// identifiers claimed for them. Passed explicitly into the API; there is
/// no ambient per-process state.
#[derive(Clone, Debug, Default)]
pub struct ChangeSet {
    pub changed: Vec<RepoPath>,
    pub approvers: Vec<String>,
}
