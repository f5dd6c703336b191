//! Deterministic UUIDv5 identifiers for validation runs.
//!
//! The UUID namespace is derived from a stable tag (`NS_TAG`) so that
//! `run_id` is reproducible across runs for the same changed paths and
//! claimed approvers, independent of the repository root.
use uuid::Uuid;

use super::request::ChangeSet;
use crate::constants::NS_TAG;

/// Internal: return the UUID namespace used for deterministic IDs.
fn namespace() -> Uuid {
    Uuid::new_v5(&Uuid::NAMESPACE_URL, NS_TAG.as_bytes())
}

/// Serialize a request into a stable, human-readable string used for
/// UUIDv5 input. Changed paths use their relative rendering only, sorted,
/// so IDs do not depend on the root directory or argument order.
fn serialize_request(input: &ChangeSet) -> String {
    let mut changed: Vec<String> = input.changed.iter().map(super::RepoPath::rel_str).collect();
    changed.sort();
    let mut approvers: Vec<&str> = input.approvers.iter().map(String::as_str).collect();
    approvers.sort_unstable();
    let mut s = String::new();
    for c in &changed {
        s.push_str("C:");
        s.push_str(c);
        s.push('\n');
    }
    for a in &approvers {
        s.push_str("A:");
        s.push_str(a);
        s.push('\n');
    }
    s
}

/// Compute a deterministic UUIDv5 for a validation run.
///
/// Two requests with the same changed paths and claimed approvers (in any
/// order, under any root) share a `run_id`.
#[must_use]
pub fn run_id(input: &ChangeSet) -> Uuid {
    Uuid::new_v5(&namespace(), serialize_request(input).as_bytes())
}
