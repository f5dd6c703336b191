//! Closure stage: breadth-first expansion of the affected-directory set.
//!
//! Side-effects:
//! - Emits one `closure` fact per visited directory with its resolved owners
//!   and the number of dependency entries enqueued.
//! - Emits a `closure` summary fact with the final set sizes.
//!
//! The traversal computes a graph closure, so the result is independent of
//! visit order; FIFO is kept for simple, deterministic behavior. The visited
//! set absorbs duplicates and dependency cycles, bounding the run at one
//! visit per reachable directory.

use std::collections::{BTreeSet, VecDeque};

use serde_json::json;

use crate::logging::audit::AuditCtx;
use crate::logging::{AuditSink, FactsEmitter, StageLogger};
use crate::policy::DependencyBase;
use crate::resolve::{base_dir, dependencies_of, owners_for};
use crate::types::errors::Result;
use crate::types::{Closure, RepoPath};

pub(super) fn build<E: FactsEmitter, A: AuditSink>(
    api: &super::Signoff<E, A>,
    ctx: &AuditCtx,
    changed: &[RepoPath],
) -> Result<Closure> {
    let oracle = api.oracle.as_ref();
    let mut queue: VecDeque<RepoPath> = changed.iter().cloned().collect();
    let mut visited: BTreeSet<String> = BTreeSet::new();
    let mut closure = Closure::default();

    while let Some(listing) = queue.pop_front() {
        let dir = base_dir(oracle, &listing)?;
        let key = dir.rel_str();
        if !visited.insert(key.clone()) {
            // Already accounted for: duplicate input or dependency cycle.
            continue;
        }

        let owners = owners_for(oracle, &api.policy, &dir)?;
        closure.record(&owners, &key);

        let entries = dependencies_of(oracle, &api.policy, &dir)?;
        for entry in &entries {
            queue.push_back(resolve_entry(&dir, entry, api.policy.dependency_base)?);
        }

        StageLogger::new(ctx)
            .closure()
            .path(key.as_str())
            .merge(json!({ "owners": owners, "enqueued": entries.len() }))
            .emit_success();
    }

    StageLogger::new(ctx)
        .closure()
        .merge(json!({
            "summary": true,
            "affected": closure.affected.len(),
            "owners": closure.approvals.len(),
        }))
        .emit_success();

    Ok(closure)
}

/// Anchor one dependency entry to the run's root according to policy.
/// Escaping entries (`..`, absolute paths outside the root) fail here with
/// `InvalidPath` rather than being visited.
fn resolve_entry(dir: &RepoPath, entry: &str, base: DependencyBase) -> Result<RepoPath> {
    match base {
        DependencyBase::RootRelative => {
            RepoPath::from_rooted(dir.root(), std::path::Path::new(entry))
        }
        DependencyBase::DeclaringDir => RepoPath::from_rooted(dir.root(), &dir.rel().join(entry)),
    }
}
