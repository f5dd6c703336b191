//! Verdict stage: per-directory quorum coverage over a built closure.
//!
//! Side-effects:
//! - Emits one `verdict` fact per affected directory with the matched
//!   approvers and whether its quorum was met.
//! - Emits a `verdict` summary fact; on insufficiency the summary carries
//!   `error_id=E_INSUFFICIENT` and its exit code for CI consumers.

use std::collections::BTreeSet;

use serde_json::json;

use crate::logging::audit::AuditCtx;
use crate::logging::StageLogger;
use crate::policy::Policy;
use crate::types::{Closure, CoverageRow, Verdict};

use super::errors::{exit_code_for, id_str, ErrorId};

pub(super) fn run(
    policy: &Policy,
    ctx: &AuditCtx,
    closure: &Closure,
    approvers: &[String],
) -> Verdict {
    let required = policy.quorum.required();
    // Claimed approvers are deduplicated: the same identifier listed twice
    // is still one approver toward a quorum.
    let claimed: BTreeSet<&str> = approvers.iter().map(String::as_str).collect();

    let mut rows: Vec<CoverageRow> = Vec::new();
    let mut uncovered: Vec<String> = Vec::new();

    for dir in &closure.affected {
        let owners = closure.owners_of(dir);
        let matched: Vec<String> = owners
            .iter()
            .filter(|owner| claimed.contains(owner.as_str()))
            .cloned()
            .collect();
        let quorum_met = matched.len() >= required;
        if !quorum_met {
            uncovered.push(dir.clone());
        }

        let builder = StageLogger::new(ctx)
            .verdict()
            .path(dir.as_str())
            .merge(json!({ "matched": &matched, "quorum_required": required }));
        if quorum_met {
            builder.emit_success();
        } else {
            builder.emit_failure();
        }

        rows.push(CoverageRow {
            path: dir.clone(),
            owners,
            matched,
            quorum_required: required,
            quorum_met,
        });
    }

    let approved = uncovered.is_empty();
    let summary = StageLogger::new(ctx).verdict().merge(json!({
        "summary": true,
        "affected": closure.affected.len(),
        "uncovered": uncovered.len(),
    }));
    if approved {
        summary.emit_success();
    } else {
        summary
            .merge(json!({
                "error_id": id_str(ErrorId::E_INSUFFICIENT),
                "exit_code": exit_code_for(ErrorId::E_INSUFFICIENT),
            }))
            .emit_failure();
    }

    Verdict {
        approved,
        uncovered,
        rows,
    }
}
