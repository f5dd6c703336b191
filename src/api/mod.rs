// Facade for API module; delegates to submodules under src/api/

use log::Level;

use crate::adapters::PathOracle;
use crate::logging::audit::AuditCtx;
use crate::logging::{now_iso, AuditSink, FactsEmitter, TS_ZERO};
use crate::policy::Policy;
use crate::types::ids::run_id;
use crate::types::{ChangeSet, Closure, Verdict};

mod builder;
mod closure;
pub mod errors;
mod verdict;

pub use builder::ApiBuilder;

/// Public entry point for validation runs. Owns the facts emitter, the
/// audit sink, the policy, and the path oracle; each call is a
/// self-contained, read-only run against the oracle.
pub struct Signoff<E: FactsEmitter, A: AuditSink> {
    facts: E,
    audit: A,
    policy: Policy,
    oracle: Box<dyn PathOracle>,
    live_timestamps: bool,
}

impl<E: FactsEmitter, A: AuditSink> Signoff<E, A> {
    pub fn new(facts: E, audit: A, policy: Policy, oracle: Box<dyn PathOracle>) -> Self {
        Self {
            facts,
            audit,
            policy,
            oracle,
            live_timestamps: false,
        }
    }

    /// Emit facts with real timestamps instead of the redacted constant.
    /// Defaults off so identical runs produce byte-identical facts.
    #[must_use]
    pub fn with_live_timestamps(mut self) -> Self {
        self.live_timestamps = true;
        self
    }

    /// Build the affected-directory closure for the changed paths: the
    /// transitive expansion through dependency listings, with owners
    /// recorded per visited directory.
    ///
    /// # Errors
    /// Fatal to the run: a changed or dependency path that does not exist,
    /// a directory with no ownership listing up to the root, an ownerless
    /// listing, or an unreadable listing.
    pub fn closure(&self, input: &ChangeSet) -> Result<Closure, errors::ApiError> {
        let ctx = self.audit_ctx(input);
        match closure::build(self, &ctx, &input.changed) {
            Ok(c) => Ok(c),
            Err(e) => {
                self.audit.log(Level::Error, &format!("closure failed: {e}"));
                Err(e.into())
            }
        }
    }

    /// Check the claimed approvers against a built closure.
    #[must_use]
    pub fn check(&self, input: &ChangeSet, closure: &Closure) -> Verdict {
        let ctx = self.audit_ctx(input);
        verdict::run(&self.policy, &ctx, closure, &input.approvers)
    }

    /// Full validation run: closure build followed by the sufficiency
    /// check. The verdict itself is a value, not an error; only broken
    /// inputs (missing paths, missing or malformed listings) fail.
    pub fn validate(&self, input: &ChangeSet) -> Result<Verdict, errors::ApiError> {
        let closure = self.closure(input)?;
        let verdict = self.check(input, &closure);
        if verdict.approved {
            self.audit.log(Level::Info, "approved");
        } else {
            self.audit.log(
                Level::Warn,
                &format!("insufficient approvals: {} uncovered", verdict.uncovered.len()),
            );
        }
        Ok(verdict)
    }

    fn audit_ctx(&self, input: &ChangeSet) -> AuditCtx<'_> {
        let ts = if self.live_timestamps {
            now_iso()
        } else {
            TS_ZERO.to_string()
        };
        AuditCtx::new(
            &self.facts as &dyn FactsEmitter,
            run_id(input).to_string(),
            ts,
            !self.live_timestamps,
        )
    }
}
