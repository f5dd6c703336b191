use crate::adapters::PathOracle;
use crate::logging::{AuditSink, FactsEmitter};
use crate::policy::Policy;

/// Builder for constructing a Signoff with ergonomic chaining.
/// Mirrors `Signoff::new(...).with_*` but avoids duplication at call sites.
pub struct ApiBuilder<E: FactsEmitter, A: AuditSink> {
    facts: E,
    audit: A,
    policy: Policy,
    oracle: Box<dyn PathOracle>,
    live_timestamps: bool,
}

impl<E: FactsEmitter, A: AuditSink> ApiBuilder<E, A> {
    pub fn new(facts: E, audit: A, policy: Policy, oracle: Box<dyn PathOracle>) -> Self {
        Self {
            facts,
            audit,
            policy,
            oracle,
            live_timestamps: false,
        }
    }

    #[must_use]
    pub fn with_live_timestamps(mut self) -> Self {
        self.live_timestamps = true;
        self
    }

    pub fn build(self) -> super::Signoff<E, A> {
        let api = super::Signoff::new(self.facts, self.audit, self.policy, self.oracle);
        if self.live_timestamps {
            api.with_live_timestamps()
        } else {
            api
        }
    }
}
