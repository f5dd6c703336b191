//! Shared test helpers for the signoff crate integration tests.

use log::Level;
use serde_json::Value;
use std::path::Path;
use std::sync::{Arc, Mutex};

use signoff::adapters::{DiskOracle, MemoryOracle};
use signoff::logging::{AuditSink, FactsEmitter};
use signoff::policy::Policy;
use signoff::types::RepoPath;
use signoff::Signoff;

/// A simple in-memory emitter to capture facts during tests.
#[derive(Clone, Default, Debug)]
pub struct TestEmitter {
    pub events: Arc<Mutex<Vec<(String, String, String, Value)>>>,
}

impl FactsEmitter for TestEmitter {
    fn emit(&self, subsystem: &str, event: &str, decision: &str, fields: Value) {
        self.events
            .lock()
            .unwrap()
            .push((subsystem.into(), event.into(), decision.into(), fields));
    }
}

/// A no-op audit sink for tests.
#[derive(Clone, Default)]
pub struct TestAudit;

impl AuditSink for TestAudit {
    fn log(&self, _level: Level, _msg: &str) {}
}

/// Fixed absolute root for in-memory fixtures; never touched on disk.
pub const FIXTURE_ROOT: &str = "/repo";

/// Anchor a fixture-relative path.
pub fn rp(rel: &str) -> RepoPath {
    RepoPath::from_rooted(Path::new(FIXTURE_ROOT), Path::new(rel)).expect("fixture path")
}

/// Build an API instance over an in-memory fixture, returning the captured
/// facts emitter alongside it.
pub fn api_over(policy: Policy, oracle: MemoryOracle) -> (Signoff<TestEmitter, TestAudit>, TestEmitter) {
    let facts = TestEmitter::default();
    let api = Signoff::new(facts.clone(), TestAudit, policy, Box::new(oracle));
    (api, facts)
}

/// Build an API instance over the real filesystem with default policy.
pub fn api_over_disk() -> Signoff<TestEmitter, TestAudit> {
    Signoff::new(
        TestEmitter::default(),
        TestAudit,
        Policy::default(),
        Box::new(DiskOracle),
    )
}

/// Create a temporary root directory for DiskOracle fixtures.
pub fn with_temp_root() -> tempfile::TempDir {
    tempfile::tempdir().expect("tempdir")
}
