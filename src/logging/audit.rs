// Audit helpers that emit structured facts across Signoff stages.
//
// Side-effects:
// - Emits JSON facts via `FactsEmitter` for the `closure` stage (one row per
//   visited directory plus a summary) and the `verdict` stage (one row per
//   affected directory plus a summary).
// - Ensures a minimal envelope is present on every fact: `schema_version`,
//   `ts`, `run_id`, `path`, `decision`.
// - Applies redaction when the context requests deterministic facts.
use serde_json::{json, Value};

use crate::logging::{redact_event, FactsEmitter};

pub(crate) const SCHEMA_VERSION: i64 = 1;

pub(crate) struct AuditCtx<'a> {
    pub facts: &'a dyn FactsEmitter,
    pub run_id: String,
    pub ts: String,
    pub redact: bool,
}

impl<'a> AuditCtx<'a> {
    pub(crate) fn new(facts: &'a dyn FactsEmitter, run_id: String, ts: String, redact: bool) -> Self {
        Self {
            facts,
            run_id,
            ts,
            redact,
        }
    }
}

/// Stage for typed audit emission.
#[derive(Clone, Copy, Debug)]
pub enum Stage {
    Closure,
    Verdict,
}

impl Stage {
    fn as_event(&self) -> &'static str {
        match self {
            Stage::Closure => "closure",
            Stage::Verdict => "verdict",
        }
    }
}

/// Decision severity for audit events.
#[derive(Clone, Copy, Debug)]
pub enum Decision {
    Success,
    Failure,
    Warn,
}

impl Decision {
    fn as_str(&self) -> &'static str {
        match self {
            Decision::Success => "success",
            Decision::Failure => "failure",
            Decision::Warn => "warn",
        }
    }
}

/// Builder facade over audit emission with centralized envelope+redaction.
pub struct StageLogger<'a> {
    ctx: &'a AuditCtx<'a>,
}

impl<'a> StageLogger<'a> {
    pub(crate) fn new(ctx: &'a AuditCtx<'a>) -> Self {
        Self { ctx }
    }

    pub fn closure(&self) -> EventBuilder<'a> {
        EventBuilder::new(self.ctx, Stage::Closure)
    }

    pub fn verdict(&self) -> EventBuilder<'a> {
        EventBuilder::new(self.ctx, Stage::Verdict)
    }
}

pub struct EventBuilder<'a> {
    ctx: &'a AuditCtx<'a>,
    stage: Stage,
    fields: serde_json::Map<String, Value>,
}

impl<'a> EventBuilder<'a> {
    fn new(ctx: &'a AuditCtx<'a>, stage: Stage) -> Self {
        let mut fields = serde_json::Map::new();
        fields.insert("stage".to_string(), json!(stage.as_event()));
        Self { ctx, stage, fields }
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.fields.insert("path".into(), json!(path.into()));
        self
    }

    pub fn field(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    pub fn merge(mut self, extra: Value) -> Self {
        if let Some(obj) = extra.as_object() {
            for (k, v) in obj.iter() {
                self.fields.insert(k.clone(), v.clone());
            }
        }
        self
    }

    pub fn emit(self, decision: Decision) {
        let mut fields = Value::Object(self.fields);
        if let Some(obj) = fields.as_object_mut() {
            obj.entry("decision").or_insert(json!(decision.as_str()));
        }
        redact_and_emit(self.ctx, "signoff", self.stage.as_event(), decision.as_str(), fields);
    }

    pub fn emit_success(self) {
        self.emit(Decision::Success)
    }

    pub fn emit_failure(self) {
        self.emit(Decision::Failure)
    }

    pub fn emit_warn(self) {
        self.emit(Decision::Warn)
    }
}

fn redact_and_emit(ctx: &AuditCtx, subsystem: &str, event: &str, decision: &str, mut fields: Value) {
    // Ensure minimal envelope fields
    if let Some(obj) = fields.as_object_mut() {
        obj.entry("schema_version").or_insert(json!(SCHEMA_VERSION));
        obj.entry("ts").or_insert(json!(ctx.ts));
        obj.entry("run_id").or_insert(json!(ctx.run_id));
        obj.entry("path").or_insert(json!(""));
    }
    let out = if ctx.redact { redact_event(fields) } else { fields };
    ctx.facts.emit(subsystem, event, decision, out);
}
