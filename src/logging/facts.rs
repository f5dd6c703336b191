use log::Level;
use serde_json::{json, Value};

pub trait FactsEmitter {
    fn emit(&self, subsystem: &str, event: &str, decision: &str, fields: Value);
}

pub trait AuditSink {
    fn log(&self, level: Level, msg: &str);
}

/// Sink that drops facts and routes audit lines through the `log` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl FactsEmitter for NullSink {
    fn emit(&self, _subsystem: &str, _event: &str, _decision: &str, _fields: Value) {}
}

impl AuditSink for NullSink {
    fn log(&self, level: Level, msg: &str) {
        log::log!(level, "{msg}");
    }
}

/// Sink that writes each fact as one JSON line on stderr.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonlSink;

impl FactsEmitter for JsonlSink {
    fn emit(&self, subsystem: &str, event: &str, decision: &str, fields: Value) {
        let line = json!({
            "subsystem": subsystem,
            "event": event,
            "decision": decision,
            "fields": fields,
        });
        eprintln!("{line}");
    }
}

impl AuditSink for JsonlSink {
    fn log(&self, level: Level, msg: &str) {
        log::log!(level, "{msg}");
    }
}
