use serde::Serialize;

/// Typed representation of one coverage row in a verdict.
/// Serialized to JSON for emission and report output.
#[derive(Clone, Debug, Serialize)]
pub struct CoverageRow {
    pub path: String,
    pub owners: Vec<String>,
    pub matched: Vec<String>,
    pub quorum_required: usize,
    pub quorum_met: bool,
}

/// Outcome of the sufficiency check for one validation run.
/// `rows` are in stable (sorted) path order; `uncovered` lists the
/// directories whose quorum was not met.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Verdict {
    pub approved: bool,
    pub uncovered: Vec<String>,
    pub rows: Vec<CoverageRow>,
}
