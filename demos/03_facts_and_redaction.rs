use std::path::Path;

use signoff::adapters::MemoryOracle;
use signoff::api::ApiBuilder;
use signoff::logging::JsonlSink;
use signoff::policy::Policy;
use signoff::types::{ChangeSet, RepoPath};

// Runs a validation with the JSONL facts sink: one line per visited
// directory and per verdict row lands on stderr, timestamps zeroed so two
// identical runs emit identical streams.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let oracle = MemoryOracle::new()
        .file("OWNERS", "alice\n")
        .file("a/OWNERS", "eve\n")
        .file("a/DEPENDENCIES", "b/\n")
        .file("a/x.txt", "")
        .file("b/OWNERS", "frank\n")
        .file("b/DEPENDENCIES", "a/\n");

    let api = ApiBuilder::new(JsonlSink, JsonlSink, Policy::default(), Box::new(oracle)).build();

    let root = Path::new("/repo");
    let input = ChangeSet {
        changed: vec![RepoPath::from_rooted(root, Path::new("a/x.txt"))?],
        approvers: vec!["eve".to_string(), "frank".to_string()],
    };
    let verdict = api.validate(&input)?;
    println!(
        "{}",
        if verdict.approved { "Approved" } else { "Insufficient approvals" }
    );
    Ok(())
}
