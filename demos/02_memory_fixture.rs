use std::path::Path;

use signoff::adapters::MemoryOracle;
use signoff::api::ApiBuilder;
use signoff::logging::NullSink;
use signoff::policy::Policy;
use signoff::types::{ChangeSet, RepoPath};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let oracle = MemoryOracle::new()
        .file("OWNERS", "alice\n")
        .file("pkg/OWNERS", "bob\n")
        .file("pkg/DEPENDENCIES", "lib/\n")
        .file("pkg/foo.txt", "")
        .file("lib/OWNERS", "dave\n");

    let api = ApiBuilder::new(NullSink, NullSink, Policy::default(), Box::new(oracle)).build();

    let root = Path::new("/repo");
    let input = ChangeSet {
        changed: vec![RepoPath::from_rooted(root, Path::new("pkg/foo.txt"))?],
        approvers: vec!["bob".to_string()],
    };
    let verdict = api.validate(&input)?;
    println!("{}", serde_json::to_string_pretty(&verdict)?);
    Ok(())
}
