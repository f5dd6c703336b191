use std::path::Path;

use signoff::adapters::DiskOracle;
use signoff::api::ApiBuilder;
use signoff::logging::NullSink;
use signoff::policy::Policy;
use signoff::types::{ChangeSet, RepoPath};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempfile::tempdir()?;
    let root = td.path();
    std::fs::write(root.join("OWNERS"), "alice\n")?;
    std::fs::create_dir_all(root.join("pkg"))?;
    std::fs::write(root.join("pkg/OWNERS"), "bob\n")?;
    std::fs::write(root.join("pkg/foo.txt"), "")?;

    let api = ApiBuilder::new(NullSink, NullSink, Policy::default(), Box::new(DiskOracle)).build();

    let input = ChangeSet {
        changed: vec![RepoPath::from_rooted(root, Path::new("pkg/foo.txt"))?],
        approvers: vec!["bob".to_string()],
    };
    let verdict = api.validate(&input)?;
    println!(
        "{}",
        if verdict.approved { "Approved" } else { "Insufficient approvals" }
    );
    Ok(())
}
