//! Every affected directory carries at least one owner in the approvals
//! map: owners are recorded at the moment a directory is visited, so the
//! closure can never contain an ownerless member.

mod common;

use common::{api_over, rp};
use signoff::adapters::MemoryOracle;
use signoff::policy::Policy;
use signoff::types::ChangeSet;

#[test]
fn every_affected_directory_has_an_owner() {
    let oracle = MemoryOracle::new()
        .file("OWNERS", "alice\n")
        .file("pkg/OWNERS", "bob\ncarol\n")
        .file("pkg/DEPENDENCIES", "lib/\ndocs\n")
        .file("pkg/foo.txt", "")
        .file("lib/OWNERS", "dave\n")
        .file("lib/DEPENDENCIES", "vendor\n")
        .file("vendor/OWNERS", "vicky\n")
        .file("docs/guide.md", "");
    let (api, _) = api_over(Policy::default(), oracle);
    let input = ChangeSet {
        changed: vec![rp("pkg/foo.txt")],
        approvers: vec![],
    };
    let closure = api.closure(&input).unwrap();

    assert_eq!(closure.affected.len(), 4, "pkg, lib, vendor, docs");
    for dir in &closure.affected {
        let owners = closure.owners_of(dir);
        assert!(!owners.is_empty(), "{dir} has no owner in the approvals map");
    }
    // docs/ has no listing of its own and inherits the root owners.
    assert_eq!(closure.owners_of("docs"), vec!["alice".to_string()]);
}

#[test]
fn multi_owner_listing_records_each_owner() {
    let oracle = MemoryOracle::new()
        .file("pkg/OWNERS", "bob\ncarol\n")
        .file("pkg/foo.txt", "");
    let (api, _) = api_over(Policy::default(), oracle);
    let input = ChangeSet {
        changed: vec![rp("pkg/foo.txt")],
        approvers: vec![],
    };
    let closure = api.closure(&input).unwrap();
    assert_eq!(
        closure.owners_of("pkg"),
        vec!["bob".to_string(), "carol".to_string()]
    );
    assert!(closure.authority_of("bob").contains("pkg"));
    assert!(closure.authority_of("carol").contains("pkg"));
}
