//! Dependency listings pull further directories into the affected set, and
//! each pulled directory needs its own covering approver.

mod common;

use common::{api_over, rp};
use signoff::adapters::MemoryOracle;
use signoff::policy::Policy;
use signoff::types::ChangeSet;

fn fixture() -> MemoryOracle {
    MemoryOracle::new()
        .file("OWNERS", "alice\n")
        .file("pkg/OWNERS", "bob\n")
        .file("pkg/DEPENDENCIES", "lib/\n")
        .file("pkg/foo.txt", "")
        .file("lib/OWNERS", "dave\n")
}

#[test]
fn touching_owner_alone_is_insufficient() {
    let (api, _) = api_over(Policy::default(), fixture());
    let input = ChangeSet {
        changed: vec![rp("pkg/foo.txt")],
        approvers: vec!["bob".to_string()],
    };
    let verdict = api.validate(&input).unwrap();
    assert!(!verdict.approved);
    assert_eq!(verdict.uncovered, vec!["lib".to_string()]);
}

#[test]
fn dependency_owner_completes_the_cover() {
    let (api, _) = api_over(Policy::default(), fixture());
    let input = ChangeSet {
        changed: vec![rp("pkg/foo.txt")],
        approvers: vec!["bob".to_string(), "dave".to_string()],
    };
    let verdict = api.validate(&input).unwrap();
    assert!(verdict.approved);
}

#[test]
fn closure_contains_both_directories() {
    let (api, _) = api_over(Policy::default(), fixture());
    let input = ChangeSet {
        changed: vec![rp("pkg/foo.txt")],
        approvers: vec![],
    };
    let closure = api.closure(&input).unwrap();
    let affected: Vec<&str> = closure.affected.iter().map(String::as_str).collect();
    assert_eq!(affected, vec!["lib", "pkg"]);
    assert_eq!(
        closure.authority_of("bob").into_iter().collect::<Vec<_>>(),
        vec!["pkg".to_string()]
    );
    assert_eq!(
        closure.authority_of("dave").into_iter().collect::<Vec<_>>(),
        vec!["lib".to_string()]
    );
    assert!(closure.authority_of("nobody").is_empty());
}

#[test]
fn transitive_dependencies_are_followed() {
    let oracle = MemoryOracle::new()
        .file("OWNERS", "alice\n")
        .file("a/OWNERS", "ann\n")
        .file("a/DEPENDENCIES", "b\n")
        .file("a/x.txt", "")
        .file("b/OWNERS", "ben\n")
        .file("b/DEPENDENCIES", "c\n")
        .file("c/OWNERS", "cam\n");
    let (api, _) = api_over(Policy::default(), oracle);
    let input = ChangeSet {
        changed: vec![rp("a/x.txt")],
        approvers: vec!["ann".to_string(), "ben".to_string()],
    };
    let verdict = api.validate(&input).unwrap();
    assert!(!verdict.approved, "c is reached through b and stays uncovered");
    assert_eq!(verdict.uncovered, vec!["c".to_string()]);
}
