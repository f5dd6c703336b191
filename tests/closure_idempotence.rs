//! Closure building is a pure function of the fixture and the changed
//! paths: repeat runs and input reordering change nothing.

mod common;

use common::{api_over, rp};
use signoff::adapters::MemoryOracle;
use signoff::policy::Policy;
use signoff::types::ids::run_id;
use signoff::types::ChangeSet;

fn fixture() -> MemoryOracle {
    MemoryOracle::new()
        .file("OWNERS", "alice\n")
        .file("pkg/OWNERS", "bob\n")
        .file("pkg/DEPENDENCIES", "lib/\nvendor\n")
        .file("pkg/foo.txt", "")
        .file("lib/OWNERS", "dave\n")
        .file("vendor/OWNERS", "vicky\n")
        .file("tools/build.sh", "")
}

#[test]
fn repeat_builds_are_identical() {
    let (api, _) = api_over(Policy::default(), fixture());
    let input = ChangeSet {
        changed: vec![rp("pkg/foo.txt"), rp("tools/build.sh")],
        approvers: vec![],
    };
    let first = api.closure(&input).unwrap();
    let second = api.closure(&input).unwrap();
    assert_eq!(first, second);
}

#[test]
fn input_order_does_not_change_the_closure() {
    let (api, _) = api_over(Policy::default(), fixture());
    let forward = ChangeSet {
        changed: vec![rp("pkg/foo.txt"), rp("tools/build.sh")],
        approvers: vec![],
    };
    let reversed = ChangeSet {
        changed: vec![rp("tools/build.sh"), rp("pkg/foo.txt")],
        approvers: vec![],
    };
    assert_eq!(
        api.closure(&forward).unwrap(),
        api.closure(&reversed).unwrap()
    );
    assert_eq!(run_id(&forward), run_id(&reversed));
}

#[test]
fn run_id_is_root_independent_and_stable() {
    let a = ChangeSet {
        changed: vec![rp("pkg/foo.txt")],
        approvers: vec!["bob".to_string()],
    };
    let b = ChangeSet {
        changed: vec![rp("pkg/foo.txt")],
        approvers: vec!["bob".to_string()],
    };
    assert_eq!(run_id(&a), run_id(&b));

    let other = ChangeSet {
        changed: vec![rp("pkg/foo.txt")],
        approvers: vec!["carol".to_string()],
    };
    assert_ne!(run_id(&a), run_id(&other));
}
