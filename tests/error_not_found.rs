//! Missing paths fail fast with the offending path in the diagnostic,
//! whether they arrive as changed inputs or as stale dependency entries.

mod common;

use common::{api_over, rp};
use signoff::adapters::MemoryOracle;
use signoff::api::errors::{error_id_for, exit_code_for, ApiError, ErrorId};
use signoff::policy::Policy;
use signoff::types::ChangeSet;

#[test]
fn missing_changed_path_is_not_found() {
    let oracle = MemoryOracle::new().file("OWNERS", "alice\n");
    let (api, _) = api_over(Policy::default(), oracle);
    let input = ChangeSet {
        changed: vec![rp("pkg/gone.txt")],
        approvers: vec!["alice".to_string()],
    };
    match api.validate(&input) {
        Err(ApiError::NotFound(msg)) => assert!(msg.contains("pkg/gone.txt"), "{msg}"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn stale_dependency_target_is_not_found() {
    let oracle = MemoryOracle::new()
        .file("OWNERS", "alice\n")
        .file("pkg/OWNERS", "bob\n")
        .file("pkg/DEPENDENCIES", "removed/\n")
        .file("pkg/foo.txt", "");
    let (api, _) = api_over(Policy::default(), oracle);
    let input = ChangeSet {
        changed: vec![rp("pkg/foo.txt")],
        approvers: vec!["bob".to_string()],
    };
    match api.validate(&input) {
        Err(ApiError::NotFound(msg)) => assert!(msg.contains("removed"), "{msg}"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn not_found_maps_to_its_own_exit_code() {
    let e = ApiError::NotFound("pkg/gone.txt".to_string());
    assert_eq!(error_id_for(&e), ErrorId::E_NOT_FOUND);
    assert_eq!(exit_code_for(ErrorId::E_NOT_FOUND), 20);
    assert_ne!(
        exit_code_for(ErrorId::E_NOT_FOUND),
        exit_code_for(ErrorId::E_INSUFFICIENT)
    );
}
