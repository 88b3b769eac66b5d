use super::*;
use serde_json::json;

fn stack() -> StackName {
    StackName::try_new("prod-db-yesterdaytabase").unwrap()
}

#[test]
fn test_applied_serializes_null_error() {
    let result = ReconciliationResult::new(ResultAction::Create, Outcome::Applied, None);
    assert_eq!(result.to_json(), json!({ "action": "create", "error": null }));
    assert!(!result.is_failure());
}

#[test]
fn test_no_action_serializes_null() {
    let result = ReconciliationResult::new(ResultAction::None, Outcome::Reported, None);
    assert_eq!(result.to_json(), json!({ "action": null, "error": null }));
}

#[test]
fn test_no_snapshots_is_informational() {
    let result = ReconciliationResult::new(
        ResultAction::Create,
        Outcome::NoSnapshots {
            database: "prod-db".to_string(),
        },
        None,
    );
    let value = result.to_json();
    assert_eq!(value["error"], NO_SNAPSHOTS_ERROR);
    assert!(value["message"].as_str().unwrap().contains("prod-db"));
    assert!(!result.is_failure());
}

#[test]
fn test_conflicting_state_names_stack_and_status() {
    let result = ReconciliationResult::new(
        ResultAction::Update,
        Outcome::ConflictingState {
            stack: stack(),
            status: "CREATE_IN_PROGRESS".to_string(),
        },
        None,
    );
    let error = result.error().unwrap();
    assert_eq!(
        error,
        "Stack prod-db-yesterdaytabase is in state CREATE_IN_PROGRESS and cannot be updated"
    );
    assert_eq!(result.message(), Some(error));
    assert!(!result.is_failure());
}

#[test]
fn test_remote_fault_keeps_provider_detail() {
    let result = ReconciliationResult::new(
        ResultAction::Delete,
        Outcome::RemoteServiceFault {
            context: "Could not delete stack prod-db-yesterdaytabase".to_string(),
            fault: CloudError::service("DeleteStack", "AccessDenied", "not authorized"),
        },
        None,
    );
    let value = result.to_json();
    assert_eq!(value["action"], "delete");
    assert!(value["error"].as_str().unwrap().contains("AccessDenied"));
    assert!(value["error"].as_str().unwrap().contains("not authorized"));
    assert_eq!(
        value["message"],
        "Could not delete stack prod-db-yesterdaytabase"
    );
    assert!(result.is_failure());
}

#[test]
fn test_requested_action_mapping() {
    assert_eq!(
        ResultAction::requested(&RequestedAction::Create),
        ResultAction::Create
    );
    assert_eq!(
        ResultAction::requested(&RequestedAction::Other("plan".into())),
        ResultAction::None
    );
}
