use super::*;
use aws_sdk_rds::primitives::DateTime as AwsDateTime;
use chrono::TimeZone;
use yt_core::StackParameter;

fn stack() -> StackName {
    StackName::try_new("prod-db-yesterdaytabase").unwrap()
}

#[test]
fn test_missing_stack_is_classified_not_found() {
    let err = classify_describe_fault(
        &stack(),
        "ValidationError",
        "Stack with id prod-db-yesterdaytabase does not exist",
    );
    assert_eq!(
        err,
        CloudError::StackNotFound("prod-db-yesterdaytabase".to_string())
    );
}

#[test]
fn test_other_validation_error_is_service_fault() {
    let err = classify_describe_fault(&stack(), "ValidationError", "1 validation error detected");
    assert!(!err.is_not_found());
}

#[test]
fn test_throttling_is_service_fault() {
    // Even if a throttling message mentions existence it must not read as absent
    let err = classify_describe_fault(&stack(), "Throttling", "Rate exceeded; stack does not exist yet?");
    match err {
        CloudError::Service { operation, code, .. } => {
            assert_eq!(operation, "DescribeStacks");
            assert_eq!(code, "Throttling");
        }
        other => panic!("expected service fault, got {other:?}"),
    }
}

#[test]
fn test_convert_complete_snapshot() {
    let record = DbSnapshot::builder()
        .db_snapshot_identifier("rds:prod-db-2024-03-02-06-10")
        .db_instance_identifier("prod-db")
        .allocated_storage(250)
        .snapshot_create_time(AwsDateTime::from_secs(1_709_359_800))
        .build();

    let snap = convert_snapshot(&record).unwrap();
    assert_eq!(snap.identifier, "rds:prod-db-2024-03-02-06-10");
    assert_eq!(snap.source_database_name, "prod-db");
    assert_eq!(snap.allocated_storage_gib, 250);
    assert_eq!(
        snap.created_at,
        Utc.with_ymd_and_hms(2024, 3, 2, 6, 10, 0).unwrap()
    );
}

#[test]
fn test_snapshot_in_progress_is_skipped() {
    let record = DbSnapshot::builder()
        .db_snapshot_identifier("rds:prod-db-pending")
        .db_instance_identifier("prod-db")
        .allocated_storage(250)
        .build();

    assert!(convert_snapshot(&record).is_none());
}

#[test]
fn test_sdk_parameters_keep_order_and_values() {
    let request = StackRequest {
        stack_name: stack(),
        restore_target_name: "prod-db-yesterday-2024-03-02-0705".to_string(),
        template_body: "body".to_string(),
        parameters: vec![
            StackParameter {
                key: "SnapshotID".to_string(),
                value: "rds:snap".to_string(),
            },
            StackParameter {
                key: "DiskSize".to_string(),
                value: "250".to_string(),
            },
        ],
    };

    let params = sdk_parameters(&request);
    assert_eq!(params.len(), 2);
    assert_eq!(params[0].parameter_key(), Some("SnapshotID"));
    assert_eq!(params[1].parameter_value(), Some("250"));
}
