use super::*;
use chrono::TimeZone;
use serde_json::json;
use std::path::PathBuf;
use yt_cloud::memory::{CloudCall, InMemoryCloud};
use yt_cloud::CloudError;
use yt_core::{Snapshot, SnapshotId};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 4, 3, 30, 0).unwrap()
}

fn inline_config() -> serde_json::Value {
    json!({
        "domain": "example.com",
        "db": { "name": "prod-db", "security_group": "sg-1", "subnet_group": "net-1" }
    })
}

fn cloud_with_snapshot() -> Arc<InMemoryCloud> {
    Arc::new(InMemoryCloud::with_snapshots(vec![Snapshot {
        identifier: SnapshotId::try_new("rds:prod-db-2024-05-04").unwrap(),
        source_database_name: "prod-db".to_string(),
        allocated_storage_gib: 50,
        created_at: Utc.with_ymd_and_hms(2024, 5, 4, 2, 0, 0).unwrap(),
    }]))
}

fn handler(cloud: &Arc<InMemoryCloud>, template: TemplateSource) -> Handler {
    Handler::new(
        ConfigResolver::new("/nonexistent/yesterdaytabase.yml"),
        template,
        cloud.clone(),
        cloud.clone(),
    )
}

fn event(action: RequestedAction) -> InvocationEvent {
    InvocationEvent {
        action,
        config: Some(inline_config()),
    }
}

#[tokio::test]
async fn test_missing_config_is_reported_without_remote_calls() {
    let cloud = cloud_with_snapshot();
    let result = handler(&cloud, TemplateSource::Embedded)
        .handle(&InvocationEvent::default(), now())
        .await;

    assert!(matches!(result.outcome, Outcome::ConfigError(_)));
    assert_eq!(result.action, ResultAction::Create);
    assert!(result.error().unwrap().contains("[E001]"));
    assert!(cloud.calls().is_empty());
}

#[tokio::test]
async fn test_unreadable_template_is_reported() {
    let cloud = cloud_with_snapshot();
    let template = TemplateSource::File(PathBuf::from("/nonexistent/template.yml"));
    let result = handler(&cloud, template)
        .handle(&event(RequestedAction::Create), now())
        .await;

    assert!(matches!(result.outcome, Outcome::TemplateUnreadable(_)));
    assert_eq!(
        result.message().as_deref(),
        Some("Couldn't read CloudFormation template.")
    );
    assert!(cloud.calls().is_empty());
}

#[tokio::test]
async fn test_delete_skips_template() {
    let cloud = cloud_with_snapshot();
    cloud.set_stack_status("prod-db-yesterdaytabase", "CREATE_COMPLETE");
    let template = TemplateSource::File(PathBuf::from("/nonexistent/template.yml"));

    let result = handler(&cloud, template)
        .handle(&event(RequestedAction::Delete), now())
        .await;

    assert_eq!(result.action, ResultAction::Delete);
    assert!(result.error().is_none());
    assert_eq!(
        cloud.calls(),
        vec![CloudCall::DeleteStack("prod-db-yesterdaytabase".into())]
    );
}

#[tokio::test]
async fn test_unknown_action_echoes_request_without_mutation() {
    let cloud = cloud_with_snapshot();
    let result = handler(&cloud, TemplateSource::Embedded)
        .handle(&event(RequestedAction::Other("plan".into())), now())
        .await;

    assert_eq!(result.action, ResultAction::None);
    assert!(result.error().is_none());
    let request = result.request.as_ref().unwrap();
    assert_eq!(request.stack_name, "prod-db-yesterdaytabase");
    assert_eq!(request.restore_target_name, "prod-db-yesterday-2024-05-04-0330");
    assert!(cloud.mutations().is_empty());

    let value = result.to_json();
    assert!(value["action"].is_null());
    assert_eq!(value["stack_args"]["StackName"], "prod-db-yesterdaytabase");
}

#[tokio::test]
async fn test_catalog_fault_is_reported() {
    let cloud = cloud_with_snapshot();
    cloud.fail_catalog_with(CloudError::service(
        "DescribeDBSnapshots",
        "AccessDenied",
        "not authorized to perform rds:DescribeDBSnapshots",
    ));

    let result = handler(&cloud, TemplateSource::Embedded)
        .handle(&event(RequestedAction::Update), now())
        .await;

    assert!(result.is_failure());
    assert_eq!(result.action, ResultAction::Update);
    assert!(result.error().unwrap().contains("rds:DescribeDBSnapshots"));
    assert!(cloud.mutations().is_empty());
}

#[tokio::test]
async fn test_created_stack_uses_embedded_template() {
    let cloud = cloud_with_snapshot();
    handler(&cloud, TemplateSource::Embedded)
        .handle(&event(RequestedAction::Create), now())
        .await;

    let applied = cloud.last_request("prod-db-yesterdaytabase").unwrap();
    assert_eq!(applied.template_body, yt_core::template::EMBEDDED_TEMPLATE);
}
