use super::*;
use chrono::{TimeZone, Utc};
use yt_cloud::memory::{CloudCall, InMemoryCloud};
use yt_cloud::CloudError;
use yt_core::SnapshotId;

fn snap(id: &str, db: &str, day: u32) -> Snapshot {
    Snapshot {
        identifier: SnapshotId::try_new(id).unwrap(),
        source_database_name: db.to_string(),
        allocated_storage_gib: 20 + day as i32,
        created_at: Utc.with_ymd_and_hms(2024, 5, day, 4, 0, 0).unwrap(),
    }
}

fn db(name: &str) -> DatabaseName {
    DatabaseName::try_new(name).unwrap()
}

#[tokio::test]
async fn test_select_latest_queries_catalog_once() {
    let cloud = Arc::new(InMemoryCloud::with_snapshots(vec![
        snap("a1", "db-a", 1),
        snap("a3", "db-a", 3),
        snap("b9", "db-b", 9),
    ]));
    let selector = SnapshotSelector::new(cloud.clone());

    let latest = selector.select_latest(&db("db-a")).await.unwrap().unwrap();
    assert_eq!(latest.identifier, "a3");
    assert_eq!(latest.allocated_storage_gib, 23);
    assert_eq!(cloud.calls(), vec![CloudCall::ListSnapshots]);
}

#[tokio::test]
async fn test_select_latest_none_when_database_has_no_snapshots() {
    let cloud = Arc::new(InMemoryCloud::with_snapshots(vec![snap("b9", "db-b", 9)]));
    let selector = SnapshotSelector::new(cloud);
    assert!(selector.select_latest(&db("db-a")).await.unwrap().is_none());
}

#[tokio::test]
async fn test_catalog_fault_propagates() {
    let cloud = Arc::new(InMemoryCloud::new());
    cloud.fail_catalog_with(CloudError::service(
        "DescribeDBSnapshots",
        "AccessDenied",
        "not authorized",
    ));
    let selector = SnapshotSelector::new(cloud);
    assert!(selector.select_latest(&db("db-a")).await.is_err());
}

#[tokio::test]
async fn test_snapshots_of_newest_first() {
    let cloud = Arc::new(InMemoryCloud::with_snapshots(vec![
        snap("a1", "db-a", 1),
        snap("b9", "db-b", 9),
        snap("a3", "db-a", 3),
        snap("a2", "db-a", 2),
    ]));
    let selector = SnapshotSelector::new(cloud);

    let ids: Vec<String> = selector
        .snapshots_of(&db("db-a"))
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.identifier.to_string())
        .collect();
    assert_eq!(ids, vec!["a3", "a2", "a1"]);
}
