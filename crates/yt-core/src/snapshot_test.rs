use super::*;
use chrono::TimeZone;

fn snap(id: &str, db: &str, day: u32, hour: u32) -> Snapshot {
    Snapshot {
        identifier: SnapshotId::try_new(id).unwrap(),
        source_database_name: db.to_string(),
        allocated_storage_gib: 100,
        created_at: Utc.with_ymd_and_hms(2024, 3, day, hour, 0, 0).unwrap(),
    }
}

#[test]
fn test_selects_latest_for_matching_database() {
    let catalog = vec![
        snap("rds:db-x-day1", "db-x", 1, 6),
        snap("rds:db-x-day2", "db-x", 2, 6),
        snap("rds:db-y-day3", "db-y", 3, 6),
    ];

    let latest = select_latest(&catalog, "db-x").unwrap();
    assert_eq!(latest.identifier, "rds:db-x-day2");
}

#[test]
fn test_catalog_order_does_not_matter() {
    let catalog = vec![
        snap("rds:db-x-day2", "db-x", 2, 6),
        snap("rds:db-x-day1", "db-x", 1, 6),
        snap("rds:db-x-day2-late", "db-x", 2, 23),
    ];

    let latest = select_latest(&catalog, "db-x").unwrap();
    assert_eq!(latest.identifier, "rds:db-x-day2-late");
}

#[test]
fn test_no_matching_snapshots() {
    let catalog = vec![snap("rds:db-y-day3", "db-y", 3, 6)];
    assert!(select_latest(&catalog, "db-x").is_none());
    assert!(select_latest(&[], "db-x").is_none());
}

#[test]
fn test_tie_keeps_first_encountered() {
    let catalog = vec![snap("first", "db-x", 2, 6), snap("second", "db-x", 2, 6)];
    assert_eq!(select_latest(&catalog, "db-x").unwrap().identifier, "first");
}

#[test]
fn test_database_match_is_exact() {
    let catalog = vec![snap("rds:db-x-prod", "db-x-prod", 5, 6)];
    assert!(select_latest(&catalog, "db-x").is_none());
}
