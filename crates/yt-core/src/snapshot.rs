//! Database snapshot records and latest-snapshot selection

use crate::newtype_string::define_identifier;
use chrono::{DateTime, Utc};
use serde::Serialize;

define_identifier! {
    /// Unique identifier of a database snapshot.
    pub struct SnapshotId;
}

/// A restorable snapshot as reported by the snapshot catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Snapshot identifier
    pub identifier: SnapshotId,

    /// Instance identifier of the database the snapshot was taken from
    pub source_database_name: String,

    /// Storage allocated to the source instance, in GiB
    pub allocated_storage_gib: i32,

    /// When the snapshot was taken
    pub created_at: DateTime<Utc>,
}

/// Pick the most recent snapshot of `source_database_name`.
///
/// Returns `None` when the catalog holds no snapshot of that database. On
/// equal timestamps the first entry in catalog order wins.
pub fn select_latest<'a>(catalog: &'a [Snapshot], source_database_name: &str) -> Option<&'a Snapshot> {
    catalog
        .iter()
        .filter(|snap| snap.source_database_name == source_database_name)
        .fold(None, |best: Option<&Snapshot>, snap| match best {
            Some(current) if current.created_at >= snap.created_at => Some(current),
            _ => Some(snap),
        })
}

#[cfg(test)]
#[path = "snapshot_test.rs"]
mod tests;
