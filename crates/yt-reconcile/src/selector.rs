//! Snapshot selection against the remote catalog

use std::sync::Arc;
use yt_cloud::{CloudResult, SnapshotCatalog};
use yt_core::{select_latest, DatabaseName, Snapshot};

/// Finds the newest snapshot of a database in the remote catalog
pub struct SnapshotSelector {
    catalog: Arc<dyn SnapshotCatalog>,
}

impl SnapshotSelector {
    pub fn new(catalog: Arc<dyn SnapshotCatalog>) -> Self {
        Self { catalog }
    }

    /// Every snapshot of `database`, newest first
    pub async fn snapshots_of(&self, database: &DatabaseName) -> CloudResult<Vec<Snapshot>> {
        let mut snapshots: Vec<Snapshot> = self
            .catalog
            .list_snapshots()
            .await?
            .into_iter()
            .filter(|snap| snap.source_database_name == database.as_str())
            .collect();
        snapshots.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(snapshots)
    }

    /// The newest snapshot of `database`, `None` when there is none
    pub async fn select_latest(&self, database: &DatabaseName) -> CloudResult<Option<Snapshot>> {
        let catalog = self.catalog.list_snapshots().await?;
        log::debug!(
            "{} catalog holds {} snapshots",
            self.catalog.service_name(),
            catalog.len()
        );

        let latest = select_latest(&catalog, database.as_str()).cloned();
        match &latest {
            Some(snap) => log::info!(
                "Latest snapshot of {} is {} ({} GiB, taken {})",
                database,
                snap.identifier,
                snap.allocated_storage_gib,
                snap.created_at
            ),
            None => log::info!("No snapshots found for database {}", database),
        }
        Ok(latest)
    }
}

#[cfg(test)]
#[path = "selector_test.rs"]
mod tests;
