//! Snapshots command implementation

use anyhow::{Context, Result};
use serde_json::json;
use yt_core::Snapshot;

use crate::cli::{GlobalArgs, OutputFormat, SnapshotsArgs};
use crate::commands::common;
use crate::context::RuntimeContext;

/// Execute the snapshots command
pub(crate) async fn execute(args: &SnapshotsArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global).await;
    let database = ctx.database(args.database.as_deref())?;
    ctx.verbose(&format!("Listing snapshots of {}", database));

    let mut snapshots = ctx
        .handler
        .selector()
        .snapshots_of(&database)
        .await
        .with_context(|| format!("Could not list DB snapshots for {}", database))?;
    if let Some(limit) = args.limit {
        snapshots.truncate(limit);
    }

    match args.output {
        OutputFormat::Json => {
            let listing = json!({
                "database": database.as_str(),
                "snapshots": snapshots,
            });
            println!("{}", serde_json::to_string_pretty(&listing)?);
        }
        OutputFormat::Table => {
            if snapshots.is_empty() {
                println!("No snapshots found for database {}", database);
            } else {
                common::print_table(&["", "SNAPSHOT", "CREATED", "GIB"], &table_rows(&snapshots));
            }
        }
    }
    Ok(())
}

/// Table rows for snapshots listed newest first; the first row is marked as the restore candidate
pub(crate) fn table_rows(snapshots: &[Snapshot]) -> Vec<Vec<String>> {
    snapshots
        .iter()
        .enumerate()
        .map(|(i, s)| {
            vec![
                if i == 0 { "*" } else { "" }.to_string(),
                s.identifier.to_string(),
                s.created_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
                s.allocated_storage_gib.to_string(),
            ]
        })
        .collect()
}

#[cfg(test)]
#[path = "snapshots_test.rs"]
mod tests;
