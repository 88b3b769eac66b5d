//! Remote service trait definitions

use crate::error::CloudResult;
use async_trait::async_trait;
use yt_core::{Snapshot, StackName, StackRequest};

/// Read-only catalog of database snapshots
///
/// Implementations must be Send + Sync for async operation.
#[async_trait]
pub trait SnapshotCatalog: Send + Sync {
    /// Every restorable snapshot visible to the caller, across all databases
    async fn list_snapshots(&self) -> CloudResult<Vec<Snapshot>>;

    /// Service identifier for logging
    fn service_name(&self) -> &'static str;
}

/// Declarative infrastructure stack service
///
/// Mutations only start the remote operation; they return once the service
/// has accepted the request.
#[async_trait]
pub trait StackService: Send + Sync {
    /// Current status string of the stack.
    ///
    /// Returns `CloudError::StackNotFound` when no stack exists under `name`,
    /// and any other variant for every other fault.
    async fn stack_status(&self, name: &StackName) -> CloudResult<String>;

    /// Start creating a stack
    async fn create_stack(&self, request: &StackRequest) -> CloudResult<()>;

    /// Start updating an existing stack
    async fn update_stack(&self, request: &StackRequest) -> CloudResult<()>;

    /// Start deleting a stack
    async fn delete_stack(&self, name: &StackName) -> CloudResult<()>;

    /// Service identifier for logging
    fn service_name(&self) -> &'static str;
}
