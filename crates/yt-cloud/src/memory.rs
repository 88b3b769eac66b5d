//! In-memory snapshot catalog and stack service for tests
//!
//! Mutations are recorded and move the stack into the matching
//! `*_IN_PROGRESS` status, so tests decide when an operation "finishes" with
//! [`InMemoryCloud::set_stack_status`].

use crate::error::{CloudError, CloudResult};
use crate::traits::{SnapshotCatalog, StackService};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use yt_core::{Snapshot, StackName, StackRequest};

/// A remote call observed by the in-memory services
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloudCall {
    ListSnapshots,
    DescribeStack(String),
    CreateStack(String),
    UpdateStack(String),
    DeleteStack(String),
}

impl CloudCall {
    /// Whether the call mutates a stack
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            CloudCall::CreateStack(_) | CloudCall::UpdateStack(_) | CloudCall::DeleteStack(_)
        )
    }
}

#[derive(Debug, Clone)]
struct StackRecord {
    status: String,
    request: Option<StackRequest>,
}

#[derive(Debug, Default)]
struct State {
    snapshots: Vec<Snapshot>,
    stacks: BTreeMap<String, StackRecord>,
    calls: Vec<CloudCall>,
    catalog_fault: Option<CloudError>,
    describe_fault: Option<CloudError>,
    mutation_fault: Option<CloudError>,
}

/// Snapshot catalog and stack service sharing one in-memory state
#[derive(Debug, Default)]
pub struct InMemoryCloud {
    state: Mutex<State>,
}

impl InMemoryCloud {
    /// Empty catalog, no stacks
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog seeded with `snapshots`
    pub fn with_snapshots(snapshots: Vec<Snapshot>) -> Self {
        let cloud = Self::default();
        cloud.state().snapshots = snapshots;
        cloud
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Put a stack in place with the given status
    pub fn set_stack_status(&self, name: &str, status: &str) {
        let mut state = self.state();
        let record = state
            .stacks
            .entry(name.to_string())
            .or_insert_with(|| StackRecord {
                status: String::new(),
                request: None,
            });
        record.status = status.to_string();
    }

    /// Current status of a stack, `None` when absent
    pub fn status_of(&self, name: &str) -> Option<String> {
        self.state().stacks.get(name).map(|r| r.status.clone())
    }

    /// Last request applied to a stack by create or update
    pub fn last_request(&self, name: &str) -> Option<StackRequest> {
        self.state()
            .stacks
            .get(name)
            .and_then(|r| r.request.clone())
    }

    /// Every call made so far, in order
    pub fn calls(&self) -> Vec<CloudCall> {
        self.state().calls.clone()
    }

    /// Calls that mutated a stack
    pub fn mutations(&self) -> Vec<CloudCall> {
        self.state()
            .calls
            .iter()
            .filter(|c| c.is_mutation())
            .cloned()
            .collect()
    }

    /// Make every catalog query fail with `err`
    pub fn fail_catalog_with(&self, err: CloudError) {
        self.state().catalog_fault = Some(err);
    }

    /// Make every describe fail with `err`
    pub fn fail_describe_with(&self, err: CloudError) {
        self.state().describe_fault = Some(err);
    }

    /// Make every create, update and delete fail with `err`
    pub fn fail_mutations_with(&self, err: CloudError) {
        self.state().mutation_fault = Some(err);
    }
}

fn is_settled(status: &str) -> bool {
    status.ends_with("COMPLETE")
}

#[async_trait]
impl SnapshotCatalog for InMemoryCloud {
    async fn list_snapshots(&self) -> CloudResult<Vec<Snapshot>> {
        let mut state = self.state();
        state.calls.push(CloudCall::ListSnapshots);
        match &state.catalog_fault {
            Some(err) => Err(err.clone()),
            None => Ok(state.snapshots.clone()),
        }
    }

    fn service_name(&self) -> &'static str {
        "memory"
    }
}

#[async_trait]
impl StackService for InMemoryCloud {
    async fn stack_status(&self, name: &StackName) -> CloudResult<String> {
        let mut state = self.state();
        state.calls.push(CloudCall::DescribeStack(name.to_string()));
        if let Some(err) = &state.describe_fault {
            return Err(err.clone());
        }
        state
            .stacks
            .get(name.as_str())
            .map(|r| r.status.clone())
            .ok_or_else(|| CloudError::StackNotFound(name.to_string()))
    }

    async fn create_stack(&self, request: &StackRequest) -> CloudResult<()> {
        let name = request.stack_name.to_string();
        let mut state = self.state();
        state.calls.push(CloudCall::CreateStack(name.clone()));
        if let Some(err) = &state.mutation_fault {
            return Err(err.clone());
        }
        if state.stacks.contains_key(&name) {
            return Err(CloudError::service(
                "CreateStack",
                "AlreadyExistsException",
                format!("Stack [{}] already exists", name),
            ));
        }
        state.stacks.insert(
            name,
            StackRecord {
                status: "CREATE_IN_PROGRESS".to_string(),
                request: Some(request.clone()),
            },
        );
        Ok(())
    }

    async fn update_stack(&self, request: &StackRequest) -> CloudResult<()> {
        let name = request.stack_name.to_string();
        let mut state = self.state();
        state.calls.push(CloudCall::UpdateStack(name.clone()));
        if let Some(err) = &state.mutation_fault {
            return Err(err.clone());
        }
        match state.stacks.get_mut(&name) {
            None => Err(CloudError::StackNotFound(name)),
            Some(record) if !is_settled(&record.status) => Err(CloudError::service(
                "UpdateStack",
                "ValidationError",
                format!(
                    "Stack:{} is in {} state and can not be updated.",
                    name, record.status
                ),
            )),
            Some(record) => {
                record.status = "UPDATE_IN_PROGRESS".to_string();
                record.request = Some(request.clone());
                Ok(())
            }
        }
    }

    async fn delete_stack(&self, name: &StackName) -> CloudResult<()> {
        let mut state = self.state();
        state.calls.push(CloudCall::DeleteStack(name.to_string()));
        if let Some(err) = &state.mutation_fault {
            return Err(err.clone());
        }
        match state.stacks.remove(name.as_str()) {
            Some(_) => Ok(()),
            None => Err(CloudError::StackNotFound(name.to_string())),
        }
    }

    fn service_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
#[path = "memory_test.rs"]
mod tests;
