//! Stack reconciler: observe the remote stack, then create, update, delete or report

use crate::result::{Outcome, ReconciliationResult, ResultAction};
use std::fmt;
use std::sync::Arc;
use yt_cloud::{CloudError, CloudResult, StackService};
use yt_core::{RequestedAction, StackName, StackRequest};

/// Status suffix marking a finished stack operation
const SETTLED_SUFFIX: &str = "COMPLETE";

/// Observed state of the target stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteStackState {
    /// No stack exists under the name
    Absent,
    /// The last operation finished (successfully or not); safe to mutate
    StableComplete(String),
    /// An operation is in flight; must not be mutated
    Transitioning(String),
}

impl RemoteStackState {
    /// Classify a status string reported by the stack service
    pub fn from_status(status: String) -> Self {
        if status.ends_with(SETTLED_SUFFIX) {
            RemoteStackState::StableComplete(status)
        } else {
            RemoteStackState::Transitioning(status)
        }
    }
}

impl fmt::Display for RemoteStackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteStackState::Absent => write!(f, "absent"),
            RemoteStackState::StableComplete(status) => write!(f, "stable ({})", status),
            RemoteStackState::Transitioning(status) => write!(f, "transitioning ({})", status),
        }
    }
}

/// Decides and issues the single mutation for the target stack
pub struct StackReconciler {
    stacks: Arc<dyn StackService>,
}

impl StackReconciler {
    pub fn new(stacks: Arc<dyn StackService>) -> Self {
        Self { stacks }
    }

    /// Observe the stack with one describe call.
    ///
    /// Only a not-found fault means the stack is absent; every other fault is
    /// returned so that a transient failure never leads to a duplicate create.
    pub async fn observe(&self, name: &StackName) -> CloudResult<RemoteStackState> {
        match self.stacks.stack_status(name).await {
            Ok(status) => Ok(RemoteStackState::from_status(status)),
            Err(CloudError::StackNotFound(_)) => Ok(RemoteStackState::Absent),
            Err(fault) => Err(fault),
        }
    }

    /// Create the stack when absent, update it when settled, or report a conflict
    pub async fn converge(
        &self,
        requested: &RequestedAction,
        request: StackRequest,
    ) -> ReconciliationResult {
        let state = match self.observe(&request.stack_name).await {
            Ok(state) => state,
            Err(fault) => {
                log::error!("Could not describe stack {}: {}", request.stack_name, fault);
                return ReconciliationResult::new(
                    ResultAction::requested(requested),
                    Outcome::RemoteServiceFault {
                        context: format!("Could not describe stack {}", request.stack_name),
                        fault,
                    },
                    Some(request),
                );
            }
        };
        log::debug!("Stack {} is {}", request.stack_name, state);

        match state {
            RemoteStackState::Absent => {
                log::info!("Creating stack {}", request.stack_name);
                let outcome = self.stacks.create_stack(&request).await;
                Self::mutation_result(ResultAction::Create, "create", outcome, request)
            }
            RemoteStackState::StableComplete(status) => {
                log::info!("Updating stack {} (was {})", request.stack_name, status);
                let outcome = self.stacks.update_stack(&request).await;
                Self::mutation_result(ResultAction::Update, "update", outcome, request)
            }
            RemoteStackState::Transitioning(status) => {
                log::warn!(
                    "Stack {} is in state {} and cannot be updated",
                    request.stack_name,
                    status
                );
                ReconciliationResult::new(
                    ResultAction::Update,
                    Outcome::ConflictingState {
                        stack: request.stack_name.clone(),
                        status,
                    },
                    Some(request),
                )
            }
        }
    }

    fn mutation_result(
        action: ResultAction,
        verb: &str,
        outcome: CloudResult<()>,
        request: StackRequest,
    ) -> ReconciliationResult {
        match outcome {
            Ok(()) => ReconciliationResult::new(action, Outcome::Applied, Some(request)),
            Err(fault) => {
                log::error!("Could not {} stack {}: {}", verb, request.stack_name, fault);
                ReconciliationResult::new(
                    action,
                    Outcome::RemoteServiceFault {
                        context: format!("Could not {} stack {}", verb, request.stack_name),
                        fault,
                    },
                    Some(request),
                )
            }
        }
    }

    /// Delete the stack regardless of its state
    pub async fn delete(&self, name: &StackName) -> ReconciliationResult {
        log::info!("Deleting stack {}", name);
        match self.stacks.delete_stack(name).await {
            Ok(()) => ReconciliationResult::new(ResultAction::Delete, Outcome::Applied, None),
            Err(fault) => {
                log::error!("Could not delete stack {}: {}", name, fault);
                ReconciliationResult::new(
                    ResultAction::Delete,
                    Outcome::RemoteServiceFault {
                        context: format!("Could not delete stack {}", name),
                        fault,
                    },
                    None,
                )
            }
        }
    }
}

#[cfg(test)]
#[path = "reconciler_test.rs"]
mod tests;
