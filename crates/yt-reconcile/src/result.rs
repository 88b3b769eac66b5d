//! Reconciliation outcomes and the structured result returned to the caller

use serde::{Serialize, Serializer};
use yt_cloud::CloudError;
use yt_core::{CoreError, RequestedAction, StackName, StackRequest};

/// Error text reported when the configured database has no snapshots
pub const NO_SNAPSHOTS_ERROR: &str = "No DB snapshots";

/// Action reported in the result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultAction {
    Create,
    Update,
    Delete,
    /// No action was taken or requested (serialized as `null`)
    None,
}

impl ResultAction {
    /// The action to report before the reconciler has decided anything
    pub fn requested(action: &RequestedAction) -> Self {
        match action {
            RequestedAction::Create => ResultAction::Create,
            RequestedAction::Update => ResultAction::Update,
            RequestedAction::Delete => ResultAction::Delete,
            RequestedAction::Other(_) => ResultAction::None,
        }
    }

    /// Wire name, `None` for no action
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            ResultAction::Create => Some("create"),
            ResultAction::Update => Some("update"),
            ResultAction::Delete => Some("delete"),
            ResultAction::None => None,
        }
    }
}

/// What happened during one invocation
#[derive(Debug)]
pub enum Outcome {
    /// The stack service accepted the mutation
    Applied,

    /// The action was not recognised; the derived request is reported only
    Reported,

    /// The catalog holds no snapshot of the configured database
    NoSnapshots { database: String },

    /// The stack is mid-operation and was left alone
    ConflictingState { stack: StackName, status: String },

    /// Configuration missing, unreadable or incomplete
    ConfigError(CoreError),

    /// The template document could not be read
    TemplateUnreadable(CoreError),

    /// A remote call failed for a reason other than the stack being absent
    RemoteServiceFault { context: String, fault: CloudError },
}

impl Outcome {
    /// Whether the invocation failed, as opposed to reporting an expected condition
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Outcome::ConfigError(_)
                | Outcome::TemplateUnreadable(_)
                | Outcome::RemoteServiceFault { .. }
        )
    }
}

/// Result of one invocation: the action, the outcome, and the derived request when there is one
#[derive(Debug)]
pub struct ReconciliationResult {
    pub action: ResultAction,
    pub outcome: Outcome,
    pub request: Option<StackRequest>,
}

impl ReconciliationResult {
    pub fn new(action: ResultAction, outcome: Outcome, request: Option<StackRequest>) -> Self {
        Self {
            action,
            outcome,
            request,
        }
    }

    /// Error text, `None` on success and for unrecognised actions
    pub fn error(&self) -> Option<String> {
        match &self.outcome {
            Outcome::Applied | Outcome::Reported => None,
            Outcome::NoSnapshots { .. } => Some(NO_SNAPSHOTS_ERROR.to_string()),
            Outcome::ConflictingState { .. } => self.message(),
            Outcome::ConfigError(err) | Outcome::TemplateUnreadable(err) => Some(err.to_string()),
            Outcome::RemoteServiceFault { fault, .. } => Some(fault.to_string()),
        }
    }

    /// Human-readable explanation accompanying an error
    pub fn message(&self) -> Option<String> {
        match &self.outcome {
            Outcome::Applied | Outcome::Reported => None,
            Outcome::NoSnapshots { database } => {
                Some(format!("No snapshots found for database {}", database))
            }
            Outcome::ConflictingState { stack, status } => Some(format!(
                "Stack {} is in state {} and cannot be updated",
                stack, status
            )),
            Outcome::ConfigError(_) => Some("Invalid configuration".to_string()),
            Outcome::TemplateUnreadable(_) => {
                Some("Couldn't read CloudFormation template.".to_string())
            }
            Outcome::RemoteServiceFault { context, .. } => Some(context.clone()),
        }
    }

    /// See [`Outcome::is_failure`]
    pub fn is_failure(&self) -> bool {
        self.outcome.is_failure()
    }

    /// JSON form returned to the scheduler
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

#[derive(Serialize)]
struct WireResult<'a> {
    action: Option<&'static str>,
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stack_args: Option<&'a StackRequest>,
}

impl Serialize for ReconciliationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        WireResult {
            action: self.action.as_str(),
            error: self.error(),
            message: self.message(),
            stack_args: self.request.as_ref(),
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
#[path = "result_test.rs"]
mod tests;
