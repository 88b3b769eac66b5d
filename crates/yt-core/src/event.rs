//! Inbound invocation payload

use serde_json::Value;
use std::fmt;

/// Action requested by the caller
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestedAction {
    /// Create the stack, or update it when it already exists (the default)
    #[default]
    Create,
    /// Same semantics as `Create`
    Update,
    /// Delete the stack
    Delete,
    /// Any other value; the derived request is reported but nothing is mutated
    Other(String),
}

impl RequestedAction {
    /// Parse an action string from a payload
    pub fn parse(value: &str) -> Self {
        match value {
            "create" => RequestedAction::Create,
            "update" => RequestedAction::Update,
            "delete" => RequestedAction::Delete,
            other => RequestedAction::Other(other.to_string()),
        }
    }

    /// Whether this request should converge the stack (create or update)
    pub fn is_create_or_update(&self) -> bool {
        matches!(self, RequestedAction::Create | RequestedAction::Update)
    }
}

impl fmt::Display for RequestedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestedAction::Create => write!(f, "create"),
            RequestedAction::Update => write!(f, "update"),
            RequestedAction::Delete => write!(f, "delete"),
            RequestedAction::Other(other) => write!(f, "{}", other),
        }
    }
}

/// One invocation of the handler
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InvocationEvent {
    /// Requested action
    pub action: RequestedAction,

    /// Inline configuration, if supplied (parsed later by the config resolver)
    pub config: Option<Value>,
}

impl InvocationEvent {
    /// Build an event from an arbitrary JSON payload.
    ///
    /// Schedulers wrap payloads in their own envelopes, so unknown fields are
    /// ignored and a payload that is not an object is treated as empty. A
    /// non-string `action` is kept as an unrecognised action.
    pub fn from_value(payload: &Value) -> Self {
        let Some(object) = payload.as_object() else {
            return Self::default();
        };

        let action = match object.get("action") {
            None | Some(Value::Null) => RequestedAction::default(),
            Some(Value::String(s)) => RequestedAction::parse(s),
            Some(other) => RequestedAction::Other(other.to_string()),
        };

        let config = object.get("config").filter(|v| !v.is_null()).cloned();

        Self { action, config }
    }

    /// Event carrying only an action
    pub fn with_action(action: RequestedAction) -> Self {
        Self {
            action,
            config: None,
        }
    }
}

#[cfg(test)]
#[path = "event_test.rs"]
mod tests;
