//! Status command implementation

use anyhow::{Context, Result};
use serde_json::{json, Value};
use yt_core::stack::stack_name;
use yt_core::StackName;
use yt_reconcile::RemoteStackState;

use crate::cli::{GlobalArgs, OutputFormat, StatusArgs};
use crate::commands::common;
use crate::context::RuntimeContext;

/// Execute the status command
pub(crate) async fn execute(args: &StatusArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global).await;
    let database = ctx.database(args.database.as_deref())?;
    let stack = stack_name(&database);
    ctx.verbose(&format!("Describing stack {}", stack));

    let state = ctx
        .handler
        .reconciler()
        .observe(&stack)
        .await
        .with_context(|| format!("Could not describe stack {}", stack))?;

    match args.output {
        OutputFormat::Json => {
            let view = state_json(&stack, &state);
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
        OutputFormat::Table => common::print_table(
            &["STACK", "STATE", "STATUS"],
            &[vec![
                stack.to_string(),
                state_label(&state).to_string(),
                state_status(&state).unwrap_or("-").to_string(),
            ]],
        ),
    }
    Ok(())
}

fn state_label(state: &RemoteStackState) -> &'static str {
    match state {
        RemoteStackState::Absent => "absent",
        RemoteStackState::StableComplete(_) => "stable",
        RemoteStackState::Transitioning(_) => "transitioning",
    }
}

fn state_status(state: &RemoteStackState) -> Option<&str> {
    match state {
        RemoteStackState::Absent => None,
        RemoteStackState::StableComplete(status) | RemoteStackState::Transitioning(status) => {
            Some(status)
        }
    }
}

/// JSON view of the observed stack state
pub(crate) fn state_json(stack: &StackName, state: &RemoteStackState) -> Value {
    json!({
        "stack": stack.as_str(),
        "state": state_label(state),
        "status": state_status(state),
        "updatable": !matches!(state, RemoteStackState::Transitioning(_)),
    })
}

#[cfg(test)]
#[path = "status_test.rs"]
mod tests;
