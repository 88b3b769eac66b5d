//! Invoke command implementation

use anyhow::{Context, Result};
use chrono::Utc;
use serde_json::Value;

use crate::cli::{GlobalArgs, InvokeArgs};
use crate::commands::common::ExitCode;
use crate::context::RuntimeContext;
use yt_core::{InvocationEvent, RequestedAction};

/// Read the payload from `--event`, `--event-file`, or default to an empty event
fn read_payload(args: &InvokeArgs) -> Result<Value> {
    if let Some(raw) = &args.event {
        return serde_json::from_str(raw).context("--event is not valid JSON");
    }
    if let Some(path) = &args.event_file {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read event file {}", path))?;
        return serde_json::from_str(&content)
            .with_context(|| format!("Event file {} is not valid JSON", path));
    }
    Ok(Value::Object(serde_json::Map::new()))
}

/// Build the invocation event, applying the `--action` override
pub(crate) fn build_event(args: &InvokeArgs) -> Result<InvocationEvent> {
    let mut event = InvocationEvent::from_value(&read_payload(args)?);
    if let Some(action) = &args.action {
        event.action = RequestedAction::parse(action);
    }
    Ok(event)
}

/// Execute the invoke command
pub(crate) async fn execute(args: &InvokeArgs, global: &GlobalArgs) -> Result<()> {
    let event = build_event(args)?;
    let ctx = RuntimeContext::new(global).await;
    ctx.verbose(&format!("Invoking with action '{}'", event.action));

    let result = ctx.handler.handle(&event, Utc::now()).await;
    println!("{}", serde_json::to_string_pretty(&result)?);

    if result.is_failure() {
        return Err(ExitCode(1).into());
    }
    Ok(())
}

#[cfg(test)]
#[path = "invoke_test.rs"]
mod tests;
