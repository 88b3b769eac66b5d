//! Lambda command implementation

use anyhow::{anyhow, Result};
use chrono::Utc;
use lambda_runtime::{service_fn, LambdaEvent};
use serde_json::Value;
use std::sync::Arc;
use yt_core::InvocationEvent;

use crate::cli::GlobalArgs;
use crate::context::RuntimeContext;

/// Execute the lambda command: serve one handler invocation per runtime event
pub(crate) async fn execute(global: &GlobalArgs) -> Result<()> {
    let ctx = Arc::new(RuntimeContext::new(global).await);
    log::info!("Serving invocations on the Lambda runtime");

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        let ctx = Arc::clone(&ctx);
        async move {
            log::debug!("Received invocation {}", event.context.request_id);
            let invocation = InvocationEvent::from_value(&event.payload);
            let result = ctx.handler.handle(&invocation, Utc::now()).await;
            if let Some(error) = result.error() {
                log::warn!("Invocation finished with error: {}", error);
            }
            Ok::<Value, lambda_runtime::Error>(result.to_json())
        }
    }))
    .await
    .map_err(|err| anyhow!("Lambda runtime stopped: {}", err))
}
