//! AWS implementations: RDS snapshot catalog and CloudFormation stack service

use crate::error::{CloudError, CloudResult};
use crate::traits::{SnapshotCatalog, StackService};
use async_trait::async_trait;
use aws_config::retry::RetryConfig;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_cloudformation::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_cloudformation::types::Parameter;
use aws_sdk_rds::types::DbSnapshot;
use chrono::{DateTime, Utc};
use yt_core::{Snapshot, SnapshotId, StackName, StackRequest};

/// Error code CloudFormation uses for request validation failures, including
/// lookups of stacks that do not exist
const VALIDATION_ERROR_CODE: &str = "ValidationError";

/// Load shared SDK configuration from the environment.
///
/// Retries are disabled: every remote call is attempted exactly once and the
/// next scheduled invocation acts as the retry.
pub async fn load_sdk_config(region: Option<String>) -> SdkConfig {
    let mut loader =
        aws_config::defaults(BehaviorVersion::latest()).retry_config(RetryConfig::disabled());
    if let Some(region) = region {
        loader = loader.region(Region::new(region));
    }
    loader.load().await
}

/// Convert an SDK failure into a service fault, keeping the provider's
/// error code and diagnostic message
fn service_fault<E, R>(operation: &'static str, err: SdkError<E, R>) -> CloudError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    let code = err.code().unwrap_or("Unknown").to_string();
    let message = match err.message() {
        Some(message) => message.to_string(),
        None => DisplayErrorContext(&err).to_string(),
    };
    CloudError::service(operation, code, message)
}

/// Classify a DescribeStacks fault.
///
/// CloudFormation has no dedicated error code for a missing stack; it
/// answers with a generic `ValidationError` whose message says the stack
/// "does not exist". This is the only place that inspects message text, so
/// callers can match on `CloudError::StackNotFound` instead.
pub fn classify_describe_fault(stack: &StackName, code: &str, message: &str) -> CloudError {
    if code == VALIDATION_ERROR_CODE && message.contains("does not exist") {
        CloudError::StackNotFound(stack.to_string())
    } else {
        CloudError::service("DescribeStacks", code, message)
    }
}

/// Convert an RDS snapshot record, skipping records that cannot be restored
/// from yet (no creation time while the snapshot is still being taken)
fn convert_snapshot(snap: &DbSnapshot) -> Option<Snapshot> {
    let identifier = SnapshotId::try_new(snap.db_snapshot_identifier()?)?;
    let Some(taken) = snap.snapshot_create_time() else {
        log::debug!("Skipping snapshot {} without a creation time", identifier);
        return None;
    };
    let created_at: DateTime<Utc> = DateTime::from_timestamp(taken.secs(), taken.subsec_nanos())?;

    Some(Snapshot {
        identifier,
        source_database_name: snap.db_instance_identifier()?.to_string(),
        allocated_storage_gib: snap.allocated_storage()?,
        created_at,
    })
}

/// Snapshot catalog backed by RDS `DescribeDBSnapshots`
pub struct RdsSnapshotCatalog {
    client: aws_sdk_rds::Client,
}

impl RdsSnapshotCatalog {
    /// Create a catalog client from shared SDK configuration
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: aws_sdk_rds::Client::new(config),
        }
    }
}

#[async_trait]
impl SnapshotCatalog for RdsSnapshotCatalog {
    async fn list_snapshots(&self) -> CloudResult<Vec<Snapshot>> {
        let mut snapshots = Vec::new();
        let mut marker: Option<String> = None;

        loop {
            let page = self
                .client
                .describe_db_snapshots()
                .set_marker(marker.take())
                .send()
                .await
                .map_err(|e| service_fault("DescribeDBSnapshots", e))?;

            snapshots.extend(page.db_snapshots().iter().filter_map(convert_snapshot));

            match page.marker() {
                Some(next) if !next.is_empty() => marker = Some(next.to_string()),
                _ => break,
            }
        }

        log::debug!("RDS catalog returned {} snapshots", snapshots.len());
        Ok(snapshots)
    }

    fn service_name(&self) -> &'static str {
        "rds"
    }
}

/// Stack service backed by CloudFormation
pub struct CloudFormationStacks {
    client: aws_sdk_cloudformation::Client,
}

impl CloudFormationStacks {
    /// Create a stack service client from shared SDK configuration
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: aws_sdk_cloudformation::Client::new(config),
        }
    }
}

fn sdk_parameters(request: &StackRequest) -> Vec<Parameter> {
    request
        .parameters
        .iter()
        .map(|p| {
            Parameter::builder()
                .parameter_key(p.key.clone())
                .parameter_value(p.value.clone())
                .build()
        })
        .collect()
}

#[async_trait]
impl StackService for CloudFormationStacks {
    async fn stack_status(&self, name: &StackName) -> CloudResult<String> {
        let output = self
            .client
            .describe_stacks()
            .stack_name(name.as_str())
            .send()
            .await
            .map_err(|err| match err.code() {
                Some(code) => classify_describe_fault(name, code, err.message().unwrap_or("")),
                None => service_fault("DescribeStacks", err),
            })?;

        output
            .stacks()
            .first()
            .and_then(|stack| stack.stack_status())
            .map(|status| status.as_str().to_string())
            .ok_or_else(|| CloudError::StackNotFound(name.to_string()))
    }

    async fn create_stack(&self, request: &StackRequest) -> CloudResult<()> {
        let output = self
            .client
            .create_stack()
            .stack_name(request.stack_name.as_str())
            .template_body(request.template_body.clone())
            .set_parameters(Some(sdk_parameters(request)))
            .send()
            .await
            .map_err(|e| service_fault("CreateStack", e))?;

        log::info!(
            "CloudFormation accepted create of {} ({})",
            request.stack_name,
            output.stack_id().unwrap_or("no stack id")
        );
        Ok(())
    }

    async fn update_stack(&self, request: &StackRequest) -> CloudResult<()> {
        let output = self
            .client
            .update_stack()
            .stack_name(request.stack_name.as_str())
            .template_body(request.template_body.clone())
            .set_parameters(Some(sdk_parameters(request)))
            .send()
            .await
            .map_err(|e| service_fault("UpdateStack", e))?;

        log::info!(
            "CloudFormation accepted update of {} ({})",
            request.stack_name,
            output.stack_id().unwrap_or("no stack id")
        );
        Ok(())
    }

    async fn delete_stack(&self, name: &StackName) -> CloudResult<()> {
        self.client
            .delete_stack()
            .stack_name(name.as_str())
            .send()
            .await
            .map_err(|e| service_fault("DeleteStack", e))?;
        Ok(())
    }

    fn service_name(&self) -> &'static str {
        "cloudformation"
    }
}

#[cfg(test)]
#[path = "aws_test.rs"]
mod tests;
