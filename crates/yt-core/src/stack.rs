//! Stack naming and parameter derivation
//!
//! Everything here is a pure function of the configuration, the selected
//! snapshot and the invocation time. The stack name depends on the source
//! database name only, so every invocation addresses the same logical stack.

use crate::config::{Configuration, DatabaseName};
use crate::newtype_string::define_identifier;
use crate::snapshot::Snapshot;
use chrono::{DateTime, Utc};
use serde::Serialize;

define_identifier! {
    /// Name of the infrastructure stack holding the restored instance.
    pub struct StackName;
}

/// Template parameter keys
pub mod params {
    pub const SNAPSHOT_ID: &str = "SnapshotID";
    pub const DISK_SIZE: &str = "DiskSize";
    pub const DOMAIN_ROOT: &str = "DomainRoot";
    pub const DB_NAME: &str = "DBName";
    pub const HOST_NAME: &str = "HostName";
    pub const SECURITY_GROUP: &str = "SecurityGroup";
    pub const SUBNET_GROUP: &str = "SubnetGroup";
}

const STACK_SUFFIX: &str = "yesterdaytabase";
const RESTORE_SUFFIX: &str = "yesterday";
const RESTORE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d-%H%M";

/// Deterministic stack name for a source database
pub fn stack_name(database: &DatabaseName) -> StackName {
    StackName(format!("{}-{}", database, STACK_SUFFIX))
}

/// Instance identifier for the restored copy, unique per UTC minute
pub fn restore_target_name(database: &DatabaseName, now: DateTime<Utc>) -> String {
    format!(
        "{}-{}-{}",
        database,
        RESTORE_SUFFIX,
        now.format(RESTORE_TIMESTAMP_FORMAT)
    )
}

/// Stable host label the restored instance is published under
pub fn host_label(database: &DatabaseName) -> String {
    format!("{}-{}", database, RESTORE_SUFFIX)
}

/// A single template parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StackParameter {
    #[serde(rename = "ParameterKey")]
    pub key: String,

    #[serde(rename = "ParameterValue")]
    pub value: String,
}

impl StackParameter {
    fn new(key: &str, value: impl Into<String>) -> Self {
        Self {
            key: key.to_string(),
            value: value.into(),
        }
    }
}

/// Derive the template parameters for restoring `snapshot`
pub fn derive_parameters(
    config: &Configuration,
    snapshot: &Snapshot,
    restore_target: &str,
) -> Vec<StackParameter> {
    vec![
        StackParameter::new(params::SNAPSHOT_ID, snapshot.identifier.as_str()),
        StackParameter::new(params::DISK_SIZE, snapshot.allocated_storage_gib.to_string()),
        StackParameter::new(params::DOMAIN_ROOT, config.domain.as_str()),
        StackParameter::new(params::DB_NAME, restore_target),
        StackParameter::new(params::HOST_NAME, host_label(&config.source_database_name)),
        StackParameter::new(params::SECURITY_GROUP, config.security_group.as_str()),
        StackParameter::new(params::SUBNET_GROUP, config.subnet_group.as_str()),
    ]
}

/// Everything needed to create or update the stack, echoed back in results
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StackRequest {
    #[serde(rename = "StackName")]
    pub stack_name: StackName,

    #[serde(skip)]
    pub restore_target_name: String,

    #[serde(rename = "TemplateBody")]
    pub template_body: String,

    #[serde(rename = "Parameters")]
    pub parameters: Vec<StackParameter>,
}

impl StackRequest {
    /// Build the request for this invocation
    pub fn derive(
        config: &Configuration,
        snapshot: &Snapshot,
        template_body: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        let restore_target_name = restore_target_name(&config.source_database_name, now);
        let parameters = derive_parameters(config, snapshot, &restore_target_name);
        Self {
            stack_name: stack_name(&config.source_database_name),
            restore_target_name,
            template_body: template_body.into(),
            parameters,
        }
    }

    /// Look up a parameter value by key
    pub fn parameter(&self, key: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|p| p.key == key)
            .map(|p| p.value.as_str())
    }
}

#[cfg(test)]
#[path = "stack_test.rs"]
mod tests;
