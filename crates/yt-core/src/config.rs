//! Configuration types and resolution for yesterdaytabase.yml and inline event config

use crate::error::{CoreError, CoreResult};
use crate::newtype_string::define_identifier;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name of the persisted default configuration
pub const DEFAULT_CONFIG_FILE: &str = "yesterdaytabase.yml";

define_identifier! {
    /// Identifier of the production database whose snapshots are restored.
    pub struct DatabaseName;
}

/// Configuration document as it appears inline in an event or on disk.
///
/// Every field defaults to empty so that validation can report all missing
/// fields at once instead of failing on the first one serde encounters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigDocument {
    /// Root domain the restored instance is published under
    #[serde(default)]
    pub domain: String,

    /// Source database and network placement
    #[serde(default)]
    pub db: DbDocument,
}

/// The `db` section of a configuration document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbDocument {
    /// Instance identifier of the source database
    #[serde(default)]
    pub name: String,

    /// VPC security group attached to the restored instance
    #[serde(default)]
    pub security_group: String,

    /// DB subnet group the restored instance is placed in
    #[serde(default)]
    pub subnet_group: String,
}

impl ConfigDocument {
    /// Check that every required field is present and produce the effective configuration
    pub fn validate(self) -> CoreResult<Configuration> {
        let missing: Vec<String> = [
            ("db.name", &self.db.name),
            ("db.security_group", &self.db.security_group),
            ("db.subnet_group", &self.db.subnet_group),
            ("domain", &self.domain),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field.to_string())
        .collect();

        let source_database_name = match DatabaseName::try_new(self.db.name.trim()) {
            Some(name) if missing.is_empty() => name,
            _ => return Err(CoreError::ConfigInvalid { missing }),
        };

        Ok(Configuration {
            source_database_name,
            domain: self.domain.trim().to_string(),
            security_group: self.db.security_group.trim().to_string(),
            subnet_group: self.db.subnet_group.trim().to_string(),
        })
    }
}

/// Effective configuration for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// Database whose latest snapshot is restored
    pub source_database_name: DatabaseName,

    /// Root domain for the friendly hostname
    pub domain: String,

    /// Security group for the restored instance
    pub security_group: String,

    /// Subnet group for the restored instance
    pub subnet_group: String,
}

/// Resolves the effective configuration from an inline payload or the persisted default
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    default_path: PathBuf,
}

impl ConfigResolver {
    /// Create a resolver that falls back to the document at `default_path`
    pub fn new(default_path: impl Into<PathBuf>) -> Self {
        Self {
            default_path: default_path.into(),
        }
    }

    /// Location of the persisted default
    pub fn default_path(&self) -> &Path {
        &self.default_path
    }

    /// Resolve the configuration for this invocation.
    ///
    /// A present, non-null inline value replaces the persisted default
    /// entirely; the two are never merged.
    pub fn resolve(&self, inline: Option<&serde_json::Value>) -> CoreResult<Configuration> {
        let document = match inline {
            Some(value) if !value.is_null() => {
                log::debug!("Using inline configuration from invocation event");
                serde_json::from_value::<ConfigDocument>(value.clone()).map_err(|e| {
                    CoreError::ConfigParseError {
                        message: format!("inline config: {}", e),
                    }
                })?
            }
            _ => self.load_default()?,
        };

        document.validate()
    }

    fn load_default(&self) -> CoreResult<ConfigDocument> {
        let path = self.default_path.display().to_string();
        log::debug!("No inline configuration, loading default from {}", path);

        let content =
            std::fs::read_to_string(&self.default_path).map_err(|e| CoreError::ConfigNotFound {
                path: path.clone(),
                reason: e.to_string(),
            })?;

        serde_yaml::from_str(&content).map_err(|e| CoreError::ConfigParseError {
            message: format!("{}: {}", path, e),
        })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
