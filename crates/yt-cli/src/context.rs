//! Runtime context for CLI commands

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;
use yt_cloud::{
    load_sdk_config, CloudFormationStacks, RdsSnapshotCatalog, SnapshotCatalog, StackService,
};
use yt_core::{ConfigResolver, DatabaseName, TemplateSource};
use yt_reconcile::Handler;

use crate::cli::GlobalArgs;

/// Runtime context holding the handler wired to the AWS services
pub struct RuntimeContext {
    /// Invocation handler
    pub handler: Handler,

    /// Verbose output enabled
    pub verbose: bool,
}

impl RuntimeContext {
    /// Create a new runtime context from global arguments
    pub async fn new(args: &GlobalArgs) -> Self {
        let sdk_config = load_sdk_config(args.region.clone()).await;
        let catalog: Arc<dyn SnapshotCatalog> = Arc::new(RdsSnapshotCatalog::new(&sdk_config));
        let stacks: Arc<dyn StackService> = Arc::new(CloudFormationStacks::new(&sdk_config));

        let handler = Handler::new(
            ConfigResolver::new(&args.config),
            TemplateSource::from_optional_path(args.template.as_ref().map(PathBuf::from)),
            catalog,
            stacks,
        );

        Self {
            handler,
            verbose: args.verbose,
        }
    }

    /// Print verbose output if enabled
    pub fn verbose(&self, msg: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", msg);
        }
    }

    /// The database to operate on: an explicit override, else the persisted default's
    pub fn database(&self, explicit: Option<&str>) -> Result<DatabaseName> {
        match explicit {
            Some(name) => DatabaseName::try_new(name).context("--database must not be empty"),
            None => {
                let resolver = self.handler.resolver();
                let config = resolver.resolve(None).with_context(|| {
                    format!(
                        "Failed to load configuration from {}",
                        resolver.default_path().display()
                    )
                })?;
                Ok(config.source_database_name)
            }
        }
    }
}
