//! Invocation handler: configuration, snapshot selection, derivation, reconciliation
//!
//! One call to [`Handler::handle`] is one scheduled activation. Nothing is
//! kept between calls; every fault is turned into a [`ReconciliationResult`].

use crate::reconciler::StackReconciler;
use crate::result::{Outcome, ReconciliationResult, ResultAction};
use crate::selector::SnapshotSelector;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use yt_cloud::{SnapshotCatalog, StackService};
use yt_core::stack::stack_name;
use yt_core::{ConfigResolver, InvocationEvent, RequestedAction, StackRequest, TemplateSource};

/// Wires the configuration resolver, snapshot selector and stack reconciler together
pub struct Handler {
    resolver: ConfigResolver,
    template: TemplateSource,
    selector: SnapshotSelector,
    reconciler: StackReconciler,
}

impl Handler {
    pub fn new(
        resolver: ConfigResolver,
        template: TemplateSource,
        catalog: Arc<dyn SnapshotCatalog>,
        stacks: Arc<dyn StackService>,
    ) -> Self {
        Self {
            resolver,
            template,
            selector: SnapshotSelector::new(catalog),
            reconciler: StackReconciler::new(stacks),
        }
    }

    pub fn resolver(&self) -> &ConfigResolver {
        &self.resolver
    }

    pub fn selector(&self) -> &SnapshotSelector {
        &self.selector
    }

    pub fn reconciler(&self) -> &StackReconciler {
        &self.reconciler
    }

    /// Run one invocation at time `now`
    pub async fn handle(&self, event: &InvocationEvent, now: DateTime<Utc>) -> ReconciliationResult {
        let requested = ResultAction::requested(&event.action);
        log::debug!("Received invocation with action '{}'", event.action);

        let config = match self.resolver.resolve(event.config.as_ref()) {
            Ok(config) => config,
            Err(err) => {
                log::error!("{}", err);
                return ReconciliationResult::new(requested, Outcome::ConfigError(err), None);
            }
        };

        if event.action == RequestedAction::Delete {
            return self
                .reconciler
                .delete(&stack_name(&config.source_database_name))
                .await;
        }

        let template_body = match self.template.load() {
            Ok(body) => body,
            Err(err) => {
                log::error!("{}", err);
                return ReconciliationResult::new(requested, Outcome::TemplateUnreadable(err), None);
            }
        };

        let database = &config.source_database_name;
        let snapshot = match self.selector.select_latest(database).await {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => {
                return ReconciliationResult::new(
                    requested,
                    Outcome::NoSnapshots {
                        database: database.to_string(),
                    },
                    None,
                );
            }
            Err(fault) => {
                log::error!("Could not list DB snapshots: {}", fault);
                return ReconciliationResult::new(
                    requested,
                    Outcome::RemoteServiceFault {
                        context: format!("Could not list DB snapshots for {}", database),
                        fault,
                    },
                    None,
                );
            }
        };

        let request = StackRequest::derive(&config, &snapshot, template_body, now);

        if event.action.is_create_or_update() {
            self.reconciler.converge(&event.action, request).await
        } else {
            log::info!(
                "Unrecognised action '{}', reporting stack {} without changes",
                event.action,
                request.stack_name
            );
            ReconciliationResult::new(ResultAction::None, Outcome::Reported, Some(request))
        }
    }
}

#[cfg(test)]
#[path = "handler_test.rs"]
mod tests;
