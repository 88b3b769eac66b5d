//! yt-reconcile - Stack reconciliation for yesterdaytabase
//!
//! This crate selects the latest snapshot from the remote catalog, observes
//! the target stack, and decides the single create/update/delete mutation for
//! an invocation. The [`Handler`] ties these steps together and always
//! returns a structured [`ReconciliationResult`].

pub mod handler;
pub mod reconciler;
pub mod result;
pub mod selector;

pub use handler::Handler;
pub use reconciler::{RemoteStackState, StackReconciler};
pub use result::{Outcome, ReconciliationResult, ResultAction, NO_SNAPSHOTS_ERROR};
pub use selector::SnapshotSelector;
