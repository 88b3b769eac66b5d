//! yt-cloud - Remote service layer for yesterdaytabase
//!
//! This crate provides the `SnapshotCatalog` and `StackService` traits, the
//! AWS implementations (RDS and CloudFormation), and an in-memory
//! implementation for tests behind the `test-support` feature.

pub mod aws;
pub mod error;
#[cfg(any(test, feature = "test-support"))]
pub mod memory;
pub mod traits;

pub use aws::{load_sdk_config, CloudFormationStacks, RdsSnapshotCatalog};
pub use error::{CloudError, CloudResult};
pub use traits::{SnapshotCatalog, StackService};
