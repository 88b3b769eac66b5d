//! yt-core - Core library for yesterdaytabase
//!
//! This crate provides the configuration model and resolver, the invocation
//! event, snapshot selection, and the pure derivation of the stack request
//! (name, restore target, template parameters) from a configuration and a
//! snapshot.

pub mod config;
pub mod error;
pub mod event;
mod newtype_string;
pub mod snapshot;
pub mod stack;
pub mod template;

pub use config::{ConfigDocument, ConfigResolver, Configuration, DatabaseName, DEFAULT_CONFIG_FILE};
pub use error::{CoreError, CoreResult};
pub use event::{InvocationEvent, RequestedAction};
pub use snapshot::{select_latest, Snapshot, SnapshotId};
pub use stack::{StackName, StackParameter, StackRequest};
pub use template::TemplateSource;
