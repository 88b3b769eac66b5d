//! CLI command implementations

pub(crate) mod common;
pub(crate) mod invoke;
#[cfg(feature = "lambda")]
pub(crate) mod lambda;
pub(crate) mod snapshots;
pub(crate) mod status;
