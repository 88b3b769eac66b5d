//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};
use yt_core::DEFAULT_CONFIG_FILE;

/// yesterdaytabase - restore yesterday's production snapshot under a predictable hostname
#[derive(Parser, Debug)]
#[command(name = "yesterdaytabase")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Default configuration, used when an event carries no inline config
    #[arg(
        short,
        long,
        global = true,
        env = "YESTERDAYTABASE_CONFIG",
        default_value = DEFAULT_CONFIG_FILE
    )]
    pub config: String,

    /// Template file to use instead of the embedded template
    #[arg(short, long, global = true, env = "YESTERDAYTABASE_TEMPLATE")]
    pub template: Option<String>,

    /// AWS region (defaults to the environment's region)
    #[arg(short, long, global = true)]
    pub region: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one invocation and print the result
    Invoke(InvokeArgs),

    /// List snapshots of the configured database
    Snapshots(SnapshotsArgs),

    /// Show the observed state of the managed stack
    Status(StatusArgs),

    /// Serve invocations on the AWS Lambda runtime
    #[cfg(feature = "lambda")]
    Lambda,
}

/// Arguments for the invoke command
#[derive(Args, Debug)]
pub struct InvokeArgs {
    /// Invocation payload as JSON
    #[arg(short, long, conflicts_with = "event_file")]
    pub event: Option<String>,

    /// File containing the invocation payload
    #[arg(short = 'f', long)]
    pub event_file: Option<String>,

    /// Override the payload's action (create, update, delete)
    #[arg(short, long)]
    pub action: Option<String>,
}

/// Arguments for the snapshots command
#[derive(Args, Debug)]
pub struct SnapshotsArgs {
    /// Database to inspect instead of the configured one
    #[arg(short, long)]
    pub database: Option<String>,

    /// Show at most this many snapshots
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,
}

/// Arguments for the status command
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Database whose stack to inspect instead of the configured one
    #[arg(short, long)]
    pub database: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
