//! yesterdaytabase CLI - restore the latest production snapshot into a disposable stack

use clap::Parser;

mod cli;
mod commands;
mod context;

use cli::Cli;
use commands::common::ExitCode;
use commands::{invoke, snapshots, status};

const VERBOSE_FILTER: &str =
    "info,yt_core=debug,yt_cloud=debug,yt_reconcile=debug,yesterdaytabase=debug";

/// Install the global logger; `RUST_LOG` takes precedence over the defaults
fn init_logging(verbose: bool) {
    let default_filter = if verbose { VERBOSE_FILTER } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp_millis()
        .init();
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    let outcome = match &cli.command {
        cli::Commands::Invoke(args) => invoke::execute(args, &cli.global).await,
        cli::Commands::Snapshots(args) => snapshots::execute(args, &cli.global).await,
        cli::Commands::Status(args) => status::execute(args, &cli.global).await,
        #[cfg(feature = "lambda")]
        cli::Commands::Lambda => commands::lambda::execute(&cli.global).await,
    };

    match outcome {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<ExitCode>() {
            Some(ExitCode(code)) => std::process::ExitCode::from(*code),
            None => {
                eprintln!("Error: {:#}", err);
                std::process::ExitCode::FAILURE
            }
        },
    }
}
