use std::ffi::OsString;
use std::process::ExitCode;

use clap::Parser;
use dotenvy::dotenv;

mod cli;
mod config;
mod setup;

use cli::args::{Cli, normalize_args, write_usage};
use config::app_config::AppConfig;
use setup::runner::Runner;

/// CLI Entry Point
///
/// Parses arguments, asks the configured completion service, stores the
/// question/answer pair and prints the answer.
///
/// Layout:
/// - cli/: Argument parsing and prompt file loading
/// - config/: Config directory, API key and store configuration
/// - setup/: Dependency injection and the ask/store/print run
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Parse arguments, printing usage when none are given
    let args: Vec<OsString> = std::env::args_os().collect();
    if args.len() <= 1 {
        init_tracing(false);
        return match write_usage(&mut std::io::stdout()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                tracing::error!("failed to print usage: {}", err);
                ExitCode::FAILURE
            }
        };
    }
    let cli = Cli::parse_from(normalize_args(args));

    // 3. Initialize tracing
    init_tracing(cli.debug);

    // 4. Load configuration and run
    let result = match AppConfig::from_env() {
        Ok(config) => Runner::run(&cli, &config).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(qa) => {
            println!("Answer: {}", qa.answer);
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

/// Initializes tracing with the RUST_LOG env filter; `-debug` raises the default.
fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
