//! Quote Monitor
//!
//! Polls a quote page and raises desktop alerts when the price crosses the
//! given bounds. Runs until a terminal error or Ctrl-C.

use std::env;
use std::process::ExitCode;

use dotenvy::dotenv;
use quote_monitor::cli::{usage_text, version_text};
use quote_monitor::config::{get_environment, Settings};
use quote_monitor::core::{run_from_args, Launch};
use quote_monitor::logging;
use quote_monitor::MonitorError;
use tokio::signal;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    info!(environment = %get_environment(), "Starting quote monitor");

    tokio::select! {
        result = run_from_args(env::args(), Settings::from_env) => match result {
            Ok(Launch::Help) => {
                println!("{}", usage_text());
                ExitCode::SUCCESS
            }
            Ok(Launch::Version) => {
                println!("{}", version_text());
                ExitCode::SUCCESS
            }
            Err(MonitorError::Config(e)) => {
                error!(error = %e, "Invalid configuration");
                eprintln!("{}\n\n{}", e, usage_text());
                ExitCode::FAILURE
            }
            Err(e) => {
                error!(error = %e, "Quote monitor stopped");
                ExitCode::FAILURE
            }
        },
        _ = signal::ctrl_c() => {
            info!("Shutting down quote monitor...");
            ExitCode::SUCCESS
        }
    }
}
