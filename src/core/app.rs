//! Entry point wiring: arguments in, running monitor out

use std::sync::Arc;

use tracing::info;

use crate::cli::{parse_cli_args, CliCommand};
use crate::config::{Settings, WatchConfig};
use crate::core::monitor::QuoteMonitor;
use crate::error::{ConfigError, MonitorError};
use crate::services::{build_notifier, QuotePageClient};

/// Non-monitoring ways a launch can end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Launch {
    Help,
    Version,
}

/// Assemble a monitor for `watch` from the environment settings
pub fn build_monitor(watch: WatchConfig, settings: &Settings) -> Result<QuoteMonitor, MonitorError> {
    let url = settings
        .url_template
        .render(watch.exchange(), watch.symbol())?;
    let client = QuotePageClient::new(settings.http_timeout(), settings.retry_policy())?;
    let notifier = build_notifier(settings.notifier);

    info!(
        notifier = %settings.notifier,
        poll_base_secs = settings.poll_base_seconds,
        poll_jitter_secs = settings.poll_jitter_seconds,
        "Monitor configured"
    );

    Ok(QuoteMonitor::new(watch, url, Arc::new(client), notifier)
        .with_schedule(settings.poll_schedule())
        .with_max_consecutive_failures(settings.max_consecutive_failures))
}

/// Parse `args` and run the monitor they describe.
///
/// Help and version return `Ok` before settings are loaded, so a broken
/// environment cannot block them. Every argument and settings problem is
/// reported before any request is made. A monitoring run only ends with the
/// error that stopped it.
pub async fn run_from_args<I, S, F>(args: I, load_settings: F) -> Result<Launch, MonitorError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    F: FnOnce() -> Result<Settings, ConfigError>,
{
    let watch = match parse_cli_args(args)? {
        CliCommand::Help => return Ok(Launch::Help),
        CliCommand::Version => return Ok(Launch::Version),
        CliCommand::Watch(watch) => watch,
    };

    let settings = load_settings()?;
    let monitor = build_monitor(watch, &settings)?;
    Err(monitor.run().await)
}
