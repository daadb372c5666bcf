//! Log setup
//!
//! Production gets JSON lines for aggregation, everything else a colored
//! human format. Logs go to stderr; stdout carries only alert lines.
//!
//! Alert records use their own target, [`ALERT_TARGET`], which stays at
//! `info` even when `RUST_LOG` is narrowed to warnings, so a quiet monitor
//! still leaves a trail of every alert it raised.

use std::env;

use crate::config::get_environment;
use tracing_subscriber::{
    filter::Directive, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Target for alert records
pub const ALERT_TARGET: &str = "quote_monitor::alert";

/// HTML parsing and HTTP internals are chatty at debug and below
const DEFAULT_FILTER: &str = "info,html5ever=warn,selectors=warn,hyper=warn,reqwest=warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    pub fn for_environment(environment: &str) -> Self {
        match environment {
            "production" | "prod" => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

/// Build the filter from `RUST_LOG`-style directives, falling back to the
/// default when they are absent or unparsable. Alert records are always
/// kept at `info`.
pub fn build_filter(directives: Option<&str>) -> EnvFilter {
    let filter = directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER));

    match format!("{}=info", ALERT_TARGET).parse::<Directive>() {
        Ok(alerts) => filter.add_directive(alerts),
        Err(_) => filter,
    }
}

/// Initialize logging for the current `APP_ENV`
pub fn init_logging() {
    let format = LogFormat::for_environment(&get_environment());
    let filter = build_filter(env::var("RUST_LOG").ok().as_deref());

    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(true)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}
