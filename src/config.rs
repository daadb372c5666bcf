//! Runtime configuration
//!
//! What to watch comes from the command line ([`WatchConfig`]); how to watch
//! comes from the environment, optionally seeded from a `.env` file
//! ([`Settings`]).

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use tracing::warn;

use crate::core::scheduler::PollSchedule;
use crate::error::ConfigError;
use crate::quote::QuoteUrlTemplate;
use crate::services::quote_page::RetryPolicy;

/// Value the price flags hold when not given; passing it explicitly counts
/// as not passing it at all.
pub const UNSET_PRICE: f64 = -0.1;

pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "development".to_string())
}

/// Inclusive price bounds, `min <= max`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    min: f64,
    max: f64,
}

impl Thresholds {
    pub fn new(min: f64, max: f64) -> Result<Self, ConfigError> {
        if min > max {
            return Err(ConfigError::MinAboveMax { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }
}

/// The security being watched and its bounds
#[derive(Debug, Clone, PartialEq)]
pub struct WatchConfig {
    exchange: String,
    symbol: String,
    thresholds: Thresholds,
}

impl WatchConfig {
    /// Codes are trimmed and uppercased
    pub fn new(exchange: &str, symbol: &str, min: f64, max: f64) -> Result<Self, ConfigError> {
        let exchange = exchange.trim().to_uppercase();
        let symbol = symbol.trim().to_uppercase();

        let mut missing = Vec::new();
        if exchange.is_empty() {
            missing.push("-se");
        }
        if symbol.is_empty() {
            missing.push("-ss");
        }
        if !missing.is_empty() {
            return Err(ConfigError::MissingArguments(missing));
        }

        Ok(Self {
            exchange,
            symbol,
            thresholds: Thresholds::new(min, max)?,
        })
    }

    pub fn exchange(&self) -> &str {
        &self.exchange
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }
}

/// Desktop notification backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifierKind {
    /// `terminal-notifier -title T -message M` (macOS)
    TerminalNotifier,
    /// `notify-send T M` (freedesktop)
    NotifySend,
    /// Log the alert only
    LogOnly,
}

impl NotifierKind {
    pub fn platform_default() -> Self {
        if cfg!(target_os = "macos") {
            NotifierKind::TerminalNotifier
        } else {
            NotifierKind::NotifySend
        }
    }
}

impl FromStr for NotifierKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "terminal-notifier" => Ok(NotifierKind::TerminalNotifier),
            "notify-send" => Ok(NotifierKind::NotifySend),
            "none" | "log" => Ok(NotifierKind::LogOnly),
            other => Err(ConfigError::UnknownNotifier(other.to_string())),
        }
    }
}

impl fmt::Display for NotifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NotifierKind::TerminalNotifier => "terminal-notifier",
            NotifierKind::NotifySend => "notify-send",
            NotifierKind::LogOnly => "none",
        })
    }
}

/// Environment-driven settings
#[derive(Debug, Clone)]
pub struct Settings {
    pub url_template: QuoteUrlTemplate,
    pub poll_base_seconds: u64,
    pub poll_jitter_seconds: u64,
    pub http_timeout_seconds: u64,
    pub fetch_max_retries: usize,
    pub fetch_retry_min_delay_ms: u64,
    pub max_consecutive_failures: u32,
    pub notifier: NotifierKind,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            url_template: QuoteUrlTemplate::default(),
            poll_base_seconds: 30,
            poll_jitter_seconds: 10,
            http_timeout_seconds: 30,
            fetch_max_retries: 3,
            fetch_retry_min_delay_ms: 500,
            max_consecutive_failures: 5,
            notifier: NotifierKind::platform_default(),
        }
    }
}

impl Settings {
    /// Load settings from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load settings through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();

        let url_template = match lookup("QUOTE_URL_TEMPLATE") {
            Some(template) if !template.trim().is_empty() => {
                QuoteUrlTemplate::parse(template.trim())?
            }
            _ => defaults.url_template,
        };

        let notifier = match lookup("NOTIFY_COMMAND") {
            Some(name) if !name.trim().is_empty() => name.parse()?,
            _ => defaults.notifier,
        };

        Ok(Self {
            url_template,
            poll_base_seconds: parsed_or(&lookup, "POLL_BASE_SECONDS", defaults.poll_base_seconds),
            poll_jitter_seconds: parsed_or(
                &lookup,
                "POLL_JITTER_SECONDS",
                defaults.poll_jitter_seconds,
            ),
            http_timeout_seconds: nonzero_or(
                &lookup,
                "HTTP_TIMEOUT_SECONDS",
                defaults.http_timeout_seconds,
            ),
            fetch_max_retries: parsed_or(&lookup, "FETCH_MAX_RETRIES", defaults.fetch_max_retries),
            fetch_retry_min_delay_ms: parsed_or(
                &lookup,
                "FETCH_RETRY_MIN_DELAY_MS",
                defaults.fetch_retry_min_delay_ms,
            ),
            max_consecutive_failures: parsed_or(
                &lookup,
                "MAX_CONSECUTIVE_FAILURES",
                defaults.max_consecutive_failures,
            ),
            notifier,
        })
    }

    pub fn poll_schedule(&self) -> PollSchedule {
        PollSchedule::new(self.poll_base_seconds, self.poll_jitter_seconds)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_retries: self.fetch_max_retries,
            min_delay: Duration::from_millis(self.fetch_retry_min_delay_ms),
            ..RetryPolicy::default()
        }
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_seconds)
    }
}

fn parsed_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Copy + fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, default = %default, "Ignoring unparsable setting");
            default
        }),
        None => default,
    }
}

/// Like `parsed_or`, but zero also falls back to the default
fn nonzero_or<F>(lookup: &F, key: &str, default: u64) -> u64
where
    F: Fn(&str) -> Option<String>,
{
    match parsed_or(lookup, key, default) {
        0 => {
            warn!(key, default, "Ignoring zero setting");
            default
        }
        value => value,
    }
}
