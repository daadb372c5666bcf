//! Error taxonomy
//!
//! Configuration problems are caught at startup. At runtime an error is
//! either transient (worth retrying the fetch), recoverable (the poll cycle
//! failed but the next one may succeed) or terminal.

use thiserror::Error;

use crate::dom::{NodeKind, PathError};

/// Startup configuration errors, from CLI flags or the environment
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Please provide all necessary arguments (missing: {})", .0.join(", "))]
    MissingArguments(Vec<&'static str>),

    #[error("Missing value for {0}")]
    MissingValue(String),

    #[error("Invalid value for {flag}: '{value}'. Expected a finite number.")]
    InvalidNumber { flag: String, value: String },

    #[error("Unknown argument: {0}")]
    UnknownArgument(String),

    #[error("The minimum price {min} must not exceed the maximum price {max}")]
    MinAboveMax { min: f64, max: f64 },

    #[error("Invalid quote URL template '{template}': {reason}")]
    InvalidUrlTemplate { template: String, reason: String },

    #[error("Unknown notifier '{0}' (expected terminal-notifier, notify-send or none)")]
    UnknownNotifier(String),
}

/// Failures while pulling the price out of a parsed page
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtractError {
    #[error("No node carries {key}=\"{value}\"")]
    MissingAnchor { key: String, value: String },

    #[error("Price node not reachable: {0}")]
    Path(#[from] PathError),

    #[error("Price node is a {0:?} node, expected text")]
    NotText(NodeKind),

    #[error("Price text '{0}' is not a number")]
    InvalidNumber(String),
}

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Failed to launch notifier '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum MonitorError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("The stock exchange code {exchange} or the stock symbol {symbol} is invalid")]
    InvalidSymbol { exchange: String, symbol: String },

    #[error("Price extraction failed: {0}")]
    Extract(#[from] ExtractError),

    #[error("Giving up after {failures} consecutive failed polls: {last}")]
    TooManyFailures {
        failures: u32,
        last: Box<MonitorError>,
    },
}

impl MonitorError {
    /// Worth retrying the same request: network trouble, 5xx, 429
    pub fn is_transient(&self) -> bool {
        match self {
            MonitorError::Transport(e) => !e.is_builder() && !e.is_redirect(),
            MonitorError::Status { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }

    /// The poll cycle failed, but the next one may succeed
    pub fn is_recoverable(&self) -> bool {
        self.is_transient() || matches!(self, MonitorError::Extract(_))
    }
}
