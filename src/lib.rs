//! Quote monitor: polls a quote page, extracts the price from its markup and
//! raises desktop alerts when the price crosses configured thresholds.

pub mod alerts;
pub mod cli;
pub mod config;
pub mod core;
pub mod dom;
pub mod error;
pub mod logging;
pub mod models;
pub mod quote;
pub mod services;

pub use error::{ConfigError, ExtractError, MonitorError};
