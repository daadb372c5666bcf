//! Threshold alert data models

use serde::{Deserialize, Serialize};

use super::quote::Quote;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    /// Price at or below the configured minimum
    Drop,
    /// Price at or above the configured maximum
    Rise,
}

impl AlertKind {
    pub fn title(&self) -> &'static str {
        match self {
            AlertKind::Drop => "Price drop alert",
            AlertKind::Rise => "Price rise alert",
        }
    }
}

/// A crossed threshold, ready to be dispatched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub kind: AlertKind,
    /// The bound that was crossed
    pub threshold: f64,
    pub quote: Quote,
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(kind: AlertKind, threshold: f64, quote: Quote) -> Self {
        let message = format!(
            "The stock {}'s price is now ${}",
            quote.symbol, quote.price
        );
        Self {
            kind,
            threshold,
            title: kind.title().to_string(),
            message,
            quote,
        }
    }
}
