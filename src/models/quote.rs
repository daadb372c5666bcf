//! Observed quote

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One price observation for an exchange/symbol pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub exchange: String,
    pub symbol: String,
    pub price: f64,
    pub observed_at: DateTime<Utc>,
}

impl Quote {
    pub fn new(exchange: impl Into<String>, symbol: impl Into<String>, price: f64) -> Self {
        Self {
            exchange: exchange.into(),
            symbol: symbol.into(),
            price,
            observed_at: Utc::now(),
        }
    }
}
