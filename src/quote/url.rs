//! Quote page URL template

use std::fmt;

use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_URL_TEMPLATE: &str = "https://www.google.com/finance?q={exchange}:{symbol}";

const EXCHANGE_PLACEHOLDER: &str = "{exchange}";
const SYMBOL_PLACEHOLDER: &str = "{symbol}";

/// URL with `{exchange}` and `{symbol}` placeholders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteUrlTemplate {
    template: String,
}

impl QuoteUrlTemplate {
    /// Validate a template: both placeholders present, and the result with
    /// sample codes filled in must be an absolute http(s) URL.
    pub fn parse(template: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidUrlTemplate {
            template: template.to_string(),
            reason: reason.to_string(),
        };

        if !template.contains(EXCHANGE_PLACEHOLDER) {
            return Err(invalid("missing {exchange} placeholder"));
        }
        if !template.contains(SYMBOL_PLACEHOLDER) {
            return Err(invalid("missing {symbol} placeholder"));
        }

        let candidate = Self {
            template: template.to_string(),
        };
        let sample = candidate.render("NASDAQ", "AAPL")?;
        if !matches!(sample.scheme(), "http" | "https") {
            return Err(invalid("scheme must be http or https"));
        }

        Ok(candidate)
    }

    /// Fill in the codes. Callers pass already-uppercased codes.
    pub fn render(&self, exchange: &str, symbol: &str) -> Result<Url, ConfigError> {
        let filled = self
            .template
            .replace(EXCHANGE_PLACEHOLDER, exchange)
            .replace(SYMBOL_PLACEHOLDER, symbol);

        Url::parse(&filled).map_err(|e| ConfigError::InvalidUrlTemplate {
            template: self.template.clone(),
            reason: e.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.template
    }
}

impl Default for QuoteUrlTemplate {
    fn default() -> Self {
        Self {
            template: DEFAULT_URL_TEMPLATE.to_string(),
        }
    }
}

impl fmt::Display for QuoteUrlTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.template)
    }
}
