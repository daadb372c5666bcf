//! Quote page HTTP client

use std::time::Duration;

use backon::{ExponentialBuilder, Retryable};
use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

use crate::error::MonitorError;

/// Source of quote page markup
#[async_trait::async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the page body at `url`
    async fn fetch_page(&self, url: &Url) -> Result<String, MonitorError>;
}

/// Backoff for transient fetch failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt; 0 disables retrying
    pub max_retries: usize,
    pub min_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            min_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(10),
        }
    }
}

impl RetryPolicy {
    fn backoff(&self) -> ExponentialBuilder {
        ExponentialBuilder::default()
            .with_min_delay(self.min_delay)
            .with_max_delay(self.max_delay.max(self.min_delay))
            .with_max_times(self.max_retries)
    }
}

pub struct QuotePageClient {
    client: Client,
    retry: RetryPolicy,
}

impl QuotePageClient {
    pub fn new(timeout: Duration, retry: RetryPolicy) -> Result<Self, MonitorError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("quote-monitor/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client, retry))
    }

    pub fn with_client(client: Client, retry: RetryPolicy) -> Self {
        Self { client, retry }
    }

    async fn fetch_once(&self, url: &Url) -> Result<String, MonitorError> {
        debug!(url = %url, "Fetching quote page");
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MonitorError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        debug!(url = %url, bytes = body.len(), "Quote page fetched");
        Ok(body)
    }
}

#[async_trait::async_trait]
impl PageSource for QuotePageClient {
    async fn fetch_page(&self, url: &Url) -> Result<String, MonitorError> {
        (|| self.fetch_once(url))
            .retry(self.retry.backoff())
            .when(MonitorError::is_transient)
            .notify(|err: &MonitorError, delay: Duration| {
                warn!(
                    error = %err,
                    retry_in_ms = delay.as_millis() as u64,
                    "Quote page fetch failed, retrying in {}ms",
                    delay.as_millis()
                );
            })
            .await
    }
}
