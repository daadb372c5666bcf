//! Quote poll loop

use std::sync::Arc;

use tracing::{error, info, warn};
use url::Url;

use crate::alerts;
use crate::config::WatchConfig;
use crate::core::scheduler::PollSchedule;
use crate::dom::Document;
use crate::logging::ALERT_TARGET;
use crate::error::{ExtractError, MonitorError};
use crate::models::{Alert, Quote};
use crate::quote::extract_price;
use crate::services::{Notifier, PageSource};

const DEFAULT_MAX_CONSECUTIVE_FAILURES: u32 = 5;

/// Result of one successful poll
#[derive(Debug, Clone)]
pub struct PollOutcome {
    pub quote: Quote,
    pub alerts: Vec<Alert>,
}

/// Polls one quote page and raises threshold alerts
pub struct QuoteMonitor {
    watch: WatchConfig,
    url: Url,
    source: Arc<dyn PageSource>,
    notifier: Arc<dyn Notifier>,
    schedule: PollSchedule,
    max_consecutive_failures: u32,
}

impl QuoteMonitor {
    pub fn new(
        watch: WatchConfig,
        url: Url,
        source: Arc<dyn PageSource>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            watch,
            url,
            source,
            notifier,
            schedule: PollSchedule::default(),
            max_consecutive_failures: DEFAULT_MAX_CONSECUTIVE_FAILURES,
        }
    }

    pub fn with_schedule(mut self, schedule: PollSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Failed polls tolerated in a row before giving up (at least 1)
    pub fn with_max_consecutive_failures(mut self, max: u32) -> Self {
        self.max_consecutive_failures = max.max(1);
        self
    }

    pub fn watch(&self) -> &WatchConfig {
        &self.watch
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Fetch, extract, evaluate and dispatch once
    pub async fn run_once(&self) -> Result<PollOutcome, MonitorError> {
        let body = self.source.fetch_page(&self.url).await?;
        let document = Document::parse_html(&body);

        let price = extract_price(&document).map_err(|e| match e {
            ExtractError::MissingAnchor { .. } => MonitorError::InvalidSymbol {
                exchange: self.watch.exchange().to_string(),
                symbol: self.watch.symbol().to_string(),
            },
            other => MonitorError::Extract(other),
        })?;

        let quote = Quote::new(self.watch.exchange(), self.watch.symbol(), price);
        let alerts = alerts::evaluate(&quote, self.watch.thresholds());
        for alert in &alerts {
            self.dispatch(alert).await;
        }

        Ok(PollOutcome { quote, alerts })
    }

    async fn dispatch(&self, alert: &Alert) {
        println!("{}", alert.message);
        info!(
            target: ALERT_TARGET,
            kind = ?alert.kind,
            symbol = %alert.quote.symbol,
            price = alert.quote.price,
            threshold = alert.threshold,
            "{}",
            alert.title
        );

        if let Err(e) = self.notifier.notify(alert).await {
            warn!(error = %e, "Notification dispatch failed");
        }
    }

    /// Poll until a terminal error or the failure budget runs out, and
    /// return the error that stopped the loop.
    pub async fn run(&self) -> MonitorError {
        info!(
            exchange = %self.watch.exchange(),
            symbol = %self.watch.symbol(),
            min = self.watch.thresholds().min(),
            max = self.watch.thresholds().max(),
            url = %self.url,
            "Watching {}:{}",
            self.watch.exchange(),
            self.watch.symbol()
        );

        let mut poll: u64 = 0;
        let mut failures: u32 = 0;

        loop {
            poll += 1;
            match self.run_once().await {
                Ok(outcome) => {
                    failures = 0;
                    info!(
                        poll,
                        price = outcome.quote.price,
                        alerts = outcome.alerts.len(),
                        "Poll #{}: {} at {}",
                        poll,
                        outcome.quote.symbol,
                        outcome.quote.price
                    );
                }
                Err(e) if e.is_recoverable() => {
                    failures += 1;
                    error!(
                        poll,
                        failures,
                        max_failures = self.max_consecutive_failures,
                        error = %e,
                        "Poll #{} failed",
                        poll
                    );
                    if failures >= self.max_consecutive_failures {
                        return MonitorError::TooManyFailures {
                            failures,
                            last: Box::new(e),
                        };
                    }
                }
                Err(e) => {
                    error!(poll, error = %e, "Poll #{} hit a terminal error", poll);
                    return e;
                }
            }

            self.schedule.wait().await;
        }
    }
}
