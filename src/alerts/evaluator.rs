//! Threshold evaluation

use crate::config::Thresholds;
use crate::models::{Alert, AlertKind, Quote};

/// Check a quote against both bounds.
///
/// Both bounds are inclusive and checked independently, so a quote can raise
/// a drop and a rise alert at once when `min == max`.
pub fn evaluate(quote: &Quote, thresholds: &Thresholds) -> Vec<Alert> {
    let mut alerts = Vec::new();

    if quote.price <= thresholds.min() {
        alerts.push(Alert::new(AlertKind::Drop, thresholds.min(), quote.clone()));
    }
    if quote.price >= thresholds.max() {
        alerts.push(Alert::new(AlertKind::Rise, thresholds.max(), quote.clone()));
    }

    alerts
}
