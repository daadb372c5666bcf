//! Unit tests for threshold evaluation

use quote_monitor::alerts::evaluate;
use quote_monitor::config::Thresholds;
use quote_monitor::models::{AlertKind, Quote};

fn kinds(price: f64, min: f64, max: f64) -> Vec<AlertKind> {
    let thresholds = Thresholds::new(min, max).expect("valid thresholds");
    let quote = Quote::new("NASDAQ", "AAPL", price);
    evaluate(&quote, &thresholds).into_iter().map(|a| a.kind).collect()
}

#[test]
fn test_below_min_raises_drop_only() {
    assert_eq!(kinds(4.99, 5.0, 10.0), vec![AlertKind::Drop]);
}

#[test]
fn test_max_bound_is_inclusive() {
    assert_eq!(kinds(10.0, 5.0, 10.0), vec![AlertKind::Rise]);
}

#[test]
fn test_min_bound_is_inclusive() {
    assert_eq!(kinds(5.0, 5.0, 10.0), vec![AlertKind::Drop]);
}

#[test]
fn test_inside_band_raises_nothing() {
    assert!(kinds(7.5, 5.0, 10.0).is_empty());
}

#[test]
fn test_collapsed_band_raises_both() {
    assert_eq!(kinds(5.0, 5.0, 5.0), vec![AlertKind::Drop, AlertKind::Rise]);
}

#[test]
fn test_alert_carries_title_message_and_threshold() {
    let thresholds = Thresholds::new(5.0, 10.0).expect("valid thresholds");
    let quote = Quote::new("NASDAQ", "AAPL", 12.5);
    let alerts = evaluate(&quote, &thresholds);

    assert_eq!(alerts.len(), 1);
    let alert = &alerts[0];
    assert_eq!(alert.title, "Price rise alert");
    assert_eq!(alert.message, "The stock AAPL's price is now $12.5");
    assert_eq!(alert.threshold, 10.0);
    assert_eq!(alert.quote, quote);
}

#[test]
fn test_alert_serializes_kind_in_snake_case() {
    let thresholds = Thresholds::new(5.0, 10.0).expect("valid thresholds");
    let quote = Quote::new("NASDAQ", "AAPL", 1.0);
    let alert = evaluate(&quote, &thresholds).remove(0);

    let json = serde_json::to_value(&alert).expect("serializable");
    assert_eq!(json["kind"], "drop");
    assert_eq!(json["quote"]["symbol"], "AAPL");
}

#[test]
fn test_sub_cent_price_is_not_rounded_away() {
    let thresholds = Thresholds::new(0.01, 1.0).expect("valid thresholds");
    let alerts = evaluate(&Quote::new("OTC", "PENNY", 0.0042), &thresholds);

    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].message, "The stock PENNY's price is now $0.0042");
}
