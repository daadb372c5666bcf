//! Unit tests for configuration

use std::collections::HashMap;
use std::time::Duration;

use quote_monitor::config::{NotifierKind, Settings, Thresholds, WatchConfig};
use quote_monitor::quote::DEFAULT_URL_TEMPLATE;
use quote_monitor::ConfigError;

fn settings_from(pairs: &[(&str, &str)]) -> Result<Settings, ConfigError> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Settings::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn test_settings_defaults() {
    let settings = settings_from(&[]).expect("defaults are valid");
    assert_eq!(settings.url_template.as_str(), DEFAULT_URL_TEMPLATE);
    assert_eq!(settings.poll_base_seconds, 30);
    assert_eq!(settings.poll_jitter_seconds, 10);
    assert_eq!(settings.http_timeout(), Duration::from_secs(30));
    assert_eq!(settings.fetch_max_retries, 3);
    assert_eq!(settings.max_consecutive_failures, 5);
    assert_eq!(settings.notifier, NotifierKind::platform_default());
}

#[test]
fn test_settings_overrides() {
    let settings = settings_from(&[
        ("QUOTE_URL_TEMPLATE", "http://localhost:9000/q/{exchange}/{symbol}"),
        ("POLL_BASE_SECONDS", "5"),
        ("POLL_JITTER_SECONDS", "0"),
        ("HTTP_TIMEOUT_SECONDS", "2"),
        ("FETCH_MAX_RETRIES", "0"),
        ("FETCH_RETRY_MIN_DELAY_MS", "10"),
        ("MAX_CONSECUTIVE_FAILURES", "9"),
        ("NOTIFY_COMMAND", "none"),
    ])
    .expect("valid overrides");

    assert_eq!(
        settings.url_template.as_str(),
        "http://localhost:9000/q/{exchange}/{symbol}"
    );
    assert_eq!(settings.poll_schedule().base_seconds(), 5);
    assert_eq!(settings.poll_schedule().jitter_seconds(), 0);
    assert_eq!(settings.http_timeout(), Duration::from_secs(2));
    assert_eq!(settings.retry_policy().max_retries, 0);
    assert_eq!(settings.retry_policy().min_delay, Duration::from_millis(10));
    assert_eq!(settings.max_consecutive_failures, 9);
    assert_eq!(settings.notifier, NotifierKind::LogOnly);
}

#[test]
fn test_unparsable_numbers_fall_back_to_defaults() {
    let settings = settings_from(&[("POLL_BASE_SECONDS", "soon"), ("FETCH_MAX_RETRIES", "-1")])
        .expect("bad numbers are not fatal");
    assert_eq!(settings.poll_base_seconds, 30);
    assert_eq!(settings.fetch_max_retries, 3);
}

#[test]
fn test_zero_http_timeout_falls_back_to_default() {
    let settings = settings_from(&[("HTTP_TIMEOUT_SECONDS", "0")]).expect("zero is not fatal");
    assert_eq!(settings.http_timeout_seconds, 30);
    assert_eq!(settings.http_timeout(), Duration::from_secs(30));
}

#[test]
fn test_bad_template_is_fatal() {
    let err = settings_from(&[("QUOTE_URL_TEMPLATE", "https://example.com/")])
        .expect_err("template without placeholders");
    assert!(matches!(err, ConfigError::InvalidUrlTemplate { .. }));
}

#[test]
fn test_unknown_notifier_is_fatal() {
    let err = settings_from(&[("NOTIFY_COMMAND", "carrier-pigeon")]).expect_err("unknown");
    assert_eq!(err, ConfigError::UnknownNotifier("carrier-pigeon".to_string()));
}

#[test]
fn test_notifier_names_round_trip() {
    for kind in [
        NotifierKind::TerminalNotifier,
        NotifierKind::NotifySend,
        NotifierKind::LogOnly,
    ] {
        assert_eq!(kind.to_string().parse::<NotifierKind>(), Ok(kind));
    }
}

#[test]
fn test_thresholds_reject_inverted_bounds() {
    assert_eq!(
        Thresholds::new(100.0, 90.0),
        Err(ConfigError::MinAboveMax { min: 100.0, max: 90.0 })
    );
    assert!(Thresholds::new(90.0, 90.0).is_ok());
}

#[test]
fn test_watch_config_normalizes_codes() {
    let config = WatchConfig::new(" nasdaq ", "goog", 1.0, 2.0).expect("valid");
    assert_eq!(config.exchange(), "NASDAQ");
    assert_eq!(config.symbol(), "GOOG");
}

#[test]
fn test_watch_config_requires_codes() {
    let err = WatchConfig::new("", " ", 1.0, 2.0).expect_err("empty codes");
    assert_eq!(err, ConfigError::MissingArguments(vec!["-se", "-ss"]));
}
