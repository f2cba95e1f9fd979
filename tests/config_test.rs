// ABOUTME: Tests for environment-driven configuration of the coach and suggestion engine
// ABOUTME: Validates DATABASE_URL parsing, FITSTREAK_* overrides and rejection of bad values
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitstreak::config::{AppConfig, DatabaseUrl};
use fitstreak::errors::ErrorCode;
use serial_test::serial;
use std::env;
use std::path::PathBuf;

const VARS: [&str; 6] = [
    "DATABASE_URL",
    "FITSTREAK_PAIN_WINDOW_DAYS",
    "FITSTREAK_SESSION_HISTORY_LIMIT",
    "FITSTREAK_WEEKLY_WINDOW_DAYS",
    "FITSTREAK_MAX_SUGGESTIONS",
    "FITSTREAK_MISS_STREAK_TRIGGER",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_env();

    let config = AppConfig::from_env().unwrap();

    assert_eq!(config.database_url, DatabaseUrl::default());
    assert_eq!(config.pain_window_days, 7);
    assert_eq!(config.session_history_limit, 30);
    assert_eq!(config.weekly_window_days, 7);
    assert_eq!(config.engine.limits.max_suggestions, 2);
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clear_env();
    env::set_var("DATABASE_URL", "sqlite::memory:");
    env::set_var("FITSTREAK_PAIN_WINDOW_DAYS", "14");
    env::set_var("FITSTREAK_SESSION_HISTORY_LIMIT", " 50 ");
    env::set_var("FITSTREAK_MAX_SUGGESTIONS", "3");
    env::set_var("FITSTREAK_MISS_STREAK_TRIGGER", "4");

    let config = AppConfig::from_env().unwrap();
    clear_env();

    assert!(config.database_url.is_memory());
    assert_eq!(config.pain_window_days, 14);
    assert_eq!(config.session_history_limit, 50);
    assert_eq!(config.engine.limits.max_suggestions, 3);
    assert_eq!(config.engine.thresholds.miss_streak_trigger, 4);
}

#[test]
#[serial]
fn test_unparseable_value_is_rejected() {
    clear_env();
    env::set_var("FITSTREAK_PAIN_WINDOW_DAYS", "a week");

    let err = AppConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(err.code, ErrorCode::ConfigInvalid);
}

#[test]
#[serial]
fn test_out_of_range_values_are_rejected() {
    clear_env();
    env::set_var("FITSTREAK_WEEKLY_WINDOW_DAYS", "0");
    assert!(AppConfig::from_env().is_err());
    clear_env();

    env::set_var("FITSTREAK_MAX_SUGGESTIONS", "0");
    assert!(AppConfig::from_env().is_err());
    clear_env();
}

#[test]
#[serial]
fn test_unsupported_database_scheme_is_rejected() {
    clear_env();
    env::set_var("DATABASE_URL", "postgresql://localhost/fitstreak");

    let err = AppConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(err.code, ErrorCode::ConfigInvalid);
}

#[test]
fn test_database_url_override() {
    let url = DatabaseUrl::parse_url("sqlite:///tmp/fs.db").unwrap();
    let config = AppConfig::default().with_database_url(url);

    assert_eq!(
        config.database_url,
        DatabaseUrl::SQLite {
            path: PathBuf::from("/tmp/fs.db")
        }
    );
    assert_eq!(config.database_url.to_string(), "sqlite:/tmp/fs.db");
}
