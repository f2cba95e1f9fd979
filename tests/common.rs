// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, fixed dates and coaches over in-memory stores
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `fitstreak`

use chrono::NaiveDate;
use fitstreak::catalog::default_catalog;
use fitstreak::config::AppConfig;
use fitstreak::models::WorkoutSuggestion;
use fitstreak::repositories::MemoryStore;
use fitstreak::services::WorkoutCoach;
use fitstreak_intelligence::clock::FixedClock;
use std::env;
use std::sync::{Arc, Once};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// A day in January 2025
pub fn jan(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
}

/// In-memory store holding the built-in catalog
pub fn catalog_store() -> Arc<MemoryStore> {
    init_test_logging();
    Arc::new(MemoryStore::with_plans(default_catalog()))
}

/// Coach over `store` whose clock is frozen at `hour:00` on January `day`
pub fn coach_at(store: &Arc<MemoryStore>, day: u32, hour: u32) -> WorkoutCoach<FixedClock> {
    coach_with_config(store, &AppConfig::default(), day, hour)
}

/// Same as [`coach_at`] with explicit configuration
pub fn coach_with_config(
    store: &Arc<MemoryStore>,
    config: &AppConfig,
    day: u32,
    hour: u32,
) -> WorkoutCoach<FixedClock> {
    WorkoutCoach::with_clock(store.clone(), config, FixedClock::at_hour(jan(day), hour))
}

/// Plan IDs of a list of suggestions, in order
pub fn plan_ids(suggestions: &[WorkoutSuggestion]) -> Vec<&str> {
    suggestions.iter().map(|s| s.plan_id.as_str()).collect()
}
