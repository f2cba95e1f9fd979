// ABOUTME: Configuration management module for the coach service and command-line tool
// ABOUTME: Groups environment loading and database location parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for `FitStreak`
//!
//! - **Environment**: [`AppConfig`] loaded from `DATABASE_URL` and `FITSTREAK_*` variables
//! - **Database**: [`DatabaseUrl`] parsing for the `SQLite` store
//!
//! Suggestion engine thresholds live in
//! [`fitstreak_intelligence::config::SuggestionEngineConfig`] and are embedded
//! in [`AppConfig::engine`].

/// Database location parsing
pub mod database;
/// Environment configuration
pub mod environment;

pub use database::DatabaseUrl;
pub use environment::AppConfig;
