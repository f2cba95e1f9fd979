// ABOUTME: Environment configuration for the coach service and command-line tool
// ABOUTME: Reads DATABASE_URL and FITSTREAK_* variables, loading .env files first
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management

use super::database::DatabaseUrl;
use crate::constants::{pain, sessions};
use crate::errors::{AppError, AppResult};
use fitstreak_intelligence::config::SuggestionEngineConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing::{debug, info};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where the `SQLite` store lives
    pub database_url: DatabaseUrl,
    /// Pain reports older than this many days are ignored by suggestions
    pub pain_window_days: i64,
    /// Maximum sessions returned by the history query
    pub session_history_limit: usize,
    /// Window used for the weekly active minutes figure
    pub weekly_window_days: i64,
    /// Suggestion engine thresholds and limits
    pub engine: SuggestionEngineConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DatabaseUrl::default(),
            pain_window_days: pain::DEFAULT_WINDOW_DAYS,
            session_history_limit: sessions::DEFAULT_HISTORY_LIMIT,
            weekly_window_days: sessions::WEEKLY_WINDOW_DAYS,
            engine: SuggestionEngineConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable does not parse or the result is invalid
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        // Load .env file if it exists
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file loaded: {e}");
        }

        let config = Self {
            database_url: DatabaseUrl::parse_url(&env_var_or(
                "DATABASE_URL",
                &DatabaseUrl::default().to_connection_string(),
            ))?,
            pain_window_days: parse_env("FITSTREAK_PAIN_WINDOW_DAYS", pain::DEFAULT_WINDOW_DAYS)?,
            session_history_limit: parse_env(
                "FITSTREAK_SESSION_HISTORY_LIMIT",
                sessions::DEFAULT_HISTORY_LIMIT,
            )?,
            weekly_window_days: parse_env(
                "FITSTREAK_WEEKLY_WINDOW_DAYS",
                sessions::WEEKLY_WINDOW_DAYS,
            )?,
            engine: SuggestionEngineConfig::load()?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Replace the database location, e.g. from a command-line flag
    #[must_use]
    pub fn with_database_url(mut self, database_url: DatabaseUrl) -> Self {
        self.database_url = database_url;
        self
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid value
    pub fn validate(&self) -> AppResult<()> {
        if self.pain_window_days < 1 {
            return Err(AppError::config_invalid(
                "FITSTREAK_PAIN_WINDOW_DAYS must be at least 1",
            ));
        }
        if self.weekly_window_days < 1 {
            return Err(AppError::config_invalid(
                "FITSTREAK_WEEKLY_WINDOW_DAYS must be at least 1",
            ));
        }
        if self.session_history_limit == 0 {
            return Err(AppError::config_invalid(
                "FITSTREAK_SESSION_HISTORY_LIMIT must be at least 1",
            ));
        }
        self.engine.validate()?;
        Ok(())
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, falling back to `default` when unset
fn parse_env<T: FromStr>(key: &str, default: T) -> AppResult<T> {
    env::var(key).map_or(Ok(default), |value| {
        value
            .trim()
            .parse()
            .map_err(|_| AppError::config_invalid(format!("Invalid {key} value: {value}")))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.pain_window_days, 7);
        assert_eq!(config.session_history_limit, 30);
    }

    #[test]
    fn test_zero_history_limit_is_rejected() {
        let config = AppConfig {
            session_history_limit: 0,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
