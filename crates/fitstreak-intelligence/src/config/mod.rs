// ABOUTME: Suggestion engine configuration with thresholds, pain rules and limits
// ABOUTME: Loads defaults, applies FITSTREAK_* environment overrides and validates the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Suggestion Engine Configuration
//!
//! Defaults reproduce the product rules exactly (quick win after a two-day miss
//! streak, progression after a three-day complete streak, a body area counts
//! as painful after three reports with one at level 3 or above, two
//! suggestions per day). Environment variables may override any threshold:
//!
//! ```bash
//! export FITSTREAK_MISS_STREAK_TRIGGER=3
//! export FITSTREAK_MAX_SUGGESTIONS=1
//! ```

/// Configuration error types
pub mod error;

pub use error::ConfigError;

use fitstreak_core::constants::{pain, suggestions, workout};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static SUGGESTION_CONFIG: OnceLock<SuggestionEngineConfig> = OnceLock::new();

/// Suggestion engine configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuggestionEngineConfig {
    /// Streak triggers and session durations
    pub thresholds: SuggestionThresholds,
    /// Rules deciding when a body area counts as painful
    pub pain: PainThresholds,
    /// Output limits
    pub limits: SuggestionLimits,
}

/// Streak triggers and session durations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuggestionThresholds {
    /// Miss streak at which a quick win is suggested
    pub miss_streak_trigger: u32,
    /// Complete streak at which a longer session is suggested
    pub complete_streak_trigger: u32,
    /// Duration of the quick-win session
    pub quick_win_minutes: u32,
    /// Base progression duration for users with recorded activity
    pub active_base_minutes: u32,
    /// Base progression duration for users without recorded activity
    pub new_user_base_minutes: u32,
    /// Minutes added to the base duration when progressing
    pub progression_step_minutes: u32,
    /// Cap on the progression target
    pub max_progression_minutes: u32,
    /// First local hour classified as evening context
    pub afternoon_start_hour: u32,
}

/// Rules deciding when a body area counts as painful
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PainThresholds {
    /// Reports required for one area
    pub min_reports: usize,
    /// Level that at least one report must reach
    pub min_level: u8,
}

/// Output limits
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuggestionLimits {
    /// Maximum suggestions returned per call
    pub max_suggestions: usize,
}

impl Default for SuggestionThresholds {
    fn default() -> Self {
        Self {
            miss_streak_trigger: suggestions::MISS_STREAK_TRIGGER,
            complete_streak_trigger: suggestions::COMPLETE_STREAK_TRIGGER,
            quick_win_minutes: workout::QUICK_WIN_MINUTES,
            active_base_minutes: workout::ACTIVE_BASE_MINUTES,
            new_user_base_minutes: workout::NEW_USER_BASE_MINUTES,
            progression_step_minutes: workout::PROGRESSION_STEP_MINUTES,
            max_progression_minutes: workout::MAX_PROGRESSION_MINUTES,
            afternoon_start_hour: suggestions::AFTERNOON_START_HOUR,
        }
    }
}

impl Default for PainThresholds {
    fn default() -> Self {
        Self {
            min_reports: pain::REPORTS_FOR_PAINFUL_AREA,
            min_level: pain::PAINFUL_LEVEL,
        }
    }
}

impl Default for SuggestionLimits {
    fn default() -> Self {
        Self {
            max_suggestions: suggestions::MAX_SUGGESTIONS,
        }
    }
}

impl SuggestionEngineConfig {
    /// Get the process-wide configuration, loading it on first use
    #[must_use]
    pub fn global() -> &'static Self {
        SUGGESTION_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load suggestion engine config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an override does not parse or the result is invalid
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid value
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.thresholds;
        if t.afternoon_start_hour > 24 {
            return Err(ConfigError::ValueOutOfRange(
                "afternoon_start_hour must be between 0 and 24",
            ));
        }
        if t.quick_win_minutes == 0 || t.progression_step_minutes == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "quick_win_minutes and progression_step_minutes must be positive",
            ));
        }
        if t.new_user_base_minutes > t.active_base_minutes {
            return Err(ConfigError::InvalidRange(
                "new_user_base_minutes must be <= active_base_minutes",
            ));
        }
        if t.max_progression_minutes < t.quick_win_minutes {
            return Err(ConfigError::InvalidRange(
                "max_progression_minutes must be >= quick_win_minutes",
            ));
        }
        if self.pain.min_reports == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "pain min_reports must be at least 1",
            ));
        }
        if self.pain.min_level > pain::MAX_LEVEL {
            return Err(ConfigError::ValueOutOfRange(
                "pain min_level must be between 0 and 10",
            ));
        }
        if self.limits.max_suggestions == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_suggestions must be at least 1",
            ));
        }
        Ok(())
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        let t = &mut self.thresholds;
        Self::apply_env_var("FITSTREAK_MISS_STREAK_TRIGGER", &mut t.miss_streak_trigger)?;
        Self::apply_env_var(
            "FITSTREAK_COMPLETE_STREAK_TRIGGER",
            &mut t.complete_streak_trigger,
        )?;
        Self::apply_env_var("FITSTREAK_QUICK_WIN_MINUTES", &mut t.quick_win_minutes)?;
        Self::apply_env_var(
            "FITSTREAK_MAX_PROGRESSION_MINUTES",
            &mut t.max_progression_minutes,
        )?;
        Self::apply_env_var(
            "FITSTREAK_AFTERNOON_START_HOUR",
            &mut t.afternoon_start_hour,
        )?;
        Self::apply_env_var("FITSTREAK_ACTIVE_BASE_MINUTES", &mut t.active_base_minutes)?;
        Self::apply_env_var(
            "FITSTREAK_NEW_USER_BASE_MINUTES",
            &mut t.new_user_base_minutes,
        )?;
        Self::apply_env_var(
            "FITSTREAK_PROGRESSION_STEP_MINUTES",
            &mut t.progression_step_minutes,
        )?;

        Self::apply_env_var("FITSTREAK_PAIN_MIN_REPORTS", &mut self.pain.min_reports)?;
        Self::apply_env_var("FITSTREAK_PAIN_MIN_LEVEL", &mut self.pain.min_level)?;

        Self::apply_env_var(
            "FITSTREAK_MAX_SUGGESTIONS",
            &mut self.limits.max_suggestions,
        )?;
        Ok(self)
    }
}
