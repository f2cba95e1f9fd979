// ABOUTME: Decision logic for the FitStreak workout coach
// ABOUTME: Suggestion engine, adherence accounting, pain analysis, media lookup and body metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `FitStreak` Intelligence
//!
//! Pure, storage-free algorithms used by the coach service. Nothing in this
//! crate performs I/O; the only non-deterministic input is the wall clock,
//! which is injected through [`clock::Clock`].
//!
//! ## Modules
//!
//! - **`suggestion_engine`**: Rule cascade choosing today's micro plans
//! - **`pain_analysis`**: Painful body area detection
//! - **adherence**: Streak accounting after completed sessions
//! - **media**: Exercise demonstration lookup
//! - **`body_metrics`**: BMI and calorie targets
//! - **config**: Engine thresholds with environment overrides

/// Streak accounting for completed sessions
pub mod adherence;

/// BMI and calorie target calculations
pub mod body_metrics;

/// Injectable clock and day-period classification
pub mod clock;

/// Suggestion engine configuration
pub mod config;

/// Exercise demonstration media lookup
pub mod media;

/// Painful body area detection
pub mod pain_analysis;

/// Rule-based workout suggestion engine
pub mod suggestion_engine;

pub use adherence::{record_completion, weekly_active_minutes};
pub use body_metrics::{calculate_bmi, calculate_calorie_targets};
pub use clock::{Clock, DayPeriod, FixedClock, SystemClock};
pub use config::{ConfigError, SuggestionEngineConfig};
pub use media::{attach_media, exercise_gif};
pub use pain_analysis::{painful_areas, summarize_by_area, PainAreaSummary};
pub use suggestion_engine::{
    generate_suggestions, progression_target, SuggestionEngine, SuggestionRequest, SuggestionRule,
};
