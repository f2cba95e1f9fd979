// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Workout durations, suggestion limits, pain tracking bounds and service names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Micro workout plan constants
pub mod workout {
    /// Session lengths offered by the plan catalog, in minutes
    pub const PLAN_DURATIONS_MINUTES: [u32; 4] = [5, 10, 15, 20];
    /// Duration of a "quick win" session used to break a miss streak
    pub const QUICK_WIN_MINUTES: u32 = 5;
    /// Longest session the progression rule will ever target
    pub const MAX_PROGRESSION_MINUTES: u32 = 20;
    /// Minutes added on top of the base duration when progressing
    pub const PROGRESSION_STEP_MINUTES: u32 = 5;
    /// Base duration when the user has recorded activity before
    pub const ACTIVE_BASE_MINUTES: u32 = 10;
    /// Base duration for a user without any recorded activity
    pub const NEW_USER_BASE_MINUTES: u32 = 5;
    /// Lowest progression level of a plan
    pub const MIN_PROGRESSION_LEVEL: u8 = 1;
    /// Highest progression level of a plan
    pub const MAX_PROGRESSION_LEVEL: u8 = 5;
}

/// Suggestion engine limits and triggers
pub mod suggestions {
    /// Maximum number of suggestions returned for a day
    pub const MAX_SUGGESTIONS: usize = 2;
    /// Consecutive missed days that trigger a quick-win suggestion
    pub const MISS_STREAK_TRIGGER: u32 = 2;
    /// Consecutive completed days that trigger a progression suggestion
    pub const COMPLETE_STREAK_TRIGGER: u32 = 3;
    /// Local hour at which the day switches from morning to evening context
    pub const AFTERNOON_START_HOUR: u32 = 12;
    /// Reason used when no rule-specific rationale applies
    pub const GENERIC_REASON: &str = "Great option for today";
}

/// Pain tracking constants
pub mod pain {
    /// Lowest allowed pain level
    pub const MIN_LEVEL: u8 = 0;
    /// Highest allowed pain level
    pub const MAX_LEVEL: u8 = 10;
    /// Reports for one area needed before it counts as painful
    pub const REPORTS_FOR_PAINFUL_AREA: usize = 3;
    /// Severity at or above which a report counts toward a painful area
    pub const PAINFUL_LEVEL: u8 = 3;
    /// Trailing window of pain reports considered for suggestions
    pub const DEFAULT_WINDOW_DAYS: i64 = 7;
}

/// Session history constants
pub mod sessions {
    /// Number of recent sessions returned by history queries
    pub const DEFAULT_HISTORY_LIMIT: usize = 30;
    /// Trailing window for weekly active minutes
    pub const WEEKLY_WINDOW_DAYS: i64 = 7;
    /// Lowest rate of perceived exertion
    pub const MIN_RPE: u8 = 1;
    /// Highest rate of perceived exertion
    pub const MAX_RPE: u8 = 10;
}

/// Service names for structured logging
pub mod service_names {
    /// Main service name
    pub const FITSTREAK: &str = "fitstreak";
    /// CLI binary name
    pub const FITSTREAK_CLI: &str = "fitstreak-cli";
}
