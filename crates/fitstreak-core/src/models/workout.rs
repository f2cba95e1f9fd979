// ABOUTME: Micro workout models for plan catalogs, adherence and pain tracking
// ABOUTME: MicroPlan, PlanCategory, TimePreference, AdherenceStats, PainReport, WorkoutSession, WorkoutSuggestion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Training focus of a micro plan
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PlanCategory {
    /// Heart-rate raising work
    Cardio,
    /// Bodyweight strength work
    Strength,
    /// Joint mobility work
    Mobility,
    /// Stretching and flexibility work
    Flexibility,
}

impl PlanCategory {
    /// Lowercase label used in storage and suggestion reasons
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cardio => "cardio",
            Self::Strength => "strength",
            Self::Mobility => "mobility",
            Self::Flexibility => "flexibility",
        }
    }

    /// Parse a category label, ignoring case
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "cardio" => Some(Self::Cardio),
            "strength" => Some(Self::Strength),
            "mobility" => Some(Self::Mobility),
            "flexibility" => Some(Self::Flexibility),
            _ => None,
        }
    }
}

impl fmt::Display for PlanCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Part of the day a plan is intended for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TimePreference {
    /// Morning sessions
    #[serde(rename = "AM")]
    Am,
    /// Afternoon and evening sessions
    #[serde(rename = "PM")]
    Pm,
    /// Suitable at any time of day
    #[serde(rename = "anytime")]
    Anytime,
}

impl TimePreference {
    /// Label used in storage
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Am => "AM",
            Self::Pm => "PM",
            Self::Anytime => "anytime",
        }
    }

    /// Parse a time preference label, ignoring case
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "am" => Some(Self::Am),
            "pm" => Some(Self::Pm),
            "anytime" => Some(Self::Anytime),
            _ => None,
        }
    }
}

impl fmt::Display for TimePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A short pre-authored workout template
///
/// `cues` are executed in order, so their order is preserved everywhere a plan
/// is copied into a suggestion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MicroPlan {
    /// Catalog-unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Session length in minutes
    pub duration: u32,
    /// Training focus
    pub category: PlanCategory,
    /// Preferred part of the day
    pub time_preference: TimePreference,
    /// Difficulty step from 1 to 5
    pub progression_level: u8,
    /// Ordered exercise instructions
    pub cues: Vec<String>,
}

/// Rolling counters describing how consistently a user completes workouts
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdherenceStats {
    /// Consecutive days with a completed session
    pub complete_streak: u32,
    /// Consecutive days without a completed session
    pub miss_streak: u32,
    /// Day of the most recent completed session
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_activity_date: Option<NaiveDate>,
    /// Cumulative active minutes
    pub total_active_minutes: u32,
}

/// A user-reported discomfort entry for one body area
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PainReport {
    /// Free-text body area label, e.g. "hip"
    pub area: String,
    /// Severity from 0 to 10
    pub level: u8,
    /// Day the pain was reported for
    pub date: NaiveDate,
}

/// A completed workout session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkoutSession {
    /// Session identifier
    pub id: Uuid,
    /// User who completed the session
    pub user_id: Uuid,
    /// Plan the session followed, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<String>,
    /// Completion timestamp
    pub completed_at: DateTime<Utc>,
    /// Minutes actually trained
    pub duration_minutes: u32,
    /// Rate of perceived exertion (1-10)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpe: Option<u8>,
    /// Pain felt during the session (0-10)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pain: Option<u8>,
    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// One ranked recommendation of a plan for today's session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkoutSuggestion {
    /// Identifier of the suggested plan
    pub plan_id: String,
    /// Plan display name
    pub name: String,
    /// Plan duration in minutes
    pub duration: u32,
    /// Human-readable rationale
    pub reason: String,
    /// Ordered exercise cues copied from the plan
    pub cues: Vec<String>,
    /// Plan category
    pub category: PlanCategory,
    /// Demonstration animation for the first cue
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gif_url: Option<String>,
}

impl WorkoutSuggestion {
    /// Build a suggestion for `plan` with the given rationale
    #[must_use]
    pub fn from_plan(plan: &MicroPlan, reason: impl Into<String>) -> Self {
        Self {
            plan_id: plan.id.clone(),
            name: plan.name.clone(),
            duration: plan.duration,
            reason: reason.into(),
            cues: plan.cues.clone(),
            category: plan.category,
            gif_url: None,
        }
    }
}
