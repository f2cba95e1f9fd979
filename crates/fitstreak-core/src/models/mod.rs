// ABOUTME: Core data models and types for the FitStreak workout coach
// ABOUTME: Re-exports workout catalog, adherence, pain and body metric structures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! ## Core Models
//!
//! - `MicroPlan`: A short workout template from the plan catalog
//! - `AdherenceStats`: Completion and miss streak counters
//! - `PainReport`: A discomfort entry for one body area
//! - `WorkoutSession`: A completed session
//! - `WorkoutSuggestion`: A ranked plan recommendation for today
//! - `BodyProfile`: Measurements used for BMI and calorie targets

mod body;
mod workout;

// Workout domain
pub use workout::{
    AdherenceStats, MicroPlan, PainReport, PlanCategory, TimePreference, WorkoutSession,
    WorkoutSuggestion,
};

// Body metrics domain
pub use body::{ActivityLevel, BmiReading, BodyProfile, CalorieTargets, FitnessGoal, Gender};
