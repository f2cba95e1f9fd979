// ABOUTME: Domain service layer orchestrating storage ports and workout intelligence
// ABOUTME: Exposes the workout coach used by the command-line tool and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Services combine the repository traits with the pure algorithms of
//! `fitstreak-intelligence`. They own validation and logging so every entry
//! point applies the same rules.

/// Daily suggestions, session completion, pain tracking and adherence reporting
pub mod workout_coach;

pub use workout_coach::{AdherenceSummary, CompleteSessionRequest, SessionOutcome, WorkoutCoach};
