// ABOUTME: Streak accounting for completed workout sessions and weekly active minutes
// ABOUTME: Produces new AdherenceStats values without mutating the previous record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Adherence accounting
//!
//! A completion on the day after the last recorded activity extends the
//! complete streak, a second completion on the same day leaves it unchanged,
//! and anything else starts a new streak of one. Every completion clears the
//! miss streak.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use fitstreak_core::models::{AdherenceStats, WorkoutSession};

/// Stats after completing a session of `minutes` on `today`
#[must_use]
pub fn record_completion(
    previous: Option<&AdherenceStats>,
    today: NaiveDate,
    minutes: u32,
) -> AdherenceStats {
    let previous = previous.cloned().unwrap_or_default();

    let complete_streak = match previous.last_activity_date {
        Some(last) => match (today - last).num_days() {
            0 => previous.complete_streak,
            1 => previous.complete_streak.saturating_add(1),
            _ => 1,
        },
        None => 1,
    };

    AdherenceStats {
        complete_streak,
        miss_streak: 0,
        last_activity_date: Some(today),
        total_active_minutes: previous.total_active_minutes.saturating_add(minutes),
    }
}

/// Total minutes of sessions completed within `window_days` before `now`
#[must_use]
pub fn weekly_active_minutes(
    sessions: &[WorkoutSession],
    now: DateTime<Utc>,
    window_days: i64,
) -> u32 {
    let since = now - Duration::days(window_days);
    sessions
        .iter()
        .filter(|s| s.completed_at >= since)
        .fold(0_u32, |total, s| total.saturating_add(s.duration_minutes))
}
