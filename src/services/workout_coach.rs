// ABOUTME: Workout coach service combining storage ports with the suggestion engine
// ABOUTME: Suggests today's plans, records sessions and pain, and reports adherence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::AppConfig;
use crate::constants::{pain, sessions};
use crate::errors::{AppError, AppResult};
use crate::repositories::{
    CoachStore, PainRepository, PlanRepository, SessionRepository, StatsRepository,
};
use chrono::{Duration, NaiveDate};
use fitstreak_core::models::{AdherenceStats, PainReport, WorkoutSession, WorkoutSuggestion};
use fitstreak_intelligence::adherence::{record_completion, weekly_active_minutes};
use fitstreak_intelligence::clock::{Clock, SystemClock};
use fitstreak_intelligence::media::attach_media;
use fitstreak_intelligence::suggestion_engine::{SuggestionEngine, SuggestionRequest};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// A completed workout to record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompleteSessionRequest {
    /// Plan that was followed, if any
    pub plan_id: Option<String>,
    /// Minutes spent
    pub duration_minutes: u32,
    /// Rating of perceived exertion, 1-10
    pub rpe: Option<u8>,
    /// Pain felt during the session, 0-10
    pub pain: Option<u8>,
    /// Free-text notes
    pub notes: Option<String>,
}

impl CompleteSessionRequest {
    /// Validate ranges before anything is written
    ///
    /// # Errors
    ///
    /// Returns an error if minutes are zero or RPE/pain are out of range
    pub fn validate(&self) -> AppResult<()> {
        if self.duration_minutes == 0 {
            return Err(AppError::invalid_input(
                "Session duration must be at least one minute",
            ));
        }
        if let Some(rpe) = self.rpe {
            if !(sessions::MIN_RPE..=sessions::MAX_RPE).contains(&rpe) {
                return Err(AppError::out_of_range(format!(
                    "RPE must be between {} and {}, got {rpe}",
                    sessions::MIN_RPE,
                    sessions::MAX_RPE
                )));
            }
        }
        if let Some(level) = self.pain {
            validate_pain_level(level)?;
        }
        Ok(())
    }
}

fn validate_pain_level(level: u8) -> AppResult<()> {
    if level > pain::MAX_LEVEL {
        return Err(AppError::out_of_range(format!(
            "Pain level must be between {} and {}, got {level}",
            pain::MIN_LEVEL,
            pain::MAX_LEVEL
        )));
    }
    Ok(())
}

/// Result of recording a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionOutcome {
    /// The stored session
    pub session: WorkoutSession,
    /// Adherence stats after the session
    pub stats: AdherenceStats,
}

/// Adherence overview for one user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdherenceSummary {
    /// Current stats, zeroed if nothing was recorded yet
    pub stats: AdherenceStats,
    /// Minutes completed in the weekly window
    pub weekly_active_minutes: u32,
}

/// Coach service
///
/// Reads the catalog, stats and recent pain through the repository ports and
/// delegates the choice of plans to [`SuggestionEngine`]. The clock decides
/// both the time-of-day context and what "today" means for streaks and pain.
pub struct WorkoutCoach<C: Clock = SystemClock> {
    plans: Arc<dyn PlanRepository>,
    stats: Arc<dyn StatsRepository>,
    pain: Arc<dyn PainRepository>,
    sessions: Arc<dyn SessionRepository>,
    engine: SuggestionEngine<C>,
    pain_window_days: i64,
    session_history_limit: usize,
    weekly_window_days: i64,
}

impl WorkoutCoach {
    /// Coach over a single store using the system clock
    #[must_use]
    pub fn from_store<S>(store: Arc<S>, config: &AppConfig) -> Self
    where
        S: CoachStore + 'static,
    {
        Self::with_clock(store, config, SystemClock)
    }
}

impl<C: Clock> WorkoutCoach<C> {
    /// Coach over a single store with an explicit clock
    #[must_use]
    pub fn with_clock<S>(store: Arc<S>, config: &AppConfig, clock: C) -> Self
    where
        S: CoachStore + 'static,
    {
        Self {
            plans: store.clone(),
            stats: store.clone(),
            pain: store.clone(),
            sessions: store,
            engine: SuggestionEngine::with_clock(config.engine.clone(), clock),
            pain_window_days: config.pain_window_days,
            session_history_limit: config.session_history_limit,
            weekly_window_days: config.weekly_window_days,
        }
    }

    /// Suggestion engine in use
    #[must_use]
    pub const fn engine(&self) -> &SuggestionEngine<C> {
        &self.engine
    }

    /// Today's suggestions for the current local hour
    ///
    /// # Errors
    ///
    /// Returns an error if reading plans, stats or pain reports fails
    pub async fn todays_suggestions(
        &self,
        user_id: Uuid,
        selected_duration: Option<u32>,
    ) -> AppResult<Vec<WorkoutSuggestion>> {
        let hour = self.engine.clock().local_hour();
        self.suggestions_at_hour(user_id, selected_duration, hour)
            .await
    }

    /// Suggestions as if the local time were `hour`
    ///
    /// # Errors
    ///
    /// Returns an error if reading plans, stats or pain reports fails
    pub async fn suggestions_at_hour(
        &self,
        user_id: Uuid,
        selected_duration: Option<u32>,
        hour: u32,
    ) -> AppResult<Vec<WorkoutSuggestion>> {
        let plans = self.plans.list_plans().await?;
        let stats = self.stats.get_stats(user_id).await?;
        let recent_pain = self.recent_pain(user_id).await?;

        let request = SuggestionRequest::new(&plans)
            .with_stats(stats.as_ref())
            .with_pain(&recent_pain)
            .with_duration(selected_duration);

        let mut suggestions = self.engine.generate_at_hour(&request, hour);
        attach_media(&mut suggestions);

        info!(
            user_id = %user_id,
            hour,
            selected_duration = ?selected_duration,
            plans = plans.len(),
            suggestions = suggestions.len(),
            "Generated workout suggestions"
        );
        Ok(suggestions)
    }

    /// Pain reports inside the trailing window, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the repository fails
    pub async fn recent_pain(&self, user_id: Uuid) -> AppResult<Vec<PainReport>> {
        let since = self.engine.clock().today() - Duration::days(self.pain_window_days);
        self.pain.recent_pain(user_id, since).await
    }

    /// Record a completed session and update adherence stats
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails, the plan does not exist or
    /// storage fails
    pub async fn complete_session(
        &self,
        user_id: Uuid,
        request: CompleteSessionRequest,
    ) -> AppResult<SessionOutcome> {
        request.validate()?;
        if let Some(plan_id) = &request.plan_id {
            if self.plans.get_plan(plan_id).await?.is_none() {
                return Err(AppError::not_found(format!("Plan {plan_id}")));
            }
        }

        let clock = self.engine.clock();
        let session = WorkoutSession {
            id: Uuid::new_v4(),
            user_id,
            plan_id: request.plan_id,
            completed_at: clock.utc_now(),
            duration_minutes: request.duration_minutes,
            rpe: request.rpe,
            pain: request.pain,
            notes: request.notes.filter(|n| !n.trim().is_empty()),
        };
        let today = clock.today();
        let minutes = session.duration_minutes;
        let update =
            move |previous: Option<&AdherenceStats>| record_completion(previous, today, minutes);
        let stats = self.sessions.record_session(&session, &update).await?;

        info!(
            user_id = %user_id,
            session_id = %session.id,
            minutes = session.duration_minutes,
            complete_streak = stats.complete_streak,
            "Recorded workout session"
        );
        Ok(SessionOutcome { session, stats })
    }

    /// Record pain for a body area, replacing any report for the same area and day
    ///
    /// # Errors
    ///
    /// Returns an error if the area is blank, the level is above 10 or storage fails
    pub async fn track_pain(
        &self,
        user_id: Uuid,
        area: &str,
        level: u8,
        date: Option<NaiveDate>,
    ) -> AppResult<PainReport> {
        let area = area.trim();
        if area.is_empty() {
            return Err(AppError::invalid_input("Pain area must not be empty"));
        }
        validate_pain_level(level)?;

        let report = PainReport {
            area: area.to_owned(),
            level,
            date: date.unwrap_or_else(|| self.engine.clock().today()),
        };
        self.pain.upsert_pain(user_id, &report).await?;

        debug!(user_id = %user_id, area = %report.area, level, date = %report.date, "Tracked pain");
        Ok(report)
    }

    /// Most recent sessions, limited by the configured history size
    ///
    /// # Errors
    ///
    /// Returns an error if the repository fails
    pub async fn session_history(&self, user_id: Uuid) -> AppResult<Vec<WorkoutSession>> {
        self.sessions
            .recent_sessions(user_id, self.session_history_limit)
            .await
    }

    /// Minutes completed within the weekly window
    ///
    /// # Errors
    ///
    /// Returns an error if the repository fails
    pub async fn weekly_active_minutes(&self, user_id: Uuid) -> AppResult<u32> {
        let now = self.engine.clock().utc_now();
        let since = now - Duration::days(self.weekly_window_days);
        let recent = self.sessions.sessions_since(user_id, since).await?;
        Ok(weekly_active_minutes(&recent, now, self.weekly_window_days))
    }

    /// Current stats, zeroed if nothing was recorded yet
    ///
    /// # Errors
    ///
    /// Returns an error if the repository fails
    pub async fn adherence_stats(&self, user_id: Uuid) -> AppResult<AdherenceStats> {
        Ok(self.stats.get_stats(user_id).await?.unwrap_or_default())
    }

    /// Stats together with weekly active minutes
    ///
    /// # Errors
    ///
    /// Returns an error if the repository fails
    pub async fn adherence_summary(&self, user_id: Uuid) -> AppResult<AdherenceSummary> {
        Ok(AdherenceSummary {
            stats: self.adherence_stats(user_id).await?,
            weekly_active_minutes: self.weekly_active_minutes(user_id).await?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_request_validation() {
        let valid = CompleteSessionRequest {
            duration_minutes: 10,
            rpe: Some(7),
            pain: Some(0),
            ..CompleteSessionRequest::default()
        };
        assert!(valid.validate().is_ok());

        let zero_minutes = CompleteSessionRequest::default();
        assert!(zero_minutes.validate().is_err());

        let bad_rpe = CompleteSessionRequest {
            duration_minutes: 10,
            rpe: Some(0),
            ..CompleteSessionRequest::default()
        };
        assert!(bad_rpe.validate().is_err());

        let bad_pain = CompleteSessionRequest {
            duration_minutes: 10,
            pain: Some(11),
            ..CompleteSessionRequest::default()
        };
        assert!(bad_pain.validate().is_err());
    }
}
