// ABOUTME: Storage ports for plans, adherence stats, pain reports and workout sessions
// ABOUTME: Async traits implemented by the in-memory and SQLite stores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Repositories
//!
//! The coach service only talks to storage through these traits, so the
//! same service code runs against [`MemoryStore`] in tests and
//! [`SqliteStore`] in the command-line tool.

/// In-memory store guarded by a `tokio` read-write lock
pub mod memory;
/// `SQLite` store backed by an `sqlx` pool
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::errors::AppResult;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use fitstreak_core::models::{AdherenceStats, MicroPlan, PainReport, WorkoutSession};
use uuid::Uuid;

/// Micro plan catalog storage
#[async_trait]
pub trait PlanRepository: Send + Sync {
    /// All plans ordered by duration, then insertion order
    async fn list_plans(&self) -> AppResult<Vec<MicroPlan>>;

    /// Get a plan by ID
    async fn get_plan(&self, plan_id: &str) -> AppResult<Option<MicroPlan>>;

    /// Insert a plan or replace the plan with the same ID in place
    async fn upsert_plan(&self, plan: &MicroPlan) -> AppResult<()>;

    /// Number of plans in the catalog
    async fn count_plans(&self) -> AppResult<usize>;
}

/// Computes a user's new stats from the stored ones
pub type StatsUpdate<'a> = &'a (dyn Fn(Option<&AdherenceStats>) -> AdherenceStats + Send + Sync);

/// Per-user adherence stats storage
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Get a user's stats, if any were ever recorded
    async fn get_stats(&self, user_id: Uuid) -> AppResult<Option<AdherenceStats>>;

    /// Insert or replace a user's stats, stamped with `updated_at`
    async fn upsert_stats(
        &self,
        user_id: Uuid,
        stats: &AdherenceStats,
        updated_at: DateTime<Utc>,
    ) -> AppResult<()>;
}

/// Pain report storage
#[async_trait]
pub trait PainRepository: Send + Sync {
    /// Reports dated on or after `since`, newest first
    async fn recent_pain(&self, user_id: Uuid, since: NaiveDate) -> AppResult<Vec<PainReport>>;

    /// Insert a report or replace the one for the same area and date
    async fn upsert_pain(&self, user_id: Uuid, report: &PainReport) -> AppResult<()>;
}

/// Completed workout session storage
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Record a completed session
    async fn insert_session(&self, session: &WorkoutSession) -> AppResult<()>;

    /// Record a session and fold it into the owner's stats as one unit
    ///
    /// `update` sees the stats as stored right before the write. No other
    /// session for the same store lands between that read and the write, and
    /// nothing is stored if either step fails. The stats are stamped with the
    /// session's completion time.
    async fn record_session(
        &self,
        session: &WorkoutSession,
        update: StatsUpdate<'_>,
    ) -> AppResult<AdherenceStats>;

    /// Most recent sessions first, at most `limit`
    async fn recent_sessions(&self, user_id: Uuid, limit: usize)
        -> AppResult<Vec<WorkoutSession>>;

    /// Sessions completed at or after `since`, most recent first
    async fn sessions_since(
        &self,
        user_id: Uuid,
        since: DateTime<Utc>,
    ) -> AppResult<Vec<WorkoutSession>>;
}

/// A store implementing every storage port
pub trait CoachStore: PlanRepository + StatsRepository + PainRepository + SessionRepository {}

impl<T> CoachStore for T where
    T: PlanRepository + StatsRepository + PainRepository + SessionRepository
{
}
