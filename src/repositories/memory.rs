// ABOUTME: In-memory implementation of every storage port for tests and ephemeral use
// ABOUTME: Keeps plans in insertion order and per-user records in hash maps behind a RwLock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{PainRepository, PlanRepository, SessionRepository, StatsRepository, StatsUpdate};
use crate::errors::AppResult;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use fitstreak_core::models::{AdherenceStats, MicroPlan, PainReport, WorkoutSession};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Default)]
struct MemoryState {
    plans: Vec<MicroPlan>,
    stats: HashMap<Uuid, AdherenceStats>,
    pain: HashMap<Uuid, Vec<PainReport>>,
    sessions: HashMap<Uuid, Vec<WorkoutSession>>,
}

/// Store holding everything in process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<MemoryState>,
}

impl MemoryStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with a plan catalog
    #[must_use]
    pub fn with_plans(plans: Vec<MicroPlan>) -> Self {
        Self {
            state: RwLock::new(MemoryState {
                plans,
                ..MemoryState::default()
            }),
        }
    }
}

#[async_trait]
impl PlanRepository for MemoryStore {
    async fn list_plans(&self) -> AppResult<Vec<MicroPlan>> {
        let mut plans = self.state.read().await.plans.clone();
        // Stable sort keeps insertion order within a duration
        plans.sort_by_key(|p| p.duration);
        Ok(plans)
    }

    async fn get_plan(&self, plan_id: &str) -> AppResult<Option<MicroPlan>> {
        let state = self.state.read().await;
        Ok(state.plans.iter().find(|p| p.id == plan_id).cloned())
    }

    async fn upsert_plan(&self, plan: &MicroPlan) -> AppResult<()> {
        let mut state = self.state.write().await;
        if let Some(existing) = state.plans.iter_mut().find(|p| p.id == plan.id) {
            *existing = plan.clone();
        } else {
            state.plans.push(plan.clone());
        }
        Ok(())
    }

    async fn count_plans(&self) -> AppResult<usize> {
        Ok(self.state.read().await.plans.len())
    }
}

#[async_trait]
impl StatsRepository for MemoryStore {
    async fn get_stats(&self, user_id: Uuid) -> AppResult<Option<AdherenceStats>> {
        Ok(self.state.read().await.stats.get(&user_id).cloned())
    }

    async fn upsert_stats(
        &self,
        user_id: Uuid,
        stats: &AdherenceStats,
        _updated_at: DateTime<Utc>,
    ) -> AppResult<()> {
        self.state
            .write()
            .await
            .stats
            .insert(user_id, stats.clone());
        Ok(())
    }
}

#[async_trait]
impl PainRepository for MemoryStore {
    async fn recent_pain(&self, user_id: Uuid, since: NaiveDate) -> AppResult<Vec<PainReport>> {
        let state = self.state.read().await;
        let mut reports: Vec<PainReport> = state
            .pain
            .get(&user_id)
            .map(|reports| reports.iter().filter(|r| r.date >= since).cloned().collect())
            .unwrap_or_default();
        reports.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(reports)
    }

    async fn upsert_pain(&self, user_id: Uuid, report: &PainReport) -> AppResult<()> {
        let mut state = self.state.write().await;
        let reports = state.pain.entry(user_id).or_default();
        if let Some(existing) = reports
            .iter_mut()
            .find(|r| r.area == report.area && r.date == report.date)
        {
            existing.level = report.level;
        } else {
            reports.push(report.clone());
        }
        Ok(())
    }
}

#[async_trait]
impl SessionRepository for MemoryStore {
    async fn insert_session(&self, session: &WorkoutSession) -> AppResult<()> {
        self.state
            .write()
            .await
            .sessions
            .entry(session.user_id)
            .or_default()
            .push(session.clone());
        Ok(())
    }

    async fn record_session(
        &self,
        session: &WorkoutSession,
        update: StatsUpdate<'_>,
    ) -> AppResult<AdherenceStats> {
        // One write guard covers the read and both writes
        let mut state = self.state.write().await;
        let stats = update(state.stats.get(&session.user_id));
        state
            .sessions
            .entry(session.user_id)
            .or_default()
            .push(session.clone());
        state.stats.insert(session.user_id, stats.clone());
        Ok(stats)
    }

    async fn recent_sessions(
        &self,
        user_id: Uuid,
        limit: usize,
    ) -> AppResult<Vec<WorkoutSession>> {
        let state = self.state.read().await;
        let mut sessions = state.sessions.get(&user_id).cloned().unwrap_or_default();
        sessions.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
        sessions.truncate(limit);
        Ok(sessions)
    }

    async fn sessions_since(
        &self,
        user_id: Uuid,
        since: DateTime<Utc>,
    ) -> AppResult<Vec<WorkoutSession>> {
        let state = self.state.read().await;
        let mut sessions: Vec<WorkoutSession> = state
            .sessions
            .get(&user_id)
            .map(|all| all.iter().filter(|s| s.completed_at >= since).cloned().collect())
            .unwrap_or_default();
        sessions.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
        Ok(sessions)
    }
}
