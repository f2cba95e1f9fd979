// ABOUTME: SQLite implementation of the plan, stats, pain and session storage ports
// ABOUTME: Creates its tables on connect and maps rows to the core workout models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{PainRepository, PlanRepository, SessionRepository, StatsRepository, StatsUpdate};
use crate::config::DatabaseUrl;
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use fitstreak_core::models::{
    AdherenceStats, MicroPlan, PainReport, PlanCategory, TimePreference, WorkoutSession,
};
use sqlx::sqlite::{SqlitePoolOptions, SqliteRow};
use sqlx::{Executor, Row, Sqlite, SqlitePool};
use tokio::fs;
use tracing::{debug, info};
use uuid::Uuid;

/// Store backed by a `SQLite` database
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (creating if needed) the database and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrated
    pub async fn connect(database_url: &DatabaseUrl) -> AppResult<Self> {
        let pool = match database_url {
            // A single connection that never expires keeps the in-memory database alive
            DatabaseUrl::Memory => SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect(&database_url.to_connection_string())
                .await
                .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?,
            DatabaseUrl::SQLite { path } => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent).await?;
                }
                // Ensure SQLite creates the database file if it doesn't exist
                SqlitePool::connect(&format!("{database_url}?mode=rwc"))
                    .await
                    .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?
            }
        };

        info!("Connected to database: {database_url}");
        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    /// Get a reference to the database pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the coach tables if they do not exist
    ///
    /// # Errors
    ///
    /// Returns an error if a statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        const STATEMENTS: [&str; 5] = [
            r"
            CREATE TABLE IF NOT EXISTS micro_plans (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                duration INTEGER NOT NULL,
                category TEXT NOT NULL,
                time_preference TEXT NOT NULL,
                progression_level INTEGER NOT NULL DEFAULT 1,
                cues TEXT NOT NULL DEFAULT '[]'
            )
            ",
            r"
            CREATE TABLE IF NOT EXISTS adherence_stats (
                user_id TEXT PRIMARY KEY,
                complete_streak INTEGER NOT NULL DEFAULT 0,
                miss_streak INTEGER NOT NULL DEFAULT 0,
                last_activity_date TEXT,
                total_active_minutes INTEGER NOT NULL DEFAULT 0,
                updated_at TEXT NOT NULL
            )
            ",
            r"
            CREATE TABLE IF NOT EXISTS pain_tracking (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id TEXT NOT NULL,
                area TEXT NOT NULL,
                level INTEGER NOT NULL CHECK (level BETWEEN 0 AND 10),
                date TEXT NOT NULL,
                UNIQUE (user_id, area, date)
            )
            ",
            r"
            CREATE TABLE IF NOT EXISTS workout_sessions (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                plan_id TEXT,
                completed_at TEXT NOT NULL,
                duration_minutes INTEGER NOT NULL,
                rpe INTEGER,
                pain INTEGER,
                notes TEXT
            )
            ",
            r"
            CREATE INDEX IF NOT EXISTS idx_workout_sessions_user_completed
                ON workout_sessions (user_id, completed_at)
            ",
        ];

        for statement in STATEMENTS {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| AppError::database(format!("Migration failed: {e}")))?;
        }
        debug!("Database migrations complete");
        Ok(())
    }
}

/// Fixed-width UTC timestamp so text comparison follows time order
fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(s: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| AppError::internal(format!("Invalid datetime: {e}")))
}

fn parse_date(s: &str) -> AppResult<NaiveDate> {
    s.parse()
        .map_err(|e| AppError::internal(format!("Invalid date '{s}': {e}")))
}

fn parse_uuid(s: &str) -> AppResult<Uuid> {
    Uuid::parse_str(s).map_err(|e| AppError::internal(format!("Invalid UUID '{s}': {e}")))
}

/// Convert a database row to a `MicroPlan`
fn row_to_plan(row: &SqliteRow) -> AppResult<MicroPlan> {
    let category: String = row.try_get("category")?;
    let time_preference: String = row.try_get("time_preference")?;
    let cues_json: String = row.try_get("cues")?;
    let duration: i64 = row.try_get("duration")?;
    let progression_level: i64 = row.try_get("progression_level")?;

    Ok(MicroPlan {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        duration: duration as u32,
        category: PlanCategory::parse(&category).ok_or_else(|| {
            AppError::internal(format!("Unknown plan category in database: {category}"))
        })?,
        time_preference: TimePreference::parse(&time_preference).ok_or_else(|| {
            AppError::internal(format!("Unknown time preference in database: {time_preference}"))
        })?,
        progression_level: progression_level as u8,
        cues: serde_json::from_str(&cues_json)?,
    })
}

/// Convert a database row to `AdherenceStats`
fn row_to_stats(row: &SqliteRow) -> AppResult<AdherenceStats> {
    let complete_streak: i64 = row.try_get("complete_streak")?;
    let miss_streak: i64 = row.try_get("miss_streak")?;
    let last_activity_date: Option<String> = row.try_get("last_activity_date")?;
    let total_active_minutes: i64 = row.try_get("total_active_minutes")?;

    Ok(AdherenceStats {
        complete_streak: complete_streak as u32,
        miss_streak: miss_streak as u32,
        last_activity_date: last_activity_date.as_deref().map(parse_date).transpose()?,
        total_active_minutes: total_active_minutes as u32,
    })
}

/// Convert a database row to a `PainReport`
fn row_to_pain(row: &SqliteRow) -> AppResult<PainReport> {
    let level: i64 = row.try_get("level")?;
    let date: String = row.try_get("date")?;

    Ok(PainReport {
        area: row.try_get("area")?,
        level: level as u8,
        date: parse_date(&date)?,
    })
}

/// Convert a database row to a `WorkoutSession`
fn row_to_session(row: &SqliteRow) -> AppResult<WorkoutSession> {
    let id: String = row.try_get("id")?;
    let user_id: String = row.try_get("user_id")?;
    let completed_at: String = row.try_get("completed_at")?;
    let duration_minutes: i64 = row.try_get("duration_minutes")?;
    let rpe: Option<i64> = row.try_get("rpe")?;
    let pain: Option<i64> = row.try_get("pain")?;

    Ok(WorkoutSession {
        id: parse_uuid(&id)?,
        user_id: parse_uuid(&user_id)?,
        plan_id: row.try_get("plan_id")?,
        completed_at: parse_timestamp(&completed_at)?,
        duration_minutes: duration_minutes as u32,
        rpe: rpe.map(|r| r as u8),
        pain: pain.map(|p| p as u8),
        notes: row.try_get("notes")?,
    })
}

#[async_trait]
impl PlanRepository for SqliteStore {
    async fn list_plans(&self) -> AppResult<Vec<MicroPlan>> {
        let rows = sqlx::query(
            r"
            SELECT id, name, duration, category, time_preference, progression_level, cues
            FROM micro_plans
            ORDER BY duration ASC, rowid ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list plans: {e}")))?;

        rows.iter().map(row_to_plan).collect()
    }

    async fn get_plan(&self, plan_id: &str) -> AppResult<Option<MicroPlan>> {
        let row = sqlx::query(
            r"
            SELECT id, name, duration, category, time_preference, progression_level, cues
            FROM micro_plans
            WHERE id = $1
            ",
        )
        .bind(plan_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get plan: {e}")))?;

        row.map(|r| row_to_plan(&r)).transpose()
    }

    async fn upsert_plan(&self, plan: &MicroPlan) -> AppResult<()> {
        let cues = serde_json::to_string(&plan.cues)?;
        sqlx::query(
            r"
            INSERT INTO micro_plans (id, name, duration, category, time_preference, progression_level, cues)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE SET
                name = excluded.name,
                duration = excluded.duration,
                category = excluded.category,
                time_preference = excluded.time_preference,
                progression_level = excluded.progression_level,
                cues = excluded.cues
            ",
        )
        .bind(&plan.id)
        .bind(&plan.name)
        .bind(i64::from(plan.duration))
        .bind(plan.category.as_str())
        .bind(plan.time_preference.as_str())
        .bind(i64::from(plan.progression_level))
        .bind(cues)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to save plan {}: {e}", plan.id)))?;
        Ok(())
    }

    async fn count_plans(&self) -> AppResult<usize> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM micro_plans")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to count plans: {e}")))?;
        Ok(count as usize)
    }
}

/// Read a user's stats through a pool or an open transaction
async fn fetch_stats<'e, E>(executor: E, user_id: Uuid) -> AppResult<Option<AdherenceStats>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let row = sqlx::query(
        r"
        SELECT complete_streak, miss_streak, last_activity_date, total_active_minutes
        FROM adherence_stats
        WHERE user_id = $1
        ",
    )
    .bind(user_id.to_string())
    .fetch_optional(executor)
    .await
    .map_err(|e| AppError::database(format!("Failed to get adherence stats: {e}")))?;

    row.map(|r| row_to_stats(&r)).transpose()
}

/// Insert or replace a user's stats through a pool or an open transaction
async fn write_stats<'e, E>(
    executor: E,
    user_id: Uuid,
    stats: &AdherenceStats,
    updated_at: DateTime<Utc>,
) -> AppResult<()>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query(
        r"
        INSERT INTO adherence_stats
            (user_id, complete_streak, miss_streak, last_activity_date, total_active_minutes, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        ON CONFLICT (user_id) DO UPDATE SET
            complete_streak = excluded.complete_streak,
            miss_streak = excluded.miss_streak,
            last_activity_date = excluded.last_activity_date,
            total_active_minutes = excluded.total_active_minutes,
            updated_at = excluded.updated_at
        ",
    )
    .bind(user_id.to_string())
    .bind(i64::from(stats.complete_streak))
    .bind(i64::from(stats.miss_streak))
    .bind(stats.last_activity_date.map(|d| d.to_string()))
    .bind(i64::from(stats.total_active_minutes))
    .bind(timestamp(updated_at))
    .execute(executor)
    .await
    .map_err(|e| AppError::database(format!("Failed to save adherence stats: {e}")))?;
    Ok(())
}

/// Insert a session row through a pool or an open transaction
async fn write_session<'e, E>(executor: E, session: &WorkoutSession) -> AppResult<()>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query(
        r"
        INSERT INTO workout_sessions
            (id, user_id, plan_id, completed_at, duration_minutes, rpe, pain, notes)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        ",
    )
    .bind(session.id.to_string())
    .bind(session.user_id.to_string())
    .bind(session.plan_id.as_deref())
    .bind(timestamp(session.completed_at))
    .bind(i64::from(session.duration_minutes))
    .bind(session.rpe.map(i64::from))
    .bind(session.pain.map(i64::from))
    .bind(session.notes.as_deref())
    .execute(executor)
    .await
    .map_err(|e| AppError::database(format!("Failed to save workout session: {e}")))?;
    Ok(())
}

#[async_trait]
impl StatsRepository for SqliteStore {
    async fn get_stats(&self, user_id: Uuid) -> AppResult<Option<AdherenceStats>> {
        fetch_stats(&self.pool, user_id).await
    }

    async fn upsert_stats(
        &self,
        user_id: Uuid,
        stats: &AdherenceStats,
        updated_at: DateTime<Utc>,
    ) -> AppResult<()> {
        write_stats(&self.pool, user_id, stats, updated_at).await
    }
}

#[async_trait]
impl PainRepository for SqliteStore {
    async fn recent_pain(&self, user_id: Uuid, since: NaiveDate) -> AppResult<Vec<PainReport>> {
        let rows = sqlx::query(
            r"
            SELECT area, level, date
            FROM pain_tracking
            WHERE user_id = $1 AND date >= $2
            ORDER BY date DESC, id ASC
            ",
        )
        .bind(user_id.to_string())
        .bind(since.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get pain reports: {e}")))?;

        rows.iter().map(row_to_pain).collect()
    }

    async fn upsert_pain(&self, user_id: Uuid, report: &PainReport) -> AppResult<()> {
        sqlx::query(
            r"
            INSERT INTO pain_tracking (user_id, area, level, date)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id, area, date) DO UPDATE SET level = excluded.level
            ",
        )
        .bind(user_id.to_string())
        .bind(&report.area)
        .bind(i64::from(report.level))
        .bind(report.date.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to save pain report: {e}")))?;
        Ok(())
    }
}

#[async_trait]
impl SessionRepository for SqliteStore {
    async fn insert_session(&self, session: &WorkoutSession) -> AppResult<()> {
        write_session(&self.pool, session).await
    }

    async fn record_session(
        &self,
        session: &WorkoutSession,
        update: StatsUpdate<'_>,
    ) -> AppResult<AdherenceStats> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;

        // Writing first takes the database write lock before the stats are read
        write_session(&mut *tx, session).await?;
        let previous = fetch_stats(&mut *tx, session.user_id).await?;
        let stats = update(previous.as_ref());
        write_stats(&mut *tx, session.user_id, &stats, session.completed_at).await?;

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit workout session: {e}")))?;
        Ok(stats)
    }

    async fn recent_sessions(
        &self,
        user_id: Uuid,
        limit: usize,
    ) -> AppResult<Vec<WorkoutSession>> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, plan_id, completed_at, duration_minutes, rpe, pain, notes
            FROM workout_sessions
            WHERE user_id = $1
            ORDER BY completed_at DESC
            LIMIT $2
            ",
        )
        .bind(user_id.to_string())
        .bind(i64::try_from(limit).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get workout sessions: {e}")))?;

        rows.iter().map(row_to_session).collect()
    }

    async fn sessions_since(
        &self,
        user_id: Uuid,
        since: DateTime<Utc>,
    ) -> AppResult<Vec<WorkoutSession>> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, plan_id, completed_at, duration_minutes, rpe, pain, notes
            FROM workout_sessions
            WHERE user_id = $1 AND completed_at >= $2
            ORDER BY completed_at DESC
            ",
        )
        .bind(user_id.to_string())
        .bind(timestamp(since))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get workout sessions: {e}")))?;

        rows.iter().map(row_to_session).collect()
    }
}
