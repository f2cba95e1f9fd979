// ABOUTME: Subcommand handlers for fitstreak-cli
// ABOUTME: Calls the coach service or body metric helpers and prints JSON to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use chrono::NaiveDate;
use fitstreak::catalog::{seed_default_catalog, SeedOutcome};
use fitstreak::models::{ActivityLevel, BodyProfile, FitnessGoal, Gender};
use fitstreak::repositories::PlanRepository;
use fitstreak::services::{CompleteSessionRequest, WorkoutCoach};
use fitstreak_intelligence::{calculate_bmi, calculate_calorie_targets};
use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Seed the built-in catalog
pub async fn seed<R: PlanRepository + ?Sized>(repository: &R, force: bool) -> Result<()> {
    match seed_default_catalog(repository, force).await? {
        SeedOutcome::Seeded(count) => println!("Seeded {count} plans"),
        SeedOutcome::Skipped(existing) => {
            println!("Catalog already has {existing} plans (use --force to reseed)");
        }
    }
    Ok(())
}

/// Print suggestions for now or for an explicit hour
pub async fn suggest(
    coach: &WorkoutCoach,
    user_id: Uuid,
    duration: Option<u32>,
    hour: Option<u32>,
) -> Result<()> {
    let suggestions = match hour {
        Some(hour) => coach.suggestions_at_hour(user_id, duration, hour).await?,
        None => coach.todays_suggestions(user_id, duration).await?,
    };
    print_json(&suggestions)
}

/// Record a session and print the updated stats
pub async fn complete(
    coach: &WorkoutCoach,
    user_id: Uuid,
    request: CompleteSessionRequest,
) -> Result<()> {
    let outcome = coach.complete_session(user_id, request).await?;
    print_json(&outcome)
}

/// Record a pain report
pub async fn pain(
    coach: &WorkoutCoach,
    user_id: Uuid,
    area: &str,
    level: u8,
    date: Option<NaiveDate>,
) -> Result<()> {
    let report = coach.track_pain(user_id, area, level, date).await?;
    print_json(&report)
}

/// Print adherence summary and recent sessions
pub async fn stats(coach: &WorkoutCoach, user_id: Uuid) -> Result<()> {
    let summary = coach.adherence_summary(user_id).await?;
    let sessions = coach.session_history(user_id).await?;
    let recent_pain = coach.recent_pain(user_id).await?;
    print_json(&json!({
        "stats": summary.stats,
        "weekly_active_minutes": summary.weekly_active_minutes,
        "recent_sessions": sessions,
        "recent_pain": recent_pain,
    }))
}

/// Print a BMI reading
pub fn bmi(weight_kg: f64, height_cm: f64) -> Result<()> {
    print_json(&calculate_bmi(weight_kg, height_cm)?)
}

/// Print calorie and macro targets
pub fn calories(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    activity_level: ActivityLevel,
    fitness_goal: FitnessGoal,
) -> Result<()> {
    let profile = BodyProfile {
        weight_kg,
        height_cm,
        age,
        gender,
        activity_level,
        fitness_goal,
    };
    print_json(&calculate_calorie_targets(&profile)?)
}
