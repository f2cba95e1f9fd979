// ABOUTME: Built-in catalog of micro workout plans seeded into new databases
// ABOUTME: Covers every plan duration and category with morning, evening and anytime options
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppResult;
use crate::repositories::PlanRepository;
use fitstreak_core::models::{MicroPlan, PlanCategory, TimePreference};
use tracing::info;

struct PlanData {
    id: &'static str,
    name: &'static str,
    duration: u32,
    category: PlanCategory,
    time_preference: TimePreference,
    progression_level: u8,
    cues: &'static [&'static str],
}

const DEFAULT_PLANS: &[PlanData] = &[
    // 5 minute quick wins
    PlanData {
        id: "wake-up-cardio-5",
        name: "Quick Morning Wake-up",
        duration: 5,
        category: PlanCategory::Cardio,
        time_preference: TimePreference::Am,
        progression_level: 1,
        cues: &["Jumping jacks 45s", "High knees 30s", "Rest 15s"],
    },
    PlanData {
        id: "desk-break-strength-5",
        name: "Desk Break Strength",
        duration: 5,
        category: PlanCategory::Strength,
        time_preference: TimePreference::Anytime,
        progression_level: 1,
        cues: &["Squats x12", "Push-ups x8", "Calf raises x15"],
    },
    PlanData {
        id: "hip-mobility-5",
        name: "Hip Mobility Flow",
        duration: 5,
        category: PlanCategory::Mobility,
        time_preference: TimePreference::Anytime,
        progression_level: 1,
        cues: &["Hip circles 30s each side", "Lunges with reach x6", "Stretch hip flexors 30s"],
    },
    PlanData {
        id: "wind-down-stretch-5",
        name: "Evening Wind-down Stretch",
        duration: 5,
        category: PlanCategory::Flexibility,
        time_preference: TimePreference::Pm,
        progression_level: 1,
        cues: &["Stretch hamstrings 45s", "Child's pose 45s", "Rest and breathe 30s"],
    },
    // 10 minute sessions
    PlanData {
        id: "core-foundation-10",
        name: "Core Foundation",
        duration: 10,
        category: PlanCategory::Strength,
        time_preference: TimePreference::Pm,
        progression_level: 2,
        cues: &["Plank 40s", "Bicycle crunches x20", "Side plank 30s each side"],
    },
    PlanData {
        id: "shoulder-mobility-10",
        name: "Shoulder Mobility Reset",
        duration: 10,
        category: PlanCategory::Mobility,
        time_preference: TimePreference::Anytime,
        progression_level: 2,
        cues: &["Arm circles 30s", "Wall slides x10", "Stretch chest in doorway 45s"],
    },
    PlanData {
        id: "morning-cardio-10",
        name: "Morning Cardio Builder",
        duration: 10,
        category: PlanCategory::Cardio,
        time_preference: TimePreference::Am,
        progression_level: 2,
        cues: &["Jump rope 60s", "Mountain climbers 30s", "Rest 30s"],
    },
    // 15 minute sessions
    PlanData {
        id: "full-body-strength-15",
        name: "Full Body Strength",
        duration: 15,
        category: PlanCategory::Strength,
        time_preference: TimePreference::Anytime,
        progression_level: 3,
        cues: &["Squats x15", "Push-ups x10", "Tricep dips x10", "Lunges x10 each leg"],
    },
    PlanData {
        id: "lower-back-mobility-15",
        name: "Lower Back Mobility",
        duration: 15,
        category: PlanCategory::Mobility,
        time_preference: TimePreference::Pm,
        progression_level: 2,
        cues: &["Cat-cow x10", "Stretch glutes 45s each side", "Plank 30s"],
    },
    PlanData {
        id: "sunrise-intervals-15",
        name: "Sunrise Intervals",
        duration: 15,
        category: PlanCategory::Cardio,
        time_preference: TimePreference::Am,
        progression_level: 3,
        cues: &["High knees 40s", "Burpees x8", "Rest 20s"],
    },
    // 20 minute challenges
    PlanData {
        id: "cardio-challenge-20",
        name: "Cardio Challenge",
        duration: 20,
        category: PlanCategory::Cardio,
        time_preference: TimePreference::Am,
        progression_level: 4,
        cues: &["Burpees x10", "Jump rope 90s", "Mountain climbers 45s"],
    },
    PlanData {
        id: "evening-strength-20",
        name: "Evening Strength Circuit",
        duration: 20,
        category: PlanCategory::Strength,
        time_preference: TimePreference::Pm,
        progression_level: 4,
        cues: &["Push-ups x15", "Squats x20", "Sit-ups x20", "Side plank 45s each side"],
    },
    PlanData {
        id: "knee-mobility-20",
        name: "Knee-Friendly Mobility",
        duration: 20,
        category: PlanCategory::Mobility,
        time_preference: TimePreference::Anytime,
        progression_level: 3,
        cues: &["Stretch quads 45s each side", "Calf raises x20", "Glute bridges x15"],
    },
];

/// The built-in plan catalog, ordered by duration
#[must_use]
pub fn default_catalog() -> Vec<MicroPlan> {
    DEFAULT_PLANS
        .iter()
        .map(|data| MicroPlan {
            id: data.id.to_owned(),
            name: data.name.to_owned(),
            duration: data.duration,
            category: data.category,
            time_preference: data.time_preference,
            progression_level: data.progression_level,
            cues: data.cues.iter().map(|&cue| cue.to_owned()).collect(),
        })
        .collect()
}

/// Outcome of a catalog seeding run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Plans were written
    Seeded(usize),
    /// The catalog already had plans and `force` was not set
    Skipped(usize),
}

/// Write the built-in catalog unless plans already exist
///
/// With `force`, every built-in plan is upserted, replacing plans with the
/// same ID and leaving other plans untouched.
///
/// # Errors
///
/// Returns an error if the repository fails
pub async fn seed_default_catalog<R>(repository: &R, force: bool) -> AppResult<SeedOutcome>
where
    R: PlanRepository + ?Sized,
{
    let existing = repository.count_plans().await?;
    if existing > 0 && !force {
        info!(existing, "Plan catalog already populated, skipping seed");
        return Ok(SeedOutcome::Skipped(existing));
    }

    let plans = default_catalog();
    for plan in &plans {
        repository.upsert_plan(plan).await?;
    }
    info!(count = plans.len(), "Seeded default plan catalog");
    Ok(SeedOutcome::Seeded(plans.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitstreak_core::constants::workout::{
        MAX_PROGRESSION_LEVEL, MIN_PROGRESSION_LEVEL, PLAN_DURATIONS_MINUTES,
    };
    use std::collections::HashSet;

    #[test]
    fn test_catalog_covers_every_duration_and_category() {
        let catalog = default_catalog();
        for duration in PLAN_DURATIONS_MINUTES {
            assert!(catalog.iter().any(|p| p.duration == duration));
        }
        for category in [
            PlanCategory::Cardio,
            PlanCategory::Strength,
            PlanCategory::Mobility,
            PlanCategory::Flexibility,
        ] {
            assert!(catalog.iter().any(|p| p.category == category));
        }
    }

    #[test]
    fn test_catalog_ids_are_unique_and_sorted_by_duration() {
        let catalog = default_catalog();
        let ids: HashSet<&str> = catalog.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.len());
        assert!(catalog.windows(2).all(|w| w[0].duration <= w[1].duration));
    }

    #[test]
    fn test_catalog_progression_levels_in_range() {
        for plan in default_catalog() {
            assert!(
                (MIN_PROGRESSION_LEVEL..=MAX_PROGRESSION_LEVEL).contains(&plan.progression_level),
                "{} has progression level {}",
                plan.id,
                plan.progression_level
            );
        }
    }
}
