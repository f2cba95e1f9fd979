// ABOUTME: FitStreak CLI - command-line front end for the micro workout coach
// ABOUTME: Seeds the plan catalog, prints suggestions, records sessions and pain, reports stats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Populate the plan catalog
//! fitstreak-cli seed
//!
//! # Today's suggestions, optionally limited to 10 minute plans
//! fitstreak-cli suggest --duration 10
//!
//! # Record a finished session
//! fitstreak-cli complete --plan hip-mobility-5 --minutes 5 --rpe 6
//!
//! # Report knee pain for today
//! fitstreak-cli pain --area knee --level 4
//!
//! # Streaks and weekly active minutes
//! fitstreak-cli stats
//!
//! # Body metrics
//! fitstreak-cli bmi --weight 70 --height 175
//! fitstreak-cli calories --weight 80 --height 180 --age 30 --gender male --activity moderate --goal lose-weight
//! ```

mod commands;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use fitstreak::config::{AppConfig, DatabaseUrl};
use fitstreak::logging::LoggingConfig;
use fitstreak::models::{ActivityLevel, FitnessGoal, Gender};
use fitstreak::repositories::SqliteStore;
use fitstreak::services::{CompleteSessionRequest, WorkoutCoach};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

#[derive(Parser)]
#[command(
    name = "fitstreak-cli",
    about = "FitStreak micro workout coach",
    long_about = "Suggests short daily workouts based on your streaks, recent pain and the time of day."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database URL override
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// User ID (defaults to the local single-user profile)
    #[arg(long, global = true)]
    user: Option<Uuid>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Populate the plan catalog with the built-in plans
    Seed {
        /// Upsert the built-in plans even if the catalog is not empty
        #[arg(long)]
        force: bool,
    },

    /// Print today's suggestions as JSON
    Suggest {
        /// Only consider plans of this many minutes
        #[arg(long)]
        duration: Option<u32>,

        /// Pretend the local hour is this value (0-23)
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..24))]
        hour: Option<u32>,
    },

    /// Record a completed workout session
    Complete {
        /// Plan that was followed
        #[arg(long)]
        plan: Option<String>,

        /// Minutes spent
        #[arg(long)]
        minutes: u32,

        /// Rating of perceived exertion (1-10)
        #[arg(long)]
        rpe: Option<u8>,

        /// Pain during the session (0-10)
        #[arg(long)]
        pain: Option<u8>,

        /// Free-text notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Report pain for a body area
    Pain {
        /// Body area, e.g. knee or lower back
        #[arg(long)]
        area: String,

        /// Pain level (0-10)
        #[arg(long)]
        level: u8,

        /// Date of the report (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Show adherence stats, weekly minutes and recent sessions
    Stats,

    /// Calculate body mass index
    Bmi {
        /// Weight in kilograms
        #[arg(long)]
        weight: f64,

        /// Height in centimeters
        #[arg(long)]
        height: f64,
    },

    /// Calculate daily calorie and macro targets
    Calories {
        /// Weight in kilograms
        #[arg(long)]
        weight: f64,

        /// Height in centimeters
        #[arg(long)]
        height: f64,

        /// Age in years
        #[arg(long)]
        age: u32,

        /// Gender for the BMR equation
        #[arg(long, value_enum)]
        gender: GenderArg,

        /// Habitual activity level
        #[arg(long, value_enum, default_value = "moderate")]
        activity: ActivityArg,

        /// Intake goal
        #[arg(long, value_enum, default_value = "maintain")]
        goal: GoalArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum GenderArg {
    Male,
    Female,
}

impl From<GenderArg> for Gender {
    fn from(arg: GenderArg) -> Self {
        match arg {
            GenderArg::Male => Self::Male,
            GenderArg::Female => Self::Female,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ActivityArg {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl From<ActivityArg> for ActivityLevel {
    fn from(arg: ActivityArg) -> Self {
        match arg {
            ActivityArg::Sedentary => Self::Sedentary,
            ActivityArg::Light => Self::Light,
            ActivityArg::Moderate => Self::Moderate,
            ActivityArg::Active => Self::Active,
            ActivityArg::VeryActive => Self::VeryActive,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum GoalArg {
    LoseWeight,
    Maintain,
    GainMuscle,
}

impl From<GoalArg> for FitnessGoal {
    fn from(arg: GoalArg) -> Self {
        match arg {
            GoalArg::LoseWeight => Self::LoseWeight,
            GoalArg::Maintain => Self::Maintain,
            GoalArg::GainMuscle => Self::GainMuscle,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose).init()?;

    // Body metrics need no storage
    match cli.command {
        Command::Bmi { weight, height } => return commands::bmi(weight, height),
        Command::Calories {
            weight,
            height,
            age,
            gender,
            activity,
            goal,
        } => {
            return commands::calories(
                weight,
                height,
                age,
                gender.into(),
                activity.into(),
                goal.into(),
            )
        }
        _ => {}
    }

    let mut config = AppConfig::from_env()?;
    if let Some(url) = cli.database_url.as_deref() {
        config = config.with_database_url(DatabaseUrl::parse_url(url)?);
    }

    info!("Connecting to database: {}", config.database_url);
    let store = Arc::new(SqliteStore::connect(&config.database_url).await?);
    let coach = WorkoutCoach::from_store(store.clone(), &config);
    let user_id = cli.user.unwrap_or_else(Uuid::nil);

    match cli.command {
        Command::Seed { force } => commands::seed(store.as_ref(), force).await?,
        Command::Suggest { duration, hour } => {
            commands::suggest(&coach, user_id, duration, hour).await?;
        }
        Command::Complete {
            plan,
            minutes,
            rpe,
            pain,
            notes,
        } => {
            let request = CompleteSessionRequest {
                plan_id: plan,
                duration_minutes: minutes,
                rpe,
                pain,
                notes,
            };
            commands::complete(&coach, user_id, request).await?;
        }
        Command::Pain { area, level, date } => {
            commands::pain(&coach, user_id, &area, level, date).await?;
        }
        Command::Stats => commands::stats(&coach, user_id).await?,
        Command::Bmi { .. } | Command::Calories { .. } => {}
    }

    Ok(())
}
