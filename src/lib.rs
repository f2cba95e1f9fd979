// ABOUTME: Main library entry point for the FitStreak workout coach
// ABOUTME: Wires configuration, logging, storage and the coach service around the suggestion engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `FitStreak`
//!
//! A micro workout coach. Each day it suggests at most two short workout
//! plans chosen from a catalog, steering users back after missed days,
//! toward mobility work when an area keeps hurting, and toward longer
//! sessions while a streak holds.
//!
//! ## Architecture
//!
//! - **`fitstreak-core`**: errors, models and constants
//! - **`fitstreak-intelligence`**: the pure suggestion engine and related algorithms
//! - **repositories**: storage ports with in-memory and `SQLite` implementations
//! - **services**: the [`services::WorkoutCoach`] orchestrating storage and the engine
//! - **config** / **logging**: environment-driven configuration and `tracing` setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use fitstreak::catalog::default_catalog;
//! use fitstreak::config::environment::AppConfig;
//! use fitstreak::errors::AppResult;
//! use fitstreak::repositories::MemoryStore;
//! use fitstreak::services::WorkoutCoach;
//! use uuid::Uuid;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let store = Arc::new(MemoryStore::with_plans(default_catalog()));
//!     let coach = WorkoutCoach::from_store(store, &AppConfig::default());
//!
//!     for suggestion in coach.todays_suggestions(Uuid::new_v4(), None).await? {
//!         println!("{} ({} min): {}", suggestion.name, suggestion.duration, suggestion.reason);
//!     }
//!     Ok(())
//! }
//! ```

/// Built-in micro plan catalog
pub mod catalog;

/// Environment-driven application configuration
pub mod config;

/// Error types shared across the workspace
pub mod errors;

/// Logging configuration and subscriber setup
pub mod logging;

/// Storage ports and their in-memory and `SQLite` implementations
pub mod repositories;

/// Coach service combining storage with the suggestion engine
pub mod services;

pub use fitstreak_core::{constants, models};
