// ABOUTME: Core types and constants for the FitStreak workout coach
// ABOUTME: Foundation crate with error handling, workout models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `FitStreak` Core
//!
//! Foundation crate providing shared types and constants for the `FitStreak`
//! workout coach. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Workout, pain tracking and service constants
//! - **models**: Micro plans, adherence stats, pain reports, sessions, body metrics

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`MicroPlan`, `AdherenceStats`, `PainReport`, etc.)
pub mod models;
