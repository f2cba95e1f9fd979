// ABOUTME: Re-exports the unified error types from fitstreak-core
// ABOUTME: Lets binaries and tests use fitstreak::errors without depending on the core crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! All fallible operations in the coach return [`AppResult`]. See
//! [`ErrorCode`] for the numeric ranges and HTTP status mapping.

pub use fitstreak_core::errors::{AppError, AppResult, ErrorCode, ErrorResponse};
