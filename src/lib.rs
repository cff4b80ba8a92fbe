// ABOUTME: Library entry point for the streakmate check-in analytics engine
// ABOUTME: Derives streaks, weekly goals, and cumulative chart series from check-in logs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Streakmate contributors

#![deny(unsafe_code)]

//! # Streakmate
//!
//! Check-in analytics for small workout accountability groups. Members
//! log one workout check-in per calendar date; this crate turns that
//! append-only log into, per user, a running streak count, a weekly-goal
//! attainment flag, a range-bounded total, and a multi-resolution
//! cumulative time series for chart rendering.
//!
//! The engine is a stateless, synchronous transform: every computation
//! is a pure function of `(users, checkins, time_range, workout_filter,
//! today)` with `today` injected explicitly for testability. Persistence,
//! group membership flows, and presentation are external collaborators
//! reached only through the [`store::GroupStore`] boundary.
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use streakmate::intelligence::{StatsEngine, TimeRange, WorkoutFilter};
//!
//! let engine = StatsEngine::default();
//! let today = NaiveDate::from_ymd_opt(2025, 6, 5).unwrap();
//! let leaderboard =
//!     engine.compute_stats(&[], &[], TimeRange::ThirtyDays, WorkoutFilter::All, today);
//! assert!(leaderboard.is_empty());
//! ```

pub mod config;
pub mod constants;
pub mod errors;
pub mod intelligence;
pub mod logging;
pub mod models;
pub mod store;
