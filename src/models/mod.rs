// ABOUTME: Domain models for groups, members, and check-in records
// ABOUTME: Wire-faithful types owned by the external store, consumed by the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Streakmate contributors

//! # Models Module
//!
//! Data structures shared between the external store and the analytics
//! engine. [`Group`], [`User`], and [`Checkin`] mirror the store's rows;
//! the derived [`UserStats`](crate::intelligence::UserStats) and
//! [`ChartPoint`](crate::intelligence::ChartPoint) types live with the
//! engine that produces them.

mod checkin;
mod user;

pub use checkin::{Checkin, WorkoutType, WORKOUT_TYPES};
pub use user::{color_for_index, initials_for, Group, User};
