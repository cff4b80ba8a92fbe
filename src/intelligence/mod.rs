// ABOUTME: Analytics engine deriving streaks, weekly goals, totals, and chart series
// ABOUTME: StatsEngine is the pure, deterministic entry point over store-owned collections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Streakmate contributors

//! # Intelligence Module
//!
//! The analytics engine. Given externally-owned `(users, checkins)`
//! collections, a time range, a workout filter, and an injected `today`,
//! it derives per-user statistics and a cumulative chart series. Every
//! stage is a pure function: no I/O, no clock reads, no randomness, so
//! identical inputs always produce identical output.
//!
//! Pipeline, leaves first: time range resolution, workout pre-filtering,
//! per-user date deduplication, streak detection, weekly goal evaluation,
//! time-series bucketing, and leaderboard ranking.

pub mod filter;
pub mod ranking;
pub mod recompute_cache;
pub mod streaks;
pub mod time_range;
pub mod time_series;
pub mod weekly_goal;

use std::collections::{BTreeSet, HashMap};

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::config::EngineConfig;
use crate::models::{Checkin, User};

pub use filter::WorkoutFilter;
pub use ranking::rank_leaderboard;
pub use recompute_cache::{GroupAnalytics, RecomputeCache};
pub use streaks::{calculate_streaks, StreakSummary};
pub use time_range::TimeRange;
pub use time_series::{aggregate_series, ChartPoint, UserTotal};
pub use weekly_goal::{evaluate_weekly_goal, WeeklyProgress};

/// Derived statistics for one user, recomputed wholesale on every input
/// change and never persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    /// The user these stats describe
    pub user: User,
    /// Distinct check-in dates inside the selected lookback window
    pub total_checkins: u32,
    /// Consecutive-day streak anchored at today (one-day grace)
    pub current_streak: u32,
    /// Longest consecutive-day streak anywhere in history
    pub longest_streak: u32,
    /// Distinct check-in dates in the current Monday-Sunday week
    pub this_week: u32,
    /// Weekly goal in effect
    pub weekly_goal: u32,
    /// Whether the weekly goal is met
    pub goal_met: bool,
}

/// The stats engine: a stateless transform configured once
#[derive(Debug, Clone, Copy, Default)]
pub struct StatsEngine {
    config: EngineConfig,
}

impl StatsEngine {
    /// Create an engine with the given configuration
    #[must_use]
    pub const fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// The configuration this engine was built with
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compute per-user statistics in leaderboard order.
    ///
    /// Streaks and the weekly goal consider the user's whole (filtered)
    /// history; only `total_checkins` is bounded by the time range.
    #[must_use]
    pub fn compute_stats(
        &self,
        users: &[User],
        checkins: &[Checkin],
        time_range: TimeRange,
        workout_filter: WorkoutFilter,
        today: NaiveDate,
    ) -> Vec<UserStats> {
        let filtered = workout_filter.apply(checkins);
        let dates_by_user = distinct_dates_by_user(&filtered);
        let window_start = today - Duration::days(time_range.lookback_days());
        let empty = BTreeSet::new();

        let mut stats: Vec<UserStats> = users
            .iter()
            .map(|user| {
                let dates = dates_by_user.get(&user.id).unwrap_or(&empty);
                let total_checkins = dates.range(window_start..=today).count() as u32;
                let streaks = calculate_streaks(dates, today);
                let weekly = evaluate_weekly_goal(dates, today, self.config.weekly_goal);

                UserStats {
                    user: user.clone(),
                    total_checkins,
                    current_streak: streaks.current,
                    longest_streak: streaks.longest,
                    this_week: weekly.this_week,
                    weekly_goal: weekly.weekly_goal,
                    goal_met: weekly.goal_met,
                }
            })
            .collect();

        rank_leaderboard(&mut stats);
        stats
    }

    /// Compute the cumulative chart series, oldest point first.
    #[must_use]
    pub fn compute_chart_series(
        &self,
        users: &[User],
        checkins: &[Checkin],
        time_range: TimeRange,
        workout_filter: WorkoutFilter,
        today: NaiveDate,
    ) -> Vec<ChartPoint> {
        let filtered = workout_filter.apply(checkins);
        let dates_by_user = distinct_dates_by_user(&filtered);
        aggregate_series(users, &dates_by_user, time_range, today)
    }
}

/// Collapse the filtered log into distinct check-in dates per user.
///
/// Duplicate `(user, date)` pairs are a writer defect the engine absorbs
/// silently; unparsable dates are excluded from every aggregate with a
/// logged diagnostic.
fn distinct_dates_by_user(checkins: &[&Checkin]) -> HashMap<Uuid, BTreeSet<NaiveDate>> {
    let mut dates_by_user: HashMap<Uuid, BTreeSet<NaiveDate>> = HashMap::new();
    for checkin in checkins {
        match checkin.parsed_date() {
            Some(date) => {
                dates_by_user.entry(checkin.user_id).or_default().insert(date);
            }
            None => warn!(
                checkin_id = %checkin.id,
                user_id = %checkin.user_id,
                date = %checkin.date,
                "skipping check-in with unparsable date"
            ),
        }
    }
    dates_by_user
}
