// ABOUTME: Single-slot memoization of the last computed analytics result
// ABOUTME: Lets hosts recompute on every render without repeating identical work
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Streakmate contributors

use chrono::NaiveDate;
use tracing::debug;

use crate::intelligence::{ChartPoint, StatsEngine, TimeRange, UserStats, WorkoutFilter};
use crate::models::{Checkin, User};

/// The full derived view over one group's log: leaderboard plus chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupAnalytics {
    /// Per-user stats in leaderboard order
    pub leaderboard: Vec<UserStats>,
    /// Cumulative chart series, oldest point first
    pub chart: Vec<ChartPoint>,
}

/// Inputs the cached result was computed from
#[derive(Debug, Clone, PartialEq, Eq)]
struct CacheKey {
    users: Vec<User>,
    checkins: Vec<Checkin>,
    time_range: TimeRange,
    workout_filter: WorkoutFilter,
    today: NaiveDate,
}

impl CacheKey {
    fn matches(
        &self,
        users: &[User],
        checkins: &[Checkin],
        time_range: TimeRange,
        workout_filter: WorkoutFilter,
        today: NaiveDate,
    ) -> bool {
        self.time_range == time_range
            && self.workout_filter == workout_filter
            && self.today == today
            && self.users == users
            && self.checkins == checkins
    }
}

/// Memoizes the last computed [`GroupAnalytics`] keyed by deep equality
/// of the inputs.
///
/// The recomputation model is reactive: the host calls [`compute`]
/// whenever any tracked input may have changed (or simply on every
/// render) and gets the cached result back unless an input actually
/// differs. Inputs are treated as immutable snapshots per invocation.
///
/// [`compute`]: RecomputeCache::compute
#[derive(Debug, Default)]
pub struct RecomputeCache {
    engine: StatsEngine,
    slot: Option<(CacheKey, GroupAnalytics)>,
}

impl RecomputeCache {
    /// Create a cache wrapping the given engine
    #[must_use]
    pub const fn new(engine: StatsEngine) -> Self {
        Self { engine, slot: None }
    }

    /// Return the derived view for these inputs, recomputing only when
    /// they differ from the previous invocation
    pub fn compute(
        &mut self,
        users: &[User],
        checkins: &[Checkin],
        time_range: TimeRange,
        workout_filter: WorkoutFilter,
        today: NaiveDate,
    ) -> &GroupAnalytics {
        let stale = !self.slot.as_ref().is_some_and(|(key, _)| {
            key.matches(users, checkins, time_range, workout_filter, today)
        });
        if stale {
            self.slot = None;
        } else {
            debug!(range = %time_range, filter = %workout_filter, "analytics cache hit");
        }

        let engine = self.engine;
        let (_, analytics) = self.slot.get_or_insert_with(|| {
            debug!(range = %time_range, filter = %workout_filter, "analytics inputs changed, recomputing");
            let leaderboard =
                engine.compute_stats(users, checkins, time_range, workout_filter, today);
            let chart =
                engine.compute_chart_series(users, checkins, time_range, workout_filter, today);
            (
                CacheKey {
                    users: users.to_vec(),
                    checkins: checkins.to_vec(),
                    time_range,
                    workout_filter,
                    today,
                },
                GroupAnalytics { leaderboard, chart },
            )
        });
        analytics
    }

    /// Drop the cached result, forcing the next call to recompute
    pub fn invalidate(&mut self) {
        self.slot = None;
    }
}
