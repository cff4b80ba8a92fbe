// ABOUTME: Weekly goal evaluation over the ISO week containing today
// ABOUTME: Counts distinct check-in dates Monday through Sunday against a fixed goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Streakmate contributors

use std::collections::BTreeSet;

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// A user's progress against the weekly check-in goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyProgress {
    /// Distinct check-in dates inside the current Monday-Sunday week
    pub this_week: u32,
    /// The goal being measured against
    pub weekly_goal: u32,
    /// Whether `this_week >= weekly_goal`
    pub goal_met: bool,
}

/// Evaluate the weekly goal for the ISO week (Monday first) containing
/// `today`, counting distinct check-in dates in `[week_start, week_end]`
/// inclusive.
#[must_use]
pub fn evaluate_weekly_goal(
    dates: &BTreeSet<NaiveDate>,
    today: NaiveDate,
    weekly_goal: u32,
) -> WeeklyProgress {
    let week = today.week(Weekday::Mon);
    let this_week = dates.range(week.first_day()..=week.last_day()).count() as u32;

    WeeklyProgress {
        this_week,
        weekly_goal,
        goal_met: this_week >= weekly_goal,
    }
}
