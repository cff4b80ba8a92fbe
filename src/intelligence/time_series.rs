// ABOUTME: Multi-resolution cumulative time series for chart rendering
// ABOUTME: Buckets the filtered log by range resolution with running per-user totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Streakmate contributors

use std::collections::{BTreeSet, HashMap};

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::intelligence::time_range::TimeRange;
use crate::models::User;

/// One user's running total at a chart point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserTotal {
    /// Stable user identifier; display names resolve at presentation time
    pub user_id: Uuid,
    /// Distinct check-in dates from the window start up to this point
    pub total: u32,
}

/// One chart point, carrying its own date for downstream joins
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Axis label derived from the point's date per the range resolution
    pub label: String,
    /// Calendar date of this point
    pub date: NaiveDate,
    /// Running totals, one entry per user in input order
    pub totals: Vec<UserTotal>,
}

/// Build the cumulative chart series for the resolved lookback window,
/// oldest point first.
///
/// Step points sit at `today - i` days for `i` stepping down from the
/// window length toward zero by the range's step size. Each value is the
/// cumulative count of distinct check-in dates in `[window_start, point]`
/// (a growth curve, not per-bucket activity), so values are non-decreasing
/// across consecutive points. Dates outside `[window_start, today]`,
/// future-dated records included, never contribute.
#[must_use]
pub fn aggregate_series(
    users: &[User],
    dates_by_user: &HashMap<Uuid, BTreeSet<NaiveDate>>,
    range: TimeRange,
    today: NaiveDate,
) -> Vec<ChartPoint> {
    let window = range.lookback_days();
    let step = range.step_days();
    let window_start = today - Duration::days(window);

    let mut points = Vec::with_capacity((window / step + 1) as usize);
    let mut i = window;
    while i >= 0 {
        let date = today - Duration::days(i);
        let totals = users
            .iter()
            .map(|user| UserTotal {
                user_id: user.id,
                total: dates_by_user.get(&user.id).map_or(0, |dates| {
                    dates.range(window_start..=date).count() as u32
                }),
            })
            .collect();
        points.push(ChartPoint {
            label: range.label_for(date),
            date,
            totals,
        });
        i -= step;
    }

    points
}
