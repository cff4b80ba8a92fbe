// ABOUTME: Gap-tolerant streak detection over a user's distinct check-in dates
// ABOUTME: Current streak anchored at today with one-day grace, plus all-time longest run
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Streakmate contributors

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Current and longest consecutive-day streak for one user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakSummary {
    /// Run of days anchored at today, with a one-day grace for the most
    /// recent check-in (today or yesterday both keep the streak alive)
    pub current: u32,
    /// Longest run anywhere in the user's history, independent of recency
    pub longest: u32,
}

/// Compute both streaks from a user's distinct check-in dates.
///
/// Callers pass an already-deduplicated set; the engine never trusts the
/// store to enforce one-check-in-per-date.
///
/// The current streak walks dates newest-first from a cursor starting at
/// `today`: a date is accepted while the cursor is at most one day after
/// it, and any gap of two or more days stops counting. The same one-day
/// tolerance applies at every step of the chain, not only at the anchor.
/// Because of that grace, `longest >= current` does not hold in general
/// and is deliberately not enforced.
#[must_use]
pub fn calculate_streaks(dates: &BTreeSet<NaiveDate>, today: NaiveDate) -> StreakSummary {
    if dates.is_empty() {
        return StreakSummary::default();
    }

    let mut current = 0_u32;
    let mut cursor = today;
    for &date in dates.iter().rev() {
        if (cursor - date).num_days() <= 1 {
            current += 1;
            cursor = date;
        } else {
            break;
        }
    }

    let mut longest = 0_u32;
    let mut run = 0_u32;
    let mut prev: Option<NaiveDate> = None;
    for &date in dates {
        run = match prev {
            Some(p) if (date - p).num_days() <= 1 => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(date);
    }

    StreakSummary { current, longest }
}
