// ABOUTME: Leaderboard ordering of per-user stats
// ABOUTME: Stable sort by range-bounded total, ties keep input order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Streakmate contributors

use crate::intelligence::UserStats;

/// Order stats into leaderboard position: `total_checkins` descending,
/// ties keeping the relative order of the input list. Position in the
/// returned sequence is the 1-indexed rank; any podium treatment of the
/// top entries belongs to the caller.
pub fn rank_leaderboard(stats: &mut [UserStats]) {
    // slice::sort_by is stable, which the tie rule depends on
    stats.sort_by(|a, b| b.total_checkins.cmp(&a.total_checkins));
}
