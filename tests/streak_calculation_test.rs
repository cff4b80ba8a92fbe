// ABOUTME: Integration tests for streak semantics through the engine surface
// ABOUTME: Exercises the one-day grace, gap termination, and longest-run detection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Streakmate contributors

//! Streak behavior is specified down to the grace rule, so these tests
//! pin it through the public `compute_stats` surface rather than the
//! algorithm module alone.

use chrono::{Duration, NaiveDate, Utc};
use uuid::Uuid;

use streakmate::intelligence::{StatsEngine, TimeRange, WorkoutFilter};
use streakmate::models::{Checkin, User};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 5).unwrap()
}

fn stats_for_offsets(offsets: &[i64]) -> streakmate::intelligence::UserStats {
    let ada = User::new(Uuid::new_v4(), "Ada", 0);
    let log: Vec<Checkin> = offsets
        .iter()
        .map(|&o| Checkin {
            id: Uuid::new_v4(),
            user_id: ada.id,
            date: (today() - Duration::days(o)).format("%Y-%m-%d").to_string(),
            duration_minutes: None,
            workout_type: None,
            notes: None,
            created_at: Utc::now(),
        })
        .collect();

    let engine = StatsEngine::default();
    engine
        .compute_stats(&[ada], &log, TimeRange::OneYear, WorkoutFilter::All, today())
        .remove(0)
}

#[test]
fn test_single_checkin_today_starts_a_streak() {
    let stats = stats_for_offsets(&[0]);
    assert_eq!(stats.current_streak, 1);
    assert_eq!(stats.longest_streak, 1);
}

#[test]
fn test_yesterday_only_still_counts_via_grace() {
    let stats = stats_for_offsets(&[1]);
    assert_eq!(stats.current_streak, 1);
}

#[test]
fn test_two_day_old_checkin_does_not_count() {
    let stats = stats_for_offsets(&[2]);
    assert_eq!(stats.current_streak, 0);
    assert_eq!(stats.longest_streak, 1);
}

#[test]
fn test_three_consecutive_days() {
    let stats = stats_for_offsets(&[0, 1, 2]);
    assert_eq!(stats.current_streak, 3);
    assert!(stats.longest_streak >= 3);
}

#[test]
fn test_two_or_more_day_gap_terminates_current_chain() {
    // today and yesterday chain; the 3-day gap to offset 4 stops counting
    // even though four consecutive days follow it
    let stats = stats_for_offsets(&[0, 1, 4, 5, 6, 7]);
    assert_eq!(stats.current_streak, 2);
    assert_eq!(stats.longest_streak, 4);
}

#[test]
fn test_isolated_checkins_give_longest_one() {
    let stats = stats_for_offsets(&[5, 9, 13]);
    assert_eq!(stats.current_streak, 0);
    assert_eq!(stats.longest_streak, 1);
}

#[test]
fn test_longest_streak_ignores_recency() {
    // a 5-day run three months ago beats the 2-day run ending today
    let old_run: Vec<i64> = (90..95).collect();
    let mut offsets = vec![0, 1];
    offsets.extend(old_run);
    let stats = stats_for_offsets(&offsets);
    assert_eq!(stats.current_streak, 2);
    assert_eq!(stats.longest_streak, 5);
}
