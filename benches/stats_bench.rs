// ABOUTME: Criterion benchmarks for the analytics engine
// ABOUTME: Measures stats and chart-series computation over generated check-in logs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Streakmate contributors

//! Criterion benchmarks for the streakmate analytics engine.
//!
//! Measures leaderboard and chart-series computation across log sizes,
//! ranges, and filters.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]
#![allow(clippy::cast_possible_wrap)]

use chrono::{Duration, NaiveDate, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use uuid::Uuid;

use streakmate::intelligence::{StatsEngine, TimeRange, WorkoutFilter};
use streakmate::models::{Checkin, User, WorkoutType, WORKOUT_TYPES};

const MEMBER_COUNT: usize = 8;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 5).unwrap()
}

/// Generate a synthetic group with `checkins_per_user` records spread over
/// the past two years, deterministic without pulling in an RNG
fn generate_group(checkins_per_user: usize) -> (Vec<User>, Vec<Checkin>) {
    let group_id = Uuid::new_v4();
    let users: Vec<User> = (0..MEMBER_COUNT)
        .map(|i| User::new(group_id, format!("Member {i}"), i))
        .collect();

    let mut checkins = Vec::with_capacity(MEMBER_COUNT * checkins_per_user);
    for (member_index, user) in users.iter().enumerate() {
        for n in 0..checkins_per_user {
            let offset = ((n * (member_index + 2) * 13) % 730) as i64;
            let date = today() - Duration::days(offset);
            checkins.push(Checkin {
                id: Uuid::new_v4(),
                user_id: user.id,
                date: date.format("%Y-%m-%d").to_string(),
                duration_minutes: Some(30 + (n % 60) as u32),
                workout_type: Some(WORKOUT_TYPES[n % WORKOUT_TYPES.len()]),
                notes: None,
                created_at: Utc::now(),
            });
        }
    }
    (users, checkins)
}

fn bench_compute_stats(c: &mut Criterion) {
    let engine = StatsEngine::default();
    let mut group = c.benchmark_group("compute_stats");

    for &checkins_per_user in &[50_usize, 250, 1000] {
        let (users, checkins) = generate_group(checkins_per_user);
        group.throughput(Throughput::Elements(checkins.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(checkins.len()),
            &checkins,
            |b, log| {
                b.iter(|| {
                    engine.compute_stats(
                        black_box(&users),
                        black_box(log),
                        TimeRange::ThirtyDays,
                        WorkoutFilter::All,
                        today(),
                    )
                });
            },
        );
    }
    group.finish();
}

fn bench_chart_series_by_range(c: &mut Criterion) {
    let engine = StatsEngine::default();
    let (users, checkins) = generate_group(500);
    let mut group = c.benchmark_group("chart_series");

    for range in [
        TimeRange::SevenDays,
        TimeRange::ThirtyDays,
        TimeRange::NinetyDays,
        TimeRange::OneYear,
    ] {
        group.bench_with_input(
            BenchmarkId::from_parameter(range.as_str()),
            &range,
            |b, &range| {
                b.iter(|| {
                    engine.compute_chart_series(
                        black_box(&users),
                        black_box(&checkins),
                        range,
                        WorkoutFilter::All,
                        today(),
                    )
                });
            },
        );
    }
    group.finish();
}

fn bench_filtered_stats(c: &mut Criterion) {
    let engine = StatsEngine::default();
    let (users, checkins) = generate_group(500);

    c.bench_function("compute_stats_filtered", |b| {
        b.iter(|| {
            engine.compute_stats(
                black_box(&users),
                black_box(&checkins),
                TimeRange::NinetyDays,
                WorkoutFilter::Only(WorkoutType::Running),
                today(),
            )
        });
    });
}

criterion_group!(
    benches,
    bench_compute_stats,
    bench_chart_series_by_range,
    bench_filtered_stats
);
criterion_main!(benches);
