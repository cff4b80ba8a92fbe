// ABOUTME: Demo driver generating a synthetic group and printing its analytics
// ABOUTME: Seeds a deterministic check-in log, runs the engine, prints leaderboard and chart
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Streakmate contributors

//! Demo driver for the streakmate analytics engine.
//!
//! Generates a deterministic synthetic accountability group, runs the
//! engine over it, and prints the leaderboard and chart series.
//!
//! Usage:
//! ```bash
//! # Defaults: 4 members, 90 days of history, 30d range, no filter
//! cargo run --bin streakmate-demo
//!
//! # Narrow to one workout category over the last year
//! cargo run --bin streakmate-demo -- --range 1y --filter Running
//!
//! # Different synthetic history
//! cargo run --bin streakmate-demo -- --seed 42 --members 6
//! ```

use anyhow::Result;
use chrono::{Duration, Utc};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use uuid::Uuid;

use streakmate::intelligence::{StatsEngine, TimeRange, WorkoutFilter};
use streakmate::logging::LoggingConfig;
use streakmate::models::{Checkin, Group, User, WORKOUT_TYPES};
use streakmate::store::{GroupStore, InMemoryStore};

/// Names given to synthetic members, in join order
const DEMO_MEMBERS: [&str; 8] = [
    "Ada Lovelace",
    "Grace Hopper",
    "Alan Turing",
    "Katherine Johnson",
    "Edsger Dijkstra",
    "Barbara Liskov",
    "Donald Knuth",
    "Margaret Hamilton",
];

#[derive(Parser)]
#[command(
    name = "streakmate-demo",
    about = "Streakmate analytics demo",
    long_about = "Generate a synthetic accountability group and print its leaderboard and chart series"
)]
struct DemoArgs {
    /// Time range selector (7d, 30d, 90d, 1y)
    #[arg(long, default_value = "30d")]
    range: String,

    /// Workout filter ("all" or a category such as Running)
    #[arg(long, default_value = "all")]
    filter: String,

    /// Number of synthetic members (max 8)
    #[arg(long, default_value_t = 4)]
    members: usize,

    /// Days of synthetic history to generate
    #[arg(long, default_value_t = 120)]
    history_days: i64,

    /// RNG seed for reproducible demo data
    #[arg(long, default_value_t = 7)]
    seed: u64,
}

fn seed_store(args: &DemoArgs, rng: &mut StdRng) -> (Uuid, InMemoryStore) {
    let group = Group::new("Demo Crew", rng);
    info!(code = %group.code, "created demo group");

    let mut store = InMemoryStore::new();
    let members = args.members.min(DEMO_MEMBERS.len());
    let today = Utc::now().date_naive();

    for (index, name) in DEMO_MEMBERS.iter().take(members).enumerate() {
        let user = User::new(group.id, *name, index);
        // Each member gets their own consistency level so streaks differ
        let consistency = 0.3 + 0.6 * (index as f64 / members.max(1) as f64);
        for day in 0..args.history_days {
            if !rng.gen_bool(consistency) {
                continue;
            }
            let date = today - Duration::days(day);
            store.add_checkin(Checkin {
                id: Uuid::new_v4(),
                user_id: user.id,
                date: date.format("%Y-%m-%d").to_string(),
                duration_minutes: Some(rng.gen_range(20..90)),
                workout_type: Some(WORKOUT_TYPES[rng.gen_range(0..WORKOUT_TYPES.len())]),
                notes: None,
                created_at: Utc::now(),
            });
        }
        store.add_user(user);
    }

    (group.id, store)
}

fn main() -> Result<()> {
    LoggingConfig::from_env().init()?;
    let args = DemoArgs::parse();

    let range: TimeRange = args.range.parse()?;
    let filter: WorkoutFilter = args.filter.parse()?;

    let mut rng = StdRng::seed_from_u64(args.seed);
    let (group_id, store) = seed_store(&args, &mut rng);

    let users = store.users(group_id)?;
    let checkins = store.checkins(group_id)?;
    info!(
        members = users.len(),
        checkins = checkins.len(),
        "seeded demo data"
    );

    let engine = StatsEngine::default();
    let today = Utc::now().date_naive();
    let leaderboard = engine.compute_stats(&users, &checkins, range, filter, today);
    let chart = engine.compute_chart_series(&users, &checkins, range, filter, today);

    println!("\nLeaderboard ({range}, filter: {filter})");
    println!("{:-<72}", "");
    for (position, stats) in leaderboard.iter().enumerate() {
        let trophy = if position < 3 { "*" } else { " " };
        println!(
            "{trophy} {:>2}. {:<20} total {:>3}  streak {:>3} (best {:>3})  week {}/{}{}",
            position + 1,
            stats.user.name,
            stats.total_checkins,
            stats.current_streak,
            stats.longest_streak,
            stats.this_week,
            stats.weekly_goal,
            if stats.goal_met { "  goal met" } else { "" },
        );
    }

    println!("\nChart series ({} points)", chart.len());
    for point in &chart {
        let totals: Vec<String> = point
            .totals
            .iter()
            .map(|t| format!("{:>3}", t.total))
            .collect();
        println!("  {:>8} [{}]", point.label, totals.join(" "));
    }

    Ok(())
}
