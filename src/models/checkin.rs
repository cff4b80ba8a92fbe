// ABOUTME: Check-in record model and workout category enumeration
// ABOUTME: Wire-faithful check-in type with lenient calendar date parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Streakmate contributors

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;

/// Enumeration of workout categories a check-in can be tagged with
///
/// Closed set: the write path offers exactly these categories, with
/// `Other` as the catch-all.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum WorkoutType {
    /// Weight/strength training
    Strength,
    /// Steady-state cardio
    Cardio,
    /// High-intensity interval training
    #[serde(rename = "HIIT")]
    Hiit,
    /// Yoga practice
    Yoga,
    /// `CrossFit` workout
    CrossFit,
    /// Swimming
    Swimming,
    /// Running
    Running,
    /// Cycling
    Cycling,
    /// Team or racquet sports
    Sports,
    /// Anything else
    Other,
}

/// All workout categories, in the order the write path presents them
pub const WORKOUT_TYPES: [WorkoutType; 10] = [
    WorkoutType::Strength,
    WorkoutType::Cardio,
    WorkoutType::Hiit,
    WorkoutType::Yoga,
    WorkoutType::CrossFit,
    WorkoutType::Swimming,
    WorkoutType::Running,
    WorkoutType::Cycling,
    WorkoutType::Sports,
    WorkoutType::Other,
];

impl WorkoutType {
    /// Canonical string form, matching the stored representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Cardio => "Cardio",
            Self::Hiit => "HIIT",
            Self::Yoga => "Yoga",
            Self::CrossFit => "CrossFit",
            Self::Swimming => "Swimming",
            Self::Running => "Running",
            Self::Cycling => "Cycling",
            Self::Sports => "Sports",
            Self::Other => "Other",
        }
    }
}

impl Display for WorkoutType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WorkoutType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WORKOUT_TYPES
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| AppError::invalid_input(format!("unknown workout type: {s}")))
    }
}

/// A record asserting a user performed a workout on a calendar date
///
/// Immutable once constructed; created by the external write path and
/// never mutated by the engine. The upstream writer is expected to keep
/// at most one record per `(user_id, date)` pair, but the engine
/// deduplicates defensively rather than relying on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkin {
    /// Unique record identifier
    pub id: Uuid,
    /// Member this check-in belongs to
    pub user_id: Uuid,
    /// Calendar date of the workout, ISO `yyyy-mm-dd`, no time component.
    /// Kept as the store's string form; see [`Checkin::parsed_date`].
    pub date: String,
    /// Optional workout duration
    pub duration_minutes: Option<u32>,
    /// Optional workout category tag
    pub workout_type: Option<WorkoutType>,
    /// Optional free-form notes
    pub notes: Option<String>,
    /// When the record was written
    pub created_at: DateTime<Utc>,
}

impl Checkin {
    /// Parse the calendar date, returning `None` for malformed strings.
    ///
    /// A malformed date is a defect in the upstream writer; callers
    /// exclude such records from every aggregate and log a diagnostic
    /// rather than failing.
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}
