// ABOUTME: Workout category pre-filter applied upstream of all analytics stages
// ABOUTME: WorkoutFilter narrows the check-in log to one category or passes it through
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Streakmate contributors

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{Checkin, WorkoutType};

/// Narrows the check-in log to one workout category before any other
/// computation, so a selected category affects streaks, weekly goal,
/// totals, and chart data uniformly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutFilter {
    /// Keep every record
    #[default]
    #[serde(rename = "all")]
    All,
    /// Keep only records tagged with this category
    Only(WorkoutType),
}

impl WorkoutFilter {
    /// Apply the filter, borrowing matching records from the log
    #[must_use]
    pub fn apply<'a>(&self, checkins: &'a [Checkin]) -> Vec<&'a Checkin> {
        match self {
            Self::All => checkins.iter().collect(),
            Self::Only(category) => checkins
                .iter()
                .filter(|c| c.workout_type == Some(*category))
                .collect(),
        }
    }
}

impl Display for WorkoutFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::All => write!(f, "all"),
            Self::Only(category) => write!(f, "{category}"),
        }
    }
}

impl FromStr for WorkoutFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse::<WorkoutType>().map(Self::Only)
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;

    fn tagged(workout_type: Option<WorkoutType>) -> Checkin {
        Checkin {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            date: "2025-06-05".into(),
            duration_minutes: None,
            workout_type,
            notes: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_all_passes_everything_through() {
        let log = vec![tagged(Some(WorkoutType::Yoga)), tagged(None)];
        assert_eq!(WorkoutFilter::All.apply(&log).len(), 2);
    }

    #[test]
    fn test_category_filter_keeps_only_matches() {
        let log = vec![
            tagged(Some(WorkoutType::Running)),
            tagged(Some(WorkoutType::Yoga)),
            tagged(None),
        ];
        let kept = WorkoutFilter::Only(WorkoutType::Running).apply(&log);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].workout_type, Some(WorkoutType::Running));
    }

    #[test]
    fn test_untagged_records_never_match_a_category() {
        let log = vec![tagged(None)];
        assert!(WorkoutFilter::Only(WorkoutType::Other).apply(&log).is_empty());
    }

    #[test]
    fn test_parse_all_and_category() {
        assert_eq!("all".parse::<WorkoutFilter>().unwrap(), WorkoutFilter::All);
        assert_eq!(
            "Swimming".parse::<WorkoutFilter>().unwrap(),
            WorkoutFilter::Only(WorkoutType::Swimming)
        );
        assert!("Jogging".parse::<WorkoutFilter>().is_err());
    }
}
