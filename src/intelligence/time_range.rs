// ABOUTME: Time range selectors and their lookback/resolution table
// ABOUTME: Maps 7d/30d/90d/1y selectors to window length, step size, and label format
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Streakmate contributors

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// A lookback window selector for totals and chart series
///
/// Each range also fixes the chart resolution: the step between chart
/// points and the label format, chosen to keep point counts bounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeRange {
    /// Last 7 days, daily points, weekday labels
    #[serde(rename = "7d")]
    SevenDays,
    /// Last 30 days, daily points, month-day labels
    #[serde(rename = "30d")]
    ThirtyDays,
    /// Last 90 days, weekly points, month-day labels
    #[serde(rename = "90d")]
    NinetyDays,
    /// Last 365 days, biweekly points, month labels
    #[serde(rename = "1y")]
    OneYear,
}

impl TimeRange {
    /// Inclusive lookback window length in days
    #[must_use]
    pub const fn lookback_days(&self) -> i64 {
        match self {
            Self::SevenDays => 7,
            Self::ThirtyDays => 30,
            Self::NinetyDays => 90,
            Self::OneYear => 365,
        }
    }

    /// Days between consecutive chart points
    #[must_use]
    pub const fn step_days(&self) -> i64 {
        match self {
            Self::SevenDays | Self::ThirtyDays => 1,
            Self::NinetyDays => 7,
            Self::OneYear => 14,
        }
    }

    /// Selector string as used at API boundaries
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SevenDays => "7d",
            Self::ThirtyDays => "30d",
            Self::NinetyDays => "90d",
            Self::OneYear => "1y",
        }
    }

    /// Chart label for a point at `date` under this range's resolution
    #[must_use]
    pub fn label_for(&self, date: NaiveDate) -> String {
        match self {
            Self::SevenDays => date.format("%a").to_string(),
            Self::ThirtyDays | Self::NinetyDays => date.format("%b %-d").to_string(),
            Self::OneYear => date.format("%b").to_string(),
        }
    }
}

impl Display for TimeRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TimeRange {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "7d" => Ok(Self::SevenDays),
            "30d" => Ok(Self::ThirtyDays),
            "90d" => Ok(Self::NinetyDays),
            "1y" => Ok(Self::OneYear),
            _ => Err(AppError::invalid_input(format!(
                "unknown time range: {s} (expected 7d, 30d, 90d, or 1y)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookback_days_table() {
        assert_eq!(TimeRange::SevenDays.lookback_days(), 7);
        assert_eq!(TimeRange::ThirtyDays.lookback_days(), 30);
        assert_eq!(TimeRange::NinetyDays.lookback_days(), 90);
        assert_eq!(TimeRange::OneYear.lookback_days(), 365);
    }

    #[test]
    fn test_step_days_table() {
        assert_eq!(TimeRange::SevenDays.step_days(), 1);
        assert_eq!(TimeRange::ThirtyDays.step_days(), 1);
        assert_eq!(TimeRange::NinetyDays.step_days(), 7);
        assert_eq!(TimeRange::OneYear.step_days(), 14);
    }

    #[test]
    fn test_selector_round_trip() {
        for range in [
            TimeRange::SevenDays,
            TimeRange::ThirtyDays,
            TimeRange::NinetyDays,
            TimeRange::OneYear,
        ] {
            assert_eq!(range.as_str().parse::<TimeRange>().unwrap(), range);
        }
    }

    #[test]
    fn test_unknown_selector_fails_fast() {
        let err = "2w".parse::<TimeRange>().unwrap_err();
        assert!(err.to_string().contains("unknown time range"));
    }

    #[test]
    fn test_labels_per_resolution() {
        // 2025-06-05 was a Thursday
        let date = NaiveDate::from_ymd_opt(2025, 6, 5).unwrap();
        assert_eq!(TimeRange::SevenDays.label_for(date), "Thu");
        assert_eq!(TimeRange::ThirtyDays.label_for(date), "Jun 5");
        assert_eq!(TimeRange::NinetyDays.label_for(date), "Jun 5");
        assert_eq!(TimeRange::OneYear.label_for(date), "Jun");
    }
}
