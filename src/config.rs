// ABOUTME: Engine configuration with environment variable loading
// ABOUTME: EngineConfig controls the weekly check-in goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Streakmate contributors

//! Engine configuration.
//!
//! The analytics engine has a single tunable: the weekly check-in goal.
//! Everything else (time ranges, bucket resolutions, streak rules) is fixed
//! behavior, not configuration.

use std::env;

use serde::{Deserialize, Serialize};

use crate::constants::{defaults, env_vars};
use crate::errors::{AppError, AppResult};

/// Configuration for the stats engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Check-ins per ISO week required to mark the weekly goal as met
    pub weekly_goal: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weekly_goal: defaults::WEEKLY_GOAL,
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `STREAKMATE_WEEKLY_GOAL` is set but
    /// is not a positive integer.
    pub fn from_env() -> AppResult<Self> {
        let weekly_goal = match env::var(env_vars::WEEKLY_GOAL) {
            Ok(raw) => {
                let parsed: u32 = raw.parse().map_err(|e| {
                    AppError::config(format!(
                        "{} must be a positive integer, got {raw:?}",
                        env_vars::WEEKLY_GOAL
                    ))
                    .with_source(e)
                })?;
                if parsed == 0 {
                    return Err(AppError::config(format!(
                        "{} must be at least 1",
                        env_vars::WEEKLY_GOAL
                    )));
                }
                parsed
            }
            Err(_) => defaults::WEEKLY_GOAL,
        };

        Ok(Self { weekly_goal })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weekly_goal() {
        assert_eq!(EngineConfig::default().weekly_goal, 4);
    }
}
