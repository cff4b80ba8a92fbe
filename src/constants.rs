// ABOUTME: System-wide constants for the streakmate analytics engine
// ABOUTME: Engine defaults, display palette, and environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Streakmate contributors

//! # Constants Module
//!
//! Hardcoded defaults and environment variable names used across the crate.

/// Engine defaults
pub mod defaults {
    /// Check-ins per ISO week required for the weekly goal
    pub const WEEKLY_GOAL: u32 = 4;

    /// Length of a generated group join code
    pub const GROUP_CODE_LENGTH: usize = 6;

    /// Alphabet for group join codes. Excludes 0/O/1/I/L to keep codes
    /// unambiguous when read aloud or written down.
    pub const GROUP_CODE_ALPHABET: &[u8] = b"ABCDEFGHJKMNPQRSTUVWXYZ23456789";
}

/// Display attributes assigned to users at creation time
pub mod display {
    /// Palette cycled through when assigning member colors
    pub const USER_COLORS: [&str; 10] = [
        "#10b981", // emerald
        "#6366f1", // indigo
        "#f59e0b", // amber
        "#ec4899", // pink
        "#8b5cf6", // violet
        "#14b8a6", // teal
        "#f97316", // orange
        "#06b6d4", // cyan
        "#84cc16", // lime
        "#e11d48", // rose
    ];
}

/// Environment variable names recognized by configuration loading
pub mod env_vars {
    /// Overrides the weekly check-in goal (positive integer)
    pub const WEEKLY_GOAL: &str = "STREAKMATE_WEEKLY_GOAL";

    /// Log level directive, standard tracing syntax
    pub const RUST_LOG: &str = "RUST_LOG";

    /// Log output format: json, pretty, or compact
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
}
