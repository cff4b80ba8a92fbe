// ABOUTME: Unified error handling for the streakmate analytics engine
// ABOUTME: ErrorCode taxonomy, AppError type, and constructor helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Streakmate contributors

//! # Unified Error Handling
//!
//! Centralized error types for the crate. Configuration mistakes (unknown
//! time-range selector, unknown workout category, bad environment values)
//! fail fast with an [`AppError`]; data-quality anomalies in the check-in
//! log are handled inside the engine and never surface as errors.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes used throughout the crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// The provided input is invalid
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// The data format is invalid
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,

    // Configuration (6000-6999)
    /// Configuration error encountered
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,
    /// Configuration is invalid
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// An internal error occurred
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::InvalidFormat => "The data format is invalid",
            Self::ConfigError => "Configuration error encountered",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput => write!(f, "INVALID_INPUT"),
            Self::InvalidFormat => write!(f, "INVALID_FORMAT"),
            Self::ConfigError => write!(f, "CONFIG_ERROR"),
            Self::ConfigInvalid => write!(f, "CONFIG_INVALID"),
            Self::InternalError => write!(f, "INTERNAL_ERROR"),
        }
    }
}

/// Unified error type for the crate
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl AppError {
    /// Create a new error with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Attach a source error for chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Create an invalid input error
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Create an invalid format error
    #[must_use]
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Create an internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

/// Result type alias using [`AppError`]
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_code_and_message() {
        let err = AppError::invalid_input("unknown time range: 2w");
        assert_eq!(err.to_string(), "[INVALID_INPUT] unknown time range: 2w");
    }

    #[test]
    fn test_error_code_descriptions_are_nonempty() {
        let codes = [
            ErrorCode::InvalidInput,
            ErrorCode::InvalidFormat,
            ErrorCode::ConfigError,
            ErrorCode::ConfigInvalid,
            ErrorCode::InternalError,
        ];
        for code in codes {
            assert!(!code.description().is_empty());
        }
    }

    #[test]
    fn test_error_source_chaining() {
        let parse_err = "x".parse::<u32>().unwrap_err();
        let err = AppError::config("STREAKMATE_WEEKLY_GOAL must be a number").with_source(parse_err);
        assert!(std::error::Error::source(&err).is_some());
    }
}
