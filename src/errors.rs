// ABOUTME: Unified error handling with standard error codes for the planning engine
// ABOUTME: Defines AppError, ErrorCode, and the AppResult alias used across all modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Unified Error Handling System
//!
//! Centralized error types for the menu planning engine. Expected absences
//! (unknown recipe ids) are modeled as `Option`, never as errors; `AppError`
//! covers the fatal conditions that abort plan construction.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Input validation failure
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    /// A lookup target does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound,
    /// A required recipe category has zero eligible candidates
    #[serde(rename = "CATALOG_INSUFFICIENT")]
    CatalogInsufficient,
    /// A constructed weekly menu does not have exactly five days
    #[serde(rename = "INVALID_MENU_SHAPE")]
    InvalidMenuShape,
    /// Configuration error
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError,
    /// Internal error
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::CatalogInsufficient => {
                "The recipe catalog cannot supply a required category for planning"
            }
            Self::InvalidMenuShape => "A weekly menu must contain exactly five days",
            Self::ConfigError => "Configuration error encountered",
            Self::InternalError => "An internal error occurred",
        }
    }
}

/// Unified error type for the engine
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

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Resource not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// A required category has no eligible candidates
    pub fn catalog_insufficient(category: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::CatalogInsufficient,
            format!(
                "No eligible candidates in required category: {}",
                category.into()
            ),
        )
    }

    /// Weekly menu shape invariant violation
    #[must_use]
    pub fn invalid_menu_shape(day_count: usize) -> Self {
        Self::new(
            ErrorCode::InvalidMenuShape,
            format!("Weekly menu requires exactly 5 days, got {day_count}"),
        )
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Conversion from `anyhow::Error` to `AppError`
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::new(ErrorCode::InternalError, error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::CatalogInsufficient).unwrap();
        assert_eq!(json, "\"CATALOG_INSUFFICIENT\"");
    }

    #[test]
    fn test_catalog_insufficient_message() {
        let error = AppError::catalog_insufficient("soups and stews");
        assert_eq!(error.code, ErrorCode::CatalogInsufficient);
        assert!(error.message.contains("soups and stews"));
    }

    #[test]
    fn test_invalid_menu_shape_message() {
        let error = AppError::invalid_menu_shape(3);
        assert_eq!(error.code, ErrorCode::InvalidMenuShape);
        assert!(error.to_string().contains("got 3"));
    }
}
