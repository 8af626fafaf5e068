//! Application-wide error types.

use thiserror::Error;

/// Message shown for failures whose detail stays in the logs.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A required subsystem is not ready yet (e.g. the document renderer).
    #[error("Unavailable: {0}")]
    Unavailable(String),

    /// An operation failed; the message is already worded for the user.
    #[error("Operation failed: {0}")]
    Failed(String),

    /// Internal server error; the detail is never shown to the user.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::Validation(_) => 400,
            Self::Unavailable(_) => 503,
            Self::Failed(_) | Self::Internal(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Unavailable(_) => "UNAVAILABLE",
            Self::Failed(_) => "OPERATION_FAILED",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Message safe to show to the end user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound(msg)
            | Self::Validation(msg)
            | Self::Unavailable(msg)
            | Self::Failed(msg) => msg.clone(),
            Self::Internal(_) => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}
