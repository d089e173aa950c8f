// Rust guideline compliant 2026-08-18

//! Error handling for Souk application services.

use serde::Serialize;
use souk_core::Error as CoreError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for command and tool responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The requested entity was not found.
    NotFound,
    /// The provided identifier matched multiple entities.
    AmbiguousId,
    /// The requested status transition is invalid.
    InvalidTransition,
    /// Input validation failed.
    ValidationError,
    /// A cross-entity rule was violated.
    IntegrityError,
    /// The operation conflicts with existing market state.
    Conflict,
    /// Login credentials did not match a user.
    AuthFailed,
    /// IO failure while reading or writing market data.
    IoError,
    /// JSON serialization or parsing failed.
    JsonError,
    /// The market directory has not been initialized.
    MarketNotInitialized,
    /// The request included invalid inputs.
    InvalidInput,
    /// A fallback for unexpected errors.
    Unknown,
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Market directory is missing or not initialized.
    #[error("Souk market not initialized at {path}. Run 'souk init' first.")]
    MarketNotInitialized {
        /// Path where `.souk` was expected.
        path: PathBuf,
    },

    /// Login failed. The message never says which half was wrong.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// IO error not represented by core errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::MarketNotInitialized { .. } => ErrorCode::MarketNotInitialized,
            AppError::InvalidCredentials => ErrorCode::AuthFailed,
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::Core(core) => match core {
                CoreError::NotFound(_) => ErrorCode::NotFound,
                CoreError::AmbiguousId(_, _) => ErrorCode::AmbiguousId,
                CoreError::InvalidTransition(_) => ErrorCode::InvalidTransition,
                CoreError::InvalidField { .. } => ErrorCode::ValidationError,
                CoreError::DateOrder => ErrorCode::ValidationError,
                CoreError::StatusValue(_) => ErrorCode::ValidationError,
                CoreError::StatusType(_) => ErrorCode::ValidationError,
                CoreError::InvalidConfig(_) => ErrorCode::ValidationError,
                CoreError::UnknownId { .. } => ErrorCode::IntegrityError,
                CoreError::SameParty => ErrorCode::IntegrityError,
                CoreError::Conflict(_) => ErrorCode::Conflict,
                CoreError::InsufficientBalance => ErrorCode::Conflict,
                CoreError::BookingOverlap => ErrorCode::Conflict,
                CoreError::Io(_) => ErrorCode::IoError,
                CoreError::Json(_) => ErrorCode::JsonError,
            },
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::MarketNotInitialized { path } => Some(serde_json::json!({
                "path": path,
            })),
            AppError::InvalidCredentials => None,
            AppError::InvalidInput(_) => None,
            AppError::Io(_) => None,
            AppError::Core(core) => match core {
                CoreError::AmbiguousId(partial, matches) => Some(serde_json::json!({
                    "partial": partial,
                    "matches": matches,
                })),
                CoreError::UnknownId { role, id } => Some(serde_json::json!({
                    "role": role,
                    "id": id,
                })),
                _ => None,
            },
        }
    }
}
