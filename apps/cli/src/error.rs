//! # App Error Type
//!
//! Unified error type for page handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in bizledger                              │
//! │                                                                         │
//! │  Handler                                                               │
//! │  Result<Response, AppError>                                            │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Validation? ──── ServiceError::Validation ───────────┐                │
//! │         │                                             │                │
//! │         ▼                                             ▼                │
//! │  Store rejected? ── ServiceError::ConstraintViolation ── AppError       │
//! │         │                                             │                │
//! │         ▼                                             ▼                │
//! │  Submission errors → Feedback::Error (inline, process keeps running)  │
//! │  Page load errors  → Err(AppError) (printed, exit code 1)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Includes both a machine-readable `code` and human-readable `message`,
//! so `--json` output can be consumed by scripts.

use serde::Serialize;
use thiserror::Error;

use bizledger_core::ExportError;
use bizledger_db::{DbError, ServiceError};

/// Error returned from handlers and shown to the user.
///
/// ## Serialization
/// ```json
/// {
///   "code": "CONSTRAINT_VIOLATION",
///   "message": "CHECK constraint failed: price >= 0"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("{message}")]
pub struct AppError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Form input rejected before storage
    ValidationError,

    /// Store rejected the row
    ConstraintViolation,

    /// Database operation failed
    DatabaseError,

    /// CSV encoding or file writing failed
    ExportError,

    /// Bad command line / configuration value
    InvalidInput,

    /// Internal error
    Internal,
}

impl AppError {
    /// Creates a new app error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::InvalidInput, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::Internal, message)
    }
}

/// Converts database errors to app errors.
impl From<DbError> for AppError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::ConstraintViolation { message } => {
                AppError::new(ErrorCode::ConstraintViolation, message)
            }
            DbError::ConnectionFailed(e) => {
                tracing::error!("Database connection failed: {}", e);
                AppError::new(ErrorCode::DatabaseError, "Database connection failed")
            }
            DbError::SchemaFailed(e) => {
                tracing::error!("Schema initialization failed: {}", e);
                AppError::new(ErrorCode::DatabaseError, "Database initialization failed")
            }
            DbError::QueryFailed(e) => {
                // Log the actual error but return a generic message
                tracing::error!("Database query failed: {}", e);
                AppError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
            DbError::PoolExhausted => {
                AppError::new(ErrorCode::DatabaseError, "Database is busy")
            }
            DbError::Internal(e) => {
                tracing::error!("Internal database error: {}", e);
                AppError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
        }
    }
}

/// Converts service errors to app errors.
impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(e) => AppError::validation(e.to_string()),
            ServiceError::ConstraintViolation(message) => {
                AppError::new(ErrorCode::ConstraintViolation, message)
            }
            ServiceError::Database(e) => AppError::from(e),
        }
    }
}

impl From<ExportError> for AppError {
    fn from(err: ExportError) -> Self {
        AppError::new(ErrorCode::ExportError, err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::new(ErrorCode::ExportError, err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::internal(err.to_string())
    }
}

/// Result type for handlers.
pub type AppResult<T> = Result<T, AppError>;
