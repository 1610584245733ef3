//! # Database Error Types
//!
//! Error types for database operations and the Record Service.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError ← Adds categorization (CHECK / NOT NULL → ConstraintViolation)│
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ServiceError ← Joins with ValidationError from bizledger-core         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AppError (in app) ← Serialized inline message                         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use bizledger_core::ValidationError;
use sqlx::error::ErrorKind;
use thiserror::Error;

/// Database operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// A column constraint rejected the write.
    ///
    /// ## When This Occurs
    /// - `price < 0`
    /// - `quantity <= 0`
    /// - `status` outside Pending / Completed
    /// - A NULL in a NOT NULL column
    ///
    /// The statement is atomic: nothing was written.
    #[error("Constraint violation: {message}")]
    ConstraintViolation { message: String },

    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Database file doesn't exist and can't be created
    /// - File permissions issue
    /// - Disk full
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Creating the tables failed.
    #[error("Schema initialization failed: {0}")]
    SchemaFailed(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// The single connection could not be acquired in time.
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a ConstraintViolation error.
    pub fn constraint(message: impl Into<String>) -> Self {
        DbError::ConstraintViolation {
            message: message.into(),
        }
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database (CHECK / NOT NULL) → DbError::ConstraintViolation
/// sqlx::Error::Database (other)            → DbError::QueryFailed
/// sqlx::Error::PoolTimedOut                → DbError::PoolExhausted
/// Other                                    → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();

                // SQLite messages:
                // "CHECK constraint failed: price >= 0"
                // "NOT NULL constraint failed: purchases.vendor"
                match db_err.kind() {
                    ErrorKind::CheckViolation | ErrorKind::NotNullViolation => {
                        DbError::constraint(msg)
                    }
                    _ if msg.contains("constraint failed") => DbError::constraint(msg),
                    _ => DbError::QueryFailed(msg.to_string()),
                }
            }

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

// =============================================================================
// Service Error
// =============================================================================

/// Errors surfaced by [`crate::RecordService`].
///
/// Exactly two kinds are user-recoverable: `Validation` (fix the form) and
/// `ConstraintViolation` (fix the value the store rejected). Neither leaves a
/// partial write behind.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Empty required text, wrong field count or kind. Storage untouched.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The store rejected the row.
    #[error("{0}")]
    ConstraintViolation(String),

    /// Any other database failure.
    #[error(transparent)]
    Database(DbError),
}

impl From<DbError> for ServiceError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::ConstraintViolation { message } => ServiceError::ConstraintViolation(message),
            other => ServiceError::Database(other),
        }
    }
}

/// Result type for Record Service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraint_maps_to_service_constraint() {
        let err: ServiceError = DbError::constraint("CHECK constraint failed: price >= 0").into();
        assert!(matches!(err, ServiceError::ConstraintViolation(ref m) if m.contains("price")));
    }

    #[test]
    fn test_other_db_errors_stay_database() {
        let err: ServiceError = DbError::PoolExhausted.into();
        assert!(matches!(err, ServiceError::Database(DbError::PoolExhausted)));
    }

    #[test]
    fn test_validation_message_passes_through() {
        let err: ServiceError = ValidationError::Required {
            field: "Customer".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Customer cannot be empty!");
    }
}
