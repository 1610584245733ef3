//! # Error Types
//!
//! Domain-specific error types for bizledger-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bizledger-core errors (this file)                                     │
//! │  ├── CoreError        - Parsing of names coming from the outside       │
//! │  ├── ValidationError  - Input checks done before storage               │
//! │  └── ExportError      - CSV encoding/decoding failures                 │
//! │                                                                         │
//! │  bizledger-db errors (separate crate)                                  │
//! │  ├── DbError          - Database operation failures                    │
//! │  └── ServiceError     - Validation / ConstraintViolation / Database    │
//! │                                                                         │
//! │  App errors                                                            │
//! │  └── AppError         - What the user sees (serialized)                │
//! │                                                                         │
//! │  Flow: ValidationError → ServiceError → AppError → inline message      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors from interpreting outside input as domain values.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Name is not one of purchases / sales / orders.
    #[error("Unknown table: {0}")]
    UnknownTable(String),

    /// Status is not Pending or Completed.
    #[error("Unknown order status: {0}")]
    UnknownStatus(String),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any storage access. The user corrects the form and
/// resubmits; nothing was written.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required text field is missing, empty or whitespace-only.
    #[error("{field} cannot be empty!")]
    Required { field: String },

    /// Wrong number of positional values for the table.
    #[error("{table} expects {expected} fields, got {actual}")]
    FieldCount {
        table: String,
        expected: usize,
        actual: usize,
    },

    /// Positional value has the wrong kind for its column.
    #[error("{field} must be {expected}, got {actual}")]
    InvalidKind {
        field: String,
        expected: String,
        actual: String,
    },

    /// Raw input that cannot be read as its field's type.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Export Error
// =============================================================================

/// CSV export and re-import errors.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Underlying CSV reader/writer failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Writer could not hand back its buffer.
    #[error("CSV flush failed: {0}")]
    Flush(String),

    /// Header row does not match the table's columns.
    #[error("Header mismatch: expected {expected:?}, found {found:?}")]
    Header {
        expected: Vec<String>,
        found: Vec<String>,
    },

    /// Cell cannot be parsed as its column's kind.
    #[error("Row {row}, column {column}: invalid value '{value}'")]
    Cell {
        row: usize,
        column: String,
        value: String,
    },
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "Vendor".to_string(),
        };
        assert_eq!(err.to_string(), "Vendor cannot be empty!");

        let err = ValidationError::FieldCount {
            table: "orders".to_string(),
            expected: 4,
            actual: 3,
        };
        assert_eq!(err.to_string(), "orders expects 4 fields, got 3");
    }

    #[test]
    fn test_invalid_format_message() {
        let err = ValidationError::InvalidFormat {
            field: "Date".to_string(),
            reason: "expected YYYY-MM-DD".to_string(),
        };
        assert_eq!(err.to_string(), "Date has invalid format: expected YYYY-MM-DD");
    }
}
