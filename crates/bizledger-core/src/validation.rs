//! # Validation Module
//!
//! Input checks performed before a record reaches the store.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Record Service (THIS MODULE)                                 │
//! │  ├── Positional field count                                            │
//! │  ├── Value kind per column                                             │
//! │  └── Required text not empty / whitespace-only                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Database (SQLite)                                            │
//! │  ├── CHECK(price >= 0), CHECK(quantity > 0)                            │
//! │  ├── CHECK(status IN ('Pending', 'Completed'))                         │
//! │  └── NOT NULL on every column                                          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Numeric ranges and the status enumeration belong to the store: a negative
//! price reaches SQLite and comes back as a constraint violation, not a
//! validation error.
//!
//! ## Usage
//! ```rust
//! use bizledger_core::validation::validate_required;
//!
//! assert!(validate_required("Vendor", "Acme Co").is_ok());
//! assert!(validate_required("Vendor", "   ").is_err());
//! ```

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::types::{FieldValue, Table, DATE_FORMAT};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates that a required text field is not empty or whitespace-only.
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Parses a form date written as `YYYY-MM-DD`.
///
/// ```rust
/// use bizledger_core::validation::parse_date;
///
/// assert!(parse_date("Order Date", "2024-02-01").is_ok());
/// assert!(parse_date("Order Date", "01/02/2024").is_err());
/// ```
pub fn parse_date(field: &str, raw: &str) -> ValidationResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|e| {
        ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: format!("expected YYYY-MM-DD ({})", e),
        }
    })
}

/// Validates positional values for an insert into `table`.
///
/// ## Rules
/// - Exactly one value per insert column, in column order
/// - Each value's kind is accepted by its column
/// - Required text columns are non-empty after trimming
///
/// ## Example
/// ```rust
/// use bizledger_core::validation::validate_fields;
/// use bizledger_core::{FieldValue, Table};
///
/// let fields = vec![
///     FieldValue::text(" "),
///     FieldValue::Integer(2),
///     FieldValue::text("Pending"),
///     FieldValue::Date(chrono::NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()),
/// ];
/// assert!(validate_fields(Table::Orders, &fields).is_err());
/// ```
pub fn validate_fields(table: Table, fields: &[FieldValue]) -> ValidationResult<()> {
    let columns = table.columns();

    if fields.len() != columns.len() {
        return Err(ValidationError::FieldCount {
            table: table.name().to_string(),
            expected: columns.len(),
            actual: fields.len(),
        });
    }

    for (column, value) in columns.iter().zip(fields) {
        if !column.kind.accepts(value) {
            return Err(ValidationError::InvalidKind {
                field: column.label.to_string(),
                expected: format!("{:?}", column.kind).to_lowercase(),
                actual: value.kind_name().to_string(),
            });
        }

        if column.required {
            if let FieldValue::Text(text) = value {
                validate_required(column.label, text)?;
            }
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn purchase(product: &str, vendor: &str) -> Vec<FieldValue> {
        vec![
            FieldValue::text(product),
            FieldValue::Real(9.99),
            FieldValue::Integer(3),
            FieldValue::text(vendor),
            FieldValue::Date(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()),
        ]
    }

    #[test]
    fn test_validate_required() {
        assert!(validate_required("Product Name", "Widget").is_ok());
        assert!(validate_required("Product Name", "").is_err());
        assert!(validate_required("Product Name", " \t\n").is_err());
    }

    #[test]
    fn test_valid_purchase_passes() {
        assert!(validate_fields(Table::Purchases, &purchase("Widget", "Acme Co")).is_ok());
    }

    #[test]
    fn test_blank_vendor_is_rejected() {
        let err = validate_fields(Table::Purchases, &purchase("Widget", "  ")).unwrap_err();
        assert!(matches!(err, ValidationError::Required { ref field } if field == "Vendor"));
    }

    #[test]
    fn test_blank_product_name_is_reported_first() {
        let err = validate_fields(Table::Purchases, &purchase("", "")).unwrap_err();
        assert_eq!(err.to_string(), "Product Name cannot be empty!");
    }

    #[test]
    fn test_field_count_mismatch() {
        let mut fields = purchase("Widget", "Acme Co");
        fields.pop();
        assert!(matches!(
            validate_fields(Table::Purchases, &fields),
            Err(ValidationError::FieldCount {
                expected: 5,
                actual: 4,
                ..
            })
        ));
    }

    #[test]
    fn test_wrong_kind_is_rejected() {
        let mut fields = purchase("Widget", "Acme Co");
        fields[1] = FieldValue::text("cheap");
        assert!(matches!(
            validate_fields(Table::Purchases, &fields),
            Err(ValidationError::InvalidKind { .. })
        ));
    }

    #[test]
    fn test_negative_price_is_left_to_store() {
        let mut fields = purchase("Widget", "Acme Co");
        fields[1] = FieldValue::Real(-1.0);
        fields[2] = FieldValue::Integer(0);
        assert!(validate_fields(Table::Purchases, &fields).is_ok());
    }

    #[test]
    fn test_unknown_status_is_left_to_store() {
        let fields = vec![
            FieldValue::text("Gadget"),
            FieldValue::Integer(2),
            FieldValue::text("Shipped"),
            FieldValue::Date(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()),
        ];
        assert!(validate_fields(Table::Orders, &fields).is_ok());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("Sale Date", " 2024-01-20 ").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 20).unwrap()
        );

        for raw in ["", "2024-13-01", "2024-02-30", "yesterday"] {
            match parse_date("Sale Date", raw) {
                Err(ValidationError::InvalidFormat { field, .. }) => assert_eq!(field, "Sale Date"),
                other => panic!("{:?} parsed as {:?}", raw, other),
            }
        }
    }
}
