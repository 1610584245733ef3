//! # bizledger-core: Pure Domain Model for bizledger
//!
//! This crate holds the record model shared by the store and the front end,
//! as pure types and functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        bizledger Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Presentation (apps/cli)                      │   │
//! │  │    Purchases page ── Sales page ── Orders page ── CSV export    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Request / Response                     │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bizledger-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                  │   │
//! │  │   │   types   │  │validation │  │  export   │                  │   │
//! │  │   │  Table    │  │ required  │  │  to_csv   │                  │   │
//! │  │   │  Records  │  │  fields   │  │  from_csv │                  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               bizledger-db (Store + Record Service)             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Tables, columns, records, field values
//! - [`validation`] - Non-empty text checks before storage
//! - [`export`] - CSV encoding of a whole table
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use bizledger_core::{export, FieldValue, Table, TableData};
//!
//! let mut data = TableData::empty(Table::Orders);
//! data.rows.push(vec![
//!     FieldValue::Integer(1),
//!     FieldValue::text("Gadget"),
//!     FieldValue::Integer(2),
//!     FieldValue::text("Pending"),
//!     FieldValue::Date(chrono::NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()),
//! ]);
//!
//! let csv = export::to_csv(&data).unwrap();
//! assert!(csv.starts_with(b"id,product_name,quantity,status,order_date\n"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod export;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, ExportError, ValidationError};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Database file used when nothing else is configured.
pub const DEFAULT_DATABASE_FILE: &str = "secure_business_manager.db";
