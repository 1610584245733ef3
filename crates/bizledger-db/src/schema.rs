//! # Database Schema
//!
//! The three record tables, created idempotently on every start.
//!
//! ## How Initialization Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Initialization Process                             │
//! │                                                                         │
//! │  App Startup                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CREATE TABLE IF NOT EXISTS purchases (...)                            │
//! │  CREATE TABLE IF NOT EXISTS sales     (...)                            │
//! │  CREATE TABLE IF NOT EXISTS orders    (...)                            │
//! │       │                                                                 │
//! │       ├── Table exists? Left untouched, rows preserved                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  App continues startup                                                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no migration history: the schema is fixed and each statement
//! is a no-op once its table exists.

use bizledger_core::Table;
use sqlx::SqlitePool;
use tracing::info;

use crate::error::{DbError, DbResult};

/// Table definitions. Constraints live here, not in the service layer.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS purchases (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    product_name TEXT NOT NULL,
    price REAL NOT NULL CHECK(price >= 0),
    quantity INTEGER NOT NULL CHECK(quantity > 0),
    vendor TEXT NOT NULL,
    purchase_date DATE NOT NULL
);

CREATE TABLE IF NOT EXISTS sales (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    product_name TEXT NOT NULL,
    price REAL NOT NULL CHECK(price >= 0),
    quantity INTEGER NOT NULL CHECK(quantity > 0),
    customer TEXT NOT NULL,
    sale_date DATE NOT NULL
);

CREATE TABLE IF NOT EXISTS orders (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    product_name TEXT NOT NULL,
    quantity INTEGER NOT NULL CHECK(quantity > 0),
    status TEXT CHECK(status IN ('Pending', 'Completed')) NOT NULL DEFAULT 'Pending',
    order_date DATE NOT NULL
);
"#;

/// Creates the record tables if they are absent.
///
/// ## Safety
/// - Idempotent: safe to run on every process start
/// - Existing rows are never touched
pub async fn initialize(pool: &SqlitePool) -> DbResult<()> {
    info!("Ensuring record tables exist");

    sqlx::raw_sql(SCHEMA)
        .execute(pool)
        .await
        .map_err(|e| DbError::SchemaFailed(e.to_string()))?;

    info!("Record tables ready");
    Ok(())
}

/// Returns information about the schema.
///
/// ## Returns
/// Tuple of (expected_tables, present_tables)
///
/// ## Usage
/// For diagnostics and health checks.
pub async fn schema_status(pool: &SqlitePool) -> DbResult<(usize, usize)> {
    let expected = Table::ALL.len();

    let mut present = 0;
    for table in Table::ALL {
        let found: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
        )
        .bind(table.name())
        .fetch_one(pool)
        .await?;
        if found > 0 {
            present += 1;
        }
    }

    Ok((expected, present))
}

// =============================================================================
// Unit Tests
// =============================================================================
