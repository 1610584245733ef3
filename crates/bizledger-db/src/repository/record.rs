//! # Record Repository
//!
//! Parameterized SQL for the three record tables.
//!
//! ## Statement Shapes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Record Statements                                 │
//! │                                                                         │
//! │  insert(table, fields)                                                 │
//! │     └── INSERT INTO {table} ({columns}) VALUES (?1, ?2, ...)           │
//! │                                                                         │
//! │  update_status(id, status)          (orders only)                      │
//! │     └── UPDATE orders SET status = ?1 WHERE id = ?2                    │
//! │                                                                         │
//! │  fetch_all(table)                                                      │
//! │     └── SELECT id, {columns} FROM {table} ORDER BY id                  │
//! │                                                                         │
//! │  {table} and {columns} come from `Table`'s static lists only;          │
//! │  every value travels as a bound parameter.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{Row, Sqlite, SqlitePool};
use tracing::debug;

use crate::error::DbResult;
use bizledger_core::{
    ColumnKind, FieldValue, Order, OrderStatus, Purchase, RecordId, Sale, Table, TableData,
};

/// Repository for record database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = RecordRepository::new(pool);
///
/// let id = repo.insert(Table::Orders, &fields).await?;
/// let orders = repo.fetch_all(Table::Orders).await?;
/// ```
#[derive(Debug, Clone)]
pub struct RecordRepository {
    pool: SqlitePool,
}

impl RecordRepository {
    /// Creates a new RecordRepository.
    pub fn new(pool: SqlitePool) -> Self {
        RecordRepository { pool }
    }

    /// Inserts one row from positional values and returns its new id.
    ///
    /// Values must already be in the table's column order; the store's
    /// CHECK constraints are the only checks applied here.
    pub async fn insert(&self, table: Table, fields: &[FieldValue]) -> DbResult<RecordId> {
        debug!(table = %table, fields = fields.len(), "Inserting record");

        let sql = insert_sql(table);
        let query = fields
            .iter()
            .fold(sqlx::query(&sql), |query, value| bind_value(query, value));

        let result = query.execute(&self.pool).await?;

        Ok(RecordId(result.last_insert_rowid()))
    }

    /// Sets an order's status.
    ///
    /// ## Returns
    /// Number of rows affected: 0 when no order has that id.
    pub async fn update_status(&self, id: RecordId, status: OrderStatus) -> DbResult<u64> {
        debug!(id = %id, status = %status, "Updating order status");

        let result = sqlx::query("UPDATE orders SET status = ?1 WHERE id = ?2")
            .bind(status)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Every row of `table`, all columns, ascending by id.
    pub async fn fetch_all(&self, table: Table) -> DbResult<TableData> {
        debug!(table = %table, "Fetching all records");

        let sql = select_sql(table);
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;

        let kinds = table.column_kinds();
        let mut data = TableData::empty(table);
        for row in &rows {
            let cells = kinds
                .iter()
                .enumerate()
                .map(|(index, kind)| decode_cell(row, index, *kind))
                .collect::<DbResult<Vec<_>>>()?;
            data.rows.push(cells);
        }

        Ok(data)
    }

    /// All purchases, ascending by id.
    pub async fn purchases(&self) -> DbResult<Vec<Purchase>> {
        let purchases = sqlx::query_as::<_, Purchase>(&select_sql(Table::Purchases))
            .fetch_all(&self.pool)
            .await?;

        Ok(purchases)
    }

    /// All sales, ascending by id.
    pub async fn sales(&self) -> DbResult<Vec<Sale>> {
        let sales = sqlx::query_as::<_, Sale>(&select_sql(Table::Sales))
            .fetch_all(&self.pool)
            .await?;

        Ok(sales)
    }

    /// All orders, ascending by id.
    pub async fn orders(&self) -> DbResult<Vec<Order>> {
        let orders = sqlx::query_as::<_, Order>(&select_sql(Table::Orders))
            .fetch_all(&self.pool)
            .await?;

        Ok(orders)
    }

    /// Ids of orders still Pending, ascending.
    pub async fn pending_order_ids(&self) -> DbResult<Vec<RecordId>> {
        let ids = sqlx::query_scalar::<_, RecordId>(
            "SELECT id FROM orders WHERE status = ?1 ORDER BY id ASC",
        )
        .bind(OrderStatus::Pending)
        .fetch_all(&self.pool)
        .await?;

        Ok(ids)
    }

    /// Counts rows in `table`.
    pub async fn count(&self, table: Table) -> DbResult<i64> {
        let sql = format!("SELECT COUNT(*) FROM {}", table.name());
        let count: i64 = sqlx::query_scalar(&sql).fetch_one(&self.pool).await?;

        Ok(count)
    }
}

fn insert_sql(table: Table) -> String {
    let columns = table.columns();
    let names: Vec<&str> = columns.iter().map(|c| c.name).collect();
    let placeholders: Vec<String> = (1..=columns.len()).map(|i| format!("?{}", i)).collect();

    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        table.name(),
        names.join(", "),
        placeholders.join(", ")
    )
}

fn select_sql(table: Table) -> String {
    format!(
        "SELECT {} FROM {} ORDER BY id ASC",
        table.column_names().join(", "),
        table.name()
    )
}

fn bind_value<'q>(
    query: Query<'q, Sqlite, SqliteArguments<'q>>,
    value: &'q FieldValue,
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    match value {
        FieldValue::Integer(i) => query.bind(*i),
        FieldValue::Real(r) => query.bind(*r),
        FieldValue::Text(s) => query.bind(s.as_str()),
        FieldValue::Date(d) => query.bind(*d),
    }
}

fn decode_cell(row: &SqliteRow, index: usize, kind: ColumnKind) -> DbResult<FieldValue> {
    let value = match kind {
        ColumnKind::Integer => FieldValue::Integer(row.try_get::<i64, _>(index)?),
        ColumnKind::Real => FieldValue::Real(row.try_get::<f64, _>(index)?),
        ColumnKind::Text | ColumnKind::Status => FieldValue::Text(row.try_get::<String, _>(index)?),
        ColumnKind::Date => FieldValue::Date(row.try_get::<NaiveDate, _>(index)?),
    };

    Ok(value)
}

// =============================================================================
// Unit Tests
// =============================================================================
