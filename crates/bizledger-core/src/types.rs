//! # Domain Types
//!
//! Core domain types used throughout bizledger.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Purchase     │   │      Sale       │   │     Order       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id             │       │
//! │  │  product_name   │   │  product_name   │   │  product_name   │       │
//! │  │  price          │   │  price          │   │  quantity       │       │
//! │  │  quantity       │   │  quantity       │   │  status ◄─ only │       │
//! │  │  vendor         │   │  customer       │   │   mutable field │       │
//! │  │  purchase_date  │   │  sale_date      │   │  order_date     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Table       │   │   FieldValue    │   │  OrderStatus    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Purchases      │   │  Integer(i64)   │   │  Pending        │       │
//! │  │  Sales          │   │  Real(f64)      │   │  Completed      │       │
//! │  │  Orders         │   │  Text / Date    │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Closed Table Set
//! Tables are a closed enumeration. Each variant owns a static column list,
//! so SQL text is only ever built from these `&'static str` names and never
//! from caller input.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Date format used for storage and CSV (`2024-01-15`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Record Id
// =============================================================================

/// Surrogate key assigned by the store on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(transparent))]
#[serde(transparent)]
pub struct RecordId(pub i64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        RecordId(id)
    }
}

// =============================================================================
// Columns
// =============================================================================

/// Storage kind of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    Integer,
    Real,
    Text,
    Date,
    /// Text restricted to the [`OrderStatus`] values by the store.
    Status,
}

impl ColumnKind {
    /// Whether a value of `value`'s kind may be stored in this column.
    ///
    /// Integers are accepted for real columns; everything else must match.
    pub fn accepts(&self, value: &FieldValue) -> bool {
        matches!(
            (self, value),
            (ColumnKind::Integer, FieldValue::Integer(_))
                | (ColumnKind::Real, FieldValue::Real(_) | FieldValue::Integer(_))
                | (ColumnKind::Text | ColumnKind::Status, FieldValue::Text(_))
                | (ColumnKind::Date, FieldValue::Date(_))
        )
    }
}

/// One insertable column of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// SQL column name.
    pub name: &'static str,
    /// Form label shown to the user.
    pub label: &'static str,
    pub kind: ColumnKind,
    /// Required text: must be non-empty after trimming.
    pub required: bool,
}

const fn column(
    name: &'static str,
    label: &'static str,
    kind: ColumnKind,
    required: bool,
) -> Column {
    Column {
        name,
        label,
        kind,
        required,
    }
}

static PURCHASE_COLUMNS: [Column; 5] = [
    column("product_name", "Product Name", ColumnKind::Text, true),
    column("price", "Price", ColumnKind::Real, false),
    column("quantity", "Quantity", ColumnKind::Integer, false),
    column("vendor", "Vendor", ColumnKind::Text, true),
    column("purchase_date", "Purchase Date", ColumnKind::Date, false),
];

static SALE_COLUMNS: [Column; 5] = [
    column("product_name", "Product Name", ColumnKind::Text, true),
    column("price", "Price", ColumnKind::Real, false),
    column("quantity", "Quantity", ColumnKind::Integer, false),
    column("customer", "Customer", ColumnKind::Text, true),
    column("sale_date", "Sale Date", ColumnKind::Date, false),
];

static ORDER_COLUMNS: [Column; 4] = [
    column("product_name", "Product Name", ColumnKind::Text, true),
    column("quantity", "Quantity", ColumnKind::Integer, false),
    column("status", "Status", ColumnKind::Status, false),
    column("order_date", "Order Date", ColumnKind::Date, false),
];

// =============================================================================
// Table
// =============================================================================

/// The three record tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Table {
    Purchases,
    Sales,
    Orders,
}

impl Table {
    /// Every table, in navigation order.
    pub const ALL: [Table; 3] = [Table::Purchases, Table::Sales, Table::Orders];

    /// SQL table name.
    pub const fn name(&self) -> &'static str {
        match self {
            Table::Purchases => "purchases",
            Table::Sales => "sales",
            Table::Orders => "orders",
        }
    }

    /// Human label, also the CSV file stem.
    pub const fn label(&self) -> &'static str {
        match self {
            Table::Purchases => "Purchases",
            Table::Sales => "Sales",
            Table::Orders => "Orders",
        }
    }

    /// Insert columns in positional order (`id` excluded).
    pub fn columns(&self) -> &'static [Column] {
        match self {
            Table::Purchases => &PURCHASE_COLUMNS,
            Table::Sales => &SALE_COLUMNS,
            Table::Orders => &ORDER_COLUMNS,
        }
    }

    /// All column names as stored, `id` first.
    pub fn column_names(&self) -> Vec<&'static str> {
        std::iter::once("id")
            .chain(self.columns().iter().map(|c| c.name))
            .collect()
    }

    /// All column kinds as stored, `id` first.
    pub fn column_kinds(&self) -> Vec<ColumnKind> {
        std::iter::once(ColumnKind::Integer)
            .chain(self.columns().iter().map(|c| c.kind))
            .collect()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Table {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Table::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownTable(s.to_string()))
    }
}

// =============================================================================
// Field Value
// =============================================================================

/// A single cell, either submitted positionally or read back from the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Real(f64),
    Text(String),
    Date(NaiveDate),
}

impl FieldValue {
    /// Convenience constructor for text cells.
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// Short name of the value's kind, for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            FieldValue::Integer(_) => "integer",
            FieldValue::Real(_) => "real",
            FieldValue::Text(_) => "text",
            FieldValue::Date(_) => "date",
        }
    }

    /// Parses the textual form of a cell for the given column kind.
    ///
    /// Returns `None` if `raw` is not a valid value of that kind.
    pub fn parse(kind: ColumnKind, raw: &str) -> Option<FieldValue> {
        match kind {
            ColumnKind::Integer => raw.parse().ok().map(FieldValue::Integer),
            ColumnKind::Real => raw.parse().ok().map(FieldValue::Real),
            ColumnKind::Text | ColumnKind::Status => Some(FieldValue::Text(raw.to_string())),
            ColumnKind::Date => NaiveDate::parse_from_str(raw, DATE_FORMAT)
                .ok()
                .map(FieldValue::Date),
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(i) => write!(f, "{}", i),
            // f64's Display is the shortest representation that parses back exactly
            FieldValue::Real(r) => write!(f, "{}", r),
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Date(d) => write!(f, "{}", d.format(DATE_FORMAT)),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Integer(i)
    }
}

impl From<f64> for FieldValue {
    fn from(r: f64) -> Self {
        FieldValue::Real(r)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(d: NaiveDate) -> Self {
        FieldValue::Date(d)
    }
}

impl From<OrderStatus> for FieldValue {
    fn from(s: OrderStatus) -> Self {
        FieldValue::Text(s.as_str().to_string())
    }
}

// =============================================================================
// Table Data
// =============================================================================

/// Every row of one table, `id` column first, ascending by id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableData {
    pub table: Table,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<FieldValue>>,
}

impl TableData {
    /// An empty result carrying the table's header.
    pub fn empty(table: Table) -> Self {
        TableData {
            table,
            columns: table.column_names().into_iter().map(String::from).collect(),
            rows: Vec::new(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Position of a column in each row.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Ids of every row, in row order.
    pub fn ids(&self) -> Vec<RecordId> {
        self.rows
            .iter()
            .filter_map(|row| row.first().and_then(FieldValue::as_integer))
            .map(RecordId)
            .collect()
    }
}

// =============================================================================
// Order Status
// =============================================================================

/// Lifecycle of an order. Stored as `'Pending'` / `'Completed'`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
pub enum OrderStatus {
    #[default]
    Pending,
    Completed,
}

impl OrderStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            s if s.eq_ignore_ascii_case("pending") => Ok(OrderStatus::Pending),
            s if s.eq_ignore_ascii_case("completed") => Ok(OrderStatus::Completed),
            other => Err(CoreError::UnknownStatus(other.to_string())),
        }
    }
}

// =============================================================================
// Records
// =============================================================================

/// A stock purchase from a vendor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Purchase {
    pub id: RecordId,
    pub product_name: String,
    pub price: f64,
    pub quantity: i64,
    pub vendor: String,
    pub purchase_date: NaiveDate,
}

/// A sale to a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Sale {
    pub id: RecordId,
    pub product_name: String,
    pub price: f64,
    pub quantity: i64,
    pub customer: String,
    pub sale_date: NaiveDate,
}

/// A customer order awaiting or past fulfilment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Order {
    pub id: RecordId,
    pub product_name: String,
    pub quantity: i64,
    pub status: OrderStatus,
    pub order_date: NaiveDate,
}

/// Purchase form contents, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPurchase {
    pub product_name: String,
    pub price: f64,
    pub quantity: i64,
    pub vendor: String,
    pub purchase_date: NaiveDate,
}

/// Sale form contents, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSale {
    pub product_name: String,
    pub price: f64,
    pub quantity: i64,
    pub customer: String,
    pub sale_date: NaiveDate,
}

/// Order form contents, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrder {
    pub product_name: String,
    pub quantity: i64,
    #[serde(default)]
    pub status: OrderStatus,
    pub order_date: NaiveDate,
}

impl NewPurchase {
    /// Positional values in [`Table::Purchases`] column order.
    pub fn into_fields(self) -> Vec<FieldValue> {
        vec![
            self.product_name.into(),
            self.price.into(),
            self.quantity.into(),
            self.vendor.into(),
            self.purchase_date.into(),
        ]
    }
}

impl NewSale {
    /// Positional values in [`Table::Sales`] column order.
    pub fn into_fields(self) -> Vec<FieldValue> {
        vec![
            self.product_name.into(),
            self.price.into(),
            self.quantity.into(),
            self.customer.into(),
            self.sale_date.into(),
        ]
    }
}

impl NewOrder {
    /// Positional values in [`Table::Orders`] column order.
    pub fn into_fields(self) -> Vec<FieldValue> {
        vec![
            self.product_name.into(),
            self.quantity.into(),
            self.status.into(),
            self.order_date.into(),
        ]
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
