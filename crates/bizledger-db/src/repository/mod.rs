//! # Repository Module
//!
//! Database repository implementations for bizledger.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  RecordService                                                         │
//! │       │                                                                 │
//! │       │  db.records().insert(Table::Orders, &fields)                   │
//! │       ▼                                                                 │
//! │  RecordRepository                                                      │
//! │  ├── insert(&self, table, fields)                                      │
//! │  ├── update_status(&self, id, status)                                  │
//! │  ├── fetch_all(&self, table)                                           │
//! │  └── purchases / sales / orders / pending_order_ids / count            │
//! │       │                                                                 │
//! │       │  Parameterized SQL                                              │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`RecordRepository`](record::RecordRepository) - Inserts, status updates, listings

pub mod record;
