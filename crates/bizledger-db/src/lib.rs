//! # bizledger-db: Store and Record Service for bizledger
//!
//! This crate provides database access for bizledger.
//! It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        bizledger Data Flow                              │
//! │                                                                         │
//! │  Page handler (submit purchase form)                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   bizledger-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │ RecordService │    │  Repository   │    │    Schema    │  │   │
//! │  │   │ (service.rs)  │───►│  (record.rs)  │    │ (schema.rs)  │  │   │
//! │  │   │ validation    │    │ parameterized │    │ CREATE TABLE │  │   │
//! │  │   │ first         │    │ SQL           │    │ IF NOT EXISTS│  │   │
//! │  │   └───────────────┘    └───────┬───────┘    └──────────────┘  │   │
//! │  │                                │                               │   │
//! │  │                        ┌───────▼───────┐                       │   │
//! │  │                        │   Database    │                       │   │
//! │  │                        │   (pool.rs)   │                       │   │
//! │  │                        │ 1 connection  │                       │   │
//! │  │                        └───────────────┘                       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │   ./secure_business_manager.db                                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection creation and configuration
//! - [`schema`] - Idempotent table creation
//! - [`error`] - Database and service error types
//! - [`repository`] - Record SQL
//! - [`service`] - Validation + storage, the operations the UI calls
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bizledger_db::{Database, DbConfig, RecordService};
//!
//! let db = Database::new(DbConfig::new("secure_business_manager.db")).await?;
//! let service = RecordService::new(db);
//!
//! let purchases = service.fetch_all(Table::Purchases).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod pool;
pub mod repository;
pub mod schema;
pub mod service;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult, ServiceError, ServiceResult};
pub use pool::{Database, DbConfig};
pub use repository::record::RecordRepository;
pub use service::RecordService;
