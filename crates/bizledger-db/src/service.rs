//! # Record Service
//!
//! The three operations the presentation layer calls: add a record, update
//! an order's status, fetch a whole table.
//!
//! ## Add Record Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       add_record(table, fields)                         │
//! │                                                                         │
//! │  validate_fields(table, fields)                                        │
//! │       │                                                                 │
//! │       ├── count / kind / empty text? → ValidationError (no SQL run)    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  INSERT (single statement, atomic)                                     │
//! │       │                                                                 │
//! │       ├── CHECK / NOT NULL failed? → ConstraintViolation (no row)      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  RecordId (greater than every id before it in that table)              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info, warn};

use bizledger_core::validation::validate_fields;
use bizledger_core::{
    FieldValue, NewOrder, NewPurchase, NewSale, Order, OrderStatus, Purchase, RecordId, Sale,
    Table, TableData,
};

use crate::error::ServiceResult;
use crate::pool::Database;

/// Record Service over an owned database handle.
///
/// ## Usage
/// ```rust,ignore
/// let service = RecordService::new(Database::new(DbConfig::in_memory()).await?);
///
/// let id = service.add_order(new_order).await?;
/// service.update_status(id, OrderStatus::Completed).await?;
/// let orders = service.fetch_all(Table::Orders).await?;
/// ```
#[derive(Debug, Clone)]
pub struct RecordService {
    db: Database,
}

impl RecordService {
    /// Creates a service over `db`.
    pub fn new(db: Database) -> Self {
        RecordService { db }
    }

    /// The underlying database handle.
    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Inserts one row from positional values (column order, `id` excluded).
    ///
    /// ## Errors
    /// * `ServiceError::Validation` - wrong field count or kind, or empty required text
    /// * `ServiceError::ConstraintViolation` - negative price, non-positive quantity,
    ///   unknown status
    pub async fn add_record(&self, table: Table, fields: &[FieldValue]) -> ServiceResult<RecordId> {
        if let Err(err) = validate_fields(table, fields) {
            warn!(table = %table, error = %err, "Record rejected by validation");
            return Err(err.into());
        }

        let id = self
            .db
            .records()
            .insert(table, fields)
            .await
            .inspect_err(|err| warn!(table = %table, error = %err, "Record rejected by store"))?;

        info!(table = %table, id = %id, "Record added");
        Ok(id)
    }

    /// Inserts a purchase.
    pub async fn add_purchase(&self, purchase: NewPurchase) -> ServiceResult<RecordId> {
        self.add_record(Table::Purchases, &purchase.into_fields()).await
    }

    /// Inserts a sale.
    pub async fn add_sale(&self, sale: NewSale) -> ServiceResult<RecordId> {
        self.add_record(Table::Sales, &sale.into_fields()).await
    }

    /// Inserts an order.
    pub async fn add_order(&self, order: NewOrder) -> ServiceResult<RecordId> {
        self.add_record(Table::Orders, &order.into_fields()).await
    }

    /// Sets the status of order `id`.
    ///
    /// An unknown id changes nothing and is not an error.
    pub async fn update_status(&self, id: RecordId, status: OrderStatus) -> ServiceResult<()> {
        let affected = self.db.records().update_status(id, status).await?;

        if affected == 0 {
            debug!(id = %id, "No order with this id; status unchanged");
        } else {
            info!(id = %id, status = %status, "Order status updated");
        }

        Ok(())
    }

    /// Every row of `table`, ascending by id, `id` column first.
    pub async fn fetch_all(&self, table: Table) -> ServiceResult<TableData> {
        Ok(self.db.records().fetch_all(table).await?)
    }

    /// All purchases as typed records.
    pub async fn purchases(&self) -> ServiceResult<Vec<Purchase>> {
        Ok(self.db.records().purchases().await?)
    }

    /// All sales as typed records.
    pub async fn sales(&self) -> ServiceResult<Vec<Sale>> {
        Ok(self.db.records().sales().await?)
    }

    /// All orders as typed records.
    pub async fn orders(&self) -> ServiceResult<Vec<Order>> {
        Ok(self.db.records().orders().await?)
    }

    /// Ids selectable for "Mark as Completed".
    pub async fn pending_order_ids(&self) -> ServiceResult<Vec<RecordId>> {
        Ok(self.db.records().pending_order_ids().await?)
    }

    /// Rows in `table`.
    pub async fn count(&self, table: Table) -> ServiceResult<i64> {
        Ok(self.db.records().count(table).await?)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;
    use crate::DbConfig;
    use bizledger_core::ValidationError;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    async fn service() -> RecordService {
        RecordService::new(Database::new(DbConfig::in_memory()).await.unwrap())
    }

    fn widget() -> NewPurchase {
        NewPurchase {
            product_name: "Widget".to_string(),
            price: 9.99,
            quantity: 3,
            vendor: "Acme Co".to_string(),
            purchase_date: date(2024, 1, 15),
        }
    }

    fn gadget() -> NewOrder {
        NewOrder {
            product_name: "Gadget".to_string(),
            quantity: 2,
            status: OrderStatus::Pending,
            order_date: date(2024, 2, 1),
        }
    }

    #[tokio::test]
    async fn test_purchase_scenario() {
        let service = service().await;

        let id = service.add_purchase(widget()).await.unwrap();
        assert_eq!(id, RecordId(1));

        let data = service.fetch_all(Table::Purchases).await.unwrap();
        assert_eq!(data.columns[0], "id");
        assert_eq!(
            data.rows,
            vec![vec![
                FieldValue::Integer(1),
                FieldValue::text("Widget"),
                FieldValue::Real(9.99),
                FieldValue::Integer(3),
                FieldValue::text("Acme Co"),
                FieldValue::Date(date(2024, 1, 15)),
            ]]
        );
    }

    #[tokio::test]
    async fn test_order_completion_scenario() {
        let service = service().await;

        let id = service.add_order(gadget()).await.unwrap();
        assert_eq!(id, RecordId(1));
        service.update_status(RecordId(1), OrderStatus::Completed).await.unwrap();

        let data = service.fetch_all(Table::Orders).await.unwrap();
        let status = data.column_index("status").unwrap();
        assert_eq!(data.rows[0][status], FieldValue::text("Completed"));
        assert!(service.pending_order_ids().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_ids_increase_per_table() {
        let service = service().await;

        let mut last = RecordId(0);
        for _ in 0..5 {
            let id = service.add_purchase(widget()).await.unwrap();
            assert!(id > last);
            last = id;
        }

        // Independent tables have independent sequences
        assert_eq!(service.add_order(gadget()).await.unwrap(), RecordId(1));

        let data = service.fetch_all(Table::Purchases).await.unwrap();
        assert_eq!(
            data.ids(),
            (1..=5).map(RecordId).collect::<Vec<_>>()
        );
    }

    #[tokio::test]
    async fn test_constraint_violations_leave_count_unchanged() {
        let service = service().await;
        service.add_purchase(widget()).await.unwrap();

        let negative = NewPurchase {
            price: -1.0,
            ..widget()
        };
        assert!(matches!(
            service.add_purchase(negative).await,
            Err(ServiceError::ConstraintViolation(_))
        ));

        for quantity in [0, -3] {
            let sale = NewSale {
                product_name: "Widget".to_string(),
                price: 10.0,
                quantity,
                customer: "Jane".to_string(),
                sale_date: date(2024, 1, 20),
            };
            assert!(matches!(
                service.add_sale(sale).await,
                Err(ServiceError::ConstraintViolation(_))
            ));
        }

        let bad_status = [
            FieldValue::text("Gadget"),
            FieldValue::Integer(2),
            FieldValue::text("Shipped"),
            FieldValue::Date(date(2024, 2, 1)),
        ];
        assert!(matches!(
            service.add_record(Table::Orders, &bad_status).await,
            Err(ServiceError::ConstraintViolation(_))
        ));

        assert_eq!(service.count(Table::Purchases).await.unwrap(), 1);
        assert_eq!(service.count(Table::Sales).await.unwrap(), 0);
        assert_eq!(service.count(Table::Orders).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_validation_errors_never_reach_storage() {
        let service = service().await;

        for blank in ["", "   ", "\t\n"] {
            let purchase = NewPurchase {
                vendor: blank.to_string(),
                ..widget()
            };
            assert!(matches!(
                service.add_purchase(purchase).await,
                Err(ServiceError::Validation(ValidationError::Required { .. }))
            ));

            let order = NewOrder {
                product_name: blank.to_string(),
                ..gadget()
            };
            assert!(matches!(
                service.add_order(order).await,
                Err(ServiceError::Validation(_))
            ));
        }

        // Blank text and a bad price together: validation wins, store never consulted
        let both = NewPurchase {
            product_name: " ".to_string(),
            price: -5.0,
            ..widget()
        };
        assert!(matches!(
            service.add_purchase(both).await,
            Err(ServiceError::Validation(_))
        ));

        assert_eq!(service.count(Table::Purchases).await.unwrap(), 0);
        assert_eq!(service.count(Table::Orders).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_status_is_idempotent() {
        let service = service().await;
        let id = service.add_order(gadget()).await.unwrap();

        service.update_status(id, OrderStatus::Completed).await.unwrap();
        let once = service.fetch_all(Table::Orders).await.unwrap();
        service.update_status(id, OrderStatus::Completed).await.unwrap();
        let twice = service.fetch_all(Table::Orders).await.unwrap();

        assert_eq!(once, twice);
        assert_eq!(service.orders().await.unwrap()[0].status, OrderStatus::Completed);
    }

    #[tokio::test]
    async fn test_update_status_unknown_id_is_silent_noop() {
        let service = service().await;
        service.add_order(gadget()).await.unwrap();
        let before = service.fetch_all(Table::Orders).await.unwrap();

        service
            .update_status(RecordId(42), OrderStatus::Completed)
            .await
            .unwrap();

        assert_eq!(service.fetch_all(Table::Orders).await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_csv_export_round_trips_stored_rows() {
        use bizledger_core::export::{from_csv, to_csv};

        let service = service().await;
        let names = ["Widget", "Bolts, M6", "\"Quoted\" Nut", "Café"];

        for inserted in 0..=names.len() {
            let data = service.fetch_all(Table::Purchases).await.unwrap();
            assert_eq!(data.len(), inserted);

            let parsed = from_csv(Table::Purchases, &to_csv(&data).unwrap()).unwrap();
            assert_eq!(parsed, data);

            if let Some(name) = names.get(inserted) {
                let purchase = NewPurchase {
                    product_name: name.to_string(),
                    price: 0.1 * (inserted as f64 + 1.0),
                    ..widget()
                };
                service.add_purchase(purchase).await.unwrap();
            }
        }
    }

    #[tokio::test]
    async fn test_fetch_all_on_empty_tables() {
        let service = service().await;

        for table in Table::ALL {
            let data = service.fetch_all(table).await.unwrap();
            assert!(data.is_empty());
            assert_eq!(data.columns, table.column_names());
        }
    }
}
