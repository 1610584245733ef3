//! # CSV Export
//!
//! Pure transformation between [`TableData`] and CSV bytes.
//!
//! ## Format
//! ```text
//! id,product_name,price,quantity,vendor,purchase_date   ◄── header = column names
//! 1,Widget,9.99,3,Acme Co,2024-01-15                    ◄── one line per record
//! 2,"Bolts, M6",0.15,200,Fastenal,2024-01-16            ◄── quoted when needed
//! ```
//!
//! UTF-8, comma separated, no index column. The file name is
//! `{TableLabel}.csv`, e.g. `Purchases.csv`.

use crate::error::ExportError;
use crate::types::{FieldValue, Table, TableData};

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// MIME type offered alongside the download.
pub const CSV_MIME: &str = "text/csv";

/// Download file name for a table.
pub fn file_name(table: Table) -> String {
    format!("{}.csv", table.label())
}

/// Encodes every row of `data` as CSV, header first.
pub fn to_csv(data: &TableData) -> ExportResult<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(&data.columns)?;
    for row in &data.rows {
        writer.write_record(row.iter().map(FieldValue::to_string))?;
    }

    writer
        .into_inner()
        .map_err(|e| ExportError::Flush(e.to_string()))
}

/// Parses CSV produced by [`to_csv`] back into rows for `table`.
///
/// The header must name the table's columns in stored order.
pub fn from_csv(table: Table, bytes: &[u8]) -> ExportResult<TableData> {
    let mut reader = csv::Reader::from_reader(bytes);

    let expected = table.column_names();
    let found: Vec<String> = reader.headers()?.iter().map(String::from).collect();
    if found.iter().map(String::as_str).ne(expected.iter().copied()) {
        return Err(ExportError::Header {
            expected: expected.iter().map(|s| s.to_string()).collect(),
            found,
        });
    }

    let kinds = table.column_kinds();
    let mut data = TableData::empty(table);

    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let row = record
            .iter()
            .zip(kinds.iter().zip(&expected))
            .map(|(cell, (kind, column))| {
                FieldValue::parse(*kind, cell).ok_or_else(|| ExportError::Cell {
                    row: index + 1,
                    column: column.to_string(),
                    value: cell.to_string(),
                })
            })
            .collect::<ExportResult<Vec<_>>>()?;
        data.rows.push(row);
    }

    Ok(data)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OrderStatus;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> FieldValue {
        FieldValue::Date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    fn purchase_row(id: i64, product: &str, price: f64, qty: i64, vendor: &str) -> Vec<FieldValue> {
        vec![
            FieldValue::Integer(id),
            FieldValue::text(product),
            FieldValue::Real(price),
            FieldValue::Integer(qty),
            FieldValue::text(vendor),
            date(2024, 1, 15),
        ]
    }

    #[test]
    fn test_file_names() {
        assert_eq!(file_name(Table::Purchases), "Purchases.csv");
        assert_eq!(file_name(Table::Sales), "Sales.csv");
        assert_eq!(file_name(Table::Orders), "Orders.csv");
    }

    #[test]
    fn test_empty_table_exports_header_only() {
        let bytes = to_csv(&TableData::empty(Table::Sales)).unwrap();
        assert_eq!(
            String::from_utf8(bytes.clone()).unwrap(),
            "id,product_name,price,quantity,customer,sale_date\n"
        );
        assert_eq!(from_csv(Table::Sales, &bytes).unwrap(), TableData::empty(Table::Sales));
    }

    #[test]
    fn test_single_row_layout() {
        let mut data = TableData::empty(Table::Purchases);
        data.rows.push(purchase_row(1, "Widget", 9.99, 3, "Acme Co"));

        let text = String::from_utf8(to_csv(&data).unwrap()).unwrap();
        assert_eq!(
            text,
            "id,product_name,price,quantity,vendor,purchase_date\n\
             1,Widget,9.99,3,Acme Co,2024-01-15\n"
        );
        assert_eq!(from_csv(Table::Purchases, text.as_bytes()).unwrap(), data);
    }

    #[test]
    fn test_many_rows_with_quoting_round_trip() {
        let mut data = TableData::empty(Table::Purchases);
        data.rows.push(purchase_row(1, "Widget", 9.99, 3, "Acme Co"));
        data.rows.push(purchase_row(2, "Bolts, M6", 0.15, 200, "Fastenal"));
        data.rows.push(purchase_row(3, "12\" \"Ruler\"", 0.0, 1, "Line\nBreak Ltd"));
        data.rows.push(purchase_row(5, "Café crème", 1234567.5, 7, "Ünïcode GmbH"));

        let parsed = from_csv(Table::Purchases, &to_csv(&data).unwrap()).unwrap();
        assert_eq!(parsed, data);
    }

    #[test]
    fn test_orders_round_trip() {
        let mut data = TableData::empty(Table::Orders);
        data.rows.push(vec![
            FieldValue::Integer(1),
            FieldValue::text("Gadget"),
            FieldValue::Integer(2),
            OrderStatus::Completed.into(),
            date(2024, 2, 1),
        ]);

        let parsed = from_csv(Table::Orders, &to_csv(&data).unwrap()).unwrap();
        assert_eq!(parsed, data);
    }

    #[test]
    fn test_header_mismatch_is_rejected() {
        let bytes = b"id,product_name,quantity\n1,Gadget,2\n";
        assert!(matches!(
            from_csv(Table::Orders, bytes),
            Err(ExportError::Header { .. })
        ));
    }

    #[test]
    fn test_bad_cell_is_rejected() {
        let bytes = b"id,product_name,quantity,status,order_date\n1,Gadget,two,Pending,2024-02-01\n";
        assert!(matches!(
            from_csv(Table::Orders, bytes),
            Err(ExportError::Cell { row: 1, ref column, .. }) if column == "quantity"
        ));
    }
}
