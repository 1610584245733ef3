//! # Terminal Rendering
//!
//! Draws a [`Response`] as plain text.
//!
//! ```text
//! == Manage Purchases ==
//! [ok] Purchase added successfully!
//!
//! -- Purchase Records --
//! id  product_name  price  quantity  vendor   purchase_date
//! 1   Widget        9.99   3         Acme Co  2024-01-15
//!
//! Download Purchases: Purchases.csv (text/csv, 72 bytes)
//! ```

use std::fmt::Write;

use bizledger_core::TableData;

use crate::handlers::{Feedback, PageView, Response, StatusUpdate};

/// Renders a full response.
pub fn render(response: &Response) -> String {
    let mut out = String::new();
    let view = &response.view;

    let _ = writeln!(out, "== {} ==", view.title);
    if let Some(feedback) = &response.feedback {
        let _ = writeln!(out, "{}", render_feedback(feedback));
    }
    out.push('\n');

    render_records(&mut out, view);

    if let Some(status) = &view.status_update {
        out.push('\n');
        render_status(&mut out, status);
    }

    out
}

pub fn render_feedback(feedback: &Feedback) -> String {
    match feedback {
        Feedback::Success(message) => format!("[ok] {}", message),
        Feedback::Error(err) => format!("[error] {}", err.message),
    }
}

fn render_records(out: &mut String, view: &PageView) {
    let _ = writeln!(out, "-- {} --", view.records_heading);

    if let Some(info) = view.info {
        let _ = writeln!(out, "{}", info);
        return;
    }

    out.push_str(&render_table(&view.records));

    if let Some(download) = &view.download {
        let _ = writeln!(
            out,
            "\n{}: {} ({}, {} bytes)",
            download.label,
            download.file_name,
            download.mime,
            download.data.len()
        );
    }
}

fn render_status(out: &mut String, status: &StatusUpdate) {
    out.push_str("-- Update Order Status --\n");
    match status.info {
        Some(info) => {
            let _ = writeln!(out, "{}", info);
        }
        None => {
            let ids: Vec<String> = status.pending_ids.iter().map(|id| id.to_string()).collect();
            let _ = writeln!(out, "Pending order ids: {}", ids.join(", "));
        }
    }
}

/// Left-aligned columns, two spaces apart, header first.
pub fn render_table(data: &TableData) -> String {
    let cells: Vec<Vec<String>> = data
        .rows
        .iter()
        .map(|row| row.iter().map(|v| v.to_string()).collect())
        .collect();

    let mut widths: Vec<usize> = data.columns.iter().map(|c| c.chars().count()).collect();
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &data.columns, &widths);
    for row in &cells {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let last = cells.len().saturating_sub(1);
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i == last {
            out.push_str(cell);
        } else {
            let pad = width - cell.chars().count();
            out.push_str(cell);
            out.push_str(&" ".repeat(pad + 2));
        }
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use bizledger_core::{FieldValue, Table};
    use chrono::NaiveDate;

    fn purchases() -> TableData {
        let mut data = TableData::empty(Table::Purchases);
        data.rows.push(vec![
            FieldValue::Integer(1),
            FieldValue::text("Widget"),
            FieldValue::Real(9.99),
            FieldValue::Integer(3),
            FieldValue::text("Acme Co"),
            FieldValue::Date(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()),
        ]);
        data
    }

    #[test]
    fn test_table_columns_align() {
        let text = render_table(&purchases());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "id  product_name  price  quantity  vendor   purchase_date"
        );
        assert_eq!(lines[1], "1   Widget        9.99   3         Acme Co  2024-01-15");
    }

    #[test]
    fn test_unicode_widths_count_chars() {
        let mut data = TableData::empty(Table::Orders);
        data.rows.push(vec![
            FieldValue::Integer(1),
            FieldValue::text("Café"),
            FieldValue::Integer(2),
            FieldValue::text("Pending"),
            FieldValue::Date(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()),
        ]);

        let text = render_table(&data);
        let lines: Vec<&str> = text.lines().collect();
        let header_col = lines[0].find("quantity").unwrap();
        let row_col = lines[1].char_indices().nth(
            lines[0][..header_col].chars().count(),
        );
        assert_eq!(row_col.map(|(_, c)| c), Some('2'));
    }

    #[test]
    fn test_feedback_prefixes() {
        assert_eq!(
            render_feedback(&Feedback::Success("Sale added successfully!".into())),
            "[ok] Sale added successfully!"
        );
        assert_eq!(
            render_feedback(&Feedback::Error(AppError::validation("Customer cannot be empty!"))),
            "[error] Customer cannot be empty!"
        );
    }
}
