//! # Pages and Forms
//!
//! The three navigation targets and the entry form each one offers.
//!
//! ```text
//! ┌──────────────┬────────────────────┬────────────────────┬───────────────────┐
//! │ Page         │ Title              │ Records heading    │ Empty message     │
//! ├──────────────┼────────────────────┼────────────────────┼───────────────────┤
//! │ Purchases    │ Manage Purchases   │ Purchase Records   │ No purchases found│
//! │ Sales        │ Manage Sales       │ Sales Records      │ No sales found    │
//! │ Orders       │ Manage Orders      │ Order Records      │ No orders found   │
//! └──────────────┴────────────────────┴────────────────────┴───────────────────┘
//! ```

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use bizledger_core::{FieldValue, NewOrder, NewPurchase, NewSale, OrderStatus, Table};

/// A navigation target. Each page is backed by exactly one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Purchases,
    Sales,
    Orders,
}

impl Page {
    /// Navigation order.
    pub const ALL: [Page; 3] = [Page::Purchases, Page::Sales, Page::Orders];

    pub const fn table(&self) -> Table {
        match self {
            Page::Purchases => Table::Purchases,
            Page::Sales => Table::Sales,
            Page::Orders => Table::Orders,
        }
    }

    pub const fn title(&self) -> &'static str {
        match self {
            Page::Purchases => "Manage Purchases",
            Page::Sales => "Manage Sales",
            Page::Orders => "Manage Orders",
        }
    }

    pub const fn form_title(&self) -> &'static str {
        match self {
            Page::Purchases => "Add Purchase",
            Page::Sales => "Add Sale",
            Page::Orders => "Add Order",
        }
    }

    pub const fn records_heading(&self) -> &'static str {
        match self {
            Page::Purchases => "Purchase Records",
            Page::Sales => "Sales Records",
            Page::Orders => "Order Records",
        }
    }

    /// Shown in place of the record table when it has no rows.
    pub const fn empty_message(&self) -> &'static str {
        match self {
            Page::Purchases => "No purchases found.",
            Page::Sales => "No sales found.",
            Page::Orders => "No orders found.",
        }
    }

    /// Shown after a successful form submission.
    pub const fn added_message(&self) -> &'static str {
        match self {
            Page::Purchases => "Purchase added successfully!",
            Page::Sales => "Sale added successfully!",
            Page::Orders => "Order added successfully!",
        }
    }

    /// Label of the CSV download offered under the record table.
    pub fn download_label(&self) -> String {
        format!("Download {}", self.table().label())
    }
}

impl From<Table> for Page {
    fn from(table: Table) -> Self {
        match table {
            Table::Purchases => Page::Purchases,
            Table::Sales => Page::Sales,
            Table::Orders => Page::Orders,
        }
    }
}

// =============================================================================
// Forms
// =============================================================================

/// A submitted entry form.
///
/// Dates left blank default to today. Text fields are passed through
/// untouched; required-field checks happen in the Record Service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "page")]
pub enum Form {
    #[serde(rename = "purchases")]
    Purchase {
        product_name: String,
        price: f64,
        quantity: i64,
        vendor: String,
        purchase_date: Option<NaiveDate>,
    },
    #[serde(rename = "sales")]
    Sale {
        product_name: String,
        price: f64,
        quantity: i64,
        customer: String,
        sale_date: Option<NaiveDate>,
    },
    #[serde(rename = "orders")]
    Order {
        product_name: String,
        quantity: i64,
        #[serde(default)]
        status: OrderStatus,
        order_date: Option<NaiveDate>,
    },
}

impl Form {
    /// The page this form lives on.
    pub fn page(&self) -> Page {
        match self {
            Form::Purchase { .. } => Page::Purchases,
            Form::Sale { .. } => Page::Sales,
            Form::Order { .. } => Page::Orders,
        }
    }

    /// Positional values for the page's table, blank dates set to `today`.
    pub fn into_fields(self, today: NaiveDate) -> Vec<FieldValue> {
        match self {
            Form::Purchase {
                product_name,
                price,
                quantity,
                vendor,
                purchase_date,
            } => NewPurchase {
                product_name,
                price,
                quantity,
                vendor,
                purchase_date: purchase_date.unwrap_or(today),
            }
            .into_fields(),
            Form::Sale {
                product_name,
                price,
                quantity,
                customer,
                sale_date,
            } => NewSale {
                product_name,
                price,
                quantity,
                customer,
                sale_date: sale_date.unwrap_or(today),
            }
            .into_fields(),
            Form::Order {
                product_name,
                quantity,
                status,
                order_date,
            } => NewOrder {
                product_name,
                quantity,
                status,
                order_date: order_date.unwrap_or(today),
            }
            .into_fields(),
        }
    }
}

/// Today's date in local time, the default for blank form dates.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
