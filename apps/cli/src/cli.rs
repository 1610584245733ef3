//! # Command Line
//!
//! ```text
//! bizledger [--database PATH] [--json] purchases list
//! bizledger purchases add --product-name Widget --price 9.99 --quantity 3 --vendor "Acme Co"
//! bizledger sales add --product-name Widget --price 14.50 --quantity 1 --customer Jane
//! bizledger orders add --product-name Gadget --quantity 2 [--status Completed] [--date 2024-02-01]
//! bizledger orders complete 3
//! bizledger orders export --out ./exports
//! bizledger health
//! ```

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use bizledger_core::validation::{parse_date, ValidationResult};
use bizledger_core::{OrderStatus, RecordId};

use crate::handlers::Request;
use crate::pages::{Form, Page};

#[derive(Debug, Parser)]
#[command(name = "bizledger", version, about = "Purchases, sales and orders for a small business")]
pub struct Cli {
    /// SQLite database file (overrides BIZLEDGER_DATABASE)
    #[arg(long, short = 'd', global = true)]
    pub database: Option<PathBuf>,

    /// Print the response as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage purchases
    Purchases {
        #[command(subcommand)]
        action: PurchaseAction,
    },
    /// Manage sales
    Sales {
        #[command(subcommand)]
        action: SaleAction,
    },
    /// Manage orders
    Orders {
        #[command(subcommand)]
        action: OrderAction,
    },
    /// Check the database connection and tables
    Health,
}

#[derive(Debug, Subcommand)]
pub enum PurchaseAction {
    /// Show every purchase
    List,
    /// Record a purchase
    Add(PurchaseArgs),
    /// Write Purchases.csv
    Export(ExportArgs),
}

#[derive(Debug, Subcommand)]
pub enum SaleAction {
    /// Show every sale
    List,
    /// Record a sale
    Add(SaleArgs),
    /// Write Sales.csv
    Export(ExportArgs),
}

#[derive(Debug, Subcommand)]
pub enum OrderAction {
    /// Show every order
    List,
    /// Record an order
    Add(OrderArgs),
    /// Mark a pending order as completed
    Complete {
        /// Order id
        id: i64,
    },
    /// Write Orders.csv
    Export(ExportArgs),
}

#[derive(Debug, Args)]
pub struct PurchaseArgs {
    #[arg(long)]
    pub product_name: String,
    #[arg(long, allow_negative_numbers = true)]
    pub price: f64,
    #[arg(long, allow_negative_numbers = true)]
    pub quantity: i64,
    #[arg(long)]
    pub vendor: String,
    /// Purchase date, YYYY-MM-DD (default: today)
    #[arg(long, value_parser = purchase_date)]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Args)]
pub struct SaleArgs {
    #[arg(long)]
    pub product_name: String,
    #[arg(long, allow_negative_numbers = true)]
    pub price: f64,
    #[arg(long, allow_negative_numbers = true)]
    pub quantity: i64,
    #[arg(long)]
    pub customer: String,
    /// Sale date, YYYY-MM-DD (default: today)
    #[arg(long, value_parser = sale_date)]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Args)]
pub struct OrderArgs {
    #[arg(long)]
    pub product_name: String,
    #[arg(long, allow_negative_numbers = true)]
    pub quantity: i64,
    /// Pending or Completed
    #[arg(long, default_value_t = OrderStatus::Pending)]
    pub status: OrderStatus,
    /// Order date, YYYY-MM-DD (default: today)
    #[arg(long, value_parser = order_date)]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output directory (overrides BIZLEDGER_EXPORT_DIR)
    #[arg(long)]
    pub out: Option<PathBuf>,
}

fn purchase_date(raw: &str) -> ValidationResult<NaiveDate> {
    parse_date("Purchase Date", raw)
}

fn sale_date(raw: &str) -> ValidationResult<NaiveDate> {
    parse_date("Sale Date", raw)
}

fn order_date(raw: &str) -> ValidationResult<NaiveDate> {
    parse_date("Order Date", raw)
}

/// What the binary should do after parsing.
#[derive(Debug)]
pub enum Invocation {
    /// Handle a request and print the page.
    Page(Request),
    /// Load a page and write its CSV download.
    Export(Page, Option<PathBuf>),
    Health,
}

impl Command {
    pub fn into_invocation(self) -> Invocation {
        match self {
            Command::Purchases { action } => match action {
                PurchaseAction::List => Invocation::Page(Request::Show(Page::Purchases)),
                PurchaseAction::Add(args) => Invocation::Page(Request::Submit(Form::Purchase {
                    product_name: args.product_name,
                    price: args.price,
                    quantity: args.quantity,
                    vendor: args.vendor,
                    purchase_date: args.date,
                })),
                PurchaseAction::Export(args) => Invocation::Export(Page::Purchases, args.out),
            },
            Command::Sales { action } => match action {
                SaleAction::List => Invocation::Page(Request::Show(Page::Sales)),
                SaleAction::Add(args) => Invocation::Page(Request::Submit(Form::Sale {
                    product_name: args.product_name,
                    price: args.price,
                    quantity: args.quantity,
                    customer: args.customer,
                    sale_date: args.date,
                })),
                SaleAction::Export(args) => Invocation::Export(Page::Sales, args.out),
            },
            Command::Orders { action } => match action {
                OrderAction::List => Invocation::Page(Request::Show(Page::Orders)),
                OrderAction::Add(args) => Invocation::Page(Request::Submit(Form::Order {
                    product_name: args.product_name,
                    quantity: args.quantity,
                    status: args.status,
                    order_date: args.date,
                })),
                OrderAction::Complete { id } => {
                    Invocation::Page(Request::MarkCompleted(RecordId(id)))
                }
                OrderAction::Export(args) => Invocation::Export(Page::Orders, args.out),
            },
            Command::Health => Invocation::Health,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("bizledger").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_list_maps_to_show() {
        let cli = parse(&["sales", "list"]);
        assert!(matches!(
            cli.command.into_invocation(),
            Invocation::Page(Request::Show(Page::Sales))
        ));
    }

    #[test]
    fn test_purchase_add_with_global_flags() {
        let cli = parse(&[
            "purchases",
            "add",
            "--product-name",
            "Widget",
            "--price",
            "9.99",
            "--quantity",
            "3",
            "--vendor",
            "Acme Co",
            "--date",
            "2024-01-15",
            "--json",
            "-d",
            "/tmp/ledger.db",
        ]);

        assert!(cli.json);
        assert_eq!(cli.database, Some(PathBuf::from("/tmp/ledger.db")));
        match cli.command.into_invocation() {
            Invocation::Page(Request::Submit(Form::Purchase {
                product_name,
                price,
                purchase_date,
                ..
            })) => {
                assert_eq!(product_name, "Widget");
                assert_eq!(price, 9.99);
                assert_eq!(purchase_date, NaiveDate::from_ymd_opt(2024, 1, 15));
            }
            other => panic!("unexpected invocation: {:?}", other),
        }
    }

    #[test]
    fn test_negative_price_reaches_the_form() {
        let cli = parse(&[
            "sales",
            "add",
            "--product-name",
            "Widget",
            "--price",
            "-1",
            "--quantity",
            "1",
            "--customer",
            "Jane",
        ]);
        match cli.command.into_invocation() {
            Invocation::Page(Request::Submit(Form::Sale { price, sale_date, .. })) => {
                assert_eq!(price, -1.0);
                assert_eq!(sale_date, None);
            }
            other => panic!("unexpected invocation: {:?}", other),
        }
    }

    #[test]
    fn test_order_status_defaults_to_pending() {
        let cli = parse(&["orders", "add", "--product-name", "Gadget", "--quantity", "2"]);
        match cli.command.into_invocation() {
            Invocation::Page(Request::Submit(Form::Order { status, .. })) => {
                assert_eq!(status, OrderStatus::Pending)
            }
            other => panic!("unexpected invocation: {:?}", other),
        }

        let cli = parse(&[
            "orders", "add", "--product-name", "Gadget", "--quantity", "2", "--status", "completed",
        ]);
        assert!(matches!(
            cli.command.into_invocation(),
            Invocation::Page(Request::Submit(Form::Order {
                status: OrderStatus::Completed,
                ..
            }))
        ));
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let result = Cli::try_parse_from([
            "bizledger", "orders", "add", "--product-name", "Gadget", "--quantity", "2",
            "--status", "Shipped",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_complete_and_export() {
        let cli = parse(&["orders", "complete", "3"]);
        assert!(matches!(
            cli.command.into_invocation(),
            Invocation::Page(Request::MarkCompleted(RecordId(3)))
        ));

        let cli = parse(&["orders", "export", "--out", "/tmp/out"]);
        match cli.command.into_invocation() {
            Invocation::Export(Page::Orders, Some(dir)) => {
                assert_eq!(dir, PathBuf::from("/tmp/out"))
            }
            other => panic!("unexpected invocation: {:?}", other),
        }
    }

    #[test]
    fn test_bad_date_is_rejected_with_field_name() {
        let err = Cli::try_parse_from([
            "bizledger",
            "orders",
            "add",
            "--product-name",
            "Gadget",
            "--quantity",
            "2",
            "--date",
            "2024-02-30",
        ])
        .unwrap_err();

        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        assert!(err.to_string().contains("Order Date has invalid format"));
    }
}
