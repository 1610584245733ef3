//! # Seed Data Generator
//!
//! Populates the database with sample purchases, sales and orders for demos.
//!
//! ## Usage
//! ```bash
//! # Generate 30 records per table (default)
//! cargo run -p bizledger-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p bizledger-db --bin seed -- --count 200
//!
//! # Specify database path
//! cargo run -p bizledger-db --bin seed -- --db ./data/ledger.db
//! ```
//!
//! ## Generated Records
//! - Purchases from a rotating set of vendors
//! - Sales to a rotating set of customers, priced above purchase cost
//! - Orders, every third one already Completed
//!
//! Dates walk backwards one day per record from today.

use chrono::{Duration, Local, NaiveDate};
use std::env;

use bizledger_core::{NewOrder, NewPurchase, NewSale, OrderStatus, Table, DEFAULT_DATABASE_FILE};
use bizledger_db::{Database, DbConfig, RecordService};

/// Product names for realistic test data
const PRODUCTS: &[&str] = &[
    "Widget",
    "Gadget",
    "Sprocket",
    "Bolts, M6",
    "Hex Nut",
    "Washer",
    "Hinge",
    "Bracket",
    "Cable Tie",
    "Gasket",
];

const VENDORS: &[&str] = &["Acme Co", "Globex", "Initech", "Umbrella Supply"];

const CUSTOMERS: &[&str] = &["Jane Doe", "John Smith", "Hooli", "Vandelay Industries"];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 30;
    let mut db_path = String::from(DEFAULT_DATABASE_FILE);

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(30);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("bizledger Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Records per table (default: 30)");
                println!(
                    "  -d, --db <PATH>    Database file path (default: ./{})",
                    DEFAULT_DATABASE_FILE
                );
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("bizledger Seed Data Generator");
    println!("=============================");
    println!("Database: {}", db_path);
    println!("Records per table: {}", count);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    let service = RecordService::new(db);

    println!("✓ Connected to database");
    println!("✓ Tables ready");

    // Check existing records
    for table in Table::ALL {
        let existing = service.count(table).await?;
        if existing > 0 {
            println!("⚠ {} already has {} records", table.label(), existing);
            println!("  Skipping seed to avoid duplicates.");
            println!("  Delete the database file to regenerate.");
            return Ok(());
        }
    }

    let today = Local::now().date_naive();
    let start = std::time::Instant::now();

    let mut generated = 0;
    for n in 0..count {
        // Dates walk back one day per record; stop at the calendar's start.
        let Some(date) = days_before(today, n) else {
            println!("⚠ Reached the earliest representable date after {} records", n);
            break;
        };
        let product = PRODUCTS[n % PRODUCTS.len()];
        let cost = 1.25 + ((n * 37) % 900) as f64 / 100.0;

        service
            .add_purchase(NewPurchase {
                product_name: product.to_string(),
                price: cost,
                quantity: 10 + (n % 40) as i64,
                vendor: VENDORS[n % VENDORS.len()].to_string(),
                purchase_date: date,
            })
            .await?;

        service
            .add_sale(NewSale {
                product_name: product.to_string(),
                price: (cost * 1.4 * 100.0).round() / 100.0,
                quantity: 1 + (n % 7) as i64,
                customer: CUSTOMERS[n % CUSTOMERS.len()].to_string(),
                sale_date: date,
            })
            .await?;

        let status = if n % 3 == 0 {
            OrderStatus::Completed
        } else {
            OrderStatus::Pending
        };
        service
            .add_order(NewOrder {
                product_name: product.to_string(),
                quantity: 1 + (n % 12) as i64,
                status,
                order_date: date,
            })
            .await?;

        generated += 1;
    }

    let elapsed = start.elapsed();
    println!();
    println!("✓ Generated {} records per table in {:?}", generated, elapsed);

    let pending = service.pending_order_ids().await?;
    println!("  Pending orders: {}", pending.len());

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

fn days_before(today: NaiveDate, days: usize) -> Option<NaiveDate> {
    let days = i64::try_from(days).ok()?;
    today.checked_sub_signed(Duration::try_days(days)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_before() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(days_before(today, 0), Some(today));
        assert_eq!(days_before(today, 1), NaiveDate::from_ymd_opt(2024, 2, 29));
    }

    #[test]
    fn test_days_before_stops_at_calendar_start() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(days_before(NaiveDate::MIN, 1), None);
        assert_eq!(days_before(today, usize::MAX), None);
        assert_eq!(days_before(today, 1_000_000_000), None);
    }
}
