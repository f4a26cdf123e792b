//! # Seed Data Generator
//!
//! Populates an empty store with sample customers and items for development.
//!
//! ## Usage
//! ```bash
//! # Seed ./store.db (default)
//! cargo run -p storekeep-db --bin seed
//!
//! # Specify database path
//! cargo run -p storekeep-db --bin seed -- --db ./data/store.db
//! ```
//!
//! Nothing is written when the database already holds customers or items.

use std::env;
use storekeep_core::{validation, NewCustomer};
use storekeep_db::{Database, DbConfig};

/// (name, phone, email)
const CUSTOMERS: &[(&str, &str, &str)] = &[
    ("Alice Martin", "555-0101", "alice@example.com"),
    ("Bob Singh", "555-0102", ""),
    ("Carla Gomez", "555-0103", "carla@example.com"),
    ("Dev Patel", "", ""),
];

/// (name, stock, price)
const ITEMS: &[(&str, &str, &str)] = &[
    ("Ballpoint Pen", "120", "1.25"),
    ("Notebook A5", "40", "3.50"),
    ("Stapler", "8", "7.99"),
    ("Printer Paper (500)", "25", "6.40"),
    ("Highlighter", "60", "0.95"),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./store.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Storekeep Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./store.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Storekeep Seed Data Generator");
    println!("=============================");
    println!("Database: {}", db_path);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Schema ready");

    let customers = db.customers().count().await?;
    let items = db.items().count().await?;
    if customers > 0 || items > 0 {
        println!(
            "⚠ Database already has {} customers and {} items",
            customers, items
        );
        println!("  Skipping seed to avoid duplicates.");
        return Ok(());
    }

    for &(name, phone, email) in CUSTOMERS {
        let customer: NewCustomer =
            validation::validate_customer(Some(name), Some(phone), Some(email))?;
        db.customers().insert(&customer).await?;
    }
    println!("✓ Inserted {} customers", CUSTOMERS.len());

    for &(name, stock, price) in ITEMS {
        let item = validation::validate_item(Some(name), Some(stock), Some(price))?;
        db.items().insert(&item).await?;
    }
    println!("✓ Inserted {} items", ITEMS.len());

    db.close().await;

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
