//! # storekeep-db: Database Layer for Storekeep
//!
//! Owns the single SQLite file: schema creation plus one repository method
//! per entity operation. Uses sqlx for async access.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storekeep Data Flow                              │
//! │                                                                         │
//! │  HTTP handler (POST /add_sale)                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   storekeep-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────┐   ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories  │   │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │                │   │  (embedded)  │  │   │
//! │  │   │               │    │ CustomerRepo   │   │              │  │   │
//! │  │   │ SqlitePool    │◄───│ ItemRepo       │   │ 001_initial  │  │   │
//! │  │   │               │    │ SaleRepo       │   │   _schema    │  │   │
//! │  │   │               │    │ DueRepo        │   │              │  │   │
//! │  │   └───────────────┘    └────────────────┘   └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  store.db (customers, items, sales, dues)                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use storekeep_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("store.db")).await?;
//!
//! let items = db.items().list().await?;
//! let sale = NewSale::priced(customer_id, item_id, 3, item.price())?;
//! db.sales().record(&sale).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

pub use repository::customer::CustomerRepository;
pub use repository::due::DueRepository;
pub use repository::item::ItemRepository;
pub use repository::sale::SaleRepository;
