//! # storekeep-core: Domain Types for Storekeep
//!
//! This crate holds the data model of the store and the rules applied to
//! submitted form values before anything touches the database.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storekeep Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Browser (HTML forms)                         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ POST /add_item, GET /delete_sale/7     │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    storekeep-web (axum handlers)                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ storekeep-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌─────────────┐                │   │
//! │  │   │   types   │  │   money   │  │ validation  │                │   │
//! │  │   │ Customer  │  │   Money   │  │ parse_*     │                │   │
//! │  │   │ Item/Sale │  │ from_str  │  │ validate_*  │                │   │
//! │  │   └───────────┘  └───────────┘  └─────────────┘                │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 storekeep-db (Database Layer)                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Entities (Customer, Item, Sale, Due) and their insert payloads
//! - [`money`] - Money type with integer arithmetic
//! - [`error`] - Validation error type
//! - [`validation`] - Form value parsing and validation
//!
//! ## Example Usage
//!
//! ```rust
//! use storekeep_core::money::Money;
//!
//! let price = Money::parse("2.50").unwrap();
//! assert_eq!(price.checked_multiply_quantity(3).map(|t| t.cents()), Some(750));
//! ```

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

pub use error::ValidationError;
pub use money::Money;
pub use types::*;
