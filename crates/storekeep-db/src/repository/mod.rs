//! # Repository Module
//!
//! One repository per table, each a thin wrapper over a pool clone.
//!
//! ```text
//! Database
//!   ├── customers() → CustomerRepository  list / get_by_id / insert / delete
//!   ├── items()     → ItemRepository      list / get_by_id / insert / delete
//!   ├── sales()     → SaleRepository      list / record / delete
//!   └── dues()      → DueRepository       list / insert / delete
//! ```
//!
//! Every repository also has `count()` for diagnostics.

pub mod customer;
pub mod due;
pub mod item;
pub mod sale;
