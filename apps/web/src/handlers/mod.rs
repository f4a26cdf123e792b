//! # Route Handlers
//!
//! One module per page. Listing handlers render HTML; form handlers write
//! through `storekeep-db` and always answer with a 303 to the listing.
//!
//! ```text
//! GET  /                     home::index
//! GET  /customers            customer::list      POST /add_customer  customer::add
//! GET  /items                item::list          POST /add_item      item::add
//! GET  /sales                sale::list          POST /add_sale      sale::add
//! GET  /due                  due::list           POST /add_due       due::add
//! GET  /delete_<entity>/:id  <entity>::delete
//! GET  /health               health::check
//! ```

pub mod customer;
pub mod due;
pub mod health;
pub mod home;
pub mod item;
pub mod sale;
