//! # Domain Types
//!
//! The four entities of the store and the payloads used to create them.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐                         ┌─────────────────┐       │
//! │  │    Customer     │◄──────┐       ┌────────►│      Item       │       │
//! │  │  ─────────────  │       │       │         │  ─────────────  │       │
//! │  │  id             │       │       │         │  id             │       │
//! │  │  name, phone    │   ┌───┴───────┴───┐     │  name, stock    │       │
//! │  │  email?         │   │     Sale      │     │  price_cents    │       │
//! │  └────────▲────────┘   │  quantity     │     └─────────────────┘       │
//! │           │            │  total_cents  │                               │
//! │           │            │  created_at   │                               │
//! │  ┌────────┴────────┐   └───────────────┘                               │
//! │  │      Due        │                                                   │
//! │  │  amount_cents   │   References are plain ids: deleting a customer   │
//! │  │  created_at     │   or item keeps its sales/dues stored but drops   │
//! │  │                 │   them from the joined listings.                  │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rows are created once and deleted once; nothing is updated in place
//! except `Item::stock`, which each recorded sale decrements.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Customer
// =============================================================================

/// A customer of the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Customer {
    /// Auto-assigned row id.
    pub id: i64,
    pub name: String,
    /// Always present, possibly empty.
    pub phone: String,
    pub email: Option<String>,
}

/// A validated, trimmed customer ready to insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
}

// =============================================================================
// Item
// =============================================================================

/// An inventory item available for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Item {
    pub id: i64,
    pub name: String,
    /// Units on hand. Sales may drive this below zero.
    pub stock: i64,
    /// Current unit price in cents.
    pub price_cents: i64,
}

impl Item {
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub stock: i64,
    pub price_cents: i64,
}

// =============================================================================
// Sale
// =============================================================================

/// A sale row as listed on the sales page.
///
/// Carries the customer and item names joined in at query time. Sales whose
/// customer or item has since been deleted are not listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct SaleRecord {
    pub id: i64,
    pub customer_id: i64,
    pub customer_name: String,
    pub item_id: i64,
    pub item_name: String,
    pub quantity: i64,
    /// Price × quantity frozen at the time of sale.
    pub total_cents: i64,
    /// Local wall-clock time the row was inserted.
    pub created_at: NaiveDateTime,
}

impl SaleRecord {
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

/// A sale ready to be recorded, with its total already computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSale {
    pub customer_id: i64,
    pub item_id: i64,
    pub quantity: i64,
    pub total_cents: i64,
}

impl NewSale {
    /// Builds a sale for `quantity` units at `unit_price`.
    ///
    /// ## Errors
    /// `OutOfRange` on `quantity` when the total does not fit in `i64` cents.
    ///
    /// ## Example
    /// ```rust
    /// use storekeep_core::{Money, NewSale};
    ///
    /// let sale = NewSale::priced(1, 2, 3, Money::from_cents(250)).unwrap();
    /// assert_eq!(sale.total_cents, 750);
    /// ```
    pub fn priced(
        customer_id: i64,
        item_id: i64,
        quantity: i64,
        unit_price: Money,
    ) -> Result<Self, ValidationError> {
        let total = unit_price
            .checked_multiply_quantity(quantity)
            .ok_or_else(|| ValidationError::out_of_range("quantity"))?;

        Ok(NewSale {
            customer_id,
            item_id,
            quantity,
            total_cents: total.cents(),
        })
    }

    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Due
// =============================================================================

/// An amount a customer owes, independent of any sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct DueRecord {
    pub id: i64,
    pub customer_id: i64,
    pub customer_name: String,
    pub amount_cents: i64,
    pub created_at: NaiveDateTime,
}

impl DueRecord {
    #[inline]
    pub fn amount(&self) -> Money {
        Money::from_cents(self.amount_cents)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDue {
    pub customer_id: i64,
    /// Always strictly positive once validated.
    pub amount_cents: i64,
}

impl NewDue {
    #[inline]
    pub fn amount(&self) -> Money {
        Money::from_cents(self.amount_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priced_sale_total() {
        let sale = NewSale::priced(4, 9, 3, Money::from_cents(250)).unwrap();
        assert_eq!(sale.customer_id, 4);
        assert_eq!(sale.item_id, 9);
        assert_eq!(sale.quantity, 3);
        assert_eq!(sale.total_cents, 750);
    }

    #[test]
    fn test_priced_sale_of_free_item() {
        let sale = NewSale::priced(1, 1, 12, Money::zero()).unwrap();
        assert_eq!(sale.total_cents, 0);
    }

    #[test]
    fn test_priced_sale_total_overflow() {
        assert_eq!(
            NewSale::priced(1, 1, i64::MAX / 2, Money::from_cents(250)),
            Err(ValidationError::out_of_range("quantity"))
        );
        assert!(NewSale::priced(1, 1, i64::MAX, Money::zero()).is_ok());
    }

    #[test]
    fn test_item_price() {
        let item = Item {
            id: 1,
            name: "Pen".to_string(),
            stock: 10,
            price_cents: 250,
        };
        assert_eq!(item.price(), Money::from_cents(250));
    }
}
