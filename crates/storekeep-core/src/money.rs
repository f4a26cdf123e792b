//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    2.50 * 3 may print as 7.499999999  ❌                                │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    250 cents * 3 = 750 cents, always                                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Prices and due amounts arrive from HTML forms as decimal text. They are
//! parsed exactly with `rust_decimal` and rounded to whole cents once, at the
//! edge; everything downstream is `i64` arithmetic.
//!
//! ## Usage
//! ```rust
//! use storekeep_core::money::Money;
//!
//! let price = Money::from_cents(250); // 2.50
//! assert_eq!(price.checked_multiply_quantity(3), Some(Money::from_cents(750)));
//!
//! assert_eq!(Money::parse("2.50"), Some(price));
//! assert_eq!(Money::parse("abc"), None);
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// Signed so that parsing a negative amount is representable; the
/// validation layer decides whether a negative value is acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use storekeep_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is strictly greater than zero.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a unit price by a quantity.
    ///
    /// Returns `None` when the product does not fit in `i64` cents.
    ///
    /// ## Example
    /// ```rust
    /// use storekeep_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(250);
    /// assert_eq!(unit_price.checked_multiply_quantity(3), Some(Money::from_cents(750)));
    /// assert_eq!(unit_price.checked_multiply_quantity(i64::MAX), None);
    /// ```
    #[inline]
    pub fn checked_multiply_quantity(&self, qty: i64) -> Option<Self> {
        self.0.checked_mul(qty).map(Money)
    }

    /// Parses a decimal string such as `"2.50"`, `" 7 "` or `"1.5e1"`.
    ///
    /// Fractions of a cent are rounded half away from zero (`0.125` → 13
    /// cents). Returns `None` for anything that is not a number or does not
    /// fit in `i64` cents.
    pub fn parse(raw: &str) -> Option<Money> {
        let raw = raw.trim();
        let value = Decimal::from_str(raw)
            .or_else(|_| Decimal::from_scientific(raw))
            .ok()?;

        let cents = value
            .checked_mul(Decimal::ONE_HUNDRED)?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

        cents.to_i64().map(Money)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders as a plain two-decimal number, e.g. `7.50` or `-5.00`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
