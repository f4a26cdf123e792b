//! # Validation Module
//!
//! Turns raw HTML form values into insert payloads.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Two Kinds of Bad Input                             │
//! │                                                                         │
//! │  Unparseable number (stock="ten", price="abc", quantity="-2")          │
//! │  └── parse_* : coerce to a default, keep going                         │
//! │                                                                         │
//! │  Missing required value (blank name, no customer, amount <= 0)         │
//! │  └── validate_* : Err(ValidationError), the write is skipped           │
//! │                                                                         │
//! │  Either way the browser is redirected to the listing page; no          │
//! │  message is shown.                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every function takes `Option<&str>` because any form field may be absent
//! from a submission.
//!
//! ## Usage
//! ```rust
//! use storekeep_core::validation::{parse_quantity, validate_item};
//!
//! assert_eq!(parse_quantity(Some("0")), 1);
//!
//! let item = validate_item(Some(" Pen "), Some("10"), Some("abc")).unwrap();
//! assert_eq!(item.name, "Pen");
//! assert_eq!(item.price_cents, 0);
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{NewCustomer, NewDue, NewItem};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Quantity used when the submitted one is unusable.
pub const DEFAULT_QUANTITY: i64 = 1;

// =============================================================================
// Field Parsers
// =============================================================================

fn trimmed(raw: Option<&str>) -> &str {
    raw.map(str::trim).unwrap_or("")
}

/// Parses a stock count, defaulting to 0.
///
/// Negative counts are accepted as entered.
pub fn parse_stock(raw: Option<&str>) -> i64 {
    trimmed(raw).parse().unwrap_or(0)
}

/// Parses a sale quantity.
///
/// Anything that is not a positive integer becomes [`DEFAULT_QUANTITY`].
///
/// ## Example
/// ```rust
/// use storekeep_core::validation::parse_quantity;
///
/// assert_eq!(parse_quantity(Some("3")), 3);
/// assert_eq!(parse_quantity(Some("-4")), 1);
/// assert_eq!(parse_quantity(Some("two")), 1);
/// assert_eq!(parse_quantity(None), 1);
/// ```
pub fn parse_quantity(raw: Option<&str>) -> i64 {
    match trimmed(raw).parse::<i64>() {
        Ok(qty) if qty > 0 => qty,
        _ => DEFAULT_QUANTITY,
    }
}

/// Parses a decimal money value, defaulting to zero.
pub fn parse_money(raw: Option<&str>) -> Money {
    Money::parse(trimmed(raw)).unwrap_or_default()
}

/// Parses a price. Unparseable or negative prices become zero.
pub fn parse_price(raw: Option<&str>) -> Money {
    let price = parse_money(raw);
    if price.is_negative() {
        Money::zero()
    } else {
        price
    }
}

/// Parses a row id from a `<select>` value.
///
/// ## Errors
/// - `Required` when the field is absent or blank
/// - `InvalidFormat` when it is not an integer
pub fn parse_id(field: &str, raw: Option<&str>) -> ValidationResult<i64> {
    let raw = trimmed(raw);

    if raw.is_empty() {
        return Err(ValidationError::required(field));
    }

    raw.parse().map_err(|_| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: "must be an integer".to_string(),
    })
}

// =============================================================================
// Entity Validators
// =============================================================================

/// Validates an add-customer submission.
///
/// ## Rules
/// - `name` is trimmed and must not be empty
/// - `phone` is trimmed and stored even when empty
/// - `email` is trimmed; blank becomes `None`
pub fn validate_customer(
    name: Option<&str>,
    phone: Option<&str>,
    email: Option<&str>,
) -> ValidationResult<NewCustomer> {
    let name = trimmed(name);
    if name.is_empty() {
        return Err(ValidationError::required("name"));
    }

    let email = trimmed(email);

    Ok(NewCustomer {
        name: name.to_string(),
        phone: trimmed(phone).to_string(),
        email: (!email.is_empty()).then(|| email.to_string()),
    })
}

/// Validates an add-item submission.
///
/// ## Rules
/// - `name` is trimmed and must not be empty
/// - `stock` falls back to 0, `price` falls back to 0.00
pub fn validate_item(
    name: Option<&str>,
    stock: Option<&str>,
    price: Option<&str>,
) -> ValidationResult<NewItem> {
    let name = trimmed(name);
    if name.is_empty() {
        return Err(ValidationError::required("name"));
    }

    Ok(NewItem {
        name: name.to_string(),
        stock: parse_stock(stock),
        price_cents: parse_price(price).cents(),
    })
}

/// Validates an add-due submission.
///
/// ## Rules
/// - `customer_id` must be present and an integer
/// - `amount` falls back to 0 and must then be strictly positive
///
/// Positivity is checked on the amount after it is rounded to whole cents,
/// so `0.004` is rejected and `0.005` becomes a one-cent due. A stored due
/// is therefore never 0.00.
pub fn validate_due(customer_id: Option<&str>, amount: Option<&str>) -> ValidationResult<NewDue> {
    let customer_id = parse_id("customer_id", customer_id)?;

    let amount = parse_money(amount);
    if !amount.is_positive() {
        return Err(ValidationError::must_be_positive("amount"));
    }

    Ok(NewDue {
        customer_id,
        amount_cents: amount.cents(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
