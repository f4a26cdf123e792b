//! # Error Types
//!
//! Validation errors for submitted form values.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storekeep-core (this file)                                            │
//! │  └── ValidationError  - A submission that must not be written          │
//! │                                                                         │
//! │  storekeep-db                                                          │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  storekeep-web                                                         │
//! │  └── AppError         - What the HTTP layer renders                    │
//! │                                                                         │
//! │  ValidationError never reaches the browser: the handler logs it and    │
//! │  redirects back to the listing page.                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank after trimming.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be strictly greater than zero.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value could not be read as the expected type.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value would push a derived integer past the `i64` range.
    #[error("{field} is out of range")]
    OutOfRange { field: String },
}

impl ValidationError {
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }

    pub fn must_be_positive(field: impl Into<String>) -> Self {
        ValidationError::MustBePositive {
            field: field.into(),
        }
    }

    pub fn out_of_range(field: impl Into<String>) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
        }
    }
}
