//! # Database Error Types
//!
//! ```text
//! sqlx::Error / MigrateError
//!       │
//!       ▼
//! DbError (this module)
//!       │
//!       ├── StockOutOfRange ──► add_sale handler skips the sale, redirects
//!       │
//!       └── everything else ──► AppError (storekeep-web), generic 500 page
//! ```
//!
//! Nothing is retried.

use thiserror::Error;

/// Database operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// The database file could not be opened or the pool is closed.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Embedded schema could not be applied.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// A statement was rejected or its rows could not be decoded.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// A transaction could not be started or committed.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// Every pooled connection stayed busy past the acquire timeout.
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Selling `quantity` would take the item's stock below `i64::MIN`.
    ///
    /// SQLite would otherwise store the overflowed value as REAL. Nothing
    /// is written when this is returned.
    #[error("Selling {quantity} of item {item_id} would overflow its stock")]
    StockOutOfRange { item_id: i64, quantity: i64 },
}

impl DbError {
    /// Wraps an error raised while beginning or committing a transaction.
    pub fn transaction(err: sqlx::Error) -> Self {
        DbError::TransactionFailed(err.to_string())
    }
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,
            sqlx::Error::PoolClosed => DbError::ConnectionFailed("pool is closed".to_string()),
            sqlx::Error::Io(e) => DbError::ConnectionFailed(e.to_string()),
            sqlx::Error::Database(db_err) => DbError::QueryFailed(db_err.message().to_string()),
            other => DbError::QueryFailed(other.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
