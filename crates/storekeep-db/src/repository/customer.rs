//! # Customer Repository
//!
//! Database operations for customers.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use storekeep_core::{Customer, NewCustomer};

/// Repository for customer database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.customers();
///
/// let id = repo.insert(&NewCustomer { name: "Alice".into(), phone: "555".into(), email: None }).await?;
/// let everyone = repo.list().await?;
/// ```
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: SqlitePool,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CustomerRepository { pool }
    }

    /// Lists every customer, most recently added first.
    pub async fn list(&self) -> DbResult<Vec<Customer>> {
        let customers = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, phone, email
            FROM customers
            ORDER BY id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = customers.len(), "Listed customers");
        Ok(customers)
    }

    /// Gets a customer by ID.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>(
            "SELECT id, name, phone, email FROM customers WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    /// Inserts a customer and returns its new id.
    pub async fn insert(&self, customer: &NewCustomer) -> DbResult<i64> {
        debug!(name = %customer.name, "Inserting customer");

        let result = sqlx::query("INSERT INTO customers (name, phone, email) VALUES (?1, ?2, ?3)")
            .bind(&customer.name)
            .bind(&customer.phone)
            .bind(customer.email.as_deref())
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_rowid())
    }

    /// Deletes a customer.
    ///
    /// Returns `false` when no row had that id. Sales and dues referencing
    /// the customer are left untouched.
    pub async fn delete(&self, id: i64) -> DbResult<bool> {
        debug!(id, "Deleting customer");

        let result = sqlx::query("DELETE FROM customers WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Counts customers (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
