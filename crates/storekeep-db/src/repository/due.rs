//! # Due Repository
//!
//! Outstanding amounts owed by customers. Each due is a standalone entry;
//! nothing sums or settles them.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use storekeep_core::{DueRecord, NewDue};

/// Repository for due database operations.
#[derive(Debug, Clone)]
pub struct DueRepository {
    pool: SqlitePool,
}

impl DueRepository {
    /// Creates a new DueRepository.
    pub fn new(pool: SqlitePool) -> Self {
        DueRepository { pool }
    }

    /// Lists dues newest first, with the customer's name.
    ///
    /// Dues whose customer no longer exists stay stored (and counted) but
    /// are not listed.
    pub async fn list(&self) -> DbResult<Vec<DueRecord>> {
        let dues = sqlx::query_as::<_, DueRecord>(
            r#"
            SELECT
                d.id,
                d.customer_id,
                c.name AS customer_name,
                d.amount_cents,
                d.created_at
            FROM dues d
            JOIN customers c ON c.id = d.customer_id
            ORDER BY d.created_at DESC, d.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = dues.len(), "Listed dues");
        Ok(dues)
    }

    /// Inserts a due and returns its new id.
    ///
    /// The customer id is stored as given, whether or not it exists.
    pub async fn insert(&self, due: &NewDue) -> DbResult<i64> {
        debug!(customer_id = due.customer_id, amount_cents = due.amount_cents, "Inserting due");

        let result = sqlx::query("INSERT INTO dues (customer_id, amount_cents) VALUES (?1, ?2)")
            .bind(due.customer_id)
            .bind(due.amount_cents)
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_rowid())
    }

    /// Deletes a due. Returns `false` when no row had that id.
    pub async fn delete(&self, id: i64) -> DbResult<bool> {
        debug!(id, "Deleting due");

        let result = sqlx::query("DELETE FROM dues WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Counts stored dues, listed or not (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM dues")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
