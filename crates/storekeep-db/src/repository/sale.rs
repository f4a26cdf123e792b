//! # Sale Repository
//!
//! Database operations for sales.
//!
//! ## Recording a Sale
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       One Transaction                                   │
//! │                                                                         │
//! │  BEGIN                                                                 │
//! │    INSERT INTO sales (customer_id, item_id, quantity, total_cents)     │
//! │    UPDATE items SET stock = stock - quantity WHERE id = item_id        │
//! │  COMMIT                                                                │
//! │                                                                         │
//! │  Either both rows change or neither does. Stock is never checked for   │
//! │  availability: selling 5 of an item with 2 on hand leaves -3. An item  │
//! │  id that matches no row updates nothing and the sale is still kept.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The only refusal is arithmetic: a decrement that would leave the `i64`
//! range rolls back with [`DbError::StockOutOfRange`].

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use storekeep_core::{NewSale, SaleRecord};

/// Repository for sale database operations.
#[derive(Debug, Clone)]
pub struct SaleRepository {
    pool: SqlitePool,
}

impl SaleRepository {
    /// Creates a new SaleRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SaleRepository { pool }
    }

    /// Lists sales newest first, with customer and item names.
    ///
    /// Sales whose customer or item no longer exists stay stored (and
    /// counted) but are not listed. Rows created within the same second are
    /// ordered by id.
    pub async fn list(&self) -> DbResult<Vec<SaleRecord>> {
        let sales = sqlx::query_as::<_, SaleRecord>(
            r#"
            SELECT
                s.id,
                s.customer_id,
                c.name AS customer_name,
                s.item_id,
                i.name AS item_name,
                s.quantity,
                s.total_cents,
                s.created_at
            FROM sales s
            JOIN customers c ON c.id = s.customer_id
            JOIN items i ON i.id = s.item_id
            ORDER BY s.created_at DESC, s.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = sales.len(), "Listed sales");
        Ok(sales)
    }

    /// Records a sale and decrements the item's stock atomically.
    ///
    /// ## Returns
    /// The id of the new sale row.
    ///
    /// ## Errors
    /// `StockOutOfRange` when the new stock would not fit in `i64`; neither
    /// row is written.
    pub async fn record(&self, sale: &NewSale) -> DbResult<i64> {
        debug!(
            customer_id = sale.customer_id,
            item_id = sale.item_id,
            quantity = sale.quantity,
            total_cents = sale.total_cents,
            "Recording sale"
        );

        // Range of current stock values for which `stock - quantity` fits
        let (lowest, highest) = if sale.quantity >= 0 {
            (i64::MIN + sale.quantity, i64::MAX)
        } else {
            (i64::MIN, i64::MAX + sale.quantity)
        };

        let mut tx = self.pool.begin().await.map_err(DbError::transaction)?;

        let sale_id = sqlx::query(
            r#"
            INSERT INTO sales (customer_id, item_id, quantity, total_cents)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(sale.customer_id)
        .bind(sale.item_id)
        .bind(sale.quantity)
        .bind(sale.total_cents)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        let updated = sqlx::query(
            "UPDATE items SET stock = stock - ?1 WHERE id = ?2 AND stock BETWEEN ?3 AND ?4",
        )
        .bind(sale.quantity)
        .bind(sale.item_id)
        .bind(lowest)
        .bind(highest)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if updated == 0 {
            let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM items WHERE id = ?1)")
                .bind(sale.item_id)
                .fetch_one(&mut *tx)
                .await?;

            if exists {
                // Dropping `tx` rolls back the sale row
                return Err(DbError::StockOutOfRange {
                    item_id: sale.item_id,
                    quantity: sale.quantity,
                });
            }

            debug!(item_id = sale.item_id, "Sold item has no row; stock untouched");
        }

        tx.commit().await.map_err(DbError::transaction)?;

        Ok(sale_id)
    }

    /// Deletes a sale. Returns `false` when no row had that id.
    ///
    /// Stock is not restored.
    pub async fn delete(&self, id: i64) -> DbResult<bool> {
        debug!(id, "Deleting sale");

        let result = sqlx::query("DELETE FROM sales WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Counts stored sales, listed or not (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sales")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
