//! # Item Repository
//!
//! Database operations for inventory items.
//!
//! Stock is written here only on insert. Recording a sale decrements it
//! from inside [`SaleRepository::record`](crate::SaleRepository::record),
//! in the same transaction as the sale row.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use storekeep_core::{Item, NewItem};

/// Repository for item database operations.
#[derive(Debug, Clone)]
pub struct ItemRepository {
    pool: SqlitePool,
}

impl ItemRepository {
    /// Creates a new ItemRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ItemRepository { pool }
    }

    /// Lists every item, most recently added first.
    pub async fn list(&self) -> DbResult<Vec<Item>> {
        let items = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, name, stock, price_cents
            FROM items
            ORDER BY id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = items.len(), "Listed items");
        Ok(items)
    }

    /// Gets an item by ID.
    ///
    /// The add-sale flow reads the current unit price from here.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Item>> {
        let item = sqlx::query_as::<_, Item>(
            "SELECT id, name, stock, price_cents FROM items WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    /// Inserts an item and returns its new id.
    pub async fn insert(&self, item: &NewItem) -> DbResult<i64> {
        debug!(name = %item.name, stock = item.stock, price_cents = item.price_cents, "Inserting item");

        let result =
            sqlx::query("INSERT INTO items (name, stock, price_cents) VALUES (?1, ?2, ?3)")
                .bind(&item.name)
                .bind(item.stock)
                .bind(item.price_cents)
                .execute(&self.pool)
                .await?;

        Ok(result.last_insert_rowid())
    }

    /// Deletes an item. Returns `false` when no row had that id.
    pub async fn delete(&self, id: i64) -> DbResult<bool> {
        debug!(id, "Deleting item");

        let result = sqlx::query("DELETE FROM items WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Counts items (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM items")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    #[tokio::test]
    async fn test_insert_and_get() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.items();

        let id = repo
            .insert(&NewItem {
                name: "Pen".to_string(),
                stock: 10,
                price_cents: 250,
            })
            .await
            .unwrap();

        let item = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(item.name, "Pen");
        assert_eq!(item.stock, 10);
        assert_eq!(item.price().to_string(), "2.50");

        assert!(repo.get_by_id(id + 1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_newest_first_and_delete() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.items();

        for name in ["Pen", "Pad", "Ink"] {
            repo.insert(&NewItem {
                name: name.to_string(),
                stock: 1,
                price_cents: 100,
            })
            .await
            .unwrap();
        }

        let names: Vec<String> = repo.list().await.unwrap().into_iter().map(|i| i.name).collect();
        assert_eq!(names, ["Ink", "Pad", "Pen"]);

        let pad = repo.list().await.unwrap()[1].id;
        assert!(repo.delete(pad).await.unwrap());
        assert!(!repo.delete(pad).await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 2);
    }
}
