//! SQLite-backed item store

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{debug, info};

use crate::model::{Item, NewItem};

use super::errors::{StoreError, StoreResult};

const CREATE_ITEMS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS items (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        quantity INTEGER NOT NULL,
        price REAL NOT NULL,
        created_at DATETIME DEFAULT CURRENT_TIMESTAMP
    )
"#;

/// Handle to the items table.
///
/// Cloning is cheap and every clone shares the same single connection.
#[derive(Debug, Clone)]
pub struct ItemStore {
    pool: SqlitePool,
}

impl ItemStore {
    /// Open the database at `database_url`, creating the file if needed,
    /// and make sure the items table exists.
    ///
    /// Accepts any SQLite URL understood by sqlx, including
    /// `sqlite::memory:` for a private in-memory database.
    pub async fn connect(database_url: &str) -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| StoreError::InvalidUrl(e.to_string()))?
            .create_if_missing(true);

        // One connection, never recycled: an in-memory database lives exactly
        // as long as its connection.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.ensure_schema().await?;

        info!(database_url, "item store opened");
        Ok(store)
    }

    /// Create the items table if it is absent. Safe to call repeatedly.
    pub async fn ensure_schema(&self) -> StoreResult<()> {
        sqlx::query(CREATE_ITEMS_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    /// All items, newest first. Items created within the same second are
    /// ordered by id, newest first.
    pub async fn list(&self) -> StoreResult<Vec<Item>> {
        let items = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, name, quantity, price, created_at
            FROM items
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }

    pub async fn get(&self, id: i64) -> StoreResult<Option<Item>> {
        let item = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, name, quantity, price, created_at
            FROM items
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(item)
    }

    /// Insert a new item. The store assigns `id` and `created_at`.
    pub async fn create(&self, input: &NewItem) -> StoreResult<Item> {
        let item = sqlx::query_as::<_, Item>(
            r#"
            INSERT INTO items (name, quantity, price)
            VALUES (?, ?, ?)
            RETURNING id, name, quantity, price, created_at
            "#,
        )
        .bind(&input.name)
        .bind(input.quantity)
        .bind(input.price)
        .fetch_one(&self.pool)
        .await?;

        debug!(id = item.id, "item created");
        Ok(item)
    }

    /// Replace name, quantity and price of an existing item.
    ///
    /// Returns `None` when no item has this id.
    pub async fn update(&self, id: i64, input: &NewItem) -> StoreResult<Option<Item>> {
        let item = sqlx::query_as::<_, Item>(
            r#"
            UPDATE items
            SET name = ?, quantity = ?, price = ?
            WHERE id = ?
            RETURNING id, name, quantity, price, created_at
            "#,
        )
        .bind(&input.name)
        .bind(input.quantity)
        .bind(input.price)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        if item.is_some() {
            debug!(id, "item updated");
        }
        Ok(item)
    }

    /// Remove an item. Returns `false` when no item has this id.
    pub async fn delete(&self, id: i64) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            debug!(id, "item deleted");
        }
        Ok(deleted)
    }

    /// Close the connection. Subsequent operations fail.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("item store closed");
    }

    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }
}
