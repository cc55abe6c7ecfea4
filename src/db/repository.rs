//! Database repository for CRUD operations.
//!
//! Uses prepared statements for data integrity.

use chrono::Utc;
use sqlx::{Row, SqlitePool};

use crate::errors::AppError;
use crate::models::Item;

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all items in ascending timestamp order.
    ///
    /// Items created within the same instant are tie-broken by id so list
    /// offsets resolve deterministically.
    pub async fn list_items(&self) -> Result<Vec<Item>, AppError> {
        let rows =
            sqlx::query("SELECT id, timestamp, image_url FROM items ORDER BY timestamp, id")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows.iter().map(item_from_row).collect())
    }

    /// Insert a new item with the current time as its timestamp.
    pub async fn insert_item(&self, image_url: Option<&str>) -> Result<Item, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        sqlx::query("INSERT INTO items (id, timestamp, image_url) VALUES (?, ?, ?)")
            .bind(&id)
            .bind(&now)
            .bind(image_url)
            .execute(&self.pool)
            .await?;

        Ok(Item {
            id,
            timestamp: now,
            image_url: image_url.map(|u| u.to_string()),
        })
    }

    /// Delete an item.
    pub async fn delete_item(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Item {} not found", id)));
        }

        Ok(())
    }

    /// Delete every item and return how many were removed.
    pub async fn delete_all_items(&self) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM items").execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    /// Count stored items.
    pub async fn count_items(&self) -> Result<i64, AppError> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM items")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.get("n"))
    }
}

// Helper function for row conversion

fn item_from_row(row: &sqlx::sqlite::SqliteRow) -> Item {
    Item {
        id: row.get("id"),
        timestamp: row.get("timestamp"),
        image_url: row.get("image_url"),
    }
}
