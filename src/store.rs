//! Persistence for clothing items.
//!
//! [`ClothingStore`] is the only code that talks to the `clothing_items` table.
//! Every mutating call runs inside its own transaction: it either commits
//! before returning `Ok`, or the transaction is dropped and SQLite rolls it back.

use sqlx::{Sqlite, SqlitePool, Transaction};

use crate::error::AppResult;
use crate::types::{ClothingItem, ItemFilter, NewClothingItem, UpdateItemRequest};

const SELECT_COLUMNS: &str =
    "SELECT id, name, description, category, price, size, color, stock, image_url FROM clothing_items";

/// Cloneable handle over the connection pool, passed to handlers via `AppState`.
#[derive(Clone)]
pub struct ClothingStore {
    db: SqlitePool,
}

impl ClothingStore {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.db
    }

    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clothing_items").fetch_one(&self.db).await?;
        Ok(count)
    }

    /// All items matching every supplied filter, in id order.
    pub async fn list(&self, filter: &ItemFilter) -> AppResult<Vec<ClothingItem>> {
        tracing::debug!(?filter, "Listing clothing items");
        let sql = format!(
            "{} WHERE (?1 IS NULL OR category = ?1) AND (?2 IS NULL OR size = ?2) AND (?3 IS NULL OR color = ?3) ORDER BY id",
            SELECT_COLUMNS
        );
        let items = sqlx::query_as::<_, ClothingItem>(&sql)
            .bind(filter.category.as_deref())
            .bind(filter.size.as_deref())
            .bind(filter.color.as_deref())
            .fetch_all(&self.db)
            .await?;
        Ok(items)
    }

    pub async fn get(&self, id: i64) -> AppResult<Option<ClothingItem>> {
        let sql = format!("{} WHERE id = ?1", SELECT_COLUMNS);
        let item = sqlx::query_as::<_, ClothingItem>(&sql).bind(id).fetch_optional(&self.db).await?;
        Ok(item)
    }

    pub async fn create(&self, item: &NewClothingItem) -> AppResult<ClothingItem> {
        let mut tx = self.db.begin().await?;
        let created = insert(&mut tx, item).await?;
        tx.commit().await?;
        tracing::info!(id = created.id, name = %created.name, "Created clothing item");
        Ok(created)
    }

    /// Applies a partial update. Returns `Ok(None)` without writing when `id`
    /// does not exist.
    pub async fn update(&self, id: i64, changes: &UpdateItemRequest) -> AppResult<Option<ClothingItem>> {
        let mut tx = self.db.begin().await?;
        let sql = format!("{} WHERE id = ?1", SELECT_COLUMNS);
        let Some(mut item) = sqlx::query_as::<_, ClothingItem>(&sql).bind(id).fetch_optional(&mut *tx).await?
        else {
            return Ok(None);
        };

        changes.apply_to(&mut item)?;

        sqlx::query(
            r#"UPDATE clothing_items
               SET name = ?1, description = ?2, category = ?3, price = ?4,
                   size = ?5, color = ?6, stock = ?7, image_url = ?8
               WHERE id = ?9"#,
        )
        .bind(&item.name)
        .bind(item.description.as_deref())
        .bind(&item.category)
        .bind(item.price)
        .bind(&item.size)
        .bind(&item.color)
        .bind(item.stock)
        .bind(item.image_url.as_deref())
        .bind(id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::info!(id, "Updated clothing item");
        Ok(Some(item))
    }

    /// Hard delete. Returns `false` when `id` does not exist.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let mut tx = self.db.begin().await?;
        let affected = sqlx::query("DELETE FROM clothing_items WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        if affected == 0 {
            return Ok(false);
        }
        tx.commit().await?;
        tracing::info!(id, "Deleted clothing item");
        Ok(true)
    }

    /// Distinct categories in the order SQLite yields them.
    pub async fn categories(&self) -> AppResult<Vec<String>> {
        let categories: Vec<String> =
            sqlx::query_scalar("SELECT DISTINCT category FROM clothing_items").fetch_all(&self.db).await?;
        Ok(categories)
    }

    /// Inserts every item in one transaction with a single commit.
    pub async fn insert_batch(&self, items: &[NewClothingItem]) -> AppResult<u64> {
        let mut tx = self.db.begin().await?;
        for item in items {
            insert(&mut tx, item).await?;
        }
        tx.commit().await?;
        Ok(items.len() as u64)
    }
}

async fn insert(tx: &mut Transaction<'_, Sqlite>, item: &NewClothingItem) -> AppResult<ClothingItem> {
    let created = sqlx::query_as::<_, ClothingItem>(
        r#"INSERT INTO clothing_items (name, description, category, price, size, color, stock, image_url)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
           RETURNING id, name, description, category, price, size, color, stock, image_url"#,
    )
    .bind(&item.name)
    .bind(&item.description)
    .bind(&item.category)
    .bind(item.price)
    .bind(&item.size)
    .bind(&item.color)
    .bind(item.stock)
    .bind(&item.image_url)
    .fetch_one(&mut **tx)
    .await?;
    Ok(created)
}
