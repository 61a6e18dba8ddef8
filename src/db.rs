use std::time::Duration;

use sqlx::{migrate::MigrateDatabase, sqlite::SqlitePoolOptions, Sqlite, SqlitePool};

use crate::config::DatabaseConfig;

/// Creates the SQLite file if needed and opens a pool with per-connection pragmas.
pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
    let db_url = &cfg.url;
    crate::config::ensure_sqlite_parent_dir(db_url)?;
    if !Sqlite::database_exists(db_url).await.unwrap_or(false) {
        tracing::info!("Creating SQLite database at {}", db_url);
        Sqlite::create_database(db_url).await?;
    }
    let pool = SqlitePoolOptions::new()
        .max_connections(cfg.max_connections)
        .acquire_timeout(Duration::from_secs(10))
        .after_connect(|conn, _meta| {
            Box::pin(async move {
                sqlx::query("PRAGMA busy_timeout=5000;").execute(&mut *conn).await?;
                Ok::<(), sqlx::Error>(())
            })
        })
        .connect(db_url)
        .await?;
    Ok(pool)
}

pub async fn init_db(pool: &SqlitePool) -> anyhow::Result<()> {
    if let Err(e) = sqlx::query("PRAGMA journal_mode=WAL;").execute(pool).await {
        tracing::warn!("Failed to set WAL journal mode: {}", e);
    }
    if let Err(e) = sqlx::query("PRAGMA synchronous=NORMAL;").execute(pool).await {
        tracing::warn!("Failed to set synchronous mode: {}", e);
    }

    // AUTOINCREMENT keeps ids of deleted items from being handed out again
    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS clothing_items (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            description TEXT NULL,
            category TEXT NOT NULL,
            price REAL NOT NULL,
            size TEXT NOT NULL,
            color TEXT NOT NULL,
            stock INTEGER NOT NULL DEFAULT 0,
            image_url TEXT NULL
        )"#,
    )
    .execute(pool)
    .await?;

    let indexes = [
        (
            "idx_clothing_items_category",
            "CREATE INDEX IF NOT EXISTS idx_clothing_items_category ON clothing_items(category)",
        ),
        (
            "idx_clothing_items_size_color",
            "CREATE INDEX IF NOT EXISTS idx_clothing_items_size_color ON clothing_items(size, color)",
        ),
    ];
    for (name, query) in indexes {
        if let Err(e) = sqlx::query(query).execute(pool).await {
            tracing::warn!("Failed to create index {}: {}", name, e);
        }
    }

    Ok(())
}
