use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Categories shipped with the original question bank. Inserted on first run
/// so a fresh database is immediately playable.
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

pub async fn connect(database_url: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .context("Invalid database URL")?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .context("Failed to open database")?;

    Ok(pool)
}

pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS category (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            type TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await
    .context("Failed to create category table")?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS question (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            question TEXT NOT NULL,
            answer TEXT NOT NULL,
            category INTEGER NOT NULL REFERENCES category(id),
            difficulty INTEGER NOT NULL
        )",
    )
    .execute(pool)
    .await
    .context("Failed to create question table")?;

    Ok(())
}

/// Idempotent: only seeds when the category table is empty.
pub async fn seed_categories(pool: &SqlitePool) -> Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM category")
        .fetch_one(pool)
        .await
        .context("Failed to count categories")?;

    if count > 0 {
        tracing::debug!("Category table already populated, skipping seed");
        return Ok(());
    }

    for kind in DEFAULT_CATEGORIES {
        sqlx::query("INSERT INTO category (type) VALUES (?1)")
            .bind(kind)
            .execute(pool)
            .await
            .context("Failed to seed category")?;
    }

    tracing::info!("Seeded {} default categories", DEFAULT_CATEGORIES.len());

    Ok(())
}
