use anyhow::{Context, Result};
use sqlx::SqlitePool;
use std::collections::BTreeMap;

use crate::models::Category;

pub struct CategoryService {
    db: SqlitePool,
}

impl CategoryService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn list_all(&self) -> Result<Vec<Category>> {
        sqlx::query_as::<_, Category>("SELECT id, type FROM category ORDER BY id")
            .fetch_all(&self.db)
            .await
            .context("Failed to list categories")
    }

    pub async fn find(&self, id: i64) -> Result<Option<Category>> {
        sqlx::query_as::<_, Category>("SELECT id, type FROM category WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.db)
            .await
            .context("Failed to look up category")
    }

    /// The id -> type mapping used by the list endpoints. Integer keys
    /// serialize as JSON object keys (strings).
    pub fn id_type_map(categories: &[Category]) -> BTreeMap<i64, String> {
        categories
            .iter()
            .map(|category| (category.id, category.kind.clone()))
            .collect()
    }
}
