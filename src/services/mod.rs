use crate::config::Config;
use crate::db;
use sqlx::SqlitePool;

pub struct AppState {
    pub config: Config,
    pub db: SqlitePool,
}

impl AppState {
    pub async fn new(config: Config, pool: SqlitePool) -> anyhow::Result<Self> {
        db::init_schema(&pool).await?;

        Ok(Self { config, db: pool })
    }
}

pub mod category_service;
pub mod question_service;
