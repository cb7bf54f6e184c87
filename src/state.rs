use crate::config::AppConfig;
use crate::db;
use sqlx::SqlitePool;
use std::sync::Arc;

/// Store handle passed explicitly into every operation.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn init(config: AppConfig) -> anyhow::Result<Self> {
        let db = db::connect(&config.database_url).await?;
        db::migrate(&db).await?;
        Ok(Self {
            db,
            config: Arc::new(config),
        })
    }

    /// Fresh, migrated store that disappears with the state.
    #[cfg(test)]
    pub async fn in_memory() -> anyhow::Result<Self> {
        Self::init(AppConfig::in_memory()).await
    }
}
