use anyhow::Result;
use sqlx::{Pool, Sqlite};
use std::time::Duration;

use super::{connect_db, prepare_sqlite_url, run_migrations};

/// Everything the bot persists, as loaded at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredState {
    pub responding: bool,
    pub encouragements: Vec<String>,
}

#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Connect to `db_url` and bring the schema up to date.
    pub async fn open(db_url: &str, acquire_timeout: Duration) -> Result<Self> {
        let db_url = prepare_sqlite_url(db_url);
        tracing::info!("Connecting to database at: {}", &db_url);
        let pool = connect_db(&db_url, 5, acquire_timeout).await?;
        run_migrations(&pool).await?;
        tracing::info!("Database connection successful.");
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    pub async fn load_state(&self) -> Result<StoredState> {
        let responding = self.is_responding().await?;
        let encouragements = self.list_encouragements().await?;
        tracing::debug!(
            responding,
            count = encouragements.len(),
            "Loaded stored state"
        );
        Ok(StoredState {
            responding,
            encouragements,
        })
    }
}
