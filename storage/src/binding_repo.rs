//! Menu-binding repository: per-user "rich menu already linked" flag.
//!
//! Read-then-write callers (MenuBindingTracker) tolerate the flag being set
//! twice; `mark_bound` is an upsert so a duplicate write is harmless.

use crate::sqlite_pool::SqlitePoolManager;
use async_trait::async_trait;
use chrono::Utc;
use memobot_core::{BindingStore, StoreError};
use tracing::info;

#[derive(Clone)]
pub struct BindingRepository {
    pool_manager: SqlitePoolManager,
}

impl BindingRepository {
    pub async fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;
        let repo = Self { pool_manager };
        repo.init().await?;
        Ok(repo)
    }

    pub async fn with_pool(pool_manager: SqlitePoolManager) -> Result<Self, sqlx::Error> {
        let repo = Self { pool_manager };
        repo.init().await?;
        Ok(repo)
    }

    async fn init(&self) -> Result<(), sqlx::Error> {
        info!("Creating menu_bindings table if not exists");

        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS menu_bindings (
                user_id TEXT PRIMARY KEY,
                bound_at TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    pub async fn exists(&self, user_id: &str) -> Result<bool, sqlx::Error> {
        let pool = self.pool_manager.pool();

        let row: Option<(String,)> =
            sqlx::query_as("SELECT user_id FROM menu_bindings WHERE user_id = ?")
                .bind(user_id)
                .fetch_optional(pool)
                .await?;

        Ok(row.is_some())
    }

    pub async fn upsert(&self, user_id: &str) -> Result<(), sqlx::Error> {
        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            INSERT INTO menu_bindings (user_id, bound_at)
            VALUES (?, ?)
            ON CONFLICT(user_id) DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(Utc::now())
        .execute(pool)
        .await?;

        info!(user_id = %user_id, "Marked menu binding");
        Ok(())
    }
}

#[async_trait]
impl BindingStore for BindingRepository {
    async fn is_bound(&self, user_id: &str) -> Result<bool, StoreError> {
        self.exists(user_id)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))
    }

    async fn mark_bound(&self, user_id: &str) -> Result<(), StoreError> {
        self.upsert(user_id)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))
    }
}
