//! Utterance repository: persistence and range queries for user utterances.
//!
//! Uses SqlitePoolManager and UtteranceRecord. External: SQLite via sqlx;
//! the router consumes this through the [`UtteranceStore`] trait.

use crate::models::UtteranceRecord;
use crate::sqlite_pool::SqlitePoolManager;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use memobot_core::{StoreError, TimeWindow, Utterance, UtteranceStore};
use tracing::info;

#[derive(Clone)]
pub struct UtteranceRepository {
    pool_manager: SqlitePoolManager,
}

impl UtteranceRepository {
    pub async fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;
        let repo = Self { pool_manager };
        repo.init().await?;
        Ok(repo)
    }

    /// Builds a repository over an existing pool (shared with other repos).
    pub async fn with_pool(pool_manager: SqlitePoolManager) -> Result<Self, sqlx::Error> {
        let repo = Self { pool_manager };
        repo.init().await?;
        Ok(repo)
    }

    async fn init(&self) -> Result<(), sqlx::Error> {
        info!("Creating utterances table if not exists");

        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS utterances (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                content TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_utterances_user_created
                ON utterances(user_id, created_at)
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    pub async fn save(&self, record: &UtteranceRecord) -> Result<(), sqlx::Error> {
        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            INSERT INTO utterances (id, user_id, content, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&record.id)
        .bind(&record.user_id)
        .bind(&record.content)
        .bind(record.created_at)
        .execute(pool)
        .await?;

        info!(
            utterance_id = %record.id,
            user_id = %record.user_id,
            "Saved utterance"
        );
        Ok(())
    }

    /// Rows for the user with `created_at` in `[start, end)`, ascending.
    /// The half-open end keeps a midnight row out of the previous day.
    pub async fn find_in_window(
        &self,
        user_id: &str,
        window: &TimeWindow,
    ) -> Result<Vec<UtteranceRecord>, sqlx::Error> {
        let pool = self.pool_manager.pool();

        let records: Vec<UtteranceRecord> = sqlx::query_as(
            r#"
            SELECT * FROM utterances
            WHERE user_id = ? AND created_at >= ? AND created_at < ?
            ORDER BY created_at ASC
            "#,
        )
        .bind(user_id)
        .bind(window.start_utc)
        .bind(window.end_utc)
        .fetch_all(pool)
        .await?;

        info!(
            user_id = %user_id,
            count = records.len(),
            "Retrieved utterances in window"
        );

        Ok(records)
    }

    pub async fn count_for_user(&self, user_id: &str) -> Result<i64, sqlx::Error> {
        let pool = self.pool_manager.pool();

        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM utterances WHERE user_id = ?")
            .bind(user_id)
            .fetch_one(pool)
            .await?;

        Ok(count.0)
    }
}

#[async_trait]
impl UtteranceStore for UtteranceRepository {
    async fn insert(
        &self,
        user_id: &str,
        content: &str,
        created_at: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        let record = UtteranceRecord::new(user_id.to_string(), content.to_string(), created_at);
        self.save(&record)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))
    }

    async fn query_range(
        &self,
        user_id: &str,
        window: &TimeWindow,
    ) -> Result<Vec<Utterance>, StoreError> {
        let records = self
            .find_in_window(user_id, window)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;
        Ok(records.into_iter().map(Utterance::from).collect())
    }
}
