//! Utterance row model for persistence.
//!
//! Maps to the `utterances` table and is used by UtteranceRepository.

use chrono::{DateTime, Utc};
use memobot_core::Utterance;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UtteranceRecord {
    pub id: String,
    pub user_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl UtteranceRecord {
    /// Creates a new record with a generated UUID.
    pub fn new(user_id: String, content: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            content,
            created_at,
        }
    }
}

impl From<UtteranceRecord> for Utterance {
    fn from(record: UtteranceRecord) -> Self {
        Utterance {
            user_id: record.user_id,
            content: record.content,
            created_at: record.created_at,
        }
    }
}
