//! Store contracts consumed by the router: utterance persistence and per-user
//! menu-binding state. Implemented by the storage crate; tests substitute fakes.

use crate::error::StoreError;
use crate::types::{TimeWindow, Utterance};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Persistent store of user utterances.
#[async_trait]
pub trait UtteranceStore: Send + Sync {
    /// Inserts one utterance. `content` is already trimmed and non-empty.
    async fn insert(
        &self,
        user_id: &str,
        content: &str,
        created_at: DateTime<Utc>,
    ) -> std::result::Result<(), StoreError>;

    /// Returns the user's utterances with `created_at` in `[start, end)`,
    /// ascending by `created_at`.
    async fn query_range(
        &self,
        user_id: &str,
        window: &TimeWindow,
    ) -> std::result::Result<Vec<Utterance>, StoreError>;
}

/// Per-user "menu already bound" flag. Created on first contact, never
/// cleared by the bot.
#[async_trait]
pub trait BindingStore: Send + Sync {
    async fn is_bound(&self, user_id: &str) -> std::result::Result<bool, StoreError>;
    async fn mark_bound(&self, user_id: &str) -> std::result::Result<(), StoreError>;
}
