//! Storage crate: utterance persistence and menu-binding state on SQLite.
//!
//! ## Modules
//!
//! - [`models`] – UtteranceRecord
//! - [`utterance_repo`] – UtteranceRepository (insert + range query)
//! - [`binding_repo`] – BindingRepository (per-user menu-bound flag)
//! - [`sqlite_pool`] – SqlitePoolManager
//!
//! Both repositories implement the memobot-core store traits, so the router
//! only ever sees [`memobot_core::UtteranceStore`] / [`memobot_core::BindingStore`].

mod binding_repo;
mod models;
mod sqlite_pool;
mod utterance_repo;

#[cfg(test)]
mod utterance_repo_test;

pub use binding_repo::BindingRepository;
pub use models::UtteranceRecord;
pub use sqlite_pool::SqlitePoolManager;
pub use utterance_repo::UtteranceRepository;
