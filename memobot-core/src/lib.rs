//! # memobot-core
//!
//! Core types and traits for the LINE recorder bot: [`InboundEvent`], [`Intent`],
//! [`TimeWindow`], collaborator traits ([`UtteranceStore`], [`BindingStore`],
//! [`MenuLinker`], [`ReplySender`]), error types, and tracing initialization.
//! Transport-agnostic; used by event-router, storage, and memobot-line.

pub mod error;
pub mod logger;
pub mod store;
pub mod transport;
pub mod types;

pub use error::{StoreError, TransportError};
pub use logger::init_tracing;
pub use store::{BindingStore, UtteranceStore};
pub use transport::{MenuLinker, ReplySender};
pub use types::{
    InboundEvent, Intent, QueryKind, QueryTriggers, ReplyAction, TimeWindow, Utterance,
};
