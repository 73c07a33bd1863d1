//! # memobot-line
//!
//! LINE platform layer: webhook payload types and normalization to
//! [`memobot_core::InboundEvent`], the reply/rich-menu HTTP client, and
//! minimal transport config. Handles only LINE connectivity; no storage or
//! routing logic.

mod client;
mod config;
mod webhook;

pub use client::HttpLineClient;
pub use config::LineConfig;
pub use webhook::{EventSource, MessageContent, PostbackContent, WebhookEvent, WebhookPayload};
