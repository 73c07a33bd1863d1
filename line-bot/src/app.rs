//! Webhook surface: axum router, per-event fan-out, reply dispatch.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use event_router::EventRouter;
use memobot_core::ReplySender;
use memobot_line::{WebhookEvent, WebhookPayload};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Shared state for the webhook handlers.
#[derive(Clone)]
pub struct AppState {
    router: Arc<EventRouter>,
    sender: Arc<dyn ReplySender>,
}

impl AppState {
    pub fn new(router: Arc<EventRouter>, sender: Arc<dyn ReplySender>) -> Self {
        Self { router, sender }
    }
}

/// Builds the axum router with shared state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/webhook", post(webhook))
        .layer(axum::extract::DefaultBodyLimit::max(1024 * 1024))
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

/// One delivery carries a batch of events; each is handled on its own task,
/// independently and in no guaranteed order. The delivery is acknowledged
/// immediately; per-event failures never fail the webhook.
async fn webhook(State(state): State<AppState>, Json(payload): Json<WebhookPayload>) -> StatusCode {
    info!(events = payload.events.len(), "Webhook delivery received");

    for event in payload.events {
        let state = state.clone();
        tokio::spawn(async move {
            process_event(&state, event).await;
        });
    }

    StatusCode::OK
}

/// Normalizes one raw event, routes it, and dispatches the reply if any.
async fn process_event(state: &AppState, event: WebhookEvent) {
    let Some(inbound) = event.to_inbound() else {
        debug!(event_type = %event.event_type, "Dropping event without user identity");
        return;
    };

    if let memobot_core::InboundEvent::Text { text, .. } = &inbound {
        debug!(text = %text.trim(), "User message");
    }

    let Some(action) = state.router.route(inbound).await else {
        return;
    };

    if let Err(e) = state.sender.reply(&action.reply_token, &action.text).await {
        error!(error = %e, "Failed to send reply");
    }
}
