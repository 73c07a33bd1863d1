//! Per-event orchestration: bind (best-effort), classify, store op, reply.

use crate::binding::MenuBindingTracker;
use crate::classifier::classify;
use crate::formatter::{format_ack, format_history, QUERY_FAILED_TEXT};
use crate::window::window_for;
use chrono::Utc;
use chrono_tz::Tz;
use memobot_core::{InboundEvent, Intent, QueryTriggers, ReplyAction, UtteranceStore};
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

/// Routes one normalized inbound event to at most one [`ReplyAction`].
///
/// Per event the router performs exactly zero or one store insert, zero or
/// one store query, and emits zero or one reply. Dispatching the reply (and
/// acknowledging the webhook delivery) is the caller's concern.
pub struct EventRouter {
    store: Arc<dyn UtteranceStore>,
    binding: MenuBindingTracker,
    zone: Tz,
    triggers: QueryTriggers,
}

impl EventRouter {
    pub fn new(
        store: Arc<dyn UtteranceStore>,
        binding: MenuBindingTracker,
        zone: Tz,
        triggers: QueryTriggers,
    ) -> Self {
        Self {
            store,
            binding,
            zone,
            triggers,
        }
    }

    #[instrument(skip(self, event), fields(user_id = %event.user_id()))]
    pub async fn route(&self, event: InboundEvent) -> Option<ReplyAction> {
        let user_id = event.user_id().to_string();

        // Best-effort; logs and swallows its own failures.
        self.binding.ensure_bound(&user_id).await;

        let intent = classify(&event, &self.triggers);
        info!(user_id = %user_id, intent = %intent_name(&intent), "step: event classified");

        match intent {
            Intent::Ignore => None,
            Intent::StoreUtterance(content) => {
                let reply_token = event.reply_token()?.to_string();
                debug!(user_id = %user_id, content = %content, "Storing utterance");

                if let Err(e) = self.store.insert(&user_id, &content, Utc::now()).await {
                    // Documented inconsistency: the acknowledgement is still
                    // sent even though persistence failed.
                    error!(error = %e, user_id = %user_id, "Failed to persist utterance");
                }

                Some(ReplyAction {
                    reply_token,
                    text: format_ack(&content),
                })
            }
            Intent::QueryRange(kind) => {
                let reply_token = event.reply_token()?.to_string();
                let window = window_for(kind, Utc::now(), self.zone);
                debug!(
                    user_id = %user_id,
                    start = %window.start_utc,
                    end = %window.end_utc,
                    "Querying history window"
                );

                let text = match self.store.query_range(&user_id, &window).await {
                    Ok(utterances) => format_history(kind, &utterances),
                    Err(e) => {
                        error!(error = %e, user_id = %user_id, "History query failed");
                        QUERY_FAILED_TEXT.to_string()
                    }
                };

                Some(ReplyAction { reply_token, text })
            }
        }
    }
}

fn intent_name(intent: &Intent) -> &'static str {
    match intent {
        Intent::StoreUtterance(_) => "store",
        Intent::QueryRange(memobot_core::QueryKind::Today) => "query_today",
        Intent::QueryRange(memobot_core::QueryKind::Week) => "query_week",
        Intent::Ignore => "ignore",
    }
}
