//! LINE webhook payload types and normalization to core events.
//!
//! The wire shape is loosely typed (every field the platform may omit is an
//! Option); [`WebhookEvent::to_inbound`] is the single place that turns it
//! into the exhaustively-matched [`InboundEvent`]. Events without a
//! resolvable user id normalize to `None` and are dropped by the caller.

use memobot_core::InboundEvent;
use serde::Deserialize;

/// One webhook delivery: a batch of events.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookPayload {
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub events: Vec<WebhookEvent>,
}

/// One raw event as delivered by the platform.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default)]
    pub source: Option<EventSource>,
    #[serde(default)]
    pub message: Option<MessageContent>,
    #[serde(default)]
    pub postback: Option<PostbackContent>,
    #[serde(default)]
    pub reply_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSource {
    #[serde(default)]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageContent {
    #[serde(rename = "type")]
    pub message_type: String,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostbackContent {
    pub data: String,
}

impl WebhookEvent {
    /// Normalizes to a core event, or `None` when no user id is resolvable.
    ///
    /// Text messages and postbacks missing their expected fields (no text,
    /// no reply token) degrade to [`InboundEvent::Other`] rather than being
    /// guessed at; non-text message types (stickers, images) do the same.
    pub fn to_inbound(&self) -> Option<InboundEvent> {
        let user_id = self.source.as_ref()?.user_id.clone()?;

        match self.event_type.as_str() {
            "message" => {
                let text = self
                    .message
                    .as_ref()
                    .filter(|m| m.message_type == "text")
                    .and_then(|m| m.text.clone());
                match (text, self.reply_token.clone()) {
                    (Some(text), Some(reply_token)) => Some(InboundEvent::Text {
                        user_id,
                        text,
                        reply_token,
                    }),
                    _ => Some(InboundEvent::Other { user_id }),
                }
            }
            "postback" => match (self.postback.as_ref(), self.reply_token.clone()) {
                (Some(postback), Some(reply_token)) => Some(InboundEvent::Postback {
                    user_id,
                    payload: postback.data.clone(),
                    reply_token,
                }),
                _ => Some(InboundEvent::Other { user_id }),
            },
            _ => Some(InboundEvent::Other { user_id }),
        }
    }
}
