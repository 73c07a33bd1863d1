//! Core types: inbound event, intent, time window, utterance, reply action.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A normalized inbound event. Every handled variant carries the platform
/// user id; events without a resolvable user identity never reach this type
/// (normalization drops them).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    /// A text message from the user.
    Text {
        user_id: String,
        text: String,
        reply_token: String,
    },
    /// A structured postback (menu/button tap) carrying an opaque payload.
    Postback {
        user_id: String,
        payload: String,
        reply_token: String,
    },
    /// Any other event type (follow, sticker, image, ...). Carries no reply
    /// context and always classifies as [`Intent::Ignore`].
    Other { user_id: String },
}

impl InboundEvent {
    pub fn user_id(&self) -> &str {
        match self {
            InboundEvent::Text { user_id, .. }
            | InboundEvent::Postback { user_id, .. }
            | InboundEvent::Other { user_id } => user_id,
        }
    }

    /// Reply token, if this event variant can be replied to.
    pub fn reply_token(&self) -> Option<&str> {
        match self {
            InboundEvent::Text { reply_token, .. }
            | InboundEvent::Postback { reply_token, .. } => Some(reply_token),
            InboundEvent::Other { .. } => None,
        }
    }
}

/// Which history window a query asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    Today,
    Week,
}

/// The classified action derived from one inbound event. Classification is
/// total: every event maps to exactly one intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Persist the (trimmed, non-empty) text and acknowledge it.
    StoreUtterance(String),
    /// Query stored utterances for the given window and reply with a listing.
    QueryRange(QueryKind),
    /// No reply, no store operation.
    Ignore,
}

/// Half-open UTC interval `[start_utc, end_utc)` bounding a history query.
/// Invariant: `start_utc < end_utc`. Half-open so a boundary timestamp never
/// lands in two adjacent windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start_utc: DateTime<Utc>,
    pub end_utc: DateTime<Utc>,
}

impl TimeWindow {
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start_utc && instant < self.end_utc
    }
}

/// A stored user utterance. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utterance {
    pub user_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// The single outbound reply produced for one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyAction {
    pub reply_token: String,
    pub text: String,
}

/// Literal trigger tokens for the two query intents, in both free-text and
/// postback-data form. The two phrases must not be substrings of each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTriggers {
    pub today_phrase: String,
    pub week_phrase: String,
    pub today_postback: String,
    pub week_postback: String,
}

impl Default for QueryTriggers {
    fn default() -> Self {
        Self {
            today_phrase: "查詢今日紀錄".to_string(),
            week_phrase: "查詢本週紀錄".to_string(),
            today_postback: "query_today".to_string(),
            week_postback: "query_week".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_reply_token_by_variant() {
        let text = InboundEvent::Text {
            user_id: "U1".to_string(),
            text: "hi".to_string(),
            reply_token: "rt".to_string(),
        };
        assert_eq!(text.reply_token(), Some("rt"));
        assert_eq!(text.user_id(), "U1");

        let other = InboundEvent::Other {
            user_id: "U2".to_string(),
        };
        assert_eq!(other.reply_token(), None);
    }

    #[test]
    fn test_time_window_contains_is_half_open() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 3, 2, 0, 0, 0).unwrap();
        let window = TimeWindow {
            start_utc: start,
            end_utc: end,
        };

        assert!(window.contains(start));
        assert!(window.contains(end - chrono::Duration::milliseconds(1)));
        assert!(!window.contains(end));
        assert!(!window.contains(start - chrono::Duration::milliseconds(1)));
    }

    #[test]
    fn test_default_triggers_are_mutually_exclusive() {
        let triggers = QueryTriggers::default();
        assert!(!triggers.today_phrase.contains(&triggers.week_phrase));
        assert!(!triggers.week_phrase.contains(&triggers.today_phrase));
    }
}
