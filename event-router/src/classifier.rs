//! Intent classification: one inbound event maps to exactly one intent.

use memobot_core::{InboundEvent, Intent, QueryKind, QueryTriggers};

/// Classifies a normalized event.
///
/// Postbacks match their trigger token exactly; anything else is ignored.
/// Text is trimmed, then tested for containment of the today phrase, then the
/// week phrase (first match wins; the configured phrases must not contain
/// each other). Text matching neither phrase is stored verbatim, unless it
/// trims to empty.
pub fn classify(event: &InboundEvent, triggers: &QueryTriggers) -> Intent {
    match event {
        InboundEvent::Postback { payload, .. } => {
            if payload == &triggers.today_postback {
                Intent::QueryRange(QueryKind::Today)
            } else if payload == &triggers.week_postback {
                Intent::QueryRange(QueryKind::Week)
            } else {
                Intent::Ignore
            }
        }
        InboundEvent::Text { text, .. } => {
            let trimmed = text.trim();
            if trimmed.contains(triggers.today_phrase.as_str()) {
                Intent::QueryRange(QueryKind::Today)
            } else if trimmed.contains(triggers.week_phrase.as_str()) {
                Intent::QueryRange(QueryKind::Week)
            } else if trimmed.is_empty() {
                Intent::Ignore
            } else {
                Intent::StoreUtterance(trimmed.to_string())
            }
        }
        InboundEvent::Other { .. } => Intent::Ignore,
    }
}
