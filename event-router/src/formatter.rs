//! Reply text construction. Templates follow the deployed bot's wording.

use memobot_core::{QueryKind, Utterance};

/// Fixed reply when a history query fails at the store.
pub const QUERY_FAILED_TEXT: &str = "查詢失敗，請稍後再試～";

/// Acknowledgement for a stored utterance, echoing the content verbatim.
pub fn format_ack(content: &str) -> String {
    format!("你說的是：「{}」\n這句話我已經記起來了喔！", content)
}

/// History listing: title plus a 1-indexed enumeration in store order, or the
/// fixed empty-window sentence for the queried kind. Does not re-sort; the
/// store returns rows ascending by creation time.
pub fn format_history(kind: QueryKind, utterances: &[Utterance]) -> String {
    if utterances.is_empty() {
        return match kind {
            QueryKind::Today => "你今天還沒有留下任何紀錄喔！",
            QueryKind::Week => "這週你還沒有留下任何紀錄喔！",
        }
        .to_string();
    }

    let title = match kind {
        QueryKind::Today => "📅 今日紀錄：",
        QueryKind::Week => "🗓️ 本週紀錄：",
    };

    let lines: Vec<String> = utterances
        .iter()
        .enumerate()
        .map(|(i, u)| format!("{}. {}", i + 1, u.content))
        .collect();

    format!("{}\n{}", title, lines.join("\n"))
}
