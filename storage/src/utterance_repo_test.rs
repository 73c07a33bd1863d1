//! Unit tests for UtteranceRepository.
//!
//! Covers window filtering (half-open bounds), ascending ordering, and the
//! UtteranceStore trait impl. Uses in-memory SQLite; no external DB.

use crate::models::UtteranceRecord;
use crate::utterance_repo::UtteranceRepository;
use chrono::{DateTime, Duration, TimeZone, Utc};
use memobot_core::{TimeWindow, UtteranceStore};

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

async fn test_repo() -> UtteranceRepository {
    UtteranceRepository::new("sqlite::memory:")
        .await
        .expect("Failed to create repository")
}

#[tokio::test]
async fn test_find_in_window_orders_ascending() {
    let repo = test_repo().await;
    let base = utc(2024, 5, 10, 3, 0, 0);

    // Insert out of chronological order.
    for offset in [2i64, 0, 1] {
        let record = UtteranceRecord::new(
            "U1".to_string(),
            format!("message {}", offset),
            base + Duration::hours(offset),
        );
        repo.save(&record).await.expect("Failed to save");
    }

    let window = TimeWindow {
        start_utc: base - Duration::hours(1),
        end_utc: base + Duration::hours(3),
    };
    let rows = repo
        .find_in_window("U1", &window)
        .await
        .expect("Failed to query");

    assert_eq!(rows.len(), 3);
    for pair in rows.windows(2) {
        assert!(pair[0].created_at <= pair[1].created_at);
    }
    assert_eq!(rows[0].content, "message 0");
    assert_eq!(rows[2].content, "message 2");
}

#[tokio::test]
async fn test_find_in_window_half_open_bounds() {
    let repo = test_repo().await;
    let start = utc(2024, 5, 9, 16, 0, 0);
    let end = utc(2024, 5, 10, 16, 0, 0);

    let at_start = UtteranceRecord::new("U1".to_string(), "at start".to_string(), start);
    let at_end = UtteranceRecord::new("U1".to_string(), "at end".to_string(), end);
    let just_before_end = UtteranceRecord::new(
        "U1".to_string(),
        "just before end".to_string(),
        end - Duration::milliseconds(1),
    );
    for record in [&at_start, &at_end, &just_before_end] {
        repo.save(record).await.expect("Failed to save");
    }

    let window = TimeWindow {
        start_utc: start,
        end_utc: end,
    };
    let rows = repo
        .find_in_window("U1", &window)
        .await
        .expect("Failed to query");

    let contents: Vec<&str> = rows.iter().map(|r| r.content.as_str()).collect();
    assert_eq!(contents, vec!["at start", "just before end"]);
}

#[tokio::test]
async fn test_find_in_window_filters_by_user() {
    let repo = test_repo().await;
    let at = utc(2024, 5, 10, 3, 0, 0);

    repo.save(&UtteranceRecord::new("U1".to_string(), "mine".to_string(), at))
        .await
        .expect("Failed to save");
    repo.save(&UtteranceRecord::new("U2".to_string(), "theirs".to_string(), at))
        .await
        .expect("Failed to save");

    let window = TimeWindow {
        start_utc: at - Duration::hours(1),
        end_utc: at + Duration::hours(1),
    };
    let rows = repo
        .find_in_window("U1", &window)
        .await
        .expect("Failed to query");

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].content, "mine");
}

#[tokio::test]
async fn test_utterance_store_trait_roundtrip() {
    let repo = test_repo().await;
    let at = utc(2024, 5, 10, 3, 0, 0);

    let store: &dyn UtteranceStore = &repo;
    store
        .insert("U1", "hello", at)
        .await
        .expect("Failed to insert");

    let window = TimeWindow {
        start_utc: at,
        end_utc: at + Duration::days(1),
    };
    let utterances = store
        .query_range("U1", &window)
        .await
        .expect("Failed to query");

    assert_eq!(utterances.len(), 1);
    assert_eq!(utterances[0].user_id, "U1");
    assert_eq!(utterances[0].content, "hello");
    assert_eq!(utterances[0].created_at, at);

    assert_eq!(repo.count_for_user("U1").await.expect("count"), 1);
}
