//! Tests for the public facade surface
//!
//! Exercises the engine exactly the way an embedding transport layer would:
//! through the root crate's re-exports, serializing responses with serde.

use podium::{Error, Leaderboard, RankedEntry, Score};

#[test]
fn test_facade_exposes_the_three_operations() {
    let board = Leaderboard::new();

    let score = board.record_score(1, Score::from(100)).unwrap();
    assert_eq!(score, Score::from(100));

    let range = board.rank_range(1, 1).unwrap();
    assert_eq!(range.len(), 1);

    let neighbors = board.neighbors_of(1, 0, 0).unwrap();
    assert_eq!(neighbors, range);
}

#[test]
fn test_entries_serialize_for_transport() {
    let board = Leaderboard::new();
    board.record_score(5, Score::from(10)).unwrap();
    board.record_score(3, Score::from(20)).unwrap();

    let entries = board.rank_range(1, 2).unwrap();
    let json = serde_json::to_string(&entries).unwrap();

    let back: Vec<RankedEntry> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, entries);
    assert_eq!(back[0].customer_id, 5);
    assert_eq!(back[1].customer_id, 3);
}

#[test]
fn test_error_kinds_distinguishable_for_status_mapping() {
    let board = Leaderboard::new();

    // A transport maps these to client-error vs not-found statuses; the
    // variants must stay distinguishable and carry printable messages.
    let out_of_range = board.record_score(1, Score::from(2000)).unwrap_err();
    assert!(matches!(out_of_range, Error::ScoreOutOfRange { .. }));
    assert!(!out_of_range.to_string().is_empty());

    let invalid = board.rank_range(3, 1).unwrap_err();
    assert!(matches!(invalid, Error::InvalidRankRange { .. }));

    let not_found = board.neighbors_of(99, 0, 0).unwrap_err();
    assert!(matches!(not_found, Error::CustomerNotFound(99)));
}
