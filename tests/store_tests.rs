//! Integration tests for the in-memory match store.

use std::collections::HashSet;
use std::thread;

use gridmatch::core::{MatchId, MatchStatus, ParticipantId, Position, Seat};
use gridmatch::rules::MoveError;
use gridmatch::store::{MatchStore, MemoryStore, StoreError};

const A: ParticipantId = ParticipantId::new(1);
const B: ParticipantId = ParticipantId::new(2);

// =============================================================================
// Full Flows
// =============================================================================

#[test]
fn test_store_runs_a_match_end_to_end() {
    let store = MemoryStore::default();
    let id = store.create_match(A, B).unwrap().id();

    store
        .submit_move(id, A, Position::new(0, 0), Some("corner start"))
        .unwrap();
    store.submit_move(id, B, Position::new(1, 1), None).unwrap();
    store.submit_move(id, A, Position::new(0, 1), None).unwrap();
    store.submit_move(id, B, Position::new(1, 0), None).unwrap();
    let outcome = store.submit_move(id, A, Position::new(0, 2), None).unwrap();

    assert_eq!(outcome.state.status(), MatchStatus::Won(Seat::First));
    assert_eq!(store.match_state(id).unwrap().status(), outcome.state.status());

    let log = store.move_log(id).unwrap();
    assert_eq!(log.len(), 5);
    assert_eq!(
        log.get(0).and_then(|r| r.comment.as_deref()),
        Some("corner start")
    );

    let entry = store.match_entry(id).unwrap();
    assert!(entry.last_move_at() >= entry.created_at());
}

#[test]
fn test_lobby_queries_across_matches() {
    let store = MemoryStore::default();
    let c = ParticipantId::new(3);

    let ab = store.create_match(A, B).unwrap().id();
    let ac = store.create_match(A, c).unwrap().id();
    let bc = store.create_match(B, c).unwrap().id();

    // Finish the A-B match.
    store.submit_move(ab, A, Position::new(0, 0), None).unwrap();
    store.submit_move(ab, B, Position::new(1, 1), None).unwrap();
    store.submit_move(ab, A, Position::new(0, 1), None).unwrap();
    store.submit_move(ab, B, Position::new(1, 0), None).unwrap();
    store.submit_move(ab, A, Position::new(0, 2), None).unwrap();

    let ids = |states: Vec<gridmatch::core::MatchState>| -> Vec<MatchId> {
        states.iter().map(|s| s.id()).collect()
    };

    assert_eq!(ids(store.matches_for(A).unwrap()), vec![ab, ac]);
    assert_eq!(ids(store.active_matches_for(A).unwrap()), vec![ac]);
    assert_eq!(ids(store.matches_for(c).unwrap()), vec![ac, bc]);
    assert_eq!(ids(store.active_matches_for(c).unwrap()), vec![ac, bc]);
    assert_eq!(ids(store.matches_for(B).unwrap()), vec![ab, bc]);
}

#[test]
fn test_store_as_trait_object() {
    let concrete = MemoryStore::default();
    let store: &dyn MatchStore = &concrete;

    let state = store.create_match(A, B).unwrap();
    store
        .submit_move(state.id(), A, Position::new(2, 2), None)
        .unwrap();

    assert_eq!(store.move_log(state.id()).unwrap().len(), 1);
    assert_eq!(store.matches_for(B).unwrap().len(), 1);
}

#[test]
fn test_snapshot_resumes_play() {
    let store = MemoryStore::default();
    let id = store.create_match(A, B).unwrap().id();
    store.submit_move(id, A, Position::new(0, 0), None).unwrap();
    store.submit_move(id, B, Position::new(1, 1), None).unwrap();

    let restored = MemoryStore::restore(&store.snapshot().unwrap()).unwrap();
    restored.submit_move(id, A, Position::new(0, 1), None).unwrap();
    restored.submit_move(id, B, Position::new(1, 0), None).unwrap();
    let outcome = restored.submit_move(id, A, Position::new(0, 2), None).unwrap();

    assert_eq!(outcome.state.status(), MatchStatus::Won(Seat::First));

    // The two stores are independent after the snapshot.
    assert_eq!(store.move_log(id).unwrap().len(), 2);
    assert_eq!(restored.move_log(id).unwrap().len(), 5);
}

// =============================================================================
// Concurrency
// =============================================================================

#[test]
fn test_concurrent_creation_yields_distinct_ids() {
    let store = MemoryStore::default();
    let mut handles = Vec::new();

    for t in 0u64..4 {
        let store = store.clone();
        handles.push(thread::spawn(move || {
            let mut ids = Vec::new();
            for i in 0..25 {
                let first = ParticipantId::new(t * 1000 + i);
                let second = ParticipantId::new(t * 1000 + i + 500);
                ids.push(store.create_match(first, second).unwrap().id());
            }
            ids
        }));
    }

    let mut ids: Vec<MatchId> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    let total = ids.len();
    ids.sort();
    ids.dedup();

    assert_eq!(ids.len(), total, "concurrent creation reissued an id");
    assert_eq!(store.match_count(), total);
}

#[test]
fn test_racing_submissions_stay_serialized() {
    let store = MemoryStore::default();
    let id = store.create_match(A, B).unwrap().id();

    let mut handles = Vec::new();
    for who in [A, B] {
        let store = store.clone();
        handles.push(thread::spawn(move || {
            let mut accepted = 0usize;
            // Sweep the board until the match closes; refusals are the
            // expected outcome of losing a race.
            'sweeps: for _ in 0..50 {
                for y in 0..3 {
                    for x in 0..3 {
                        match store.submit_move(id, who, Position::new(x, y), None) {
                            Ok(_) => accepted += 1,
                            Err(StoreError::Move(MoveError::MatchFinished)) => break 'sweeps,
                            Err(_) => {}
                        }
                    }
                }
            }
            accepted
        }));
    }

    let accepted: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
    let log = store.move_log(id).unwrap();

    // Every acceptance is in the log and nothing else is.
    assert_eq!(accepted, log.len());
    assert!(log.len() <= 9);

    // Whatever the interleaving, movers alternate and no cell repeats.
    for (i, record) in log.iter().enumerate() {
        let expected = if i % 2 == 0 { Seat::First } else { Seat::Second };
        assert_eq!(record.seat, expected, "mover out of order at move {}", i);
    }
    let positions: HashSet<Position> = log.iter().map(|r| r.position).collect();
    assert_eq!(positions.len(), log.len());

    // A won status must be backed by the board the log replays to.
    if let MatchStatus::Won(seat) = store.match_state(id).unwrap().status() {
        let board = store.engine().board(&log);
        assert_eq!(board.winner(), Some(seat));
    }
}
