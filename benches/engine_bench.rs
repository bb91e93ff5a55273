//! Match Engine Benchmarks
//!
//! Performance benchmarks for the hot engine paths using Criterion.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gridmatch::core::{MatchId, MatchState, MoveLog, ParticipantId, Position};
use gridmatch::rules::MatchEngine;

const A: ParticipantId = ParticipantId::new(1);
const B: ParticipantId = ParticipantId::new(2);

/// A full nine-move drawn game, alternating from the first seat.
const DRAW_SEQUENCE: [(u8, u8); 9] = [
    (0, 0),
    (1, 1),
    (1, 0),
    (0, 1),
    (2, 1),
    (2, 0),
    (0, 2),
    (2, 2),
    (1, 2),
];

fn played_out() -> (MatchEngine, MatchState, MoveLog) {
    let engine = MatchEngine::canonical();
    let mut state = engine.new_match(MatchId::new(1), A, B).unwrap();
    let mut log = MoveLog::new();

    for &(x, y) in &DRAW_SEQUENCE {
        let requester = state.to_move().unwrap();
        let outcome = engine
            .make_move(&state, &log, requester, Position::new(x, y))
            .unwrap();
        state = outcome.state;
        log = outcome.log;
    }

    (engine, state, log)
}

fn bench_new_match(c: &mut Criterion) {
    let engine = MatchEngine::canonical();

    c.bench_function("new_match", |b| {
        b.iter(|| black_box(engine.new_match(MatchId::new(1), A, B).unwrap()))
    });
}

fn bench_legal_moves_open_board(c: &mut Criterion) {
    let engine = MatchEngine::canonical();
    let state = engine.new_match(MatchId::new(1), A, B).unwrap();
    let log = MoveLog::new();

    c.bench_function("legal_moves_open_board", |b| {
        b.iter(|| black_box(engine.legal_moves(&state, &log)))
    });
}

fn bench_full_match_to_draw(c: &mut Criterion) {
    c.bench_function("full_match_to_draw", |b| {
        b.iter(|| {
            let (_, state, log) = played_out();
            black_box((state.status(), log.len()))
        })
    });
}

fn bench_replay_full_log(c: &mut Criterion) {
    let (engine, _, log) = played_out();

    c.bench_function("replay_full_log", |b| b.iter(|| black_box(engine.board(&log))));
}

fn bench_winner_scans(c: &mut Criterion) {
    let (engine, _, log) = played_out();
    let board = engine.board(&log);

    c.bench_function("winner_all_lines", |b| b.iter(|| black_box(board.winner())));
    c.bench_function("winner_through_last_move", |b| {
        b.iter(|| black_box(board.winner_through(Position::new(1, 2))))
    });
}

criterion_group!(
    benches,
    bench_new_match,
    bench_legal_moves_open_board,
    bench_full_match_to_draw,
    bench_replay_full_log,
    bench_winner_scans,
);
criterion_main!(benches);
