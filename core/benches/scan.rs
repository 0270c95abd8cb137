use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use filetto_core::{Board, GameSession, find_win};

fn bench_find_win(c: &mut Criterion) {
    let empty = Board::new();
    let won = {
        let mut session = GameSession::new();
        for cell in [0, 1, 3, 2, 6] {
            session.make_move(cell).unwrap();
        }
        *session.board()
    };

    c.bench_function("find_win/empty", |b| b.iter(|| find_win(black_box(&empty))));
    c.bench_function("find_win/won", |b| b.iter(|| find_win(black_box(&won))));
}

fn bench_session(c: &mut Criterion) {
    c.bench_function("session/tie_game_with_rewind", |b| {
        b.iter(|| {
            let mut session = GameSession::new();
            for cell in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
                session.make_move(black_box(cell)).unwrap();
            }
            for move_number in (0..session.history().len()).rev() {
                session.jump_to(move_number).unwrap();
            }
            session
        })
    });
}

criterion_group!(benches, bench_find_win, bench_session);
criterion_main!(benches);
