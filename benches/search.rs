//! Engine benchmarks: board operations, random playouts, short searches.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ten_engine::{decide, Board, Move, SearchRng};

/// Eight-move position with play forced into sub-board 6.
fn midgame_board() -> Board {
    let moves = [
        (4, 4),
        (4, 0),
        (0, 4),
        (4, 8),
        (8, 4),
        (4, 2),
        (2, 4),
        (4, 6),
    ];
    let mut board = Board::new();
    for (s, t) in moves {
        board = board
            .apply(Move::new(s, t))
            .expect("benchmark opening is legal");
    }
    board
}

fn bench_board_ops(c: &mut Criterion) {
    let opening = Board::new();
    let midgame = midgame_board();

    c.bench_function("legal_moves_opening", |b| {
        b.iter(|| black_box(&opening).legal_moves())
    });
    c.bench_function("legal_moves_forced", |b| {
        b.iter(|| black_box(&midgame).legal_moves())
    });
    c.bench_function("apply_unchecked", |b| {
        let mv = Move::new(6, 1);
        b.iter(|| black_box(&midgame).apply_unchecked(black_box(mv)))
    });
}

fn bench_random_playout(c: &mut Criterion) {
    c.bench_function("random_playout", |b| {
        let mut rng = SearchRng::new(42);
        let start = midgame_board();
        b.iter(|| {
            let mut board = start.clone();
            while board.game_status().is_none() {
                let moves = board.legal_moves();
                let mv = moves[rng.gen_range_usize(0..moves.len())];
                board = board.apply_unchecked(mv);
            }
            black_box(board)
        })
    });
}

fn bench_decide_short_budget(c: &mut Criterion) {
    let mut group = c.benchmark_group("decide");
    group.sample_size(10);
    group.bench_function("5ms_budget", |b| {
        let board = midgame_board();
        b.iter(|| decide(black_box(&board), 5).unwrap())
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_board_ops,
    bench_random_playout,
    bench_decide_short_budget
);
criterion_main!(benches);
