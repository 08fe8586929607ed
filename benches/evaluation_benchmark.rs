use gomoku::board::{Board, Color};
use gomoku::evaluate::evaluate;
use gomoku::geometry::candidate_moves;
use gomoku::move_orderer::{ordered_candidates, CandidateCap};
use gomoku::moves::Move;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn criterion_benchmark(c: &mut Criterion) {
    let boards = random_boards(32);

    c.bench_function("evaluate random boards", |b| {
        b.iter(|| {
            boards
                .iter()
                .map(|board| evaluate(black_box(board), Color::Black))
                .sum::<i64>()
        })
    });
    c.bench_function("candidate moves", |b| {
        b.iter(|| {
            boards
                .iter()
                .map(|board| candidate_moves(black_box(board)).len())
                .sum::<usize>()
        })
    });
    c.bench_function("ordered candidates", |b| {
        b.iter(|| {
            boards
                .iter()
                .map(|board| ordered_candidates(black_box(board), Color::White, CandidateCap::Uncapped).len())
                .sum::<usize>()
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

fn random_boards(count: usize) -> Vec<Board> {
    let mut rng = StdRng::seed_from_u64(0xb0a2d);
    (0..count)
        .map(|_| {
            let mut board = Board::new();
            for cell in Move::all() {
                if rng.gen_bool(0.2) {
                    let color = if rng.gen_bool(0.5) { Color::Black } else { Color::White };
                    // cells are visited once, so a put cannot collide
                    let _ = board.put(cell, color);
                }
            }
            board
        })
        .collect()
}
