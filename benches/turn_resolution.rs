//! Turn Resolution Benchmarks
//!
//! Performance benchmarks for the turn resolver and full games using
//! Criterion.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use eels_and_escalators::{resolve_turn, Board, DieRoll, GameBuilder, Square};

fn bench_resolve_turn(c: &mut Criterion) {
    let board = Board::standard();
    let position = Square::new(50).unwrap();
    let roll = DieRoll::new(6).unwrap();

    c.bench_function("resolve_turn_eel", |b| {
        b.iter(|| black_box(resolve_turn(&board, position, roll)))
    });
}

fn bench_resolve_every_square(c: &mut Criterion) {
    let board = Board::standard();
    let roll = DieRoll::new(3).unwrap();

    c.bench_function("resolve_turn_all_squares", |b| {
        b.iter(|| {
            for position in Square::all() {
                black_box(resolve_turn(&board, position, roll));
            }
        })
    });
}

fn bench_state_clone(c: &mut Criterion) {
    let (game, mut state) = GameBuilder::new().players(["a", "b", "c", "d"]).build(42);
    for _ in 0..50 {
        if state.has_finished() {
            break;
        }
        state = game.take_turn(&state).unwrap().state;
    }

    c.bench_function("game_state_clone_mid_game", |b| {
        b.iter(|| black_box(state.clone()))
    });
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("full_two_player_game", |b| {
        b.iter(|| {
            let (game, mut state) = GameBuilder::new().players(["a", "b"]).build(42);
            while !state.has_finished() {
                state = game.take_turn(&state).unwrap().state;
            }
            black_box(state.history().count())
        })
    });
}

criterion_group!(
    benches,
    bench_resolve_turn,
    bench_resolve_every_square,
    bench_state_clone,
    bench_full_game,
);
criterion_main!(benches);
