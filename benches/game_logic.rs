use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_stacker::core::{StackGame, StackSnapshot};
use tui_stacker::types::StackConfig;

fn bench_place_block(c: &mut Criterion) {
    let mut game = StackGame::new(12345);

    c.bench_function("place_block", |b| {
        b.iter(|| {
            if !game.place_block() {
                game.reset();
            }
        })
    });
}

fn bench_place_undo_churn(c: &mut Criterion) {
    let mut game = StackGame::new(12345);
    game.place_block();
    game.place_block();

    c.bench_function("place_undo_churn", |b| {
        b.iter(|| {
            if game.place_block() {
                game.undo_last_block();
            } else {
                game.reset();
            }
        })
    });
}

fn bench_snapshot_into(c: &mut Criterion) {
    let mut game = StackGame::new(12345);
    for _ in 0..200 {
        if !game.place_block() {
            game.reset();
        }
    }
    let mut snap = StackSnapshot::default();

    c.bench_function("snapshot_into_deep_stack", |b| {
        b.iter(|| {
            game.snapshot_into(black_box(&mut snap));
        })
    });
}

fn bench_stats(c: &mut Criterion) {
    let mut game = StackGame::with_config(StackConfig::default(), 12345);
    for _ in 0..200 {
        if !game.place_block() {
            game.reset();
        }
    }

    c.bench_function("stats_deep_stack", |b| {
        b.iter(|| black_box(game.stats()))
    });
}

criterion_group!(
    benches,
    bench_place_block,
    bench_place_undo_churn,
    bench_snapshot_into,
    bench_stats
);
criterion_main!(benches);
