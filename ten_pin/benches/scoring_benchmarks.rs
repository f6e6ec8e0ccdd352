use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ten_pin::GameState;

/// Score a complete game from a flat roll list.
fn play_game(rolls: &[u8]) -> GameState {
    let mut state = GameState::new();
    for &roll in rolls {
        if state.apply_roll(roll).is_err() {
            break;
        }
    }
    state
}

/// Benchmark a perfect game (maximum cascade work per roll)
fn bench_perfect_game(c: &mut Criterion) {
    let rolls = [10u8; 12];
    c.bench_function("perfect_game", |b| {
        b.iter(|| play_game(&rolls));
    });
}

/// Benchmark a typical mixed game
fn bench_mixed_game(c: &mut Criterion) {
    let rolls = [3u8, 1, 7, 3, 6, 4, 4, 0, 0, 10, 10, 10, 10, 5, 2, 8, 2, 1];
    c.bench_function("mixed_game", |b| {
        b.iter(|| play_game(&rolls));
    });
}

/// Benchmark roll validation at different points of a game
fn bench_validate_roll(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_roll");

    let fresh = GameState::new();
    group.bench_with_input(BenchmarkId::from_parameter("fresh"), &fresh, |b, state| {
        b.iter(|| state.validate_roll(7));
    });

    let mid_frame = play_game(&[10, 10, 7]);
    group.bench_with_input(
        BenchmarkId::from_parameter("mid_frame"),
        &mid_frame,
        |b, state| {
            b.iter(|| state.validate_roll(4));
        },
    );

    let tenth = play_game(&[0u8; 18]);
    group.bench_with_input(BenchmarkId::from_parameter("tenth"), &tenth, |b, state| {
        b.iter(|| state.validate_roll(10));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_perfect_game,
    bench_mixed_game,
    bench_validate_roll
);
criterion_main!(benches);
