use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use game_2048::{Direction, GameState, Grid};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::hint::black_box;

fn corpus() -> Vec<Grid> {
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    let mut state = GameState::initialize(&mut rng);
    let mut grids = vec![Grid::EMPTY, *state.grid()];
    // Derive a variety of densities deterministically
    for dir in Direction::ALL.iter().cycle().take(200) {
        state = state.apply_move(*dir, &mut rng);
        grids.push(*state.grid());
    }
    grids
}

fn bench_shift(c: &mut Criterion) {
    let grids = corpus();
    for dir in Direction::ALL {
        c.bench_function(&format!("shift/{}", dir), |b| {
            b.iter(|| {
                let mut gained = 0u64;
                for grid in &grids {
                    gained += grid.shift(dir).1;
                }
                black_box(gained)
            })
        });
    }
}

fn bench_apply_move(c: &mut Criterion) {
    c.bench_function("state/apply_move_cycle", |b| {
        b.iter_batched(
            || {
                let mut rng = ChaCha20Rng::seed_from_u64(9);
                (GameState::initialize(&mut rng), rng)
            },
            |(mut state, mut rng)| {
                for dir in Direction::ALL.iter().cycle().take(64) {
                    state = state.apply_move(*dir, &mut rng);
                }
                black_box(state)
            },
            BatchSize::SmallInput,
        )
    });
    c.bench_function("grid/is_terminal", |b| {
        let grids = corpus();
        b.iter(|| grids.iter().filter(|g| g.is_terminal()).count())
    });
}

criterion_group!(benches, bench_shift, bench_apply_move);
criterion_main!(benches);
