use std::collections::HashSet;

use common::engine::{Cell, Direction, GameSettings, Grid, Occupancy, PositionSampler, RoundController};
use common::rng::SessionRng;
use criterion::{criterion_group, criterion_main, Criterion};

fn bench_ticks_default_board(c: &mut Criterion) {
    let settings = GameSettings::default();

    c.bench_function("1000 ticks on default board", |b| {
        b.iter(|| {
            let mut controller = RoundController::new(&settings, SessionRng::new(42));
            let mut input_rng = SessionRng::new(7);
            for _ in 0..1000 {
                controller.request_direction(input_rng.choose_direction());
                controller.tick();
            }
            controller.best_score()
        })
    });
}

fn bench_sampling_crowded_board(c: &mut Criterion) {
    let grid = Grid::new(64, 64);
    let sampler = PositionSampler::new(grid);
    // Everything but the last row is taken, so rejection sampling mostly fails.
    let occupied: HashSet<Cell> = grid.cells().filter(|cell| cell.y < 63).collect();
    let excluded: [&dyn Occupancy; 1] = [&occupied];

    c.bench_function("sample on 98% occupied board", |b| {
        let mut rng = SessionRng::new(42);
        b.iter(|| sampler.try_sample_excluding(&mut rng, &excluded))
    });
}

fn bench_straight_run_large_board(c: &mut Criterion) {
    let settings = GameSettings {
        grid_width: 200,
        grid_height: 200,
        obstacles_enabled: false,
        ..GameSettings::default()
    };

    c.bench_function("tick straight run on 200x200 board", |b| {
        let mut controller = RoundController::new(&settings, SessionRng::new(42));
        b.iter(|| {
            controller.request_direction(Direction::Right);
            controller.tick()
        })
    });
}

criterion_group!(
    benches,
    bench_ticks_default_board,
    bench_sampling_crowded_board,
    bench_straight_run_large_board
);
criterion_main!(benches);
