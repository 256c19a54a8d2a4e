use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use ai_snake_common::games::SessionRng;
use ai_snake_common::games::snake::{BotController, FieldSize, Point, SnakeGameState};

fn play_full_game(seed: u64) -> u32 {
    let mut rng = SessionRng::new(seed);
    let mut state = SnakeGameState::new(FieldSize::new(20, 20), &mut rng);
    state.start();

    while !state.is_over() && state.ticks() < 10_000 {
        state.tick(&mut rng);
    }
    state.score()
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("full_game_20x20", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            black_box(play_full_game(seed))
        })
    });

    c.bench_function("decide_direction", |b| {
        b.iter(|| {
            BotController::decide_direction(black_box(Point::new(5, 5)), black_box(Point::new(12, 3)))
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
