use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use snake_engine::{EdgeWalls, GameConfig, GamePhase, GameRng, GameState, MapDefinition};

fn bench_config() -> GameConfig {
    GameConfig {
        difficulty: 10,
        random_seed: 9,
        food_count: 5,
        food_probabilities: [0.6, 0.3, 0.1],
    }
}

fn bench_map() -> MapDefinition {
    MapDefinition {
        width: 20,
        height: 20,
        walls: EdgeWalls::open(),
        obstacles: Vec::new(),
    }
}

fn bench_full_game() {
    let config = bench_config();
    let map = bench_map();
    let mut rng = GameRng::new(9);
    let mut state = GameState::new(&config, &map, &mut rng).unwrap();

    let mut ticks = 0;
    while state.phase() == GamePhase::Running && ticks < 2000 {
        state.update(&mut rng).unwrap();
        ticks += 1;
    }
}

fn tick_bench(c: &mut Criterion) {
    let config = bench_config();
    let map = bench_map();

    let mut group = c.benchmark_group("engine");

    group.bench_function("single_tick", |b| {
        let mut rng = GameRng::new(9);
        let mut state = GameState::new(&config, &map, &mut rng).unwrap();
        b.iter(|| {
            if state.phase() != GamePhase::Running {
                rng = GameRng::new(9);
                state = GameState::new(&config, &map, &mut rng).unwrap();
            }
            state.update(&mut rng).unwrap();
        });
    });

    group.bench_function("frame_snapshot", |b| {
        let mut rng = GameRng::new(9);
        let state = GameState::new(&config, &map, &mut rng).unwrap();
        b.iter(|| black_box(state.grid().snapshot_rows()));
    });

    group.bench_function("full_game", |b| b.iter(bench_full_game));

    group.finish();
}

criterion_group!(benches, tick_bench);
criterion_main!(benches);
