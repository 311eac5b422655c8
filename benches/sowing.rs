use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

use pebble_mancala::{
    AiAgent, Board, GameRng, GameState, PitId, Row, RulesEngine, Side, SideMap, StoneTracker,
    TurnEngine,
};

fn playout(engine: &TurnEngine, agents: &mut SideMap<AiAgent>, first: Side) -> GameState {
    let mut state = GameState::new(first);
    while let Some(side) = state.side_to_move() {
        let Some(mv) = agents[side].choose(engine, &state) else {
            break;
        };
        engine.apply_move(&mut state, mv.pit, mv.side);
    }
    state
}

fn bench_apply_move(c: &mut Criterion) {
    let engine = TurnEngine::new();

    c.bench_function("apply_move/opening", |b| {
        b.iter_batched(
            || GameState::new(Side::Right),
            |mut state| black_box(engine.apply_move(&mut state, PitId::new(Row::Bottom, 2), Side::Right)),
            BatchSize::SmallInput,
        )
    });

    // 13+ stones wrap the whole ring.
    let lap = Board::from_parts([4, 4, 4, 4, 4, 4], [0, 0, 0, 0, 0, 16], 4, 4);
    c.bench_function("apply_move/full_lap", |b| {
        b.iter_batched(
            || GameState::from_board(lap.clone(), Side::Right),
            |mut state| black_box(engine.apply_move(&mut state, PitId::new(Row::Bottom, 5), Side::Right)),
            BatchSize::SmallInput,
        )
    });
}

fn bench_playout(c: &mut Criterion) {
    let engine = TurnEngine::new();
    let mut rng = GameRng::new(42);

    c.bench_function("playout/random", |b| {
        b.iter_batched(
            || SideMap::new(|side| AiAgent::new(side, Duration::ZERO, rng.fork())),
            |mut agents| black_box(playout(&engine, &mut agents, Side::Right)),
            BatchSize::SmallInput,
        )
    });

    c.bench_function("playout/random_tracked", |b| {
        b.iter_batched(
            || SideMap::new(|side| AiAgent::new(side, Duration::ZERO, rng.fork())),
            |mut agents| {
                let mut state = GameState::new(Side::Right);
                let mut stones = StoneTracker::new();
                while let Some(side) = state.side_to_move() {
                    let Some(mv) = agents[side].choose(&engine, &state) else {
                        break;
                    };
                    stones.apply(&engine.apply_move(&mut state, mv.pit, mv.side));
                }
                black_box(stones)
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_apply_move, bench_playout);
criterion_main!(benches);
