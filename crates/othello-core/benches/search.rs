use std::hint::black_box;
use std::time::Duration;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use othello_core::disc::Disc;
use othello_core::game_state::GameState;
use othello_core::search::{SearchOptions, Searcher, TieBreak};
use othello_core::types::Move;

const BENCH_DEPTHS: [u32; 4] = [1, 2, 3, 4];

fn midgame_position() -> GameState {
    let mut game = GameState::new();
    for (row, col, disc) in [
        (4, 5, Disc::Black),
        (5, 3, Disc::White),
        (2, 2, Disc::Black),
        (2, 3, Disc::White),
        (3, 2, Disc::Black),
    ] {
        let mv = Move::new(row, col, disc);
        game.make_move(&mv)
            .unwrap_or_else(|e| panic!("bench position is invalid: {e}"));
    }
    game
}

fn search_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(5));

    let game = midgame_position();
    let options = SearchOptions::default()
        .with_tie_break(TieBreak::PreferFirst)
        .with_seed(Some(0));

    for &depth in &BENCH_DEPTHS {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            let mut searcher = Searcher::new(&options);
            b.iter(|| black_box(searcher.select_move(black_box(&game), Disc::White, depth)));
        });
    }

    group.finish();
}

criterion_group!(benches, search_benchmark);
criterion_main!(benches);
