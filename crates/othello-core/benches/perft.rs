use std::hint::black_box;
use std::time::Duration;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use othello_core::game_state::GameState;
use othello_core::perft::perft;
use othello_core::types::Move;

/// Plays `moves` from the opening position, alternating from Black.
fn position_after(moves: &[(i8, i8)]) -> GameState {
    let mut game = GameState::new();
    for &(row, col) in moves {
        let mv = Move::new(row, col, game.side_to_move());
        game.make_move(&mv)
            .unwrap_or_else(|e| panic!("bench line is invalid at {mv}: {e}"));
    }
    game
}

fn perft_benchmark(c: &mut Criterion) {
    let positions = [
        ("opening", GameState::new(), 6),
        ("f5d6c3d3c4", position_after(&[(4, 5), (5, 3), (2, 2), (2, 3), (3, 2)]), 5),
        ("f5f6e6d6", position_after(&[(4, 5), (5, 5), (5, 4), (5, 3)]), 5),
    ];

    let mut group = c.benchmark_group("perft");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(6));

    for (name, game, depth) in positions {
        let disc = game.side_to_move();
        assert!(
            perft(&game, disc, 1) > 0,
            "{name}: {disc} has no move in the bench position"
        );

        group.bench_with_input(BenchmarkId::new(name, depth), &game, |b, game| {
            b.iter(|| black_box(perft(black_box(game), disc, depth)));
        });
    }

    group.finish();
}

criterion_group!(benches, perft_benchmark);
criterion_main!(benches);
