use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gomoku_core::eval::evaluate_board;
use gomoku_core::rules::validate_move;
use gomoku_core::search::generate_candidates;
use gomoku_core::{AIEngine, Diagram, EngineConfig, Stone};

const MIDGAME: &str = "
captures 2 0
. . . . . . . . . . . . . . . . . . .
. . . . . . . . . . . . . . . . . . .
. . . . . . . . . . . . . . . . . . .
. . . . . . . . . . . . . . . . . . .
. . . . . . . . . . . . . . . . . . .
. . . . . . . . . . . . . . . . . . .
. . . . . . . O . . . . . . . . . . .
. . . . . . . X X O . . . . . . . . .
. . . . . . . . X O X . . . . . . . .
. . . . . . . O X X O . . . . . . . .
. . . . . . . . O X . . . . . . . . .
. . . . . . . . . O . . . . . . . . .
. . . . . . . . . . . . . . . . . . .
. . . . . . . . . . . . . . . . . . .
. . . . . . . . . . . . . . . . . . .
. . . . . . . . . . . . . . . . . . .
. . . . . . . . . . . . . . . . . . .
. . . . . . . . . . . . . . . . . . .
. . . . . . . . . . . . . . . . . . .
";

fn midgame() -> Diagram {
    MIDGAME.parse().unwrap()
}

fn bench_evaluate_board(c: &mut Criterion) {
    let diagram = midgame();
    c.bench_function("evaluate_board_midgame", |b| {
        b.iter(|| {
            evaluate_board(
                black_box(&diagram.board),
                black_box(&diagram.state),
                Stone::Black,
                120,
            )
        })
    });
}

fn bench_candidates(c: &mut Criterion) {
    let diagram = midgame();
    c.bench_function("generate_candidates_midgame", |b| {
        b.iter(|| generate_candidates(black_box(&diagram.board), Stone::Black))
    });
}

fn bench_validate_move(c: &mut Criterion) {
    let diagram = midgame();
    c.bench_function("validate_move_all_cells", |b| {
        b.iter(|| {
            (0..19)
                .flat_map(|r| (0..19).map(move |c| (r, c)))
                .filter(|&(r, c)| validate_move(&diagram.board, r, c, Stone::Black).is_valid())
                .count()
        })
    });
}

fn bench_best_move(c: &mut Criterion) {
    let diagram = midgame();
    let mut group = c.benchmark_group("compute_best_move");
    group.sample_size(10);
    for depth in [2u8, 4] {
        group.bench_function(format!("depth_{}", depth), |b| {
            let config = EngineConfig::default().max_depth(depth).time_limit(None);
            let mut engine = AIEngine::new(Stone::Black, config).unwrap();
            b.iter(|| {
                engine
                    .load_board(&diagram.board.to_codes(), 2, 0)
                    .unwrap();
                engine.clear_cache();
                engine.compute_best_move()
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_evaluate_board,
    bench_candidates,
    bench_validate_move,
    bench_best_move
);
criterion_main!(benches);
