use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use minichess::game_state::chess_rules::{ROOK_KING_QUEEN_ROOK_GRID, ROOK_QUEEN_KING_ROOK_GRID};
use minichess::game_state::chess_types::Color;
use minichess::game_state::game_config::GameConfig;
use minichess::game_state::game_state::GameState;
use minichess::move_generation::legal_move_generator::LegalMoveGenerator;
use minichess::move_generation::perft::perft;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    grid: &'static str,
    expected_nodes: &'static [u64],
}

const CASES_QUICK: &[BenchCase] = &[
    BenchCase {
        name: "rqkr_start",
        grid: ROOK_QUEEN_KING_ROOK_GRID,
        expected_nodes: &[6, 21, 112],
    },
    BenchCase {
        name: "rkqr_start",
        grid: ROOK_KING_QUEEN_ROOK_GRID,
        expected_nodes: &[6, 22, 90],
    },
];

const CASES_STANDARD: &[BenchCase] = &[
    BenchCase {
        name: "rqkr_start",
        grid: ROOK_QUEEN_KING_ROOK_GRID,
        expected_nodes: &[6, 21, 112, 633, 3775],
    },
    BenchCase {
        name: "rkqr_start",
        grid: ROOK_KING_QUEEN_ROOK_GRID,
        expected_nodes: &[6, 22, 90, 531, 3115],
    },
];

fn standard_suite_selected() -> bool {
    matches!(
        std::env::var("MINICHESS_BENCH_SUITE"),
        Ok(value) if value.eq_ignore_ascii_case("standard")
    )
}

fn bench_perft(c: &mut Criterion) {
    let (suite_name, cases) = if standard_suite_selected() {
        ("standard", CASES_STANDARD)
    } else {
        ("quick", CASES_QUICK)
    };

    let mut group = c.benchmark_group(format!("perft_{suite_name}"));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in cases {
        let game = GameState::from_grid(case.grid, Color::White, GameConfig::default())
            .expect("benchmark grid should parse");

        for (depth_idx, expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;

            // Correctness guard before benchmarking.
            let warmup = perft(&LegalMoveGenerator, &game, depth).expect("perft should run");
            assert_eq!(
                warmup.nodes as u64, *expected_nodes,
                "node mismatch in warmup for {} depth {}",
                case.name, depth
            );

            group.throughput(Throughput::Elements(*expected_nodes));
            let bench_name = format!("{}_d{}", case.name, depth);
            let bench_game = game.clone();

            group.bench_with_input(
                BenchmarkId::from_parameter(bench_name),
                expected_nodes,
                |b, expected| {
                    b.iter(|| {
                        let count = perft(&LegalMoveGenerator, black_box(&bench_game), black_box(depth))
                            .expect("perft benchmark run should succeed");
                        assert_eq!(count.nodes as u64, *expected);
                        black_box(count.nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft);
criterion_main!(perft_benches);
