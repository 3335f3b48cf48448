//! Self-play runner.
//!
//! Run with:
//! `cargo run --release`
//! `cargo run --release -- --seed 42 --greedy --verbose`
//!
//! Rules options come from `MINICHESS_LAYOUT`, `MINICHESS_IGNORE_CHECK_FOR`
//! and `MINICHESS_ONLY_KINGS_DRAW`; log level from `RUST_LOG`.

use std::process::ExitCode;

use chrono::Local;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use minichess::engines::engine_greedy::GreedyEngine;
use minichess::engines::engine_random::RandomEngine;
use minichess::engines::engine_trait::Engine;
use minichess::errors::{MiniChessError, MiniChessResult};
use minichess::game_state::game_config::GameConfig;
use minichess::utils::engine_match_harness::{play_engine_match, MatchConfig};
use minichess::utils::render_game_state::render_game_state;

struct CliArgs {
    seed: u64,
    greedy_white: bool,
    verbose: bool,
    max_plies: u16,
}

fn parse_args() -> MiniChessResult<CliArgs> {
    let mut out = CliArgs {
        seed: rand::random(),
        greedy_white: false,
        verbose: false,
        max_plies: MatchConfig::default().max_plies,
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--verbose" | "-v" => out.verbose = true,
            "--greedy" => out.greedy_white = true,
            "--seed" => out.seed = parse_value(&arg, args.next())?,
            "--max-plies" => out.max_plies = parse_value(&arg, args.next())?,
            other => return Err(MiniChessError::UnknownOption(other.to_owned())),
        }
    }

    Ok(out)
}

fn parse_value<T: std::str::FromStr>(name: &str, value: Option<String>) -> MiniChessResult<T> {
    let value = value.unwrap_or_default();
    value.parse().map_err(|_| MiniChessError::InvalidOptionValue {
        name: name.to_owned(),
        value,
    })
}

fn run() -> MiniChessResult<()> {
    let args = parse_args()?;
    let game_config = GameConfig::from_env()?;

    let white: Box<dyn Engine> = if args.greedy_white {
        Box::new(GreedyEngine::with_seed(args.seed))
    } else {
        Box::new(RandomEngine::with_seed(args.seed))
    };
    let black: Box<dyn Engine> = Box::new(RandomEngine::with_seed(args.seed.wrapping_add(1)));

    info!(
        started = %Local::now().format("%Y-%m-%d %H:%M:%S"),
        seed = args.seed,
        layout = ?game_config.starting_layout,
        white = white.name(),
        black = black.name(),
        "starting self-play game"
    );

    let result = play_engine_match(
        white,
        black,
        MatchConfig {
            max_plies: args.max_plies,
            game_config,
        },
    )?;

    if args.verbose {
        for (ply, applied) in result.moves.iter().enumerate() {
            let capture = if applied.is_capture() { " capture" } else { "" };
            println!("{:>3}. {} {}{}", ply + 1, applied.moved_piece.to_char(), applied.mv, capture);
        }
    }

    println!("{}", render_game_state(&result.final_state));
    println!(
        "result: {:?} (score {}) after {} plies, {} captures",
        result.outcome(),
        result.outcome().score(),
        result.plies(),
        result.capture_count()
    );

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("minichess=info")),
        )
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "self-play failed");
            ExitCode::FAILURE
        }
    }
}
