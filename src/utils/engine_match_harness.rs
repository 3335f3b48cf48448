//! Head-to-head engine match harness.
//!
//! Runs two `Engine` implementations against each other from a configured
//! start position until the game ends or the ply cap is reached. Every
//! applied move is kept with its capture flag so a physical board driver can
//! replay the game.

use tracing::{debug, info};

use crate::engines::engine_trait::Engine;
use crate::errors::{MiniChessError, MiniChessResult};
use crate::game_state::chess_types::Color;
use crate::game_state::game_config::GameConfig;
use crate::game_state::game_state::GameState;
use crate::game_state::game_status::{GameOutcome, GameStatus};
use crate::move_generation::legal_move_apply::AppliedMove;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchEnd {
    /// The game reached a terminal status.
    Finished(GameStatus),
    /// The ply cap was hit first.
    MaxPlies,
}

#[derive(Debug, Clone, Copy)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub game_config: GameConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            game_config: GameConfig::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub end: MatchEnd,
    pub final_state: GameState,
    pub moves: Vec<AppliedMove>,
    pub white_move_count: u32,
    pub black_move_count: u32,
}

impl MatchResult {
    /// Hitting the ply cap counts as a draw.
    pub fn outcome(&self) -> GameOutcome {
        match self.end {
            MatchEnd::Finished(status) => status.outcome().unwrap_or(GameOutcome::Draw),
            MatchEnd::MaxPlies => GameOutcome::Draw,
        }
    }

    #[inline]
    pub fn plies(&self) -> usize {
        self.moves.len()
    }

    pub fn capture_count(&self) -> usize {
        self.moves.iter().filter(|m| m.is_capture()).count()
    }
}

/// Play one match from the start position of `config.game_config`.
///
/// `engine_white` is White, `engine_black` is Black.
pub fn play_engine_match(
    engine_white: Box<dyn Engine>,
    engine_black: Box<dyn Engine>,
    config: MatchConfig,
) -> MiniChessResult<MatchResult> {
    let start = GameState::with_config(config.game_config);
    play_engine_match_from_state(engine_white, engine_black, start, config)
}

/// Play one match from a caller-provided state. `config.game_config` is
/// ignored; the state carries its own.
pub fn play_engine_match_from_state(
    mut engine_white: Box<dyn Engine>,
    mut engine_black: Box<dyn Engine>,
    mut state: GameState,
    config: MatchConfig,
) -> MiniChessResult<MatchResult> {
    engine_white.new_game();
    engine_black.new_game();

    let mut moves = Vec::<AppliedMove>::new();
    let mut white_move_count = 0u32;
    let mut black_move_count = 0u32;

    for _ in 0..config.max_plies {
        let status = state.status();
        if status.is_terminal() {
            info!(
                %status,
                plies = moves.len(),
                white = engine_white.name(),
                black = engine_black.name(),
                "match finished"
            );
            return Ok(MatchResult {
                end: MatchEnd::Finished(status),
                final_state: state,
                moves,
                white_move_count,
                black_move_count,
            });
        }

        let mover = state.side_to_move();
        let out = match mover {
            Color::White => engine_white.choose_move(&state)?,
            Color::Black => engine_black.choose_move(&state)?,
        };

        let chosen = out.best_move.ok_or_else(|| {
            MiniChessError::Engine(format!("{mover:?} engine returned no move in a live position"))
        })?;

        let applied = state
            .try_apply_move(chosen)
            .map_err(|rejection| MiniChessError::Engine(format!("engine returned illegal move: {rejection}")))?;
        debug!(ply = moves.len() + 1, mv = %chosen, capture = applied.is_capture(), "engine move");

        match mover {
            Color::White => white_move_count = white_move_count.saturating_add(1),
            Color::Black => black_move_count = black_move_count.saturating_add(1),
        }
        moves.push(applied);
    }

    let status = state.status();
    if status.is_terminal() {
        info!(%status, plies = moves.len(), "match finished on the last ply");
        return Ok(MatchResult {
            end: MatchEnd::Finished(status),
            final_state: state,
            moves,
            white_move_count,
            black_move_count,
        });
    }

    info!(plies = moves.len(), "match stopped at ply cap");
    Ok(MatchResult {
        end: MatchEnd::MaxPlies,
        final_state: state,
        moves,
        white_move_count,
        black_move_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::engine_greedy::GreedyEngine;
    use crate::engines::engine_random::RandomEngine;
    use crate::engines::engine_trait::EngineOutput;
    use crate::game_state::chess_types::{Move, Square};

    struct PassingEngine;

    impl Engine for PassingEngine {
        fn name(&self) -> &str {
            "passing"
        }

        fn choose_move(&mut self, _game_state: &GameState) -> MiniChessResult<EngineOutput> {
            Ok(EngineOutput::default())
        }
    }

    struct IllegalEngine;

    impl Engine for IllegalEngine {
        fn name(&self) -> &str {
            "illegal"
        }

        fn choose_move(&mut self, _game_state: &GameState) -> MiniChessResult<EngineOutput> {
            Ok(EngineOutput {
                best_move: Some(Move::new(Square::new(3, 0), Square::new(0, 0))),
                info_lines: Vec::new(),
            })
        }
    }

    #[test]
    fn random_engines_finish_or_hit_cap() {
        let result = play_engine_match(
            Box::new(RandomEngine::with_seed(1)),
            Box::new(RandomEngine::with_seed(2)),
            MatchConfig::default(),
        )
        .expect("match should run");

        assert!(result.plies() <= MatchConfig::default().max_plies as usize);
        assert_eq!(
            result.final_state.history().len(),
            result.plies()
        );
        assert_eq!(
            (result.white_move_count + result.black_move_count) as usize,
            result.plies()
        );
        assert!(result.capture_count() >= 1);
        if let MatchEnd::Finished(status) = result.end {
            assert!(status.is_terminal());
            assert_eq!(result.final_state.status(), status);
        }
    }

    #[test]
    fn greedy_takes_the_hanging_king() {
        let start = GameState::from_grid("k.../..../..../R..K", Color::White, GameConfig::default())
            .expect("grid should parse");
        let result = play_engine_match_from_state(
            Box::new(GreedyEngine::with_seed(3)),
            Box::new(RandomEngine::with_seed(4)),
            start,
            MatchConfig::default(),
        )
        .expect("match should run");

        assert_eq!(
            result.end,
            MatchEnd::Finished(GameStatus::KingCaptured { captured: Color::Black })
        );
        assert_eq!(result.outcome(), GameOutcome::WhiteWins);
        assert_eq!(result.plies(), 1);
        assert!(result.moves[0].is_capture());
    }

    #[test]
    fn zero_ply_cap_is_a_draw() {
        let result = play_engine_match(
            Box::new(RandomEngine::with_seed(5)),
            Box::new(RandomEngine::with_seed(6)),
            MatchConfig {
                max_plies: 0,
                ..MatchConfig::default()
            },
        )
        .expect("match should run");
        assert_eq!(result.end, MatchEnd::MaxPlies);
        assert_eq!(result.outcome(), GameOutcome::Draw);
    }

    #[test]
    fn misbehaving_engines_are_reported() {
        let passing = play_engine_match(
            Box::new(PassingEngine),
            Box::new(RandomEngine::with_seed(7)),
            MatchConfig::default(),
        );
        assert!(matches!(passing, Err(MiniChessError::Engine(_))));

        let illegal = play_engine_match(
            Box::new(IllegalEngine),
            Box::new(RandomEngine::with_seed(8)),
            MatchConfig::default(),
        );
        assert!(matches!(illegal, Err(MiniChessError::Engine(_))));
    }
}
