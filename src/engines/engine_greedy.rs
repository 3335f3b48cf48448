//! One-ply material maximiser.
//!
//! Scores every legal move by the mover's material balance in the resulting
//! position and picks among the best at random. Taking the enemy king beats
//! any other move.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{parse_seed_option, Engine, EngineOutput};
use crate::errors::{MiniChessError, MiniChessResult};
use crate::game_state::chess_rules::piece_value;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;

/// Own material minus the opponent's, from `color`'s side.
pub fn material_balance(board: &Board, color: Color) -> i32 {
    board
        .occupied()
        .map(|(_, piece)| {
            let value = piece_value(piece.kind);
            if piece.color == color {
                value
            } else {
                -value
            }
        })
        .sum()
}

pub struct GreedyEngine {
    move_generator: LegalMoveGenerator,
    rng: StdRng,
}

impl GreedyEngine {
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Seed only affects tie-breaking.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            move_generator: LegalMoveGenerator,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "MiniChess Greedy"
    }

    fn set_option(&mut self, name: &str, value: &str) -> MiniChessResult<()> {
        self.rng = StdRng::seed_from_u64(parse_seed_option(name, value)?);
        Ok(())
    }

    fn choose_move(&mut self, game_state: &GameState) -> MiniChessResult<EngineOutput> {
        let legal_moves = self
            .move_generator
            .generate_legal_moves(game_state)
            .map_err(|e| MiniChessError::Engine(e.to_string()))?;

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("greedy_engine legal_moves {}", legal_moves.len()));

        if legal_moves.is_empty() {
            return Ok(out);
        }

        let mover = game_state.side_to_move();
        let mut best_value = i32::MIN;
        let mut best_moves = Vec::new();

        for generated in &legal_moves {
            let takes_king = matches!(
                generated.applied.captured_piece,
                Some(Piece { kind: PieceKind::King, .. })
            );
            let value = if takes_king {
                i32::MAX
            } else {
                material_balance(generated.game_after_move.board(), mover)
            };

            if value > best_value {
                best_value = value;
                best_moves.clear();
                best_moves.push(generated.mv);
            } else if value == best_value {
                best_moves.push(generated.mv);
            }
        }

        let picked = best_moves
            .as_slice()
            .choose(&mut self.rng)
            .ok_or_else(|| MiniChessError::Engine("failed to choose greedy best move".to_owned()))?;

        out.info_lines
            .push(format!("greedy_engine material_score {best_value}"));
        out.best_move = Some(*picked);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::game_config::GameConfig;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col)
    }

    #[test]
    fn start_position_is_material_neutral() {
        let game = GameState::new_game();
        assert_eq!(material_balance(game.board(), Color::White), 0);
        assert_eq!(material_balance(game.board(), Color::Black), 0);
    }

    #[test]
    fn takes_the_queen_over_the_pawn() {
        // White rook on (3,0) can take the queen on (0,0) or the pawn on (3,3).
        let game = GameState::from_grid("q..k/..../.K../R..p", Color::White, GameConfig::default())
            .expect("grid should parse");
        let out = GreedyEngine::with_seed(11)
            .choose_move(&game)
            .expect("engine should succeed");
        assert_eq!(out.best_move, Some(Move::new(sq(3, 0), sq(0, 0))));
    }

    #[test]
    fn seed_option_reseeds_tie_breaking() {
        // Every start move leaves material level, so the choice is a pure tie break.
        let game = GameState::new_game();
        let mut a = GreedyEngine::with_seed(9);
        let mut b = GreedyEngine::with_seed(100);
        b.set_option("seed", "9").expect("seed option should parse");

        for _ in 0..5 {
            let left = a.choose_move(&game).expect("engine should succeed").best_move;
            let right = b.choose_move(&game).expect("engine should succeed").best_move;
            assert_eq!(left, right);
        }

        assert!(matches!(
            b.set_option("depth", "2"),
            Err(MiniChessError::UnknownOption(_))
        ));
        assert!(matches!(
            b.set_option("seed", "-1"),
            Err(MiniChessError::InvalidOptionValue { .. })
        ));
    }

    #[test]
    fn king_capture_wins_every_tie() {
        let config = GameConfig::default().ignoring_check_rule_for(Color::Black);
        let game = GameState::from_grid("k.../..../..../RQ.K", Color::White, config)
            .expect("grid should parse");
        let out = GreedyEngine::with_seed(5)
            .choose_move(&game)
            .expect("engine should succeed");

        let mv = out.best_move.expect("white has moves");
        assert_eq!(mv.to, sq(0, 0));
        assert!(out
            .info_lines
            .iter()
            .any(|line| line == &format!("greedy_engine material_score {}", i32::MAX)));
    }
}
