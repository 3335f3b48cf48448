use thiserror::Error;

use crate::game_state::chess_types::{GameState, Move};
use crate::move_generation::legal_move_apply::AppliedMove;

pub type MoveGenResult<T> = Result<T, MoveGenerationError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveGenerationError {
    #[error("invalid game state: {0}")]
    InvalidState(String),
}

#[derive(Debug, Clone)]
pub struct GeneratedMove {
    pub mv: Move,
    pub applied: AppliedMove,
    pub game_after_move: GameState,
}

pub trait MoveGenerator: Send + Sync {
    /// Every legal move for the side to move, each paired with the resulting state.
    fn generate_legal_moves(&self, game_state: &GameState) -> MoveGenResult<Vec<GeneratedMove>>;
}
