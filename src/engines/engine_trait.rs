//! Engine abstraction layer.
//!
//! Every move chooser sits behind the same trait so the match harness and
//! the binary can swap strategies at runtime.

use crate::errors::{MiniChessError, MiniChessResult};
use crate::game_state::chess_types::Move;
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// `None` when the side to move has no legal move.
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn set_option(&mut self, _name: &str, _value: &str) -> MiniChessResult<()> {
        Ok(())
    }

    fn choose_move(&mut self, game_state: &GameState) -> MiniChessResult<EngineOutput>;
}

/// Handle the `seed` option shared by the randomised engines.
pub fn parse_seed_option(name: &str, value: &str) -> MiniChessResult<u64> {
    match name.trim().to_ascii_lowercase().as_str() {
        "seed" => value
            .trim()
            .parse::<u64>()
            .map_err(|_| MiniChessError::InvalidOptionValue {
                name: name.to_owned(),
                value: value.to_owned(),
            }),
        other => Err(MiniChessError::UnknownOption(other.to_owned())),
    }
}
