//! Uniform random mover.
//!
//! Picks any legal move with equal probability. Used as the weakest
//! opponent and as a driver for randomized game tests.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{parse_seed_option, Engine, EngineOutput};
use crate::errors::{MiniChessError, MiniChessResult};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;

pub struct RandomEngine {
    move_generator: LegalMoveGenerator,
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Deterministic move sequence for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            move_generator: LegalMoveGenerator,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "MiniChess Random"
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
            .push(format!("random_engine legal_moves {}", legal_moves.len()));

        let Some(picked) = legal_moves.as_slice().choose(&mut self.rng) else {
            return Ok(out);
        };

        out.best_move = Some(picked.mv);
        Ok(out)
    }
}
