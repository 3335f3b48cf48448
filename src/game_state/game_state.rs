//! The live game.
//!
//! `GameState` owns the board, king squares, side to move, move history and
//! the per-game configuration. Queries borrow it immutably; the only
//! mutation path is `try_apply_move` / `apply_move`, which either applies a
//! move completely or leaves every field untouched.

use crate::errors::{MiniChessResult, MoveRejection};
use crate::game_state::board::KingPositions;
use crate::game_state::chess_types::*;
use crate::game_state::game_config::GameConfig;
use crate::game_state::game_status::{DrawReason, GameOutcome, GameStatus};
use crate::game_state::move_history::{MoveHistory, MoveRecord};
use crate::move_generation::legal_move_apply::{apply_move, AppliedMove, MoveValidation};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{all_legal_moves, has_legal_move, legal_moves};
use crate::move_generation::pseudo_legal_moves::pseudo_legal_moves;
use crate::utils::grid_generator::generate_board_grid;
use crate::utils::grid_parser::parse_board_grid;
use crate::utils::state_key::{state_vector, StateKey, STATE_VECTOR_LEN};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    king_positions: KingPositions,
    side_to_move: Color,
    history: MoveHistory,
    config: GameConfig,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Default layout, White to move.
    #[inline]
    pub fn new_game() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// Start position for `config.starting_layout`, White to move.
    pub fn with_config(config: GameConfig) -> Self {
        Self::from_board(
            Board::starting_position(config.starting_layout),
            Color::White,
            config,
        )
    }

    /// Arbitrary position. King squares are read off the board so they can
    /// never disagree with it.
    pub fn from_board(board: Board, side_to_move: Color, config: GameConfig) -> Self {
        Self {
            king_positions: KingPositions::from_board(&board),
            board,
            side_to_move,
            history: MoveHistory::default(),
            config,
        }
    }

    /// Position from a `rqkr/pppp/PPPP/RQKR` style grid.
    pub fn from_grid(grid: &str, side_to_move: Color, config: GameConfig) -> MiniChessResult<Self> {
        let board = parse_board_grid(grid)?;
        Ok(Self::from_board(board, side_to_move, config))
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn king_positions(&self) -> &KingPositions {
        &self.king_positions
    }

    /// `None` once `color`'s king has been captured.
    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.king_positions.get(color)
    }

    #[inline]
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub(crate) fn position_mut(&mut self) -> (&mut Board, &mut KingPositions) {
        (&mut self.board, &mut self.king_positions)
    }

    pub(crate) fn record_and_switch_turn(&mut self, record: MoveRecord) {
        self.history.push(record);
        self.side_to_move = self.side_to_move.opposite();
    }

    /// Geometric destinations of the piece on `from`, as its own color.
    pub fn pseudo_legal_moves(&self, from: Square) -> Vec<Square> {
        match self.board.color_at(from) {
            Some(color) => pseudo_legal_moves(&self.board, from, color),
            None => Vec::new(),
        }
    }

    #[inline]
    pub fn legal_moves(&self, from: Square) -> Vec<Square> {
        legal_moves(self, from)
    }

    #[inline]
    pub fn all_legal_moves(&self, color: Color) -> Vec<Move> {
        all_legal_moves(self, color)
    }

    /// Validate against the legal move set and apply.
    pub fn try_apply_move(&mut self, mv: Move) -> Result<AppliedMove, MoveRejection> {
        apply_move(self, mv, MoveValidation::Legal)
    }

    /// `try_apply_move` reduced to accepted / rejected.
    pub fn apply_move(&mut self, mv: Move) -> bool {
        self.try_apply_move(mv).is_ok()
    }

    /// Apply without checking the destination. Origin and turn are still checked.
    pub fn apply_move_unchecked(&mut self, mv: Move) -> Result<AppliedMove, MoveRejection> {
        apply_move(self, mv, MoveValidation::Unchecked)
    }

    #[inline]
    pub fn is_check(&self, color: Color) -> bool {
        is_king_in_check(self, color)
    }

    pub fn is_checkmate(&self) -> bool {
        let side = self.side_to_move;
        self.is_check(side) && !has_legal_move(self, side)
    }

    pub fn is_stalemate_or_draw(&self) -> bool {
        let side = self.side_to_move;
        !self.is_check(side) && !has_legal_move(self, side)
    }

    /// Color whose king is missing from the board, White checked first.
    pub fn is_king_captured(&self) -> Option<Color> {
        Color::ALL
            .into_iter()
            .find(|&color| self.board.find_king(color).is_none())
    }

    /// Nothing but the two kings left.
    pub fn is_only_kings_remaining(&self) -> bool {
        self.board
            .occupied()
            .all(|(_, piece)| piece.kind == PieceKind::King)
            && Color::ALL
                .into_iter()
                .all(|color| self.board.find_king(color).is_some())
    }

    pub fn status(&self) -> GameStatus {
        if let Some(captured) = self.is_king_captured() {
            return GameStatus::KingCaptured { captured };
        }

        let side = self.side_to_move;
        if !has_legal_move(self, side) {
            return if self.is_check(side) {
                GameStatus::Checkmate { loser: side }
            } else {
                GameStatus::Draw(DrawReason::Stalemate)
            };
        }

        if self.config.only_kings_is_draw && self.is_only_kings_remaining() {
            return GameStatus::Draw(DrawReason::OnlyKingsRemaining);
        }

        GameStatus::InProgress
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.status().is_terminal()
    }

    #[inline]
    pub fn game_result(&self) -> Option<GameOutcome> {
        self.status().outcome()
    }

    /// Hashable (board, side to move) snapshot.
    pub fn state_key(&self) -> StateKey {
        StateKey::from_game_state(self)
    }

    pub fn state_vector(&self) -> [i8; STATE_VECTOR_LEN] {
        state_vector(&self.board, self.side_to_move)
    }

    pub fn grid(&self) -> String {
        generate_board_grid(&self.board)
    }
}
