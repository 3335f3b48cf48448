//! Errors used throughout the MiniChess engine.
//!
//! Two families live here. `MoveRejection` is the reason a move request was
//! refused; it never leaves the board half-updated and callers are expected to
//! re-prompt or pick another candidate. `MiniChessError` covers input parsing,
//! configuration and engine failures.

use thiserror::Error;

use crate::game_state::chess_types::{Color, Move, Square};

/// Why `GameState::try_apply_move` refused a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveRejection {
    /// Origin or destination lies outside the 4x4 board.
    #[error("move {0} has a coordinate outside the board")]
    InvalidCoordinate(Move),

    /// There is no piece on the origin square.
    #[error("no piece on origin square {0}")]
    EmptyOrigin(Square),

    /// The piece on the origin belongs to the side that is not on move.
    #[error("piece on {square} belongs to {owner:?}, but {to_move:?} is on move")]
    WrongSideOrigin {
        square: Square,
        owner: Color,
        to_move: Color,
    },

    /// The destination is not among the legal moves of the origin piece.
    #[error("move {0} is not legal in this position")]
    IllegalDestination(Move),
}

/// Unified error type for parsing, configuration and engine plumbing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MiniChessError {
    /// A board snapshot contained a character that is not a piece or `.`.
    #[error("invalid board character '{ch}' at row {row}, col {col}")]
    InvalidGridChar { ch: char, row: usize, col: usize },

    /// A board snapshot did not have four rows of four cells.
    #[error("malformed board grid: {0}")]
    InvalidGridShape(String),

    /// A board snapshot placed more than one king of the same color.
    #[error("more than one {0:?} king on the board")]
    DuplicateKing(Color),

    /// Side-to-move token was neither `w` nor `b`.
    #[error("invalid side to move: {0}")]
    InvalidSideToMove(String),

    /// A learning-table key could not be decoded back into a position.
    #[error("invalid state key: {0}")]
    InvalidStateKey(String),

    /// `GameConfig::set_option` was called with a name it does not know.
    #[error("unknown option: {0}")]
    UnknownOption(String),

    /// A known option was given a value it cannot parse.
    #[error("invalid value '{value}' for option '{name}'")]
    InvalidOptionValue { name: String, value: String },

    /// An engine failed to produce a move.
    #[error("engine error: {0}")]
    Engine(String),
}

pub type MiniChessResult<T> = Result<T, MiniChessError>;
