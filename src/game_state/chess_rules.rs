//! Canonical MiniChess rule constants.
//!
//! Board dimensions, the two observed starting layouts and the material
//! values used for evaluation.

use crate::game_state::chess_types::PieceKind;

/// Side length of the board.
pub const BOARD_SIZE: usize = 4;

/// Number of squares on the board.
pub const SQUARE_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Start position with White's back rank Rook-Queen-King-Rook (kings on the same file).
pub const ROOK_QUEEN_KING_ROOK_GRID: &str = "rqkr/pppp/PPPP/RQKR";

/// Start position with White's back rank Rook-King-Queen-Rook.
pub const ROOK_KING_QUEEN_ROOK_GRID: &str = "rqkr/pppp/PPPP/RKQR";

/// Black's back rank in every layout, column 0 first.
pub const BLACK_BACK_RANK: [PieceKind; BOARD_SIZE] =
    [PieceKind::Rook, PieceKind::Queen, PieceKind::King, PieceKind::Rook];

/// Which start position a new game uses. Named after White's back rank;
/// Black's back rank is always `r q k r`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StartingLayout {
    #[default]
    RookQueenKingRook,
    RookKingQueenRook,
}

impl StartingLayout {
    pub const fn grid(self) -> &'static str {
        match self {
            StartingLayout::RookQueenKingRook => ROOK_QUEEN_KING_ROOK_GRID,
            StartingLayout::RookKingQueenRook => ROOK_KING_QUEEN_ROOK_GRID,
        }
    }

    /// White's back rank, column 0 first.
    pub const fn white_back_rank(self) -> [PieceKind; BOARD_SIZE] {
        match self {
            StartingLayout::RookQueenKingRook => BLACK_BACK_RANK,
            StartingLayout::RookKingQueenRook => {
                [PieceKind::Rook, PieceKind::King, PieceKind::Queen, PieceKind::Rook]
            }
        }
    }

    /// Parse the option value used by `GameConfig::set_option`.
    pub fn from_option(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "rqkr" | "rook_queen_king_rook" => Some(StartingLayout::RookQueenKingRook),
            "rkqr" | "rook_king_queen_rook" => Some(StartingLayout::RookKingQueenRook),
            _ => None,
        }
    }
}

/// Material value of a piece kind.
#[inline]
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 100,
    }
}
