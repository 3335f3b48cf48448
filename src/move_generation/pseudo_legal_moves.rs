//! Geometric move generation.
//!
//! Produces every square a piece can reach by its movement rule, without
//! asking whether the mover's own king ends up attacked. The attack detector
//! is built on this, so nothing here may consult legality.

use crate::game_state::chess_types::*;
use crate::moves::king_moves::king_attacks;
use crate::moves::pawn_moves::{pawn_attacks, pawn_pushes};
use crate::moves::queen_moves::queen_attacks;
use crate::moves::rook_moves::rook_attacks;

/// Destinations of the piece on `from`, as seen by `mover`.
///
/// Empty when `from` is empty, off the board, or holds a piece of the other
/// color.
pub fn pseudo_legal_targets(board: &Board, from: Square, mover: Color) -> Bitboard {
    let Some(piece) = board.piece_at(from) else {
        return 0;
    };
    if piece.color != mover {
        return 0;
    }
    let Some(sq) = from.index() else {
        return 0;
    };

    let own_occ = board.occupancy_by_color(mover);
    let enemy_occ = board.occupancy_by_color(mover.opposite());
    let all_occ = own_occ | enemy_occ;

    match piece.kind {
        PieceKind::Pawn => (pawn_pushes(mover, sq) & !all_occ) | (pawn_attacks(mover, sq) & enemy_occ),
        PieceKind::Rook => rook_attacks(sq, all_occ) & !own_occ,
        PieceKind::Queen => queen_attacks(sq, all_occ) & !own_occ,
        PieceKind::King => king_attacks(sq) & !own_occ,
    }
}

/// `pseudo_legal_targets` as a list of squares, row-major.
pub fn pseudo_legal_moves(board: &Board, from: Square, mover: Color) -> Vec<Square> {
    squares_of(pseudo_legal_targets(board, from, mover)).collect()
}

/// Every pseudo-legal move of every `color` piece.
pub fn pseudo_legal_moves_for_color(board: &Board, color: Color) -> Vec<Move> {
    board
        .squares_of_color(color)
        .flat_map(|from| {
            squares_of(pseudo_legal_targets(board, from, color)).map(move |to| Move::new(from, to))
        })
        .collect()
}
