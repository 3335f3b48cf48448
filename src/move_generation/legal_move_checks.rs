//! Attack detection.
//!
//! A square is attacked by a color when some piece of that color has a
//! pseudo-legal move landing on it. Everything here is pure geometry on top of
//! `pseudo_legal_targets`; calling back into the legality filter would recurse
//! without end.

use crate::game_state::chess_types::*;
use crate::move_generation::pseudo_legal_moves::pseudo_legal_targets;

#[inline]
pub fn king_square(game_state: &GameState, color: Color) -> Option<Square> {
    game_state.king_positions().get(color)
}

/// True when `color`'s king is attacked. A side without a king is never in check.
#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    let Some(king_sq) = king_square(game_state, color) else {
        return false;
    };
    is_square_attacked(game_state.board(), king_sq, color.opposite())
}

pub fn is_square_attacked(board: &Board, target: Square, attacker_color: Color) -> bool {
    let target_mask = target.bit();
    if target_mask == 0 {
        return false;
    }

    board
        .squares_of_color(attacker_color)
        .any(|from| pseudo_legal_targets(board, from, attacker_color) & target_mask != 0)
}
