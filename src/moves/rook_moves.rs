//! Rook attack bitboards.

use crate::game_state::chess_types::Bitboard;
use crate::moves::rays::{trace_ray, ORTHOGONAL_STEPS};

/// Orthogonal squares seen from `square`, stopping at (and including) blockers.
#[inline]
pub fn rook_attacks(square: usize, occupancy: Bitboard) -> Bitboard {
    ORTHOGONAL_STEPS
        .iter()
        .fold(0, |acc, &(dr, dc)| acc | trace_ray(square, dr, dc, occupancy))
}
