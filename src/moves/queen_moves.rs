//! Queen attack bitboards: rook lines plus diagonals.

use crate::game_state::chess_types::Bitboard;
use crate::moves::rays::{trace_ray, DIAGONAL_STEPS};
use crate::moves::rook_moves::rook_attacks;

#[inline]
pub fn diagonal_attacks(square: usize, occupancy: Bitboard) -> Bitboard {
    DIAGONAL_STEPS
        .iter()
        .fold(0, |acc, &(dr, dc)| acc | trace_ray(square, dr, dc, occupancy))
}

#[inline]
pub fn queen_attacks(square: usize, occupancy: Bitboard) -> Bitboard {
    rook_attacks(square, occupancy) | diagonal_attacks(square, occupancy)
}

#[cfg(test)]
mod tests {
    use super::{diagonal_attacks, queen_attacks};

    #[test]
    fn corner_queen_sees_nine_squares_on_empty_board() {
        assert_eq!(queen_attacks(0, 0).count_ones(), 9);
        assert_eq!(diagonal_attacks(0, 0), (1 << 5) | (1 << 10) | (1 << 15));
    }

    #[test]
    fn diagonal_blocker_stops_ray() {
        let blocker = 1u16 << 5;
        assert_eq!(diagonal_attacks(0, blocker), 1 << 5);
    }
}
