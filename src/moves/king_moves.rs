//! King step bitboards.

use crate::game_state::chess_rules::{BOARD_SIZE, SQUARE_COUNT};
use crate::game_state::chess_types::Bitboard;

pub const KING_ATTACKS: [Bitboard; SQUARE_COUNT] = generate_king_attacks();

#[inline]
pub const fn king_attacks(square: usize) -> Bitboard {
    KING_ATTACKS[square]
}

const fn generate_king_attacks() -> [Bitboard; SQUARE_COUNT] {
    let mut table = [0; SQUARE_COUNT];
    let mut sq = 0usize;

    while sq < SQUARE_COUNT {
        let row = (sq / BOARD_SIZE) as i32;
        let col = (sq % BOARD_SIZE) as i32;
        let mut attacks = 0;

        let mut dr = -1;
        while dr <= 1 {
            let mut dc = -1;
            while dc <= 1 {
                if dr != 0 || dc != 0 {
                    attacks |= set_if_valid(row + dr, col + dc);
                }
                dc += 1;
            }
            dr += 1;
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

const fn set_if_valid(row: i32, col: i32) -> Bitboard {
    let size = BOARD_SIZE as i32;
    if row < 0 || row >= size || col < 0 || col >= size {
        return 0;
    }
    1 << (row * size + col)
}

#[cfg(test)]
mod tests {
    use super::{king_attacks, KING_ATTACKS};

    #[test]
    fn corner_king_has_three_targets() {
        assert_eq!(KING_ATTACKS[0].count_ones(), 3);
        assert_eq!(king_attacks(15).count_ones(), 3);
    }

    #[test]
    fn central_king_has_eight_targets() {
        // (1,1)
        assert_eq!(king_attacks(5).count_ones(), 8);
    }
}
