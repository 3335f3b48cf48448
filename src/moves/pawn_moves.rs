//! Pawn step and capture bitboards.
//!
//! White pawns walk toward row 0, Black pawns toward row 3. No double step,
//! en passant or promotion exists on this board.

use crate::game_state::chess_rules::{BOARD_SIZE, SQUARE_COUNT};
use crate::game_state::chess_types::{Bitboard, Color};

pub const WHITE_PAWN_PUSHES: [Bitboard; SQUARE_COUNT] = generate_pushes(Color::White);
pub const BLACK_PAWN_PUSHES: [Bitboard; SQUARE_COUNT] = generate_pushes(Color::Black);
pub const WHITE_PAWN_ATTACKS: [Bitboard; SQUARE_COUNT] = generate_attacks(Color::White);
pub const BLACK_PAWN_ATTACKS: [Bitboard; SQUARE_COUNT] = generate_attacks(Color::Black);

/// The square straight ahead, if any.
#[inline]
pub const fn pawn_pushes(color: Color, square: usize) -> Bitboard {
    match color {
        Color::White => WHITE_PAWN_PUSHES[square],
        Color::Black => BLACK_PAWN_PUSHES[square],
    }
}

/// The two forward diagonals, clipped to the board.
#[inline]
pub const fn pawn_attacks(color: Color, square: usize) -> Bitboard {
    match color {
        Color::White => WHITE_PAWN_ATTACKS[square],
        Color::Black => BLACK_PAWN_ATTACKS[square],
    }
}

const fn generate_pushes(color: Color) -> [Bitboard; SQUARE_COUNT] {
    let direction = color.pawn_direction() as i32;
    let size = BOARD_SIZE as i32;
    let mut table = [0; SQUARE_COUNT];
    let mut sq = 0usize;

    while sq < SQUARE_COUNT {
        let row = (sq / BOARD_SIZE) as i32 + direction;
        let col = (sq % BOARD_SIZE) as i32;
        if row >= 0 && row < size {
            table[sq] = 1 << (row * size + col);
        }
        sq += 1;
    }

    table
}

const fn generate_attacks(color: Color) -> [Bitboard; SQUARE_COUNT] {
    let direction = color.pawn_direction() as i32;
    let size = BOARD_SIZE as i32;
    let mut table = [0; SQUARE_COUNT];
    let mut sq = 0usize;

    while sq < SQUARE_COUNT {
        let row = (sq / BOARD_SIZE) as i32 + direction;
        let col = (sq % BOARD_SIZE) as i32;
        let mut attacks = 0;

        if row >= 0 && row < size {
            if col > 0 {
                attacks |= 1 << (row * size + col - 1);
            }
            if col < size - 1 {
                attacks |= 1 << (row * size + col + 1);
            }
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}
