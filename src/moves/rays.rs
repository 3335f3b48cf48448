//! Ray tracing on the 4x4 board shared by the sliding pieces.

use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::Bitboard;

/// Orthogonal unit steps as `(row, col)` deltas.
pub const ORTHOGONAL_STEPS: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Diagonal unit steps as `(row, col)` deltas.
pub const DIAGONAL_STEPS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Squares reached from `square` walking `(row_step, col_step)` until the edge
/// or the first occupied square, which is included.
pub fn trace_ray(square: usize, row_step: i32, col_step: i32, occupancy: Bitboard) -> Bitboard {
    let size = BOARD_SIZE as i32;
    let mut row = (square / BOARD_SIZE) as i32 + row_step;
    let mut col = (square % BOARD_SIZE) as i32 + col_step;
    let mut attacks: Bitboard = 0;

    while (0..size).contains(&row) && (0..size).contains(&col) {
        let bit = 1 << (row * size + col);
        attacks |= bit;

        if (occupancy & bit) != 0 {
            break;
        }

        row += row_step;
        col += col_step;
    }

    attacks
}
