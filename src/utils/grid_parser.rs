//! Board snapshot parser.
//!
//! Accepts the compact `rqkr/pppp/PPPP/RQKR` text form (row 0 first, `.` for
//! an empty cell) and the 4x4 character grid produced by the vision side.

use crate::errors::{MiniChessError, MiniChessResult};
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::*;

pub fn parse_board_grid(grid: &str) -> MiniChessResult<Board> {
    let rows: Vec<&str> = grid.trim().split('/').collect();
    if rows.len() != BOARD_SIZE {
        return Err(MiniChessError::InvalidGridShape(format!(
            "expected {BOARD_SIZE} rows separated by '/', found {}",
            rows.len()
        )));
    }

    let mut cells = [['.'; BOARD_SIZE]; BOARD_SIZE];
    for (row, row_str) in rows.iter().enumerate() {
        let chars: Vec<char> = row_str.chars().collect();
        if chars.len() != BOARD_SIZE {
            return Err(MiniChessError::InvalidGridShape(format!(
                "row {row} has {} cells, expected {BOARD_SIZE}",
                chars.len()
            )));
        }
        cells[row].copy_from_slice(&chars);
    }

    board_from_rows(&cells)
}

/// Build a board from a character snapshot, `rows[row][col]`.
///
/// At most one king per color is accepted.
pub fn board_from_rows(rows: &[[char; BOARD_SIZE]; BOARD_SIZE]) -> MiniChessResult<Board> {
    let mut board = Board::empty();
    let mut kings_seen = [false; 2];

    for (row, cells) in rows.iter().enumerate() {
        for (col, &ch) in cells.iter().enumerate() {
            if ch == '.' {
                continue;
            }
            let piece = Piece::from_char(ch).ok_or(MiniChessError::InvalidGridChar { ch, row, col })?;
            if piece.kind == PieceKind::King {
                let seen = &mut kings_seen[piece.color.index()];
                if *seen {
                    return Err(MiniChessError::DuplicateKing(piece.color));
                }
                *seen = true;
            }
            board.set(Square::new(row as u8, col as u8), Some(piece));
        }
    }

    Ok(board)
}
