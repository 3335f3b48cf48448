//! Board snapshot writer, the inverse of `grid_parser`.

use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::*;

/// `rqkr/pppp/PPPP/RQKR` form, row 0 first.
pub fn generate_board_grid(board: &Board) -> String {
    board_to_rows(board)
        .iter()
        .map(|row| row.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("/")
}

pub fn board_to_rows(board: &Board) -> [[char; BOARD_SIZE]; BOARD_SIZE] {
    let mut rows = [['.'; BOARD_SIZE]; BOARD_SIZE];
    for (square, piece) in board.occupied() {
        rows[square.row as usize][square.col as usize] = piece.to_char();
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::grid_parser::parse_board_grid;

    #[test]
    fn sparse_board_keeps_dots() {
        let grid = "..k./.P../..../R..K";
        let board = parse_board_grid(grid).expect("grid should parse");
        assert_eq!(generate_board_grid(&board), grid);
        assert_eq!(board_to_rows(&board)[1], ['.', 'P', '.', '.']);
    }

    #[test]
    fn empty_board_is_all_dots() {
        assert_eq!(generate_board_grid(&Board::empty()), "..../..../..../....");
    }
}
