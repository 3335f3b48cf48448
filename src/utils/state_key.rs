//! Position encodings for the learning collaborator.
//!
//! `StateKey` is a hashable, lossless (board, side to move) snapshot used as
//! a table key: sixteen cell characters in row-major order followed by the
//! side to move. `state_vector` is a fixed-width numeric encoding of the
//! same information.

use std::fmt;
use std::str::FromStr;

use crate::errors::{MiniChessError, MiniChessResult};
use crate::game_state::chess_rules::{BOARD_SIZE, SQUARE_COUNT};
use crate::game_state::chess_types::*;
use crate::utils::grid_generator::board_to_rows;
use crate::utils::grid_parser::board_from_rows;

/// Sixteen cells plus one side-to-move entry.
pub const STATE_VECTOR_LEN: usize = SQUARE_COUNT + 1;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StateKey {
    cells: String,
    side_to_move: Color,
}

impl StateKey {
    pub fn new(board: &Board, side_to_move: Color) -> Self {
        let cells = board_to_rows(board).iter().flatten().collect();
        Self { cells, side_to_move }
    }

    pub fn from_game_state(game_state: &GameState) -> Self {
        Self::new(game_state.board(), game_state.side_to_move())
    }

    /// Row-major cell characters, `.` for empty.
    #[inline]
    pub fn cells(&self) -> &str {
        &self.cells
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Rebuild the board this key was taken from.
    pub fn to_board(&self) -> MiniChessResult<Board> {
        let chars: Vec<char> = self.cells.chars().collect();
        if chars.len() != SQUARE_COUNT {
            return Err(MiniChessError::InvalidStateKey(format!(
                "expected {SQUARE_COUNT} cells, found {}",
                chars.len()
            )));
        }

        let mut rows = [['.'; BOARD_SIZE]; BOARD_SIZE];
        for (row, chunk) in chars.chunks(BOARD_SIZE).enumerate() {
            rows[row].copy_from_slice(chunk);
        }
        board_from_rows(&rows)
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        };
        write!(f, "{} {}", self.cells, side)
    }
}

impl FromStr for StateKey {
    type Err = MiniChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (cells, side) = s
            .trim()
            .split_once(' ')
            .ok_or_else(|| MiniChessError::InvalidStateKey(s.to_owned()))?;

        let side_to_move = match side.trim() {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(MiniChessError::InvalidSideToMove(other.to_owned())),
        };

        let key = Self {
            cells: cells.to_owned(),
            side_to_move,
        };
        key.to_board()?;
        Ok(key)
    }
}

/// Piece code used in the numeric encoding. Black pieces are negated.
#[inline]
pub const fn piece_code(piece: Piece) -> i8 {
    let magnitude = match piece.kind {
        PieceKind::Pawn => 1,
        PieceKind::Rook => 2,
        PieceKind::Queen => 5,
        PieceKind::King => 6,
    };
    match piece.color {
        Color::White => magnitude,
        Color::Black => -magnitude,
    }
}

/// Cells in row-major order (`0` for empty), then `1` if White is to move or
/// `-1` if Black is.
pub fn state_vector(board: &Board, side_to_move: Color) -> [i8; STATE_VECTOR_LEN] {
    let mut out = [0i8; STATE_VECTOR_LEN];
    for (square, piece) in board.occupied() {
        if let Some(i) = square.index() {
            out[i] = piece_code(piece);
        }
    }
    out[SQUARE_COUNT] = match side_to_move {
        Color::White => 1,
        Color::Black => -1,
    };
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::game_config::GameConfig;

    #[test]
    fn key_decodes_to_the_same_position() {
        let game = GameState::from_grid("..k./.P../q.../R..K", Color::Black, GameConfig::default())
            .expect("grid should parse");
        let key = game.state_key();

        assert_eq!(key.cells(), "..k..P..q...R..K");
        assert_eq!(key.to_board().expect("key should decode"), *game.board());

        let reparsed: StateKey = key.to_string().parse().expect("display form should parse");
        assert_eq!(reparsed, key);
        assert_eq!(reparsed.side_to_move(), Color::Black);
    }

    #[test]
    fn side_to_move_is_part_of_the_key() {
        let board = *GameState::new_game().board();
        assert_ne!(
            StateKey::new(&board, Color::White),
            StateKey::new(&board, Color::Black)
        );
    }

    #[test]
    fn malformed_keys_are_rejected() {
        assert!(matches!(
            "rqkr w".parse::<StateKey>(),
            Err(MiniChessError::InvalidStateKey(_))
        ));
        assert!(matches!(
            "rqkrppppPPPPRQKR x".parse::<StateKey>(),
            Err(MiniChessError::InvalidSideToMove(_))
        ));
        assert!(matches!(
            "rqkrppppPPPPRQKZ w".parse::<StateKey>(),
            Err(MiniChessError::InvalidGridChar { ch: 'Z', row: 3, col: 3 })
        ));
    }

    #[test]
    fn start_vector_signs_by_color() {
        let vector = GameState::new_game().state_vector();
        assert_eq!(&vector[0..4], &[-2, -5, -6, -2]);
        assert_eq!(&vector[4..8], &[-1; 4]);
        assert_eq!(&vector[8..12], &[1; 4]);
        assert_eq!(&vector[12..16], &[2, 5, 6, 2]);
        assert_eq!(vector[16], 1);
    }
}
