//! Core value types for the 4x4 board.
//!
//! Squares are addressed by `(row, col)` with row 0 at Black's back rank and
//! row 3 at White's. Bitboards are `u16` with bit `row * 4 + col`.

use std::fmt;

use crate::game_state::chess_rules::BOARD_SIZE;

pub use crate::game_state::board::Board;
pub use crate::game_state::game_state::GameState;

/// One bit per square, `row * 4 + col`.
pub type Bitboard = u16;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a pawn step: White walks toward row 0, Black toward row 3.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Lowercase letter used in board snapshots.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

/// A piece on the board: kind plus owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    /// Snapshot letter: uppercase for White, lowercase for Black.
    pub fn to_char(self) -> char {
        let base = self.kind.letter();
        match self.color {
            Color::White => base.to_ascii_uppercase(),
            Color::Black => base,
        }
    }

    pub fn from_char(ch: char) -> Option<Self> {
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else if ch.is_ascii_lowercase() {
            Color::Black
        } else {
            return None;
        };

        let kind = match ch.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };

        Some(Self { kind, color })
    }
}

/// A board coordinate. Values outside `0..4` are representable so that
/// callers can hand in raw input; `is_on_board` tells them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }

    /// Bit index, or `None` for off-board squares.
    #[inline]
    pub const fn index(self) -> Option<usize> {
        if self.is_on_board() {
            Some(self.row as usize * BOARD_SIZE + self.col as usize)
        } else {
            None
        }
    }

    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Self {
            row: (index / BOARD_SIZE) as u8,
            col: (index % BOARD_SIZE) as u8,
        }
    }

    /// One-hot bitboard; zero for off-board squares.
    #[inline]
    pub const fn bit(self) -> Bitboard {
        match self.index() {
            Some(i) => 1 << i,
            None => 0,
        }
    }

    /// Every on-board square in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE * BOARD_SIZE).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Iterate the squares set in a bitboard, lowest bit first.
pub fn squares_of(mut bitboard: Bitboard) -> impl Iterator<Item = Square> {
    std::iter::from_fn(move || {
        if bitboard == 0 {
            return None;
        }
        let index = bitboard.trailing_zeros() as usize;
        bitboard &= bitboard - 1;
        Some(Square::from_index(index))
    })
}

/// An atomic relocation from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.from.is_on_board() && self.to.is_on_board()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_chars_follow_case_convention() {
        assert_eq!(Piece::from_char('K'), Some(Piece::new(PieceKind::King, Color::White)));
        assert_eq!(Piece::from_char('q'), Some(Piece::new(PieceKind::Queen, Color::Black)));
        assert_eq!(Piece::from_char('n'), None);
        assert_eq!(Piece::from_char('.'), None);
        assert_eq!(Piece::new(PieceKind::Rook, Color::White).to_char(), 'R');
    }

    #[test]
    fn off_board_squares_have_no_index() {
        assert_eq!(Square::new(3, 3).index(), Some(15));
        assert_eq!(Square::new(4, 0).index(), None);
        assert_eq!(Square::new(0, 9).bit(), 0);
        assert_eq!(Square::new(200, 1).index(), None);
        assert_eq!(Square::from_index(6), Square::new(1, 2));
    }

    #[test]
    fn squares_of_walks_set_bits() {
        let bb: Bitboard = (1 << 0) | (1 << 5) | (1 << 15);
        let squares: Vec<Square> = squares_of(bb).collect();
        assert_eq!(
            squares,
            vec![Square::new(0, 0), Square::new(1, 1), Square::new(3, 3)]
        );
    }
}
