//! The 4x4 grid of cells.
//!
//! `Board` stores one optional piece per square and derives occupancy
//! bitboards on demand; at sixteen squares that is cheaper than keeping
//! incremental caches in sync.

use crate::game_state::chess_rules::{StartingLayout, BLACK_BACK_RANK, BOARD_SIZE, SQUARE_COUNT};
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Piece>; SQUARE_COUNT],
}

impl Board {
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Back ranks on rows 0 and 3, pawns on the two middle rows.
    pub fn starting_position(layout: StartingLayout) -> Self {
        let mut board = Self::empty();
        let white_back = layout.white_back_rank();
        for col in 0..BOARD_SIZE as u8 {
            let c = col as usize;
            board.set(Square::new(0, col), Some(Piece::new(BLACK_BACK_RANK[c], Color::Black)));
            board.set(Square::new(1, col), Some(Piece::new(PieceKind::Pawn, Color::Black)));
            board.set(Square::new(2, col), Some(Piece::new(PieceKind::Pawn, Color::White)));
            board.set(Square::new(3, col), Some(Piece::new(white_back[c], Color::White)));
        }
        board
    }

    /// Piece on `square`, `None` for empty or off-board squares.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        square.index().and_then(|i| self.cells[i])
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    #[inline]
    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.piece_at(square).map(|p| p.color)
    }

    /// Overwrite a cell and return what was there. Off-board writes are ignored.
    #[inline]
    pub fn set(&mut self, square: Square, cell: Option<Piece>) -> Option<Piece> {
        match square.index() {
            Some(i) => std::mem::replace(&mut self.cells[i], cell),
            None => None,
        }
    }

    pub fn occupancy_by_color(&self, color: Color) -> Bitboard {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| matches!(cell, Some(p) if p.color == color))
            .fold(0, |acc, (i, _)| acc | (1 << i))
    }

    pub fn occupancy_all(&self) -> Bitboard {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_some())
            .fold(0, |acc, (i, _)| acc | (1 << i))
    }

    /// Bitboard of every `kind` piece owned by `color`.
    pub fn pieces(&self, color: Color, kind: PieceKind) -> Bitboard {
        let wanted = Piece::new(kind, color);
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Some(wanted))
            .fold(0, |acc, (i, _)| acc | (1 << i))
    }

    /// Every occupied square with its piece, row-major.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, cell)| cell.map(|p| (Square::from_index(i), p)))
    }

    /// Squares holding pieces of `color`, row-major.
    pub fn squares_of_color(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        self.occupied()
            .filter(move |(_, p)| p.color == color)
            .map(|(sq, _)| sq)
    }

    /// First square holding `color`'s king, scanning row-major.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        squares_of(self.pieces(color, PieceKind::King)).next()
    }
}

/// Each side's king square. `None` once that king has been captured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct KingPositions {
    squares: [Option<Square>; 2],
}

impl KingPositions {
    /// Read the king squares off a board. With two kings of one color the
    /// first in row-major order is tracked.
    pub fn from_board(board: &Board) -> Self {
        Self {
            squares: [board.find_king(Color::White), board.find_king(Color::Black)],
        }
    }

    #[inline]
    pub fn get(&self, color: Color) -> Option<Square> {
        self.squares[color.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_returns_previous_cell_and_ignores_off_board() {
        let mut board = Board::empty();
        let rook = Piece::new(PieceKind::Rook, Color::White);

        assert_eq!(board.set(Square::new(2, 1), Some(rook)), None);
        assert_eq!(board.set(Square::new(2, 1), None), Some(rook));
        assert_eq!(board.set(Square::new(7, 7), Some(rook)), None);
        assert_eq!(board, Board::empty());
    }

    #[test]
    fn starting_position_matches_layout_grid() {
        use crate::utils::grid_parser::parse_board_grid;

        for layout in [StartingLayout::RookQueenKingRook, StartingLayout::RookKingQueenRook] {
            let expected = parse_board_grid(layout.grid()).expect("layout grid should parse");
            assert_eq!(Board::starting_position(layout), expected);
        }
    }

    #[test]
    fn occupancy_splits_by_color() {
        let mut board = Board::empty();
        board.set(Square::new(0, 0), Some(Piece::new(PieceKind::King, Color::Black)));
        board.set(Square::new(3, 3), Some(Piece::new(PieceKind::King, Color::White)));
        board.set(Square::new(3, 0), Some(Piece::new(PieceKind::Pawn, Color::White)));

        assert_eq!(board.occupancy_by_color(Color::Black), 1);
        assert_eq!(board.occupancy_by_color(Color::White), (1 << 15) | (1 << 12));
        assert_eq!(board.occupancy_all(), 1 | (1 << 15) | (1 << 12));
        assert_eq!(board.find_king(Color::White), Some(Square::new(3, 3)));
        assert_eq!(board.pieces(Color::White, PieceKind::Pawn), 1 << 12);

        let kings = KingPositions::from_board(&board);
        assert_eq!(kings.get(Color::Black), Some(Square::new(0, 0)));
        assert_eq!(kings.get(Color::White), Some(Square::new(3, 3)));
    }
}
