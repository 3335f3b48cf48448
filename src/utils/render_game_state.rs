//! Terminal-oriented Unicode board renderer.
//!
//! Rows and columns are labelled with the same `0..4` indices used by
//! `Square`, so a rendered board can be read back into move coordinates.

use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::*;

/// Render the board with row labels on both sides and column labels above
/// and below.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    let header = column_header();

    out.push_str(&header);
    out.push('\n');

    for row in 0..BOARD_SIZE as u8 {
        out.push(char::from(b'0' + row));
        out.push(' ');

        for col in 0..BOARD_SIZE as u8 {
            match board.piece_at(Square::new(row, col)) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }

            if (col as usize) < BOARD_SIZE - 1 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'0' + row));
        out.push('\n');
    }

    out.push_str(&header);

    out
}

/// Board plus a status line naming the side to move.
pub fn render_game_state(game_state: &GameState) -> String {
    format!(
        "{}\n{:?} to move, {}",
        render_board(game_state.board()),
        game_state.side_to_move(),
        game_state.status()
    )
}

fn column_header() -> String {
    let cols: Vec<String> = (0..BOARD_SIZE).map(|c| c.to_string()).collect();
    format!("  {}", cols.join(" "))
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_renders_labelled_grid() {
        let rendered = render_board(GameState::new_game().board());
        let expected = "  0 1 2 3\n\
                        0 ♜ ♛ ♚ ♜ 0\n\
                        1 ♟ ♟ ♟ ♟ 1\n\
                        2 ♙ ♙ ♙ ♙ 2\n\
                        3 ♖ ♕ ♔ ♖ 3\n  \
                        0 1 2 3";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn status_line_follows_board() {
        let rendered = render_game_state(&GameState::new_game());
        assert!(rendered.ends_with("White to move, in progress"));
        assert!(rendered.starts_with("  0 1 2 3\n0 "));
    }
}
