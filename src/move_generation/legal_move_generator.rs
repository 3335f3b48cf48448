//! Legality filter.
//!
//! Each pseudo-legal candidate is played on a scratch copy of the board and
//! king squares; the candidate survives if the mover's king is not attacked
//! afterwards. A side configured to ignore the check rule gets its
//! pseudo-legal moves back unfiltered.

use tracing::trace;

use crate::game_state::board::KingPositions;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{apply_move, relocate_piece, MoveValidation};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::move_generator::{
    GeneratedMove, MoveGenResult, MoveGenerationError, MoveGenerator,
};
use crate::move_generation::pseudo_legal_moves::pseudo_legal_targets;

/// Legal destinations of the piece on `from`, moving as its own color.
pub fn legal_moves(game_state: &GameState, from: Square) -> Vec<Square> {
    let board = game_state.board();
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };
    let mover = piece.color;
    let targets = pseudo_legal_targets(board, from, mover);

    if !game_state.config().enforces_check_rule(mover) {
        return squares_of(targets).collect();
    }

    squares_of(targets)
        .filter(|&to| {
            let mv = Move::new(from, to);
            let safe = leaves_king_safe(board, game_state.king_positions(), mv, mover);
            if !safe {
                trace!(%mv, "discarded: leaves own king attacked");
            }
            safe
        })
        .collect()
}

/// Play `mv` on a copy and report whether `mover`'s king is unattacked
/// afterwards. No king means nothing to protect.
pub fn leaves_king_safe(board: &Board, kings: &KingPositions, mv: Move, mover: Color) -> bool {
    let mut scratch_board = *board;
    let mut scratch_kings = *kings;
    relocate_piece(&mut scratch_board, &mut scratch_kings, mv);

    match scratch_kings.get(mover) {
        Some(king_sq) => !is_square_attacked(&scratch_board, king_sq, mover.opposite()),
        None => true,
    }
}

/// Every legal move of every `color` piece, origins in row-major order.
pub fn all_legal_moves(game_state: &GameState, color: Color) -> Vec<Move> {
    game_state
        .board()
        .squares_of_color(color)
        .flat_map(|from| {
            legal_moves(game_state, from)
                .into_iter()
                .map(move |to| Move::new(from, to))
        })
        .collect()
}

pub fn has_legal_move(game_state: &GameState, color: Color) -> bool {
    game_state
        .board()
        .squares_of_color(color)
        .any(|from| !legal_moves(game_state, from).is_empty())
}

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> MoveGenResult<Vec<GeneratedMove>> {
        let moves = all_legal_moves(game_state, game_state.side_to_move());
        let mut generated = Vec::with_capacity(moves.len());

        for mv in moves {
            let mut next = game_state.clone();
            let applied = apply_move(&mut next, mv, MoveValidation::Unchecked).map_err(|x| {
                MoveGenerationError::InvalidState(format!("apply_move failed: {x}"))
            })?;

            generated.push(GeneratedMove {
                mv,
                applied,
                game_after_move: next,
            });
        }

        Ok(generated)
    }
}
