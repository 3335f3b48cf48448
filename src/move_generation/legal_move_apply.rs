//! Move application.
//!
//! `apply_move` is the only path that mutates a live game. All checks run
//! before the first write, so a rejected move leaves the state untouched.
//! `relocate_piece` is the bare board edit shared with legality simulation.

use tracing::debug;

use crate::errors::MoveRejection;
use crate::game_state::board::KingPositions;
use crate::game_state::chess_types::*;
use crate::game_state::move_history::MoveRecord;
use crate::move_generation::legal_move_generator::legal_moves;

/// Whether `apply_move` checks the destination against the legal move set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveValidation {
    /// Destination must be one of `legal_moves(origin)`.
    Legal,
    /// Skip the legal-move check. Coordinates, origin, side to move and
    /// `from != to` are still verified.
    Unchecked,
}

/// What a successful `apply_move` did, for callers that sequence physical
/// pick/place/discard motions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub mv: Move,
    pub moved_piece: Piece,
    pub captured_piece: Option<Piece>,
}

impl AppliedMove {
    /// The destination held a piece before the move.
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured_piece.is_some()
    }
}

pub fn apply_move(
    game_state: &mut GameState,
    mv: Move,
    validation: MoveValidation,
) -> Result<AppliedMove, MoveRejection> {
    let applied = validate_move(game_state, mv, validation).inspect_err(|rejection| {
        debug!(%mv, %rejection, "move rejected");
    })?;

    let (board, kings) = game_state.position_mut();
    relocate_piece(board, kings, mv);

    game_state.record_and_switch_turn(MoveRecord {
        mv,
        moved_piece: applied.moved_piece,
        captured_piece: applied.captured_piece,
    });

    debug!(
        %mv,
        piece = %applied.moved_piece.to_char(),
        capture = applied.is_capture(),
        "move applied"
    );

    Ok(applied)
}

fn validate_move(
    game_state: &GameState,
    mv: Move,
    validation: MoveValidation,
) -> Result<AppliedMove, MoveRejection> {
    if !mv.is_on_board() {
        return Err(MoveRejection::InvalidCoordinate(mv));
    }

    let board = game_state.board();
    let moved_piece = board
        .piece_at(mv.from)
        .ok_or(MoveRejection::EmptyOrigin(mv.from))?;

    let to_move = game_state.side_to_move();
    if moved_piece.color != to_move {
        return Err(MoveRejection::WrongSideOrigin {
            square: mv.from,
            owner: moved_piece.color,
            to_move,
        });
    }

    // A piece never lands on its own square, whatever the validation mode.
    if mv.from == mv.to {
        return Err(MoveRejection::IllegalDestination(mv));
    }

    if validation == MoveValidation::Legal && !legal_moves(game_state, mv.from).contains(&mv.to) {
        return Err(MoveRejection::IllegalDestination(mv));
    }

    Ok(AppliedMove {
        mv,
        moved_piece,
        captured_piece: board.piece_at(mv.to),
    })
}

/// Move whatever sits on `mv.from` to `mv.to` and keep the king squares in
/// step. Returns the captured piece. Performs no rule checks.
pub fn relocate_piece(board: &mut Board, kings: &mut KingPositions, mv: Move) -> Option<Piece> {
    let moving = board.set(mv.from, None);
    let captured = board.set(mv.to, moving);

    let king_touched = [moving, captured]
        .into_iter()
        .flatten()
        .any(|piece| piece.kind == PieceKind::King);
    if king_touched {
        *kings = KingPositions::from_board(board);
    }

    captured
}
