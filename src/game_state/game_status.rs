//! Terminal-state classification.

use std::fmt;

use crate::game_state::chess_types::Color;

/// Where a game stands. Every variant except `InProgress` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    /// `captured`'s king is gone from the board.
    KingCaptured { captured: Color },
    /// `loser` is to move, in check, and has no legal move.
    Checkmate { loser: Color },
    Draw(DrawReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawReason {
    /// Side to move is not in check and has no legal move.
    Stalemate,
    /// Only the two kings remain and the game is configured to call that a draw.
    OnlyKingsRemaining,
}

impl GameStatus {
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }

    /// Final result, `None` while the game is still running.
    pub fn outcome(self) -> Option<GameOutcome> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::KingCaptured { captured } => Some(GameOutcome::win_for(captured.opposite())),
            GameStatus::Checkmate { loser } => Some(GameOutcome::win_for(loser.opposite())),
            GameStatus::Draw(_) => Some(GameOutcome::Draw),
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::KingCaptured { captured } => write!(f, "{captured:?} king captured"),
            GameStatus::Checkmate { loser } => write!(f, "{loser:?} checkmated"),
            GameStatus::Draw(DrawReason::Stalemate) => write!(f, "draw by stalemate"),
            GameStatus::Draw(DrawReason::OnlyKingsRemaining) => write!(f, "draw, only kings remain"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    WhiteWins,
    BlackWins,
    Draw,
}

impl GameOutcome {
    #[inline]
    pub const fn win_for(color: Color) -> Self {
        match color {
            Color::White => GameOutcome::WhiteWins,
            Color::Black => GameOutcome::BlackWins,
        }
    }

    /// `1` for a White win, `-1` for a Black win, `0` for a draw.
    #[inline]
    pub const fn score(self) -> i32 {
        match self {
            GameOutcome::WhiteWins => 1,
            GameOutcome::BlackWins => -1,
            GameOutcome::Draw => 0,
        }
    }

    pub const fn winner(self) -> Option<Color> {
        match self {
            GameOutcome::WhiteWins => Some(Color::White),
            GameOutcome::BlackWins => Some(Color::Black),
            GameOutcome::Draw => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcomes_credit_the_other_side() {
        assert_eq!(
            GameStatus::KingCaptured { captured: Color::Black }.outcome(),
            Some(GameOutcome::WhiteWins)
        );
        assert_eq!(
            GameStatus::Checkmate { loser: Color::White }.outcome(),
            Some(GameOutcome::BlackWins)
        );
        assert_eq!(GameStatus::Draw(DrawReason::Stalemate).outcome(), Some(GameOutcome::Draw));
        assert_eq!(GameStatus::InProgress.outcome(), None);
        assert!(!GameStatus::InProgress.is_terminal());
    }

    #[test]
    fn scores_match_side_convention() {
        assert_eq!(GameOutcome::WhiteWins.score(), 1);
        assert_eq!(GameOutcome::BlackWins.score(), -1);
        assert_eq!(GameOutcome::Draw.score(), 0);
        assert_eq!(GameOutcome::Draw.winner(), None);
    }
}
