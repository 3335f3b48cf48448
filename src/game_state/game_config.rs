//! Per-game configuration.
//!
//! Passed to `GameState` at construction and carried with it, so simulated
//! copies see the same rules as the real game.

use crate::errors::{MiniChessError, MiniChessResult};
use crate::game_state::chess_rules::StartingLayout;
use crate::game_state::chess_types::Color;

pub const ENV_LAYOUT: &str = "MINICHESS_LAYOUT";
pub const ENV_IGNORE_CHECK_FOR: &str = "MINICHESS_IGNORE_CHECK_FOR";
pub const ENV_ONLY_KINGS_DRAW: &str = "MINICHESS_ONLY_KINGS_DRAW";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GameConfig {
    /// Layout used by `GameState::new_game`.
    pub starting_layout: StartingLayout,
    /// Side allowed to leave its own king attacked. Used to field a weak
    /// beginner opponent; its legal moves are its pseudo-legal moves.
    pub ignore_check_rule_for: Option<Color>,
    /// Treat "only the two kings remain" as a draw.
    pub only_kings_is_draw: bool,
}

impl GameConfig {
    pub fn with_layout(mut self, layout: StartingLayout) -> Self {
        self.starting_layout = layout;
        self
    }

    pub fn ignoring_check_rule_for(mut self, color: Color) -> Self {
        self.ignore_check_rule_for = Some(color);
        self
    }

    #[inline]
    pub fn enforces_check_rule(&self, color: Color) -> bool {
        self.ignore_check_rule_for != Some(color)
    }

    /// Set one option by name.
    ///
    /// Recognised names: `layout` (`rqkr` | `rkqr`), `ignore_check_rule_for`
    /// (`white` | `black` | `none`), `only_kings_is_draw` (`true` | `false`).
    pub fn set_option(&mut self, name: &str, value: &str) -> MiniChessResult<()> {
        let invalid = || MiniChessError::InvalidOptionValue {
            name: name.to_owned(),
            value: value.to_owned(),
        };

        match name.trim().to_ascii_lowercase().as_str() {
            "layout" | "starting_layout" => {
                self.starting_layout = StartingLayout::from_option(value).ok_or_else(invalid)?;
            }
            "ignore_check_rule_for" => {
                self.ignore_check_rule_for = match value.trim().to_ascii_lowercase().as_str() {
                    "white" | "w" => Some(Color::White),
                    "black" | "b" => Some(Color::Black),
                    "none" | "" => None,
                    _ => return Err(invalid()),
                };
            }
            "only_kings_is_draw" => {
                self.only_kings_is_draw = parse_bool(value).ok_or_else(invalid)?;
            }
            other => return Err(MiniChessError::UnknownOption(other.to_owned())),
        }

        Ok(())
    }

    /// Defaults overridden by `MINICHESS_*` environment variables.
    pub fn from_env() -> MiniChessResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> MiniChessResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        for (var, option) in [
            (ENV_LAYOUT, "layout"),
            (ENV_IGNORE_CHECK_FOR, "ignore_check_rule_for"),
            (ENV_ONLY_KINGS_DRAW, "only_kings_is_draw"),
        ] {
            if let Some(value) = lookup(var) {
                config.set_option(option, &value)?;
            }
        }
        Ok(config)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_option_updates_each_field() {
        let mut config = GameConfig::default();
        config.set_option("layout", "rkqr").expect("layout should parse");
        config
            .set_option("ignore_check_rule_for", "black")
            .expect("color should parse");
        config
            .set_option("only_kings_is_draw", "yes")
            .expect("bool should parse");

        assert_eq!(config.starting_layout, StartingLayout::RookKingQueenRook);
        assert_eq!(config.ignore_check_rule_for, Some(Color::Black));
        assert!(config.only_kings_is_draw);
        assert!(!config.enforces_check_rule(Color::Black));
        assert!(config.enforces_check_rule(Color::White));
    }

    #[test]
    fn set_option_rejects_unknown_names_and_bad_values() {
        let mut config = GameConfig::default();
        assert_eq!(
            config.set_option("castling", "on"),
            Err(MiniChessError::UnknownOption("castling".to_owned()))
        );
        assert!(matches!(
            config.set_option("layout", "rnbqkbnr"),
            Err(MiniChessError::InvalidOptionValue { .. })
        ));
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn lookup_layers_over_defaults() {
        let config = GameConfig::from_lookup(|key| match key {
            ENV_IGNORE_CHECK_FOR => Some("w".to_owned()),
            _ => None,
        })
        .expect("lookup config should parse");

        assert_eq!(config.starting_layout, StartingLayout::RookQueenKingRook);
        assert_eq!(config.ignore_check_rule_for, Some(Color::White));
        assert!(!config.only_kings_is_draw);
    }
}
