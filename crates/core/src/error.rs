//! Error types for the game core.
//!
//! Gameplay misclicks are not errors: they surface as
//! [`FlipOutcome::Ignored`](crate::game_state::FlipOutcome::Ignored). These
//! types cover contract violations at the API boundary and bad configuration.

use thiserror::Error;

use crate::types::Symbol;

/// Result type for game operations
pub type GameResult<T> = Result<T, GameError>;

/// Errors returned by [`GameState`](crate::GameState) operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// Position does not exist on the current grid
    #[error("card position {position} is out of range (grid has {len} cards)")]
    OutOfRange { position: usize, len: usize },
}

/// Invalid game or deck configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("symbol alphabet is empty")]
    EmptyAlphabet,

    #[error("symbol {0:?} appears more than once in the alphabet")]
    DuplicateSymbol(Symbol),

    /// A prepared deck holds a symbol some number of times other than two
    #[error("symbol {symbol:?} appears {count} times in the deck, expected 2")]
    UnpairedSymbol { symbol: Symbol, count: usize },

    #[error("time limit must be at least one second")]
    ZeroTimeLimit,

    #[error("tick interval must be non-zero")]
    ZeroTickInterval,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_position_and_len() {
        let err = GameError::OutOfRange {
            position: 20,
            len: 16,
        };
        assert_eq!(
            err.to_string(),
            "card position 20 is out of range (grid has 16 cards)"
        );
    }

    #[test]
    fn unpaired_symbol_message() {
        let err = ConfigError::UnpairedSymbol {
            symbol: Symbol::Clown,
            count: 3,
        };
        assert!(err.to_string().contains("Clown"));
        assert!(err.to_string().contains("3 times"));
    }
}
