//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and timing logic.
//! It has **zero dependencies** on terminals, input devices, or wall-clock time,
//! making it:
//!
//! - **Deterministic**: A seeded shuffler and a virtual clock replay identically
//! - **Testable**: Timers are advanced by hand, no sleeping in tests
//! - **Portable**: Any frontend can drive it through notifications and calls
//!
//! # Module Structure
//!
//! - [`config`]: Alphabet, time limit, delays and seed, with env overrides
//! - [`deck`]: One game's arrangement of symbol pairs
//! - [`events`]: Notifications pushed to the presentation layer
//! - [`game_state`]: The rules: new game, flip, match, timeout, reset
//! - [`rng`]: Uniform shuffling
//! - [`scheduler`]: One-shot and repeating timers over a millisecond clock
//! - [`timer`]: The countdown
//!
//! # Game Rules
//!
//! - Sixteen cards hold eight symbols, two cards each
//! - Flip two cards; equal symbols stay face up, unequal ones flip back after 1s
//! - While a mismatched pair is showing, further flips are ignored
//! - Matching every pair wins; letting the 60s countdown run out loses
//!
//! # Example
//!
//! ```
//! use tui_memory_core::{FlipOutcome, GameState};
//! use tui_memory_core::types::GameStatus;
//!
//! let mut game = GameState::with_seed(12345);
//! game.new_game();
//!
//! // Find both cards of the symbol at position 0.
//! let partner = game.deck().partner_of(0).unwrap();
//! assert_eq!(game.flip_card(0), Ok(FlipOutcome::Revealed));
//! assert_eq!(game.flip_card(partner), Ok(FlipOutcome::Matched));
//!
//! // Let the clock run out.
//! game.advance(60_000);
//! assert_eq!(game.status(), GameStatus::Lost);
//! ```
//!
//! # Timing
//!
//! Nothing here reads the system clock. Call
//! [`GameState::advance`](game_state::GameState::advance) with the elapsed
//! milliseconds; due timers fire one at a time, in order.

pub mod config;
pub mod deck;
pub mod error;
pub mod events;
pub mod game_state;
pub mod rng;
pub mod scheduler;
pub mod timer;

pub use tui_memory_types as types;

// Re-export commonly used types for convenience
pub use config::GameConfig;
pub use deck::Deck;
pub use error::{ConfigError, GameError, GameResult};
pub use events::{GameEvent, GameObserver};
pub use game_state::{FlipOutcome, GameState};
pub use rng::Shuffler;
pub use scheduler::{ClockScheduler, Scheduler, TimerEvent, TimerHandle};
pub use timer::{Countdown, TickOutcome};
