//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Grid Dimensions
//!
//! The standard layout is a 4x4 grid holding eight symbol pairs:
//!
//! - **Pairs**: 8 (one per [`Symbol`])
//! - **Cards**: 16 (indexed 0-15, row-major)
//! - **Columns**: 4
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds unless noted:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TIME_LIMIT_SECS` | 60 | Countdown length in seconds |
//! | `CLOCK_TICK_MS` | 1000 | Interval between countdown ticks |
//! | `MISMATCH_DELAY_MS` | 1000 | How long a mismatched pair stays face up |
//! | `FRAME_MS` | 50 | Host loop frame interval |
//!
//! # Examples
//!
//! ```
//! use tui_memory_types::{GameStatus, Symbol, CARD_COUNT, PAIR_COUNT};
//!
//! // Cards show a one-letter label per symbol
//! assert_eq!(Symbol::Robot.letter(), 'R');
//!
//! // Only a running game accepts flips
//! assert!(GameStatus::Running.is_running());
//! assert!(GameStatus::Won.is_terminal());
//!
//! assert_eq!(CARD_COUNT, PAIR_COUNT * 2);
//! ```

/// Number of symbol pairs in a standard game
pub const PAIR_COUNT: usize = Symbol::ALL.len();

/// Number of cards on the standard grid (two per symbol)
pub const CARD_COUNT: usize = PAIR_COUNT * 2;

/// Grid width in cards
pub const GRID_COLUMNS: usize = 4;

/// Countdown length in seconds
pub const TIME_LIMIT_SECS: u32 = 60;

/// Interval between countdown ticks (1 second)
pub const CLOCK_TICK_MS: u64 = 1000;

/// Delay before a mismatched pair flips back face down
pub const MISMATCH_DELAY_MS: u64 = 1000;

/// Host loop frame interval (input poll timeout)
pub const FRAME_MS: u64 = 50;

/// Status text shown while a game is in progress
pub const MSG_IN_PROGRESS: &str = "Find the matching pairs!";

/// Status text shown after every pair has been found
pub const MSG_WON: &str = "You won! All pairs matched!";

/// Status text shown when the countdown runs out
pub const MSG_LOST: &str = "Time is up! You lost the game.";

/// Status text shown before the first game and after a reset
pub const MSG_IDLE: &str = "Press N to start a new game";

/// The eight card symbols
///
/// Each symbol appears on exactly two cards per game. The terminal shows
/// [`Symbol::letter`] on a face-up card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    Ghost,
    Skull,
    Alien,
    Robot,
    Pumpkin,
    Clown,
    Ogre,
    Invader,
}

impl Symbol {
    /// The full alphabet, in declaration order.
    pub const ALL: [Symbol; 8] = [
        Symbol::Ghost,
        Symbol::Skull,
        Symbol::Alien,
        Symbol::Robot,
        Symbol::Pumpkin,
        Symbol::Clown,
        Symbol::Ogre,
        Symbol::Invader,
    ];

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Symbol::Ghost => "ghost",
            Symbol::Skull => "skull",
            Symbol::Alien => "alien",
            Symbol::Robot => "robot",
            Symbol::Pumpkin => "pumpkin",
            Symbol::Clown => "clown",
            Symbol::Ogre => "ogre",
            Symbol::Invader => "invader",
        }
    }

    /// Single-column ASCII label drawn on face-up cards.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_memory_types::Symbol;
    ///
    /// assert_eq!(Symbol::Ghost.letter(), 'G');
    /// assert_eq!(Symbol::Invader.letter(), 'I');
    /// ```
    pub fn letter(&self) -> char {
        match self {
            Symbol::Ghost => 'G',
            Symbol::Skull => 'S',
            Symbol::Alien => 'A',
            Symbol::Robot => 'R',
            Symbol::Pumpkin => 'P',
            Symbol::Clown => 'C',
            Symbol::Ogre => 'O',
            Symbol::Invader => 'I',
        }
    }
}

/// Per-position card status
///
/// - **Hidden**: face down, can be flipped
/// - **Flipped**: face up, waiting for its pair to be resolved
/// - **Matched**: face up for the rest of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CardState {
    #[default]
    Hidden,
    Flipped,
    Matched,
}

/// Lifecycle of one game session
///
/// ```text
/// Idle --new_game--> Running --all matched--> Won
///                       |
///                       +----timeout-------> Lost
/// Won | Lost --new_game--> Running
/// any --reset--> Idle
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Idle,
    Running,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, GameStatus::Running)
    }

    /// `Won` and `Lost` only change through `new_game` or `reset`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::Lost)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Idle => "idle",
            GameStatus::Running => "running",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        }
    }
}

/// Cursor movement direction on the card grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Player actions forwarded from the presentation layer
///
/// Cursor movement is resolved by the frontend; only `Flip`, `NewGame` and
/// `Reset` reach the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the card cursor one cell
    Move(Direction),
    /// Flip the card under the cursor
    Flip,
    /// Shuffle a fresh deck and start the countdown
    NewGame,
    /// Abandon the current game and return to idle
    Reset,
}
