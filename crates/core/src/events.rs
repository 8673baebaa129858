//! Notifications pushed from the game core to the presentation layer.
//!
//! The core never draws anything. Each state change that a frontend needs to
//! reflect is delivered as a [`GameEvent`] to the [`GameObserver`] owned by
//! the game state, in the order the changes happened.

use crate::types::Symbol;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Redraw everything: all cards face down, fresh status and timer.
    RenderFull {
        card_count: usize,
        status: &'static str,
        time_remaining: u32,
    },
    CardRevealed {
        position: usize,
        symbol: Symbol,
    },
    /// Both positions are locked face up.
    CardsMatched {
        positions: [usize; 2],
    },
    /// A mismatched pair was turned face down again.
    CardsHiddenAgain {
        positions: [usize; 2],
    },
    StatusMessage {
        text: &'static str,
    },
    TimerTick {
        seconds_remaining: u32,
    },
    /// Input should be disabled until the next game.
    GameEnded {
        won: bool,
    },
}

/// Receiver of game notifications.
pub trait GameObserver {
    fn notify(&mut self, event: &GameEvent);
}

/// Records every event; handy for tests and replay.
impl GameObserver for Vec<GameEvent> {
    fn notify(&mut self, event: &GameEvent) {
        self.push(*event);
    }
}

/// Discards every event.
impl GameObserver for () {
    fn notify(&mut self, _event: &GameEvent) {}
}

impl<O: GameObserver + ?Sized> GameObserver for Box<O> {
    fn notify(&mut self, event: &GameEvent) {
        (**self).notify(event);
    }
}
