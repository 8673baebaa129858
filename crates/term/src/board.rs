//! BoardModel: the presentation-side picture of the game.
//!
//! Built purely from [`GameEvent`] notifications, never by reading
//! `GameState` internals. The view renders from this model.

use crate::core::{GameEvent, GameObserver};
use crate::types::{Symbol, MSG_IDLE};

/// What the player sees at one grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardFace {
    #[default]
    Down,
    Up(Symbol),
    Locked(Symbol),
}

impl CardFace {
    pub fn symbol(&self) -> Option<Symbol> {
        match self {
            CardFace::Down => None,
            CardFace::Up(s) | CardFace::Locked(s) => Some(*s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardModel {
    faces: Vec<CardFace>,
    status: &'static str,
    time_remaining: u32,
    /// `Some(won)` once the game has ended.
    outcome: Option<bool>,
}

impl BoardModel {
    /// All cards face down with the idle message.
    pub fn new(card_count: usize, time_remaining: u32) -> Self {
        Self {
            faces: vec![CardFace::Down; card_count],
            status: MSG_IDLE,
            time_remaining,
            outcome: None,
        }
    }

    pub fn faces(&self) -> &[CardFace] {
        &self.faces
    }

    pub fn face(&self, position: usize) -> Option<CardFace> {
        self.faces.get(position).copied()
    }

    pub fn status(&self) -> &'static str {
        self.status
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn outcome(&self) -> Option<bool> {
        self.outcome
    }

    pub fn matched_pairs(&self) -> usize {
        self.faces
            .iter()
            .filter(|f| matches!(f, CardFace::Locked(_)))
            .count()
            / 2
    }

    pub fn total_pairs(&self) -> usize {
        self.faces.len() / 2
    }

    fn set_face(&mut self, position: usize, face: CardFace) {
        if let Some(slot) = self.faces.get_mut(position) {
            *slot = face;
        }
    }
}

impl GameObserver for BoardModel {
    fn notify(&mut self, event: &GameEvent) {
        match *event {
            GameEvent::RenderFull {
                card_count,
                status,
                time_remaining,
            } => {
                self.faces.clear();
                self.faces.resize(card_count, CardFace::Down);
                self.status = status;
                self.time_remaining = time_remaining;
                self.outcome = None;
            }
            GameEvent::CardRevealed { position, symbol } => {
                self.set_face(position, CardFace::Up(symbol));
            }
            GameEvent::CardsMatched { positions } => {
                for p in positions {
                    if let Some(symbol) = self.face(p).and_then(|f| f.symbol()) {
                        self.set_face(p, CardFace::Locked(symbol));
                    }
                }
            }
            GameEvent::CardsHiddenAgain { positions } => {
                for p in positions {
                    self.set_face(p, CardFace::Down);
                }
            }
            GameEvent::StatusMessage { text } => self.status = text,
            GameEvent::TimerTick { seconds_remaining } => self.time_remaining = seconds_remaining,
            GameEvent::GameEnded { won } => self.outcome = Some(won),
        }
    }
}
