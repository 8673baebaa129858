//! Game state module - manages the complete game state
//!
//! This module ties together the core components: deck, shuffler, countdown
//! and scheduler. It owns every piece of mutable game data and enforces the
//! rules for starting, flipping, matching, timing out and resetting.

use arrayvec::ArrayVec;
use tracing::{debug, info, trace};

use crate::config::GameConfig;
use crate::deck::Deck;
use crate::error::{ConfigError, GameError, GameResult};
use crate::events::{GameEvent, GameObserver};
use crate::rng::Shuffler;
use crate::scheduler::{ClockScheduler, Scheduler, TimerEvent, TimerHandle};
use crate::timer::{Countdown, TickOutcome};
use crate::types::*;

/// What a call to [`GameState::flip_card`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    /// Not running, a pair is pending, or the card is already face up.
    Ignored,
    /// First card of a pair turned face up.
    Revealed,
    /// Second card matched the first.
    Matched,
    /// Second card did not match; both flip back after the mismatch delay.
    Mismatched,
    /// Final pair matched.
    Won,
}

/// Complete game state
///
/// Generic over the scheduler that drives its timers and the observer that
/// receives its notifications.
#[derive(Debug)]
pub struct GameState<S = ClockScheduler, O = Vec<GameEvent>> {
    config: GameConfig,
    shuffler: Shuffler,
    scheduler: S,
    observer: O,
    deck: Deck,
    cards: Vec<CardState>,
    selection: ArrayVec<usize, 2>,
    /// Positions in the order they were matched.
    matched: Vec<usize>,
    status: GameStatus,
    timer: Countdown,
    /// Incremented by every `new_game` and by `reset` out of a non-idle game.
    generation: u32,
    pending_hide: Option<TimerHandle>,
}

impl GameState {
    /// Create an idle standard game with a seeded shuffler, a virtual clock
    /// and a recording observer.
    pub fn with_seed(seed: u64) -> Self {
        let config = GameConfig::default().with_seed(seed);
        Self::from_parts(config, Shuffler::seeded(seed), ClockScheduler::new(), Vec::new())
    }
}

impl<S: Scheduler, O: GameObserver> GameState<S, O> {
    /// Create an idle game. Nothing is scheduled until [`Self::new_game`].
    pub fn new(config: GameConfig, scheduler: S, observer: O) -> Result<Self, ConfigError> {
        config.validate()?;
        let shuffler = match config.seed {
            Some(seed) => Shuffler::seeded(seed),
            None => Shuffler::from_entropy(),
        };
        Ok(Self::from_parts(config, shuffler, scheduler, observer))
    }

    fn from_parts(config: GameConfig, mut shuffler: Shuffler, scheduler: S, observer: O) -> Self {
        let deck = Deck::shuffled(&config.alphabet, &mut shuffler);
        let timer = Countdown::new(config.tick_interval_ms, config.time_limit_secs);
        Self {
            cards: vec![CardState::Hidden; deck.len()],
            deck,
            selection: ArrayVec::new(),
            matched: Vec::new(),
            status: GameStatus::Idle,
            timer,
            generation: 0,
            pending_hide: None,
            config,
            shuffler,
            scheduler,
            observer,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    pub fn card_state(&self, position: usize) -> Option<CardState> {
        self.cards.get(position).copied()
    }

    pub fn cards(&self) -> &[CardState] {
        &self.cards
    }

    pub fn symbol_at(&self, position: usize) -> Option<Symbol> {
        self.deck.symbol_at(position)
    }

    /// Flipped positions awaiting resolution, in flip order.
    pub fn selection(&self) -> &[usize] {
        &self.selection
    }

    /// Matched positions, in the order they were matched.
    pub fn matched(&self) -> &[usize] {
        &self.matched
    }

    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }

    pub fn matched_pairs(&self) -> usize {
        self.matched.len() / 2
    }

    pub fn time_remaining(&self) -> u32 {
        self.timer.remaining()
    }

    pub fn timer_running(&self) -> bool {
        self.timer.is_running()
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Shuffle a fresh deck and start the countdown.
    ///
    /// Abandons any game in progress, including a pending mismatch.
    pub fn new_game(&mut self) {
        let deck = Deck::shuffled(&self.config.alphabet, &mut self.shuffler);
        self.start_with_deck(deck);
    }

    /// Start a game on a prepared deck instead of a shuffled one.
    pub fn new_game_with_deck(&mut self, deck: Deck) {
        self.start_with_deck(deck);
    }

    fn start_with_deck(&mut self, deck: Deck) {
        self.cancel_pending_hide();
        self.generation = self.generation.wrapping_add(1);

        self.cards = vec![CardState::Hidden; deck.len()];
        self.deck = deck;
        self.selection.clear();
        self.matched.clear();
        self.status = GameStatus::Running;
        self.timer.start(self.config.time_limit_secs, &mut self.scheduler);

        info!(
            generation = self.generation,
            cards = self.cards.len(),
            time_limit = self.config.time_limit_secs,
            "new game started"
        );
        self.observer.notify(&GameEvent::RenderFull {
            card_count: self.cards.len(),
            status: MSG_IN_PROGRESS,
            time_remaining: self.timer.remaining(),
        });
    }

    /// Flip the card at `position`.
    ///
    /// Returns `Ok(FlipOutcome::Ignored)` without touching any state when the
    /// game is not running, a mismatched pair is still showing, or the card is
    /// already face up.
    pub fn flip_card(&mut self, position: usize) -> GameResult<FlipOutcome> {
        let len = self.cards.len();
        let Some(&state) = self.cards.get(position) else {
            return Err(GameError::OutOfRange { position, len });
        };

        if !self.status.is_running() || self.selection.is_full() || state != CardState::Hidden {
            trace!(position, status = self.status.as_str(), ?state, "flip ignored");
            return Ok(FlipOutcome::Ignored);
        }

        let symbol = self.deck.symbols()[position];
        self.cards[position] = CardState::Flipped;
        self.selection.push(position);
        debug!(position, symbol = symbol.as_str(), "card revealed");
        self.observer.notify(&GameEvent::CardRevealed { position, symbol });

        if !self.selection.is_full() {
            return Ok(FlipOutcome::Revealed);
        }

        let positions = [self.selection[0], self.selection[1]];
        let symbols = self.deck.symbols();
        if symbols[positions[0]] == symbols[positions[1]] {
            Ok(self.resolve_match(positions))
        } else {
            Ok(self.schedule_hide(positions))
        }
    }

    fn resolve_match(&mut self, positions: [usize; 2]) -> FlipOutcome {
        for &p in &positions {
            self.cards[p] = CardState::Matched;
        }
        self.matched.extend_from_slice(&positions);
        self.selection.clear();
        debug!(?positions, matched = self.matched.len(), "pair matched");
        self.observer.notify(&GameEvent::CardsMatched { positions });

        if self.matched.len() < self.cards.len() {
            return FlipOutcome::Matched;
        }

        self.status = GameStatus::Won;
        self.timer.stop(&mut self.scheduler);
        info!(
            generation = self.generation,
            time_remaining = self.timer.remaining(),
            "game won"
        );
        self.observer.notify(&GameEvent::StatusMessage { text: MSG_WON });
        self.observer.notify(&GameEvent::GameEnded { won: true });
        FlipOutcome::Won
    }

    fn schedule_hide(&mut self, positions: [usize; 2]) -> FlipOutcome {
        let event = TimerEvent::HideMismatch {
            generation: self.generation,
            positions,
        };
        self.pending_hide = Some(self.scheduler.schedule_once(self.config.mismatch_delay_ms, event));
        debug!(?positions, "mismatch, hiding after delay");
        FlipOutcome::Mismatched
    }

    /// Advance the clock by `elapsed_ms`, dispatching every timer that comes
    /// due in that window in order.
    pub fn advance(&mut self, elapsed_ms: u64) {
        let deadline = self.scheduler.now_ms().saturating_add(elapsed_ms);
        while let Some(event) = self.scheduler.pop_due(deadline) {
            self.handle_timer_event(event);
        }
        self.scheduler.settle(deadline);
    }

    /// Apply one fired timer event.
    pub fn handle_timer_event(&mut self, event: TimerEvent) {
        match event {
            TimerEvent::ClockTick => match self.timer.on_tick(&mut self.scheduler) {
                TickOutcome::Ticked(seconds_remaining) => {
                    self.observer.notify(&GameEvent::TimerTick { seconds_remaining });
                }
                TickOutcome::Expired => {
                    self.observer.notify(&GameEvent::TimerTick {
                        seconds_remaining: 0,
                    });
                    self.on_timeout();
                }
                TickOutcome::Ignored => {}
            },
            TimerEvent::HideMismatch {
                generation,
                positions,
            } => self.hide_mismatch(generation, positions),
        }
    }

    fn hide_mismatch(&mut self, generation: u32, positions: [usize; 2]) {
        if generation != self.generation {
            debug!(
                stale = generation,
                current = self.generation,
                "discarding stale mismatch reversion"
            );
            return;
        }

        self.pending_hide = None;
        for &p in &positions {
            if self.cards.get(p) == Some(&CardState::Flipped) {
                self.cards[p] = CardState::Hidden;
            }
        }
        self.selection.clear();
        debug!(?positions, "mismatched pair hidden");
        self.observer.notify(&GameEvent::CardsHiddenAgain { positions });
    }

    /// Countdown reached zero.
    ///
    /// Only a running game is lost; a game that was already won or lost keeps
    /// its status.
    pub fn on_timeout(&mut self) {
        if !self.status.is_running() {
            trace!(status = self.status.as_str(), "timeout ignored");
            return;
        }

        self.status = GameStatus::Lost;
        self.timer.stop(&mut self.scheduler);
        info!(
            generation = self.generation,
            matched = self.matched.len(),
            "game lost on timeout"
        );
        self.observer.notify(&GameEvent::StatusMessage { text: MSG_LOST });
        self.observer.notify(&GameEvent::GameEnded { won: false });
    }

    /// Stop any game and return to idle without dealing or starting the clock.
    pub fn reset(&mut self) {
        self.timer.stop(&mut self.scheduler);
        self.timer.rewind(self.config.time_limit_secs);
        self.cancel_pending_hide();
        if self.status != GameStatus::Idle {
            self.generation = self.generation.wrapping_add(1);
        }

        self.cards.fill(CardState::Hidden);
        self.selection.clear();
        self.matched.clear();
        self.status = GameStatus::Idle;

        info!(generation = self.generation, "game reset");
        self.observer.notify(&GameEvent::RenderFull {
            card_count: self.cards.len(),
            status: MSG_IDLE,
            time_remaining: self.timer.remaining(),
        });
    }

    fn cancel_pending_hide(&mut self) {
        if let Some(handle) = self.pending_hide.take() {
            self.scheduler.cancel(handle);
        }
    }
}
