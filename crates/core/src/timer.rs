//! Countdown timer driven by the scheduler.
//!
//! The countdown owns one repeating [`TimerEvent::ClockTick`] entry while it
//! runs. Starting again cancels the previous entry first, so there is never
//! more than one tick sequence.

use crate::scheduler::{Scheduler, TimerEvent, TimerHandle};

/// Result of delivering a clock tick to the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The countdown was not running.
    Ignored,
    /// One second elapsed; carries the new remaining value.
    Ticked(u32),
    /// Remaining reached zero. The countdown has stopped.
    Expired,
}

#[derive(Debug, Clone)]
pub struct Countdown {
    tick_interval_ms: u64,
    remaining: u32,
    handle: Option<TimerHandle>,
}

impl Countdown {
    pub fn new(tick_interval_ms: u64, initial_secs: u32) -> Self {
        Self {
            tick_interval_ms,
            remaining: initial_secs,
            handle: None,
        }
    }

    /// Restart from `duration_secs`, canceling any tick sequence in flight.
    pub fn start<S: Scheduler>(&mut self, duration_secs: u32, scheduler: &mut S) {
        self.stop(scheduler);
        self.remaining = duration_secs;
        self.handle = Some(scheduler.schedule_repeating(self.tick_interval_ms, TimerEvent::ClockTick));
    }

    /// Cancel pending ticks. Idempotent.
    pub fn stop<S: Scheduler>(&mut self, scheduler: &mut S) {
        if let Some(handle) = self.handle.take() {
            scheduler.cancel(handle);
        }
    }

    /// Set the displayed value while stopped.
    pub fn rewind(&mut self, secs: u32) {
        if !self.is_running() {
            self.remaining = secs;
        }
    }

    pub fn on_tick<S: Scheduler>(&mut self, scheduler: &mut S) -> TickOutcome {
        if !self.is_running() {
            return TickOutcome::Ignored;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.stop(scheduler);
            return TickOutcome::Expired;
        }
        TickOutcome::Ticked(self.remaining)
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}
