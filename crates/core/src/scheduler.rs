//! Scheduler - one-shot and repeating timers over a millisecond clock.
//!
//! The game never sleeps or spawns threads. Anything that should happen
//! "later" is scheduled here as a [`TimerEvent`]; the host advances the clock
//! and the game pulls due events one at a time with [`Scheduler::pop_due`].
//!
//! [`ClockScheduler`] keeps a virtual clock. The terminal loop feeds it
//! wall-clock elapsed time; tests advance it by hand.

use tracing::trace;

/// Identifies a scheduled entry so it can be canceled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

/// Payload delivered when a scheduled entry comes due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// One second of the countdown has elapsed.
    ClockTick,
    /// Turn a mismatched pair face down again.
    ///
    /// `generation` is the game generation that scheduled it; a newer game
    /// discards the event.
    HideMismatch {
        generation: u32,
        positions: [usize; 2],
    },
}

/// Scheduling capability the game depends on.
pub trait Scheduler {
    /// Current clock value in milliseconds.
    fn now_ms(&self) -> u64;

    /// Fire `event` once, `delay_ms` from now.
    fn schedule_once(&mut self, delay_ms: u64, event: TimerEvent) -> TimerHandle;

    /// Fire `event` every `interval_ms` until canceled.
    fn schedule_repeating(&mut self, interval_ms: u64, event: TimerEvent) -> TimerHandle;

    /// Remove an entry. Unknown or already-fired handles are ignored.
    fn cancel(&mut self, handle: TimerHandle);

    /// Remove and return the earliest entry due at or before `deadline_ms`,
    /// moving the clock to its due time. Repeating entries are re-armed.
    fn pop_due(&mut self, deadline_ms: u64) -> Option<TimerEvent>;

    /// Move the clock to `deadline_ms` after all due entries are drained.
    fn settle(&mut self, deadline_ms: u64);
}

#[derive(Debug, Clone)]
struct Entry {
    id: u64,
    due_ms: u64,
    interval_ms: Option<u64>,
    event: TimerEvent,
}

/// Virtual-clock scheduler.
///
/// Entries fire in `(due time, schedule order)` order.
#[derive(Debug, Clone, Default)]
pub struct ClockScheduler {
    now_ms: u64,
    next_id: u64,
    entries: Vec<Entry>,
}

impl ClockScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries still scheduled.
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    pub fn is_scheduled(&self, handle: TimerHandle) -> bool {
        self.entries.iter().any(|e| e.id == handle.0)
    }

    fn push(&mut self, due_ms: u64, interval_ms: Option<u64>, event: TimerEvent) -> TimerHandle {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.entries.push(Entry {
            id,
            due_ms,
            interval_ms,
            event,
        });
        TimerHandle(id)
    }
}

impl Scheduler for ClockScheduler {
    fn now_ms(&self) -> u64 {
        self.now_ms
    }

    fn schedule_once(&mut self, delay_ms: u64, event: TimerEvent) -> TimerHandle {
        let due = self.now_ms.saturating_add(delay_ms);
        self.push(due, None, event)
    }

    fn schedule_repeating(&mut self, interval_ms: u64, event: TimerEvent) -> TimerHandle {
        // A zero interval would re-arm at the same instant forever.
        let interval = interval_ms.max(1);
        let due = self.now_ms.saturating_add(interval);
        self.push(due, Some(interval), event)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.entries.retain(|e| e.id != handle.0);
    }

    fn pop_due(&mut self, deadline_ms: u64) -> Option<TimerEvent> {
        let idx = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due_ms <= deadline_ms)
            .min_by_key(|(_, e)| (e.due_ms, e.id))
            .map(|(i, _)| i)?;

        let due = self.entries[idx].due_ms;
        self.now_ms = self.now_ms.max(due);

        let event = self.entries[idx].event;
        match self.entries[idx].interval_ms {
            Some(interval) => self.entries[idx].due_ms = due.saturating_add(interval),
            None => {
                self.entries.swap_remove(idx);
            }
        }

        trace!(now_ms = self.now_ms, ?event, "timer fired");
        Some(event)
    }

    fn settle(&mut self, deadline_ms: u64) {
        self.now_ms = self.now_ms.max(deadline_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hide(generation: u32) -> TimerEvent {
        TimerEvent::HideMismatch {
            generation,
            positions: [0, 1],
        }
    }

    #[test]
    fn test_once_fires_at_due_time_only() {
        let mut s = ClockScheduler::new();
        s.schedule_once(1000, hide(1));

        assert_eq!(s.pop_due(999), None);
        assert_eq!(s.pop_due(1000), Some(hide(1)));
        assert_eq!(s.now_ms(), 1000);
        assert_eq!(s.pop_due(5000), None);
        assert_eq!(s.pending(), 0);
    }

    #[test]
    fn test_repeating_rearms() {
        let mut s = ClockScheduler::new();
        s.schedule_repeating(1000, TimerEvent::ClockTick);

        let mut fired = 0;
        while s.pop_due(3500).is_some() {
            fired += 1;
        }
        s.settle(3500);

        assert_eq!(fired, 3);
        assert_eq!(s.now_ms(), 3500);
        assert_eq!(s.pending(), 1);
    }

    #[test]
    fn test_cancel_removes_entry() {
        let mut s = ClockScheduler::new();
        let h = s.schedule_repeating(1000, TimerEvent::ClockTick);
        assert!(s.is_scheduled(h));

        s.cancel(h);
        assert!(!s.is_scheduled(h));
        assert_eq!(s.pop_due(10_000), None);

        // Canceling twice is harmless.
        s.cancel(h);
    }

    #[test]
    fn test_due_order_then_schedule_order() {
        let mut s = ClockScheduler::new();
        s.schedule_once(2000, hide(2));
        s.schedule_repeating(1000, TimerEvent::ClockTick);
        s.schedule_once(1000, hide(1));

        assert_eq!(s.pop_due(2000), Some(TimerEvent::ClockTick));
        assert_eq!(s.pop_due(2000), Some(hide(1)));
        // Both due at 2000; hide(2) was scheduled first.
        assert_eq!(s.pop_due(2000), Some(hide(2)));
        assert_eq!(s.pop_due(2000), Some(TimerEvent::ClockTick));
        assert_eq!(s.pop_due(2000), None);
    }

    #[test]
    fn test_delays_are_relative_to_current_clock() {
        let mut s = ClockScheduler::new();
        s.settle(5000);
        s.schedule_once(1000, hide(1));

        assert_eq!(s.pop_due(5999), None);
        assert_eq!(s.pop_due(6000), Some(hide(1)));
    }

    #[test]
    fn test_settle_never_moves_backwards() {
        let mut s = ClockScheduler::new();
        s.settle(100);
        s.settle(50);
        assert_eq!(s.now_ms(), 100);
    }
}
