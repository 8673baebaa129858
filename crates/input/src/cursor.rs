//! Card cursor for keyboard play.
//!
//! Positions are row-major. Horizontal moves wrap within the grid; vertical
//! moves stop at the top and bottom rows.

use crate::types::{Direction, CARD_COUNT, GRID_COLUMNS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    position: usize,
    columns: usize,
    card_count: usize,
}

impl Cursor {
    pub fn new(columns: usize, card_count: usize) -> Self {
        Self {
            position: 0,
            columns: columns.max(1),
            card_count,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn row(&self) -> usize {
        self.position / self.columns
    }

    pub fn column(&self) -> usize {
        self.position % self.columns
    }

    /// Adopt a new grid size, keeping the position when it still exists.
    pub fn resize(&mut self, card_count: usize) {
        self.card_count = card_count;
        if self.position >= card_count {
            self.position = 0;
        }
    }

    pub fn move_to(&mut self, direction: Direction) {
        if self.card_count == 0 {
            return;
        }
        let last = self.card_count - 1;
        self.position = match direction {
            Direction::Left => {
                if self.position == 0 {
                    last
                } else {
                    self.position - 1
                }
            }
            Direction::Right => {
                if self.position >= last {
                    0
                } else {
                    self.position + 1
                }
            }
            Direction::Up => self.position.checked_sub(self.columns).unwrap_or(self.position),
            Direction::Down => {
                let below = self.position + self.columns;
                if below <= last {
                    below
                } else {
                    self.position
                }
            }
        };
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new(GRID_COLUMNS, CARD_COUNT)
    }
}
