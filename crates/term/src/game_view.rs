//! GameView: maps a [`BoardModel`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::board::{BoardModel, CardFace};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Symbol, GRID_COLUMNS};

/// Card width in terminal columns (border included).
const CARD_W: u16 = 5;
/// Card height in terminal rows (border included).
const CARD_H: u16 = 3;
/// Blank columns between cards.
const GAP_X: u16 = 1;
/// Blank columns between the frame and the cards.
const PAD_X: u16 = 1;

const HELP: &str = "arrows move  space flip  n new  r reset  q quit";

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the card grid.
pub struct GameView {
    columns: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(GRID_COLUMNS as u16)
    }
}

/// Where the frame landed on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    start_x: u16,
    start_y: u16,
    frame_w: u16,
    frame_h: u16,
}

impl GameView {
    pub fn new(columns: u16) -> Self {
        Self {
            columns: columns.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer frame size for a grid of `card_count` cards.
    pub fn frame_size(&self, card_count: usize) -> (u16, u16) {
        let rows = self.rows(card_count);
        let grid_w = self.columns * CARD_W + (self.columns - 1) * GAP_X;
        (grid_w + 2 + 2 * PAD_X, rows * CARD_H + 2)
    }

    fn rows(&self, card_count: usize) -> u16 {
        let columns = self.columns as usize;
        card_count.div_ceil(columns).max(1) as u16
    }

    /// Render the board into an existing framebuffer.
    ///
    /// `cursor` is the highlighted position; `None` hides the highlight.
    pub fn render_into(&self, board: &BoardModel, cursor: Option<usize>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height);

        let (frame_w, frame_h) = self.frame_size(board.faces().len());
        // Two extra rows below the frame for the status and help lines.
        let block_h = frame_h + 2;
        let layout = Layout {
            start_x: viewport.width.saturating_sub(frame_w) / 2,
            start_y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(block_h) / 2,
                AnchorY::Top => 0,
            },
            frame_w,
            frame_h,
        };

        let border = CellStyle::fg(Rgb::new(200, 200, 200));
        self.draw_border(fb, layout, border);
        self.draw_title(fb, layout, board);

        for (position, face) in board.faces().iter().enumerate() {
            self.draw_card(fb, layout, position, *face, cursor == Some(position));
        }

        let below = layout.start_y.saturating_add(frame_h);
        fb.put_str(
            layout.start_x,
            below,
            board.status(),
            CellStyle::fg(Rgb::new(240, 240, 240)).bold(),
        );
        fb.put_str(
            layout.start_x,
            below.saturating_add(1),
            HELP,
            CellStyle::fg(Rgb::new(130, 130, 140)).dim(),
        );

        self.draw_side_panel(fb, layout, board, viewport);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, board: &BoardModel, cursor: Option<usize>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(board, cursor, viewport, &mut fb);
        fb
    }

    /// Top-left corner of the card at `position`, relative to the viewport.
    fn card_origin(&self, layout: Layout, position: usize) -> (u16, u16) {
        let col = (position % self.columns as usize) as u16;
        let row = (position / self.columns as usize) as u16;
        (
            layout.start_x + 1 + PAD_X + col * (CARD_W + GAP_X),
            layout.start_y + 1 + row * CARD_H,
        )
    }

    fn draw_border(&self, fb: &mut FrameBuffer, layout: Layout, style: CellStyle) {
        draw_box(fb, layout.start_x, layout.start_y, layout.frame_w, layout.frame_h, style);
    }

    fn draw_title(&self, fb: &mut FrameBuffer, layout: Layout, board: &BoardModel) {
        let (title, style) = match board.outcome() {
            Some(true) => (" YOU WON ", CellStyle::fg(Rgb::new(120, 230, 120)).bold()),
            Some(false) => (" TIME UP ", CellStyle::fg(Rgb::new(230, 90, 90)).bold()),
            None => (" MEMORY ", CellStyle::fg(Rgb::new(220, 220, 220)).bold()),
        };
        let text_w = title.chars().count() as u16;
        let x = layout
            .start_x
            .saturating_add(layout.frame_w.saturating_sub(text_w) / 2);
        fb.put_str(x, layout.start_y, title, style);
    }

    fn draw_card(&self, fb: &mut FrameBuffer, layout: Layout, position: usize, face: CardFace, selected: bool) {
        let (x, y) = self.card_origin(layout, position);

        let edge = if selected {
            CellStyle::fg(Rgb::new(255, 210, 60)).bold()
        } else {
            CellStyle::fg(Rgb::new(110, 110, 120))
        };
        draw_box(fb, x, y, CARD_W, CARD_H, edge);

        let (ch, style) = match face {
            CardFace::Down => ('?', CellStyle::fg(Rgb::new(110, 110, 120)).dim()),
            CardFace::Up(symbol) => (symbol.letter(), CellStyle::fg(symbol_color(symbol)).bold()),
            CardFace::Locked(symbol) => (
                symbol.letter(),
                CellStyle::fg(symbol_color(symbol))
                    .on(Rgb::new(20, 60, 30))
                    .bold(),
            ),
        };
        // Interior is CARD_W - 2 wide; fill it so locked cards get a solid background.
        for dx in 1..CARD_W - 1 {
            fb.put_char(x + dx, y + 1, ' ', style);
        }
        fb.put_char(x + CARD_W / 2, y + 1, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, layout: Layout, board: &BoardModel, viewport: Viewport) {
        let panel_x = layout
            .start_x
            .saturating_add(layout.frame_w)
            .saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 8 {
            return;
        }

        let label = CellStyle::fg(Rgb::new(220, 220, 220)).bold();
        let value = CellStyle::fg(Rgb::new(200, 200, 200));
        let warn = CellStyle::fg(Rgb::new(230, 90, 90)).bold();

        let mut y = layout.start_y;
        fb.put_str(panel_x, y, "TIME", label);
        y = y.saturating_add(1);
        let time = board.time_remaining();
        fb.put_u32(panel_x, y, time, if time <= 10 { warn } else { value });
        fb.put_char(panel_x + digits(time), y, 's', value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "PAIRS", label);
        y = y.saturating_add(1);
        let found = board.matched_pairs() as u32;
        fb.put_u32(panel_x, y, found, value);
        let slash_x = panel_x + digits(found);
        fb.put_char(slash_x, y, '/', value);
        fb.put_u32(slash_x + 1, y, board.total_pairs() as u32, value);
    }
}

fn draw_box(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn digits(value: u32) -> u16 {
    value.checked_ilog10().map_or(1, |d| d as u16 + 1)
}

fn symbol_color(symbol: Symbol) -> Rgb {
    match symbol {
        Symbol::Ghost => Rgb::new(230, 230, 255),
        Symbol::Skull => Rgb::new(200, 200, 200),
        Symbol::Alien => Rgb::new(100, 220, 120),
        Symbol::Robot => Rgb::new(80, 200, 220),
        Symbol::Pumpkin => Rgb::new(255, 165, 0),
        Symbol::Clown => Rgb::new(240, 100, 160),
        Symbol::Ogre => Rgb::new(220, 80, 80),
        Symbol::Invader => Rgb::new(180, 120, 230),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_size_for_standard_grid() {
        let view = GameView::default();
        // 4 cards * 5 + 3 gaps + 2 border + 2 padding.
        assert_eq!(view.frame_size(16), (27, 14));
    }

    #[test]
    fn frame_size_rounds_partial_rows_up() {
        let view = GameView::new(4);
        assert_eq!(view.frame_size(6).1, 2 * CARD_H + 2);
    }

    #[test]
    fn digits_counts_decimal_width() {
        assert_eq!(digits(0), 1);
        assert_eq!(digits(9), 1);
        assert_eq!(digits(60), 2);
        assert_eq!(digits(100), 3);
    }

    #[test]
    fn every_symbol_has_distinct_color() {
        for (i, a) in Symbol::ALL.iter().enumerate() {
            for b in &Symbol::ALL[i + 1..] {
                assert_ne!(symbol_color(*a), symbol_color(*b));
            }
        }
    }
}
