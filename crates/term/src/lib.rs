//! Terminal frontend for the memory game.
//!
//! Rendering is split in three layers:
//! - [`board`]: a presentation model kept current by game notifications
//! - [`game_view`]: pure layout of that model into a [`FrameBuffer`]
//! - [`renderer`]: crossterm output, full redraw first and diffs after
//!
//! No widget toolkit is involved; everything is drawn cell by cell.

pub mod board;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_memory_core as core;
pub use tui_memory_types as types;

pub use board::{BoardModel, CardFace};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
