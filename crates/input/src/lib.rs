//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and tracks the
//! card cursor that turns a `Flip` into a grid position.

pub mod cursor;
pub mod map;

pub use tui_memory_types as types;

pub use cursor::Cursor;
pub use map::{handle_key_event, should_quit};
