//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key and mouse events into [`InputEvent`]s. Pointer presses are
//! reported in terminal cell coordinates; turning those into board squares is
//! the view's job, since only the view knows where the board is drawn.

pub mod map;

pub use tui_chess_types as types;

pub use map::{map_event, map_key_event, map_mouse_event, should_quit, InputEvent};
