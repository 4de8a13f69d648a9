//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal play.
//! It intentionally avoids widget/layout libraries and instead renders into a
//! simple framebuffer that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Implement the core's `BoardPainter` draw calls on terminal cells
//! - Own the board geometry in both directions (square to cells, cells to square)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_chess_core as core;
pub use tui_chess_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{piece_glyph, AnchorY, GameView, Viewport, MAX_CELL_SIZE};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
