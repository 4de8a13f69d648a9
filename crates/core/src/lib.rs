//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the chess rules and the turn controller. It has **no
//! dependencies** on UI, terminals or I/O beyond the `log` facade, which makes
//! it:
//!
//! - **Deterministic**: the same clicks always produce the same game
//! - **Testable**: every rule is exercised by unit and integration tests
//! - **Portable**: rendering goes through the [`BoardPainter`] trait
//!
//! # Module Structure
//!
//! - [`board`]: the piece store (lookup, place, move, remove, standard opening)
//! - [`movegen`]: pseudo-legal destinations per piece type
//! - [`check`]: check detection and the check-safety filter
//! - [`game_state`]: whose turn it is, what is selected, and when the game ends
//! - [`paint`]: the draw calls handed to a renderer
//!
//! # Rules
//!
//! Standard piece movement and captures, two-square pawn advances from an
//! unmoved pawn, and check. Castling, en passant and promotion are not part of
//! this game.
//!
//! # Example
//!
//! ```
//! use tui_chess_core::GameState;
//! use tui_chess_types::{Color, GameAction, Square};
//!
//! let mut game = GameState::default();
//!
//! // e2-e4
//! game.apply_action(GameAction::Click(Square::from_name("e2").unwrap()));
//! game.apply_action(GameAction::Click(Square::from_name("e4").unwrap()));
//!
//! assert_eq!(game.active_color(), Color::Black);
//! ```

pub mod board;
pub mod check;
pub mod game_state;
pub mod movegen;
pub mod paint;

pub use tui_chess_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use check::{
    has_any_safe_move, is_king_in_check, is_king_in_check_after_move, safe_moves, simulate_move,
};
pub use game_state::{GameState, Phase, PlayedMove};
pub use movegen::{moves_from, pseudo_legal_moves, MoveList};
pub use paint::{BoardPainter, Highlight};
