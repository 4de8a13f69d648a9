//! Terminal chess (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_chess::{core,input,term,types}` and
//! hosts the binary's command line and configuration handling.

pub mod cli;
pub mod config;

pub use tui_chess_core as core;
pub use tui_chess_input as input;
pub use tui_chess_term as term;
pub use tui_chess_types as types;
