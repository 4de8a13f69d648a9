//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no required dependencies, so they can be used
//! by the rules engine, the terminal view and the binary alike. Enabling the
//! `serde` feature derives (de)serialization for the configurable rule options.
//!
//! # Board Coordinates
//!
//! The board is 8x8. A [`Square`] is addressed as `(file, rank)` with both
//! components in `0..8`:
//!
//! - **file** grows left to right (`a` to `h`)
//! - **rank** grows top to bottom, following the on-screen row order
//!
//! Black's back rank is rank 0 (drawn at the top), white's back rank is rank 7.
//! White pawns therefore advance towards decreasing rank, black pawns towards
//! increasing rank.
//!
//! # Examples
//!
//! ```
//! use tui_chess_types::{Color, PieceKind, Square, BOARD_SIZE};
//!
//! let e2 = Square::from_name("e2").unwrap();
//! assert_eq!(e2, Square::new(4, 6));
//! assert_eq!(e2.name(), "e2");
//!
//! assert_eq!(Color::White.opponent(), Color::Black);
//! assert_eq!(Color::White.pawn_direction(), -1);
//!
//! assert_eq!(PieceKind::from_str("knight"), Some(PieceKind::Knight));
//! assert_eq!(BOARD_SIZE, 8);
//! ```

/// Number of files and ranks on the board.
pub const BOARD_SIZE: i8 = 8;

/// Number of squares on the board.
pub const SQUARE_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// A board coordinate.
///
/// Squares are plain keys, not owners. Off-board values are representable so
/// that move generation can step outside the board and reject the result with
/// [`Square::is_on_board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub file: i8,
    pub rank: i8,
}

impl Square {
    pub const fn new(file: i8, rank: i8) -> Self {
        Self { file, rank }
    }

    /// True when both coordinates are within `0..BOARD_SIZE`.
    #[inline]
    pub fn is_on_board(&self) -> bool {
        (0..BOARD_SIZE).contains(&self.file) && (0..BOARD_SIZE).contains(&self.rank)
    }

    /// The square shifted by `(df, dr)`. The result may lie off the board.
    #[inline]
    pub fn offset(&self, df: i8, dr: i8) -> Self {
        Self {
            file: self.file.saturating_add(df),
            rank: self.rank.saturating_add(dr),
        }
    }

    /// True for the light squares of the checkerboard.
    pub fn is_light(&self) -> bool {
        (self.file + self.rank) % 2 == 0
    }

    /// Iterate all 64 squares, rank by rank from the top of the board.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|rank| (0..BOARD_SIZE).map(move |file| Square::new(file, rank)))
    }

    /// Algebraic name (`a8` for `(0, 0)`, `h1` for `(7, 7)`).
    ///
    /// Off-board squares render as `"??"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_chess_types::Square;
    ///
    /// assert_eq!(Square::new(0, 0).name(), "a8");
    /// assert_eq!(Square::new(7, 7).name(), "h1");
    /// assert_eq!(Square::new(-1, 3).name(), "??");
    /// ```
    pub fn name(&self) -> String {
        if !self.is_on_board() {
            return "??".to_string();
        }
        let file = (b'a' + self.file as u8) as char;
        let rank = (b'0' + (BOARD_SIZE - self.rank) as u8) as char;
        format!("{file}{rank}")
    }

    /// Parse an algebraic square name (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_chess_types::Square;
    ///
    /// assert_eq!(Square::from_name("a8"), Some(Square::new(0, 0)));
    /// assert_eq!(Square::from_name("H1"), Some(Square::new(7, 7)));
    /// assert_eq!(Square::from_name("i1"), None);
    /// assert_eq!(Square::from_name("a9"), None);
    /// ```
    pub fn from_name(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return None;
        }
        Some(Square::new(
            (file - b'a') as i8,
            BOARD_SIZE - (rank - b'0') as i8,
        ))
    }
}

/// Side to move / owner of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opponent(&self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank delta of a single pawn step.
    pub fn pawn_direction(&self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Back rank the pieces of this color start on.
    pub fn home_rank(&self) -> i8 {
        match self {
            Color::White => BOARD_SIZE - 1,
            Color::Black => 0,
        }
    }

    /// Rank the pawns of this color start on.
    pub fn pawn_rank(&self) -> i8 {
        self.home_rank() + self.pawn_direction()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

/// The six chess piece types.
///
/// There is deliberately no "none" variant: an empty square is `Option::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Bishop,
    Knight,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Back rank order from file `a` to file `h`.
    pub const BACK_RANK: [PieceKind; 8] = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];

    /// Parse piece kind from its name or letter (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_chess_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("Q"), Some(PieceKind::Queen));
    /// assert_eq!(PieceKind::from_str("rook"), Some(PieceKind::Rook));
    /// assert_eq!(PieceKind::from_str("none"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pawn" | "p" => Some(PieceKind::Pawn),
            "bishop" | "b" => Some(PieceKind::Bishop),
            "knight" | "n" => Some(PieceKind::Knight),
            "rook" | "r" => Some(PieceKind::Rook),
            "queen" | "q" => Some(PieceKind::Queen),
            "king" | "k" => Some(PieceKind::King),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Bishop => "bishop",
            PieceKind::Knight => "knight",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }
}

/// A piece on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub square: Square,
    /// Set once the piece has moved. Only pawns read it (double-step rights).
    pub has_moved: bool,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color, square: Square) -> Self {
        Self {
            kind,
            color,
            square,
            has_moved: false,
        }
    }
}

/// Discrete events consumed by the turn controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Primary pointer pressed on a board square
    Click(Square),
    /// Drop the current selection, if any
    Deselect,
    /// Reset to the standard opening with white to move
    Restart,
}

/// How the check-safety probe treats a piece standing on the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CaptureSimulation {
    /// The captured piece is taken off the scratch board before testing.
    #[default]
    RemoveCaptured,
    /// The captured piece stays on the scratch board, sharing the square with
    /// the mover. It can still block rays or give check, so a capture of the
    /// only blocker may be judged unsafe.
    KeepCaptured,
}

impl CaptureSimulation {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "remove" | "remove_captured" => Some(CaptureSimulation::RemoveCaptured),
            "keep" | "keep_captured" => Some(CaptureSimulation::KeepCaptured),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CaptureSimulation::RemoveCaptured => "remove_captured",
            CaptureSimulation::KeepCaptured => "keep_captured",
        }
    }
}

/// Which pieces are consulted when deciding that the game has ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MateScan {
    /// After every move, every piece of the side to move is checked for a
    /// check-safe destination. No safe move anywhere ends the game.
    #[default]
    AllPieces,
    /// Only the piece being selected is checked: selecting a piece with no
    /// safe destination while in check ends the game.
    SelectedPiece,
}

impl MateScan {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "all" | "all_pieces" => Some(MateScan::AllPieces),
            "selected" | "selected_piece" => Some(MateScan::SelectedPiece),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MateScan::AllPieces => "all_pieces",
            MateScan::SelectedPiece => "selected_piece",
        }
    }
}

/// Rule options for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RulesConfig {
    pub capture_simulation: CaptureSimulation,
    pub mate_scan: MateScan,
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Checkmate { winner: Color },
    Stalemate,
}

impl Outcome {
    pub fn winner(&self) -> Option<Color> {
        match self {
            Outcome::Checkmate { winner } => Some(*winner),
            Outcome::Stalemate => None,
        }
    }
}
