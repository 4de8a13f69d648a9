//! Board module - owns the pieces in play
//!
//! The board is an unordered list of live pieces rather than a square grid.
//! Lookups scan the list, which is never longer than 32 entries in a real game.
//! Uses a fixed-capacity `ArrayVec` so cloning a board for a check probe does
//! not allocate.
//!
//! Mutators silently ignore off-board squares and never check occupancy.
//! Keeping at most one piece per square is the caller's job.

use arrayvec::ArrayVec;

use crate::types::{Color, Piece, PieceKind, Square, SQUARE_COUNT};

/// Upper bound on stored pieces.
pub const PIECE_CAPACITY: usize = SQUARE_COUNT;

/// The piece store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pieces: ArrayVec<Piece, PIECE_CAPACITY>,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            pieces: ArrayVec::new(),
        }
    }

    /// Create a board set up with the standard opening
    pub fn standard() -> Self {
        let mut board = Self::new();
        board.reset_to_standard_opening();
        board
    }

    /// Piece standing on `square`, if any.
    ///
    /// Returns `None` for empty and off-board squares.
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        if !square.is_on_board() {
            return None;
        }
        self.pieces.iter().find(|p| p.square == square).copied()
    }

    /// True if `square` is on the board and occupied.
    pub fn is_occupied(&self, square: Square) -> bool {
        self.piece_at(square).is_some()
    }

    /// Add a new, unmoved piece.
    ///
    /// Off-board squares and a full store are ignored.
    pub fn place(&mut self, square: Square, kind: PieceKind, color: Color) {
        if !square.is_on_board() {
            return;
        }
        if self.pieces.try_push(Piece::new(kind, color, square)).is_err() {
            log::warn!("board full, dropping {:?} {:?} at {}", color, kind, square.name());
        }
    }

    /// Relocate whatever stands on `src` to `dst`.
    ///
    /// A piece already on `dst` is left in place; remove it first to capture.
    /// Returns the number of pieces relocated (0 or 1 under normal play).
    pub fn move_piece(&mut self, src: Square, dst: Square) -> usize {
        if !src.is_on_board() || !dst.is_on_board() {
            return 0;
        }
        let mut moved = 0;
        for piece in self.pieces.iter_mut().filter(|p| p.square == src) {
            piece.square = dst;
            moved += 1;
        }
        moved
    }

    /// Remove the piece on `square` and return it.
    ///
    /// If the square somehow holds several pieces, the last one found goes.
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        if !square.is_on_board() {
            return None;
        }
        let idx = self.pieces.iter().rposition(|p| p.square == square)?;
        Some(self.pieces.remove(idx))
    }

    /// Flag the piece on `square` as having moved.
    pub fn set_moved(&mut self, square: Square) {
        for piece in self.pieces.iter_mut().filter(|p| p.square == square) {
            piece.has_moved = true;
        }
    }

    /// Clear the board and lay out the standard 32-piece opening.
    pub fn reset_to_standard_opening(&mut self) {
        self.clear();
        for color in [Color::Black, Color::White] {
            let home = color.home_rank();
            let pawns = color.pawn_rank();
            for (file, kind) in PieceKind::BACK_RANK.iter().enumerate() {
                self.place(Square::new(file as i8, home), *kind, color);
            }
            for file in 0..PieceKind::BACK_RANK.len() as i8 {
                self.place(Square::new(file, pawns), PieceKind::Pawn, color);
            }
        }
    }

    /// Square of the king of `color`, if it is on the board.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces
            .iter()
            .find(|p| p.kind == PieceKind::King && p.color == color)
            .map(|p| p.square)
    }

    /// All live pieces, in insertion order.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Live pieces of one color.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.iter().filter(move |p| p.color == color)
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Remove every piece.
    pub fn clear(&mut self) {
        self.pieces.clear();
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
