//! Drawing boundary between the game and whatever renders it.
//!
//! The core only speaks board coordinates. A [`BoardPainter`] maps squares to
//! screen space and decides what a highlight or a piece looks like.

use crate::game_state::GameState;
use crate::types::{Piece, Square};

/// What a square fill represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Highlight {
    LightSquare,
    DarkSquare,
    /// Origin and destination of the previous move
    LastMove,
    /// The currently selected piece
    Selected,
    /// A check-safe empty destination
    MoveTarget,
    /// A check-safe destination holding an enemy piece
    CaptureTarget,
    /// The king of the side to move while in check
    Check,
}

/// Receiver of the two draw calls issued per frame.
pub trait BoardPainter {
    /// Fill `square` with the given highlight. Later calls layer over earlier ones.
    fn fill_square(&mut self, square: Square, highlight: Highlight);

    /// Draw a piece sprite on its square.
    fn draw_piece(&mut self, piece: &Piece);
}

impl GameState {
    /// Issue the draw calls for the current frame: background, overlays, pieces.
    pub fn paint<P: BoardPainter + ?Sized>(&self, painter: &mut P) {
        for square in Square::all() {
            let base = if square.is_light() {
                Highlight::LightSquare
            } else {
                Highlight::DarkSquare
            };
            painter.fill_square(square, base);
        }

        if let Some(last) = self.last_move() {
            painter.fill_square(last.from, Highlight::LastMove);
            painter.fill_square(last.to, Highlight::LastMove);
        }

        if self.in_check() {
            if let Some(king) = self.board().king_square(self.active_color()) {
                painter.fill_square(king, Highlight::Check);
            }
        }

        if let Some(selected) = self.selected() {
            painter.fill_square(selected, Highlight::Selected);
            for &target in self.legal_targets() {
                let highlight = if self.board().is_occupied(target) {
                    Highlight::CaptureTarget
                } else {
                    Highlight::MoveTarget
                };
                painter.fill_square(target, highlight);
            }
        }

        for piece in self.board().pieces() {
            painter.draw_piece(piece);
        }
    }
}
