//! Check detection and the check-safety filter built on move generation.
//!
//! A king is in check when some opposing piece lists the king's square among
//! its pseudo-legal destinations. Friendly pieces can never reach their own
//! king's square, so only the opponent is scanned.
//!
//! Move probes work on a scratch copy of the board; the caller's board is
//! borrowed immutably and cannot change.

use crate::board::Board;
use crate::movegen::{pseudo_legal_moves, MoveList};
use crate::types::{CaptureSimulation, Color, Piece, Square};

/// True if the king of `color` is attacked. A board without that king is
/// never in check.
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king) = board.king_square(color) else {
        return false;
    };
    board
        .pieces_of(color.opponent())
        .any(|attacker| pseudo_legal_moves(board, attacker).contains(&king))
}

/// Apply `src -> dst` to a scratch board and report whether `color`'s king
/// would then be in check.
pub fn is_king_in_check_after_move(
    board: &Board,
    src: Square,
    dst: Square,
    color: Color,
    capture: CaptureSimulation,
) -> bool {
    let scratch = simulate_move(board, src, dst, capture);
    is_king_in_check(&scratch, color)
}

/// The board as it would look after `src -> dst`.
pub fn simulate_move(board: &Board, src: Square, dst: Square, capture: CaptureSimulation) -> Board {
    let mut scratch = board.clone();
    if capture == CaptureSimulation::RemoveCaptured && src != dst {
        scratch.remove(dst);
    }
    scratch.move_piece(src, dst);
    scratch
}

/// Pseudo-legal destinations of `piece` that keep its own king out of check.
pub fn safe_moves(board: &Board, piece: &Piece, capture: CaptureSimulation) -> MoveList {
    pseudo_legal_moves(board, piece)
        .into_iter()
        .filter(|&dst| !is_king_in_check_after_move(board, piece.square, dst, piece.color, capture))
        .collect()
}

/// True if any piece of `color` has at least one check-safe destination.
pub fn has_any_safe_move(board: &Board, color: Color, capture: CaptureSimulation) -> bool {
    board.pieces_of(color).any(|piece| {
        pseudo_legal_moves(board, piece)
            .iter()
            .any(|&dst| !is_king_in_check_after_move(board, piece.square, dst, color, capture))
    })
}
