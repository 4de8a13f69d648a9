//! Pseudo-legal move generation
//!
//! Produces the destination squares a piece may reach under its movement
//! pattern and the occupancy rules, without asking whether the mover's own
//! king is left in check. That filter lives in [`crate::check`].
//!
//! Coordinates follow the on-screen convention: white pawns move towards
//! rank 0, black pawns towards rank 7.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::{Color, Piece, PieceKind, Square};

/// Maximum destinations any single piece can have (a centralised queen has 27).
pub const MAX_MOVES: usize = 32;

/// Destination squares for one piece.
pub type MoveList = ArrayVec<Square, MAX_MOVES>;

pub const ROOK_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// All pseudo-legal destinations for `piece` on `board`.
///
/// Every returned square is on the board and never holds a friendly piece.
pub fn pseudo_legal_moves(board: &Board, piece: &Piece) -> MoveList {
    let mut out = MoveList::new();
    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, piece, &mut out),
        PieceKind::Rook => slide(board, piece, &ROOK_DIRS, &mut out),
        PieceKind::Bishop => slide(board, piece, &BISHOP_DIRS, &mut out),
        PieceKind::Queen => {
            slide(board, piece, &ROOK_DIRS, &mut out);
            slide(board, piece, &BISHOP_DIRS, &mut out);
        }
        PieceKind::King => jump(board, piece, &KING_OFFSETS, &mut out),
        PieceKind::Knight => jump(board, piece, &KNIGHT_OFFSETS, &mut out),
    }
    out
}

/// Pseudo-legal destinations for whatever stands on `square`.
///
/// Empty when the square is empty.
pub fn moves_from(board: &Board, square: Square) -> MoveList {
    board
        .piece_at(square)
        .map(|piece| pseudo_legal_moves(board, &piece))
        .unwrap_or_default()
}

fn pawn_moves(board: &Board, pawn: &Piece, out: &mut MoveList) {
    let dir = pawn.color.pawn_direction();

    let one = pawn.square.offset(0, dir);
    if one.is_on_board() && !board.is_occupied(one) {
        push(out, one);

        let two = pawn.square.offset(0, 2 * dir);
        if !pawn.has_moved && two.is_on_board() && !board.is_occupied(two) {
            push(out, two);
        }
    }

    for df in [-1, 1] {
        let target = pawn.square.offset(df, dir);
        if is_enemy(board, target, pawn.color) {
            push(out, target);
        }
    }
}

/// Walk each ray until the edge or the first occupied square.
///
/// The blocker is included only when it belongs to the opponent.
fn slide(board: &Board, piece: &Piece, dirs: &[(i8, i8)], out: &mut MoveList) {
    for &(df, dr) in dirs {
        let mut cur = piece.square.offset(df, dr);
        while cur.is_on_board() {
            match board.piece_at(cur) {
                None => push(out, cur),
                Some(blocker) => {
                    if blocker.color != piece.color {
                        push(out, cur);
                    }
                    break;
                }
            }
            cur = cur.offset(df, dr);
        }
    }
}

fn jump(board: &Board, piece: &Piece, offsets: &[(i8, i8)], out: &mut MoveList) {
    for &(df, dr) in offsets {
        let target = piece.square.offset(df, dr);
        if !target.is_on_board() {
            continue;
        }
        match board.piece_at(target) {
            Some(other) if other.color == piece.color => {}
            _ => push(out, target),
        }
    }
}

fn is_enemy(board: &Board, square: Square, color: Color) -> bool {
    matches!(board.piece_at(square), Some(p) if p.color != color)
}

#[inline]
fn push(out: &mut MoveList, square: Square) {
    // MAX_MOVES exceeds the worst case, so this never drops a move.
    let _ = out.try_push(square);
}
