//! Game state module - turn and selection controller
//!
//! Ties the board and the rules engine together and drives them from discrete
//! click events. The controller is a small state machine:
//!
//! - [`Phase::AwaitingSelection`]: clicking a piece of the side to move selects it
//! - [`Phase::PieceSelected`]: clicking a check-safe destination plays the move,
//!   clicking another friendly piece re-selects, anything else deselects
//! - [`Phase::GameOver`]: any click restarts from the standard opening
//!
//! How the end of the game is detected depends on [`MateScan`]; see
//! [`RulesConfig`].

use arrayvec::ArrayVec;

use crate::board::{Board, PIECE_CAPACITY};
use crate::check::{has_any_safe_move, is_king_in_check, safe_moves};
use crate::movegen::MoveList;
use crate::types::{Color, GameAction, MateScan, Outcome, Piece, RulesConfig, Square};

/// Where the controller is in the select/move cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingSelection,
    PieceSelected(Square),
    GameOver(Outcome),
}

/// A move that has been played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayedMove {
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    pub captured: Option<Piece>,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    rules: RulesConfig,
    active: Color,
    phase: Phase,
    /// Check-safe destinations of the selected piece (empty when nothing is selected).
    targets: MoveList,
    /// Whether the side to move is currently in check.
    in_check: bool,
    /// Full moves are not tracked; this counts plies.
    ply: u32,
    last_move: Option<PlayedMove>,
    /// Never holds more pieces than the board could.
    captured: ArrayVec<Piece, PIECE_CAPACITY>,
}

impl GameState {
    /// New game in the standard opening with white to move.
    pub fn new(rules: RulesConfig) -> Self {
        Self::with_board(Board::standard(), Color::White, rules)
    }

    /// Start from an arbitrary position.
    ///
    /// A position that is already over for `active` starts in [`Phase::GameOver`]
    /// when every piece is scanned.
    pub fn with_board(board: Board, active: Color, rules: RulesConfig) -> Self {
        let in_check = is_king_in_check(&board, active);
        let mut state = Self {
            board,
            rules,
            active,
            phase: Phase::AwaitingSelection,
            targets: MoveList::new(),
            in_check,
            ply: 0,
            last_move: None,
            captured: ArrayVec::new(),
        };
        state.detect_game_end();
        state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rules(&self) -> RulesConfig {
        self.rules
    }

    pub fn active_color(&self) -> Color {
        self.active
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn selected(&self) -> Option<Square> {
        match self.phase {
            Phase::PieceSelected(sq) => Some(sq),
            _ => None,
        }
    }

    /// Check-safe destinations of the selected piece.
    pub fn legal_targets(&self) -> &[Square] {
        &self.targets
    }

    pub fn in_check(&self) -> bool {
        self.in_check
    }

    pub fn game_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::GameOver(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Number of half-moves played since the last restart.
    pub fn ply(&self) -> u32 {
        self.ply
    }

    pub fn last_move(&self) -> Option<PlayedMove> {
        self.last_move
    }

    /// Pieces of `color` that have been captured, oldest first.
    pub fn captured(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.captured.iter().filter(move |p| p.color == color)
    }

    /// Apply a discrete input event. Returns true if the state changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Click(square) => self.click(square),
            GameAction::Deselect => {
                if self.selected().is_some() {
                    self.deselect();
                    true
                } else {
                    false
                }
            }
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Handle a primary-pointer press on `square`.
    pub fn click(&mut self, square: Square) -> bool {
        match self.phase {
            Phase::GameOver(_) => {
                self.restart();
                true
            }
            Phase::AwaitingSelection => self.try_select(square),
            Phase::PieceSelected(src) => {
                if square != src && self.targets.contains(&square) {
                    self.play(src, square);
                    return true;
                }
                if square != src && self.is_own_piece(square) {
                    return self.try_select(square);
                }
                self.deselect();
                true
            }
        }
    }

    /// Reset to the standard opening with white to move.
    pub fn restart(&mut self) {
        log::info!("restarting game");
        *self = Self::new(self.rules);
    }

    fn is_own_piece(&self, square: Square) -> bool {
        matches!(self.board.piece_at(square), Some(p) if p.color == self.active)
    }

    fn try_select(&mut self, square: Square) -> bool {
        let Some(piece) = self.board.piece_at(square) else {
            return false;
        };
        if piece.color != self.active {
            return false;
        }

        self.targets = safe_moves(&self.board, &piece, self.rules.capture_simulation);
        self.phase = Phase::PieceSelected(square);
        log::debug!(
            "selected {} {} at {} ({} safe targets)",
            piece.color.as_str(),
            piece.kind.as_str(),
            square.name(),
            self.targets.len()
        );

        if self.rules.mate_scan == MateScan::SelectedPiece && self.in_check && self.targets.is_empty() {
            self.finish(Outcome::Checkmate {
                winner: self.active.opponent(),
            });
        }
        true
    }

    fn deselect(&mut self) {
        self.targets.clear();
        self.phase = Phase::AwaitingSelection;
    }

    fn play(&mut self, src: Square, dst: Square) {
        let Some(piece) = self.board.piece_at(src) else {
            self.deselect();
            return;
        };

        let captured = self.board.remove(dst);
        self.board.move_piece(src, dst);
        self.board.set_moved(dst);

        if let Some(victim) = captured {
            log::info!(
                "{} {} {}x{} takes {}",
                piece.color.as_str(),
                piece.kind.as_str(),
                src.name(),
                dst.name(),
                victim.kind.as_str()
            );
            if self.captured.try_push(victim).is_err() {
                log::warn!("capture list full, not recording {}", victim.kind.as_str());
            }
        } else {
            log::info!(
                "{} {} {}-{}",
                piece.color.as_str(),
                piece.kind.as_str(),
                src.name(),
                dst.name()
            );
        }

        self.last_move = Some(PlayedMove {
            piece,
            from: src,
            to: dst,
            captured,
        });
        self.ply += 1;
        self.active = self.active.opponent();
        self.in_check = is_king_in_check(&self.board, self.active);
        self.deselect();

        if self.in_check {
            log::debug!("{} is in check", self.active.as_str());
        }

        self.detect_game_end();
    }

    /// With [`MateScan::AllPieces`], end the game when the side to move has no safe move.
    fn detect_game_end(&mut self) {
        if self.rules.mate_scan == MateScan::AllPieces
            && !has_any_safe_move(&self.board, self.active, self.rules.capture_simulation)
        {
            let outcome = if self.in_check {
                Outcome::Checkmate {
                    winner: self.active.opponent(),
                }
            } else {
                Outcome::Stalemate
            };
            self.finish(outcome);
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        log::info!("game over: {:?}", outcome);
        self.targets.clear();
        self.phase = Phase::GameOver(outcome);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(RulesConfig::default())
    }
}
