//! Integration tests for the turn and selection controller

use tui_chess::core::{Board, GameState, Phase};
use tui_chess::types::{
    CaptureSimulation, Color, GameAction, MateScan, Outcome, PieceKind, RulesConfig, Square,
};

fn sq(name: &str) -> Square {
    Square::from_name(name).unwrap()
}

fn click(state: &mut GameState, name: &str) -> bool {
    state.apply_action(GameAction::Click(sq(name)))
}

fn play(state: &mut GameState, from: &str, to: &str) {
    let mover = state.active_color();
    click(state, from);
    assert_eq!(state.selected(), Some(sq(from)), "could not select {from}");
    click(state, to);
    assert_eq!(state.active_color(), mover.opponent(), "move {from}-{to} was not played");
    assert_eq!(state.board().piece_at(sq(to)).map(|p| p.color), Some(mover));
}

fn fools_mate(state: &mut GameState) {
    play(state, "f2", "f3");
    play(state, "e7", "e5");
    play(state, "g2", "g4");
    play(state, "d8", "h4");
}

#[test]
fn test_empty_click_deselects_without_touching_board() {
    let mut state = GameState::default();
    let before = state.board().clone();

    click(&mut state, "e2");
    assert_eq!(state.phase(), Phase::PieceSelected(sq("e2")));

    click(&mut state, "e5");
    assert_eq!(state.phase(), Phase::AwaitingSelection);
    assert_eq!(state.board(), &before);
    assert_eq!(state.active_color(), Color::White);

    click(&mut state, "e2");
    assert_eq!(state.phase(), Phase::PieceSelected(sq("e2")));
    click(&mut state, "e2");
    assert_eq!(state.phase(), Phase::AwaitingSelection);
    assert_eq!(state.board(), &before);
}

#[test]
fn test_clicking_another_friendly_piece_reselects() {
    let mut state = GameState::default();
    click(&mut state, "e2");
    click(&mut state, "g1");
    assert_eq!(state.selected(), Some(sq("g1")));
    assert_eq!(state.legal_targets().len(), 2);
}

#[test]
fn test_clicking_enemy_out_of_reach_deselects() {
    let mut state = GameState::default();
    click(&mut state, "e2");
    click(&mut state, "e7");
    assert_eq!(state.phase(), Phase::AwaitingSelection);
}

#[test]
fn test_deselect_action() {
    let mut state = GameState::default();
    assert!(!state.apply_action(GameAction::Deselect));
    click(&mut state, "b1");
    assert!(state.apply_action(GameAction::Deselect));
    assert_eq!(state.selected(), None);
}

#[test]
fn test_turns_alternate() {
    let mut state = GameState::default();
    play(&mut state, "e2", "e4");
    assert_eq!(state.active_color(), Color::Black);

    // White may not move twice.
    assert!(!click(&mut state, "d2"));
    assert_eq!(state.selected(), None);

    play(&mut state, "e7", "e5");
    assert_eq!(state.active_color(), Color::White);
    assert_eq!(state.ply(), 2);
}

#[test]
fn test_capture_removes_victim() {
    let mut state = GameState::default();
    play(&mut state, "e2", "e4");
    play(&mut state, "d7", "d5");
    play(&mut state, "e4", "d5");

    assert_eq!(state.board().len(), 31);
    let pawn = state.board().piece_at(sq("d5")).unwrap();
    assert_eq!(pawn.color, Color::White);
    assert_eq!(state.captured(Color::Black).count(), 1);
    assert_eq!(state.captured(Color::White).count(), 0);

    let last = state.last_move().unwrap();
    assert_eq!(last.from, sq("e4"));
    assert_eq!(last.captured.map(|p| p.kind), Some(PieceKind::Pawn));
}

#[test]
fn test_pinned_piece_cannot_leave_pin() {
    let mut board = Board::new();
    board.place(sq("e1"), PieceKind::King, Color::White);
    board.place(sq("e3"), PieceKind::Rook, Color::White);
    board.place(sq("e8"), PieceKind::Rook, Color::Black);
    board.place(sq("a8"), PieceKind::King, Color::Black);
    let mut state = GameState::with_board(board, Color::White, RulesConfig::default());

    click(&mut state, "e3");
    assert!(!state.legal_targets().contains(&sq("a3")));
    click(&mut state, "a3");
    assert_eq!(state.active_color(), Color::White);
    assert_eq!(state.board().piece_at(sq("e3")).unwrap().kind, PieceKind::Rook);
}

#[test]
fn test_fools_mate_ends_game() {
    let mut state = GameState::default();
    fools_mate(&mut state);

    assert!(state.in_check());
    assert_eq!(state.outcome(), Some(Outcome::Checkmate { winner: Color::Black }));

    // Any click starts a new game.
    click(&mut state, "a5");
    assert!(!state.game_over());
    assert_eq!(state.board(), &Board::standard());
    assert_eq!(state.active_color(), Color::White);
    assert_eq!(state.ply(), 0);
}

#[test]
fn test_selected_piece_scan_waits_for_selection() {
    let rules = RulesConfig {
        mate_scan: MateScan::SelectedPiece,
        ..RulesConfig::default()
    };
    let mut state = GameState::new(rules);
    fools_mate(&mut state);

    assert!(state.in_check());
    assert!(!state.game_over());

    click(&mut state, "a2");
    assert_eq!(state.outcome(), Some(Outcome::Checkmate { winner: Color::Black }));
}

#[test]
fn test_selected_piece_scan_allows_pieces_with_answers() {
    let rules = RulesConfig {
        mate_scan: MateScan::SelectedPiece,
        ..RulesConfig::default()
    };
    // Scholar-style check that can be answered: queen checks from h5 after f7 moved.
    let mut state = GameState::new(rules);
    play(&mut state, "e2", "e4");
    play(&mut state, "f7", "f6");
    play(&mut state, "d1", "h5");

    assert!(state.in_check());
    click(&mut state, "g7");
    assert!(!state.game_over());
    assert_eq!(state.legal_targets(), &[sq("g6")]);
}

#[test]
fn test_stalemate_detected() {
    let mut board = Board::new();
    board.place(sq("a8"), PieceKind::King, Color::Black);
    board.place(sq("c5"), PieceKind::Queen, Color::White);
    board.place(sq("h1"), PieceKind::King, Color::White);
    let mut state = GameState::with_board(board, Color::White, RulesConfig::default());

    play(&mut state, "c5", "c7");
    assert!(!state.in_check());
    assert_eq!(state.outcome(), Some(Outcome::Stalemate));
}

#[test]
fn test_keep_captured_forbids_taking_the_checker() {
    let mut board = Board::new();
    board.place(sq("e1"), PieceKind::King, Color::White);
    board.place(sq("a2"), PieceKind::Rook, Color::White);
    board.place(sq("e2"), PieceKind::Queen, Color::Black);
    board.place(sq("e8"), PieceKind::King, Color::Black);

    let mut exact = GameState::with_board(board.clone(), Color::White, RulesConfig::default());
    click(&mut exact, "a2");
    assert!(exact.legal_targets().contains(&sq("e2")));

    let rules = RulesConfig {
        capture_simulation: CaptureSimulation::KeepCaptured,
        ..RulesConfig::default()
    };
    let mut legacy = GameState::with_board(board, Color::White, rules);
    assert!(legacy.in_check());
    click(&mut legacy, "a2");
    assert!(!legacy.legal_targets().contains(&sq("e2")));
}

#[test]
fn test_restart_action_mid_game() {
    let mut state = GameState::default();
    play(&mut state, "e2", "e4");
    click(&mut state, "e7");
    assert!(state.apply_action(GameAction::Restart));
    assert_eq!(state.phase(), Phase::AwaitingSelection);
    assert_eq!(state.board(), &Board::standard());
    assert!(state.last_move().is_none());
}
