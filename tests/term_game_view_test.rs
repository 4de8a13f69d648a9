use tui_chess::core::GameState;
use tui_chess::term::{AnchorY, FrameBuffer, GameView, Viewport};
use tui_chess::types::{GameAction, Square};

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            all.push(fb.get(x, y).unwrap().ch);
        }
        all.push('\n');
    }
    all
}

fn click(state: &mut GameState, name: &str) {
    state.apply_action(GameAction::Click(Square::from_name(name).unwrap()));
}

#[test]
fn term_view_renders_border_corners() {
    let state = GameState::default();
    let view = GameView::default();

    // With cell_w=4 and cell_h=2:
    // board = 8*4 by 8*2 => 32x16, plus border => 34x18
    let fb = view.render(&state, Viewport::new(34, 18));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(33, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 17).unwrap().ch, '└');
    assert_eq!(fb.get(33, 17).unwrap().ch, '┘');
}

#[test]
fn term_view_labels_files_and_ranks() {
    let fb = GameView::default().render(&GameState::default(), Viewport::new(34, 18));
    assert_eq!(fb.get(3, 17).unwrap().ch, 'a');
    assert_eq!(fb.get(31, 17).unwrap().ch, 'h');
    assert_eq!(fb.get(0, 1).unwrap().ch, '8');
    assert_eq!(fb.get(0, 15).unwrap().ch, '1');
}

#[test]
fn term_view_draws_opening_pieces() {
    let fb = GameView::default().render(&GameState::default(), Viewport::new(34, 18));

    // a8 rook: square origin (1,1), glyph at column +2.
    assert_eq!(fb.get(3, 1).unwrap().ch, '♜');
    // e1 king: origin (17,15).
    assert_eq!(fb.get(19, 15).unwrap().ch, '♔');
    // e4 is empty.
    assert_eq!(fb.get(19, 9).unwrap().ch, ' ');
}

#[test]
fn term_view_light_and_dark_squares_differ() {
    let fb = GameView::default().render(&GameState::default(), Viewport::new(34, 18));
    let a8 = fb.get(1, 1).unwrap().style.bg;
    let b8 = fb.get(5, 1).unwrap().style.bg;
    let a7 = fb.get(1, 3).unwrap().style.bg;
    assert_ne!(a8, b8);
    assert_eq!(b8, a7);
}

#[test]
fn term_view_marks_selection_and_targets() {
    let mut state = GameState::default();
    let view = GameView::default();
    let vp = Viewport::new(34, 18);
    let before = view.render(&state, vp);

    click(&mut state, "e2");
    let fb = view.render(&state, vp);

    // e3 and e4 get a target marker at their centers.
    assert_eq!(fb.get(19, 11).unwrap().ch, '•');
    assert_eq!(fb.get(19, 9).unwrap().ch, '•');
    // e2 keeps its pawn but is tinted.
    let e2 = fb.get(19, 13).unwrap();
    assert_eq!(e2.ch, '♙');
    assert_ne!(e2.style.bg, before.get(19, 13).unwrap().style.bg);
}

#[test]
fn term_view_square_at_matches_drawn_squares() {
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let fb = view.render(&GameState::default(), vp);

    let mut hits = 0;
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            let ch = fb.get(x, y).unwrap().ch;
            if ch == '♔' {
                assert_eq!(view.square_at(vp, x, y), Square::from_name("e1"));
                hits += 1;
            }
            if ch == '♚' {
                assert_eq!(view.square_at(vp, x, y), Square::from_name("e8"));
                hits += 1;
            }
        }
    }
    assert_eq!(hits, 2);
    assert_eq!(view.square_at(vp, 0, 0), None);
}

#[test]
fn term_view_top_anchor() {
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let vp = Viewport::new(34, 40);
    let fb = view.render(&GameState::default(), vp);
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(view.square_at(vp, 1, 1), Square::from_name("a8"));
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut state = GameState::default();
    click(&mut state, "e2");
    let fb = GameView::default().render(&state, Viewport::new(80, 18));
    let all = screen_text(&fb);

    assert!(all.contains("TURN"));
    assert!(all.contains("WHITE"));
    assert!(all.contains("SELECTED"));
    assert!(all.contains("e2"));
}

#[test]
fn term_view_shows_checkmate_overlay() {
    let mut state = GameState::default();
    for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
        click(&mut state, from);
        click(&mut state, to);
    }
    assert!(state.game_over());

    let fb = GameView::default().render(&state, Viewport::new(80, 18));
    let all = screen_text(&fb);
    assert!(all.contains("CHECKMATE - BLACK WINS"));
    assert!(all.contains("click to restart"));
    assert!(all.contains("CHECK"));
}

#[test]
fn term_view_small_viewport_does_not_panic() {
    let view = GameView::new(1, 1);
    let fb = view.render(&GameState::default(), Viewport::new(5, 3));
    assert_eq!(fb.width(), 5);
    assert_eq!(fb.height(), 3);
}

#[test]
fn term_view_huge_cell_size_renders() {
    let view = GameView::new(10000, 2);
    let vp = Viewport::new(80, 24);
    let fb = view.render(&GameState::default(), vp);
    assert_eq!((fb.width(), fb.height()), (80, 24));

    // Width is clamped to 16 columns per square: a8 spans columns 1..=16.
    assert_eq!(view.square_at(vp, 16, 4), Some(Square::from_name("a8").unwrap()));
    assert_eq!(view.square_at(vp, 17, 4), Some(Square::from_name("b8").unwrap()));
}
