//! Mapping from terminal events to game intents.

use crate::types::GameAction;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// What a terminal event means to the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Primary pointer pressed at a terminal cell
    Pointer { column: u16, row: u16 },
    /// An action that needs no board lookup
    Action(GameAction),
    /// Terminal was resized; force a full redraw
    Resize,
    Quit,
}

/// Map any terminal event.
pub fn map_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if should_quit(*key) {
                Some(InputEvent::Quit)
            } else {
                map_key_event(*key).map(InputEvent::Action)
            }
        }
        Event::Mouse(mouse) => map_mouse_event(*mouse),
        Event::Resize(_, _) => Some(InputEvent::Resize),
        _ => None,
    }
}

/// Map keyboard input to game actions.
pub fn map_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace => Some(GameAction::Deselect),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),
        _ => None,
    }
}

/// Only left-button presses count; drags, releases and other buttons are ignored.
pub fn map_mouse_event(mouse: MouseEvent) -> Option<InputEvent> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(InputEvent::Pointer {
            column: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
