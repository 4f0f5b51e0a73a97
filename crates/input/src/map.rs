//! Key mapping from terminal events to game actions.

use crate::types::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// The physical-key table: arrows only
pub const KEY_BINDINGS: [(KeyCode, Action); 4] = [
    (KeyCode::Up, Action::Rotate),
    (KeyCode::Down, Action::Down),
    (KeyCode::Left, Action::Left),
    (KeyCode::Right, Action::Right),
];

/// Runner-level controls that never reach the field as actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    TogglePause,
    Restart,
    Quit,
}

/// Map keyboard input to a game action.
pub fn handle_key_event(key: KeyEvent) -> Option<Action> {
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }
    KEY_BINDINGS
        .iter()
        .find(|(code, _)| *code == key.code)
        .map(|(_, action)| *action)
}

/// Map keyboard input to a session control.
pub fn control_for_key(key: KeyEvent) -> Option<Control> {
    if should_quit(key) {
        return Some(Control::Quit);
    }
    match key.code {
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Control::TogglePause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Control::Restart),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
