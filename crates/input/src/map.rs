//! Key mapping from terminal events to game input.

use crate::types::{Direction, InputEvent};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Movement direction bound to a key, if any.
///
/// WASD and the arrow keys, either case.
pub fn movement_key(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Direction::Right),
        _ => None,
    }
}

/// Map a keyboard event to a game input.
///
/// Press and auto-repeat of a movement key are both `KeyDown`; repeats are
/// harmless because a key that is already held is never queued twice.
pub fn handle_key_event(key: KeyEvent) -> Option<InputEvent> {
    if should_quit(key) {
        return Some(InputEvent::Quit);
    }

    if let Some(direction) = movement_key(key.code) {
        return match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => Some(InputEvent::KeyDown(direction)),
            KeyEventKind::Release => Some(InputEvent::KeyUp(direction)),
        };
    }

    match (key.code, key.kind) {
        (KeyCode::Char(' '), KeyEventKind::Press) => Some(InputEvent::PlantBomb),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    matches!(
        key.code,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q')
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
