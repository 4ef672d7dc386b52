//! Keyboard input mapping.
//!
//! Translates crossterm key events into engine commands and lifecycle
//! requests. The engine itself decides what applies in the current phase;
//! this layer only names the keys.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::Command;

/// What the host should do with a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Gameplay command forwarded to the session.
    Game(Command),
    /// Start a new game (idle / game-over screens).
    Start,
    /// Toggle pause.
    PauseToggle,
    /// Reset to the idle state.
    Reset,
}

/// Map a key event to an input event. Unrecognized keys map to nothing.
pub fn map_key(key: KeyEvent) -> Option<InputEvent> {
    match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(InputEvent::Game(Command::MoveLeft))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(InputEvent::Game(Command::MoveRight))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(InputEvent::Game(Command::SoftDrop))
        }
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(InputEvent::Game(Command::Rotate))
        }
        KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => {
            Some(InputEvent::PauseToggle)
        }
        KeyCode::Enter => Some(InputEvent::Start),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputEvent::Reset),
        _ => None,
    }
}

/// Quit keys: q, Esc, or Ctrl-C.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
