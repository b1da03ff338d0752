//! Key mapping from terminal events to game commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game commands.
///
/// Commands are single letters, case-insensitive. Modifier state is
/// ignored here; quit chords are handled by [`should_quit`] before the
/// mapping runs.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Char(c) => Command::from_char(c),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
