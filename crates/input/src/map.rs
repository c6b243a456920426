//! Key mapping from terminal events to game actions.

use crate::types::{Direction, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    // Ctrl-C is quit, not a direction key.
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        // Movement (arrows, WASD, vi keys)
        KeyCode::Up | KeyCode::Char('w' | 'W' | 'k' | 'K') => Some(GameAction::Turn(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s' | 'S' | 'j' | 'J') => {
            Some(GameAction::Turn(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a' | 'A' | 'h' | 'H') => {
            Some(GameAction::Turn(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d' | 'D' | 'l' | 'L') => {
            Some(GameAction::Turn(Direction::Right))
        }

        // Start / pause / resume
        KeyCode::Char(' ' | 'p' | 'P') | KeyCode::Enter => Some(GameAction::StartOrPause),

        // Restart (only honoured after game over)
        KeyCode::Char('r' | 'R') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q' | 'Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
