//! Key mapping from terminal events to commands.

use crate::types::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a single key press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Shift or rotate the active piece
    Adjust(Direction),
    /// Hard drop
    Drop,
    /// Start a new game
    Restart,
    /// Leave the program
    Quit,
}

/// Map keyboard input to a command.
pub fn map_key(key: KeyEvent) -> Option<KeyCommand> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(KeyCommand::Quit);
    }

    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('a' | 'A' | 'h' | 'H') => {
            Some(KeyCommand::Adjust(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d' | 'D' | 'l' | 'L') => {
            Some(KeyCommand::Adjust(Direction::Right))
        }

        // Rotation
        KeyCode::Up | KeyCode::Char('w' | 'W' | 'k' | 'K') => {
            Some(KeyCommand::Adjust(Direction::RotateCw))
        }
        KeyCode::Down | KeyCode::Char('s' | 'S' | 'j' | 'J' | 'z' | 'Z') => {
            Some(KeyCommand::Adjust(Direction::RotateCcw))
        }

        KeyCode::Char(' ') | KeyCode::Enter => Some(KeyCommand::Drop),
        KeyCode::Char('r' | 'R') => Some(KeyCommand::Restart),
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => Some(KeyCommand::Quit),

        _ => None,
    }
}
