//! Key mapping from terminal events to game commands.
//!
//! Letter keys follow the classic layout (A/D move, W rotate, S soft drop, C hard drop,
//! F hold, R reflect, T manual drop) with the numeric keypad and arrows as alternatives.

use crate::types::GameCommand;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game commands.
pub fn handle_key_event(key: KeyEvent) -> Option<GameCommand> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('4') => {
            Some(GameCommand::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('6') => {
            Some(GameCommand::MoveRight)
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('5') => {
            Some(GameCommand::SoftDrop)
        }
        KeyCode::Char(' ') | KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Char('7') => {
            Some(GameCommand::HardDrop)
        }

        // Transforms
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('8') => {
            Some(GameCommand::Rotate)
        }
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Char('3') => {
            Some(GameCommand::Reflect)
        }

        // Actions
        KeyCode::Char('f') | KeyCode::Char('F') | KeyCode::Char('9') => Some(GameCommand::Hold),
        KeyCode::Char('t') | KeyCode::Char('T') => Some(GameCommand::ManualDrop),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameCommand::TogglePause),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(GameCommand::ToggleMode),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(GameCommand::NewGame),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Option<GameCommand> {
        handle_key_event(KeyEvent::from(code))
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(key(KeyCode::Left), Some(GameCommand::MoveLeft));
        assert_eq!(key(KeyCode::Char('A')), Some(GameCommand::MoveLeft));
        assert_eq!(key(KeyCode::Char('4')), Some(GameCommand::MoveLeft));
        assert_eq!(key(KeyCode::Right), Some(GameCommand::MoveRight));
        assert_eq!(key(KeyCode::Char('6')), Some(GameCommand::MoveRight));
        assert_eq!(key(KeyCode::Down), Some(GameCommand::SoftDrop));
        assert_eq!(key(KeyCode::Char('s')), Some(GameCommand::SoftDrop));
    }

    #[test]
    fn test_drop_keys() {
        assert_eq!(key(KeyCode::Char(' ')), Some(GameCommand::HardDrop));
        assert_eq!(key(KeyCode::Char('c')), Some(GameCommand::HardDrop));
        assert_eq!(key(KeyCode::Char('7')), Some(GameCommand::HardDrop));
        assert_eq!(key(KeyCode::Char('t')), Some(GameCommand::ManualDrop));
    }

    #[test]
    fn test_transform_keys() {
        assert_eq!(key(KeyCode::Up), Some(GameCommand::Rotate));
        assert_eq!(key(KeyCode::Char('W')), Some(GameCommand::Rotate));
        assert_eq!(key(KeyCode::Char('8')), Some(GameCommand::Rotate));
        assert_eq!(key(KeyCode::Char('r')), Some(GameCommand::Reflect));
        assert_eq!(key(KeyCode::Char('3')), Some(GameCommand::Reflect));
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(key(KeyCode::Char('f')), Some(GameCommand::Hold));
        assert_eq!(key(KeyCode::Char('9')), Some(GameCommand::Hold));
        assert_eq!(key(KeyCode::Char('p')), Some(GameCommand::TogglePause));
        assert_eq!(key(KeyCode::Char('M')), Some(GameCommand::ToggleMode));
        assert_eq!(key(KeyCode::Char('n')), Some(GameCommand::NewGame));
        assert_eq!(key(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            None
        );
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
