//! Key mapping from terminal events to session commands.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the host to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Forward to `GameSession::apply_action`.
    Action(GameAction),
    IncreasePreview,
    DecreasePreview,
    ToggleAdvanced,
    ToggleGhost,
}

/// Map a key press to a command. Releases, and anything `should_quit`
/// claims, map to nothing.
pub fn map_key(key: KeyEvent) -> Option<KeyCommand> {
    if key.kind == KeyEventKind::Release || should_quit(key) {
        return None;
    }

    let action = match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => GameAction::MoveLeft,
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => GameAction::MoveRight,
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => GameAction::SoftDrop,

        // Rotation
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => GameAction::Rotate,

        // Actions
        KeyCode::Char(' ') => GameAction::HardDrop,
        KeyCode::Char('c') | KeyCode::Char('C') => GameAction::Hold,
        KeyCode::Char('p') | KeyCode::Char('P') => GameAction::Pause,

        // Start / restart
        KeyCode::Char('r') | KeyCode::Char('R') => GameAction::Restart,

        // Settings
        KeyCode::Char('+') | KeyCode::Char('=') => return Some(KeyCommand::IncreasePreview),
        KeyCode::Char('-') | KeyCode::Char('_') => return Some(KeyCommand::DecreasePreview),
        KeyCode::Char('m') | KeyCode::Char('M') => return Some(KeyCommand::ToggleAdvanced),
        KeyCode::Char('g') | KeyCode::Char('G') => return Some(KeyCommand::ToggleGhost),

        _ => return None,
    };
    Some(KeyCommand::Action(action))
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    fn press(code: KeyCode) -> Option<KeyCommand> {
        map_key(KeyEvent::from(code))
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(press(KeyCode::Left), Some(KeyCommand::Action(GameAction::MoveLeft)));
        assert_eq!(press(KeyCode::Right), Some(KeyCommand::Action(GameAction::MoveRight)));
        assert_eq!(press(KeyCode::Down), Some(KeyCommand::Action(GameAction::SoftDrop)));

        assert_eq!(press(KeyCode::Char('H')), Some(KeyCommand::Action(GameAction::MoveLeft)));
        assert_eq!(press(KeyCode::Char('l')), Some(KeyCommand::Action(GameAction::MoveRight)));
        assert_eq!(press(KeyCode::Char('j')), Some(KeyCommand::Action(GameAction::SoftDrop)));
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(press(KeyCode::Up), Some(KeyCommand::Action(GameAction::Rotate)));
        assert_eq!(press(KeyCode::Char('k')), Some(KeyCommand::Action(GameAction::Rotate)));
        assert_eq!(press(KeyCode::Char('z')), None);
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(press(KeyCode::Char(' ')), Some(KeyCommand::Action(GameAction::HardDrop)));
        assert_eq!(press(KeyCode::Char('c')), Some(KeyCommand::Action(GameAction::Hold)));
        assert_eq!(press(KeyCode::Char('p')), Some(KeyCommand::Action(GameAction::Pause)));
        assert_eq!(press(KeyCode::Char('R')), Some(KeyCommand::Action(GameAction::Restart)));
    }

    #[test]
    fn test_setting_keys() {
        assert_eq!(press(KeyCode::Char('+')), Some(KeyCommand::IncreasePreview));
        assert_eq!(press(KeyCode::Char('=')), Some(KeyCommand::IncreasePreview));
        assert_eq!(press(KeyCode::Char('-')), Some(KeyCommand::DecreasePreview));
        assert_eq!(press(KeyCode::Char('m')), Some(KeyCommand::ToggleAdvanced));
        assert_eq!(press(KeyCode::Char('G')), Some(KeyCommand::ToggleGhost));
    }

    #[test]
    fn test_release_is_ignored() {
        let release = KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }

    #[test]
    fn test_ctrl_c_is_not_hold() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key), None);
    }
}
