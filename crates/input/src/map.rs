//! Key mapping from terminal events to game actions.

use crate::types::{Direction, GameAction, Locale};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn move_action(direction: Direction) -> GameAction {
    match direction {
        Direction::Left => GameAction::MoveLeft,
        Direction::Right => GameAction::MoveRight,
    }
}

/// Map keyboard input to game actions.
///
/// Arrow keys follow the reading direction of `locale`; the letter keys
/// (`h`/`a`, `l`/`d`) always mean screen left and right.
pub fn handle_key_event(key: KeyEvent, locale: Locale) -> Option<GameAction> {
    let arrow = |direction: Direction| {
        if locale.is_rtl() {
            move_action(direction.mirrored())
        } else {
            move_action(direction)
        }
    };

    match key.code {
        // Movement
        KeyCode::Left => Some(arrow(Direction::Left)),
        KeyCode::Right => Some(arrow(Direction::Right)),
        KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameAction::MoveLeft)
        }
        KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameAction::MoveRight)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameAction::SoftDrop)
        }

        // Actions
        KeyCode::Char(' ') => Some(GameAction::HardDrop),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::Pause),

        // Lifecycle
        KeyCode::Enter => Some(GameAction::Start),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
