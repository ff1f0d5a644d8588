use macroquad::prelude::{KeyCode, get_keys_pressed, is_key_pressed};

use crate::game::{Direction, SessionInput};
use crate::menu::MenuInput;

pub fn session_input_for(key: KeyCode) -> Option<SessionInput> {
    let turn = |direction| Some(SessionInput::Turn(direction));
    match key {
        KeyCode::Up | KeyCode::W => turn(Direction::Up),
        KeyCode::Down | KeyCode::S => turn(Direction::Down),
        KeyCode::Left | KeyCode::A => turn(Direction::Left),
        KeyCode::Right | KeyCode::D => turn(Direction::Right),
        KeyCode::Space => Some(SessionInput::TogglePause),
        _ => None,
    }
}

pub fn menu_input_for(key: KeyCode) -> Option<MenuInput> {
    match key {
        KeyCode::Up | KeyCode::W => Some(MenuInput::Up),
        KeyCode::Down | KeyCode::S => Some(MenuInput::Down),
        KeyCode::Enter | KeyCode::KpEnter => Some(MenuInput::Confirm),
        _ => None,
    }
}

/// Session inputs pressed since the last frame.
pub fn poll_session_inputs() -> Vec<SessionInput> {
    get_keys_pressed()
        .into_iter()
        .filter_map(session_input_for)
        .collect()
}

pub fn poll_menu_inputs() -> Vec<MenuInput> {
    get_keys_pressed()
        .into_iter()
        .filter_map(menu_input_for)
        .collect()
}

pub fn quit_pressed() -> bool {
    is_key_pressed(KeyCode::Q)
}

/// Leave the current session for the menu.
pub fn back_pressed() -> bool {
    is_key_pressed(KeyCode::Escape)
}

pub fn restart_pressed() -> bool {
    is_key_pressed(KeyCode::R)
}

pub fn confirm_pressed() -> bool {
    is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::KpEnter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_and_wasd_keys() {
        assert_eq!(
            session_input_for(KeyCode::Up),
            Some(SessionInput::Turn(Direction::Up))
        );
        assert_eq!(
            session_input_for(KeyCode::A),
            Some(SessionInput::Turn(Direction::Left))
        );
        assert_eq!(
            session_input_for(KeyCode::D),
            Some(SessionInput::Turn(Direction::Right))
        );
        assert_eq!(session_input_for(KeyCode::Space), Some(SessionInput::TogglePause));
        assert_eq!(session_input_for(KeyCode::X), None);
    }

    #[test]
    fn test_menu_keys() {
        assert_eq!(menu_input_for(KeyCode::Down), Some(MenuInput::Down));
        assert_eq!(menu_input_for(KeyCode::Enter), Some(MenuInput::Confirm));
        assert_eq!(menu_input_for(KeyCode::Left), None);
    }
}
