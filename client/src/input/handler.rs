use apricorn_core::Command;
use macroquad::prelude::*;

/// Keys that map to a discrete command, polled once per frame
const COMMAND_KEYS: [KeyCode; 10] = [
    KeyCode::E,
    KeyCode::F,
    KeyCode::Space,
    KeyCode::B,
    KeyCode::C,
    KeyCode::R,
    KeyCode::P,
    KeyCode::M,
    KeyCode::H,
    KeyCode::Escape,
];

/// Command bound to a key, if any
pub fn command_for_key(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::E => Some(Command::Interact),
        KeyCode::F => Some(Command::Attack),
        KeyCode::Space => Some(Command::ThrowBall),
        KeyCode::B => Some(Command::ToggleBag),
        KeyCode::C => Some(Command::Craft),
        KeyCode::R => Some(Command::ToggleRun),
        KeyCode::P => Some(Command::SpawnWild),
        KeyCode::M | KeyCode::H => Some(Command::ToggleHelp),
        KeyCode::Escape => Some(Command::Escape),
        _ => None,
    }
}

/// Movement axis from the held direction keys. Opposite keys cancel out.
pub fn movement_axis(up: bool, down: bool, left: bool, right: bool) -> (f32, f32) {
    let axis = |neg: bool, pos: bool| match (neg, pos) {
        (true, false) => -1.0,
        (false, true) => 1.0,
        _ => 0.0,
    };
    (axis(left, right), axis(up, down))
}

#[derive(Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands for every bound key pressed this frame
    pub fn poll_commands(&self) -> Vec<Command> {
        COMMAND_KEYS
            .iter()
            .filter(|key| is_key_pressed(**key))
            .filter_map(|key| command_for_key(*key))
            .collect()
    }

    /// Read which direction keys are held
    pub fn poll_movement(&self) -> (f32, f32) {
        let up = is_key_down(KeyCode::W) || is_key_down(KeyCode::Up);
        let down = is_key_down(KeyCode::S) || is_key_down(KeyCode::Down);
        let left = is_key_down(KeyCode::A) || is_key_down(KeyCode::Left);
        let right = is_key_down(KeyCode::D) || is_key_down(KeyCode::Right);

        movement_axis(up, down, left, right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_bindings() {
        assert_eq!(command_for_key(KeyCode::E), Some(Command::Interact));
        assert_eq!(command_for_key(KeyCode::F), Some(Command::Attack));
        assert_eq!(command_for_key(KeyCode::Space), Some(Command::ThrowBall));
        assert_eq!(command_for_key(KeyCode::C), Some(Command::Craft));
        assert_eq!(command_for_key(KeyCode::Escape), Some(Command::Escape));
        assert_eq!(command_for_key(KeyCode::W), None);
    }

    #[test]
    fn test_every_polled_key_is_bound() {
        for key in COMMAND_KEYS {
            assert!(command_for_key(key).is_some(), "{:?} is unbound", key);
        }
    }

    #[test]
    fn test_movement_axis() {
        assert_eq!(movement_axis(false, false, false, false), (0.0, 0.0));
        assert_eq!(movement_axis(true, false, false, true), (1.0, -1.0));
        assert_eq!(movement_axis(true, true, true, false), (-1.0, 0.0));
    }
}
