//! # Key Bindings
//!
//! The fixed mapping from physical keys to movement directions.

use crate::game::Direction;
use macroquad::input::KeyCode;

/// Every key that moves the player: arrow keys and W/A/S/D.
pub const MOVEMENT_KEYS: [(KeyCode, Direction); 8] = [
    (KeyCode::Up, Direction::Up),
    (KeyCode::W, Direction::Up),
    (KeyCode::Down, Direction::Down),
    (KeyCode::S, Direction::Down),
    (KeyCode::Left, Direction::Left),
    (KeyCode::A, Direction::Left),
    (KeyCode::Right, Direction::Right),
    (KeyCode::D, Direction::Right),
];

/// The direction a key moves the player in, if it is a movement key.
pub fn key_direction(key: KeyCode) -> Option<Direction> {
    MOVEMENT_KEYS
        .iter()
        .find(|(bound, _)| *bound == key)
        .map(|(_, direction)| *direction)
}
