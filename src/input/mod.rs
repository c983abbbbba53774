//! # Input Module
//!
//! Held-direction tracking for player movement.
//!
//! Key events set and clear independent bits in a small bitmask. The game
//! tick only reads the bitmask, so event delivery and the tick never need to
//! coordinate.

pub mod bindings;

pub use bindings::*;

use crate::game::Direction;
use bitflags::bitflags;
use macroquad::input::{is_key_pressed, is_key_released, KeyCode};

bitflags! {
    /// Directions currently held down.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct HeldDirections: u8 {
        const UP = 0b1000;
        const DOWN = 0b0100;
        const LEFT = 0b0010;
        const RIGHT = 0b0001;
    }
}

impl HeldDirections {
    /// The bit for a single direction.
    pub fn for_direction(direction: Direction) -> Self {
        match direction {
            Direction::Up => HeldDirections::UP,
            Direction::Down => HeldDirections::DOWN,
            Direction::Left => HeldDirections::LEFT,
            Direction::Right => HeldDirections::RIGHT,
        }
    }
}

/// Anything the player can read movement from.
pub trait InputSource {
    /// 1 if the direction is held, 0 otherwise.
    fn is_held(&self, direction: Direction) -> u8;
}

/// Keyboard sink accumulating which directions are held.
///
/// # Examples
///
/// ```
/// use hallway::{Direction, InputSource, InputState};
/// use macroquad::input::KeyCode;
///
/// let mut input = InputState::new();
/// input.press_key(KeyCode::D);
/// assert_eq!(input.is_held(Direction::Right), 1);
/// input.release_key(KeyCode::Right);
/// assert_eq!(input.is_held(Direction::Right), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputState {
    held: HeldDirections,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    /// Creates an input state with nothing held.
    pub fn new() -> Self {
        Self {
            held: HeldDirections::empty(),
        }
    }

    /// Creates an input state with the given directions held.
    pub fn holding(directions: &[Direction]) -> Self {
        let mut state = Self::new();
        for direction in directions {
            state.press(*direction);
        }
        state
    }

    /// Marks a direction as held.
    pub fn press(&mut self, direction: Direction) {
        self.held.insert(HeldDirections::for_direction(direction));
    }

    /// Marks a direction as released.
    pub fn release(&mut self, direction: Direction) {
        self.held.remove(HeldDirections::for_direction(direction));
    }

    /// Handles a key-down event. Returns false for keys that do not move.
    pub fn press_key(&mut self, key: KeyCode) -> bool {
        match key_direction(key) {
            Some(direction) => {
                self.press(direction);
                true
            }
            None => false,
        }
    }

    /// Handles a key-up event. Returns false for keys that do not move.
    pub fn release_key(&mut self, key: KeyCode) -> bool {
        match key_direction(key) {
            Some(direction) => {
                self.release(direction);
                true
            }
            None => false,
        }
    }

    /// Releases everything.
    pub fn clear(&mut self) {
        self.held = HeldDirections::empty();
    }

    /// The raw bitmask.
    pub fn held(&self) -> HeldDirections {
        self.held
    }

    /// Feeds this frame's macroquad key events into the sink.
    ///
    /// Presses are applied before releases so a tap inside one frame still
    /// ends released.
    pub fn poll_keyboard(&mut self) {
        for (key, _) in MOVEMENT_KEYS {
            if is_key_pressed(key) {
                self.press_key(key);
            }
        }
        for (key, _) in MOVEMENT_KEYS {
            if is_key_released(key) {
                self.release_key(key);
            }
        }
    }
}

impl InputSource for InputState {
    fn is_held(&self, direction: Direction) -> u8 {
        u8::from(self.held.contains(HeldDirections::for_direction(direction)))
    }
}
