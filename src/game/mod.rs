//! # Game Module
//!
//! Room geometry, collision, the player actor and room-to-room navigation.
//!
//! This module contains the moving parts of the maze walker:
//! - Room geometry built from a maze symbol
//! - Corner-point collision tests and walk-back resolution
//! - The player actor and its per-tick movement
//! - Grid navigation with persisted position and the win exit
//! - The session object that runs one fixed tick at a time

pub mod collision;
pub mod navigator;
pub mod player;
pub mod room;
pub mod scheduler;
pub mod settings;
pub mod state;

pub use collision::*;
pub use navigator::*;
pub use player::*;
pub use room::*;
pub use scheduler::*;
pub use settings::*;
pub use state::*;

use serde::{Deserialize, Serialize};

/// A cell coordinate in the maze grid.
///
/// # Examples
///
/// ```
/// use hallway::{Direction, Position};
///
/// let pos = Position::new(3, 5);
/// assert_eq!(pos.step(Direction::Right), Position::new(4, 5));
/// assert_eq!(pos.step(Direction::Up), Position::new(3, 4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Creates a new position with the given coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the origin position (0, 0).
    pub fn origin() -> Self {
        Self::new(0, 0)
    }

    /// The neighbouring cell in a direction.
    pub fn step(self, direction: Direction) -> Position {
        self + direction.to_delta()
    }

}

impl Default for Position {
    fn default() -> Self {
        Self::origin()
    }
}

impl std::ops::Add for Position {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

/// The four sides of a room, and the four ways out of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Converts a direction to a grid delta. `y` grows downward.
    ///
    /// # Examples
    ///
    /// ```
    /// use hallway::{Direction, Position};
    ///
    /// let delta = Direction::Up.to_delta();
    /// assert_eq!(delta, Position::new(0, -1));
    /// ```
    pub fn to_delta(self) -> Position {
        match self {
            Direction::Up => Position::new(0, -1),
            Direction::Down => Position::new(0, 1),
            Direction::Left => Position::new(-1, 0),
            Direction::Right => Position::new(1, 0),
        }
    }

    /// The facing side of the neighbouring room.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns all 4 directions in up, down, left, right order.
    pub fn all() -> [Direction; 4] {
        [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
    }
}

/// A point in room pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
