//! # Persistence Module
//!
//! Keeps the player's grid coordinate between sessions.
//!
//! The coordinate is stored as two string entries, `globalX` and `globalY`,
//! in a [`KeyValueStore`]. Both are written on every room change and both are
//! expired when the player leaves the maze.

pub mod store;

pub use store::*;

use crate::config::{GLOBAL_X_KEY, GLOBAL_Y_KEY};
use crate::game::Position;
use crate::HallwayResult;
use log::warn;

/// The saved grid coordinate.
///
/// # Examples
///
/// ```
/// use hallway::{MemoryStore, PersistedPosition, Position};
///
/// let mut saved = PersistedPosition::new(Box::new(MemoryStore::new()));
/// saved.save(Position::new(3, 5)).unwrap();
/// assert_eq!(saved.load(), Some(Position::new(3, 5)));
///
/// saved.clear(Position::new(3, 5)).unwrap();
/// assert_eq!(saved.load_or_default(), Position::new(0, 0));
/// ```
#[derive(Debug)]
pub struct PersistedPosition {
    store: Box<dyn KeyValueStore>,
}

impl PersistedPosition {
    /// Wraps a store.
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Convenience constructor over a fresh [`MemoryStore`].
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::new()))
    }

    /// Reads the saved coordinate.
    ///
    /// Returns `None` unless both fields are present and parse as integers.
    pub fn load(&self) -> Option<Position> {
        let x = self.read_field(GLOBAL_X_KEY);
        let y = self.read_field(GLOBAL_Y_KEY);
        match (x, y) {
            (Some(x), Some(y)) => Some(Position::new(x, y)),
            _ => None,
        }
    }

    /// Reads the saved coordinate, falling back to the origin.
    pub fn load_or_default(&self) -> Position {
        self.load().unwrap_or_else(Position::origin)
    }

    /// Writes both fields.
    pub fn save(&mut self, position: Position) -> HallwayResult<()> {
        self.store
            .set(GLOBAL_X_KEY, &position.x.to_string(), Expiry::Never)?;
        self.store
            .set(GLOBAL_Y_KEY, &position.y.to_string(), Expiry::Never)
    }

    /// Writes both fields already expired, which removes them.
    pub fn clear(&mut self, position: Position) -> HallwayResult<()> {
        self.store
            .set(GLOBAL_X_KEY, &position.x.to_string(), Expiry::Immediately)?;
        self.store
            .set(GLOBAL_Y_KEY, &position.y.to_string(), Expiry::Immediately)
    }

    /// The underlying store.
    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    fn read_field(&self, key: &str) -> Option<i32> {
        let raw = self.store.get(key)?;
        match raw.trim().parse::<i32>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring saved {} = {:?}: not an integer", key, raw);
                None
            }
        }
    }
}
