//! # Maze Module
//!
//! The maze description: room symbols, the parsed grid and the built-in
//! layouts.
//!
//! A maze is written as lines of symbols, one character per room. The grid is
//! parsed once at startup and shared read-only by the rest of the game.

pub mod grid;
pub mod layouts;
pub mod symbol;

pub use grid::*;
pub use layouts::*;
pub use symbol::*;

use crate::HallwayResult;
use std::path::Path;

/// Reads and parses a maze text file.
pub fn load_maze_file<P: AsRef<Path>>(path: P) -> HallwayResult<MazeGrid> {
    let raw = std::fs::read_to_string(path)?;
    MazeGrid::parse(&raw)
}
