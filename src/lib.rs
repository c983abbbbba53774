//! # Hallway
//!
//! A room-by-room maze walker. The maze is written as ASCII art, one symbol per
//! room, and the player walks a sprite through one 600×600 room at a time.
//!
//! ## Architecture Overview
//!
//! - **Maze**: parses the text layout into an immutable grid of [`Symbol`]s
//! - **Game**: room geometry, collision, the player actor, room-to-room
//!   navigation and the per-tick session step
//! - **Persistence**: the current grid coordinate survives restarts through a
//!   small key/value store
//! - **Input**: held-direction bitmask fed by keyboard events
//! - **Rendering**: the core produces a list of draw commands; macroquad draws
//!   them
//!
//! The core never touches the screen or the keyboard directly, so a
//! [`GameSession`] can be driven headless from tests exactly the way the
//! macroquad loop drives it.

pub mod game;
pub mod input;
pub mod maze;
pub mod persistence;
pub mod rendering;
pub mod scenes;

pub use game::*;
pub use input::*;
pub use maze::*;
pub use persistence::*;
pub use rendering::*;

pub use scenes::{SceneManager, SceneType};

/// Core error type for the Hallway engine.
#[derive(thiserror::Error, Debug)]
pub enum HallwayError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// The maze text contains a character outside the symbol alphabet
    #[error("Invalid maze character {found:?} at line {line}, column {column}")]
    InvalidMaze {
        line: usize,
        column: usize,
        found: char,
    },

    /// The maze has no rooms to stand in
    #[error("Maze has no rooms (rows: {rows}, columns: {columns})")]
    DegenerateMaze { rows: usize, columns: usize },

    /// A grid coordinate outside the maze was requested
    #[error("Position {0:?} is outside the maze")]
    OutOfBounds(game::Position),

    /// Configuration values are unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The position store could not be read or written
    #[error("Persistence error: {0}")]
    Persistence(String),
}

/// Result type used throughout the Hallway codebase.
pub type HallwayResult<T> = Result<T, HallwayError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    /// Room width in pixels
    pub const ROOM_WIDTH: f32 = 600.0;

    /// Room height in pixels
    pub const ROOM_HEIGHT: f32 = 600.0;

    /// Side length of the four corner blocks
    pub const CORNER_SIZE: f32 = 100.0;

    /// Thickness of a wall between the screen edge and the walkable floor
    pub const WALL_PADDING: f32 = 100.0;

    /// Width of the opening in a hall side
    pub const DOORWAY_WIDTH: f32 = 150.0;

    /// Player sprite width in pixels
    pub const PLAYER_WIDTH: f32 = 50.0;

    /// Player sprite height in pixels
    pub const PLAYER_HEIGHT: f32 = 100.0;

    /// Pixels moved per tick along one axis
    pub const PLAYER_SPEED: f32 = 10.0;

    /// Pixels moved per tick in debug mode
    pub const DEBUG_PLAYER_SPEED: f32 = 20.0;

    /// Distance from the entry edge where the player appears in a new room
    pub const ENTRY_INSET: f32 = 10.0;

    /// Fixed simulation rate
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Fraction of the displacement undone per collision step-back
    pub const STEP_BACK_FRACTION: f32 = 0.25;

    /// Step-backs allowed before a collision is declared unresolvable
    pub const MAX_STEP_BACKS: u32 = 4;

    /// Store key holding the grid x coordinate
    pub const GLOBAL_X_KEY: &str = "globalX";

    /// Store key holding the grid y coordinate
    pub const GLOBAL_Y_KEY: &str = "globalY";

    /// Default save file used by the binary
    pub const DEFAULT_SAVE_FILE: &str = "hallway-save.json";
}
