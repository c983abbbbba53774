//! # Room Navigator
//!
//! Tracks which maze cell the player is in and moves between cells.
//!
//! A move succeeds whenever the neighbouring cell is inside the grid; the
//! walls of the current room already decide whether the player could reach
//! that edge. Leaving the bottom-right cell through its right side is the win
//! exit rather than a blocked move.

use crate::game::{Direction, Position, Room, RoomLayout};
use crate::maze::{MazeBounds, MazeGrid};
use crate::persistence::PersistedPosition;
use crate::{HallwayError, HallwayResult};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

/// Result of asking the navigator to move one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The player is now in a neighbouring cell
    Moved { from: Position, to: Position },
    /// The neighbouring cell is outside the maze; nothing changed
    Blocked,
    /// The player left the maze through the exit
    Won,
}

/// Current grid position and the room built for it.
#[derive(Debug)]
pub struct RoomNavigator {
    grid: MazeGrid,
    layout: RoomLayout,
    position: Position,
    room: Room,
    persisted: PersistedPosition,
}

impl RoomNavigator {
    /// Creates a navigator at the saved position, or at the origin.
    ///
    /// Fails with [`HallwayError::DegenerateMaze`] for a grid without cells.
    /// A saved position that no longer fits the grid is discarded.
    pub fn new(
        grid: MazeGrid,
        layout: RoomLayout,
        persisted: PersistedPosition,
    ) -> HallwayResult<Self> {
        if grid.is_degenerate() {
            return Err(HallwayError::DegenerateMaze {
                rows: grid.rows(),
                columns: grid.columns(),
            });
        }

        let mut position = persisted.load_or_default();
        if !grid.contains(position) {
            warn!(
                "Saved position {:?} is outside the {}x{} maze, starting at the origin",
                position,
                grid.columns(),
                grid.rows()
            );
            position = Position::origin();
        }

        let room = Room::new(grid.cell(position)?, &layout);
        debug!("Navigator starting at {:?} in {:?}", position, room.cell());

        Ok(Self {
            grid,
            layout,
            position,
            room,
            persisted,
        })
    }

    /// Moves one cell in a direction if the grid allows it.
    ///
    /// On success the new position is saved and the room rebuilt. Moving
    /// right out of the exit cell clears the saved position and reports
    /// [`MoveOutcome::Won`].
    pub fn move_global(&mut self, direction: Direction) -> MoveOutcome {
        if direction == Direction::Right && Some(self.position) == self.grid.exit_position() {
            info!("Left the maze through the exit at {:?}", self.position);
            if let Err(e) = self.persisted.clear(self.position) {
                warn!("Could not clear saved position: {}", e);
            }
            return MoveOutcome::Won;
        }

        let from = self.position;
        let to = from.step(direction);
        let Some(cell) = self.grid.get(to) else {
            debug!("No room {:?} of {:?}", direction, from);
            return MoveOutcome::Blocked;
        };

        self.position = to;
        self.room = Room::new(cell, &self.layout);
        if let Err(e) = self.persisted.save(to) {
            warn!("Could not save position {:?}: {}", to, e);
        }
        debug!("Moved {:?} from {:?} to {:?}", direction, from, to);

        MoveOutcome::Moved { from, to }
    }

    /// Jumps straight to a cell without saving it.
    pub fn set_position(&mut self, position: Position) -> HallwayResult<()> {
        let cell = self.grid.cell(position)?;
        self.position = position;
        self.room = Room::new(cell, &self.layout);
        Ok(())
    }

    /// The current cell.
    pub fn position(&self) -> Position {
        self.position
    }

    /// The room for the current cell.
    pub fn room(&self) -> &Room {
        &self.room
    }

    /// The maze grid.
    pub fn grid(&self) -> &MazeGrid {
        &self.grid
    }

    /// Grid bounds.
    pub fn bounds(&self) -> MazeBounds {
        self.grid.bounds()
    }

    /// The room layout used for every room.
    pub fn layout(&self) -> &RoomLayout {
        &self.layout
    }

    /// The saved position store.
    pub fn persisted(&self) -> &PersistedPosition {
        &self.persisted
    }
}
