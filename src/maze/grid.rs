//! # Maze Grid
//!
//! Parsing of the ASCII maze layout into an immutable rectangular grid.

use crate::game::{Direction, Position};
use crate::maze::{Cell, Symbol};
use crate::{HallwayError, HallwayResult};
use serde::{Deserialize, Serialize};

/// Inclusive coordinate bounds of a grid.
///
/// For an empty grid `max_x < min_x` (or `max_y < min_y`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeBounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl MazeBounds {
    /// Returns whether the position lies inside the bounds.
    pub fn contains(&self, position: Position) -> bool {
        position.x >= self.min_x
            && position.x <= self.max_x
            && position.y >= self.min_y
            && position.y <= self.max_y
    }

    /// True when the bounds enclose no cell at all.
    pub fn is_degenerate(&self) -> bool {
        self.max_x < self.min_x || self.max_y < self.min_y
    }
}

/// A rectangular grid of maze cells.
///
/// Built once from the maze text and never changed afterwards. Every row has
/// the same length; short rows are padded with [`Cell::Empty`].
///
/// # Examples
///
/// ```
/// use hallway::{MazeGrid, Position};
///
/// let grid = MazeGrid::parse("
///     F7
///     LJ
/// ").unwrap();
/// assert_eq!(grid.rows(), 2);
/// assert_eq!(grid.columns(), 2);
/// assert_eq!(grid.get(Position::new(1, 0)).unwrap().to_char(), '7');
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeGrid {
    cells: Vec<Vec<Cell>>,
    columns: usize,
}

/// What is wrong with a connection between two rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeamIssue {
    /// The neighbouring room has a seal where this room has a hall
    SealedNeighbour,
    /// The hall leads off the edge of the maze
    LeadsOffGrid,
}

/// An open side that does not line up with its neighbour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeamMismatch {
    pub position: Position,
    pub side: Direction,
    pub issue: SeamIssue,
}

impl MazeGrid {
    /// Parses maze text into a grid.
    ///
    /// A blank first line and a blank last line are dropped (they are left
    /// over from indented multi-line literals). The common leading
    /// indentation of all lines is stripped, then every row is padded on the
    /// right with empty cells to the length of the longest row. Spaces inside
    /// a row are empty cells; any other character outside the symbol
    /// alphabet is an error.
    pub fn parse(raw: &str) -> HallwayResult<MazeGrid> {
        let mut lines: Vec<(usize, &str)> = raw
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .enumerate()
            .collect();

        if lines.first().is_some_and(|(_, line)| line.trim().is_empty()) {
            lines.remove(0);
        }
        if lines.last().is_some_and(|(_, line)| line.trim().is_empty()) {
            lines.pop();
        }

        let left_edge = lines
            .iter()
            .map(|(_, line)| line.chars().take_while(|c| *c == ' ').count())
            .min()
            .unwrap_or(0);

        let mut cells = Vec::with_capacity(lines.len());
        for (line_index, line) in &lines {
            let mut row = Vec::new();
            for (column_index, c) in line.chars().enumerate().skip(left_edge) {
                let cell = if c == ' ' {
                    Cell::Empty
                } else {
                    Symbol::from_char(c).map(Cell::Room).ok_or_else(|| {
                        HallwayError::InvalidMaze {
                            line: line_index + 1,
                            column: column_index + 1,
                            found: c,
                        }
                    })?
                };
                row.push(cell);
            }
            cells.push(row);
        }

        let columns = cells.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut cells {
            row.resize(columns, Cell::Empty);
        }

        Ok(MazeGrid { cells, columns })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Number of columns (length of every row).
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Coordinate bounds; `max = len - 1`.
    pub fn bounds(&self) -> MazeBounds {
        MazeBounds {
            min_x: 0,
            max_x: self.columns as i32 - 1,
            min_y: 0,
            max_y: self.rows() as i32 - 1,
        }
    }

    /// True when the grid has no rows or no columns.
    pub fn is_degenerate(&self) -> bool {
        self.bounds().is_degenerate()
    }

    /// Returns whether the position lies inside the grid.
    pub fn contains(&self, position: Position) -> bool {
        self.bounds().contains(position)
    }

    /// Gets the cell at a position, if it is inside the grid.
    pub fn get(&self, position: Position) -> Option<Cell> {
        if !self.contains(position) {
            return None;
        }
        self.cells
            .get(position.y as usize)
            .and_then(|row| row.get(position.x as usize))
            .copied()
    }

    /// Gets the cell at a position, failing with [`HallwayError::OutOfBounds`].
    pub fn cell(&self, position: Position) -> HallwayResult<Cell> {
        self.get(position)
            .ok_or(HallwayError::OutOfBounds(position))
    }

    /// Iterates over the rows of the grid.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// The bottom-right cell, whose right side is the way out of the maze.
    pub fn exit_position(&self) -> Option<Position> {
        let bounds = self.bounds();
        if bounds.is_degenerate() {
            None
        } else {
            Some(Position::new(bounds.max_x, bounds.max_y))
        }
    }

    /// Writes the grid back out as text, one row per line, without padding.
    pub fn to_text(&self) -> String {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.to_char())
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Finds every open side that does not meet an open side on the other
    /// room, and every open side that leads off the grid.
    ///
    /// The right side of the exit cell is allowed to lead off the grid.
    /// Empty cells have no walls and never cause a mismatch.
    pub fn seam_mismatches(&self) -> Vec<SeamMismatch> {
        let mut mismatches = Vec::new();
        let exit = self.exit_position();

        for (y, row) in self.cells.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let Cell::Room(symbol) = cell else {
                    continue;
                };
                let position = Position::new(x as i32, y as i32);
                let open = symbol.open_sides();

                for side in Direction::all() {
                    if !open.is_open(side) {
                        continue;
                    }
                    let issue = match self.get(position.step(side)) {
                        None if Some(position) == exit && side == Direction::Right => None,
                        None => Some(SeamIssue::LeadsOffGrid),
                        Some(neighbour) if !neighbour.open_sides().is_open(side.opposite()) => {
                            Some(SeamIssue::SealedNeighbour)
                        }
                        Some(_) => None,
                    };
                    if let Some(issue) = issue {
                        mismatches.push(SeamMismatch {
                            position,
                            side,
                            issue,
                        });
                    }
                }
            }
        }

        mismatches
    }
}
