//! # Maze Symbols
//!
//! The fifteen room symbols and the sides each one leaves open.

use crate::game::Direction;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which sides of a room are passable.
///
/// An open side is drawn as a hall (two wall pieces around a doorway), a
/// closed side as a seal (one solid wall).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OpenSides {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl OpenSides {
    /// Creates a new set of open sides.
    pub const fn new(up: bool, down: bool, left: bool, right: bool) -> Self {
        Self {
            up,
            down,
            left,
            right,
        }
    }

    /// All four sides sealed.
    pub const fn sealed() -> Self {
        Self::new(false, false, false, false)
    }

    /// Returns whether the given side is open.
    pub fn is_open(self, side: Direction) -> bool {
        match side {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// Number of open sides.
    pub fn count(self) -> usize {
        [self.up, self.down, self.left, self.right]
            .iter()
            .filter(|open| **open)
            .count()
    }
}

/// A room symbol in the maze text.
///
/// # Examples
///
/// ```
/// use hallway::{Direction, Symbol};
///
/// let symbol = Symbol::from_char('F').unwrap();
/// assert!(symbol.open_sides().is_open(Direction::Right));
/// assert!(symbol.open_sides().is_open(Direction::Down));
/// assert!(!symbol.open_sides().is_open(Direction::Up));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    /// `-`
    Horizontal,
    /// `|`
    Vertical,
    /// `<`
    RightOnly,
    /// `>`
    LeftOnly,
    /// `v`
    UpOnly,
    /// `^`
    DownOnly,
    /// `+`
    Cross,
    /// `L`
    UpRight,
    /// `7`
    DownLeft,
    /// `F`
    DownRight,
    /// `J`
    UpLeft,
    /// `M`
    NoUp,
    /// `W`
    NoDown,
    /// `E`
    NoLeft,
    /// `3`
    NoRight,
}

/// Symbol, its character, and its open sides as (up, down, left, right).
const SYMBOL_TABLE: [(Symbol, char, OpenSides); 15] = [
    (Symbol::Horizontal, '-', OpenSides::new(false, false, true, true)),
    (Symbol::Vertical, '|', OpenSides::new(true, true, false, false)),
    (Symbol::RightOnly, '<', OpenSides::new(false, false, false, true)),
    (Symbol::LeftOnly, '>', OpenSides::new(false, false, true, false)),
    (Symbol::UpOnly, 'v', OpenSides::new(true, false, false, false)),
    (Symbol::DownOnly, '^', OpenSides::new(false, true, false, false)),
    (Symbol::Cross, '+', OpenSides::new(true, true, true, true)),
    (Symbol::UpRight, 'L', OpenSides::new(true, false, false, true)),
    (Symbol::DownLeft, '7', OpenSides::new(false, true, true, false)),
    (Symbol::DownRight, 'F', OpenSides::new(false, true, false, true)),
    (Symbol::UpLeft, 'J', OpenSides::new(true, false, true, false)),
    (Symbol::NoUp, 'M', OpenSides::new(false, true, true, true)),
    (Symbol::NoDown, 'W', OpenSides::new(true, false, true, true)),
    (Symbol::NoLeft, 'E', OpenSides::new(true, true, false, true)),
    (Symbol::NoRight, '3', OpenSides::new(true, true, true, false)),
];

impl Symbol {
    /// Parses a maze character. Returns `None` for anything outside the alphabet.
    pub fn from_char(c: char) -> Option<Symbol> {
        SYMBOL_TABLE
            .iter()
            .find(|(_, ch, _)| *ch == c)
            .map(|(symbol, _, _)| *symbol)
    }

    /// The character this symbol is written as.
    pub fn to_char(self) -> char {
        self.entry().1
    }

    /// The sides this room leaves open.
    pub fn open_sides(self) -> OpenSides {
        self.entry().2
    }

    /// Finds the symbol with exactly these open sides.
    ///
    /// There is no symbol for a room with every side sealed.
    pub fn from_open_sides(sides: OpenSides) -> Option<Symbol> {
        SYMBOL_TABLE
            .iter()
            .find(|(_, _, open)| *open == sides)
            .map(|(symbol, _, _)| *symbol)
    }

    /// Returns all 15 symbols.
    pub fn all() -> Vec<Symbol> {
        SYMBOL_TABLE.iter().map(|(symbol, _, _)| *symbol).collect()
    }

    fn entry(self) -> &'static (Symbol, char, OpenSides) {
        // Variants are declared in table order.
        &SYMBOL_TABLE[self as usize]
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// One grid cell: a room, or nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Room(Symbol),
    Empty,
}

impl Cell {
    /// Returns the room symbol, if any.
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Cell::Room(symbol) => Some(symbol),
            Cell::Empty => None,
        }
    }

    /// Open sides of this cell. An empty cell has no walls on its sides.
    pub fn open_sides(self) -> OpenSides {
        match self {
            Cell::Room(symbol) => symbol.open_sides(),
            Cell::Empty => OpenSides::new(true, true, true, true),
        }
    }

    /// Character used when writing the grid back out.
    pub fn to_char(self) -> char {
        match self {
            Cell::Room(symbol) => symbol.to_char(),
            Cell::Empty => ' ',
        }
    }
}
