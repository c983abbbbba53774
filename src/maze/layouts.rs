//! # Built-in Layouts
//!
//! Maze layouts shipped with the game.
//!
//! Each symbol is one room and names the sides that are open:
//! `-` `|` straight halls, `<` `>` `v` `^` dead ends (the symbol points at the
//! sealed walls), `L` `7` `F` `J` corners, `M` `W` `E` `3` three-way rooms and
//! `+` a crossroads. The player starts in the top-left room and leaves through
//! the right side of the bottom-right room.

/// The 10×10 maze the game starts with.
pub const DEFAULT_MAZE: &str = "
    F-M>FM---7
    |<W-JL-7^|
    |F---7F3LJ
    |vF7^LJLM7
    EMJ|E7F-J|
    |vFJ|LJF7v
    L7L7L--JE7
    ^E7L-7^FJv
    |||F7||L-7
    LJLJvvL--W
";

/// A two-room maze for quick manual testing.
pub const CORRIDOR_MAZE: &str = "
    <-
";
