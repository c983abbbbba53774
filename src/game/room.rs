//! # Room Geometry
//!
//! Wall rectangles for a single room, built from its maze symbol.
//!
//! Every room has a solid block in each corner. Between the corners, each
//! side is either a hall (two wall pieces around a doorway) or a seal (one
//! wall across the whole side). The same rectangles are used for drawing and
//! for collision.

use crate::config;
use crate::game::{Collidable, Direction, Point};
use crate::maze::{Cell, Symbol};
use serde::{Deserialize, Serialize};

/// Fixed pixel dimensions of a room.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomLayout {
    /// Room width in pixels
    pub width: f32,
    /// Room height in pixels
    pub height: f32,
    /// Side length of the square corner blocks
    pub corner_size: f32,
    /// Thickness of the walls along each side
    pub wall_padding: f32,
    /// Width of the opening in a hall side
    pub doorway_width: f32,
}

impl Default for RoomLayout {
    fn default() -> Self {
        Self {
            width: config::ROOM_WIDTH,
            height: config::ROOM_HEIGHT,
            corner_size: config::CORNER_SIZE,
            wall_padding: config::WALL_PADDING,
            doorway_width: config::DOORWAY_WIDTH,
        }
    }
}

impl RoomLayout {
    /// Length of a side between its two corner blocks.
    fn side_span(&self, side: Direction) -> f32 {
        match side {
            Direction::Up | Direction::Down => self.width - 2.0 * self.corner_size,
            Direction::Left | Direction::Right => self.height - 2.0 * self.corner_size,
        }
    }

    /// Length of each of the two wall pieces in a hall.
    fn hall_piece(&self, side: Direction) -> f32 {
        (self.side_span(side) - self.doorway_width) / 2.0
    }
}

/// Which wall group a rectangle belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WallKind {
    /// One of the four corner blocks
    Corner,
    /// A wall piece beside a doorway
    Hall(Direction),
    /// A solid wall across a closed side
    Seal(Direction),
}

/// An axis-aligned wall rectangle in room pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub kind: WallKind,
}

impl RoomRect {
    /// Creates a new rectangle.
    pub fn new(x: f32, y: f32, width: f32, height: f32, kind: WallKind) -> Self {
        Self {
            x,
            y,
            width,
            height,
            kind,
        }
    }

    /// Returns whether the point lies inside the rectangle, edges included.
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// An object collides when any of its corners is inside this rectangle.
    pub fn collides<C: Collidable + ?Sized>(&self, object: &C) -> bool {
        object
            .corners()
            .iter()
            .any(|corner| self.contains_point(*corner))
    }
}

impl Collidable for RoomRect {
    fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x, self.y),
            Point::new(self.x + self.width, self.y),
            Point::new(self.x + self.width, self.y + self.height),
            Point::new(self.x, self.y + self.height),
        ]
    }
}

/// The four corner blocks every room has.
pub fn corner_rects(layout: &RoomLayout) -> Vec<RoomRect> {
    let c = layout.corner_size;
    let right = layout.width - c;
    let bottom = layout.height - c;
    vec![
        RoomRect::new(0.0, 0.0, c, c, WallKind::Corner),
        RoomRect::new(right, 0.0, c, c, WallKind::Corner),
        RoomRect::new(right, bottom, c, c, WallKind::Corner),
        RoomRect::new(0.0, bottom, c, c, WallKind::Corner),
    ]
}

/// Wall rectangles along one side: two hall pieces if open, one seal if not.
pub fn side_rects(layout: &RoomLayout, side: Direction, open: bool) -> Vec<RoomRect> {
    let c = layout.corner_size;
    let pad = layout.wall_padding;
    let span = layout.side_span(side);
    let piece = layout.hall_piece(side);

    // Offset of the wall from the top-left of the room, across the side.
    let across = match side {
        Direction::Up | Direction::Left => 0.0,
        Direction::Down => layout.height - pad,
        Direction::Right => layout.width - pad,
    };

    let along = |start: f32, length: f32, kind: WallKind| match side {
        Direction::Up | Direction::Down => RoomRect::new(start, across, length, pad, kind),
        Direction::Left | Direction::Right => RoomRect::new(across, start, pad, length, kind),
    };

    if open {
        vec![
            along(c, piece, WallKind::Hall(side)),
            along(c + span - piece, piece, WallKind::Hall(side)),
        ]
    } else {
        vec![along(c, span, WallKind::Seal(side))]
    }
}

/// Builds the full wall set for a room symbol.
///
/// # Examples
///
/// ```
/// use hallway::{geometry_for, RoomLayout, Symbol};
///
/// // `+` is open on every side: 4 corners plus 2 hall pieces per side.
/// let rects = geometry_for(Symbol::Cross, &RoomLayout::default());
/// assert_eq!(rects.len(), 12);
///
/// // `<` is sealed on three sides: 4 corners, 3 seals and 2 hall pieces.
/// let rects = geometry_for(Symbol::RightOnly, &RoomLayout::default());
/// assert_eq!(rects.len(), 9);
/// ```
pub fn geometry_for(symbol: Symbol, layout: &RoomLayout) -> Vec<RoomRect> {
    let open = symbol.open_sides();
    let mut rects = corner_rects(layout);
    for side in Direction::all() {
        rects.extend(side_rects(layout, side, open.is_open(side)));
    }
    rects
}

/// A room ready for drawing and collision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    cell: Cell,
    rects: Vec<RoomRect>,
}

impl Room {
    /// Builds the room for a grid cell. An empty cell only has its corners.
    pub fn new(cell: Cell, layout: &RoomLayout) -> Self {
        let rects = match cell {
            Cell::Room(symbol) => geometry_for(symbol, layout),
            Cell::Empty => corner_rects(layout),
        };
        Self { cell, rects }
    }

    /// The grid cell this room was built from.
    pub fn cell(&self) -> Cell {
        self.cell
    }

    /// All wall rectangles.
    pub fn rects(&self) -> &[RoomRect] {
        &self.rects
    }

    /// Returns whether the object touches any wall.
    pub fn collides<C: Collidable + ?Sized>(&self, object: &C) -> bool {
        self.rects.iter().any(|rect| rect.collides(object))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> RoomLayout {
        RoomLayout::default()
    }

    fn kinds_for(rects: &[RoomRect], side: Direction) -> (usize, usize) {
        let halls = rects
            .iter()
            .filter(|r| r.kind == WallKind::Hall(side))
            .count();
        let seals = rects
            .iter()
            .filter(|r| r.kind == WallKind::Seal(side))
            .count();
        (halls, seals)
    }

    #[test]
    fn test_corner_blocks() {
        let corners = corner_rects(&layout());
        assert_eq!(corners.len(), 4);
        assert!(corners.contains(&RoomRect::new(0.0, 0.0, 100.0, 100.0, WallKind::Corner)));
        assert!(corners.contains(&RoomRect::new(500.0, 0.0, 100.0, 100.0, WallKind::Corner)));
        assert!(corners.contains(&RoomRect::new(500.0, 500.0, 100.0, 100.0, WallKind::Corner)));
        assert!(corners.contains(&RoomRect::new(0.0, 500.0, 100.0, 100.0, WallKind::Corner)));
    }

    #[test]
    fn test_hall_pieces_flank_a_centred_doorway() {
        let up = side_rects(&layout(), Direction::Up, true);
        assert_eq!(
            up,
            vec![
                RoomRect::new(100.0, 0.0, 125.0, 100.0, WallKind::Hall(Direction::Up)),
                RoomRect::new(375.0, 0.0, 125.0, 100.0, WallKind::Hall(Direction::Up)),
            ]
        );

        let right = side_rects(&layout(), Direction::Right, true);
        assert_eq!(
            right,
            vec![
                RoomRect::new(500.0, 100.0, 100.0, 125.0, WallKind::Hall(Direction::Right)),
                RoomRect::new(500.0, 375.0, 100.0, 125.0, WallKind::Hall(Direction::Right)),
            ]
        );
    }

    #[test]
    fn test_seals_span_the_side() {
        assert_eq!(
            side_rects(&layout(), Direction::Down, false),
            vec![RoomRect::new(100.0, 500.0, 400.0, 100.0, WallKind::Seal(Direction::Down))]
        );
        assert_eq!(
            side_rects(&layout(), Direction::Left, false),
            vec![RoomRect::new(0.0, 100.0, 100.0, 400.0, WallKind::Seal(Direction::Left))]
        );
    }

    #[test]
    fn test_every_symbol_has_exactly_one_construct_per_side() {
        for symbol in Symbol::all() {
            let rects = geometry_for(symbol, &layout());
            let corners = rects.iter().filter(|r| r.kind == WallKind::Corner).count();
            assert_eq!(corners, 4, "{}", symbol);

            for side in Direction::all() {
                let (halls, seals) = kinds_for(&rects, side);
                if symbol.open_sides().is_open(side) {
                    assert_eq!((halls, seals), (2, 0), "{} {:?}", symbol, side);
                } else {
                    assert_eq!((halls, seals), (0, 1), "{} {:?}", symbol, side);
                }
            }
        }
    }

    #[test]
    fn test_empty_cell_room_has_only_corners() {
        let room = Room::new(Cell::Empty, &layout());
        assert_eq!(room.rects().len(), 4);
        assert!(room.rects().iter().all(|r| r.kind == WallKind::Corner));
    }

    #[test]
    fn test_rect_corners() {
        let rect = RoomRect::new(10.0, 20.0, 30.0, 40.0, WallKind::Corner);
        let corners = rect.corners();
        assert!(corners.contains(&Point::new(10.0, 20.0)));
        assert!(corners.contains(&Point::new(40.0, 60.0)));
    }

    #[test]
    fn test_rect_contains_point_is_inclusive() {
        let rect = RoomRect::new(100.0, 100.0, 50.0, 50.0, WallKind::Corner);
        assert!(rect.contains_point(Point::new(100.0, 100.0)));
        assert!(rect.contains_point(Point::new(150.0, 150.0)));
        assert!(rect.contains_point(Point::new(150.0, 120.0)));
        assert!(!rect.contains_point(Point::new(151.0, 120.0)));
        assert!(!rect.contains_point(Point::new(99.0, 120.0)));
    }
}
