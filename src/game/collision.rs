//! # Collision
//!
//! Corner-point collision against room walls and the per-axis walk-back that
//! resolves it.
//!
//! An object collides with a wall when any of its four corners lies inside
//! the wall rectangle, edges included. Movement is resolved one axis at a
//! time: the object takes its full step, then backs up by a quarter of the
//! step until it is clear again. Resolving x and y separately lets the player
//! slide along a wall instead of sticking to it.

use crate::config;
use crate::game::{Point, Room};
use log::warn;
use serde::{Deserialize, Serialize};

/// Anything that can be tested against room walls.
pub trait Collidable {
    /// The four corner points of the object's bounding box.
    fn corners(&self) -> [Point; 4];
}

/// A collidable object whose position can be moved along one axis.
pub trait Movable: Collidable {
    /// Current coordinate along an axis.
    fn axis_position(&self, axis: Axis) -> f32;

    /// Sets the coordinate along an axis.
    fn set_axis_position(&mut self, axis: Axis, value: f32);
}

/// A movement axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

/// How a single-axis move ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisResolution {
    /// The full step was taken without touching a wall
    Free,
    /// The object backed up this many quarter steps to clear the wall
    SteppedBack(u32),
    /// The object could not be cleared and was put back where it started
    Clamped,
}

/// Moves an object along one axis and backs it out of any wall it hits.
///
/// After `max_step_backs` quarter steps the object is put back at its
/// starting coordinate. Rounding can leave the walked-back position a hair
/// inside a wall, so only an object that still collides at its start is
/// reported as [`AxisResolution::Clamped`].
///
/// A zero displacement leaves the object untouched.
pub fn resolve_axis<T: Movable + ?Sized>(
    object: &mut T,
    room: &Room,
    axis: Axis,
    displacement: f32,
    max_step_backs: u32,
) -> AxisResolution {
    if displacement == 0.0 {
        return AxisResolution::Free;
    }

    let start = object.axis_position(axis);
    object.set_axis_position(axis, start + displacement);

    let step_back = displacement * config::STEP_BACK_FRACTION;
    let mut steps = 0;
    while room.collides(&*object) {
        if steps >= max_step_backs {
            object.set_axis_position(axis, start);
            if !room.collides(&*object) {
                return AxisResolution::SteppedBack(steps);
            }
            warn!(
                "Collision on {:?} not cleared after {} step-backs, holding at {}",
                axis, steps, start
            );
            return AxisResolution::Clamped;
        }
        let current = object.axis_position(axis);
        object.set_axis_position(axis, current - step_back);
        steps += 1;
    }

    if steps == 0 {
        AxisResolution::Free
    } else {
        AxisResolution::SteppedBack(steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Player, RoomLayout};
    use crate::maze::{Cell, Symbol};

    /// A plain box for exercising the resolver without a player.
    struct Crate {
        x: f32,
        y: f32,
        size: f32,
    }

    impl Collidable for Crate {
        fn corners(&self) -> [Point; 4] {
            [
                Point::new(self.x, self.y),
                Point::new(self.x + self.size, self.y),
                Point::new(self.x + self.size, self.y + self.size),
                Point::new(self.x, self.y + self.size),
            ]
        }
    }

    impl Movable for Crate {
        fn axis_position(&self, axis: Axis) -> f32 {
            match axis {
                Axis::X => self.x,
                Axis::Y => self.y,
            }
        }

        fn set_axis_position(&mut self, axis: Axis, value: f32) {
            match axis {
                Axis::X => self.x = value,
                Axis::Y => self.y = value,
            }
        }
    }

    fn sealed_room() -> Room {
        // `<`: sealed up, down and left.
        Room::new(Cell::Room(Symbol::RightOnly), &RoomLayout::default())
    }

    #[test]
    fn test_free_move() {
        let room = sealed_room();
        let mut object = Crate {
            x: 300.0,
            y: 300.0,
            size: 50.0,
        };
        let result = resolve_axis(&mut object, &room, Axis::X, 10.0, 4);
        assert_eq!(result, AxisResolution::Free);
        assert_eq!(object.x, 310.0);
    }

    #[test]
    fn test_step_back_out_of_wall() {
        let room = sealed_room();
        // Left seal ends at x = 100.
        let mut object = Crate {
            x: 105.0,
            y: 300.0,
            size: 50.0,
        };
        let result = resolve_axis(&mut object, &room, Axis::X, -10.0, 4);
        assert!(matches!(result, AxisResolution::SteppedBack(_)));
        assert!(object.x > 100.0);
        assert!(object.x <= 105.0);
        assert!(!room.collides(&object));
    }

    #[test]
    fn test_quarter_steps() {
        let room = sealed_room();
        // A step of -8 from 104 lands at 96; backing up 2px at a time needs
        // three steps to get past the wall edge at 100.
        let mut object = Crate {
            x: 104.0,
            y: 300.0,
            size: 50.0,
        };
        let result = resolve_axis(&mut object, &room, Axis::X, -8.0, 4);
        assert_eq!(result, AxisResolution::SteppedBack(3));
        assert_eq!(object.x, 102.0);
    }

    #[test]
    fn test_start_inside_wall_is_clamped() {
        let room = sealed_room();
        let mut object = Crate {
            x: 50.0,
            y: 300.0,
            size: 20.0,
        };
        let result = resolve_axis(&mut object, &room, Axis::X, 10.0, 4);
        assert_eq!(result, AxisResolution::Clamped);
        assert_eq!(object.x, 50.0);
    }

    #[test]
    fn test_rounding_near_a_wall_is_not_a_clamp() {
        // `E` is sealed on the left; its bottom hall pieces start at y = 500.
        let room = Room::new(Cell::Room(Symbol::NoLeft), &RoomLayout::default());
        let mut player = Player::new(110.0, 399.99997, 50.0, 100.0, 10.0);
        assert!(!room.collides(&player));

        let step = 10.0 * std::f32::consts::FRAC_1_SQRT_2;
        let result = resolve_axis(&mut player, &room, Axis::Y, step, 4);

        assert_ne!(result, AxisResolution::Clamped);
        assert!(!room.collides(&player));
    }

    #[test]
    fn test_running_out_of_step_backs_from_a_clear_start() {
        let room = sealed_room();
        let mut object = Crate {
            x: 105.0,
            y: 300.0,
            size: 50.0,
        };
        // Two step-backs from 95 only reach 100, still on the seal edge.
        let result = resolve_axis(&mut object, &room, Axis::X, -10.0, 2);
        assert_eq!(result, AxisResolution::SteppedBack(2));
        assert_eq!(object.x, 105.0);
        assert!(!room.collides(&object));
    }

    #[test]
    fn test_zero_displacement_never_loops() {
        let room = sealed_room();
        let mut object = Crate {
            x: 50.0,
            y: 300.0,
            size: 20.0,
        };
        let result = resolve_axis(&mut object, &room, Axis::Y, 0.0, 4);
        assert_eq!(result, AxisResolution::Free);
        assert_eq!(object.y, 300.0);
    }
}
