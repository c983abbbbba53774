//! # Player
//!
//! The actor the user steers through the rooms.

use crate::game::{Axis, Collidable, Direction, GameConfig, Movable, Point, RoomLayout};
use crate::input::InputSource;
use serde::{Deserialize, Serialize};

/// The player's sprite in room pixel space.
///
/// `x` and `y` are the top-left of the sprite. Velocity components are in
/// `-1..=1` and are multiplied by `speed` to get the step for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub speed: f32,
    pub width: f32,
    pub height: f32,
}

impl Player {
    /// Creates a stationary player.
    pub fn new(x: f32, y: f32, width: f32, height: f32, speed: f32) -> Self {
        Self {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            speed,
            width,
            height,
        }
    }

    /// Creates a player in the middle of a room, sized and paced by the config.
    ///
    /// # Examples
    ///
    /// ```
    /// use hallway::{GameConfig, Player};
    ///
    /// let player = Player::spawn(&GameConfig::default());
    /// assert_eq!((player.x, player.y), (275.0, 250.0));
    /// ```
    pub fn spawn(config: &GameConfig) -> Self {
        let mut player = Self::new(
            0.0,
            0.0,
            config.player.width,
            config.player.height,
            config.effective_speed(),
        );
        player.center_in(&config.layout);
        player
    }

    /// Moves the player to the middle of the room.
    pub fn center_in(&mut self, layout: &RoomLayout) {
        self.x = layout.width / 2.0 - self.width / 2.0;
        self.y = layout.height / 2.0 - self.height / 2.0;
    }

    /// Sets velocity from the held directions.
    ///
    /// Opposite directions cancel out. Diagonal movement is scaled by 1/√2 so
    /// it is no faster than moving straight.
    pub fn steer<I: InputSource + ?Sized>(&mut self, input: &I) {
        self.vx =
            f32::from(input.is_held(Direction::Right)) - f32::from(input.is_held(Direction::Left));
        self.vy =
            f32::from(input.is_held(Direction::Down)) - f32::from(input.is_held(Direction::Up));

        if self.vx != 0.0 && self.vy != 0.0 {
            self.vx *= std::f32::consts::FRAC_1_SQRT_2;
            self.vy *= std::f32::consts::FRAC_1_SQRT_2;
        }
    }

    /// The step for one tick along an axis.
    pub fn displacement(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.vx * self.speed,
            Axis::Y => self.vy * self.speed,
        }
    }

    /// Largest `x` that keeps the sprite on screen.
    pub fn max_x(&self, layout: &RoomLayout) -> f32 {
        layout.width - self.width
    }

    /// Largest `y` that keeps the sprite on screen.
    pub fn max_y(&self, layout: &RoomLayout) -> f32 {
        layout.height - self.height
    }
}

impl Collidable for Player {
    fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x, self.y),
            Point::new(self.x + self.width, self.y),
            Point::new(self.x + self.width, self.y + self.height),
            Point::new(self.x, self.y + self.height),
        ]
    }
}

impl Movable for Player {
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
