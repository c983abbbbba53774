//! # Game Settings
//!
//! Tunable values for room layout, the player and the simulation rate.

use crate::config;
use crate::game::RoomLayout;
use crate::{HallwayError, HallwayResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Player sprite size and movement speed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Sprite width in pixels
    pub width: f32,
    /// Sprite height in pixels
    pub height: f32,
    /// Pixels moved per tick along an axis
    pub speed: f32,
    /// Speed used when debug mode is on
    pub debug_speed: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            width: config::PLAYER_WIDTH,
            height: config::PLAYER_HEIGHT,
            speed: config::PLAYER_SPEED,
            debug_speed: config::DEBUG_PLAYER_SPEED,
        }
    }
}

/// Complete game configuration.
///
/// Every field has a default, so a config file only needs the values it
/// changes.
///
/// # Examples
///
/// ```
/// use hallway::GameConfig;
///
/// let config = GameConfig::from_json(r#"{ "player": { "speed": 12.0 } }"#).unwrap();
/// assert_eq!(config.player.speed, 12.0);
/// assert_eq!(config.player.width, 50.0);
/// assert_eq!(config.ticks_per_second, 60);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Room dimensions
    pub layout: RoomLayout,
    /// Player dimensions and speed
    pub player: PlayerConfig,
    /// Fixed simulation rate
    pub ticks_per_second: u32,
    /// Distance from the entry edge where the player appears in a new room
    pub entry_inset: f32,
    /// Step-backs allowed before a collision is declared unresolvable
    pub max_step_backs: u32,
    /// Debug mode: faster player and room labels
    pub debug: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            layout: RoomLayout::default(),
            player: PlayerConfig::default(),
            ticks_per_second: config::TICKS_PER_SECOND,
            entry_inset: config::ENTRY_INSET,
            max_step_backs: config::MAX_STEP_BACKS,
            debug: false,
        }
    }
}

impl GameConfig {
    /// Parses a JSON config and validates it.
    pub fn from_json(json: &str) -> HallwayResult<Self> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON config file and validates it.
    pub fn from_file<P: AsRef<Path>>(path: P) -> HallwayResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Returns a copy with debug mode switched on or off.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Turns debug mode on when asked for on the command line, keeping it on
    /// if the config file already set it.
    pub fn with_debug_requested(self, requested: bool) -> Self {
        let debug = self.debug || requested;
        self.with_debug(debug)
    }

    /// Player speed after applying debug mode.
    pub fn effective_speed(&self) -> f32 {
        if self.debug {
            self.player.debug_speed
        } else {
            self.player.speed
        }
    }

    /// Checks that the values describe a playable room.
    pub fn validate(&self) -> HallwayResult<()> {
        let layout = &self.layout;
        let player = &self.player;

        let positive = [
            ("layout.width", layout.width),
            ("layout.height", layout.height),
            ("layout.corner_size", layout.corner_size),
            ("layout.wall_padding", layout.wall_padding),
            ("layout.doorway_width", layout.doorway_width),
            ("player.width", player.width),
            ("player.height", player.height),
            ("player.speed", player.speed),
            ("player.debug_speed", player.debug_speed),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(format!("{} must be positive, got {}", name, value)));
            }
        }

        let shortest_side = layout.width.min(layout.height);
        if 2.0 * layout.corner_size >= shortest_side {
            return Err(invalid("corner blocks leave no room for walls".to_string()));
        }
        if 2.0 * layout.wall_padding >= shortest_side {
            return Err(invalid("walls leave no floor in the room".to_string()));
        }
        if layout.doorway_width >= shortest_side - 2.0 * layout.corner_size {
            return Err(invalid(format!(
                "doorway width {} does not fit between the corners",
                layout.doorway_width
            )));
        }
        if player.width >= layout.doorway_width || player.height >= layout.doorway_width {
            return Err(invalid(format!(
                "a {}x{} player cannot pass a {} doorway",
                player.width, player.height, layout.doorway_width
            )));
        }
        if !(self.entry_inset.is_finite() && self.entry_inset >= 0.0) {
            return Err(invalid("entry_inset must not be negative".to_string()));
        }
        if self.ticks_per_second == 0 {
            return Err(invalid("ticks_per_second must be at least 1".to_string()));
        }
        if (self.max_step_backs as f32) * config::STEP_BACK_FRACTION < 1.0 {
            return Err(invalid(format!(
                "max_step_backs {} cannot walk a blocked step all the way back",
                self.max_step_backs
            )));
        }

        Ok(())
    }
}

fn invalid(message: String) -> HallwayError {
    HallwayError::InvalidConfig(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.effective_speed(), 10.0);
        assert_eq!(config.with_debug(true).effective_speed(), 20.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GameConfig::from_json(r#"{ "debug": true, "layout": { "doorway_width": 160.0 } }"#)
            .unwrap();
        assert!(config.debug);
        assert_eq!(config.layout.doorway_width, 160.0);
        assert_eq!(config.layout.width, 600.0);
    }

    #[test]
    fn test_player_must_fit_doorway() {
        let mut config = GameConfig::default();
        config.player.height = 150.0;
        assert!(matches!(
            config.validate(),
            Err(HallwayError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = GameConfig::default();
        config.ticks_per_second = 0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.layout.corner_size = 300.0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.player.speed = f32::NAN;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.layout.doorway_width = 400.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_step_backs_must_cover_a_whole_step() {
        for too_few in [0, 1, 2, 3] {
            let mut config = GameConfig::default();
            config.max_step_backs = too_few;
            assert!(
                matches!(config.validate(), Err(HallwayError::InvalidConfig(_))),
                "max_step_backs = {} was accepted",
                too_few
            );
        }

        let mut config = GameConfig::default();
        config.max_step_backs = 6;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_debug_request_does_not_clear_file_setting() {
        let from_file = GameConfig::from_json(r#"{ "debug": true }"#).unwrap();
        assert!(from_file.clone().with_debug_requested(false).debug);
        assert!(from_file.with_debug_requested(true).debug);

        assert!(GameConfig::default().with_debug_requested(true).debug);
        assert!(!GameConfig::default().with_debug_requested(false).debug);
    }

    #[test]
    fn test_malformed_json_is_serde_error() {
        assert!(matches!(
            GameConfig::from_json("{ not json"),
            Err(HallwayError::Serde(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "ticks_per_second": 30 }}"#).unwrap();
        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(config.ticks_per_second, 30);
    }
}
