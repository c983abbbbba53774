//! # Rendering Module
//!
//! Builds what a frame should show as a list of draw commands, and draws that
//! list with macroquad.
//!
//! Command lists are plain data, so what ends up on screen can be checked
//! without opening a window.

pub mod display;

pub use display::*;

use crate::game::{GameSession, GameStatistics, RoomLayout};
use macroquad::prelude::{Color, BLACK, DARKGRAY, GOLD, LIGHTGRAY, WHITE};

/// Floor colour behind the walls
pub const FLOOR_COLOR: Color = LIGHTGRAY;

/// Wall colour
pub const WALL_COLOR: Color = BLACK;

/// Colour used when no player sprite is loaded
pub const PLAYER_FALLBACK_COLOR: Color = GOLD;

/// Font size of the debug room label
pub const LABEL_FONT_SIZE: f32 = 40.0;

/// One drawing operation in room pixel space.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole screen
    Clear(Color),
    /// Fill a rectangle
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
    /// Draw a line of text with its baseline at `y`
    Text {
        text: String,
        x: f32,
        y: f32,
        font_size: f32,
        color: Color,
    },
    /// Draw the player sprite scaled to the given size
    Sprite {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
}

/// Draw commands for the current room and the player.
///
/// Walls are drawn over the floor, then the debug label when debug mode is
/// on, then the player on top.
///
/// # Examples
///
/// ```
/// use hallway::{draw_list, DrawCommand, GameConfig, GameSession, MazeGrid, DEFAULT_MAZE};
///
/// let grid = MazeGrid::parse(DEFAULT_MAZE).unwrap();
/// let session = GameSession::with_memory_store(grid, GameConfig::default()).unwrap();
/// let commands = draw_list(&session);
///
/// assert!(matches!(commands.first(), Some(DrawCommand::Clear(_))));
/// assert!(matches!(commands.last(), Some(DrawCommand::Sprite { .. })));
/// ```
pub fn draw_list(session: &GameSession) -> Vec<DrawCommand> {
    let room = session.room();
    let mut commands = Vec::with_capacity(room.rects().len() + 3);

    commands.push(DrawCommand::Clear(FLOOR_COLOR));
    commands.extend(room.rects().iter().map(|rect| DrawCommand::FillRect {
        x: rect.x,
        y: rect.y,
        width: rect.width,
        height: rect.height,
        color: WALL_COLOR,
    }));

    if session.config().debug {
        let position = session.position();
        commands.push(DrawCommand::Text {
            text: format!(
                "{} ({}, {})",
                room.cell().to_char(),
                position.x,
                position.y
            ),
            x: 0.0,
            y: 30.0,
            font_size: LABEL_FONT_SIZE,
            color: WHITE,
        });
    }

    let player = session.player();
    commands.push(DrawCommand::Sprite {
        x: player.x,
        y: player.y,
        width: player.width,
        height: player.height,
    });

    commands
}

/// Draw commands for the screen shown after leaving the maze.
pub fn victory_draw_list(layout: &RoomLayout, statistics: &GameStatistics) -> Vec<DrawCommand> {
    let center_x = layout.width / 2.0;
    let lines = [
        ("You escaped the maze!".to_string(), 40.0, WHITE),
        (format!("Rooms entered: {}", statistics.rooms_entered), 24.0, LIGHTGRAY),
        (format!("Dead ends hit: {}", statistics.blocked_moves), 24.0, LIGHTGRAY),
        ("N: play again    ESC: quit".to_string(), 24.0, GOLD),
    ];

    let mut commands = vec![DrawCommand::Clear(DARKGRAY)];
    let mut y = layout.height / 3.0;
    for (text, font_size, color) in lines {
        // Rough centring; macroquad's default font is about half as wide as tall.
        let x = center_x - text.len() as f32 * font_size * 0.25;
        commands.push(DrawCommand::Text {
            text,
            x: x.max(0.0),
            y,
            font_size,
            color,
        });
        y += font_size * 1.5;
    }
    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;
    use crate::maze::{MazeGrid, DEFAULT_MAZE};

    fn session(config: GameConfig) -> GameSession {
        GameSession::with_memory_store(MazeGrid::parse(DEFAULT_MAZE).unwrap(), config).unwrap()
    }

    #[test]
    fn test_one_fill_per_wall() {
        let session = session(GameConfig::default());
        let commands = draw_list(&session);
        let fills = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillRect { .. }))
            .count();
        assert_eq!(fills, session.room().rects().len());
        assert!(!commands
            .iter()
            .any(|c| matches!(c, DrawCommand::Text { .. })));
    }

    #[test]
    fn test_debug_label_shows_symbol_and_position() {
        let session = session(GameConfig::default().with_debug(true));
        let label = draw_list(&session).into_iter().find_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text),
            _ => None,
        });
        assert_eq!(label.as_deref(), Some("F (0, 0)"));
    }

    #[test]
    fn test_sprite_matches_player() {
        let session = session(GameConfig::default());
        assert_eq!(
            draw_list(&session).last(),
            Some(&DrawCommand::Sprite {
                x: 275.0,
                y: 250.0,
                width: 50.0,
                height: 100.0
            })
        );
    }

    #[test]
    fn test_victory_screen_lists_statistics() {
        let stats = GameStatistics {
            rooms_entered: 42,
            ..GameStatistics::default()
        };
        let commands = victory_draw_list(&RoomLayout::default(), &stats);
        assert!(commands.iter().any(|c| matches!(
            c,
            DrawCommand::Text { text, .. } if text == "Rooms entered: 42"
        )));
    }
}
