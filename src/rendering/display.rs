//! # Display Management
//!
//! Executes draw commands with macroquad.

use crate::game::{GameSession, GameStatistics, RoomLayout};
use crate::rendering::{draw_list, victory_draw_list, DrawCommand, PLAYER_FALLBACK_COLOR};
use crate::{HallwayError, HallwayResult};
use log::{info, warn};
use macroquad::prelude::*;
use std::path::Path;

/// Macroquad display manager for the game.
///
/// Owns the player sprite texture. Without one, the player is drawn as a
/// filled rectangle.
pub struct MacroquadDisplay {
    /// Player sprite, drawn with nearest-neighbour filtering
    pub player_texture: Option<Texture2D>,
}

impl MacroquadDisplay {
    /// Creates a display without a sprite.
    pub fn new() -> Self {
        Self {
            player_texture: None,
        }
    }

    /// Creates a display and loads the player sprite from a PNG file.
    ///
    /// A sprite that fails to load is logged and replaced by the fallback
    /// rectangle.
    pub async fn with_sprite<P: AsRef<Path>>(path: P) -> Self {
        let mut display = Self::new();
        match load_sprite(path.as_ref()).await {
            Ok(texture) => {
                info!("Loaded player sprite from {}", path.as_ref().display());
                display.player_texture = Some(texture);
            }
            Err(e) => warn!("Using a plain player: {}", e),
        }
        display
    }

    /// Makes the window match the room size.
    pub fn fit_window(layout: &RoomLayout) {
        request_new_screen_size(layout.width, layout.height);
    }

    /// Draws the current room and the player.
    pub fn render_game(&self, session: &GameSession) {
        self.render(&draw_list(session));
    }

    /// Draws the screen shown after leaving the maze.
    pub fn render_victory_screen(&self, layout: &RoomLayout, statistics: &GameStatistics) {
        self.render(&victory_draw_list(layout, statistics));
    }

    /// Executes a list of draw commands in order.
    pub fn render(&self, commands: &[DrawCommand]) {
        for command in commands {
            match command {
                DrawCommand::Clear(color) => clear_background(*color),
                DrawCommand::FillRect {
                    x,
                    y,
                    width,
                    height,
                    color,
                } => draw_rectangle(*x, *y, *width, *height, *color),
                DrawCommand::Text {
                    text,
                    x,
                    y,
                    font_size,
                    color,
                } => {
                    draw_text(text, *x, *y, *font_size, *color);
                }
                DrawCommand::Sprite {
                    x,
                    y,
                    width,
                    height,
                } => self.draw_player(*x, *y, *width, *height),
            }
        }
    }

    fn draw_player(&self, x: f32, y: f32, width: f32, height: f32) {
        match &self.player_texture {
            Some(texture) => draw_texture_ex(
                texture,
                x,
                y,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(width, height)),
                    ..Default::default()
                },
            ),
            None => draw_rectangle(x, y, width, height, PLAYER_FALLBACK_COLOR),
        }
    }
}

impl Default for MacroquadDisplay {
    fn default() -> Self {
        Self::new()
    }
}

async fn load_sprite(path: &Path) -> HallwayResult<Texture2D> {
    let name = path.to_string_lossy();
    let texture = load_texture(&name).await.map_err(|e| {
        HallwayError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("cannot load sprite {}: {}", name, e),
        ))
    })?;
    texture.set_filter(FilterMode::Nearest);
    Ok(texture)
}
