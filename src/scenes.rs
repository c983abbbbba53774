//! # Scene Management System
//!
//! Runs the frame loop and switches between walking the maze and the
//! victory screen.

use crate::{GameEvent, GameSession, HallwayResult, InputState, MacroquadDisplay};
use log::info;
use macroquad::prelude::*;

/// Represents the current scene in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneType {
    /// Walking the maze
    Playing,
    /// The player left through the exit
    Won,
}

/// The main scene manager that coordinates all game scenes
pub struct SceneManager {
    current_scene: SceneType,
    session: GameSession,
    display: MacroquadDisplay,
    input: InputState,
}

impl SceneManager {
    /// Creates a scene manager for a session.
    pub fn new(session: GameSession, display: MacroquadDisplay) -> Self {
        let current_scene = if session.is_won() {
            SceneType::Won
        } else {
            SceneType::Playing
        };
        Self {
            current_scene,
            session,
            display,
            input: InputState::new(),
        }
    }

    /// The scene being shown.
    pub fn current_scene(&self) -> SceneType {
        self.current_scene
    }

    /// Runs the main scene loop until the player quits
    pub async fn run(&mut self) -> HallwayResult<()> {
        loop {
            let quit = match self.current_scene {
                SceneType::Playing => self.update_playing_scene(),
                SceneType::Won => self.update_won_scene()?,
            };
            if quit {
                break;
            }
            next_frame().await;
        }
        info!("Scene loop ended");
        Ok(())
    }

    /// Updates the playing scene, returns true if exit is requested
    fn update_playing_scene(&mut self) -> bool {
        if is_key_pressed(KeyCode::Escape) {
            return true;
        }

        self.input.poll_keyboard();
        let events = self.session.advance_seconds(get_frame_time(), &self.input);
        if events
            .iter()
            .any(|event| matches!(event, GameEvent::MazeCompleted { .. }))
        {
            info!(
                "Maze completed after {} ticks",
                self.session.statistics().ticks
            );
            self.current_scene = SceneType::Won;
        }

        self.display.render_game(&self.session);
        false
    }

    /// Updates the victory scene, returns true if exit is requested
    fn update_won_scene(&mut self) -> HallwayResult<bool> {
        self.display
            .render_victory_screen(&self.session.config().layout, self.session.statistics());

        if is_key_pressed(KeyCode::Escape) {
            return Ok(true);
        }
        if is_key_pressed(KeyCode::N) {
            self.session.restart()?;
            self.input.clear();
            self.current_scene = SceneType::Playing;
        }
        Ok(false)
    }
}
