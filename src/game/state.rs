//! # Game State Module
//!
//! The session object that owns everything one play-through needs and runs
//! the per-tick step.
//!
//! A tick reads the held directions, moves the player one axis at a time with
//! collision resolution, then checks whether the player has crossed an edge
//! of the screen and hands that to the navigator. Nothing here draws, sleeps
//! or reads the keyboard, so tests drive a session exactly like the frame
//! loop does.

use crate::game::{
    resolve_axis, Axis, AxisResolution, Direction, FixedTickScheduler, GameConfig, MoveOutcome,
    Player, Position, Room, RoomNavigator,
};
use crate::input::InputSource;
use crate::maze::{MazeGrid, SeamIssue};
use crate::persistence::PersistedPosition;
use crate::HallwayResult;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Something that happened during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The player walked into a neighbouring room
    RoomEntered {
        from: Position,
        to: Position,
        direction: Direction,
    },
    /// The player reached an edge with no room behind it
    MoveBlocked {
        position: Position,
        direction: Direction,
    },
    /// The player was stuck in a wall and was held in place
    CollisionUnresolved { position: Position, axis: Axis },
    /// The player left the maze through the exit
    MazeCompleted { position: Position },
}

/// Whether the session is still being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameCompletionState {
    /// Still walking the maze
    Playing,
    /// Left through the exit
    Won,
}

/// Counters for a play-through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatistics {
    /// Ticks simulated
    pub ticks: u64,
    /// Rooms entered through a doorway
    pub rooms_entered: u32,
    /// Edge crossings refused because no room was there
    pub blocked_moves: u32,
    /// Times the player had to be held out of a wall
    pub unresolved_collisions: u32,
}

impl GameStatistics {
    /// Creates new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates statistics based on a game event.
    pub fn update_from_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::RoomEntered { .. } => self.rooms_entered += 1,
            GameEvent::MoveBlocked { .. } => self.blocked_moves += 1,
            GameEvent::CollisionUnresolved { .. } => self.unresolved_collisions += 1,
            GameEvent::MazeCompleted { .. } => {}
        }
    }
}

/// One play-through: maze position, player and timing.
///
/// # Examples
///
/// ```
/// use hallway::{Direction, GameConfig, GameSession, InputState, MazeGrid, Position, DEFAULT_MAZE};
///
/// let grid = MazeGrid::parse(DEFAULT_MAZE).unwrap();
/// let mut session = GameSession::with_memory_store(grid, GameConfig::default()).unwrap();
///
/// let input = InputState::holding(&[Direction::Right]);
/// session.tick(&input);
/// assert_eq!(session.player().x, 285.0);
/// assert_eq!(session.position(), Position::new(0, 0));
/// ```
#[derive(Debug)]
pub struct GameSession {
    config: GameConfig,
    navigator: RoomNavigator,
    player: Player,
    scheduler: FixedTickScheduler,
    completion: GameCompletionState,
    statistics: GameStatistics,
}

impl GameSession {
    /// Starts a session at the saved position.
    ///
    /// The config is validated first. Seams where an open side meets a sealed
    /// neighbour are logged but do not stop the game.
    pub fn new(
        grid: MazeGrid,
        config: GameConfig,
        persisted: PersistedPosition,
    ) -> HallwayResult<Self> {
        config.validate()?;

        for mismatch in grid.seam_mismatches() {
            match mismatch.issue {
                SeamIssue::SealedNeighbour => warn!(
                    "Room {:?} opens {:?} into a sealed wall",
                    mismatch.position, mismatch.side
                ),
                SeamIssue::LeadsOffGrid => warn!(
                    "Room {:?} opens {:?} off the edge of the maze",
                    mismatch.position, mismatch.side
                ),
            }
        }

        let navigator = RoomNavigator::new(grid, config.layout, persisted)?;
        let player = Player::spawn(&config);
        let scheduler = FixedTickScheduler::new(config.ticks_per_second);

        info!(
            "Session started at {:?} in a {}x{} maze",
            navigator.position(),
            navigator.grid().columns(),
            navigator.grid().rows()
        );

        Ok(Self {
            config,
            navigator,
            player,
            scheduler,
            completion: GameCompletionState::Playing,
            statistics: GameStatistics::new(),
        })
    }

    /// Starts a session whose position is only kept in memory.
    pub fn with_memory_store(grid: MazeGrid, config: GameConfig) -> HallwayResult<Self> {
        Self::new(grid, config, PersistedPosition::in_memory())
    }

    /// Runs as many ticks as the elapsed time allows.
    pub fn advance<I: InputSource + ?Sized>(
        &mut self,
        elapsed: Duration,
        input: &I,
    ) -> Vec<GameEvent> {
        let ticks = self.scheduler.advance(elapsed);
        self.run_ticks(ticks, input)
    }

    /// Runs ticks for a frame time given in seconds.
    pub fn advance_seconds<I: InputSource + ?Sized>(
        &mut self,
        seconds: f32,
        input: &I,
    ) -> Vec<GameEvent> {
        let ticks = self.scheduler.advance_seconds(seconds);
        self.run_ticks(ticks, input)
    }

    fn run_ticks<I: InputSource + ?Sized>(&mut self, ticks: u32, input: &I) -> Vec<GameEvent> {
        let mut events = Vec::new();
        for _ in 0..ticks {
            if self.is_won() {
                break;
            }
            events.extend(self.tick(input));
        }
        events
    }

    /// Runs exactly one tick. A finished session ignores ticks.
    pub fn tick<I: InputSource + ?Sized>(&mut self, input: &I) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.is_won() {
            return events;
        }

        self.player.steer(input);
        for axis in [Axis::X, Axis::Y] {
            let displacement = self.player.displacement(axis);
            let resolution = resolve_axis(
                &mut self.player,
                self.navigator.room(),
                axis,
                displacement,
                self.config.max_step_backs,
            );
            if resolution == AxisResolution::Clamped {
                events.push(GameEvent::CollisionUnresolved {
                    position: self.navigator.position(),
                    axis,
                });
            }
        }

        self.cross_edges(&mut events);

        self.statistics.ticks += 1;
        for event in &events {
            self.statistics.update_from_event(event);
        }
        events
    }

    /// Hands edge crossings to the navigator: right, down, left, then up.
    fn cross_edges(&mut self, events: &mut Vec<GameEvent>) {
        let layout = self.config.layout;
        let inset = self.config.entry_inset;
        let max_x = self.player.max_x(&layout);
        let max_y = self.player.max_y(&layout);

        if self.player.x > max_x {
            self.player.x = match self.cross(Direction::Right, events) {
                MoveOutcome::Moved { .. } => inset,
                MoveOutcome::Blocked | MoveOutcome::Won => max_x,
            };
        }
        if self.is_won() {
            return;
        }
        if self.player.y > max_y {
            self.player.y = match self.cross(Direction::Down, events) {
                MoveOutcome::Moved { .. } => inset,
                MoveOutcome::Blocked | MoveOutcome::Won => max_y,
            };
        }
        if self.player.x < 0.0 {
            self.player.x = match self.cross(Direction::Left, events) {
                MoveOutcome::Moved { .. } => max_x - inset,
                MoveOutcome::Blocked | MoveOutcome::Won => 0.0,
            };
        }
        if self.player.y < 0.0 {
            self.player.y = match self.cross(Direction::Up, events) {
                MoveOutcome::Moved { .. } => max_y - inset,
                MoveOutcome::Blocked | MoveOutcome::Won => 0.0,
            };
        }
    }

    fn cross(&mut self, direction: Direction, events: &mut Vec<GameEvent>) -> MoveOutcome {
        let position = self.navigator.position();
        let outcome = self.navigator.move_global(direction);
        match outcome {
            MoveOutcome::Moved { from, to } => events.push(GameEvent::RoomEntered {
                from,
                to,
                direction,
            }),
            MoveOutcome::Blocked => events.push(GameEvent::MoveBlocked {
                position,
                direction,
            }),
            MoveOutcome::Won => {
                self.completion = GameCompletionState::Won;
                events.push(GameEvent::MazeCompleted { position });
            }
        }
        outcome
    }

    /// Starts over from the top-left room with a centred player.
    ///
    /// Statistics are kept; the saved position is not written until the
    /// player next changes room.
    pub fn restart(&mut self) -> HallwayResult<()> {
        self.navigator.set_position(Position::origin())?;
        self.player = Player::spawn(&self.config);
        self.scheduler.reset();
        self.completion = GameCompletionState::Playing;
        info!("Session restarted");
        Ok(())
    }

    /// Whether the player has left the maze.
    pub fn is_won(&self) -> bool {
        self.completion == GameCompletionState::Won
    }

    /// Current completion state.
    pub fn completion_state(&self) -> GameCompletionState {
        self.completion
    }

    /// Current grid position.
    pub fn position(&self) -> Position {
        self.navigator.position()
    }

    /// The room the player is in.
    pub fn room(&self) -> &Room {
        self.navigator.room()
    }

    /// The player actor.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Mutable access to the player, for placing it directly.
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// The navigator.
    pub fn navigator(&self) -> &RoomNavigator {
        &self.navigator
    }

    /// Mutable access to the navigator.
    pub fn navigator_mut(&mut self) -> &mut RoomNavigator {
        &mut self.navigator
    }

    /// The active configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Counters for this session.
    pub fn statistics(&self) -> &GameStatistics {
        &self.statistics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputState;
    use crate::maze::{Cell, Symbol, DEFAULT_MAZE};

    fn session(raw: &str) -> GameSession {
        GameSession::with_memory_store(MazeGrid::parse(raw).unwrap(), GameConfig::default())
            .unwrap()
    }

    #[test]
    fn test_session_creation() {
        let session = session(DEFAULT_MAZE);
        assert_eq!(session.position(), Position::origin());
        assert_eq!(session.completion_state(), GameCompletionState::Playing);
        assert_eq!(session.statistics().ticks, 0);
        assert_eq!((session.player().x, session.player().y), (275.0, 250.0));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = GameConfig::default();
        config.ticks_per_second = 0;
        let result = GameSession::with_memory_store(MazeGrid::parse(DEFAULT_MAZE).unwrap(), config);
        assert!(result.is_err());
    }

    #[test]
    fn test_idle_tick_changes_nothing() {
        let mut session = session(DEFAULT_MAZE);
        let events = session.tick(&InputState::new());
        assert!(events.is_empty());
        assert_eq!((session.player().x, session.player().y), (275.0, 250.0));
        assert_eq!(session.statistics().ticks, 1);
    }

    #[test]
    fn test_wall_stops_the_player() {
        // `F` is sealed on the left: the seal ends at x = 100.
        let mut session = session(DEFAULT_MAZE);
        let input = InputState::holding(&[Direction::Left]);
        for _ in 0..100 {
            session.tick(&input);
        }
        assert!(session.player().x > 100.0);
        assert!(session.player().x <= 110.0);
        assert_eq!(session.position(), Position::origin());
    }

    #[test]
    fn test_walking_through_a_hall_enters_the_next_room() {
        // `F` opens right into `-`.
        let mut session = session(DEFAULT_MAZE);
        let input = InputState::holding(&[Direction::Right]);
        let mut entered = Vec::new();
        for _ in 0..40 {
            for event in session.tick(&input) {
                if let GameEvent::RoomEntered { to, .. } = event {
                    entered.push(to);
                }
            }
            if !entered.is_empty() {
                break;
            }
        }

        assert_eq!(entered, vec![Position::new(1, 0)]);
        assert_eq!(session.player().x, 10.0);
        assert_eq!(session.room().cell(), Cell::Room(Symbol::Horizontal));
        assert_eq!(session.statistics().rooms_entered, 1);
        assert_eq!(
            session.navigator().persisted().load(),
            Some(Position::new(1, 0))
        );
    }

    #[test]
    fn test_unresolvable_overlap_is_held_in_place() {
        let mut session = session(DEFAULT_MAZE);
        // Inside the sealed left wall of the `F` room.
        session.player_mut().x = 20.0;
        let events = session.tick(&InputState::holding(&[Direction::Right]));
        assert_eq!(
            events,
            vec![GameEvent::CollisionUnresolved {
                position: Position::origin(),
                axis: Axis::X
            }]
        );
        assert_eq!(session.player().x, 20.0);
        assert_eq!(session.statistics().unresolved_collisions, 1);
    }

    #[test]
    fn test_sliding_past_a_doorway_edge_reports_nothing() {
        let mut session = session("E");
        session.player_mut().x = 110.0;
        session.player_mut().y = 399.99997;
        assert!(!session.room().collides(session.player()));

        let events = session.tick(&InputState::holding(&[Direction::Down, Direction::Left]));
        assert!(events.is_empty(), "unexpected events {:?}", events);
        assert_eq!(session.statistics().unresolved_collisions, 0);
        assert!(!session.room().collides(session.player()));
    }

    #[test]
    fn test_restart_after_win() {
        let mut session = session("<-");
        session.navigator_mut().set_position(Position::new(1, 0)).unwrap();
        session.player_mut().x = 545.0;

        let events = session.tick(&InputState::holding(&[Direction::Right]));
        assert!(events.contains(&GameEvent::MazeCompleted {
            position: Position::new(1, 0)
        }));
        assert!(session.is_won());
        assert_eq!(session.player().x, 550.0);

        // Ticks after the win do nothing.
        assert!(session.tick(&InputState::holding(&[Direction::Left])).is_empty());

        session.restart().unwrap();
        assert!(!session.is_won());
        assert_eq!(session.position(), Position::origin());
        assert_eq!(session.player().x, 275.0);
    }

    #[test]
    fn test_advance_runs_whole_ticks() {
        let mut session = session(DEFAULT_MAZE);
        let input = InputState::holding(&[Direction::Right]);
        session.advance(Duration::from_millis(50), &input);
        assert_eq!(session.statistics().ticks, 3);
        assert_eq!(session.player().x, 305.0);
    }
}
