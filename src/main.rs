//! # Hallway Main Entry Point
//!
//! Loads the maze and settings, restores the saved position, opens the window
//! and runs the scene loop.

use clap::Parser;
use hallway::{
    config, load_maze_file, FileStore, GameConfig, GameSession, HallwayResult,
    MacroquadDisplay, MazeGrid, PersistedPosition, SceneManager, DEFAULT_MAZE,
};
use log::{error, info};
use macroquad::window::Conf;
use std::path::PathBuf;

/// Command line arguments for Hallway.
#[derive(Parser, Debug)]
#[command(name = "hallway")]
#[command(about = "Walk a maze one room at a time")]
#[command(version)]
struct Args {
    /// Maze text file; the built-in maze is used when omitted
    #[arg(long)]
    maze: Option<PathBuf>,

    /// JSON settings file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where the current room is remembered between runs
    #[arg(long, default_value = config::DEFAULT_SAVE_FILE)]
    save_file: PathBuf,

    /// Forget the saved room and start at the top-left
    #[arg(long)]
    reset: bool,

    /// Faster walking and room labels
    #[arg(long)]
    debug: bool,

    /// PNG image used for the player
    #[arg(long)]
    sprite: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Hallway".to_string(),
        window_width: config::ROOM_WIDTH as i32,
        window_height: config::ROOM_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let args = Args::parse();
    initialize_logging(&args.log_level);

    if let Err(e) = run(args).await {
        error!("{}", e);
        std::process::exit(1);
    }
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) {
    #[cfg(feature = "dev-tools")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(log_level.to_lowercase()));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init();
        tracing::debug!("tracing subscriber installed");
    }

    #[cfg(not(feature = "dev-tools"))]
    {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .format_timestamp_millis()
            .init();
    }
}

async fn run(args: Args) -> HallwayResult<()> {
    info!("Starting Hallway v{}", hallway::VERSION);

    let config = match &args.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    }
    .with_debug_requested(args.debug);

    let grid = match &args.maze {
        Some(path) => {
            info!("Loading maze from {}", path.display());
            load_maze_file(path)?
        }
        None => MazeGrid::parse(DEFAULT_MAZE)?,
    };

    let mut persisted = PersistedPosition::new(Box::new(FileStore::open(&args.save_file)?));
    if args.reset {
        info!("Forgetting saved position");
        persisted.clear(persisted.load_or_default())?;
    }

    let session = GameSession::new(grid, config, persisted)?;

    MacroquadDisplay::fit_window(&session.config().layout);
    let display = match &args.sprite {
        Some(path) => MacroquadDisplay::with_sprite(path).await,
        None => MacroquadDisplay::new(),
    };

    let mut scenes = SceneManager::new(session, display);
    scenes.run().await?;

    info!("Goodbye");
    Ok(())
}
