//! The saved position across process restarts, using a file store in a
//! temporary directory.

use hallway::{
    Direction, Expiry, FileStore, GameConfig, GameSession, HallwayResult, InputState,
    KeyValueStore, MazeGrid, PersistedPosition, Position, DEFAULT_MAZE,
};
use std::path::Path;

fn open_session(path: &Path) -> HallwayResult<GameSession> {
    let persisted = PersistedPosition::new(Box::new(FileStore::open(path)?));
    GameSession::new(MazeGrid::parse(DEFAULT_MAZE)?, GameConfig::default(), persisted)
}

#[test]
fn test_save_load_clear() -> HallwayResult<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("save.json");

    let mut saved = PersistedPosition::new(Box::new(FileStore::open(&path)?));
    saved.save(Position::new(3, 5))?;
    assert_eq!(saved.load(), Some(Position::new(3, 5)));

    let reopened = PersistedPosition::new(Box::new(FileStore::open(&path)?));
    assert_eq!(reopened.load(), Some(Position::new(3, 5)));

    saved.clear(Position::new(3, 5))?;
    let reopened = PersistedPosition::new(Box::new(FileStore::open(&path)?));
    assert_eq!(reopened.load(), None);
    assert_eq!(reopened.load_or_default(), Position::origin());

    Ok(())
}

#[test]
fn test_room_change_survives_a_restart() -> HallwayResult<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("save.json");

    {
        let mut session = open_session(&path)?;
        let input = InputState::holding(&[Direction::Right]);
        while session.position() == Position::origin() {
            session.tick(&input);
            assert!(session.statistics().ticks < 100, "never left the first room");
        }
        assert_eq!(session.position(), Position::new(1, 0));
    }

    let session = open_session(&path)?;
    assert_eq!(session.position(), Position::new(1, 0));

    Ok(())
}

#[test]
fn test_fields_are_stored_as_strings_under_fixed_keys() -> HallwayResult<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("save.json");

    let mut saved = PersistedPosition::new(Box::new(FileStore::open(&path)?));
    saved.save(Position::new(7, 2))?;

    let store = FileStore::open(&path)?;
    assert_eq!(store.get("globalX").as_deref(), Some("7"));
    assert_eq!(store.get("globalY").as_deref(), Some("2"));

    Ok(())
}

#[test]
fn test_garbage_fields_fall_back_to_origin() -> HallwayResult<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("save.json");

    let mut store = FileStore::open(&path)?;
    store.set("globalX", "three", Expiry::Never)?;
    store.set("globalY", "5", Expiry::Never)?;

    let session = open_session(&path)?;
    assert_eq!(session.position(), Position::origin());

    Ok(())
}

#[test]
fn test_saved_position_outside_the_maze_falls_back_to_origin() -> HallwayResult<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("save.json");

    let mut store = FileStore::open(&path)?;
    store.set("globalX", "12", Expiry::Never)?;
    store.set("globalY", "-1", Expiry::Never)?;

    let session = open_session(&path)?;
    assert_eq!(session.position(), Position::origin());

    Ok(())
}

#[test]
fn test_corrupt_save_file_starts_fresh() -> HallwayResult<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("save.json");
    std::fs::write(&path, "{ this is not json")?;

    let mut session = open_session(&path)?;
    assert_eq!(session.position(), Position::origin());

    // The next room change replaces the broken file.
    let input = InputState::holding(&[Direction::Down]);
    while session.position() == Position::origin() {
        session.tick(&input);
        assert!(session.statistics().ticks < 100);
    }
    let reopened = PersistedPosition::new(Box::new(FileStore::open(&path)?));
    assert_eq!(reopened.load(), Some(Position::new(0, 1)));

    Ok(())
}

#[test]
fn test_unwritable_save_file_does_not_stop_play() -> HallwayResult<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("no-such-dir").join("save.json");

    let mut session = open_session(&path)?;
    let input = InputState::holding(&[Direction::Right]);
    while session.position() == Position::origin() {
        session.tick(&input);
        assert!(session.statistics().ticks < 100, "never left the first room");
    }

    assert_eq!(session.position(), Position::new(1, 0));
    assert_eq!(session.statistics().rooms_entered, 1);
    assert!(!path.exists());

    // Play carries on in the new room.
    session.tick(&input);
    assert_eq!(session.position(), Position::new(1, 0));
    assert_eq!(session.player().x, 20.0);

    Ok(())
}
