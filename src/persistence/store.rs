//! # Key/Value Stores
//!
//! String-keyed, string-valued stores with an optional expiry per entry.

use crate::{HallwayError, HallwayResult};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Debug;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// When a stored value stops being readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expiry {
    /// Kept until overwritten
    Never,
    /// Expired on write, which deletes the entry
    Immediately,
    /// Expires at this many seconds after the Unix epoch
    At(u64),
}

/// A durable string store.
pub trait KeyValueStore: Debug {
    /// Reads a value that exists and has not expired.
    fn get(&self, key: &str) -> Option<String>;

    /// Writes a value with an expiry.
    fn set(&mut self, key: &str, value: &str, expiry: Expiry) -> HallwayResult<()>;
}

/// One stored value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredValue {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<u64>,
}

impl StoredValue {
    fn is_live(&self, now: u64) -> bool {
        self.expires_at.map_or(true, |at| at > now)
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0)
}

/// In-memory store, lost when the process exits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, StoredValue>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the given entries.
    pub fn from_entries(entries: HashMap<String, StoredValue>) -> Self {
        Self { entries }
    }

    /// All entries, expired ones included.
    pub fn entries(&self) -> &HashMap<String, StoredValue> {
        &self.entries
    }

    fn write(&mut self, key: &str, value: &str, expiry: Expiry) {
        let expires_at = match expiry {
            Expiry::Never => None,
            Expiry::Immediately => {
                self.entries.remove(key);
                return;
            }
            Expiry::At(at) => Some(at),
        };
        self.entries.insert(
            key.to_string(),
            StoredValue {
                value: value.to_string(),
                expires_at,
            },
        );
    }

    fn prune(&mut self) {
        let now = unix_now();
        self.entries.retain(|_, stored| stored.is_live(now));
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        let now = unix_now();
        self.entries
            .get(key)
            .filter(|stored| stored.is_live(now))
            .map(|stored| stored.value.clone())
    }

    fn set(&mut self, key: &str, value: &str, expiry: Expiry) -> HallwayResult<()> {
        self.write(key, value, expiry);
        Ok(())
    }
}

/// Store kept in a JSON file, rewritten on every change.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    memory: MemoryStore,
}

impl FileStore {
    /// Opens a store file.
    ///
    /// A missing file is an empty store. A file that cannot be parsed is
    /// logged and treated as empty; it is replaced on the next write.
    pub fn open<P: AsRef<Path>>(path: P) -> HallwayResult<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = match std::fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str::<HashMap<String, StoredValue>>(&json) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("Ignoring unreadable store {}: {}", path.display(), e);
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No store at {}, starting empty", path.display());
                HashMap::new()
            }
            Err(e) => return Err(e.into()),
        };

        let mut memory = MemoryStore::from_entries(entries);
        memory.prune();
        Ok(Self { path, memory })
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> HallwayResult<()> {
        let json = serde_json::to_string_pretty(self.memory.entries())?;
        std::fs::write(&self.path, json).map_err(|e| {
            HallwayError::Persistence(format!("cannot write {}: {}", self.path.display(), e))
        })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.memory.get(key)
    }

    fn set(&mut self, key: &str, value: &str, expiry: Expiry) -> HallwayResult<()> {
        self.memory.write(key, value, expiry);
        self.flush()
    }
}
