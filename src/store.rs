use crate::{GameId, GameSnapshot};
use derive_more::{Display, Error};
use std::collections::HashMap;
use std::panic::Location;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};
use tracing::{debug, instrument};

/// Describes a failure of the persistence layer, with the location where it was raised.
#[derive(Debug, Clone, Eq, PartialEq, Display, Error)]
#[display("store error: {} at {}:{}", message, file, line)]
pub struct StoreError {
    /// What went wrong.
    pub message: String,
    /// Line number where the error was raised.
    pub line: u32,
    /// Source file where the error was raised.
    pub file: &'static str,
}

impl StoreError {
    /// Creates a new store error located at the caller.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> StoreError {
        let location = Location::caller();
        StoreError {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    #[track_caller]
    fn from(error: serde_json::Error) -> StoreError {
        StoreError::new(format!("snapshot encoding failed: {error}"))
    }
}

/// Persists [game snapshots](GameSnapshot) between turns.
///
/// Implementors only need to store and return whole snapshots. Exclusive access to one game
/// is provided by [GameService](crate::GameService).
pub trait GameStore {
    /// # Errors
    ///
    /// When the backing store is unavailable.
    ///
    /// # Returns
    ///
    /// A [game id](GameId) never returned before.
    fn next_game_id(&self) -> Result<GameId, StoreError>;

    /// # Errors
    ///
    /// When the backing store is unavailable or the stored snapshot cannot be decoded.
    ///
    /// # Returns
    ///
    /// An independent copy of the last saved snapshot for `game_id`, or [None] if
    /// no snapshot was saved.
    fn load(&self, game_id: GameId) -> Result<Option<GameSnapshot>, StoreError>;

    /// Replaces the snapshot stored under `snapshot.id`.
    ///
    /// # Errors
    ///
    /// When the backing store is unavailable or `snapshot` cannot be encoded.
    fn save(&self, snapshot: &GameSnapshot) -> Result<(), StoreError>;
}

/// A [game store](GameStore) keeping JSON encoded snapshots in memory.
#[derive(Debug)]
pub struct MemoryStore {
    games: Mutex<HashMap<GameId, String>>,
    next_id: AtomicU64,
}

impl MemoryStore {
    /// # Returns
    ///
    /// An empty [store](MemoryStore) whose first [game id](GameId) is `1`.
    pub fn new() -> MemoryStore {
        MemoryStore {
            games: Mutex::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// # Returns
    ///
    /// The number of stored games.
    pub fn len(&self) -> usize {
        self.games
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// # Returns
    ///
    /// Whether no game has been stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryStore {
    fn default() -> MemoryStore {
        MemoryStore::new()
    }
}

impl GameStore for MemoryStore {
    fn next_game_id(&self) -> Result<GameId, StoreError> {
        Ok(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    #[instrument(skip(self))]
    fn load(&self, game_id: GameId) -> Result<Option<GameSnapshot>, StoreError> {
        let games = self.games.lock().unwrap_or_else(PoisonError::into_inner);
        let Some(encoded) = games.get(&game_id) else {
            debug!(game_id, "No snapshot stored");
            return Ok(None);
        };
        Ok(Some(serde_json::from_str(encoded)?))
    }

    #[instrument(skip(self, snapshot), fields(game_id = snapshot.id))]
    fn save(&self, snapshot: &GameSnapshot) -> Result<(), StoreError> {
        let encoded = serde_json::to_string(snapshot)?;
        debug!(bytes = encoded.len(), "Saving snapshot");
        self.games
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(snapshot.id, encoded);
        Ok(())
    }
}
