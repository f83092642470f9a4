use crate::{GameId, PlayerId, StoreError, UserId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use tracing::{debug, info, instrument};

/// The identity of a user as given by the external identity provider.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Identity {
    /// The identifier given by the identity provider.
    pub user_id: UserId,
    /// The name shown to other players.
    pub name: String,
}

impl Identity {
    /// # Returns
    ///
    /// An [identity](Identity) with properties owned from arguments.
    pub fn new(user_id: impl Into<UserId>, name: impl Into<String>) -> Identity {
        Identity {
            user_id: user_id.into(),
            name: name.into(),
        }
    }
}

/// A player seated at a game, with the points earned in that game.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Player {
    /// The stable identifier of the player across games.
    pub id: PlayerId,
    /// The identifier given by the identity provider.
    pub user_id: UserId,
    /// The name shown to other players.
    pub name: String,
    /// The points earned so far.
    pub score: usize,
}

impl Player {
    /// # Returns
    ///
    /// A [player](Player) with no points.
    pub fn new(id: PlayerId, user_id: impl Into<UserId>, name: impl Into<String>) -> Player {
        Player {
            id,
            user_id: user_id.into(),
            name: name.into(),
            score: 0,
        }
    }
}

/// Resolves external identities to [players](Player) and remembers which games they take
/// part in.
pub trait PlayerDirectory {
    /// Finds the [player](Player) registered for `identity.user_id`, registering a new one
    /// with a fresh [id](PlayerId) when none exists. The returned player has no points.
    ///
    /// # Errors
    ///
    /// When the backing store is unavailable.
    fn find_or_create(&self, identity: &Identity) -> Result<Player, StoreError>;

    /// Finds the [player](Player) registered for `user_id` without registering anyone.
    ///
    /// # Errors
    ///
    /// When the backing store is unavailable.
    fn find(&self, user_id: &str) -> Result<Option<Player>, StoreError>;

    /// Records that the [player](Player) takes part in the game.
    ///
    /// # Errors
    ///
    /// When the backing store is unavailable.
    fn add_game(&self, player_id: PlayerId, game_id: GameId) -> Result<(), StoreError>;

    /// # Errors
    ///
    /// When the backing store is unavailable.
    ///
    /// # Returns
    ///
    /// Every [game id](GameId) recorded for the [player](Player) in recording order.
    fn game_ids(&self, player_id: PlayerId) -> Result<Vec<GameId>, StoreError>;
}

#[derive(Debug, Default)]
struct Directory {
    players: HashMap<UserId, Player>,
    games: HashMap<PlayerId, Vec<GameId>>,
    last_id: PlayerId,
}

/// A [player directory](PlayerDirectory) kept in memory.
#[derive(Debug, Default)]
pub struct MemoryDirectory {
    directory: Mutex<Directory>,
}

impl MemoryDirectory {
    /// # Returns
    ///
    /// An empty [directory](MemoryDirectory) whose first [player id](PlayerId) is `1`.
    pub fn new() -> MemoryDirectory {
        MemoryDirectory::default()
    }
}

impl PlayerDirectory for MemoryDirectory {
    #[instrument(skip(self), fields(user_id = %identity.user_id))]
    fn find_or_create(&self, identity: &Identity) -> Result<Player, StoreError> {
        let mut directory = self.directory.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(player) = directory.players.get(&identity.user_id) {
            debug!(player_id = player.id, "Found player");
            return Ok(player.clone());
        }

        directory.last_id += 1;
        let player = Player::new(
            directory.last_id,
            identity.user_id.clone(),
            identity.name.clone(),
        );
        info!(player_id = player.id, name = %player.name, "Registered player");
        directory
            .players
            .insert(identity.user_id.clone(), player.clone());
        Ok(player)
    }

    fn find(&self, user_id: &str) -> Result<Option<Player>, StoreError> {
        let directory = self.directory.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(directory.players.get(user_id).cloned())
    }

    #[instrument(skip(self))]
    fn add_game(&self, player_id: PlayerId, game_id: GameId) -> Result<(), StoreError> {
        let mut directory = self.directory.lock().unwrap_or_else(PoisonError::into_inner);
        let game_ids = directory.games.entry(player_id).or_default();
        if !game_ids.contains(&game_id) {
            game_ids.push(game_id);
        }
        Ok(())
    }

    fn game_ids(&self, player_id: PlayerId) -> Result<Vec<GameId>, StoreError> {
        let directory = self.directory.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(directory
            .games
            .get(&player_id)
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_or_create_is_stable() {
        let directory = MemoryDirectory::new();
        let identity = Identity::new("ada@mail.test", "Ada");

        let first = directory.find_or_create(&identity).unwrap();
        let second = directory.find_or_create(&identity).unwrap();

        assert_eq!(first, second);
        assert_eq!(1, first.id);
        assert_eq!("Ada", first.name);
        assert_eq!(0, first.score);
    }

    #[test]
    fn find_or_create_distinct_users() {
        let directory = MemoryDirectory::new();

        let ada = directory
            .find_or_create(&Identity::new("ada", "Ada"))
            .unwrap();
        let grace = directory
            .find_or_create(&Identity::new("grace", "Grace"))
            .unwrap();

        assert_ne!(ada.id, grace.id);
    }

    #[test]
    fn game_ids_in_order() {
        let directory = MemoryDirectory::new();
        let player = directory
            .find_or_create(&Identity::new("ada", "Ada"))
            .unwrap();

        directory.add_game(player.id, 3).unwrap();
        directory.add_game(player.id, 1).unwrap();
        directory.add_game(player.id, 3).unwrap();

        assert_eq!(vec![3, 1], directory.game_ids(player.id).unwrap());
    }

    #[test]
    fn game_ids_unknown_player() {
        let directory = MemoryDirectory::new();

        assert!(directory.game_ids(99).unwrap().is_empty());
    }

    #[test]
    fn find_registers_nobody() {
        let directory = MemoryDirectory::new();

        assert_eq!(None, directory.find("ada").unwrap());

        let ada = directory
            .find_or_create(&Identity::new("ada", "Ada"))
            .unwrap();

        assert_eq!(Some(ada), directory.find("ada").unwrap());
        assert_eq!(None, directory.find("grace").unwrap());
        assert_eq!(2, directory.find_or_create(&Identity::new("grace", "Grace")).unwrap().id);
    }
}
