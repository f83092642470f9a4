use crate::{
    parse_letter, parse_rack_tiles, ErrorKind, Game, GameId, GameRules, GameSnapshot,
    GameState, GameStore, Hangman, Identity, Move, MoveDescriptor, ParseError, PlayerDirectory,
    PlayerId, Players, StoreError, WordGrid, PLAYERS_LEN,
};
use derive_more::{Display, Error, From};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info, instrument, warn};

/// Describes the reason why a request could not be served at all. Rejected
/// [moves](Move) are not errors of the service but [reports](MoveReport).
#[derive(Debug, Clone, Eq, PartialEq, Display, Error, From)]
pub enum ServiceError {
    /// No snapshot is stored under the requested id.
    #[from(ignore)]
    #[display("game {game_id} was not found")]
    GameNotFound {
        /// The requested game.
        game_id: GameId,
    },
    /// Both seats were requested for the same [player](crate::Player).
    #[from(ignore)]
    #[display("player {player_id} cannot take both seats")]
    DuplicatePlayers {
        /// The player requested twice.
        player_id: PlayerId,
    },
    /// Client input could not be read.
    #[display("bad request: {_0}")]
    BadRequest(ParseError),
    /// The [store](GameStore) or [directory](PlayerDirectory) failed.
    #[display("{_0}")]
    Infrastructure(StoreError),
}

impl ServiceError {
    /// # Returns
    ///
    /// The [category](ErrorKind) of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::GameNotFound { .. } => ErrorKind::GameNotFound,
            ServiceError::DuplicatePlayers { .. } | ServiceError::BadRequest(_) => {
                ErrorKind::BadRequest
            }
            ServiceError::Infrastructure(_) => ErrorKind::InfrastructureError,
        }
    }
}

/// The answer to a [move](Move) which reached a game.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct MoveReport {
    /// Describes the accepted move, or why it was rejected.
    pub message: String,
    /// The points earned by the move.
    pub points: usize,
    /// The [category](ErrorKind) of the rejection, or [None] when the move was accepted.
    pub rejection: Option<ErrorKind>,
    /// The game after the move. Unchanged when the move was rejected.
    pub snapshot: GameSnapshot,
}

impl MoveReport {
    /// # Returns
    ///
    /// Whether the move was accepted.
    pub fn is_accepted(&self) -> bool {
        self.rejection.is_none()
    }
}

/// Serves games stored in `S` to players resolved by `D`.
///
/// Every [move](Move) on one game runs while holding that game's lock, from loading the
/// snapshot to saving it, so moves on one game never interleave. A rejected move saves
/// nothing. The lock of a game is dropped once the game is over or missing.
#[derive(Debug)]
pub struct GameService<S, D> {
    store: S,
    directory: D,
    locks: Mutex<HashMap<GameId, Arc<Mutex<()>>>>,
}

impl<S: GameStore, D: PlayerDirectory> GameService<S, D> {
    /// # Returns
    ///
    /// A [service](GameService) over `store` and `directory`.
    pub fn new(store: S, directory: D) -> GameService<S, D> {
        GameService {
            store,
            directory,
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// # Returns
    ///
    /// The [store](GameStore) of this service.
    #[inline]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// # Returns
    ///
    /// The [directory](PlayerDirectory) of this service.
    #[inline]
    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// Seats the [players](crate::Player) of `identities` in order at a new [word grid](WordGrid)
    /// and deals their racks.
    ///
    /// # Errors
    ///
    /// * [ServiceError::DuplicatePlayers] when both identities resolve to one player.
    /// * [ServiceError::Infrastructure] when the store or directory fails.
    ///
    /// # Returns
    ///
    /// The id of the new game.
    #[instrument(skip(self, identities))]
    pub fn new_game(&self, identities: &[Identity; PLAYERS_LEN]) -> Result<GameId, ServiceError> {
        let players = self.seat(identities)?;
        self.create(Game::WordGrid(WordGrid::new(players)))
    }

    /// Seats the [players](crate::Player) of `identities` in order at a new
    /// [hangman](Hangman) hiding `word`, or a built-in word when `word` is [None].
    ///
    /// # Errors
    ///
    /// * [ServiceError::BadRequest] when `word` is not a word of letters.
    /// * [ServiceError::DuplicatePlayers] when both identities resolve to one player.
    /// * [ServiceError::Infrastructure] when the store or directory fails.
    ///
    /// # Returns
    ///
    /// The id of the new game.
    #[instrument(skip(self, identities, word))]
    pub fn new_hangman_game(
        &self,
        identities: &[Identity; PLAYERS_LEN],
        word: Option<&str>,
    ) -> Result<GameId, ServiceError> {
        let players = self.seat(identities)?;
        let hangman = match word {
            Some(word) => Hangman::new(players, word)?,
            None => Hangman::new_random_word(players),
        };
        self.create(Game::Hangman(hangman))
    }

    /// # Errors
    ///
    /// * [ServiceError::GameNotFound] when no game is stored under `game_id`.
    /// * [ServiceError::Infrastructure] when the store fails.
    ///
    /// # Returns
    ///
    /// An independent copy of the stored game.
    pub fn load_game(&self, game_id: GameId) -> Result<GameSnapshot, ServiceError> {
        self.store.load(game_id)?.ok_or_else(|| {
            debug!(game_id, "Game not found");
            ServiceError::GameNotFound { game_id }
        })
    }

    /// Reads `descriptor` as an anchored placement and [applies](GameService::apply_move) it.
    /// When the move is accepted and `descriptor` declares a remaining rack, a declared rack
    /// which differs from the rack held after the move is logged and otherwise ignored.
    ///
    /// # Errors
    ///
    /// * [ServiceError::BadRequest] when `descriptor` cannot be read.
    /// * See [GameService::apply_move].
    #[instrument(skip(self, descriptor), fields(descriptor = %descriptor))]
    pub fn process_move(
        &self,
        game_id: GameId,
        player_id: PlayerId,
        descriptor: &MoveDescriptor,
    ) -> Result<MoveReport, ServiceError> {
        let placement = descriptor.placement()?;
        let remaining = descriptor.remaining_rack()?;

        let report = self.apply_move(game_id, player_id, Move::Place(placement))?;
        if report.is_accepted() && !remaining.is_empty() {
            if let Game::WordGrid(word_grid) = &report.snapshot.game {
                let rack = word_grid
                    .position_of(player_id)
                    .and_then(|position| word_grid.rack(position));
                if let Some(rack) = rack.filter(|rack| !rack.holds_exactly(&remaining)) {
                    warn!(
                        game_id,
                        player_id,
                        declared = %descriptor.remaining_tiles,
                        held = %rack,
                        "Client rack is out of sync"
                    );
                }
            }
        }
        Ok(report)
    }

    /// Reads `letters` as rack tiles and [applies](GameService::apply_move) a swap.
    ///
    /// # Errors
    ///
    /// * [ServiceError::BadRequest] when `letters` are not rack tiles.
    /// * See [GameService::apply_move].
    pub fn swap_tiles(
        &self,
        game_id: GameId,
        player_id: PlayerId,
        letters: &str,
    ) -> Result<MoveReport, ServiceError> {
        let tiles = parse_rack_tiles(letters)?;
        self.apply_move(game_id, player_id, Move::Swap(tiles))
    }

    /// Reads `letter` as one letter and [applies](GameService::apply_move) a guess.
    ///
    /// # Errors
    ///
    /// * [ServiceError::BadRequest] when `letter` is not one letter.
    /// * See [GameService::apply_move].
    pub fn guess_letter(
        &self,
        game_id: GameId,
        player_id: PlayerId,
        letter: &str,
    ) -> Result<MoveReport, ServiceError> {
        let letter = parse_letter(letter)?;
        self.apply_move(game_id, player_id, Move::GuessLetter(letter))
    }

    /// Loads the game, applies `next_move` for the player with `player_id`, and saves the
    /// game when the move is accepted. Holds the lock of the game throughout.
    ///
    /// # Errors
    ///
    /// * [ServiceError::GameNotFound] when no game is stored under `game_id`.
    /// * [ServiceError::Infrastructure] when the store fails.
    ///
    /// # Returns
    ///
    /// A [report](MoveReport) of the accepted or rejected move.
    #[instrument(skip(self, next_move), fields(kind = %next_move.kind()))]
    pub fn apply_move(
        &self,
        game_id: GameId,
        player_id: PlayerId,
        next_move: Move,
    ) -> Result<MoveReport, ServiceError> {
        let lock = self.lock(game_id);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut snapshot = self.load_game(game_id).map_err(|error| {
            if let ServiceError::GameNotFound { .. } = error {
                self.release(game_id);
            }
            error
        })?;
        let report = match snapshot.game.apply_move(player_id, next_move) {
            Ok(outcome) => {
                self.store.save(&snapshot)?;
                info!(points = outcome.points, state = %outcome.state, "Saved move");
                MoveReport {
                    message: outcome.message,
                    points: outcome.points,
                    rejection: None,
                    snapshot,
                }
            }
            Err(error) => {
                debug!(%error, "Rejected move");
                MoveReport {
                    message: error.to_string(),
                    points: 0,
                    rejection: Some(error.kind()),
                    snapshot,
                }
            }
        };
        // an ended game is never saved again
        if report.snapshot.game.has_ended() {
            self.release(game_id);
        }
        Ok(report)
    }

    /// Looks up the user of `identity` without registering them. An unknown user has no games.
    ///
    /// # Errors
    ///
    /// [ServiceError::Infrastructure] when the store or directory fails.
    ///
    /// # Returns
    ///
    /// The ids of every game of the user of `identity`, or with `my_turn_only` only the games
    /// in progress where it is their turn.
    #[instrument(skip(self, identity), fields(user_id = %identity.user_id))]
    pub fn game_ids(
        &self,
        identity: &Identity,
        my_turn_only: bool,
    ) -> Result<Vec<GameId>, ServiceError> {
        let Some(player) = self.directory.find(&identity.user_id)? else {
            debug!("Unknown user has no games");
            return Ok(Vec::new());
        };
        let game_ids = self.directory.game_ids(player.id)?;
        if !my_turn_only {
            return Ok(game_ids);
        }

        Ok(self
            .snapshots(game_ids)?
            .into_iter()
            .filter(|snapshot| {
                let game = &snapshot.game;
                game.state() == GameState::InProgress
                    && game.players()[game.current_player()].id == player.id
            })
            .map(|snapshot| snapshot.id)
            .collect())
    }

    /// # Errors
    ///
    /// [ServiceError::Infrastructure] when the store or directory fails.
    ///
    /// # Returns
    ///
    /// The [names](GameSnapshot::name) of the games [listed](GameService::game_ids) for the
    /// user of `identity` in the same order.
    pub fn game_names(
        &self,
        identity: &Identity,
        my_turn_only: bool,
    ) -> Result<Vec<String>, ServiceError> {
        let game_ids = self.game_ids(identity, my_turn_only)?;
        Ok(self
            .snapshots(game_ids)?
            .iter()
            .map(GameSnapshot::name)
            .collect())
    }

    fn snapshots(&self, game_ids: Vec<GameId>) -> Result<Vec<GameSnapshot>, ServiceError> {
        let mut snapshots = Vec::with_capacity(game_ids.len());
        for game_id in game_ids {
            match self.store.load(game_id)? {
                Some(snapshot) => snapshots.push(snapshot),
                None => warn!(game_id, "Directory lists a game without a snapshot"),
            }
        }
        Ok(snapshots)
    }

    fn seat(&self, identities: &[Identity; PLAYERS_LEN]) -> Result<Players, ServiceError> {
        let [first, second] = identities;
        let players = [
            self.directory.find_or_create(first)?,
            self.directory.find_or_create(second)?,
        ];
        if players[0].id == players[1].id {
            return Err(ServiceError::DuplicatePlayers {
                player_id: players[0].id,
            });
        }
        Ok(players)
    }

    fn create(&self, game: Game) -> Result<GameId, ServiceError> {
        let game_id = self.store.next_game_id()?;
        for player in game.players() {
            self.directory.add_game(player.id, game_id)?;
        }
        self.store.save(&GameSnapshot { id: game_id, game })?;
        info!(game_id, "Created game");
        Ok(game_id)
    }

    fn lock(&self, game_id: GameId) -> Arc<Mutex<()>> {
        self.locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(game_id)
            .or_default()
            .clone()
    }

    fn release(&self, game_id: GameId) {
        self.locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&game_id);
    }
}
