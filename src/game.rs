use crate::{
    GameId, GuessError, Hangman, HangmanView, Move, MoveKind, PlayError, Player, PlayerId,
    Players, SwapError, WordGrid, WordGridView,
};
use derive_more::{Display, Error, From};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Describes the phase of a game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Display, Serialize, Deserialize)]
pub enum GameState {
    /// Players are seated but nothing has been dealt.
    #[display("not started")]
    NotStarted,
    /// Players take turns.
    #[display("in progress")]
    InProgress,
    /// No more moves are accepted.
    #[display("over")]
    GameOver,
}

/// The result of an accepted move.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Outcome {
    /// A human readable description of the move.
    pub message: String,
    /// The points earned by the move.
    pub points: usize,
    /// The phase of the game after the move.
    pub state: GameState,
}

/// Describes the category of a rejected request, shared by every error of the crate.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Display, Serialize, Deserialize)]
pub enum ErrorKind {
    /// [MoveError::NotYourTurn]
    NotYourTurn,
    /// [PlayError::TileNotInRack]
    TileNotInRack,
    /// [PlayError::InvalidPlacement]
    InvalidPlacement,
    /// [PlayError::NonContiguousPlay]
    NonContiguousPlay,
    /// [PlayError::MustCoverCenter]
    MustCoverCenter,
    /// [PlayError::NotAdjacent]
    NotAdjacent,
    /// [SwapError]
    InvalidSwapRequest,
    /// [ServiceError::GameNotFound](crate::ServiceError::GameNotFound)
    GameNotFound,
    /// [MoveError::GameAlreadyOver]
    GameAlreadyOver,
    /// Input which cannot be read or a move the game does not support.
    BadRequest,
    /// [ServiceError::Infrastructure](crate::ServiceError::Infrastructure)
    InfrastructureError,
    /// [GuessError::AlreadyGuessed]
    LetterAlreadyGuessed,
}

/// Describes the reason why a [move](Move) was rejected. A rejected move changes nothing.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Display, Error, From)]
pub enum MoveError {
    /// Attempting to move out of turn, or by a player not seated at the game.
    #[from(ignore)]
    #[display("it is not the turn of player {player_id}")]
    NotYourTurn {
        /// The requesting player.
        player_id: PlayerId,
    },
    /// Attempting to move after the game has ended.
    #[from(ignore)]
    #[display("the game is already over")]
    GameAlreadyOver,
    /// Attempting to move before the game has started.
    #[from(ignore)]
    #[display("the game has not started")]
    NotStarted,
    /// Attempting a kind of move the game does not support.
    #[from(ignore)]
    #[display("this game does not support the {kind} move")]
    UnsupportedMove {
        /// The requested kind.
        kind: MoveKind,
    },
    /// A rejected placement.
    #[display("{_0}")]
    Play(PlayError),
    /// A rejected swap.
    #[display("{_0}")]
    Swap(SwapError),
    /// A rejected guess.
    #[display("{_0}")]
    Guess(GuessError),
}

impl MoveError {
    /// # Returns
    ///
    /// The [category](ErrorKind) of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            MoveError::NotYourTurn { .. } => ErrorKind::NotYourTurn,
            MoveError::GameAlreadyOver => ErrorKind::GameAlreadyOver,
            MoveError::NotStarted | MoveError::UnsupportedMove { .. } => ErrorKind::BadRequest,
            MoveError::Play(error) => match error {
                PlayError::TileNotInRack { .. } => ErrorKind::TileNotInRack,
                PlayError::InvalidPlacement { .. } => ErrorKind::InvalidPlacement,
                PlayError::NonContiguousPlay { .. } => ErrorKind::NonContiguousPlay,
                PlayError::MustCoverCenter => ErrorKind::MustCoverCenter,
                PlayError::NotAdjacent => ErrorKind::NotAdjacent,
            },
            MoveError::Swap(_) => ErrorKind::InvalidSwapRequest,
            MoveError::Guess(GuessError::AlreadyGuessed { .. }) => ErrorKind::LetterAlreadyGuessed,
        }
    }
}

/// The capability shared by every game variant: seating, turn order, and applying
/// [moves](Move).
pub trait GameRules {
    /// # Returns
    ///
    /// The seated [players](Player) indexed by turn position.
    fn players(&self) -> &Players;

    /// # Returns
    ///
    /// The turn position of the player whose turn it is.
    fn current_player(&self) -> usize;

    /// # Returns
    ///
    /// The phase of the game.
    fn state(&self) -> GameState;

    /// Applies `next_move` for the player with `player_id`.
    ///
    /// # Errors
    ///
    /// [MoveError] when the move is rejected, in which case nothing changes.
    fn apply_move(&mut self, player_id: PlayerId, next_move: Move) -> Result<Outcome, MoveError>;

    /// # Returns
    ///
    /// The turn position of the player with `player_id`, or [None] if they are not seated.
    fn position_of(&self, player_id: PlayerId) -> Option<usize> {
        self.players()
            .iter()
            .position(|player| player.id == player_id)
    }

    /// # Returns
    ///
    /// The [player](Player) with `player_id`, or [None] if they are not seated.
    fn player_by_id(&self, player_id: PlayerId) -> Option<&Player> {
        self.players().iter().find(|player| player.id == player_id)
    }

    /// # Returns
    ///
    /// Whether the game is over.
    fn has_ended(&self) -> bool {
        self.state() == GameState::GameOver
    }

    /// # Returns
    ///
    /// The [player](Player) with the most points once the game is over, or [None] while
    /// the game is in progress or when the most points are shared.
    fn winner(&self) -> Option<&Player> {
        if !self.has_ended() {
            return None;
        }
        match self.players().iter().max_set_by_key(|player| player.score)[..] {
            [winner] => Some(winner),
            _ => None,
        }
    }

    /// Checks that the game is in progress and that it is the turn of the player with
    /// `player_id`.
    ///
    /// # Errors
    ///
    /// * [MoveError::GameAlreadyOver] when the game is over.
    /// * [MoveError::NotStarted] when the game has not started.
    /// * [MoveError::NotYourTurn] when the player is not seated or it is not their turn.
    ///
    /// # Returns
    ///
    /// The turn position of the player.
    fn check_turn(&self, player_id: PlayerId) -> Result<usize, MoveError> {
        match self.state() {
            GameState::GameOver => return Err(MoveError::GameAlreadyOver),
            GameState::NotStarted => return Err(MoveError::NotStarted),
            GameState::InProgress => {}
        }
        match self.position_of(player_id) {
            Some(position) if position == self.current_player() => Ok(position),
            position => {
                warn!(
                    player_id,
                    position = ?position,
                    current_player = self.current_player(),
                    "Player tried to move out of turn"
                );
                Err(MoveError::NotYourTurn { player_id })
            }
        }
    }
}

/// One game of either variant.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Game {
    /// A tile-placement word game.
    WordGrid(WordGrid),
    /// A letter-guessing game.
    Hangman(Hangman),
}

impl Game {
    /// # Returns
    ///
    /// What the player at `position` may see, or [None] if `position` is not a seat.
    pub fn view(&self, position: usize) -> Option<GameView<'_>> {
        match self {
            Game::WordGrid(word_grid) => word_grid.view(position).map(GameView::WordGrid),
            Game::Hangman(hangman) => hangman.view(position).map(GameView::Hangman),
        }
    }
}

impl GameRules for Game {
    fn players(&self) -> &Players {
        match self {
            Game::WordGrid(word_grid) => word_grid.players(),
            Game::Hangman(hangman) => hangman.players(),
        }
    }

    fn current_player(&self) -> usize {
        match self {
            Game::WordGrid(word_grid) => word_grid.current_player(),
            Game::Hangman(hangman) => hangman.current_player(),
        }
    }

    fn state(&self) -> GameState {
        match self {
            Game::WordGrid(word_grid) => word_grid.state(),
            Game::Hangman(hangman) => hangman.state(),
        }
    }

    fn apply_move(&mut self, player_id: PlayerId, next_move: Move) -> Result<Outcome, MoveError> {
        match self {
            Game::WordGrid(word_grid) => word_grid.apply_move(player_id, next_move),
            Game::Hangman(hangman) => hangman.apply_move(player_id, next_move),
        }
    }
}

/// What one seat may see of a [game](Game).
#[derive(Debug, Serialize)]
pub enum GameView<'a> {
    /// [WordGrid::view]
    WordGrid(WordGridView<'a>),
    /// [Hangman::view]
    Hangman(HangmanView<'a>),
}

impl GameView<'_> {
    /// # Returns
    ///
    /// The seat this view was made for.
    pub fn position(&self) -> usize {
        match self {
            GameView::WordGrid(view) => view.position,
            GameView::Hangman(view) => view.position,
        }
    }
}

/// The unit persisted between turns.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// The identifier of the game.
    pub id: GameId,
    /// The game itself.
    pub game: Game,
}

impl GameSnapshot {
    /// # Returns
    ///
    /// A label with the variant, the id, and the names of the seated players in seat order,
    /// such as `Hangman 3: Ada vs Grace`.
    pub fn name(&self) -> String {
        let variant = match self.game {
            Game::WordGrid(_) => "Word grid",
            Game::Hangman(_) => "Hangman",
        };
        let names = self.game.players().iter().map(|player| &player.name).join(" vs ");
        format!("{variant} {}: {names}", self.id)
    }
}
