use crate::{
    Bag, Board, GameRules, GameState, Move, MoveError, Outcome, PlayerId, Players, Rack, Racks,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
pub use word_grid_swap::*;
pub use word_grid_view::*;

#[cfg(test)]
mod test_setup;
mod word_grid_play;
mod word_grid_swap;
mod word_grid_view;

/// Owns the state of a tile-placement word game and implements its moves.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct WordGrid {
    /// This is a bag of all the tiles that haven't been drawn yet.
    bag: Bag,
    /// The grid of placed tiles.
    board: Board,
    /// The seated players with their points.
    players: Players,
    /// A rack for each player, parallel to `players`.
    racks: Racks,
    /// The index of the player whose turn it is.
    current_player: usize,
    /// The phase of the game.
    state: GameState,
}

impl WordGrid {
    /// Seats `players`, fills a new, randomly ordered [bag](Bag), deals every rack, and
    /// gives the first turn to the first player.
    ///
    /// # Returns
    ///
    /// A [`WordGrid`] in progress.
    pub fn new(players: Players) -> WordGrid {
        WordGrid::with_bag(players, Bag::new()).tap_start()
    }

    /// Seats `players` in front of an empty board without dealing.
    ///
    /// # Returns
    ///
    /// A [`WordGrid`] which has not started and which draws from `bag`.
    pub fn with_bag(players: Players, bag: Bag) -> WordGrid {
        WordGrid {
            bag,
            board: Board::new(),
            players,
            racks: Default::default(),
            current_player: 0,
            state: GameState::NotStarted,
        }
    }

    /// Deals every rack in turn order and gives the first turn to the first player.
    /// Does nothing once the game has started.
    #[instrument(skip(self), fields(bag_len = self.bag.remaining_count()))]
    pub fn start(&mut self) {
        if self.state != GameState::NotStarted {
            return;
        }
        for rack in &mut self.racks {
            rack.refill(&mut self.bag);
        }
        self.current_player = 0;
        self.state = GameState::InProgress;
        info!(
            remaining = self.bag.remaining_count(),
            "Dealt racks"
        );
    }

    fn tap_start(mut self) -> WordGrid {
        self.start();
        self
    }

    /// # Returns
    ///
    /// The board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// # Returns
    ///
    /// The number of tiles left in the bag.
    #[inline]
    pub fn bag_len(&self) -> usize {
        self.bag.remaining_count()
    }

    /// # Returns
    ///
    /// The [rack](Rack) of the player at `position`, or [None] if `position` is not a seat.
    #[inline]
    pub fn rack(&self, position: usize) -> Option<&Rack> {
        self.racks.get(position)
    }

    /// Advances the turn to the next seat, wrapping to the first.
    fn advance_turn(&mut self) {
        self.current_player = (self.current_player + 1) % self.players.len();
    }
}

impl GameRules for WordGrid {
    #[inline]
    fn players(&self) -> &Players {
        &self.players
    }

    #[inline]
    fn current_player(&self) -> usize {
        self.current_player
    }

    #[inline]
    fn state(&self) -> GameState {
        self.state
    }

    fn apply_move(&mut self, player_id: PlayerId, next_move: Move) -> Result<Outcome, MoveError> {
        match next_move {
            Move::Place(placement) => self.place(player_id, &placement),
            Move::Swap(tiles) => self.swap(player_id, &tiles),
            Move::GuessLetter(_) => {
                // turn order still comes first
                self.check_turn(player_id)?;
                Err(MoveError::UnsupportedMove {
                    kind: next_move.kind(),
                })
            }
        }
    }
}
