use crate::{Board, GameState, Players, Rack, WordGrid, PLAYERS_LEN};
use serde::Serialize;

/// Immutably borrows what one seat may see of a [`WordGrid`].
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordGridView<'a> {
    /// The seat this view was made for.
    pub position: usize,
    /// The grid of placed tiles.
    pub board: &'a Board,
    /// The seated players with their points.
    pub players: &'a Players,
    /// The rack of the seat this view was made for.
    pub rack: &'a Rack,
    /// The number of tiles in each rack.
    pub rack_lens: [usize; PLAYERS_LEN],
    /// The number of tiles left in the bag.
    pub bag_len: usize,
    /// The index of the player whose turn it is.
    pub current_player: usize,
    /// The phase of the game.
    pub state: GameState,
}

impl WordGrid {
    /// # Returns
    ///
    /// A new [`WordGridView`] for the player at `position`, with `bag` replaced by its
    /// length and every other rack replaced by the number of tiles in it, or [None] if
    /// `position` is not a seat.
    pub fn view(&self, position: usize) -> Option<WordGridView<'_>> {
        let rack = self.racks.get(position)?;
        Some(WordGridView {
            position,
            board: &self.board,
            players: &self.players,
            rack,
            rack_lens: std::array::from_fn(|index| self.racks[index].len()),
            bag_len: self.bag.remaining_count(),
            current_player: self.current_player,
            state: self.state,
        })
    }
}
