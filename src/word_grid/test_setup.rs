use crate::{
    random_bag, random_current_player, random_players, random_points, random_rack, Bag, Board,
    GameState, Players, Racks, WordGrid,
};
use rand::Rng;

impl WordGrid {
    /// Generates a [WordGrid] in progress with nothing dealt.
    ///
    /// # Returns
    ///
    /// A [WordGrid] struct with the properties set to the following:
    /// * `bag`: An empty bag.
    /// * `board`: An empty board.
    /// * `players`: Two random players with `0` points.
    /// * `racks`: Empty racks.
    /// * `current_player`: `0`.
    /// * `state`: [GameState::InProgress].
    pub fn empty_word_grid() -> WordGrid {
        WordGrid {
            bag: Bag::from_tiles(Vec::new()),
            board: Board::new(),
            players: random_players(&mut rand::thread_rng()),
            racks: Racks::default(),
            current_player: 0,
            state: GameState::InProgress,
        }
    }

    /// A mutable reference to `self.bag`.
    pub fn mut_bag(&mut self) -> &mut Bag {
        &mut self.bag
    }

    /// A mutable reference to `self.board`.
    pub fn mut_board(&mut self) -> &mut Board {
        &mut self.board
    }

    /// A mutable reference to `self.players`.
    pub fn mut_players(&mut self) -> &mut Players {
        &mut self.players
    }

    /// A mutable reference to `self.racks`.
    pub fn mut_racks(&mut self) -> &mut Racks {
        &mut self.racks
    }

    /// A mutable reference to `self.current_player`.
    pub fn mut_current_player(&mut self) -> &mut usize {
        &mut self.current_player
    }

    /// A mutable reference to `self.state`.
    pub fn mut_state(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Replaces the bag with a random, small, non-zero number of [tiles](crate::Tile).
    ///
    /// # Returns
    ///
    /// The number of [tiles](crate::Tile) in the bag.
    pub fn random_bag<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        self.bag = random_bag(rng);
        self.bag.remaining_count()
    }

    /// Replaces every rack with a random, non-empty rack.
    pub fn random_racks<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.racks = Racks::default().map(|_| random_rack(rng));
    }

    /// Sets each player's points to a random, medium, non-zero number.
    pub fn random_points<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        random_points(rng, &mut self.players)
    }

    /// Sets the current player to a random seat.
    ///
    /// # Returns
    ///
    /// The index of the player whose turn it is.
    pub fn random_current_player<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        random_current_player(rng, &mut self.current_player, self.players.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameRules, Rack};

    #[test]
    fn empty_word_grid() {
        let word_grid = WordGrid::empty_word_grid();

        assert!(word_grid.bag.is_empty());
        assert!(word_grid.board.is_empty());
        assert!(word_grid.racks.iter().all(Rack::is_empty));
        assert!(word_grid.players.iter().all(|player| player.score == 0));
        assert_eq!(0, word_grid.current_player);
        assert_eq!(GameState::InProgress, word_grid.state);
    }

    #[test]
    fn random_current_player_in_bounds() {
        let mut word_grid = WordGrid::empty_word_grid();

        let current_player = word_grid.random_current_player(&mut rand::thread_rng());

        assert!(current_player < word_grid.players().len());
        assert_eq!(current_player, word_grid.current_player());
    }
}
