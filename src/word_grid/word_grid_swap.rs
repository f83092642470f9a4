use crate::{GameRules, GameState, MoveError, Outcome, PlayerId, Tile, WordGrid};
use derive_more::{Display, Error};
use itertools::Itertools;
use tracing::{debug, info, instrument};

/// Describes the reasons why [`WordGrid::swap`] could not be executed.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Display, Error)]
pub enum SwapError {
    /// Attempting to swap no [tiles](Tile).
    #[display("no tiles were given to swap")]
    EmptyTiles,
    /// Attempting to swap [tiles](Tile) not in the player's [rack](crate::Rack).
    #[display("tiles {} are not in your rack", missing.iter().join(""))]
    TilesNotInRack {
        /// The requested [tiles](Tile) which are not held, counting duplicates.
        missing: Vec<Tile>,
    },
    /// Attempting to swap more [tiles](Tile) than tiles in the bag.
    #[display("cannot swap {requested} tiles with {bag_len} tiles in the bag")]
    NotEnoughTiles {
        /// The number of [tiles](Tile) being swapped.
        requested: usize,
        /// The number of available [tiles](Tile) in the bag.
        bag_len: usize,
    },
}

impl WordGrid {
    /// Checks whether `tiles` may be swapped by the player with `player_id`. Otherwise,
    /// draws as many new [tiles](Tile) from the bag, returns `tiles` to random places in the
    /// bag, earns no points, and advances to the next player.
    ///
    /// New [tiles](Tile) are drawn before `tiles` go back, so a player never draws the
    /// [tiles](Tile) they returned.
    ///
    /// # Arguments
    ///
    /// * `tiles`: The [tiles](Tile) to swap, where a [blank](Tile::Blank) swaps a blank.
    ///
    /// # Errors
    ///
    /// * [MoveError::GameAlreadyOver] Attempting to swap after the game has ended.
    /// * [MoveError::NotStarted] Attempting to swap before the racks were dealt.
    /// * [MoveError::NotYourTurn] Attempting to swap out of turn.
    /// * [MoveError::Swap] Attempting to swap no [tiles](Tile), [tiles](Tile) not held, or
    /// more [tiles](Tile) than the bag holds.
    #[instrument(skip(self, tiles), fields(tiles = %tiles.iter().join("")))]
    pub fn swap(&mut self, player_id: PlayerId, tiles: &[Tile]) -> Result<Outcome, MoveError> {
        let position = self.check_turn(player_id)?;
        self.check_swap(position, tiles).map_err(|error| {
            debug!(%error, "Rejected swap");
            error
        })?;

        let rack = &mut self.racks[position];
        let returned = tiles
            .iter()
            .map(|&tile| {
                rack.remove(tile).unwrap_or_else(|error| {
                    unreachable!("checked tiles should be in the rack: {error}")
                })
            })
            .collect_vec();
        rack.refill(&mut self.bag);
        self.bag.return_tiles(returned);

        self.advance_turn();

        info!(
            player_id,
            swapped = tiles.len(),
            "Accepted swap"
        );
        Ok(Outcome {
            message: format!(
                "{} swapped {} tiles",
                self.players[position].name,
                tiles.len()
            ),
            points: 0,
            state: GameState::InProgress,
        })
    }

    /// Checks `tiles` against the [rack](crate::Rack) of the player at `position` and the bag
    /// without changing anything.
    ///
    /// # Errors
    ///
    /// * [SwapError::EmptyTiles] Attempting to swap no [tiles](Tile).
    /// * [SwapError::TilesNotInRack] Attempting to swap [tiles](Tile) not in the rack.
    /// * [SwapError::NotEnoughTiles] Attempting to swap more [tiles](Tile) than the bag holds.
    fn check_swap(&self, position: usize, tiles: &[Tile]) -> Result<(), SwapError> {
        if tiles.is_empty() {
            return Err(SwapError::EmptyTiles);
        }

        let missing = self.racks[position].missing(tiles.iter().copied());
        if !missing.is_empty() {
            return Err(SwapError::TilesNotInRack { missing });
        }

        let bag_len = self.bag.remaining_count();
        if tiles.len() > bag_len {
            return Err(SwapError::NotEnoughTiles {
                requested: tiles.len(),
                bag_len,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Bag, Letter, Rack, RACK_CAPACITY};

    const A: Tile = Tile::Letter(Letter::A);
    const E: Tile = Tile::Letter(Letter::E);
    const Q: Tile = Tile::Letter(Letter::Q);
    const X: Tile = Tile::Letter(Letter::X);

    impl WordGrid {
        fn test_swap_error(&mut self, tiles: &[Tile], expected_error: SwapError) {
            let before = self.clone();
            let player_id = self.players()[self.current_player()].id;

            let actual_error = self
                .swap(player_id, tiles)
                .expect_err("swap should return Err");

            assert_eq!(MoveError::Swap(expected_error), actual_error);
            assert_eq!(&before, self);
        }
    }

    #[test]
    fn empty_tiles() {
        let (mut word_grid, _) = set_up_swap();

        word_grid.test_swap_error(&[], SwapError::EmptyTiles);
    }

    #[test]
    fn tiles_not_in_rack() {
        let (mut word_grid, _) = set_up_swap();

        word_grid.test_swap_error(
            &[Q, X, Q],
            SwapError::TilesNotInRack { missing: vec![Q] },
        );
    }

    #[test]
    fn not_enough_tiles() {
        let (mut word_grid, _) = set_up_swap();
        *word_grid.mut_bag() = Bag::from_tiles(vec![E]);

        word_grid.test_swap_error(
            &[Q, X],
            SwapError::NotEnoughTiles {
                requested: 2,
                bag_len: 1,
            },
        );
    }

    #[test]
    fn not_your_turn() {
        let (mut word_grid, _) = set_up_swap();
        let player_id = word_grid.players()[1].id;

        let actual_error = word_grid.swap(player_id, &[Q]).unwrap_err();

        assert_eq!(MoveError::NotYourTurn { player_id }, actual_error);
    }

    #[test]
    fn swap_keeps_rack_len_and_advances() {
        let (mut word_grid, bag_len) = set_up_swap();
        let player_id = word_grid.players()[0].id;
        let rack_len = word_grid.racks[0].len();

        let outcome = word_grid
            .swap(player_id, &[Q, X])
            .expect("swap should return Ok");

        assert_eq!(0, outcome.points);
        assert_eq!(0, word_grid.players()[0].score);
        assert_eq!(rack_len, word_grid.racks[0].len());
        assert_eq!(bag_len, word_grid.bag_len());
        assert_eq!(1, word_grid.current_player());
        assert!(outcome.message.contains("swapped 2 tiles"));
    }

    #[test]
    fn swap_never_redraws_returned_tiles() {
        let (mut word_grid, _) = set_up_swap();
        *word_grid.mut_bag() = Bag::from_tiles(vec![E, E]);
        let player_id = word_grid.players()[0].id;

        word_grid.swap(player_id, &[Q, X]).unwrap();

        assert_eq!(vec![A, Tile::Blank, E, E], word_grid.racks[0].tiles().to_vec());
        assert_eq!(
            vec![Q, X],
            word_grid.bag.tiles().iter().copied().sorted().collect_vec()
        );
    }

    #[test]
    fn swap_blank() {
        let (mut word_grid, _) = set_up_swap();
        let player_id = word_grid.players()[0].id;

        word_grid.swap(player_id, &[Tile::Blank]).unwrap();

        assert_eq!(
            Some(Tile::Blank),
            word_grid.bag.tiles().iter().copied().find(|&tile| tile == Tile::Blank)
        );
        assert!(word_grid.racks[0].len() <= RACK_CAPACITY);
    }

    #[test]
    fn swap_wraps_current_player() {
        let (mut word_grid, _) = set_up_swap();
        *word_grid.mut_current_player() = 1;
        word_grid.mut_racks()[1] = Rack::from_tiles([A]);
        let player_id = word_grid.players()[1].id;

        word_grid.swap(player_id, &[A]).unwrap();

        assert_eq!(0, word_grid.current_player());
    }

    fn set_up_swap() -> (WordGrid, usize) {
        let mut rng = rand::thread_rng();
        let mut word_grid = WordGrid::empty_word_grid();
        let bag_len = word_grid.random_bag(&mut rng);
        word_grid.mut_racks()[0] = Rack::from_tiles([Q, A, X, Tile::Blank]);

        (word_grid, bag_len)
    }
}
