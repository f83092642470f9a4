use crate::{tiles, Tile, BAG_LEN};
use rand::distributions::{Distribution, Uniform};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A bag of all the [tiles](Tile) that haven't been drawn yet.
///
/// [Tiles](Tile) are drawn from the end of the bag, so the order of the bag is the order
/// of future draws.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Bag {
    tiles: Vec<Tile>,
}

impl Bag {
    /// # Returns
    ///
    /// A full, randomly ordered [bag](Bag) of [`BAG_LEN`] [tiles](Tile).
    pub fn new() -> Bag {
        Bag::new_with_rng(&mut rand::thread_rng())
    }

    /// # Returns
    ///
    /// A full [bag](Bag) of [`BAG_LEN`] [tiles](Tile) shuffled with `rng`.
    pub fn new_with_rng<R: Rng + ?Sized>(rng: &mut R) -> Bag {
        let mut tiles = tiles();
        tiles.shuffle(rng);
        Bag { tiles }
    }

    /// # Returns
    ///
    /// A [bag](Bag) holding exactly `tiles`, where the last [tile](Tile) is drawn first.
    pub fn from_tiles(tiles: Vec<Tile>) -> Bag {
        Bag { tiles }
    }

    /// Removes up to `count` [tiles](Tile) from the bag. When fewer [tiles](Tile) remain,
    /// all of them are drawn.
    ///
    /// # Returns
    ///
    /// The drawn [tiles](Tile).
    pub fn draw(&mut self, count: usize) -> Vec<Tile> {
        // when the bag is empty, no more tiles will be drained
        self.tiles
            .drain(self.tiles.len().saturating_sub(count)..)
            .collect()
    }

    /// Puts `tiles` back into the bag, each at a random position.
    pub fn return_tiles(&mut self, tiles: impl IntoIterator<Item = Tile>) {
        self.return_tiles_with_rng(tiles, &mut rand::thread_rng())
    }

    /// Puts `tiles` back into the bag, each at a random position chosen with `rng`.
    pub fn return_tiles_with_rng<R: Rng + ?Sized>(
        &mut self,
        tiles: impl IntoIterator<Item = Tile>,
        rng: &mut R,
    ) {
        // shuffle tiles into bag, but in place and without O(n log n) shuffle operation
        let start = self.tiles.len();
        self.tiles.extend(tiles);
        let end = self.tiles.len();
        if start == end {
            return;
        }
        let possible_indexes = Uniform::from(0..end);
        for index in start..end {
            self.tiles.swap(index, possible_indexes.sample(rng));
        }
    }

    /// # Returns
    ///
    /// The number of [tiles](Tile) left to draw.
    #[inline]
    pub fn remaining_count(&self) -> usize {
        self.tiles.len()
    }

    /// # Returns
    ///
    /// Whether every [tile](Tile) has been drawn.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// # Returns
    ///
    /// The [tiles](Tile) left in the bag in draw order from last to first.
    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}

impl Default for Bag {
    fn default() -> Bag {
        Bag::new()
    }
}
