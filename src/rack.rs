use crate::{Bag, RackTiles, Tile, RACK_CAPACITY};
use derive_more::{Display, Error};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Describes a [tile](Tile) which could not be [removed](Rack::remove) from a [rack](Rack).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Display, Error)]
#[display("{tile} is not in the rack")]
pub struct NotInRack {
    /// The requested [tile](Tile).
    pub tile: Tile,
}

/// The [tiles](Tile) held by one player. Holds at most [`RACK_CAPACITY`] [tiles](Tile).
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Rack {
    tiles: RackTiles,
}

impl Rack {
    /// # Returns
    ///
    /// An empty [rack](Rack).
    pub fn new() -> Rack {
        Rack::default()
    }

    /// # Returns
    ///
    /// A [rack](Rack) holding `tiles`, keeping at most [`RACK_CAPACITY`] of them.
    pub fn from_tiles(tiles: impl IntoIterator<Item = Tile>) -> Rack {
        Rack {
            tiles: tiles.into_iter().take(RACK_CAPACITY).collect(),
        }
    }

    /// Removes one [tile](Tile) equal to `tile`. A [blank](Tile::Blank) request removes
    /// a blank.
    ///
    /// # Errors
    ///
    /// [NotInRack] when no equal [tile](Tile) is held. The rack is unchanged.
    pub fn remove(&mut self, tile: Tile) -> Result<Tile, NotInRack> {
        let index = self
            .tiles
            .iter()
            .position(|&held| held == tile)
            .ok_or(NotInRack { tile })?;
        Ok(self.tiles.remove(index))
    }

    /// Checks whether every [tile](Tile) in `tiles` could be removed, counting duplicates.
    ///
    /// # Returns
    ///
    /// The requested [tiles](Tile) which are not held, in request order. Empty when all of
    /// them are held.
    pub fn missing(&self, tiles: impl IntoIterator<Item = Tile>) -> Vec<Tile> {
        let mut held = self.tiles.iter().copied().counts();
        tiles
            .into_iter()
            .filter(|tile| match held.get_mut(tile) {
                Some(count) if *count > 0 => {
                    *count -= 1;
                    false
                }
                _ => true,
            })
            .collect()
    }

    /// Draws from `bag` until the rack holds [`RACK_CAPACITY`] [tiles](Tile) or `bag`
    /// is empty.
    ///
    /// # Returns
    ///
    /// The number of drawn [tiles](Tile).
    pub fn refill(&mut self, bag: &mut Bag) -> usize {
        let drawn = bag.draw(RACK_CAPACITY.saturating_sub(self.tiles.len()));
        let drawn_len = drawn.len();
        self.tiles.extend(drawn);
        drawn_len
    }

    /// # Returns
    ///
    /// The sum of points of every held [tile](Tile).
    pub fn points(&self) -> usize {
        self.tiles.iter().map(|tile| tile.points()).sum()
    }

    /// # Returns
    ///
    /// The held [tiles](Tile).
    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// # Returns
    ///
    /// The number of held [tiles](Tile).
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// # Returns
    ///
    /// Whether no [tile](Tile) is held.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// # Returns
    ///
    /// Whether [`RACK_CAPACITY`] [tiles](Tile) are held.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.tiles.len() >= RACK_CAPACITY
    }

    /// # Returns
    ///
    /// Whether the rack holds exactly `tiles` in any order.
    pub fn holds_exactly(&self, tiles: &[Tile]) -> bool {
        self.tiles.len() == tiles.len() && self.missing(tiles.iter().copied()).is_empty()
    }
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tiles.iter().join(""))
    }
}
