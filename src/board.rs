use crate::{in_bounds, Coordinate, PlacedTile, BOARD_SIZE, CENTER};
use derive_more::{Display, Error};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;

/// Describes the bonus printed on a space of the board.
///
/// Space types are a pure function of the [coordinate](Coordinate) and never change. A bonus
/// applies only to the turn in which a [tile](PlacedTile) is first placed on its space.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum SpaceType {
    /// No bonus.
    Normal,
    /// Doubles the points of the [tile](PlacedTile) placed on it.
    DoubleLetter,
    /// Triples the points of the [tile](PlacedTile) placed on it.
    TripleLetter,
    /// Doubles the points of every word through it.
    DoubleWord,
    /// Triples the points of every word through it.
    TripleWord,
}

impl SpaceType {
    /// Finds the space type of the standard symmetric layout. The layout is folded into one
    /// eighth of the board before it is matched.
    ///
    /// # Panics
    ///
    /// When `coordinate` is not on the board.
    pub fn at(coordinate: Coordinate) -> SpaceType {
        assert!(
            in_bounds(coordinate),
            "coordinate ({coordinate:?}) should be on the {BOARD_SIZE}x{BOARD_SIZE} board"
        );
        if coordinate == CENTER {
            return SpaceType::DoubleWord;
        }

        let middle = BOARD_SIZE / 2;
        let (mut row, mut col) = coordinate;
        if row % middle == 0 && col % middle == 0 {
            return SpaceType::TripleWord;
        }
        if row > middle {
            row = BOARD_SIZE - 1 - row;
        }
        if col > middle {
            col = BOARD_SIZE - 1 - col;
        }
        if col > row {
            (row, col) = (col, row);
        }

        match (row, col) {
            (3, 0) | (6, 2) | (7, 3) | (6, 6) => SpaceType::DoubleLetter,
            (5, 1) | (5, 5) => SpaceType::TripleLetter,
            (row, col) if row == col => SpaceType::DoubleWord,
            _ => SpaceType::Normal,
        }
    }

    /// # Returns
    ///
    /// The multiplier applied to the points of a [tile](PlacedTile) placed on this space.
    #[inline]
    pub fn letter_multiplier(self) -> usize {
        match self {
            SpaceType::DoubleLetter => 2,
            SpaceType::TripleLetter => 3,
            _ => 1,
        }
    }

    /// # Returns
    ///
    /// The multiplier applied to every word through a [tile](PlacedTile) placed on this space.
    #[inline]
    pub fn word_multiplier(self) -> usize {
        match self {
            SpaceType::DoubleWord => 2,
            SpaceType::TripleWord => 3,
            _ => 1,
        }
    }
}

/// Describes the reason why [`Board::place`] could not place a [tile](PlacedTile).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Display, Error)]
pub enum PlaceError {
    /// Attempting to place a [tile](PlacedTile) off the board.
    #[display("{coordinate:?} is not on the board")]
    OutOfBounds {
        /// The [coordinate](Coordinate) off the board.
        coordinate: Coordinate,
    },
    /// Attempting to place a [tile](PlacedTile) on a space which already holds one.
    #[display("{coordinate:?} is already occupied")]
    Occupied {
        /// The occupied [coordinate](Coordinate).
        coordinate: Coordinate,
    },
}

/// A [`BOARD_SIZE`] by [`BOARD_SIZE`] grid of spaces where each space holds at most one
/// [placed tile](PlacedTile). Once filled, a space stays filled.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Board {
    /// Row major spaces.
    #[serde(deserialize_with = "deserialize_spaces")]
    spaces: Vec<Option<PlacedTile>>,
}

fn deserialize_spaces<'de, D>(deserializer: D) -> Result<Vec<Option<PlacedTile>>, D::Error>
where
    D: Deserializer<'de>,
{
    let spaces = Vec::<Option<PlacedTile>>::deserialize(deserializer)?;
    if spaces.len() != BOARD_SIZE * BOARD_SIZE {
        return Err(de::Error::invalid_length(
            spaces.len(),
            &"one space for every coordinate of the board",
        ));
    }
    Ok(spaces)
}

impl Board {
    /// # Returns
    ///
    /// An empty [board](Board).
    pub fn new() -> Board {
        Board {
            spaces: vec![None; BOARD_SIZE * BOARD_SIZE],
        }
    }

    /// # Panics
    ///
    /// When `coordinate` is not on the board.
    ///
    /// # Returns
    ///
    /// The [space type](SpaceType) at `coordinate`.
    #[inline]
    pub fn space_type_at(&self, coordinate: Coordinate) -> SpaceType {
        SpaceType::at(coordinate)
    }

    /// # Returns
    ///
    /// The [tile](PlacedTile) at `coordinate`, or [None] if the space is empty or
    /// `coordinate` is not on the board.
    #[inline]
    pub fn tile_at(&self, coordinate: Coordinate) -> Option<PlacedTile> {
        Board::index(coordinate)
            .and_then(|index| self.spaces.get(index))
            .copied()
            .flatten()
    }

    /// Places `tile` at `coordinate`. On failure the board is unchanged.
    ///
    /// # Errors
    ///
    /// * [PlaceError::OutOfBounds] when `coordinate` is not on the board.
    /// * [PlaceError::Occupied] when the space already holds a [tile](PlacedTile).
    pub fn place(&mut self, coordinate: Coordinate, tile: PlacedTile) -> Result<(), PlaceError> {
        let space = Board::index(coordinate)
            .and_then(|index| self.spaces.get_mut(index))
            .ok_or(PlaceError::OutOfBounds { coordinate })?;
        if space.is_some() {
            return Err(PlaceError::Occupied { coordinate });
        }
        *space = Some(tile);
        Ok(())
    }

    /// # Returns
    ///
    /// Whether `coordinate` holds a [tile](PlacedTile).
    #[inline]
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.tile_at(coordinate).is_some()
    }

    /// # Returns
    ///
    /// Whether `coordinate` is a space on the board.
    #[inline]
    pub fn in_bounds(coordinate: Coordinate) -> bool {
        in_bounds(coordinate)
    }

    /// # Returns
    ///
    /// Whether no [tile](PlacedTile) has been placed yet.
    pub fn is_empty(&self) -> bool {
        self.spaces.iter().all(Option::is_none)
    }

    /// # Returns
    ///
    /// The number of placed [tiles](PlacedTile).
    pub fn len(&self) -> usize {
        self.spaces.iter().flatten().count()
    }

    /// # Returns
    ///
    /// An iterator of every placed [tile](PlacedTile) with its [coordinate](Coordinate)
    /// in row major order.
    pub fn tiles(&self) -> impl Iterator<Item = (Coordinate, PlacedTile)> + '_ {
        self.spaces.iter().enumerate().filter_map(|(index, space)| {
            space.map(|tile| ((index / BOARD_SIZE, index % BOARD_SIZE), tile))
        })
    }

    fn index(coordinate: Coordinate) -> Option<usize> {
        let (row, col) = coordinate;
        in_bounds(coordinate).then_some(row * BOARD_SIZE + col)
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                match self.tile_at((row, col)) {
                    Some(tile) => write!(f, "{tile}")?,
                    None => match SpaceType::at((row, col)) {
                        SpaceType::Normal => write!(f, ".")?,
                        SpaceType::DoubleLetter => write!(f, "2")?,
                        SpaceType::TripleLetter => write!(f, "3")?,
                        SpaceType::DoubleWord => write!(f, "@")?,
                        SpaceType::TripleWord => write!(f, "#")?,
                    },
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
