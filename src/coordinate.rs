use crate::BOARD_SIZE;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::cmp;
use std::iter::Peekable;

/// A tuple with two integer components for the row and column of a space on the board.
///
/// # See Also
///
/// * [Board](crate::Board)
/// * [Placements](crate::Placements)
pub type Coordinate = (usize, usize);

/// Describes the line a word is read along.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// Left to right along a row.
    Across,
    /// Top to bottom along a column.
    Down,
}

impl Line {
    /// # Returns
    ///
    /// The other line.
    #[inline]
    pub fn perpendicular(self) -> Line {
        match self {
            Line::Across => Line::Down,
            Line::Down => Line::Across,
        }
    }

    /// # Returns
    ///
    /// The next [coordinate](Coordinate) along this line or [None] past the edge of the board.
    pub fn step(self, (row, col): Coordinate) -> Option<Coordinate> {
        let next = match self {
            Line::Across => (row, col + 1),
            Line::Down => (row + 1, col),
        };
        in_bounds(next).then_some(next)
    }

    /// # Returns
    ///
    /// The previous [coordinate](Coordinate) along this line or [None] past the edge
    /// of the board.
    pub fn step_back(self, (row, col): Coordinate) -> Option<Coordinate> {
        match self {
            Line::Across => col.checked_sub(1).map(|col| (row, col)),
            Line::Down => row.checked_sub(1).map(|row| (row, col)),
        }
    }

    /// # Returns
    ///
    /// The component of `coordinate` which changes along this line.
    #[inline]
    pub fn position(self, (row, col): Coordinate) -> usize {
        match self {
            Line::Across => col,
            Line::Down => row,
        }
    }

    /// # Returns
    ///
    /// The [coordinate](Coordinate) at `position` along the same line as `coordinate`.
    #[inline]
    pub fn with_position(self, (row, col): Coordinate, position: usize) -> Coordinate {
        match self {
            Line::Across => (row, position),
            Line::Down => (position, col),
        }
    }
}

/// Describes the direction a client asks tiles to be laid out from an anchor.
///
/// The wire format encodes it as `0` for [Across](Direction::Across), `1` for
/// [Down](Direction::Down), and `2` for [Single](Direction::Single).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Tiles are laid out to the right of the anchor.
    Across,
    /// Tiles are laid out below the anchor.
    Down,
    /// Exactly one tile is placed on the anchor.
    Single,
}

impl Direction {
    /// # Returns
    ///
    /// The [direction](Direction) for a wire code or [None] for an unknown code.
    pub fn from_code(code: u8) -> Option<Direction> {
        match code {
            0 => Some(Direction::Across),
            1 => Some(Direction::Down),
            2 => Some(Direction::Single),
            _ => None,
        }
    }

    /// # Returns
    ///
    /// The wire code of this direction.
    pub fn code(self) -> u8 {
        match self {
            Direction::Across => 0,
            Direction::Down => 1,
            Direction::Single => 2,
        }
    }

    /// # Returns
    ///
    /// The [line](Line) tiles are laid out along, or [None] for [Direction::Single].
    pub fn line(self) -> Option<Line> {
        match self {
            Direction::Across => Some(Line::Across),
            Direction::Down => Some(Line::Down),
            Direction::Single => None,
        }
    }
}

/// # Returns
///
/// Whether `coordinate` is a space on the board.
#[inline]
pub fn in_bounds((row, col): Coordinate) -> bool {
    row < BOARD_SIZE && col < BOARD_SIZE
}

/// Finds the minimum and maximum components from [coordinates](Coordinate) for each component.
/// If `coordinates` is empty, [None] is returned.
///
/// # Arguments
///
/// * `coordinates`: An [iterator](Iterator) of [coordinates](Coordinate).
///
/// # See Also
///
/// * [resolve_line](crate::resolve_line)
/// * [check_contiguous](crate::check_contiguous)
///
/// # Returns
///
/// A tuple with `4` different bounds in the following order:
///
/// * The minimum row
/// * The minimum column
/// * The maximum row
/// * The maximum column
pub fn find_component_minimums_and_maximums(
    mut coordinates: impl Iterator<Item = Coordinate>,
) -> Option<(usize, usize, usize, usize)> {
    let (row, col) = coordinates.next()?;

    let (mut min_row, mut min_col, mut max_row, mut max_col) = (row, col, row, col);

    for (row, col) in coordinates {
        (min_row, min_col) = (cmp::min(min_row, row), cmp::min(min_col, col));
        (max_row, max_col) = (cmp::max(max_row, row), cmp::max(max_col, col));
    }

    Some((min_row, min_col, max_row, max_col))
}

/// Finds the adjacent [coordinates](Coordinate) from the argument [coordinate](Coordinate)
/// where adjacent is 4 directional and not diagonal. [Coordinates](Coordinate) off
/// the board are left out.
///
/// # See Also
///
/// * [validate_placement](crate::validate_placement)
///
/// # Returns
///
/// Up to 4 [coordinates](Coordinate) in natural lexicographic order.
pub fn adjacent_coordinates((row, col): Coordinate) -> SmallVec<[Coordinate; 4]> {
    let mut adjacent = SmallVec::new();
    if let Some(row) = row.checked_sub(1) {
        adjacent.push((row, col));
    }
    if let Some(col) = col.checked_sub(1) {
        adjacent.push((row, col));
    }
    if col + 1 < BOARD_SIZE {
        adjacent.push((row, col + 1));
    }
    if row + 1 < BOARD_SIZE {
        adjacent.push((row + 1, col));
    }
    adjacent
}

/// An ordered tuple where the first item is next value from `peekable` and the second item is
/// the last value in a continuous, increasing range from the first to the last value.
/// It is possible for the first and last values to be the same when the next value after first
/// is not continuous or increasing. If the `peekable` iteration is finished before the first value,
/// returns [None]. Otherwise, returns [Some].
///
/// # See Also
///
/// * [Itertools::batching](itertools::Itertools::batching)
/// * [check_contiguous](crate::check_contiguous)
///
/// # Returns
///
/// An tuple containing the next range from `peekable`.
pub fn batch_continuous_increasing_range<I>(peekable: &mut Peekable<I>) -> Option<(usize, usize)>
where
    I: Iterator<Item = usize>,
{
    let first = peekable.next()?;

    let mut last = first;
    while let Some(next) = peekable.next_if_eq(&(last + 1)) {
        last = next;
    }
    Some((first, last))
}
