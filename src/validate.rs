use crate::{
    adjacent_coordinates, batch_continuous_increasing_range, find_component_minimums_and_maximums,
    in_bounds, Board, Coordinate, Line, PlacedTile, Placement, Placements, PlayedTiles, Rack,
    Target, Tile, CENTER,
};
use derive_more::{Display, Error};
use itertools::Itertools;
use std::collections::BTreeSet;

/// Describes why the spaces of a [placement](Placement) are not legal.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Display)]
pub enum PlacementFault {
    /// No [tiles](PlacedTile) were placed.
    #[display("no tiles were placed")]
    Empty,
    /// A space is off the board.
    #[display("{coordinate:?} is not on the board")]
    OutOfBounds {
        /// The space off the board.
        coordinate: Coordinate,
    },
    /// A space already holds a [tile](PlacedTile).
    #[display("{coordinate:?} is already occupied")]
    Occupied {
        /// The occupied space.
        coordinate: Coordinate,
    },
    /// The same space was given for two [tiles](PlacedTile).
    #[display("{coordinate:?} was given more than once")]
    Duplicate {
        /// The repeated space.
        coordinate: Coordinate,
    },
    /// The number of spaces differs from the number of [tiles](PlacedTile).
    #[display("{cells} spaces were given for {tiles} tiles")]
    CellCountMismatch {
        /// The number of spaces.
        cells: usize,
        /// The number of [tiles](PlacedTile).
        tiles: usize,
    },
    /// A single placement was requested for more than one [tile](PlacedTile).
    #[display("a single placement cannot hold {tiles} tiles")]
    SingleWithManyTiles {
        /// The number of [tiles](PlacedTile).
        tiles: usize,
    },
    /// The [tiles](PlacedTile) do not fit before the edge of the board.
    #[display("the tiles run off the board")]
    RanOffBoard,
    /// The spaces do not share one row or one column.
    #[display("the tiles are not in one row or column")]
    NotInLine,
}

/// Describes the reason why a [placement](Placement) could not be played.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Display, Error)]
pub enum PlayError {
    /// Attempting to play [tiles](Tile) not in the current player's [rack](Rack).
    #[display("tiles {} are not in your rack", tiles_string(missing))]
    TileNotInRack {
        /// The requested [tiles](Tile) which are not held, counting duplicates.
        missing: Vec<Tile>,
    },
    /// Attempting to play on spaces which cannot be covered.
    #[display("invalid placement: {fault}")]
    InvalidPlacement {
        /// Why the spaces are not legal.
        fault: PlacementFault,
    },
    /// Attempting to play [tiles](PlacedTile) in one line with empty spaces between them.
    #[display("the word has gaps at {holes:?}")]
    NonContiguousPlay {
        /// Inclusive ranges of empty spaces between the first and last new
        /// [tile](PlacedTile).
        holes: BTreeSet<(Coordinate, Coordinate)>,
    },
    /// Attempting to start the game without covering the [center](CENTER).
    #[display("the first word must cover the center")]
    MustCoverCenter,
    /// Attempting to play [tiles](PlacedTile) which do not touch any [tile](PlacedTile)
    /// on the board.
    #[display("the word must touch a tile on the board")]
    NotAdjacent,
}

impl From<PlacementFault> for PlayError {
    fn from(fault: PlacementFault) -> PlayError {
        PlayError::InvalidPlacement { fault }
    }
}

fn tiles_string(tiles: &[Tile]) -> String {
    tiles.iter().join("")
}

/// A [placement](Placement) which passed [validation](validate_placement) and may be
/// applied to the board it was validated against.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ValidPlay {
    /// A bimap of indexes of `tiles` to the spaces they cover.
    pub placements: Placements,
    /// The played [tiles](PlacedTile) in play order.
    pub tiles: PlayedTiles,
    /// The line the new [tiles](PlacedTile) share.
    pub line: Line,
}

impl ValidPlay {
    /// # Returns
    ///
    /// An iterator of each new [tile](PlacedTile) with the space it covers, in play order.
    pub fn cells(&self) -> impl Iterator<Item = (Coordinate, PlacedTile)> + '_ {
        self.placements
            .iter()
            .map(|(&index, &coordinate)| (coordinate, self.tiles[index]))
    }

    /// # Returns
    ///
    /// The new [tile](PlacedTile) covering `coordinate`, if any.
    pub fn tile_at(&self, coordinate: Coordinate) -> Option<PlacedTile> {
        self.placements
            .get_by_right(&coordinate)
            .map(|&index| self.tiles[index])
    }
}

/// Finds the spaces covered by each [tile](PlacedTile) of `placement`.
///
/// For [anchored](Target::Anchored) targets, the anchor must be empty and each following
/// [tile](PlacedTile) covers the next empty space in the requested direction.
/// For [explicit](Target::Cells) targets, each space must be on the board, empty, and unique.
///
/// # Errors
///
/// The first [fault](PlacementFault) found.
///
/// # Returns
///
/// A bimap of indexes of [tiles](PlacedTile) to the spaces they cover.
pub fn target_cells(board: &Board, placement: &Placement) -> Result<Placements, PlacementFault> {
    let tiles_len = placement.tiles.len();
    if tiles_len == 0 {
        return Err(PlacementFault::Empty);
    }

    let mut placements = Placements::new();
    match &placement.target {
        &Target::Anchored { anchor, direction } => {
            check_empty(board, anchor)?;
            placements.insert(0, anchor);
            let Some(line) = direction.line() else {
                if tiles_len > 1 {
                    return Err(PlacementFault::SingleWithManyTiles { tiles: tiles_len });
                }
                return Ok(placements);
            };

            let mut coordinate = anchor;
            for index in 1..tiles_len {
                // tiles already on the board are skipped, not replaced
                coordinate = std::iter::successors(line.step(coordinate), |&next| line.step(next))
                    .find(|&next| !board.contains(next))
                    .ok_or(PlacementFault::RanOffBoard)?;
                placements.insert(index, coordinate);
            }
        }
        Target::Cells(cells) => {
            if cells.len() != tiles_len {
                return Err(PlacementFault::CellCountMismatch {
                    cells: cells.len(),
                    tiles: tiles_len,
                });
            }
            for (index, &coordinate) in cells.iter().enumerate() {
                check_empty(board, coordinate)?;
                placements
                    .insert_no_overwrite(index, coordinate)
                    .map_err(|_| PlacementFault::Duplicate { coordinate })?;
            }
        }
    }
    Ok(placements)
}

fn check_empty(board: &Board, coordinate: Coordinate) -> Result<(), PlacementFault> {
    if !in_bounds(coordinate) {
        return Err(PlacementFault::OutOfBounds { coordinate });
    }
    if board.contains(coordinate) {
        return Err(PlacementFault::Occupied { coordinate });
    }
    Ok(())
}

/// Finds the line shared by the new spaces. A lone space takes the line with more
/// neighboring [tiles](PlacedTile) on the board, or [across](Line::Across) on a tie.
///
/// # Errors
///
/// [PlacementFault::NotInLine] when the spaces share neither a row nor a column.
pub fn resolve_line(board: &Board, placements: &Placements) -> Result<Line, PlacementFault> {
    let Some((min_row, min_col, max_row, max_col)) =
        find_component_minimums_and_maximums(placements.right_values().copied())
    else {
        return Err(PlacementFault::Empty);
    };

    if placements.len() == 1 {
        let coordinate = (min_row, min_col);
        let neighbors = |line: Line| {
            [line.step_back(coordinate), line.step(coordinate)]
                .into_iter()
                .flatten()
                .filter(|&neighbor| board.contains(neighbor))
                .count()
        };
        return Ok(if neighbors(Line::Down) > neighbors(Line::Across) {
            Line::Down
        } else {
            Line::Across
        });
    }

    if min_row == max_row {
        Ok(Line::Across)
    } else if min_col == max_col {
        Ok(Line::Down)
    } else {
        Err(PlacementFault::NotInLine)
    }
}

/// Checks that every space from the first to the last new space along `line` holds either
/// a new [tile](PlacedTile) or a [tile](PlacedTile) on the board.
///
/// # Errors
///
/// Inclusive ranges of empty spaces in the line.
pub fn check_contiguous(
    board: &Board,
    placements: &Placements,
    line: Line,
) -> Result<(), BTreeSet<(Coordinate, Coordinate)>> {
    let Some((first, last)) = placements
        .right_values()
        .map(|&coordinate| line.position(coordinate))
        .minmax()
        .into_option()
    else {
        return Ok(());
    };
    let Some(&origin) = placements.right_values().next() else {
        return Ok(());
    };

    let holes: BTreeSet<(Coordinate, Coordinate)> = (first..=last)
        .filter(|&position| {
            let coordinate = line.with_position(origin, position);
            !board.contains(coordinate) && !placements.contains_right(&coordinate)
        })
        .peekable()
        .batching(batch_continuous_increasing_range)
        .map(|(start, end)| {
            (
                line.with_position(origin, start),
                line.with_position(origin, end),
            )
        })
        .collect();

    if !holes.is_empty() {
        return Err(holes);
    }
    Ok(())
}

/// Checks whether `placement` may be played by the owner of `rack` on `board`. The checks
/// run in order and stop at the first failure. Nothing is mutated.
///
/// 1. Every [tile](PlacedTile) is in the [rack](Rack), counting duplicates.
/// 2. The [target](Target) covers legal spaces.
/// 3. The new spaces share one row or one column.
/// 4. The line holds no empty spaces between the first and last new space.
/// 5. On an empty board, the [center](CENTER) is covered.
/// 6. Otherwise, some new space touches a [tile](PlacedTile) on the board.
///
/// # Errors
///
/// * [PlayError::TileNotInRack]
/// * [PlayError::InvalidPlacement]
/// * [PlayError::NonContiguousPlay]
/// * [PlayError::MustCoverCenter]
/// * [PlayError::NotAdjacent]
///
/// # Returns
///
/// The [valid play](ValidPlay) with its spaces and line.
pub fn validate_placement(
    board: &Board,
    rack: &Rack,
    placement: &Placement,
) -> Result<ValidPlay, PlayError> {
    let missing = rack.missing(placement.tiles.iter().map(|tile| tile.tile()));
    if !missing.is_empty() {
        return Err(PlayError::TileNotInRack { missing });
    }

    let placements = target_cells(board, placement)?;
    let line = resolve_line(board, &placements)?;
    check_contiguous(board, &placements, line)
        .map_err(|holes| PlayError::NonContiguousPlay { holes })?;

    if board.is_empty() {
        if !placements.contains_right(&CENTER) {
            return Err(PlayError::MustCoverCenter);
        }
    } else if !placements.right_values().any(|&coordinate| {
        adjacent_coordinates(coordinate)
            .into_iter()
            .any(|adjacent| board.contains(adjacent))
    }) {
        return Err(PlayError::NotAdjacent);
    }

    Ok(ValidPlay {
        placements,
        tiles: placement.tiles.clone(),
        line,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Direction, Letter, BOARD_SIZE};
    use map_macro::btree_set;

    const C: PlacedTile = PlacedTile::Concrete(Letter::C);
    const A: PlacedTile = PlacedTile::Concrete(Letter::A);
    const T: PlacedTile = PlacedTile::Concrete(Letter::T);
    const S: PlacedTile = PlacedTile::Concrete(Letter::S);

    #[test]
    fn tile_not_in_rack() {
        let rack = test_rack("CAT");
        let placement = Placement::anchored(CENTER, Direction::Across, [C, A, A]);

        test_validate_error(
            &Board::new(),
            &rack,
            &placement,
            PlayError::TileNotInRack {
                missing: vec![Tile::Letter(Letter::A)],
            },
        );
    }

    #[test]
    fn blank_needs_blank() {
        let rack = test_rack("CAT");
        let placement =
            Placement::anchored(CENTER, Direction::Across, [C, PlacedTile::Blank(Letter::A)]);

        test_validate_error(
            &Board::new(),
            &rack,
            &placement,
            PlayError::TileNotInRack {
                missing: vec![Tile::Blank],
            },
        );
    }

    #[test]
    fn empty_placement() {
        let placement = Placement::anchored(CENTER, Direction::Across, []);

        test_validate_error(
            &Board::new(),
            &test_rack("CAT"),
            &placement,
            PlayError::InvalidPlacement {
                fault: PlacementFault::Empty,
            },
        );
    }

    #[test]
    fn anchor_out_of_bounds() {
        let placement = Placement::anchored((BOARD_SIZE, 0), Direction::Across, [C]);

        test_validate_error(
            &Board::new(),
            &test_rack("CAT"),
            &placement,
            PlayError::InvalidPlacement {
                fault: PlacementFault::OutOfBounds {
                    coordinate: (BOARD_SIZE, 0),
                },
            },
        );
    }

    #[test]
    fn anchor_occupied() {
        let board = test_board([(CENTER, C)]);
        let placement = Placement::anchored(CENTER, Direction::Down, [A]);

        test_validate_error(
            &board,
            &test_rack("CAT"),
            &placement,
            PlayError::InvalidPlacement {
                fault: PlacementFault::Occupied { coordinate: CENTER },
            },
        );
    }

    #[test]
    fn single_with_many_tiles() {
        let placement = Placement::anchored(CENTER, Direction::Single, [C, A]);

        test_validate_error(
            &Board::new(),
            &test_rack("CAT"),
            &placement,
            PlayError::InvalidPlacement {
                fault: PlacementFault::SingleWithManyTiles { tiles: 2 },
            },
        );
    }

    #[test]
    fn run_off_board() {
        let placement = Placement::anchored((7, BOARD_SIZE - 2), Direction::Across, [C, A, T]);

        test_validate_error(
            &Board::new(),
            &test_rack("CAT"),
            &placement,
            PlayError::InvalidPlacement {
                fault: PlacementFault::RanOffBoard,
            },
        );
    }

    #[test]
    fn duplicate_cells() {
        let placement = Placement::cells([(CENTER, C), ((7, 8), A), (CENTER, T)]);

        test_validate_error(
            &Board::new(),
            &test_rack("CAT"),
            &placement,
            PlayError::InvalidPlacement {
                fault: PlacementFault::Duplicate { coordinate: CENTER },
            },
        );
    }

    #[test]
    fn cells_not_in_line() {
        let placement = Placement::cells([(CENTER, C), ((8, 8), A)]);

        test_validate_error(
            &Board::new(),
            &test_rack("CAT"),
            &placement,
            PlayError::InvalidPlacement {
                fault: PlacementFault::NotInLine,
            },
        );
    }

    #[test]
    fn cell_count_mismatch() {
        let placement = Placement {
            target: Target::Cells(vec![CENTER]),
            tiles: [C, A].into_iter().collect(),
        };

        test_validate_error(
            &Board::new(),
            &test_rack("CAT"),
            &placement,
            PlayError::InvalidPlacement {
                fault: PlacementFault::CellCountMismatch { cells: 1, tiles: 2 },
            },
        );
    }

    #[test]
    fn non_contiguous() {
        let placement = Placement::cells([((7, 5), C), ((7, 7), A), ((7, 10), T)]);

        test_validate_error(
            &Board::new(),
            &test_rack("CAT"),
            &placement,
            PlayError::NonContiguousPlay {
                holes: btree_set! { ((7, 6), (7, 6)), ((7, 8), (7, 9)) },
            },
        );
    }

    #[test]
    fn must_cover_center() {
        let placement = Placement::anchored((3, 3), Direction::Across, [C, A, T]);

        test_validate_error(
            &Board::new(),
            &test_rack("CAT"),
            &placement,
            PlayError::MustCoverCenter,
        );
    }

    #[test]
    fn not_adjacent() {
        let board = test_board([(CENTER, C)]);
        let placement = Placement::anchored((2, 2), Direction::Down, [A, T]);

        test_validate_error(&board, &test_rack("CAT"), &placement, PlayError::NotAdjacent);
    }

    #[test]
    fn first_play_across_center() {
        let placement = Placement::anchored((7, 6), Direction::Across, [C, A, T]);

        let valid_play = validate_placement(&Board::new(), &test_rack("CAT"), &placement).unwrap();

        assert_eq!(Line::Across, valid_play.line);
        assert_eq!(
            vec![((7, 6), C), ((7, 7), A), ((7, 8), T)],
            valid_play.cells().collect::<Vec<_>>()
        );
    }

    #[test]
    fn anchored_skips_occupied() {
        let board = test_board([((7, 7), A)]);
        let placement = Placement::anchored((7, 6), Direction::Across, [C, T, S]);

        let valid_play = validate_placement(&board, &test_rack("CTS"), &placement).unwrap();

        assert_eq!(
            vec![((7, 6), C), ((7, 8), T), ((7, 9), S)],
            valid_play.cells().collect::<Vec<_>>()
        );
        assert_eq!(Some(T), valid_play.tile_at((7, 8)));
        assert_eq!(None, valid_play.tile_at((7, 7)));
    }

    #[test]
    fn direction_is_only_a_hint() {
        let board = test_board([((7, 7), A)]);
        let placement = Placement::anchored((6, 7), Direction::Across, [C]);

        let valid_play = validate_placement(&board, &test_rack("C"), &placement).unwrap();

        assert_eq!(Line::Down, valid_play.line);
    }

    #[test]
    fn lone_tile_tie_is_across() {
        let board = test_board([((7, 7), A), ((8, 8), T)]);
        let placement = Placement::anchored((7, 8), Direction::Down, [S]);

        let valid_play = validate_placement(&board, &test_rack("S"), &placement).unwrap();

        assert_eq!(Line::Across, valid_play.line);
    }

    #[test]
    fn cells_bridge_board_tile() {
        let board = test_board([((7, 7), A)]);
        let placement = Placement::cells([((7, 8), T), ((7, 6), C)]);

        let valid_play = validate_placement(&board, &test_rack("CT"), &placement).unwrap();

        assert_eq!(Line::Across, valid_play.line);
    }

    #[test]
    fn failed_validation_changes_nothing() {
        let board = test_board([(CENTER, C)]);
        let rack = test_rack("CAT");
        let (board_before, rack_before) = (board.clone(), rack.clone());
        let placement = Placement::anchored((2, 2), Direction::Down, [A, T]);

        assert!(validate_placement(&board, &rack, &placement).is_err());
        assert!(validate_placement(&board, &rack, &placement).is_err());

        assert_eq!(board_before, board);
        assert_eq!(rack_before, rack);
    }

    fn test_rack(letters: &str) -> Rack {
        Rack::from_tiles(crate::parse_rack_tiles(letters).unwrap())
    }

    fn test_board(tiles: impl IntoIterator<Item = (Coordinate, PlacedTile)>) -> Board {
        let mut board = Board::new();
        for (coordinate, tile) in tiles {
            board.place(coordinate, tile).unwrap();
        }
        board
    }

    fn test_validate_error(
        board: &Board,
        rack: &Rack,
        placement: &Placement,
        expected_error: PlayError,
    ) {
        let actual_error =
            validate_placement(board, rack, placement).expect_err("validate_placement should fail");

        assert_eq!(expected_error, actual_error);
    }
}
