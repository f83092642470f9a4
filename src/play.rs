use crate::{Coordinate, Direction, Letter, PlacedTile, PlayedTiles, Tile};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Describes which spaces the [tiles](PlacedTile) of a [placement](Placement) cover.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Target {
    /// The first [tile](PlacedTile) covers `anchor`. Each following [tile](PlacedTile) covers
    /// the next empty space in `direction`, skipping spaces which already hold a
    /// [tile](PlacedTile).
    Anchored {
        /// The space of the first [tile](PlacedTile).
        anchor: Coordinate,
        /// The direction the following [tiles](PlacedTile) are laid out in.
        direction: Direction,
    },
    /// One space per [tile](PlacedTile), in the same order as the [tiles](PlacedTile).
    Cells(Vec<Coordinate>),
}

/// The [tiles](PlacedTile) a player wants to place and where they should go.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Placement {
    /// Where the [tiles](PlacedTile) go.
    pub target: Target,
    /// The [tiles](PlacedTile) in play order.
    pub tiles: PlayedTiles,
}

impl Placement {
    /// # Returns
    ///
    /// A [placement](Placement) laid out from `anchor` in `direction`.
    pub fn anchored(
        anchor: Coordinate,
        direction: Direction,
        tiles: impl IntoIterator<Item = PlacedTile>,
    ) -> Placement {
        Placement {
            target: Target::Anchored { anchor, direction },
            tiles: tiles.into_iter().collect(),
        }
    }

    /// # Returns
    ///
    /// A [placement](Placement) with one explicit space per [tile](PlacedTile).
    pub fn cells(cells: impl IntoIterator<Item = (Coordinate, PlacedTile)>) -> Placement {
        let (cells, tiles): (Vec<Coordinate>, PlayedTiles) = cells.into_iter().unzip();
        Placement {
            target: Target::Cells(cells),
            tiles,
        }
    }
}

/// Describes one turn a player may take.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Place [tiles](PlacedTile) on the board.
    Place(Placement),
    /// Return [tiles](Tile) to the bag for new ones.
    Swap(Vec<Tile>),
    /// Guess a [letter](Letter) of the hidden word.
    GuessLetter(Letter),
}

impl Move {
    /// # Returns
    ///
    /// The [kind](MoveKind) of this move.
    pub fn kind(&self) -> MoveKind {
        match self {
            Move::Place(_) => MoveKind::Place,
            Move::Swap(_) => MoveKind::Swap,
            Move::GuessLetter(_) => MoveKind::GuessLetter,
        }
    }
}

/// Describes the kind of a [move](Move) without its payload.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Display, Serialize, Deserialize)]
pub enum MoveKind {
    /// [Move::Place]
    #[display("place")]
    Place,
    /// [Move::Swap]
    #[display("swap")]
    Swap,
    /// [Move::GuessLetter]
    #[display("guess a letter")]
    GuessLetter,
}

/// Describes the reason why client input could not be read.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Display, Error)]
pub enum ParseError {
    /// The anchor has a negative component.
    #[display("row ({row}) and column ({col}) must not be negative")]
    NegativeCoordinate {
        /// The requested row.
        row: i64,
        /// The requested column.
        col: i64,
    },
    /// The direction code is not `0`, `1`, or `2`.
    #[display("unknown direction code {code}")]
    UnknownDirection {
        /// The requested code.
        code: u8,
    },
    /// A character does not describe a [tile](Tile).
    #[display("{character:?} at position {position} is not a tile")]
    InvalidTile {
        /// The offending character.
        character: char,
        /// The index of the character.
        position: usize,
    },
    /// The input is not exactly one [letter](Letter).
    #[display("{input:?} is not a single letter")]
    NotOneLetter {
        /// The whole input.
        input: String,
    },
    /// A hidden word is empty or holds something other than [letters](Letter).
    #[display("{word:?} is not a word of letters")]
    InvalidWord {
        /// The whole word.
        word: String,
    },
    /// The request body is not a valid [move descriptor](MoveDescriptor).
    #[display("malformed request: {message}")]
    Malformed {
        /// The decoder message.
        message: String,
    },
}

impl From<serde_json::Error> for ParseError {
    fn from(error: serde_json::Error) -> ParseError {
        ParseError::Malformed {
            message: error.to_string(),
        }
    }
}

/// A placement request as sent by clients.
///
/// `tiles` holds `A`-`Z` for letter [tiles](Tile) and `a`-`z` for [blanks](Tile::Blank)
/// played as that letter. `remaining_tiles` is the rack the client expects to hold after
/// the move, where `?` is a [blank](Tile::Blank).
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveDescriptor {
    /// The row of the anchor.
    pub row: i64,
    /// The column of the anchor.
    pub col: i64,
    /// `0` for across, `1` for down, `2` for a single tile.
    pub direction: u8,
    /// The played tiles.
    pub tiles: String,
    /// The rack the client expects after the move.
    #[serde(default)]
    pub remaining_tiles: String,
}

impl MoveDescriptor {
    /// Decodes a JSON request body.
    ///
    /// # Errors
    ///
    /// [ParseError::Malformed] when `json` does not hold a descriptor.
    pub fn from_json(json: &str) -> Result<MoveDescriptor, ParseError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads the anchored [placement](Placement). An anchor past the edge of the board is
    /// kept, so that it is rejected as an invalid placement rather than as a bad request.
    ///
    /// # Errors
    ///
    /// * [ParseError::NegativeCoordinate] when `row` or `col` is negative.
    /// * [ParseError::UnknownDirection] when `direction` is not a known code.
    /// * [ParseError::InvalidTile] when `tiles` holds anything but ASCII letters.
    pub fn placement(&self) -> Result<Placement, ParseError> {
        if self.row < 0 || self.col < 0 {
            return Err(ParseError::NegativeCoordinate {
                row: self.row,
                col: self.col,
            });
        }
        let anchor = (
            usize::try_from(self.row).unwrap_or(usize::MAX),
            usize::try_from(self.col).unwrap_or(usize::MAX),
        );
        let direction = Direction::from_code(self.direction).ok_or(ParseError::UnknownDirection {
            code: self.direction,
        })?;
        Ok(Placement::anchored(
            anchor,
            direction,
            parse_placed_tiles(&self.tiles)?,
        ))
    }

    /// # Errors
    ///
    /// [ParseError::InvalidTile] when `remaining_tiles` holds anything but ASCII letters
    /// and `?`.
    ///
    /// # Returns
    ///
    /// The rack the client expects after the move.
    pub fn remaining_rack(&self) -> Result<Vec<Tile>, ParseError> {
        parse_rack_tiles(&self.remaining_tiles)
    }
}

impl fmt::Display for MoveDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at ({}, {}) direction {}",
            self.tiles, self.row, self.col, self.direction
        )
    }
}

/// Reads played tiles, where `A`-`Z` plays a letter [tile](Tile) and `a`-`z` plays
/// a [blank](Tile::Blank) as that letter.
///
/// # Errors
///
/// [ParseError::InvalidTile] for the first character which is not an ASCII letter.
pub fn parse_placed_tiles(input: &str) -> Result<PlayedTiles, ParseError> {
    input
        .chars()
        .enumerate()
        .map(|(position, character)| {
            let letter = Letter::from_char(character).ok_or(ParseError::InvalidTile {
                character,
                position,
            })?;
            Ok(if character.is_ascii_lowercase() {
                PlacedTile::Blank(letter)
            } else {
                PlacedTile::Concrete(letter)
            })
        })
        .collect()
}

/// Reads rack tiles, where `A`-`Z` (in either case) is a letter [tile](Tile) and `?` is
/// a [blank](Tile::Blank).
///
/// # Errors
///
/// [ParseError::InvalidTile] for the first character which is neither an ASCII letter nor `?`.
pub fn parse_rack_tiles(input: &str) -> Result<Vec<Tile>, ParseError> {
    input
        .chars()
        .enumerate()
        .map(|(position, character)| match character {
            '?' => Ok(Tile::Blank),
            _ => Letter::from_char(character)
                .map(Tile::Letter)
                .ok_or(ParseError::InvalidTile {
                    character,
                    position,
                }),
        })
        .collect()
}

/// Reads exactly one ASCII letter in either case, ignoring surrounding whitespace.
///
/// # Errors
///
/// [ParseError::NotOneLetter] for anything else.
pub fn parse_letter(input: &str) -> Result<Letter, ParseError> {
    let mut chars = input.trim().chars();
    match (chars.next().and_then(Letter::from_char), chars.next()) {
        (Some(letter), None) => Ok(letter),
        _ => Err(ParseError::NotOneLetter {
            input: input.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;
    use tap::Tap;

    #[test]
    fn placement_from_descriptor() {
        let descriptor = test_descriptor(7, 6, 0, "CaT");

        let placement = descriptor.placement().unwrap();

        let expected_tiles: PlayedTiles = smallvec![
            PlacedTile::Concrete(Letter::C),
            PlacedTile::Blank(Letter::A),
            PlacedTile::Concrete(Letter::T),
        ];
        assert_eq!(
            Target::Anchored {
                anchor: (7, 6),
                direction: Direction::Across
            },
            placement.target
        );
        assert_eq!(expected_tiles, placement.tiles);
    }

    #[test]
    fn placement_negative_coordinate() {
        let descriptor = test_descriptor(-1, 3, 1, "A");

        assert_eq!(
            Err(ParseError::NegativeCoordinate { row: -1, col: 3 }),
            descriptor.placement()
        );
    }

    #[test]
    fn placement_large_coordinate_is_kept() {
        let descriptor = test_descriptor(40, 3, 2, "A");

        let placement = descriptor.placement().unwrap();

        assert_eq!(
            Target::Anchored {
                anchor: (40, 3),
                direction: Direction::Single
            },
            placement.target
        );
    }

    #[test]
    fn placement_unknown_direction() {
        let descriptor = test_descriptor(7, 7, 9, "A");

        assert_eq!(
            Err(ParseError::UnknownDirection { code: 9 }),
            descriptor.placement()
        );
    }

    #[test]
    fn placement_invalid_tile() {
        let descriptor = test_descriptor(7, 7, 0, "AB?");

        assert_eq!(
            Err(ParseError::InvalidTile {
                character: '?',
                position: 2
            }),
            descriptor.placement()
        );
    }

    #[test]
    fn descriptor_from_json() {
        let json = r#"{"row":7,"col":7,"direction":1,"tiles":"Hi","remainingTiles":"AB?"}"#;

        let descriptor = MoveDescriptor::from_json(json).unwrap();

        let expected_descriptor = test_descriptor(7, 7, 1, "Hi")
            .tap_mut(|descriptor| descriptor.remaining_tiles = String::from("AB?"));
        assert_eq!(expected_descriptor, descriptor);
        assert_eq!(
            vec![
                Tile::Letter(Letter::A),
                Tile::Letter(Letter::B),
                Tile::Blank
            ],
            descriptor.remaining_rack().unwrap()
        );
    }

    #[test]
    fn descriptor_from_malformed_json() {
        let actual_error = MoveDescriptor::from_json(r#"{"row":"seven"}"#).unwrap_err();

        assert!(matches!(actual_error, ParseError::Malformed { .. }));
    }

    #[test]
    fn rack_tiles() {
        assert_eq!(
            vec![Tile::Blank, Tile::Letter(Letter::Q), Tile::Letter(Letter::U)],
            parse_rack_tiles("?qU").unwrap()
        );
        assert!(parse_rack_tiles("").unwrap().is_empty());
        assert_eq!(
            Err(ParseError::InvalidTile {
                character: '1',
                position: 1
            }),
            parse_rack_tiles("A1")
        );
    }

    #[test]
    fn letter() {
        assert_eq!(Ok(Letter::E), parse_letter("e"));
        assert_eq!(Ok(Letter::E), parse_letter(" E\n"));
        assert!(parse_letter("").is_err());
        assert!(parse_letter("EE").is_err());
        assert!(parse_letter("?").is_err());
    }

    #[test]
    fn move_kinds() {
        assert_eq!(MoveKind::Swap, Move::Swap(Vec::new()).kind());
        assert_eq!(MoveKind::GuessLetter, Move::GuessLetter(Letter::A).kind());
        assert_eq!("guess a letter", MoveKind::GuessLetter.to_string());
    }

    #[test]
    fn placement_cells() {
        let placement = Placement::cells([
            ((7, 7), PlacedTile::Concrete(Letter::A)),
            ((8, 7), PlacedTile::Blank(Letter::T)),
        ]);

        assert_eq!(Target::Cells(vec![(7, 7), (8, 7)]), placement.target);
        assert_eq!(2, placement.tiles.len());
    }

    fn test_descriptor(row: i64, col: i64, direction: u8, tiles: &str) -> MoveDescriptor {
        MoveDescriptor {
            row,
            col,
            direction,
            tiles: tiles.to_owned(),
            remaining_tiles: String::new(),
        }
    }
}
