use crate::{Coordinate, BAG_LEN};
use konst::primitive::parse_usize;
use konst::{option, result};

/// The number of players seated at every game. `2` players.
///
/// # See Also
///
/// * [Players](crate::Players)
/// * [WordGrid::new](crate::WordGrid::new)
/// * [Hangman::new](crate::Hangman::new)
pub const PLAYERS_LEN: usize = 2;
/// The width and height of the board. `15` spaces.
///
/// The layout of [space types](crate::SpaceType) is defined for this size only, so it is not
/// configurable.
///
/// # See Also
///
/// * [Board](crate::Board)
/// * [CENTER]
pub const BOARD_SIZE: usize = 15;
/// The space every first play must cover. It is always a
/// [double word](crate::SpaceType::DoubleWord) space.
///
/// # See Also
///
/// * [BOARD_SIZE]
/// * [PlayError::MustCoverCenter](crate::PlayError::MustCoverCenter)
pub const CENTER: Coordinate = (BOARD_SIZE / 2, BOARD_SIZE / 2);
/// The amount of extra points given when a player places every [tile](crate::Tile) of a full
/// rack in one turn. `50` additional points.
///
/// # See Also
///
/// * [RACK_CAPACITY]
/// * [score_play](crate::score_play)
pub const FULL_RACK_BONUS: usize = 50;
/// The maximum number of [tiles](crate::Tile) in a rack. If the environment variable named
/// `RACK_CAPACITY` is present at compile time and is able to be parsed into a `usize`,
/// set to the value of the environment variable. Otherwise, it is set to `7`.
///
/// # Panics
///
/// * When the given value is `0`
/// * When the [bag](crate::BAG_LEN) cannot fill a rack for every [player](PLAYERS_LEN)
///
/// # See Also
///
/// * [Rack](crate::Rack)
/// * [FULL_RACK_BONUS]
pub const RACK_CAPACITY: usize = option::unwrap_or!(
    option::and_then!(option_env!("RACK_CAPACITY"), |str| result::ok!(
        parse_usize(str)
    )),
    7
);
const _: () = assert!(RACK_CAPACITY > 0);
const _: () = assert!(BAG_LEN >= RACK_CAPACITY * PLAYERS_LEN);
/// The number of wrong guesses that ends a [hangman](crate::Hangman) game. If the environment
/// variable named `WRONG_GUESS_LIMIT` is present at compile time and is able to be parsed into
/// a `usize`, set to the value of the environment variable. Otherwise, it is set to `6`.
///
/// # Panics
///
/// * When the given value is `0`
///
/// # See Also
///
/// * [Hangman::guess](crate::Hangman::guess)
pub const WRONG_GUESS_LIMIT: usize = option::unwrap_or!(
    option::and_then!(option_env!("WRONG_GUESS_LIMIT"), |str| result::ok!(
        parse_usize(str)
    )),
    6
);
const _: () = assert!(WRONG_GUESS_LIMIT > 0);
