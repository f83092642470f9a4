//! Concrete structs to represent and protect the state of two-player word games with methods
//! to validate, apply, and report moves on the server.
//!
//! ## Summary
//!
//! Implemented as `2` game variants which share one [capability](GameRules): a
//! [word grid](WordGrid) where players place lettered [tiles](Tile) on a
//! [`BOARD_SIZE`] by [`BOARD_SIZE`] [board](Board), and a [hangman](Hangman) where players
//! guess the [letters](Letter) of a hidden word. Each player takes turns to advance the game
//! with a [move](Move). A rejected move changes nothing. The game ends when the bag and the
//! rack of the mover are empty, or when the hidden word is revealed or
//! [too many guesses](WRONG_GUESS_LIMIT) were wrong. The player with the most points wins.
//!
//! ## What are the phases of the game?
//!
//! * [GameState::NotStarted]: Players are seated but no rack has been dealt.
//! * [GameState::InProgress]: Players take turns being the current player.
//! * [GameState::GameOver]: No more moves are accepted.
//!
//! ## How is the game created?
//!
//! [WordGrid::new] fills a shuffled [bag](Bag), deals every [rack](Rack), and gives the first
//! turn to the first player. [Hangman::new] hides a given word and
//! [Hangman::new_random_word] hides one of the built-in [words](WORDS).
//! [GameService::new_game] and [GameService::new_hangman_game] also resolve the
//! [players](Player) and store the game.
//!
//! ## How is the game advanced?
//!
//! * [Move::Place]: The current player [places](WordGrid::place) [tiles](PlacedTile) from their
//! rack in one row or column.
//! * [Move::Swap]: The current player [swaps](WordGrid::swap) [tiles](Tile) from their rack
//! with [tiles](Tile) from the bag, ignores points, and passes the turn.
//! * [Move::GuessLetter]: The current player [guesses](Hangman::guess) a [letter](Letter).
//!
//! The current player is represented as the index of the player whose turn it is in the range
//! `0`..[`PLAYERS_LEN`] which either increments or loops back to `0` when necessary.
//!
//! ### How are tiles placed?
//!
//! A [placement](Placement) is [validated](validate_placement) against the board and the rack
//! before anything changes: the [tiles](Tile) must be held, the spaces must be empty and on the
//! board, the new [tiles](PlacedTile) must share one line without gaps, the first word must
//! cover the [center](CENTER), and every later word must touch the board.
//!
//! Then the [tiles](PlacedTile) move from the rack to the board, the rack is refilled from the
//! bag, the points are added to the current player, and the turn advances.
//!
//! ## How are points calculated?
//!
//! The points of a placement are the sum of the points of the main word and every cross word
//! through a new [tile](PlacedTile). See [score_play].
//!
//! ## How is the game viewed?
//!
//! [Game::view] borrows what one seat may see: the board, the points, the size of each rack,
//! the size of the bag, and their own rack for a [word grid](WordGridView), or the revealed
//! pattern and guessed [letters](Letter) for a [hangman](HangmanView). The bag, the other rack,
//! and the hidden word stay private. [send_updates] pushes every seat's view to its
//! [observer](Observer).
//!
//! ## How are games stored?
//!
//! [GameService] keeps [snapshots](GameSnapshot) in a [GameStore] and resolves identities in a
//! [PlayerDirectory]. Moves on one game are applied one at a time, and only accepted moves are
//! saved.
//!
//! ## How are game states tested when properties are private?
//!
//! The `test` build configuration adds many required methods for testing. Each state struct
//! implements methods to get mutable references to their properties, helper methods to add
//! random data to specific properties, and methods to set properties for common scenarios.

// Document!
#![forbid(
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::bare_urls
)]
// Don't leave a build in a half finished state!
#![deny(
    future_incompatible,
    nonstandard_style,
    rust_2018_compatibility,
    rust_2018_idioms,
    rust_2021_compatibility,
    unreachable_pub,
    missing_debug_implementations,
    unsafe_code
)]

pub use bag::*;
pub use board::*;
pub use consts::*;
pub use coordinate::*;
pub use game::*;
pub use hangman::*;
pub use notify::*;
pub use play::*;
pub use player::*;
pub use rack::*;
#[cfg(test)]
pub use random::*;
pub use score::*;
pub use service::*;
pub use store::*;
pub use tile::*;
pub use types::*;
pub use validate::*;
pub use word_grid::*;

mod bag;
mod board;
mod consts;
mod coordinate;
mod game;
mod hangman;
mod notify;
mod play;
mod player;
mod rack;
#[cfg(test)]
mod random;
mod score;
mod service;
mod store;
mod tile;
mod types;
mod validate;
mod word_grid;
