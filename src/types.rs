use crate::{Coordinate, PlacedTile, Player, Rack, Tile, PLAYERS_LEN, RACK_CAPACITY};
use bimap::BiBTreeMap;
use smallvec::SmallVec;

/// Identifies a [player](Player) across every game they take part in.
///
/// # See Also
///
/// * [PlayerDirectory](crate::PlayerDirectory)
pub type PlayerId = u64;
/// Identifies one persisted game.
///
/// # See Also
///
/// * [GameSnapshot](crate::GameSnapshot)
/// * [GameStore](crate::GameStore)
pub type GameId = u64;
/// The identifier of a user given by the external identity provider.
///
/// # See Also
///
/// * [Identity](crate::Identity)
pub type UserId = String;

/// A bimap of indexes of [placed tiles](PlacedTile) to the [coordinates](Coordinate) they
/// cover on the board.
///
/// # See Also
///
/// * [Coordinate]
/// * [target_cells](crate::target_cells)
/// * [ValidPlay](crate::ValidPlay)
pub type Placements = BiBTreeMap<usize, Coordinate>;
/// A vector of [placed tiles](PlacedTile) in play order.
///
/// # See Also
///
/// * [PlacedTile]
/// * [RACK_CAPACITY]
/// * [Placement](crate::Placement)
pub type PlayedTiles = SmallVec<[PlacedTile; RACK_CAPACITY]>;
/// A vector of [tiles](Tile) held by one player.
///
/// # See Also
///
/// * [Tile]
/// * [Rack]
pub type RackTiles = SmallVec<[Tile; RACK_CAPACITY]>;
/// An array of the [players](Player) seated at a game, indexed by turn position.
///
/// # See Also
///
/// * [PLAYERS_LEN]
/// * [WordGrid](crate::WordGrid)
/// * [Hangman](crate::Hangman)
pub type Players = [Player; PLAYERS_LEN];
/// An array of [racks](Rack) parallel to [`Players`].
///
/// # See Also
///
/// * [PLAYERS_LEN]
/// * [WordGrid](crate::WordGrid)
pub type Racks = [Rack; PLAYERS_LEN];
