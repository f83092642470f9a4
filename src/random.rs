use crate::{Bag, Player, Players, Rack, Tile, RACK_CAPACITY};
use rand::distributions::{Alphanumeric, Distribution, Uniform};
use rand::Rng;

/// Two [players](Player) with distinct random ids, random names, and `0` points.
pub fn random_players<R: Rng + ?Sized>(rng: &mut R) -> Players {
    let first_id = rng.gen_range(1..u64::MAX / 2);
    let second_id = first_id + rng.gen_range(1..1000);
    [first_id, second_id].map(|id| {
        let name: String = (0..8).map(|_| char::from(rng.sample(Alphanumeric))).collect();
        Player::new(id, format!("user-{id}"), name)
    })
}

/// A [bag](Bag) of a random, small, non-zero number of [tiles](Tile).
pub fn random_bag<R: Rng + ?Sized>(rng: &mut R) -> Bag {
    let bag_len = rng.gen_range(10..20);
    Bag::from_tiles((0..bag_len).map(|_| rng.gen::<Tile>()).collect())
}

/// A [rack](Rack) of a random, non-zero number of [tiles](Tile).
pub fn random_rack<R: Rng + ?Sized>(rng: &mut R) -> Rack {
    let rack_len = rng.gen_range(1..=RACK_CAPACITY);
    Rack::from_tiles((0..rack_len).map(|_| rng.gen::<Tile>()))
}

/// Sets each player's points to a random, medium, non-zero number.
pub fn random_points<R: Rng + ?Sized>(rng: &mut R, players: &mut Players) {
    let possible_points = Uniform::from(100..200);
    for player in players {
        player.score = possible_points.sample(rng);
    }
}

/// If `players` is not `0`, sets the current player to a random number between `0` inclusive
/// and `players` exclusive. Otherwise, does nothing.
///
/// # Returns
///
/// The index of the player whose turn it is.
pub fn random_current_player<R: Rng + ?Sized>(
    rng: &mut R,
    current_player: &mut usize,
    players: usize,
) -> usize {
    if players > 0 {
        *current_player = rng.gen_range(0..players);
    }

    *current_player
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PLAYERS_LEN;

    #[test]
    fn random_players_distinct() {
        let [first, second] = random_players(&mut rand::thread_rng());

        assert_ne!(first.id, second.id);
        assert_ne!(first.user_id, second.user_id);
        assert_eq!(0, first.score);
        assert_eq!(0, second.score);
    }

    #[test]
    fn random_bag_not_empty() {
        let bag = random_bag(&mut rand::thread_rng());

        assert!((10..20).contains(&bag.remaining_count()));
    }

    #[test]
    fn random_rack_in_capacity() {
        let rack = random_rack(&mut rand::thread_rng());

        assert!((1..=RACK_CAPACITY).contains(&rack.len()));
    }

    #[test]
    fn random_points_not_zero() {
        let mut players = random_players(&mut rand::thread_rng());

        random_points(&mut rand::thread_rng(), &mut players);

        for player in players {
            assert!(player.score > 0);
        }
    }

    #[test]
    fn random_current_player_zero_players() {
        let mut rng = rand::thread_rng();
        let mut current_player = rng.gen();

        let expected = current_player;
        random_current_player(&mut rng, &mut current_player, 0);

        assert_eq!(expected, current_player);
    }

    #[test]
    fn random_current_player_some_players() {
        let mut current_player = 0;

        let random_current_player =
            random_current_player(&mut rand::thread_rng(), &mut current_player, PLAYERS_LEN);

        assert!((0..PLAYERS_LEN).contains(&random_current_player));
        assert_eq!(random_current_player, current_player);
    }
}
