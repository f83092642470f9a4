use crate::{random_players, GameState, Hangman, Letter, Players};
use std::collections::BTreeSet;

impl Hangman {
    /// Generates a [Hangman] in progress hiding `RUST`.
    ///
    /// # Returns
    ///
    /// A [Hangman] struct with the properties set to the following:
    /// * `word`: `RUST`.
    /// * `guessed`: An empty set.
    /// * `wrong_guesses`: `0`.
    /// * `players`: Two random players with `0` points.
    /// * `current_player`: `0`.
    /// * `state`: [GameState::InProgress].
    pub fn empty_hangman() -> Hangman {
        Hangman {
            word: vec![Letter::R, Letter::U, Letter::S, Letter::T],
            guessed: BTreeSet::new(),
            wrong_guesses: 0,
            players: random_players(&mut rand::thread_rng()),
            current_player: 0,
            state: GameState::InProgress,
        }
    }

    /// A mutable reference to `self.word`.
    pub fn mut_word(&mut self) -> &mut Vec<Letter> {
        &mut self.word
    }

    /// A mutable reference to `self.guessed`.
    pub fn mut_guessed(&mut self) -> &mut BTreeSet<Letter> {
        &mut self.guessed
    }

    /// A mutable reference to `self.wrong_guesses`.
    pub fn mut_wrong_guesses(&mut self) -> &mut usize {
        &mut self.wrong_guesses
    }

    /// A mutable reference to `self.players`.
    pub fn mut_players(&mut self) -> &mut Players {
        &mut self.players
    }

    /// A mutable reference to `self.current_player`.
    pub fn mut_current_player(&mut self) -> &mut usize {
        &mut self.current_player
    }

    /// A mutable reference to `self.state`.
    pub fn mut_state(&mut self) -> &mut GameState {
        &mut self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_hangman() {
        let hangman = Hangman::empty_hangman();

        assert_eq!("RUST", hangman.word());
        assert!(hangman.guessed.is_empty());
        assert_eq!(0, hangman.wrong_guesses);
        assert!(hangman.players.iter().all(|player| player.score == 0));
        assert_eq!(0, hangman.current_player);
        assert_eq!(GameState::InProgress, hangman.state);
    }
}
