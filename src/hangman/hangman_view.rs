use crate::{GameState, Hangman, Letter, Players, WRONG_GUESS_LIMIT};
use serde::Serialize;
use std::collections::BTreeSet;

/// Immutably borrows what one seat may see of a [`Hangman`].
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HangmanView<'a> {
    /// The seat this view was made for.
    pub position: usize,
    /// The hidden word where every [letter](Letter) not guessed yet is `_`.
    pub pattern: String,
    /// Every [letter](Letter) guessed so far.
    pub guessed: &'a BTreeSet<Letter>,
    /// The number of guessed [letters](Letter) not in the hidden word.
    pub wrong_guesses: usize,
    /// The number of wrong guesses which ends the game.
    pub wrong_guess_limit: usize,
    /// The seated players with their points.
    pub players: &'a Players,
    /// The index of the player whose turn it is.
    pub current_player: usize,
    /// The phase of the game.
    pub state: GameState,
    /// The hidden word, once the game is over.
    pub revealed_word: Option<String>,
}

impl Hangman {
    /// # Returns
    ///
    /// A new [`HangmanView`] for the player at `position`, with the hidden word replaced by
    /// its [pattern](Hangman::pattern) until the game is over, or [None] if `position` is
    /// not a seat.
    pub fn view(&self, position: usize) -> Option<HangmanView<'_>> {
        if position >= self.players.len() {
            return None;
        }
        Some(HangmanView {
            position,
            pattern: self.pattern(),
            guessed: &self.guessed,
            wrong_guesses: self.wrong_guesses,
            wrong_guess_limit: WRONG_GUESS_LIMIT,
            players: &self.players,
            current_player: self.current_player,
            state: self.state,
            revealed_word: (self.state == GameState::GameOver).then(|| self.word()),
        })
    }
}
