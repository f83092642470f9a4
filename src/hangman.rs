use crate::{
    GameRules, GameState, Letter, Move, MoveError, Outcome, ParseError, PlayerId, Players,
};
pub use hangman_guess::*;
pub use hangman_view::*;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{info, instrument};

mod hangman_guess;
mod hangman_view;
#[cfg(test)]
mod test_setup;

/// The built-in hidden words of [`Hangman::new_random_word`].
pub const WORDS: [&str; 40] = [
    "ANCHOR", "BALLOON", "BRIDGE", "CABBAGE", "CANDLE", "CASTLE", "COMPASS", "CRYSTAL", "DOLPHIN",
    "ENGINE", "FEATHER", "FOREST", "GALAXY", "GARDEN", "GLACIER", "HARBOR", "JIGSAW", "JUNGLE",
    "KETTLE", "LANTERN", "MAGNET", "MEADOW", "MIRROR", "NAPKIN", "OYSTER", "PEPPER", "PUZZLE",
    "QUARTZ", "RABBIT", "RIDDLE", "SADDLE", "SPHINX", "THUNDER", "TOMATO", "VELVET", "WALNUT",
    "WIZARD", "YOGURT", "ZEPHYR", "ZIPPER",
];

/// Owns the state of a letter-guessing game and implements its moves.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Hangman {
    /// The hidden word.
    word: Vec<Letter>,
    /// Every [letter](Letter) guessed so far.
    guessed: BTreeSet<Letter>,
    /// The number of guessed [letters](Letter) not in the hidden word.
    wrong_guesses: usize,
    /// The seated players with their points.
    players: Players,
    /// The index of the player whose turn it is.
    current_player: usize,
    /// The phase of the game.
    state: GameState,
}

impl Hangman {
    /// Seats `players` in front of `word`, which is read in either case, and gives the first
    /// turn to the first player.
    ///
    /// # Errors
    ///
    /// [ParseError::InvalidWord] when `word` is empty or holds anything but ASCII letters.
    ///
    /// # Returns
    ///
    /// A [`Hangman`] in progress.
    pub fn new(players: Players, word: &str) -> Result<Hangman, ParseError> {
        let letters: Option<Vec<Letter>> = word.trim().chars().map(Letter::from_char).collect();
        match letters {
            Some(letters) if !letters.is_empty() => Ok(Hangman::with_letters(players, letters)),
            _ => Err(ParseError::InvalidWord {
                word: word.to_owned(),
            }),
        }
    }

    /// Seats `players` in front of a word drawn from [`WORDS`] with [`rand::thread_rng`].
    pub fn new_random_word(players: Players) -> Hangman {
        Hangman::with_random_word(players, &mut rand::thread_rng())
    }

    /// Seats `players` in front of a word drawn from [`WORDS`] with `rng`.
    pub fn with_random_word<R: Rng + ?Sized>(players: Players, rng: &mut R) -> Hangman {
        let word = WORDS[rng.gen_range(0..WORDS.len())];
        Hangman::with_letters(
            players,
            word.chars().filter_map(Letter::from_char).collect(),
        )
    }

    #[instrument(skip(players, word), fields(word_len = word.len()))]
    fn with_letters(players: Players, word: Vec<Letter>) -> Hangman {
        info!("Hid a word");
        Hangman {
            word,
            guessed: BTreeSet::new(),
            wrong_guesses: 0,
            players,
            current_player: 0,
            state: GameState::InProgress,
        }
    }

    /// # Returns
    ///
    /// The hidden word where every [letter](Letter) not guessed yet is `_`.
    pub fn pattern(&self) -> String {
        self.word
            .iter()
            .map(|letter| {
                if self.guessed.contains(letter) {
                    letter.as_char()
                } else {
                    '_'
                }
            })
            .collect()
    }

    /// # Returns
    ///
    /// Whether every [letter](Letter) of the hidden word was guessed.
    pub fn is_revealed(&self) -> bool {
        self.word.iter().all(|letter| self.guessed.contains(letter))
    }

    /// # Returns
    ///
    /// Every [letter](Letter) guessed so far.
    #[inline]
    pub fn guessed(&self) -> &BTreeSet<Letter> {
        &self.guessed
    }

    /// # Returns
    ///
    /// The number of guessed [letters](Letter) not in the hidden word.
    #[inline]
    pub fn wrong_guesses(&self) -> usize {
        self.wrong_guesses
    }

    /// # Returns
    ///
    /// The hidden word. Never shown to players before the game is over.
    pub fn word(&self) -> String {
        self.word.iter().map(|letter| letter.as_char()).collect()
    }

    fn advance_turn(&mut self) {
        self.current_player = (self.current_player + 1) % self.players.len();
    }
}

impl GameRules for Hangman {
    #[inline]
    fn players(&self) -> &Players {
        &self.players
    }

    #[inline]
    fn current_player(&self) -> usize {
        self.current_player
    }

    #[inline]
    fn state(&self) -> GameState {
        self.state
    }

    fn apply_move(&mut self, player_id: PlayerId, next_move: Move) -> Result<Outcome, MoveError> {
        match next_move {
            Move::GuessLetter(letter) => self.guess(player_id, letter),
            Move::Place(_) | Move::Swap(_) => {
                self.check_turn(player_id)?;
                Err(MoveError::UnsupportedMove {
                    kind: next_move.kind(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random_players;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn new_either_case() {
        let hangman = Hangman::new(random_players(&mut rand::thread_rng()), " Rust ").unwrap();

        assert_eq!("RUST", hangman.word());
        assert_eq!("____", hangman.pattern());
        assert_eq!(GameState::InProgress, hangman.state());
        assert_eq!(0, hangman.current_player());
        assert!(hangman.guessed().is_empty());
        assert_eq!(0, hangman.wrong_guesses());
    }

    #[test]
    fn new_invalid_word() {
        for word in ["", "   ", "R2D2", "ÉCOLE"] {
            assert_eq!(
                Err(ParseError::InvalidWord {
                    word: word.to_owned()
                }),
                Hangman::new(random_players(&mut rand::thread_rng()), word)
            );
        }
    }

    #[test]
    fn words_are_valid() {
        for word in WORDS {
            let hangman = Hangman::new(random_players(&mut rand::thread_rng()), word).unwrap();
            assert_eq!(word, hangman.word());
        }
    }

    #[test]
    fn random_word_from_words() {
        let mut rng = StdRng::seed_from_u64(7);

        let hangman = Hangman::with_random_word(random_players(&mut rng), &mut rng);

        assert!(WORDS.contains(&hangman.word().as_str()));
    }

    #[test]
    fn pattern_reveals_guessed() {
        let mut hangman = Hangman::empty_hangman();
        hangman.mut_guessed().extend([Letter::R, Letter::T, Letter::E]);

        assert_eq!("R__T", hangman.pattern());
        assert!(!hangman.is_revealed());

        hangman.mut_guessed().extend([Letter::U, Letter::S]);

        assert_eq!("RUST", hangman.pattern());
        assert!(hangman.is_revealed());
    }

    #[test]
    fn place_unsupported() {
        let mut hangman = Hangman::empty_hangman();
        let player_id = hangman.players()[0].id;

        let actual_error = hangman
            .apply_move(player_id, Move::Swap(Vec::new()))
            .unwrap_err();

        assert_eq!(
            MoveError::UnsupportedMove {
                kind: crate::MoveKind::Swap
            },
            actual_error
        );
    }
}
