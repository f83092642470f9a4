use crate::{
    GameRules, GameState, Hangman, Letter, MoveError, Outcome, PlayerId, WRONG_GUESS_LIMIT,
};
use derive_more::{Display, Error};
use tracing::{debug, info, instrument};

/// Describes the reasons why [`Hangman::guess`] could not be executed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Display, Error)]
pub enum GuessError {
    /// Attempting to guess a [letter](Letter) which was already guessed.
    #[display("{letter} was already guessed")]
    AlreadyGuessed {
        /// The repeated [letter](Letter).
        letter: Letter,
    },
}

impl Hangman {
    /// Reveals every occurrence of `letter` in the hidden word.
    ///
    /// A correct guess earns one point per occurrence and the player keeps the turn. A wrong
    /// guess counts against [`WRONG_GUESS_LIMIT`] and passes the turn. The game is over when
    /// the whole word is revealed or the limit is reached.
    ///
    /// # Errors
    ///
    /// * [MoveError::GameAlreadyOver] Attempting to guess after the game has ended.
    /// * [MoveError::NotYourTurn] Attempting to guess out of turn.
    /// * [MoveError::Guess] Attempting to guess a [letter](Letter) twice.
    #[instrument(skip(self), fields(letter = %letter))]
    pub fn guess(&mut self, player_id: PlayerId, letter: Letter) -> Result<Outcome, MoveError> {
        let position = self.check_turn(player_id)?;
        if self.guessed.contains(&letter) {
            debug!("Rejected repeated guess");
            return Err(GuessError::AlreadyGuessed { letter }.into());
        }
        self.guessed.insert(letter);

        let name = &self.players[position].name;
        let occurrences = self.word.iter().filter(|&&hidden| hidden == letter).count();
        let mut message = if occurrences > 0 {
            format!("{name} found {occurrences} {letter}")
        } else {
            format!("{name} guessed {letter}, which is not in the word")
        };

        if occurrences > 0 {
            self.players[position].score += occurrences;
            if self.is_revealed() {
                self.state = GameState::GameOver;
            }
        } else {
            self.wrong_guesses += 1;
            self.advance_turn();
            if self.wrong_guesses >= WRONG_GUESS_LIMIT {
                self.state = GameState::GameOver;
            }
        }

        if self.state == GameState::GameOver {
            message.push_str(&format!(". The word was {}. The game is over", self.word()));
        }
        info!(
            player_id,
            occurrences,
            wrong_guesses = self.wrong_guesses,
            state = %self.state,
            "Accepted guess"
        );

        Ok(Outcome {
            message,
            points: occurrences,
            state: self.state,
        })
    }
}
