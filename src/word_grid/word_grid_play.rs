use crate::{
    score_play, validate_placement, GameRules, GameState, MoveError, Outcome, Placement,
    PlayerId, Score, WordGrid,
};
use itertools::Itertools;
use tracing::{debug, info, instrument};

impl WordGrid {
    /// Validates `placement` against the board and the rack of the player with `player_id`.
    /// Otherwise, moves the [tiles](crate::PlacedTile) from the rack onto the board, adds the
    /// [score](score_play) to the player, refills the rack, and advances to the next player.
    ///
    /// The turn always advances. Then the game is over when the bag is empty and the rack of
    /// the player is empty after refilling.
    ///
    /// # Errors
    ///
    /// * [MoveError::GameAlreadyOver] Attempting to play after the game has ended.
    /// * [MoveError::NotStarted] Attempting to play before the racks were dealt.
    /// * [MoveError::NotYourTurn] Attempting to play out of turn.
    /// * [MoveError::Play] Attempting to play an illegal [placement](Placement).
    ///
    /// # Returns
    ///
    /// The [outcome](Outcome) naming every word formed and the points earned.
    #[instrument(skip(self, placement), fields(tiles = placement.tiles.len()))]
    pub fn place(
        &mut self,
        player_id: PlayerId,
        placement: &Placement,
    ) -> Result<Outcome, MoveError> {
        let position = self.check_turn(player_id)?;
        let play = validate_placement(&self.board, &self.racks[position], placement).map_err(
            |error| {
                debug!(%error, "Rejected placement");
                error
            },
        )?;
        let score = score_play(&self.board, &play);

        let rack = &mut self.racks[position];
        for (coordinate, tile) in play.cells() {
            rack.remove(tile.tile()).unwrap_or_else(|error| {
                unreachable!("validated tiles should be in the rack: {error}")
            });
            self.board.place(coordinate, tile).unwrap_or_else(|error| {
                unreachable!("validated spaces should be empty: {error}")
            });
        }
        // when the bag is empty, no more tiles will be drawn
        rack.refill(&mut self.bag);

        let points = score.total();
        self.players[position].score += points;

        self.advance_turn();
        if self.racks[position].is_empty() && self.bag.is_empty() {
            self.state = GameState::GameOver;
        }

        let message = self.play_message(position, &score);
        info!(
            player_id,
            points,
            words = %score.words().join(", "),
            state = %self.state,
            "Accepted placement"
        );

        Ok(Outcome {
            message,
            points,
            state: self.state,
        })
    }

    fn play_message(&self, position: usize, score: &Score) -> String {
        let words = score.words().map(|word| &word.word).join(", ");
        let mut message = format!(
            "{} played {} for {} points",
            self.players[position].name,
            words,
            score.total()
        );
        if score.bonus > 0 {
            message.push_str(&format!(", including a {} point bonus", score.bonus));
        }
        if self.state == GameState::GameOver {
            message.push_str(". The game is over");
        }
        message
    }
}
