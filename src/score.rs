use crate::{
    Board, Coordinate, Line, PlacedTile, ValidPlay, CENTER, FULL_RACK_BONUS, RACK_CAPACITY,
};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::{fmt, iter};

/// A word formed by a play with the points it earned.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ScoredWord {
    /// The letters of the word.
    pub word: String,
    /// The first space of the word.
    pub start: Coordinate,
    /// The line the word is read along.
    pub line: Line,
    /// The points earned by the word, multipliers included.
    pub points: usize,
}

impl fmt::Display for ScoredWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.word, self.points)
    }
}

/// The points earned by a [valid play](ValidPlay).
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Score {
    /// The word along the line of the play.
    pub main_word: ScoredWord,
    /// The words across the line of the play through each new [tile](PlacedTile).
    pub cross_words: Vec<ScoredWord>,
    /// Extra points for emptying a full rack.
    pub bonus: usize,
}

impl Score {
    /// # Returns
    ///
    /// The sum of the points of every word and the bonus.
    pub fn total(&self) -> usize {
        self.words().map(|word| word.points).sum::<usize>() + self.bonus
    }

    /// # Returns
    ///
    /// An iterator of the main word followed by the cross words.
    pub fn words(&self) -> impl Iterator<Item = &ScoredWord> {
        iter::once(&self.main_word).chain(&self.cross_words)
    }
}

/// Computes the points earned by `play` on `board`, where `board` does not hold the new
/// [tiles](PlacedTile) yet.
///
/// # Points Calculation
///
/// The main word is the longest run of [tiles](PlacedTile) along the line of the play through
/// the new [tiles](PlacedTile). A cross word is the run across the line through one new
/// [tile](PlacedTile), when it holds at least `2` [tiles](PlacedTile).
///
/// Each new [tile](PlacedTile) earns its points times the
/// [letter multiplier](crate::SpaceType::letter_multiplier) of its space, while
/// [tiles](PlacedTile) already on the board earn their face value. The sum of a word is
/// multiplied by the highest [word multiplier](crate::SpaceType::word_multiplier) among its
/// new [tiles](PlacedTile). [Blanks](PlacedTile::Blank) always earn `0` points.
///
/// Placing [`RACK_CAPACITY`] [tiles](PlacedTile) at once earns [`FULL_RACK_BONUS`] extra
/// points.
pub fn score_play(board: &Board, play: &ValidPlay) -> Score {
    let main_word = play
        .cells()
        .next()
        .map(|(coordinate, _)| score_word(board, play, coordinate, play.line))
        .unwrap_or_else(|| ScoredWord {
            word: String::new(),
            start: CENTER,
            line: play.line,
            points: 0,
        });

    let cross_line = play.line.perpendicular();
    let cross_words = play
        .cells()
        .map(|(coordinate, _)| score_word(board, play, coordinate, cross_line))
        .filter(|word| word.word.len() > 1)
        .collect_vec();

    let bonus = if play.tiles.len() == RACK_CAPACITY {
        FULL_RACK_BONUS
    } else {
        0
    };

    Score {
        main_word,
        cross_words,
        bonus,
    }
}

fn score_word(board: &Board, play: &ValidPlay, through: Coordinate, line: Line) -> ScoredWord {
    let tile_at = |coordinate: Coordinate| {
        play.tile_at(coordinate)
            .map(|tile| (coordinate, tile, true))
            .or_else(|| board.tile_at(coordinate).map(|tile| (coordinate, tile, false)))
    };

    let start = iter::successors(Some(through), |&coordinate| line.step_back(coordinate))
        .map(tile_at)
        .while_some()
        .last()
        .map_or(through, |(coordinate, _, _)| coordinate);

    let mut word = String::new();
    let mut points = 0;
    let mut word_multiplier = 1;
    for (coordinate, tile, is_new) in
        iter::successors(Some(start), |&coordinate| line.step(coordinate))
            .map(tile_at)
            .while_some()
    {
        word.push(tile.letter().as_char());
        if is_new {
            let space_type = board.space_type_at(coordinate);
            points += tile.points() * space_type.letter_multiplier();
            word_multiplier = word_multiplier.max(space_type.word_multiplier());
        } else {
            points += tile.points();
        }
    }

    ScoredWord {
        word,
        start,
        line,
        points: points * word_multiplier,
    }
}
