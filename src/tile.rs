use num_derive::FromPrimitive;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The number of blank [tiles](Tile) in a full bag. `2` blanks.
pub const BLANKS_LEN: usize = 2;

/// Point value and number of copies of each [`Letter`] in letter order, following
/// the standard English distribution.
const LETTER_TABLE: [(usize, usize); Letter::LETTERS_LEN] = [
    (1, 9),
    (3, 2),
    (3, 2),
    (2, 4),
    (1, 12),
    (4, 2),
    (2, 3),
    (4, 2),
    (1, 9),
    (8, 1),
    (5, 1),
    (1, 4),
    (3, 2),
    (1, 6),
    (1, 8),
    (3, 2),
    (10, 1),
    (1, 6),
    (1, 4),
    (1, 6),
    (1, 4),
    (4, 2),
    (4, 2),
    (8, 1),
    (4, 2),
    (10, 1),
];

const fn bag_len() -> usize {
    let mut len = BLANKS_LEN;
    let mut index = 0;
    while index < Letter::LETTERS_LEN {
        len += LETTER_TABLE[index].1;
        index += 1;
    }
    len
}

/// The number of [tiles](Tile) in a full bag. `100` tiles.
///
/// # See Also
///
/// * [tiles]
/// * [Bag::new](crate::Bag::new)
pub const BAG_LEN: usize = bag_len();
const _: () = assert!(BAG_LEN > BLANKS_LEN);

/// Describes one of the `26` letters printed on a [`Tile`].
#[derive(
    Debug,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    FromPrimitive,
    Serialize,
    Deserialize,
)]
pub enum Letter {
    /// `0`.
    A = 0,
    /// `1`.
    B = 1,
    /// `2`.
    C = 2,
    /// `3`.
    D = 3,
    /// `4`.
    E = 4,
    /// `5`.
    F = 5,
    /// `6`.
    G = 6,
    /// `7`.
    H = 7,
    /// `8`.
    I = 8,
    /// `9`.
    J = 9,
    /// `10`.
    K = 10,
    /// `11`.
    L = 11,
    /// `12`.
    M = 12,
    /// `13`.
    N = 13,
    /// `14`.
    O = 14,
    /// `15`.
    P = 15,
    /// `16`.
    Q = 16,
    /// `17`.
    R = 17,
    /// `18`.
    S = 18,
    /// `19`.
    T = 19,
    /// `20`.
    U = 20,
    /// `21`.
    V = 21,
    /// `22`.
    W = 22,
    /// `23`.
    X = 23,
    /// `24`.
    Y = 24,
    /// `25`.
    Z = 25,
}

impl Letter {
    /// The number of [`Letter`] variants. 26 letters.
    pub const LETTERS_LEN: usize = 26;

    /// # Returns
    ///
    /// An array of all [`Letter`] variants in order.
    pub fn letters() -> [Letter; Letter::LETTERS_LEN] {
        [
            Letter::A,
            Letter::B,
            Letter::C,
            Letter::D,
            Letter::E,
            Letter::F,
            Letter::G,
            Letter::H,
            Letter::I,
            Letter::J,
            Letter::K,
            Letter::L,
            Letter::M,
            Letter::N,
            Letter::O,
            Letter::P,
            Letter::Q,
            Letter::R,
            Letter::S,
            Letter::T,
            Letter::U,
            Letter::V,
            Letter::W,
            Letter::X,
            Letter::Y,
            Letter::Z,
        ]
    }

    /// # Returns
    ///
    /// The points scored by a concrete [tile](Tile) showing this letter.
    #[inline]
    pub fn points(self) -> usize {
        LETTER_TABLE[self as usize].0
    }

    /// # Returns
    ///
    /// The number of concrete [tiles](Tile) showing this letter in a full bag.
    #[inline]
    pub fn count(self) -> usize {
        LETTER_TABLE[self as usize].1
    }

    /// Reads an ASCII letter in either case.
    ///
    /// # Returns
    ///
    /// The matching [`Letter`] or [None] if `char` is not an ASCII letter.
    pub fn from_char(char: char) -> Option<Letter> {
        if !char.is_ascii_alphabetic() {
            return None;
        }
        num::FromPrimitive::from_u8(char.to_ascii_uppercase() as u8 - b'A')
    }

    /// # Returns
    ///
    /// The uppercase ASCII character of this letter.
    #[inline]
    pub fn as_char(self) -> char {
        (b'A' + self as u8) as char
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl Distribution<Letter> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Letter {
        let index = rng.gen_range(0..Letter::LETTERS_LEN);
        num::FromPrimitive::from_usize(index).unwrap_or_else(|| {
            unreachable!(
                "index ({:?}) should be matched since letters cover all indexes \
                in range 0..Letter::LETTERS_LEN (0..{:?}).",
                index,
                Letter::LETTERS_LEN
            );
        })
    }
}

/// Describes a tile held in the bag or in a rack.
///
/// A blank has no letter until it is placed on the board, where it becomes a
/// [`PlacedTile::Blank`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Tile {
    /// A tile printed with a letter.
    Letter(Letter),
    /// A tile worth `0` points which can be played as any letter.
    Blank,
}

impl Tile {
    /// # Returns
    ///
    /// The points scored by this tile before any bonus.
    #[inline]
    pub fn points(self) -> usize {
        match self {
            Tile::Letter(letter) => letter.points(),
            Tile::Blank => 0,
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tile::Letter(letter) => write!(f, "{letter}"),
            Tile::Blank => write!(f, "?"),
        }
    }
}

impl Distribution<Tile> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Tile {
        // roughly the share of blanks in a full bag
        if rng.gen_ratio(BLANKS_LEN as u32, BAG_LEN as u32) {
            Tile::Blank
        } else {
            Tile::Letter(rng.gen())
        }
    }
}

/// Describes a tile once it has been placed on the board.
///
/// A blank keeps its identity (it still scores `0` points) while also showing the letter
/// chosen for it at placement time.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum PlacedTile {
    /// A [letter tile](Tile::Letter) showing its own letter.
    Concrete(Letter),
    /// A [blank tile](Tile::Blank) showing the letter assigned to it.
    Blank(Letter),
}

impl PlacedTile {
    /// # Returns
    ///
    /// The letter shown on the board.
    #[inline]
    pub fn letter(self) -> Letter {
        match self {
            PlacedTile::Concrete(letter) | PlacedTile::Blank(letter) => letter,
        }
    }

    /// # Returns
    ///
    /// The points scored by this tile before any bonus. Blanks score `0`.
    #[inline]
    pub fn points(self) -> usize {
        self.tile().points()
    }

    /// # Returns
    ///
    /// The [tile](Tile) which must be taken from a rack to place this tile.
    #[inline]
    pub fn tile(self) -> Tile {
        match self {
            PlacedTile::Concrete(letter) => Tile::Letter(letter),
            PlacedTile::Blank(_) => Tile::Blank,
        }
    }
}

impl fmt::Display for PlacedTile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacedTile::Concrete(letter) => write!(f, "{letter}"),
            PlacedTile::Blank(letter) => write!(f, "{}", letter.as_char().to_ascii_lowercase()),
        }
    }
}

/// # Returns
///
/// A vector of every [tile](Tile) in a full bag, in letter order followed by the blanks.
pub fn tiles() -> Vec<Tile> {
    Letter::letters()
        .into_iter()
        .flat_map(|letter| std::iter::repeat(Tile::Letter(letter)).take(letter.count()))
        .chain(std::iter::repeat(Tile::Blank).take(BLANKS_LEN))
        .collect()
}
