//! Letters and tiles.
//!
//! A [`Tile`] is created once by the pool generator and never mutated
//! afterwards; it moves by value between the pool, the hand, and the board.
//! Point values come from a fixed Scrabble-like table and are baked into the
//! tile at creation so snapshots stay self-contained.

use serde::{Deserialize, Serialize};

/// One of the 26 uppercase letters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[rustfmt::skip]
pub enum Letter {
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
}

impl Letter {
    /// All letters in alphabetical order.
    #[rustfmt::skip]
    pub const ALL: [Letter; 26] = [
        Letter::A, Letter::B, Letter::C, Letter::D, Letter::E, Letter::F,
        Letter::G, Letter::H, Letter::I, Letter::J, Letter::K, Letter::L,
        Letter::M, Letter::N, Letter::O, Letter::P, Letter::Q, Letter::R,
        Letter::S, Letter::T, Letter::U, Letter::V, Letter::W, Letter::X,
        Letter::Y, Letter::Z,
    ];

    /// Alphabetical index (A = 0 .. Z = 25).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Letter at the given alphabetical index.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Letter> {
        Letter::ALL.get(index).copied()
    }

    /// Uppercase character for this letter.
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'A' + self as u8) as char
    }

    /// Point value from the fixed letter score table.
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Letter::A | Letter::E | Letter::I | Letter::L | Letter::N | Letter::O
            | Letter::R | Letter::S | Letter::T | Letter::U => 1,
            Letter::D | Letter::G => 2,
            Letter::B | Letter::C | Letter::M | Letter::P => 3,
            Letter::F | Letter::H | Letter::V | Letter::W | Letter::Y => 4,
            Letter::K => 5,
            Letter::J | Letter::X => 8,
            Letter::Q | Letter::Z => 10,
        }
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Unique tile identifier, allocated sequentially by the pool generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    /// Create a new tile ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// A single letter tile.
///
/// Immutable after creation. The same tile never appears in more than one of
/// {pool, hand, board} at a time; containers move it, never copy it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Unique identity, stable across the tile's whole lifecycle.
    pub id: TileId,
    /// The letter printed on the tile.
    pub letter: Letter,
    /// Point value, derived from the letter at creation.
    pub points: u32,
}

impl Tile {
    /// Create a tile for the given letter.
    #[must_use]
    pub fn new(id: TileId, letter: Letter) -> Self {
        Self {
            id,
            letter,
            points: letter.points(),
        }
    }
}
