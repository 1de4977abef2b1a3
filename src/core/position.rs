//! Grid positions for the sparse board.
//!
//! Positions are unbounded integers; the UI enforces whatever visible grid it
//! wants. Serialization uses the `"row,col"` string form so board maps stay
//! valid JSON objects and snapshots round-trip losslessly.

use serde::de::{self, Deserialize, Deserializer};
use serde::{Serialize, Serializer};
use std::str::FromStr;

/// A cell on the board grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    /// Create a position.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The four orthogonally adjacent positions (up, down, left, right).
    #[must_use]
    pub const fn neighbors(self) -> [Pos; 4] {
        [
            Pos::new(self.row - 1, self.col),
            Pos::new(self.row + 1, self.col),
            Pos::new(self.row, self.col - 1),
            Pos::new(self.row, self.col + 1),
        ]
    }

    /// Position one cell to the left.
    #[must_use]
    pub const fn left(self) -> Pos {
        Pos::new(self.row, self.col - 1)
    }

    /// Position one cell to the right.
    #[must_use]
    pub const fn right(self) -> Pos {
        Pos::new(self.row, self.col + 1)
    }

    /// Position one cell above.
    #[must_use]
    pub const fn up(self) -> Pos {
        Pos::new(self.row - 1, self.col)
    }

    /// Position one cell below.
    #[must_use]
    pub const fn down(self) -> Pos {
        Pos::new(self.row + 1, self.col)
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// Error parsing a `"row,col"` key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsePosError;

impl std::fmt::Display for ParsePosError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "expected position key of the form \"row,col\"")
    }
}

impl std::error::Error for ParsePosError {}

impl FromStr for Pos {
    type Err = ParsePosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s.split_once(',').ok_or(ParsePosError)?;
        Ok(Pos {
            row: row.trim().parse().map_err(|_| ParsePosError)?,
            col: col.trim().parse().map_err(|_| ParsePosError)?,
        })
    }
}

impl Serialize for Pos {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Pos {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        key.parse().map_err(de::Error::custom)
    }
}
