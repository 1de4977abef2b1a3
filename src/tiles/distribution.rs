//! Letter distribution generator.
//!
//! Each difficulty has a fixed base frequency table sized around the
//! official 144-tile bag. Any requested pool size is produced by scaling
//! every letter count independently and rounding, then applying the rounding
//! residual to E. E is frequent enough to absorb the error without visibly
//! distorting the mix; the correction is deliberately letter-asymmetric and
//! deterministic so identical settings always produce identical bags.

use serde::{Deserialize, Serialize};

use crate::core::settings::Difficulty;
use crate::core::tile::Letter;

/// Official 144-tile distribution.
#[rustfmt::skip]
const STANDARD_144: [u32; 26] = [
    13, 3, 3, 6, 18, 3, 4, 3, 12, 2, 2, 5, 3,
     8, 11, 3, 2, 9, 6, 9, 6, 3, 3, 2, 3, 2,
];

/// Easy: boost vowels and common consonants. Note Z = 0.
#[rustfmt::skip]
const EASY_144: [u32; 26] = [
    16, 2, 2, 5, 22, 2, 3, 2, 14, 1, 1, 6, 3,
    10, 13, 2, 1, 10, 7, 10, 7, 1, 1, 1, 2, 0,
];

/// Hard: fewer vowels, more uncommon letters.
#[rustfmt::skip]
const HARD_144: [u32; 26] = [
    10, 4, 4, 6, 14, 4, 5, 4, 9, 3, 3, 5, 4,
     7, 8, 4, 3, 8, 6, 8, 4, 4, 4, 3, 4, 3,
];


/// Per-letter tile counts, indexed by [`Letter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterCounts([u32; 26]);

impl LetterCounts {
    /// Count for a letter.
    #[must_use]
    pub const fn get(&self, letter: Letter) -> u32 {
        self.0[letter.index()]
    }

    /// Total number of tiles across all letters.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    /// Iterate `(letter, count)` pairs in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = (Letter, u32)> + '_ {
        Letter::ALL.iter().map(move |&l| (l, self.0[l.index()]))
    }
}

impl std::ops::Index<Letter> for LetterCounts {
    type Output = u32;

    fn index(&self, letter: Letter) -> &u32 {
        &self.0[letter.index()]
    }
}

/// Base 144-tile table for a difficulty.
#[must_use]
pub fn base_distribution(difficulty: Difficulty) -> LetterCounts {
    LetterCounts(match difficulty {
        Difficulty::Easy => EASY_144,
        Difficulty::Standard => STANDARD_144,
        Difficulty::Hard => HARD_144,
    })
}

/// Scale the base table for `difficulty` to exactly `pool_size` tiles.
///
/// Each letter is rounded independently; the residual lands on E, clamped to
/// a minimum of 1. No other letter is adjusted. Reproduce-exactly behavior:
/// pools generated from the same settings must be bit-compatible.
#[must_use]
pub fn distribution(difficulty: Difficulty, pool_size: usize) -> LetterCounts {
    let base = base_distribution(difficulty);
    let scale = pool_size as f64 / base.total() as f64;

    let mut counts = [0u32; 26];
    let mut total: i64 = 0;
    for (letter, base_count) in base.iter() {
        let scaled = (base_count as f64 * scale).round() as u32;
        counts[letter.index()] = scaled;
        total += scaled as i64;
    }

    let diff = pool_size as i64 - total;
    let e = Letter::E.index();
    counts[e] = (counts[e] as i64 + diff).max(1) as u32;

    LetterCounts(counts)
}
