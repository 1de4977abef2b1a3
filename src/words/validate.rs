//! Dictionary validation of the whole board.
//!
//! Extracted words are checked against the dictionary; a word that misses
//! marks every tile it touches so the UI can highlight the offending cells.
//! With no dictionary available the board is lexically valid by definition
//! (fail-open).

use rustc_hash::FxHashSet;

use crate::board::grid::Board;
use crate::board::words::extract_words;
use crate::core::tile::TileId;
use crate::words::dictionary::Dictionary;

/// Outcome of checking every board word against the dictionary.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordValidation {
    /// Whether every extracted word is in the dictionary.
    pub is_valid: bool,
    /// Tiles belonging to at least one invalid word.
    pub invalid_tiles: FxHashSet<TileId>,
}

impl WordValidation {
    fn valid() -> Self {
        Self {
            is_valid: true,
            invalid_tiles: FxHashSet::default(),
        }
    }
}

/// Validate all words on the board.
///
/// `dictionary` of `None` means "not loaded yet" and fails open. A tile in
/// several words is marked invalid if any of them misses.
#[must_use]
pub fn validate_board_words(board: &Board, dictionary: Option<&Dictionary>) -> WordValidation {
    let Some(dict) = dictionary else {
        return WordValidation::valid();
    };

    let mut invalid_tiles = FxHashSet::default();
    for extracted in extract_words(board) {
        if !dict.contains(&extracted.word) {
            for pos in &extracted.positions {
                if let Some(tile) = board.get(*pos) {
                    invalid_tiles.insert(tile.id);
                }
            }
        }
    }

    WordValidation {
        is_valid: invalid_tiles.is_empty(),
        invalid_tiles,
    }
}
