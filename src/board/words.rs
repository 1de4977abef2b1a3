//! Word extraction from contiguous tile runs.
//!
//! A horizontal word starts at any occupied cell with no tile to its left
//! and extends right through contiguous tiles; vertical words start below an
//! empty cell and extend down. Runs of a single tile are not words; a lone
//! tile yields nothing.

use smallvec::SmallVec;

use crate::board::grid::Board;
use crate::core::position::Pos;

/// A word read off the board, with the cells it occupies in reading order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractedWord {
    pub word: String,
    pub positions: SmallVec<[Pos; 8]>,
}

/// Extract every horizontal and vertical word of length ≥ 2.
///
/// Order of the returned words is unspecified; callers treat the result as a
/// set.
#[must_use]
pub fn extract_words(board: &Board) -> Vec<ExtractedWord> {
    let mut words = Vec::new();

    for (&pos, _) in board.iter() {
        // Horizontal: only start where there is no tile to the left
        if !board.is_occupied(pos.left()) {
            if let Some(word) = collect_run(board, pos, Pos::right) {
                words.push(word);
            }
        }

        // Vertical: only start where there is no tile above
        if !board.is_occupied(pos.up()) {
            if let Some(word) = collect_run(board, pos, Pos::down) {
                words.push(word);
            }
        }
    }

    words
}

/// Walk from `start` in the direction given by `step`, collecting contiguous
/// tiles. Returns `None` for runs shorter than 2.
fn collect_run(board: &Board, start: Pos, step: fn(Pos) -> Pos) -> Option<ExtractedWord> {
    let mut word = String::new();
    let mut positions = SmallVec::new();

    let mut cursor = start;
    while let Some(tile) = board.get(cursor) {
        word.push(tile.letter.as_char());
        positions.push(cursor);
        cursor = step(cursor);
    }

    if positions.len() >= 2 {
        Some(ExtractedWord { word, positions })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tile::{Letter, Tile, TileId};

    fn board_of(cells: &[(i32, i32, Letter)]) -> Board {
        let mut board = Board::new();
        for (i, &(row, col, letter)) in cells.iter().enumerate() {
            board.place(Pos::new(row, col), Tile::new(TileId::new(i as u32), letter));
        }
        board
    }

    fn words_of(board: &Board) -> Vec<String> {
        let mut words: Vec<_> = extract_words(board).into_iter().map(|w| w.word).collect();
        words.sort();
        words
    }

    #[test]
    fn test_horizontal_word() {
        let board = board_of(&[(0, 0, Letter::H), (0, 1, Letter::I)]);
        let words = extract_words(&board);

        assert_eq!(words.len(), 1);
        assert_eq!(words[0].word, "HI");
        assert_eq!(words[0].positions.as_slice(), &[Pos::new(0, 0), Pos::new(0, 1)]);
    }

    #[test]
    fn test_lone_tile_yields_nothing() {
        let board = board_of(&[(5, 5, Letter::X)]);
        assert!(extract_words(&board).is_empty());
    }

    #[test]
    fn test_vertical_word() {
        let board = board_of(&[(0, 0, Letter::U), (1, 0, Letter::P)]);
        let words = extract_words(&board);

        assert_eq!(words.len(), 1);
        assert_eq!(words[0].word, "UP");
        assert_eq!(words[0].positions.as_slice(), &[Pos::new(0, 0), Pos::new(1, 0)]);
    }

    #[test]
    fn test_crossing_words() {
        // C A T horizontally, with A R vertically below the A
        let board = board_of(&[
            (0, 0, Letter::C),
            (0, 1, Letter::A),
            (0, 2, Letter::T),
            (1, 1, Letter::R),
        ]);

        assert_eq!(words_of(&board), vec!["AR", "CAT"]);
    }

    #[test]
    fn test_run_not_split_by_interior_start() {
        // Only one horizontal word even though three cells could "start" one
        let board = board_of(&[(2, 4, Letter::T), (2, 5, Letter::E), (2, 6, Letter::A)]);
        assert_eq!(words_of(&board), vec!["TEA"]);
    }

    #[test]
    fn test_negative_coordinates() {
        let board = board_of(&[(-1, -2, Letter::N), (-1, -1, Letter::O)]);
        assert_eq!(words_of(&board), vec!["NO"]);
    }

    #[test]
    fn test_parallel_words() {
        // Two stacked horizontal words also form vertical pairs
        let board = board_of(&[
            (0, 0, Letter::A),
            (0, 1, Letter::T),
            (1, 0, Letter::B),
            (1, 1, Letter::E),
        ]);

        assert_eq!(words_of(&board), vec!["AB", "AT", "BE", "TE"]);
    }
}
