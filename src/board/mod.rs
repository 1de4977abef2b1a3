//! Board grid, connectivity, and word extraction.

pub mod grid;
pub mod words;

pub use grid::Board;
pub use words::{extract_words, ExtractedWord};
