//! Dictionary loading and board word validation.

pub mod dictionary;
pub mod validate;

pub use dictionary::{ensure_loaded, global, Dictionary, DictionaryError};
pub use validate::{validate_board_words, WordValidation};
