//! Dictionary loading and the process-wide cache.
//!
//! The word list is a newline-delimited asset loaded once, outside the
//! reducer. Gameplay never waits on it: until the cache is populated,
//! validation fails open and every word counts as valid. A failed load is
//! logged and leaves the cache empty, which degrades to the same fail-open
//! behavior for the rest of the session.
//!
//! Tests construct a [`Dictionary`] directly via [`Dictionary::from_words`]
//! instead of going through the global cache.

use once_cell::sync::OnceCell;
use rustc_hash::FxHashSet;
use std::io::BufRead;
use std::path::Path;

/// Dictionary load failure. The only fallible boundary in the crate.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),
    #[error("word list is empty")]
    Empty,
}

/// An uppercase word set.
#[derive(Clone, Debug, Default)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Build from any iterator of words. Words are trimmed and uppercased;
    /// blanks are skipped.
    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_uppercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Read a newline-delimited word list.
    pub fn from_reader(reader: impl BufRead) -> Result<Self, DictionaryError> {
        let mut words = FxHashSet::default();
        for line in reader.lines() {
            let word = line?.trim().to_uppercase();
            if !word.is_empty() {
                words.insert(word);
            }
        }
        if words.is_empty() {
            return Err(DictionaryError::Empty);
        }
        Ok(Self { words })
    }

    /// Load a word-list file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Whether a word is in the dictionary. Case-insensitive.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_uppercase())
    }

    /// Number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary holds no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// The single process-wide dictionary instance.
static DICTIONARY: OnceCell<Dictionary> = OnceCell::new();

/// Load the global dictionary from a file, once.
///
/// Subsequent calls are no-ops. A load failure is logged as a warning and
/// the cache stays empty, so queries keep failing open.
pub fn ensure_loaded(path: impl AsRef<Path>) {
    if DICTIONARY.get().is_some() {
        return;
    }
    match Dictionary::from_path(path.as_ref()) {
        Ok(dict) => {
            log::info!("loaded dictionary ({} words)", dict.len());
            // A racing loader may have won; either value is equivalent.
            let _ = DICTIONARY.set(dict);
        }
        Err(err) => {
            log::warn!(
                "failed to load dictionary from {}: {err}; word validation disabled",
                path.as_ref().display()
            );
        }
    }
}

/// The global dictionary, if loading has completed.
///
/// `None` means not loaded (or load failed): callers must fail open.
#[must_use]
pub fn global() -> Option<&'static Dictionary> {
    DICTIONARY.get()
}
