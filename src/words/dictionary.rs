//! Dictionary collaborator.
//!
//! The rule engine only asks whether a word is legal. `WordList` is the
//! in-memory implementation used by the binary and the tests, built from a
//! word-per-line source.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use tracing::debug;

/// Answers whether an uppercase word is a legal dictionary word.
///
/// Implementations must return false for malformed input instead of failing.
pub trait Dictionary {
    fn contains(&self, word: &str) -> bool;
}

/// Errors that can occur while loading a word list.
#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    #[error("failed to read word list '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read word list: {0}")]
    Read(#[from] std::io::Error),
}

/// Normalises a raw word-list entry.
///
/// Returns the uppercase form of a word of at least two letters `A-Z`, or
/// None for anything else (apostrophes, hyphens, digits, single letters).
pub fn normalise_word(raw: &str) -> Option<String> {
    let word = raw.trim().to_uppercase();
    if word.len() < 2 || !word.bytes().all(|b| b.is_ascii_uppercase()) {
        return None;
    }
    Some(word)
}

/// A set of normalised dictionary words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a word list from raw entries, skipping any that fail normalisation.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = WordList::new();
        for w in words {
            list.insert(w.as_ref());
        }
        list
    }

    /// Reads one entry per line.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, WordListError> {
        let mut list = WordList::new();
        let mut skipped = 0usize;
        for line in BufReader::new(reader).lines() {
            if !list.insert(&line?) {
                skipped += 1;
            }
        }
        debug!(words = list.len(), skipped, "loaded word list");
        Ok(list)
    }

    /// Loads a word list file with one entry per line.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, WordListError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| WordListError::Open {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_reader(file)
    }

    /// Inserts a raw entry. Returns false if it was malformed or already present.
    pub fn insert(&mut self, raw: &str) -> bool {
        match normalise_word(raw) {
            Some(word) => self.words.insert(word),
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordList {
    fn contains(&self, word: &str) -> bool {
        if word.is_empty() || !word.bytes().all(|b| b.is_ascii_uppercase()) {
            return false;
        }
        self.words.contains(word)
    }
}
