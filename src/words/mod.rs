//! Word handling: the history of played words and the dictionary seam.

pub mod dictionary;
pub mod trie;

pub use dictionary::{normalise_word, Dictionary, WordList, WordListError};
pub use trie::WordTrie;
