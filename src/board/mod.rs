//! Board representation.
//!
//! Contains the letter grid, per-cell ownership states, and the players
//! that claim them.

pub mod grid;
pub mod letter;

pub use grid::{Grid, GridError, CONSONANTS, VOWELS};
pub use letter::{Letter, LetterState, Player};
