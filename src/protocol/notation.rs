//! Board notation encoding and decoding.
//!
//! A compact single-line form of a game snapshot, used by the `position`
//! and `board` commands of the line protocol.
//!
//! Format: `<rows>x<columns>/<letters>/<states>/<turn>/<p1>,<p2>/<passes>/<words>`
//!
//! - letters: one `A-Z` per cell in row-major order
//! - states: one character per cell: `.` unplayed, `a`/`A` player 1
//!   owned/locked, `b`/`B` player 2 owned/locked
//! - turn: `1`, `2`, or `x` once the game is over
//! - words: played words in play order separated by commas, or `-`

use crate::board::LetterState;
use crate::game::{GameState, Snapshot};

/// Errors that can occur during notation parsing.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("expected 7 sections separated by '/', got {0}")]
    WrongSectionCount(usize),

    #[error("invalid grid dimensions: '{0}'")]
    InvalidDimensions(String),

    #[error("invalid grid letter: '{0}'")]
    InvalidLetter(char),

    #[error("invalid cell state character: '{0}'")]
    InvalidState(char),

    #[error("expected {expected} cells, got {letters} letters and {states} states")]
    CellCountMismatch {
        expected: usize,
        letters: usize,
        states: usize,
    },

    #[error("invalid turn: '{0}'")]
    InvalidTurn(String),

    #[error("invalid scores: '{0}'")]
    InvalidScores(String),

    #[error("invalid pass count: '{0}'")]
    InvalidPasses(String),

    #[error("invalid played word: '{0}'")]
    InvalidWord(String),
}

/// Parses the dimensions section (e.g., "5x5").
fn parse_dimensions(s: &str) -> Result<(usize, usize), NotationError> {
    let invalid = || NotationError::InvalidDimensions(s.to_string());
    let (rows, columns) = s.split_once('x').ok_or_else(invalid)?;
    let rows: usize = rows.parse().map_err(|_| invalid())?;
    let columns: usize = columns.parse().map_err(|_| invalid())?;
    if rows == 0 || columns == 0 {
        return Err(invalid());
    }
    Ok((rows, columns))
}

fn parse_letters(s: &str) -> Result<Vec<char>, NotationError> {
    s.chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                Ok(c)
            } else {
                Err(NotationError::InvalidLetter(c))
            }
        })
        .collect()
}

fn parse_states(s: &str) -> Result<Vec<LetterState>, NotationError> {
    s.chars()
        .map(|c| LetterState::from_notation_char(c).ok_or(NotationError::InvalidState(c)))
        .collect()
}

fn parse_turn(s: &str) -> Result<GameState, NotationError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => {
            GameState::from_notation_char(c).ok_or_else(|| NotationError::InvalidTurn(s.to_string()))
        }
        _ => Err(NotationError::InvalidTurn(s.to_string())),
    }
}

/// Parses the scores section (e.g., "11,14").
fn parse_scores(s: &str) -> Result<(i32, i32), NotationError> {
    let invalid = || NotationError::InvalidScores(s.to_string());
    let (p1, p2) = s.split_once(',').ok_or_else(invalid)?;
    let p1 = p1.parse().map_err(|_| invalid())?;
    let p2 = p2.parse().map_err(|_| invalid())?;
    Ok((p1, p2))
}

/// Parses the played words section (comma-separated entries or "-").
fn parse_words(s: &str) -> Result<Vec<String>, NotationError> {
    if s == "-" {
        return Ok(Vec::new());
    }
    s.split(',')
        .map(|w| {
            if !w.is_empty() && w.bytes().all(|b| b.is_ascii_uppercase()) {
                Ok(w.to_string())
            } else {
                Err(NotationError::InvalidWord(w.to_string()))
            }
        })
        .collect()
}

/// Parses a notation string into a snapshot.
pub fn parse_notation(s: &str) -> Result<Snapshot, NotationError> {
    let sections: Vec<&str> = s.trim().split('/').collect();
    if sections.len() != 7 {
        return Err(NotationError::WrongSectionCount(sections.len()));
    }

    let (rows, columns) = parse_dimensions(sections[0])?;
    let letters = parse_letters(sections[1])?;
    let states = parse_states(sections[2])?;
    let expected = rows
        .checked_mul(columns)
        .ok_or_else(|| NotationError::InvalidDimensions(sections[0].to_string()))?;
    if letters.len() != expected || states.len() != expected {
        return Err(NotationError::CellCountMismatch {
            expected,
            letters: letters.len(),
            states: states.len(),
        });
    }
    let state = parse_turn(sections[3])?;
    let (player1_score, player2_score) = parse_scores(sections[4])?;
    let consecutive_passes = sections[5]
        .parse()
        .map_err(|_| NotationError::InvalidPasses(sections[5].to_string()))?;
    let played_words = parse_words(sections[6])?;

    Ok(Snapshot {
        rows,
        columns,
        letters,
        states,
        state,
        player1_score,
        player2_score,
        consecutive_passes,
        played_words,
    })
}

/// Encodes a snapshot into its notation string.
pub fn encode_notation(snapshot: &Snapshot) -> String {
    let letters: String = snapshot.letters.iter().collect();
    let states: String = snapshot.states.iter().map(|s| s.notation_char()).collect();
    let words = if snapshot.played_words.is_empty() {
        "-".to_string()
    } else {
        snapshot.played_words.join(",")
    };

    format!(
        "{}x{}/{}/{}/{}/{},{}/{}/{}",
        snapshot.rows,
        snapshot.columns,
        letters,
        states,
        snapshot.state.notation_char(),
        snapshot.player1_score,
        snapshot.player2_score,
        snapshot.consecutive_passes,
        words
    )
}
