//! Persistable game snapshot.
//!
//! A `Snapshot` holds everything needed to rebuild a `GameModel`: the grid
//! letters and states, whose turn it is, both committed scores, plus the
//! played-word history and the pending pass count. The staged word is
//! transient and never saved.

use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use super::model::{GameModel, GameResult, GameState};
use crate::board::{Grid, GridError, Letter, LetterState};
use crate::words::WordTrie;

/// Errors that can occur when restoring or decoding a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("{letters} letters but {states} cell states")]
    LengthMismatch { letters: usize, states: usize },

    #[error("invalid grid letter '{0}'")]
    InvalidLetter(char),

    #[error("invalid played word '{0}'")]
    InvalidWord(String),

    #[error("failed to decode snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// In-memory form of a saved game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub rows: usize,
    pub columns: usize,
    pub letters: Vec<char>,
    pub states: Vec<LetterState>,
    pub state: GameState,
    pub player1_score: i32,
    pub player2_score: i32,
    #[serde(default)]
    pub consecutive_passes: u32,
    /// Played words in play order.
    #[serde(default)]
    pub played_words: Vec<String>,
}

impl Snapshot {
    /// Encodes the snapshot as JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Snapshot, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl GameModel {
    /// Captures the persistent state of the game.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            rows: self.grid.rows(),
            columns: self.grid.columns(),
            letters: self.grid.cells().iter().map(|c| c.character).collect(),
            states: self.grid.cells().iter().map(|c| c.state).collect(),
            state: self.state,
            player1_score: self.player1_score,
            player2_score: self.player2_score,
            consecutive_passes: self.consecutive_passes,
            played_words: self.played.words(),
        }
    }

    /// Rebuilds a game from a snapshot.
    ///
    /// Scores are taken as saved. A finished game gets its result from the
    /// saved scores.
    pub fn from_snapshot(snapshot: &Snapshot, config: &GameConfig) -> Result<Self, SnapshotError> {
        if snapshot.letters.len() != snapshot.states.len() {
            return Err(SnapshotError::LengthMismatch {
                letters: snapshot.letters.len(),
                states: snapshot.states.len(),
            });
        }
        let cells = snapshot
            .letters
            .iter()
            .zip(&snapshot.states)
            .map(|(&c, &s)| Letter::with_state(c, s).ok_or(SnapshotError::InvalidLetter(c)))
            .collect::<Result<Vec<_>, _>>()?;
        let grid = Grid::from_cells(snapshot.rows, snapshot.columns, cells)?;

        let mut played = WordTrie::new();
        for word in &snapshot.played_words {
            if played.add(word).is_none() {
                return Err(SnapshotError::InvalidWord(word.clone()));
            }
        }

        let result = (snapshot.state == GameState::GameOver)
            .then(|| GameResult::from_scores(snapshot.player1_score, snapshot.player2_score));

        Ok(GameModel {
            grid,
            played,
            state: snapshot.state,
            result,
            player1_score: snapshot.player1_score,
            player2_score: snapshot.player2_score,
            staged: Vec::new(),
            consecutive_passes: snapshot.consecutive_passes,
            pass_limit: config.pass_limit,
        })
    }
}
