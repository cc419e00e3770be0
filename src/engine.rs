//! Engine state management.
//!
//! Holds the current game, the dictionary, the game configuration, and the
//! RNG used for new grids, and answers the line protocol commands.

use std::io::Write;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::info;

use crate::board::{GridError, Player};
use crate::game::{ConfigError, GameConfig, GameModel, SnapshotError, StageError, MAX_DIMENSION};
use crate::protocol::notation::{encode_notation, parse_notation, NotationError};
use crate::words::{WordList, WordListError};

/// Errors surfaced by engine commands. None of them end the session.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("no game in progress")]
    NoGame,

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("invalid value {value:?} for option '{name}'")]
    InvalidOptionValue { name: String, value: Option<String> },

    #[error("failed to parse position: {0}")]
    Notation(#[from] NotationError),

    #[error("failed to restore position: {0}")]
    Snapshot(#[from] SnapshotError),

    #[error("failed to generate grid: {0}")]
    Grid(#[from] GridError),

    #[error("failed to stage word: {0}")]
    Stage(#[from] StageError),

    #[error(transparent)]
    WordList(#[from] WordListError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to write response: {0}")]
    Io(#[from] std::io::Error),
}

/// Holds the mutable state of the engine between commands.
pub struct Engine {
    pub game: Option<GameModel>,
    pub config: GameConfig,
    dictionary: WordList,
    rng: SmallRng,
}

impl Engine {
    /// Creates an engine with no game in progress.
    pub fn new(config: GameConfig, dictionary: WordList) -> Self {
        Engine {
            game: None,
            config,
            dictionary,
            rng: SmallRng::from_entropy(),
        }
    }

    pub fn dictionary(&self) -> &WordList {
        &self.dictionary
    }

    fn game_mut(&mut self) -> Result<&mut GameModel, EngineError> {
        self.game.as_mut().ok_or(EngineError::NoGame)
    }

    /// Applies a `setoption` command.
    pub fn set_option(&mut self, name: &str, value: Option<&str>) -> Result<(), EngineError> {
        let invalid = || EngineError::InvalidOptionValue {
            name: name.to_string(),
            value: value.map(str::to_string),
        };
        let parse_usize = || value.and_then(|v| v.parse::<usize>().ok()).ok_or_else(invalid);

        match name {
            "Rows" | "Columns" => {
                let mut config = self.config.clone();
                if name == "Rows" {
                    config.rows = parse_usize()?;
                } else {
                    config.columns = parse_usize()?;
                }
                config.validate()?;
                self.config = config;
            }
            "Vowels" => self.config.vowels = parse_usize()?,
            "PassLimit" => {
                self.config.pass_limit = match value {
                    None | Some("none") => None,
                    Some(v) => Some(v.parse().map_err(|_| invalid())?),
                };
            }
            "Seed" => {
                let seed = value.and_then(|v| v.parse::<u64>().ok()).ok_or_else(invalid)?;
                self.rng = SmallRng::seed_from_u64(seed);
            }
            "Dictionary" => {
                let path = value.ok_or_else(invalid)?;
                self.dictionary = WordList::load(path)?;
                info!(path, words = self.dictionary.len(), "dictionary loaded");
            }
            other => return Err(EngineError::UnknownOption(other.to_string())),
        }
        Ok(())
    }

    /// Handles the handshake: writes id, options, and `wgiok`.
    pub fn handle_wgi<W: Write>(&self, out: &mut W) -> Result<(), EngineError> {
        writeln!(out, "id name wordclaim")?;
        writeln!(
            out,
            "option name Rows type spin default {} min 1 max {}",
            self.config.rows, MAX_DIMENSION
        )?;
        writeln!(
            out,
            "option name Columns type spin default {} min 1 max {}",
            self.config.columns, MAX_DIMENSION
        )?;
        writeln!(out, "option name Vowels type spin default {} min 0 max 676", self.config.vowels)?;
        writeln!(out, "option name PassLimit type string default {}", self.pass_limit_label())?;
        writeln!(out, "option name Seed type string default <entropy>")?;
        writeln!(out, "option name Dictionary type string default <none>")?;
        writeln!(out, "wgiok")?;
        out.flush()?;
        Ok(())
    }

    fn pass_limit_label(&self) -> String {
        match self.config.pass_limit {
            Some(n) => n.to_string(),
            None => "none".to_string(),
        }
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) -> Result<(), EngineError> {
        writeln!(out, "readyok")?;
        out.flush()?;
        Ok(())
    }

    /// Starts a new game on a random grid and reports its position.
    pub fn new_game<W: Write>(&mut self, out: &mut W) -> Result<(), EngineError> {
        let game = GameModel::new(&self.config, &mut self.rng)?;
        info!(rows = self.config.rows, columns = self.config.columns, "new game");
        self.game = Some(game);
        self.handle_board(out)
    }

    /// Restores a game from board notation.
    pub fn set_position(&mut self, notation: &str) -> Result<(), EngineError> {
        let snapshot = parse_notation(notation)?;
        self.game = Some(GameModel::from_snapshot(&snapshot, &self.config)?);
        Ok(())
    }

    /// Stages a word; an empty cell list clears the staged word.
    pub fn stage(&mut self, cells: &[usize]) -> Result<(), EngineError> {
        let game = self.game_mut()?;
        if cells.is_empty() {
            game.clear_staged();
        } else {
            game.stage_word(cells)?;
        }
        Ok(())
    }

    /// Writes `preview <p1> <p2>` including the staged word's effect.
    pub fn handle_preview<W: Write>(&self, out: &mut W) -> Result<(), EngineError> {
        let game = self.game.as_ref().ok_or(EngineError::NoGame)?;
        writeln!(
            out,
            "preview {} {}",
            game.preview_score(Player::One),
            game.preview_score(Player::Two)
        )?;
        out.flush()?;
        Ok(())
    }

    /// Commits the staged word and writes the result and new position.
    pub fn handle_commit<W: Write>(&mut self, out: &mut W) -> Result<(), EngineError> {
        let game = self.game.as_mut().ok_or(EngineError::NoGame)?;
        let result = game.commit_turn(&self.dictionary);
        writeln!(out, "result {}", result.name())?;
        self.handle_board(out)
    }

    /// Passes the turn and writes the new position.
    pub fn handle_pass<W: Write>(&mut self, out: &mut W) -> Result<(), EngineError> {
        self.game_mut()?.pass_turn();
        self.handle_board(out)
    }

    /// Writes `position <notation>`, followed by `gameover <result>` once
    /// the game has ended.
    pub fn handle_board<W: Write>(&self, out: &mut W) -> Result<(), EngineError> {
        let game = self.game.as_ref().ok_or(EngineError::NoGame)?;
        writeln!(out, "position {}", encode_notation(&game.snapshot()))?;
        if let Some(result) = game.result() {
            writeln!(out, "gameover {}", result.name())?;
        }
        out.flush()?;
        Ok(())
    }
}
