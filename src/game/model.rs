//! Turn engine.
//!
//! `GameModel` owns the grid, the played-word history, the scores, and the
//! staged candidate word. It validates and commits turns, runs lock
//! propagation, and drives the player-turn / game-over state machine.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::config::GameConfig;
use crate::board::{Grid, GridError, LetterState, Player};
use crate::resolve::{claim_cells, recompute_lock_state};
use crate::words::{Dictionary, WordTrie};

/// Minimum number of cells in a playable word.
pub const MIN_WORD_LEN: usize = 2;

/// Whose turn it is, or whether the game has ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    Player1Turn,
    Player2Turn,
    GameOver,
}

impl GameState {
    /// The state in which `player` is to move.
    pub const fn turn_of(player: Player) -> GameState {
        match player {
            Player::One => GameState::Player1Turn,
            Player::Two => GameState::Player2Turn,
        }
    }

    /// The player to move, or None once the game is over.
    pub const fn active_player(self) -> Option<Player> {
        match self {
            GameState::Player1Turn => Some(Player::One),
            GameState::Player2Turn => Some(Player::Two),
            GameState::GameOver => None,
        }
    }

    /// Returns the single-character board notation.
    pub const fn notation_char(self) -> char {
        match self {
            GameState::Player1Turn => '1',
            GameState::Player2Turn => '2',
            GameState::GameOver => 'x',
        }
    }

    /// Parses a state from its single-character board notation.
    pub fn from_notation_char(c: char) -> Option<GameState> {
        match c {
            '1' => Some(GameState::Player1Turn),
            '2' => Some(GameState::Player2Turn),
            'x' => Some(GameState::GameOver),
            _ => None,
        }
    }
}

/// Outcome of a commit attempt. Every rejection has its own variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnResult {
    Success,
    /// No word staged, or fewer than two cells.
    TooShort,
    AlreadyPlayed,
    /// The word is a prefix of a previously played word.
    PrefixOfPrevious,
    NotInDictionary,
    /// The game has already ended.
    GameOver,
}

impl TurnResult {
    /// Protocol name of the result.
    pub const fn name(self) -> &'static str {
        match self {
            TurnResult::Success => "success",
            TurnResult::TooShort => "too_short",
            TurnResult::AlreadyPlayed => "already_played",
            TurnResult::PrefixOfPrevious => "prefix_of_previous",
            TurnResult::NotInDictionary => "not_in_dictionary",
            TurnResult::GameOver => "game_over",
        }
    }

    pub const fn is_success(self) -> bool {
        matches!(self, TurnResult::Success)
    }
}

/// Final outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    Player1Win,
    Player2Win,
    Draw,
}

impl GameResult {
    /// Strictly higher score wins; equal scores draw.
    pub fn from_scores(player1: i32, player2: i32) -> GameResult {
        match player1.cmp(&player2) {
            std::cmp::Ordering::Greater => GameResult::Player1Win,
            std::cmp::Ordering::Less => GameResult::Player2Win,
            std::cmp::Ordering::Equal => GameResult::Draw,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            GameResult::Player1Win => "player1",
            GameResult::Player2Win => "player2",
            GameResult::Draw => "draw",
        }
    }
}

/// Errors raised when staging a word that cannot be laid on the grid.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StageError {
    #[error("cell {cell} is outside the {size}-cell grid")]
    CellOutOfRange { cell: usize, size: usize },

    #[error("cell {0} is used more than once")]
    DuplicateCell(usize),
}

/// State of one match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameModel {
    pub(super) grid: Grid,
    pub(super) played: WordTrie,
    pub(super) state: GameState,
    pub(super) result: Option<GameResult>,
    pub(super) player1_score: i32,
    pub(super) player2_score: i32,
    pub(super) staged: Vec<usize>,
    pub(super) consecutive_passes: u32,
    pub(super) pass_limit: Option<u32>,
}

impl GameModel {
    /// Starts a new game on a randomly generated grid.
    pub fn new<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<Self, GridError> {
        let grid = Grid::random(config.rows, config.columns, config.vowels, rng)?;
        Ok(Self::from_grid(grid, config))
    }

    /// Starts a new game, player 1 to move, on an explicit grid.
    ///
    /// Scores are taken from the cells already claimed on `grid`.
    pub fn from_grid(grid: Grid, config: &GameConfig) -> Self {
        let player1_score = grid.count_held(Player::One) as i32;
        let player2_score = grid.count_held(Player::Two) as i32;
        GameModel {
            grid,
            played: WordTrie::new(),
            state: GameState::Player1Turn,
            result: None,
            player1_score,
            player2_score,
            staged: Vec::new(),
            consecutive_passes: 0,
            pass_limit: config.pass_limit,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// The final result; None until the game is over.
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    pub fn active_player(&self) -> Option<Player> {
        self.state.active_player()
    }

    pub fn played_words(&self) -> &WordTrie {
        &self.played
    }

    pub fn consecutive_passes(&self) -> u32 {
        self.consecutive_passes
    }

    /// Committed score, excluding any staged word.
    pub fn score(&self, player: Player) -> i32 {
        match player {
            Player::One => self.player1_score,
            Player::Two => self.player2_score,
        }
    }

    pub fn staged_cells(&self) -> &[usize] {
        &self.staged
    }

    /// Letters of the staged word; empty when nothing is staged.
    pub fn staged_word(&self) -> String {
        self.grid.spell(&self.staged)
    }

    /// Replaces the staged word. Nothing is validated beyond the cells
    /// being on the grid and distinct; on error the previous word stays.
    pub fn stage_word(&mut self, cells: &[usize]) -> Result<(), StageError> {
        for (i, &cell) in cells.iter().enumerate() {
            if !self.grid.contains_cell(cell) {
                return Err(StageError::CellOutOfRange {
                    cell,
                    size: self.grid.len(),
                });
            }
            if cells[..i].contains(&cell) {
                return Err(StageError::DuplicateCell(cell));
            }
        }
        self.staged = cells.to_vec();
        Ok(())
    }

    pub fn clear_staged(&mut self) {
        self.staged.clear();
    }

    /// Committed score of `player` plus the gain or loss the staged word
    /// would bring if committed now.
    ///
    /// The active player gains a point for each unplayed staged cell and
    /// captures a point from the opponent for each opponent-owned one.
    /// Cells already held by the active player and locked cells change
    /// nothing.
    pub fn preview_score(&self, player: Player) -> i32 {
        let committed = self.score(player);
        let Some(active) = self.active_player() else {
            return committed;
        };

        let mut delta = 0;
        for &cell in &self.staged {
            let state = self.grid.state(cell);
            let gains = match state {
                LetterState::Unplayed => (1, 0),
                LetterState::Player1Owned | LetterState::Player2Owned => {
                    if state.held_by(active) {
                        (0, 0)
                    } else {
                        (1, -1)
                    }
                }
                LetterState::Player1Locked | LetterState::Player2Locked => (0, 0),
            };
            delta += if player == active { gains.0 } else { gains.1 };
        }
        committed + delta
    }

    /// Checks the staged word against the rules, cheapest first.
    fn validate(&self, dictionary: &dyn Dictionary) -> TurnResult {
        if self.state == GameState::GameOver {
            return TurnResult::GameOver;
        }
        if self.staged.len() < MIN_WORD_LEN {
            return TurnResult::TooShort;
        }
        let word = self.staged_word();
        if self.played.contains(&word) {
            return TurnResult::AlreadyPlayed;
        }
        if self.played.contains_prefix(&word) {
            return TurnResult::PrefixOfPrevious;
        }
        if !dictionary.contains(&word) {
            return TurnResult::NotInDictionary;
        }
        TurnResult::Success
    }

    /// Validates and, on success, applies the staged word.
    ///
    /// On any rejection nothing changes and the staged word is kept so the
    /// caller can report the problem and let the player retry.
    pub fn commit_turn(&mut self, dictionary: &dyn Dictionary) -> TurnResult {
        let result = self.validate(dictionary);
        if !result.is_success() {
            debug!(word = %self.staged_word(), result = result.name(), "turn rejected");
            return result;
        }
        let Some(player) = self.active_player() else {
            return TurnResult::GameOver;
        };

        let word = self.staged_word();
        self.played.add(&word);
        let cells = std::mem::take(&mut self.staged);
        claim_cells(&mut self.grid, &cells, player);
        self.grid = recompute_lock_state(&self.grid);

        self.player1_score = self.grid.count_held(Player::One) as i32;
        self.player2_score = self.grid.count_held(Player::Two) as i32;
        self.consecutive_passes = 0;
        info!(
            %word,
            ?player,
            player1 = self.player1_score,
            player2 = self.player2_score,
            "word committed"
        );

        if self.grid.is_fully_claimed() {
            self.finish();
        } else {
            self.state = GameState::turn_of(player.opponent());
        }
        TurnResult::Success
    }

    /// Hands the turn to the other player without touching the board.
    ///
    /// Ends the game once the configured number of consecutive passes is
    /// reached. Does nothing after the game is over.
    pub fn pass_turn(&mut self) {
        let Some(player) = self.active_player() else {
            return;
        };
        self.consecutive_passes += 1;
        info!(?player, passes = self.consecutive_passes, "turn passed");

        if self.pass_limit.is_some_and(|limit| self.consecutive_passes >= limit) {
            self.finish();
        } else {
            self.state = GameState::turn_of(player.opponent());
        }
    }

    fn finish(&mut self) {
        let result = GameResult::from_scores(self.player1_score, self.player2_score);
        self.state = GameState::GameOver;
        self.result = Some(result);
        info!(
            result = result.name(),
            player1 = self.player1_score,
            player2 = self.player2_score,
            "game over"
        );
    }
}
