//! Letter cells and their ownership states.
//!
//! Each grid cell carries an uppercase letter and a `LetterState` describing
//! which player, if any, has claimed it and whether it is locked.

use serde::{Deserialize, Serialize};

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Returns the other player.
    pub const fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Returns the single-character notation digit.
    pub const fn notation_char(self) -> char {
        match self {
            Player::One => '1',
            Player::Two => '2',
        }
    }
}

/// Ownership state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LetterState {
    #[default]
    Unplayed,
    Player1Owned,
    Player1Locked,
    Player2Owned,
    Player2Locked,
}

impl LetterState {
    /// Plain-owned state for a player.
    pub const fn owned_by(player: Player) -> LetterState {
        match player {
            Player::One => LetterState::Player1Owned,
            Player::Two => LetterState::Player2Owned,
        }
    }

    /// Locked state for a player.
    pub const fn locked_by(player: Player) -> LetterState {
        match player {
            Player::One => LetterState::Player1Locked,
            Player::Two => LetterState::Player2Locked,
        }
    }

    /// Returns the player holding this cell, owned or locked.
    pub const fn owner(self) -> Option<Player> {
        match self {
            LetterState::Unplayed => None,
            LetterState::Player1Owned | LetterState::Player1Locked => Some(Player::One),
            LetterState::Player2Owned | LetterState::Player2Locked => Some(Player::Two),
        }
    }

    pub const fn is_locked(self) -> bool {
        matches!(self, LetterState::Player1Locked | LetterState::Player2Locked)
    }

    /// True if `player` owns or has locked this cell.
    pub fn held_by(self, player: Player) -> bool {
        self.owner() == Some(player)
    }

    /// Returns the single-character board notation.
    pub const fn notation_char(self) -> char {
        match self {
            LetterState::Unplayed => '.',
            LetterState::Player1Owned => 'a',
            LetterState::Player1Locked => 'A',
            LetterState::Player2Owned => 'b',
            LetterState::Player2Locked => 'B',
        }
    }

    /// Parses a state from its single-character board notation.
    pub fn from_notation_char(c: char) -> Option<LetterState> {
        match c {
            '.' => Some(LetterState::Unplayed),
            'a' => Some(LetterState::Player1Owned),
            'A' => Some(LetterState::Player1Locked),
            'b' => Some(LetterState::Player2Owned),
            'B' => Some(LetterState::Player2Locked),
            _ => None,
        }
    }
}

/// A grid cell: an uppercase letter plus its ownership state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Letter {
    pub character: char,
    pub state: LetterState,
}

impl Letter {
    /// Creates an unplayed letter. Returns None unless `character` is `A-Z`.
    pub fn new(character: char) -> Option<Letter> {
        Letter::with_state(character, LetterState::Unplayed)
    }

    /// Creates a letter in a given state. Returns None unless `character` is `A-Z`.
    pub fn with_state(character: char, state: LetterState) -> Option<Letter> {
        if !character.is_ascii_uppercase() {
            return None;
        }
        Some(Letter { character, state })
    }
}
