//! Game engine: configuration, the turn state machine, and snapshots.

pub mod config;
pub mod model;
pub mod snapshot;

pub use config::{ConfigError, GameConfig, MAX_DIMENSION};
pub use model::{GameModel, GameResult, GameState, StageError, TurnResult, MIN_WORD_LEN};
pub use snapshot::{Snapshot, SnapshotError};
