//! Turn resolution.
//!
//! Applies an accepted word to the board: ownership assignment followed by
//! lock propagation.

pub mod capture;

pub use capture::{claim_cells, next_lock_state, recompute_lock_state};
