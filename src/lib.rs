//! wordclaim engine library.
//!
//! Exposes the board representation, lock propagation, word history and
//! dictionary seam, the turn engine, and protocol modules for use by
//! integration tests and the binary entry point.

pub mod board;
pub mod engine;
pub mod game;
pub mod protocol;
pub mod resolve;
pub mod words;
