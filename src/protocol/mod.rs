//! Line protocol handling.
//!
//! Parsing and serialization for the text protocol spoken by the binary:
//! the board notation used to exchange positions and the command parser
//! for the main loop.

pub mod notation;
pub mod parser;

pub use notation::{encode_notation, parse_notation, NotationError};
pub use parser::{parse_command, Command};
