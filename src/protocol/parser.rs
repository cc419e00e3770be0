//! Line protocol command parser.
//!
//! Parses incoming text commands into structured `Command` variants that
//! the binary's main loop can dispatch on.

use tracing::warn;

/// A parsed client-to-engine command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Protocol handshake.
    Wgi,

    /// Synchronization ping; engine must reply `readyok`.
    IsReady,

    /// Set an engine option: `setoption name <id> [value <x>]`.
    SetOption { name: String, value: Option<String> },

    /// Start a new game on a random grid.
    NewGame,

    /// Restore a game from board notation.
    Position { notation: String },

    /// Stage a word as cell indices; no cells clears the staged word.
    Stage { cells: Vec<usize> },

    /// Report both players' scores including the staged word.
    Preview,

    /// Commit the staged word.
    Commit,

    /// Pass the turn.
    Pass,

    /// Report the current board notation.
    Board,

    /// Terminate the engine process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging a warning.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    match tokens[0] {
        "wgi" => Some(Command::Wgi),
        "isready" => Some(Command::IsReady),
        "quit" => Some(Command::Quit),
        "newgame" => Some(Command::NewGame),
        "preview" => Some(Command::Preview),
        "commit" => Some(Command::Commit),
        "pass" => Some(Command::Pass),
        "board" => Some(Command::Board),

        "setoption" => parse_setoption(&tokens),
        "position" => parse_position(&tokens),
        "stage" => parse_stage(&tokens),

        other => {
            warn!(command = other, "unknown command");
            None
        }
    }
}

/// Parses `setoption name <id> [value <x>]`.
fn parse_setoption(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 3 || tokens[1] != "name" {
        warn!("malformed setoption: expected 'setoption name <id> [value <x>]'");
        return None;
    }

    let value_idx = tokens.iter().position(|&t| t == "value");

    let (name, value) = match value_idx {
        Some(vi) => {
            let name_parts = &tokens[2..vi];
            let value_parts = &tokens[vi + 1..];
            if name_parts.is_empty() {
                warn!("malformed setoption: empty name");
                return None;
            }
            let value = (!value_parts.is_empty()).then(|| value_parts.join(" "));
            (name_parts.join(" "), value)
        }
        None => (tokens[2..].join(" "), None),
    };

    Some(Command::SetOption { name, value })
}

/// Parses `position <notation>`.
fn parse_position(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 2 {
        warn!("malformed position: expected 'position <notation>'");
        return None;
    }
    Some(Command::Position {
        notation: tokens[1].to_string(),
    })
}

/// Parses `stage [<cell> ...]`.
fn parse_stage(tokens: &[&str]) -> Option<Command> {
    let mut cells = Vec::with_capacity(tokens.len() - 1);
    for t in &tokens[1..] {
        match t.parse::<usize>() {
            Ok(cell) => cells.push(cell),
            Err(_) => {
                warn!(token = *t, "malformed stage: cell indices must be non-negative integers");
                return None;
            }
        }
    }
    Some(Command::Stage { cells })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_commands() {
        assert_eq!(parse_command("wgi"), Some(Command::Wgi));
        assert_eq!(parse_command("  isready  "), Some(Command::IsReady));
        assert_eq!(parse_command("newgame"), Some(Command::NewGame));
        assert_eq!(parse_command("preview"), Some(Command::Preview));
        assert_eq!(parse_command("commit"), Some(Command::Commit));
        assert_eq!(parse_command("pass"), Some(Command::Pass));
        assert_eq!(parse_command("board"), Some(Command::Board));
        assert_eq!(parse_command("quit"), Some(Command::Quit));
    }

    #[test]
    fn empty_and_unknown_lines() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("   "), None);
        assert_eq!(parse_command("go"), None);
    }

    #[test]
    fn setoption_with_and_without_value() {
        assert_eq!(
            parse_command("setoption name Rows value 4"),
            Some(Command::SetOption {
                name: "Rows".to_string(),
                value: Some("4".to_string())
            })
        );
        assert_eq!(
            parse_command("setoption name PassLimit"),
            Some(Command::SetOption {
                name: "PassLimit".to_string(),
                value: None
            })
        );
        assert_eq!(parse_command("setoption Rows 4"), None);
        assert_eq!(parse_command("setoption name value 4"), None);
    }

    #[test]
    fn position_takes_one_token() {
        assert_eq!(
            parse_command("position 1x2/AB/../1/0,0/0/-"),
            Some(Command::Position {
                notation: "1x2/AB/../1/0,0/0/-".to_string()
            })
        );
        assert_eq!(parse_command("position"), None);
        assert_eq!(parse_command("position a b"), None);
    }

    #[test]
    fn stage_parses_cell_indices() {
        assert_eq!(
            parse_command("stage 19 7 4"),
            Some(Command::Stage { cells: vec![19, 7, 4] })
        );
        assert_eq!(parse_command("stage"), Some(Command::Stage { cells: vec![] }));
        assert_eq!(parse_command("stage 1 -2"), None);
        assert_eq!(parse_command("stage x"), None);
    }
}
