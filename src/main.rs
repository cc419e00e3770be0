//! wordclaim -- line protocol front end for the word-claiming game engine.
//!
//! Reads commands from stdin and writes responses to stdout. Logs go to
//! stderr, filtered through `RUST_LOG` (default `warn`).
//!
//! Usage:
//!   wordclaim [--config FILE] [--dictionary FILE]

use std::env;
use std::io::{self, BufRead};
use std::process;

use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use wordclaim::engine::{Engine, EngineError};
use wordclaim::game::GameConfig;
use wordclaim::protocol::parser::{parse_command, Command};
use wordclaim::words::WordList;

/// Parsed command-line arguments.
struct Args {
    config: Option<String>,
    dictionary: Option<String>,
}

fn parse_args() -> Args {
    let args: Vec<String> = env::args().collect();
    let mut parsed = Args {
        config: None,
        dictionary: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" if i + 1 < args.len() => {
                i += 1;
                parsed.config = Some(args[i].clone());
            }
            "--dictionary" if i + 1 < args.len() => {
                i += 1;
                parsed.dictionary = Some(args[i].clone());
            }
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            other => {
                eprintln!("Unknown or incomplete argument: {}", other);
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }
    parsed
}

fn print_usage() {
    eprintln!("Usage: wordclaim [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config FILE      JSON game configuration (rows, columns, vowels, pass_limit)");
    eprintln!("  --dictionary FILE  Word list, one word per line");
    eprintln!("  --help             Show this help");
}

fn build_engine(args: &Args) -> Result<Engine, EngineError> {
    let config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    let dictionary = match &args.dictionary {
        Some(path) => WordList::load(path)?,
        None => WordList::new(),
    };
    if dictionary.is_empty() {
        warn!("dictionary is empty; every word will be rejected");
    }
    Ok(Engine::new(config, dictionary))
}

/// Dispatches one command. Returns false when the session should end.
fn dispatch<W: io::Write>(engine: &mut Engine, cmd: Command, out: &mut W) -> Result<bool, EngineError> {
    match cmd {
        Command::Wgi => engine.handle_wgi(out)?,
        Command::IsReady => engine.handle_isready(out)?,
        Command::SetOption { name, value } => engine.set_option(&name, value.as_deref())?,
        Command::NewGame => engine.new_game(out)?,
        Command::Position { notation } => engine.set_position(&notation)?,
        Command::Stage { cells } => engine.stage(&cells)?,
        Command::Preview => engine.handle_preview(out)?,
        Command::Commit => engine.handle_commit(out)?,
        Command::Pass => engine.handle_pass(out)?,
        Command::Board => engine.handle_board(out)?,
        Command::Quit => return Ok(false),
    }
    Ok(true)
}

/// Runs the main protocol loop, reading commands from stdin and writing
/// responses to stdout.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = parse_args();
    let mut engine = match build_engine(&args) {
        Ok(e) => e,
        Err(e) => {
            error!(error = %e, "failed to start engine");
            process::exit(1);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match dispatch(&mut engine, cmd, &mut out) {
            Ok(true) => {}
            Ok(false) => break,
            Err(EngineError::Io(e)) => {
                error!(error = %e, "stdout closed");
                break;
            }
            Err(e) => warn!(error = %e, "command failed"),
        }
    }
}
