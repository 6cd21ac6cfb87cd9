//! UCI command parsing.

use std::str::FromStr;
use std::time::Duration;

use chess::{Board, ChessMove};

use crate::error::UciError;

/// Parameters for the `go` command.
///
/// All fields are optional; a bare `go` uses the engine defaults.
#[derive(Debug, Clone, Default)]
pub struct GoParams {
    /// White's remaining time.
    pub wtime: Option<Duration>,
    /// Black's remaining time.
    pub btime: Option<Duration>,
    /// Search to this depth only.
    pub depth: Option<u8>,
    /// Search for exactly this duration.
    pub movetime: Option<Duration>,
    /// Search until the budget cap (no clock pressure).
    pub infinite: bool,
}

/// A parsed UCI command.
#[derive(Debug)]
pub enum Command {
    /// `uci` -- identify the engine.
    Uci,
    /// `isready` -- synchronization ping.
    IsReady,
    /// `ucinewgame` -- reset engine state.
    UciNewGame,
    /// `position` -- set up a board position with optional moves applied.
    Position(Board),
    /// `go` -- start searching with given parameters.
    Go(GoParams),
    /// `stop` -- halt the current search (a no-op for a synchronous engine).
    Stop,
    /// `quit` -- exit the engine.
    Quit,
    /// Unrecognized command (silently ignored per UCI convention).
    Unknown(String),
}

/// Parse a single line of UCI input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, UciError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Unknown(String::new()));
    }

    match tokens[0] {
        "uci" => Ok(Command::Uci),
        "isready" => Ok(Command::IsReady),
        "ucinewgame" => Ok(Command::UciNewGame),
        "stop" => Ok(Command::Stop),
        "quit" => Ok(Command::Quit),
        "position" => parse_position(&tokens[1..]),
        "go" => parse_go(&tokens[1..]),
        _ => Ok(Command::Unknown(tokens[0].to_string())),
    }
}

/// Parse the `position` command arguments.
///
/// Supports:
/// - `position startpos [moves e2e4 d7d5 ...]`
/// - `position fen <fen-string> [moves e2e4 d7d5 ...]`
fn parse_position(tokens: &[&str]) -> Result<Command, UciError> {
    if tokens.is_empty() {
        return Err(UciError::MalformedPosition);
    }

    let (mut board, rest) = if tokens[0] == "startpos" {
        (Board::default(), &tokens[1..])
    } else if tokens[0] == "fen" {
        // FEN is 6 space-separated fields
        if tokens.len() < 7 {
            return Err(UciError::InvalidFen {
                fen: tokens[1..].join(" "),
            });
        }
        let fen = tokens[1..7].join(" ");
        let board = Board::from_str(&fen).map_err(|_| UciError::InvalidFen { fen: fen.clone() })?;
        (board, &tokens[7..])
    } else {
        return Err(UciError::MalformedPosition);
    };

    // Apply moves if present: "moves e2e4 d7d5 ..."
    if !rest.is_empty() && rest[0] == "moves" {
        for uci_str in &rest[1..] {
            let mv = ChessMove::from_str(uci_str)
                .ok()
                .filter(|mv| board.legal(*mv))
                .ok_or_else(|| UciError::InvalidMove {
                    uci_move: uci_str.to_string(),
                })?;
            board = board.make_move_new(mv);
        }
    }

    Ok(Command::Position(board))
}

/// Parse the `go` command arguments.
///
/// Supports: wtime, btime, depth, movetime, infinite. Unknown tokens
/// (winc, binc, movestogo, ...) are silently skipped.
fn parse_go(tokens: &[&str]) -> Result<Command, UciError> {
    let mut params = GoParams::default();

    let mut i = 0;
    while i < tokens.len() {
        match tokens[i] {
            "wtime" => {
                params.wtime = Some(parse_millis(tokens.get(i + 1), "wtime")?);
                i += 2;
            }
            "btime" => {
                params.btime = Some(parse_millis(tokens.get(i + 1), "btime")?);
                i += 2;
            }
            "depth" => {
                params.depth = Some(parse_depth(tokens.get(i + 1))?);
                i += 2;
            }
            "movetime" => {
                params.movetime = Some(parse_millis(tokens.get(i + 1), "movetime")?);
                i += 2;
            }
            "infinite" => {
                params.infinite = true;
                i += 1;
            }
            _ => i += 1,
        }
    }

    Ok(Command::Go(params))
}

/// Parse a millisecond count. GUIs occasionally report a negative clock
/// when flagging; clamp that to zero rather than rejecting it.
fn parse_millis(token: Option<&&str>, param: &'static str) -> Result<Duration, UciError> {
    let value = token.ok_or(UciError::InvalidGoValue {
        param,
        value: String::new(),
    })?;
    let ms: i64 = value.parse().map_err(|_| UciError::InvalidGoValue {
        param,
        value: value.to_string(),
    })?;
    Ok(Duration::from_millis(ms.max(0) as u64))
}

fn parse_depth(token: Option<&&str>) -> Result<u8, UciError> {
    let value = token.ok_or(UciError::InvalidGoValue {
        param: "depth",
        value: String::new(),
    })?;
    value.parse().map_err(|_| UciError::InvalidGoValue {
        param: "depth",
        value: value.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
