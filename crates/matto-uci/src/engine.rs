//! Synchronous UCI engine loop.
//!
//! One thread, one blocking stdin read. A search started by `go` runs to
//! completion before the next command is read, so `stop` never has a search
//! to interrupt and is accepted as a no-op.

use std::io::{self, BufRead};

use chess::{Board, MoveGen};
use tracing::{debug, info, warn};

use matto_engine::{iterative_deepening, limits_from_go};

use crate::command::{Command, GoParams, parse_command};
use crate::error::UciError;

/// The UCI engine, holding the current board position.
pub struct UciEngine {
    board: Board,
}

impl UciEngine {
    /// Create a new engine with the starting position.
    pub fn new() -> Self {
        Self {
            board: Board::default(),
        }
    }

    /// Run the UCI loop, reading from stdin until `quit` or input closes.
    pub fn run(mut self) -> Result<(), UciError> {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received UCI command");

            match parse_command(trimmed) {
                Ok(Command::Uci) => self.handle_uci(),
                Ok(Command::IsReady) => println!("readyok"),
                Ok(Command::UciNewGame) => self.board = Board::default(),
                Ok(Command::Position(board)) => self.board = board,
                Ok(Command::Go(params)) => self.handle_go(&params),
                Ok(Command::Stop) => {}
                Ok(Command::Quit) => break,
                Ok(Command::Unknown(_)) => {}
                Err(e) => warn!(error = %e, "UCI parse error"),
            }
        }

        info!("matto shutting down");
        Ok(())
    }

    fn handle_uci(&self) {
        println!("id name matto");
        println!("id author matto");
        println!("uciok");
    }

    fn handle_go(&self, params: &GoParams) {
        // The search contract requires at least one legal move; a mated or
        // stalemated position has nothing to search.
        if MoveGen::new_legal(&self.board).next().is_none() {
            warn!("go received on a position with no legal moves");
            println!("bestmove (none)");
            return;
        }

        let (max_depth, time_limit) = limits_from_go(
            params.depth,
            params.movetime,
            params.wtime,
            params.btime,
            params.infinite,
            self.board.side_to_move(),
        );

        let result = iterative_deepening(&self.board, max_depth, time_limit, |depth, elapsed| {
            println!("info depth {} time {}", depth, elapsed.as_millis());
        });

        debug!(
            depth = result.depth,
            score = result.score,
            nodes = result.nodes,
            elapsed_ms = result.elapsed.as_millis() as u64,
            "search finished"
        );
        println!("bestmove {}", result.best_move);
    }
}

impl Default for UciEngine {
    fn default() -> Self {
        Self::new()
    }
}
