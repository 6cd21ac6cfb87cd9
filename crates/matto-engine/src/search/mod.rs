//! Search algorithms: move ordering, negamax, and iterative deepening.

pub mod negamax;
pub mod ordering;

use std::time::{Duration, Instant};

use chess::{Board, ChessMove, MoveGen};
use tracing::debug;

use negamax::{INF, SearchContext, alphabeta};

/// Result of a completed search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found at the deepest completed depth.
    pub best_move: ChessMove,
    /// Evaluation in centipawns from the side to move's perspective.
    pub score: i32,
    /// Deepest completed depth.
    pub depth: u8,
    /// Total nodes visited across all iterations.
    pub nodes: u64,
    /// Wall-clock time spent.
    pub elapsed: Duration,
}

/// Fraction of the time budget after which no new iteration starts.
const SOFT_LIMIT_FRACTION: f64 = 0.8;

/// Iterative-deepening search up to `max_depth` under a wall-clock budget.
///
/// Runs a full root search at each depth from 1 to `max_depth`, keeping the
/// move of the deepest completed iteration. After each completed depth,
/// `on_iter(depth, elapsed)` fires so the caller can emit `info` lines.
///
/// Time is checked only between iterations: once elapsed time reaches 80%
/// of `time_limit`, no further depth begins, but an iteration underway
/// always runs to completion. The search can therefore overrun the budget
/// by up to the duration of its deepest iteration.
///
/// The position must have at least one legal move — searching a checkmated
/// or stalemated position is a caller bug.
pub fn iterative_deepening<F>(
    board: &Board,
    max_depth: u8,
    time_limit: Duration,
    mut on_iter: F,
) -> SearchResult
where
    F: FnMut(u8, Duration),
{
    let start = Instant::now();
    let soft_limit = time_limit.mul_f64(SOFT_LIMIT_FRACTION);

    // Fallback so even a zero-budget search returns a legal move.
    let mut best_move = MoveGen::new_legal(board)
        .next()
        .expect("search invoked on a position with no legal moves");
    let mut best_score = 0;
    let mut completed_depth = 0;
    let mut nodes = 0;

    for depth in 1..=max_depth {
        let mut ctx = SearchContext { nodes: 0 };
        let (score, mv) = alphabeta(board, depth, 0, -INF, INF, &mut ctx);
        nodes += ctx.nodes;

        if let Some(mv) = mv {
            best_move = mv;
            best_score = score;
        }
        completed_depth = depth;

        let elapsed = start.elapsed();
        debug!(
            depth,
            elapsed_ms = elapsed.as_millis() as u64,
            score,
            nodes = ctx.nodes,
            "completed iteration"
        );
        on_iter(depth, elapsed);

        if elapsed >= soft_limit {
            break;
        }
    }

    SearchResult {
        best_move,
        score: best_score,
        depth: completed_depth,
        nodes,
        elapsed: start.elapsed(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
