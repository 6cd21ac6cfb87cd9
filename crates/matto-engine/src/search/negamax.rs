//! Negamax alpha-beta search.

use chess::{Board, BoardStatus, ChessMove, MoveGen};

use crate::eval::evaluate;
use crate::search::ordering::order_moves;

/// Score representing an unreachable upper/lower bound.
pub const INF: i32 = 100_000;

/// Base score for checkmate (adjusted by ply so shorter mates score higher).
pub const MATE_SCORE: i32 = 99_999;

/// Scores beyond this magnitude indicate a forced mate.
pub const MATE_THRESHOLD: i32 = 99_000;

/// Search state threaded through negamax calls.
pub(super) struct SearchContext {
    /// Total nodes visited.
    pub nodes: u64,
}

/// Fail-hard negamax alpha-beta search.
///
/// Returns the best score for the side to move, together with the move that
/// raised alpha last. The move is populated at every level but only the root
/// caller consumes it — one implementation serves both the inner nodes and
/// the root. `None` means the node was terminal, a leaf, or failed low.
///
/// Terminal nodes are scored before the depth check, so [`evaluate`] never
/// sees a checkmate or stalemate: mate is `-MATE_SCORE + ply` (deeper mates
/// score closer to zero, steering the search toward the nearest mate) and
/// stalemate is a hard 0.
pub(super) fn alphabeta(
    board: &Board,
    depth: u8,
    ply: u8,
    mut alpha: i32,
    beta: i32,
    ctx: &mut SearchContext,
) -> (i32, Option<ChessMove>) {
    ctx.nodes += 1;

    match board.status() {
        BoardStatus::Checkmate => return (-MATE_SCORE + ply as i32, None),
        BoardStatus::Stalemate => return (0, None),
        BoardStatus::Ongoing => {}
    }

    if depth == 0 {
        return (evaluate(board), None);
    }

    let mut moves: Vec<ChessMove> = MoveGen::new_legal(board).collect();
    order_moves(board, &mut moves);

    let mut best_move = None;
    for mv in moves {
        let child = board.make_move_new(mv);
        let (child_score, _) = alphabeta(&child, depth - 1, ply + 1, -beta, -alpha, ctx);
        let score = -child_score;

        // Fail-hard beta cutoff: the opponent already has a better option,
        // so the remaining siblings cannot matter.
        if score >= beta {
            return (beta, Some(mv));
        }
        if score > alpha {
            alpha = score;
            best_move = Some(mv);
        }
    }

    (alpha, best_move)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn search_fen(fen: &str, depth: u8) -> (i32, Option<ChessMove>) {
        let board = Board::from_str(fen).unwrap();
        let mut ctx = SearchContext { nodes: 0 };
        alphabeta(&board, depth, 0, -INF, INF, &mut ctx)
    }

    /// Full-width reference negamax with identical terminal handling.
    fn minimax(board: &Board, depth: u8, ply: u8) -> i32 {
        match board.status() {
            BoardStatus::Checkmate => return -MATE_SCORE + ply as i32,
            BoardStatus::Stalemate => return 0,
            BoardStatus::Ongoing => {}
        }
        if depth == 0 {
            return evaluate(board);
        }

        let mut best = -INF;
        for mv in MoveGen::new_legal(board) {
            let child = board.make_move_new(mv);
            best = best.max(-minimax(&child, depth - 1, ply + 1));
        }
        best
    }

    #[test]
    fn pruning_never_changes_the_score() {
        // (fen, max depth) — kiwipete stays shallow, the reference search
        // is full width and explodes quickly there.
        let fens = [
            ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", 3),
            (
                "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
                2,
            ),
            ("8/2k5/8/8/8/8/5K2/6Q1 w - - 0 1", 3),
            ("4k3/8/8/8/8/8/8/1Q2K3 b - - 0 1", 3),
        ];
        for (fen, max_depth) in fens {
            let board = Board::from_str(fen).unwrap();
            for depth in 1..=max_depth {
                let (pruned, _) = {
                    let mut ctx = SearchContext { nodes: 0 };
                    alphabeta(&board, depth, 0, -INF, INF, &mut ctx)
                };
                let full = minimax(&board, depth, 0);
                assert_eq!(pruned, full, "score diverged on {fen} at depth {depth}");
            }
        }
    }

    #[test]
    fn checkmated_root_scores_mate_at_ply_zero() {
        // Black king h8, white queen g7 guarded by Kf6 — black is mated.
        let (score, mv) = search_fen("7k/6Q1/5K2/8/8/8/8/8 b - - 0 1", 3);
        assert_eq!(score, -MATE_SCORE);
        assert!(mv.is_none());
    }

    #[test]
    fn stalemated_root_scores_zero() {
        // Black king a8, white Kc7 + Qb6 — black to move, no moves, no check.
        let (score, mv) = search_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1", 3);
        assert_eq!(score, 0);
        assert!(mv.is_none());
    }

    #[test]
    fn finds_mate_in_one() {
        // Scholar's mate setup — Qxf7# is available.
        let (score, mv) = search_fen(
            "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4",
            2,
        );
        assert_eq!(score, MATE_SCORE - 1);
        assert_eq!(mv.map(|m| m.to_string()).as_deref(), Some("h5f7"));
    }

    #[test]
    fn nearer_mates_score_higher() {
        // The same mating attack searched from one ply further out scores
        // lower, so the engine converges instead of shuffling.
        let mate_in_one = search_fen(
            "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4",
            2,
        )
        .0;
        // Rook ladder: Ra7 then Rb8# — mate in two.
        let mate_in_two = search_fen("6k1/8/8/8/8/8/R7/1R4K1 w - - 0 1", 3).0;
        assert!(mate_in_one > mate_in_two);
        assert!(mate_in_two > MATE_THRESHOLD);
    }

    #[test]
    fn depth_zero_returns_the_static_eval() {
        let board =
            Board::from_str("4k3/8/8/8/8/2P5/8/4K3 w - - 0 1").unwrap();
        let mut ctx = SearchContext { nodes: 0 };
        let (score, mv) = alphabeta(&board, 0, 0, -INF, INF, &mut ctx);
        assert_eq!(score, evaluate(&board));
        assert!(mv.is_none());
        assert_eq!(ctx.nodes, 1);
    }

    #[test]
    fn pruning_visits_fewer_nodes_than_full_width() {
        // Kiwipete is tactical enough that ordered alpha-beta prunes
        // a large share of the full-width tree.
        let board = Board::from_str(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        )
        .unwrap();
        let mut ctx = SearchContext { nodes: 0 };
        alphabeta(&board, 3, 0, -INF, INF, &mut ctx);

        let mut full_width_nodes: u64 = 0;
        count_nodes(&board, 3, &mut full_width_nodes);
        assert!(
            ctx.nodes < full_width_nodes,
            "alpha-beta visited {} nodes, full width {}",
            ctx.nodes,
            full_width_nodes
        );
    }

    fn count_nodes(board: &Board, depth: u8, nodes: &mut u64) {
        *nodes += 1;
        if depth == 0 || board.status() != BoardStatus::Ongoing {
            return;
        }
        for mv in MoveGen::new_legal(board) {
            count_nodes(&board.make_move_new(mv), depth - 1, nodes);
        }
    }
}
