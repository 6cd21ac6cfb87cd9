//! Move ordering — captures first, MVV-LVA.

use std::cmp::Reverse;

use chess::{Board, ChessMove, Piece};

use crate::eval::material::piece_value;

/// Score a move for ordering purposes.
///
/// Captures score the victim's value minus a scaled-down attacker value,
/// so the attacker term only breaks ties between equal victims (most
/// valuable victim, least valuable attacker). Quiet moves score 0.
pub fn score_move(board: &Board, mv: ChessMove) -> i32 {
    match board.piece_on(mv.get_dest()) {
        Some(victim) => {
            let attacker = board.piece_on(mv.get_source()).unwrap_or(Piece::Pawn);
            piece_value(victim) - piece_value(attacker) / 100
        }
        None => 0,
    }
}

/// Reorder `moves` so the likeliest cutoff candidates come first.
pub fn order_moves(board: &Board, moves: &mut [ChessMove]) {
    moves.sort_by_key(|mv| Reverse(score_move(board, *mv)));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
