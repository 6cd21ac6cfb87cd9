//! Endgame mop-up heuristic.
//!
//! Once one side has a decisive material lead, plain material counting goes
//! flat: every quiet move scores the same and the engine shuffles instead of
//! converting. The mop-up terms reward driving the losing king toward the
//! edge and marching the winning king toward it, so the search actively
//! pursues checkmate.

use chess::Square;

/// Material lead (in centipawns) required before mop-up kicks in.
pub const MOP_UP_THRESHOLD: i32 = 300;

/// Distance from the 2x2 board center, indexed by [`Square::to_index`]
/// (A1 = 0, H8 = 63). Sum of file and rank distance from the d4/e4/d5/e5
/// block: 0 in the center, 6 in the corners.
#[rustfmt::skip]
pub const CENTER_DISTANCE: [i32; 64] = [
    6, 5, 4, 3, 3, 4, 5, 6,
    5, 4, 3, 2, 2, 3, 4, 5,
    4, 3, 2, 1, 1, 2, 3, 4,
    3, 2, 1, 0, 0, 1, 2, 3,
    3, 2, 1, 0, 0, 1, 2, 3,
    4, 3, 2, 1, 1, 2, 3, 4,
    5, 4, 3, 2, 2, 3, 4, 5,
    6, 5, 4, 3, 3, 4, 5, 6,
];

/// Manhattan distance between two squares (0..=14).
pub fn manhattan_distance(a: Square, b: Square) -> i32 {
    let files = (a.get_file().to_index() as i32 - b.get_file().to_index() as i32).abs();
    let ranks = (a.get_rank().to_index() as i32 - b.get_rank().to_index() as i32).abs();
    files + ranks
}

/// Mop-up bonus for the side with a decisive material lead.
///
/// Two terms, both credited to the winning side: 15 centipawns per step the
/// losing king stands from the center, and 5 centipawns per step the kings
/// are closer together (mate-assist).
pub fn mop_up_bonus(winning_king: Square, losing_king: Square) -> i32 {
    15 * CENTER_DISTANCE[losing_king.to_index()]
        + 5 * (14 - manhattan_distance(winning_king, losing_king))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
