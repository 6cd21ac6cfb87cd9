//! Base piece values and the pawn advancement bonus.

use chess::{Color, Piece, Square};

/// Base material value in centipawns.
///
/// | Piece  | Value |
/// |--------|-------|
/// | Pawn   | 100   |
/// | Knight | 320   |
/// | Bishop | 330   |
/// | Rook   | 500   |
/// | Queen  | 900   |
/// | King   | 0     |
pub const fn piece_value(piece: Piece) -> i32 {
    match piece {
        Piece::Pawn => 100,
        Piece::Knight => 320,
        Piece::Bishop => 330,
        Piece::Rook => 500,
        Piece::Queen => 900,
        Piece::King => 0,
    }
}

/// Advancement bonus for a pawn of `color` on `sq`.
///
/// +10 centipawns per rank advanced beyond the pawn's own second rank,
/// reaching +50 on the seventh (mirrored for Black).
pub fn pawn_advance_bonus(color: Color, sq: Square) -> i32 {
    let rank = sq.get_rank().to_index() as i32;
    match color {
        Color::White => (rank - 1) * 10,
        Color::Black => (6 - rank) * 10,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
