//! Static evaluation for matto.
//!
//! Scores are centipawns from the side to move's perspective (negamax
//! convention): positive favors the mover. [`evaluate`] must not be called
//! on a checkmated or stalemated position — the search handles terminal
//! nodes before it ever evaluates a leaf.

pub mod material;
pub mod mopup;

use chess::{ALL_SQUARES, Board, Color, Piece};

use material::{pawn_advance_bonus, piece_value};
use mopup::{MOP_UP_THRESHOLD, mop_up_bonus};

/// Evaluate a non-terminal position.
///
/// One pass over the board accumulates a material sum per color (base value
/// plus pawn advancement, kings excluded). With a material lead above
/// [`MOP_UP_THRESHOLD`] the winning side additionally receives the mop-up
/// bonus. The result is `mover's sum - opponent's sum`.
pub fn evaluate(board: &Board) -> i32 {
    let mut white = 0;
    let mut black = 0;

    for sq in ALL_SQUARES {
        let (Some(piece), Some(color)) = (board.piece_on(sq), board.color_on(sq)) else {
            continue;
        };
        // King positions feed the mop-up terms, not the material sums.
        if piece == Piece::King {
            continue;
        }

        let mut value = piece_value(piece);
        if piece == Piece::Pawn {
            value += pawn_advance_bonus(color, sq);
        }
        match color {
            Color::White => white += value,
            Color::Black => black += value,
        }
    }

    let material_diff = white - black;
    if material_diff > MOP_UP_THRESHOLD {
        white += mop_up_bonus(
            board.king_square(Color::White),
            board.king_square(Color::Black),
        );
    } else if material_diff < -MOP_UP_THRESHOLD {
        black += mop_up_bonus(
            board.king_square(Color::Black),
            board.king_square(Color::White),
        );
    }

    match board.side_to_move() {
        Color::White => white - black,
        Color::Black => black - white,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
