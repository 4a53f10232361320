//! Transform engine: movement, wall-kick rotation, and merging.
//!
//! All operations are tentative-then-revert against the collision detector;
//! a rejected transform leaves the piece unchanged. This is a rule outcome,
//! not an error, so the functions return plain bools.

use crate::core::board::Board;
use crate::core::piece::{collides, Piece};
use crate::types::{Spin, KICK_LIMIT};

/// Shift the piece horizontally by `dx`. Reverts on collision; there is no
/// wall kick for lateral movement.
pub fn shift(board: &Board, piece: &mut Piece, dx: i8) -> bool {
    piece.x += dx;
    if collides(board, piece) {
        piece.x -= dx;
        return false;
    }
    true
}

/// Rotate the piece in place, kicking off walls when the naive rotation
/// collides.
///
/// Kick offsets +1, -2, +3, -4, +5 are applied cumulatively to `piece.x`
/// (net positions +1, -1, +2, -2, +3), re-testing collision after each. When
/// the next offset magnitude would exceed [`KICK_LIMIT`], the rotation is
/// cancelled and the pre-rotation shape and x are restored.
///
/// This is a deliberately simplified kick scan, not an SRS kick table.
pub fn rotate(board: &Board, piece: &mut Piece, spin: Spin) -> bool {
    let saved_shape = piece.shape;
    let saved_x = piece.x;

    piece.shape.rotate(spin);

    let mut offset: i8 = 1;
    while collides(board, piece) {
        piece.x += offset;
        offset = -(offset + offset.signum());
        if offset.abs() > KICK_LIMIT {
            piece.shape = saved_shape;
            piece.x = saved_x;
            return false;
        }
    }
    true
}

/// Write the piece's color into every occupied board cell at its current
/// position. Cells above the top row are dropped silently.
pub fn merge(board: &mut Board, piece: &Piece) {
    for (x, y) in piece.iter_cells() {
        board.set(x, y, Some(piece.kind));
    }
}
