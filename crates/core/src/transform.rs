//! Transform module - centroid rotation and mirror reflection
//!
//! Neither transform kicks: a result that leaves the board or lands on the stack is
//! rejected and the piece is left untouched.
//!
//! Rotation is 90° counter-clockwise about the mean of the square centers:
//!
//! ```text
//! newX = ceil(cx + (py - cy)) - 1
//! newY = ceil(cy - (px - cx)) - 1
//! ```
//!
//! The rounding is not symmetric, so some kinds drift by a cell over a full turn.
//! Reflection mirrors about the vertical center line of the bounding box.

use crate::board::Board;
use crate::pieces::Tetromino;
use crate::types::{Coord, SQUARES_PER_PIECE};

/// Squares after one counter-clockwise rotation (unchecked)
pub fn rotated_squares(piece: &Tetromino) -> [Coord; SQUARES_PER_PIECE] {
    let squares = piece.squares();
    let n = SQUARES_PER_PIECE as f64;
    let cx = squares.iter().map(|sq| sq.x as f64 + 0.5).sum::<f64>() / n;
    let cy = squares.iter().map(|sq| sq.y as f64 + 0.5).sum::<f64>() / n;

    squares.map(|sq| {
        let px = sq.x as f64 + 0.5;
        let py = sq.y as f64 + 0.5;
        let x = (cx + (py - cy)).ceil() - 1.0;
        let y = (cy - (px - cx)).ceil() - 1.0;
        Coord::new(x as i8, y as i8)
    })
}

/// Squares after mirroring about the bounding box center (unchecked)
pub fn reflected_squares(piece: &Tetromino) -> [Coord; SQUARES_PER_PIECE] {
    let bounds = piece.bounds();
    let axis = (bounds.right as f64 + bounds.left as f64) / 2.0 + 0.5;
    piece.squares().map(|sq| {
        let x = (2.0 * axis - (sq.x as f64 + 0.5)).floor();
        Coord::new(x as i8, sq.y)
    })
}

fn try_apply(piece: &mut Tetromino, board: &Board, squares: [Coord; SQUARES_PER_PIECE]) -> bool {
    if !squares.iter().all(|&sq| board.is_free(sq)) {
        return false;
    }
    piece.set_squares(squares);
    true
}

/// Rotate 90° counter-clockwise if the result fits
pub fn try_rotate(piece: &mut Tetromino, board: &Board) -> bool {
    let squares = rotated_squares(piece);
    try_apply(piece, board, squares)
}

/// Mirror horizontally if the result fits
pub fn try_reflect(piece: &mut Tetromino, board: &Board) -> bool {
    let squares = reflected_squares(piece);
    try_apply(piece, board, squares)
}
