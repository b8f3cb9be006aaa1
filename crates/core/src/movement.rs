//! Movement module - translation and collision checks for the falling piece
//!
//! The `can_move_*` checks have no side effects. The `move_*` functions translate
//! unconditionally; callers validate feasibility first.

use crate::board::Board;
use crate::pieces::Tetromino;
use crate::types::{COLUMNS, ROWS, SOFT_FALL_ROWS};

/// Check whether every square can descend one row
pub fn can_move_down(piece: &Tetromino, board: &Board) -> bool {
    if piece.bounds().bottom + 1 >= ROWS as i8 {
        return false;
    }
    !piece
        .squares()
        .iter()
        .any(|sq| board.is_occupied(sq.offset(0, 1)))
}

pub fn can_move_left(piece: &Tetromino, board: &Board) -> bool {
    if piece.bounds().left - 1 < 0 {
        return false;
    }
    !piece
        .squares()
        .iter()
        .any(|sq| board.is_occupied(sq.offset(-1, 0)))
}

pub fn can_move_right(piece: &Tetromino, board: &Board) -> bool {
    if piece.bounds().right + 1 >= COLUMNS as i8 {
        return false;
    }
    !piece
        .squares()
        .iter()
        .any(|sq| board.is_occupied(sq.offset(1, 0)))
}

pub fn move_down(piece: &mut Tetromino) {
    piece.translate(0, 1);
}

pub fn move_left(piece: &mut Tetromino) {
    piece.translate(-1, 0);
}

pub fn move_right(piece: &mut Tetromino) {
    piece.translate(1, 0);
}

/// Drop the piece six rows, or all the way down when anything is in the way.
///
/// Returns the number of rows moved.
pub fn soft_fall(piece: &mut Tetromino, board: &Board) -> i8 {
    if piece.bounds().bottom + SOFT_FALL_ROWS >= ROWS as i8 {
        return hard_fall(piece, board);
    }
    let blocked = piece.squares().iter().any(|sq| {
        (1..=SOFT_FALL_ROWS).any(|dy| board.is_occupied(sq.offset(0, dy)))
    });
    if blocked {
        return hard_fall(piece, board);
    }
    piece.translate(0, SOFT_FALL_ROWS);
    SOFT_FALL_ROWS
}

/// Distance the piece can fall before any square hits the stack or the floor
pub fn drop_distance(piece: &Tetromino, board: &Board) -> i8 {
    piece
        .squares()
        .iter()
        .map(|&sq| {
            let mut free = 0;
            while board.is_free(sq.offset(0, free)) {
                free += 1;
            }
            free - 1
        })
        .min()
        .unwrap_or(0)
        .max(0)
}

/// Drop the piece to the lowest free position. Returns the number of rows moved.
pub fn hard_fall(piece: &mut Tetromino, board: &Board) -> i8 {
    let distance = drop_distance(piece, board);
    piece.translate(0, distance);
    distance
}
