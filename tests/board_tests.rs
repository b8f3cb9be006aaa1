//! Board tests - grid storage, bounds and row removal

use quadfall::core::Board;
use quadfall::types::{Color, Coord, COLUMNS, ROWS};

const RED: Color = Color::from_hex(0xFF0000);
const BLUE: Color = Color::from_hex(0x0000FF);

fn fill_row(board: &mut Board, y: i8, color: Color) {
    for x in 0..COLUMNS as i8 {
        assert!(board.place(Coord::new(x, y), color));
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), COLUMNS);
    assert_eq!(board.height(), ROWS);

    for y in 0..ROWS as i8 {
        for x in 0..COLUMNS as i8 {
            assert_eq!(board.get(Coord::new(x, y)), Some(None), "({}, {})", x, y);
        }
    }
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(Coord::new(-1, 0)), None);
    assert_eq!(board.get(Coord::new(0, -1)), None);
    assert_eq!(board.get(Coord::new(COLUMNS as i8, 0)), None);
    assert_eq!(board.get(Coord::new(0, ROWS as i8)), None);

    // Outside the grid is neither occupied nor free
    assert!(!board.is_occupied(Coord::new(-1, 5)));
    assert!(!board.is_free(Coord::new(-1, 5)));
}

#[test]
fn test_place_and_clear() {
    let mut board = Board::new();

    assert!(board.place(Coord::new(5, 10), RED));
    assert_eq!(board.get(Coord::new(5, 10)), Some(Some(RED)));
    assert!(board.is_occupied(Coord::new(5, 10)));

    assert!(board.clear(Coord::new(5, 10)));
    assert!(board.is_free(Coord::new(5, 10)));

    assert!(!board.place(Coord::new(12, 0), RED));
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_row_full_detection() {
    let mut board = Board::new();
    for x in 0..COLUMNS as i8 - 1 {
        board.place(Coord::new(x, 23), RED);
    }
    assert!(!board.is_row_full(23));
    board.place(Coord::new(COLUMNS as i8 - 1, 23), RED);
    assert!(board.is_row_full(23));
}

#[test]
fn test_clear_single_row_shifts_stack() {
    let mut board = Board::new();
    fill_row(&mut board, 23, RED);
    board.place(Coord::new(3, 22), BLUE);
    board.place(Coord::new(7, 20), BLUE);

    assert_eq!(board.clear_full_rows(), 1);
    assert_eq!(board.get(Coord::new(3, 23)), Some(Some(BLUE)));
    assert_eq!(board.get(Coord::new(7, 21)), Some(Some(BLUE)));
    assert_eq!(board.occupied_count(), 2);
}

#[test]
fn test_clear_non_adjacent_rows() {
    let mut board = Board::new();
    fill_row(&mut board, 23, RED);
    fill_row(&mut board, 21, RED);
    board.place(Coord::new(0, 22), BLUE);
    board.place(Coord::new(11, 20), BLUE);

    assert_eq!(board.clear_full_rows(), 2);
    assert_eq!(board.get(Coord::new(0, 23)), Some(Some(BLUE)));
    assert_eq!(board.get(Coord::new(11, 22)), Some(Some(BLUE)));
    assert_eq!(board.occupied_count(), 2);
}

#[test]
fn test_clear_four_rows() {
    let mut board = Board::new();
    for y in 20..24 {
        fill_row(&mut board, y, RED);
    }
    board.place(Coord::new(6, 19), BLUE);

    assert_eq!(board.clear_full_rows(), 4);
    assert_eq!(board.get(Coord::new(6, 23)), Some(Some(BLUE)));
    assert_eq!(board.occupied_count(), 1);
}

#[test]
fn test_no_full_rows_is_noop() {
    let mut board = Board::new();
    board.place(Coord::new(0, 23), RED);
    let before = board.clone();
    assert_eq!(board.clear_full_rows(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_reset_empties_board() {
    let mut board = Board::new();
    fill_row(&mut board, 10, RED);
    board.reset();
    assert_eq!(board.occupied_count(), 0);
}
