//! Board tests - collision, merge, line clear and garbage rows

use falling_blocks::core::{get_shape, Board};
use falling_blocks::types::{Cell, PieceKind, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};

#[test]
fn test_board_default_is_empty() {
    let board = Board::default();
    assert_eq!(board.width(), DEFAULT_BOARD_WIDTH);
    assert_eq!(board.height(), DEFAULT_BOARD_HEIGHT);
    assert_eq!(board.cells().len(), 12 * 24);
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new(12, 24);
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(12, 0), None);
    assert_eq!(board.get(0, 24), None);
    assert_eq!(board.get(11, 23), Some(Cell::Empty));
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new(12, 24);
    assert!(board.set(5, 10, Cell::Block(PieceKind::T)));
    assert_eq!(board.get(5, 10), Some(Cell::Block(PieceKind::T)));
    assert!(!board.set(12, 10, Cell::Garbage));
    assert_eq!(board.filled_count(), 1);
}

#[test]
fn test_from_rows_rejects_ragged_input() {
    assert!(Board::from_rows(&["....", "..."]).is_none());
    assert!(Board::from_rows(&[]).is_none());
    assert!(Board::from_rows(&["..?."]).is_none());
}

#[test]
fn test_collision_against_walls_and_floor() {
    let board = Board::new(12, 24);
    let o = get_shape(PieceKind::O);
    assert!(!board.is_colliding(&o, 0, 0));
    assert!(!board.is_colliding(&o, 10, 22));
    assert!(board.is_colliding(&o, -1, 0));
    assert!(board.is_colliding(&o, 11, 0));
    assert!(board.is_colliding(&o, 0, 23));
}

#[test]
fn test_rows_above_the_board_never_collide() {
    let board = Board::new(12, 24);
    let o = get_shape(PieceKind::O);
    assert!(!board.is_colliding(&o, 4, -2));
    assert!(!board.is_colliding(&o, 4, -10));
    // Still bounded left and right up there.
    assert!(board.is_colliding(&o, -1, -5));
}

#[test]
fn test_only_filled_cells_are_checked() {
    // The I piece's grid has an empty column 0, so the grid itself may hang
    // one column past the left wall.
    let board = Board::new(12, 24);
    let i = get_shape(PieceKind::I);
    assert!(!board.is_colliding(&i, -1, 0));
    assert!(board.is_colliding(&i, -2, 0));
}

#[test]
fn test_collision_with_settled_cells() {
    let board = Board::from_rows(&["....", "....", ".X.."]).unwrap();
    let o = get_shape(PieceKind::O);
    assert!(board.is_colliding(&o, 0, 1));
    assert!(!board.is_colliding(&o, 2, 1));
    assert!(!board.is_colliding(&o, 0, 0));
}

#[test]
fn test_merge_writes_piece_cells() {
    let mut board = Board::new(4, 4);
    let written = board.merge(&get_shape(PieceKind::O), 1, 2);
    assert_eq!(written, 4);
    assert_eq!(board.to_rows(), vec!["....", "....", ".OO.", ".OO."]);
}

#[test]
fn test_merge_drops_cells_above_the_board() {
    let mut board = Board::new(4, 4);
    let written = board.merge(&get_shape(PieceKind::I), 0, -2);
    assert_eq!(written, 2);
    assert_eq!(board.to_rows()[..2], [".I..", ".I.."]);
}

#[test]
fn test_single_gap_row_clears_when_filled() {
    // 12 wide, bottom row full except column 5.
    let mut board = Board::new(12, 24);
    for x in 0..12 {
        if x != 5 {
            board.set(x, 23, Cell::Garbage);
        }
    }
    board.set(3, 22, Cell::Garbage);
    assert!(!board.is_row_full(23));

    // The I piece's filled column is local x = 1.
    let i = get_shape(PieceKind::I);
    assert!(!board.is_colliding(&i, 4, 20));
    board.merge(&i, 4, 20);
    assert!(board.is_row_full(23));

    let before = board.filled_count();
    let cleared = board.clear_and_compact();
    assert_eq!(cleared, 1);
    assert_eq!(board.filled_count(), before - 12);
    assert!(board.row(0).iter().all(|c| *c == Cell::Empty));
    // Rows above the cleared one moved down by one.
    assert_eq!(board.get(3, 23), Some(Cell::Garbage));
    assert_eq!(board.get(5, 23), Some(Cell::Block(PieceKind::I)));
    assert_eq!(board.get(5, 20), Some(Cell::Empty));
}

#[test]
fn test_clear_keeps_order_of_remaining_rows() {
    let mut board = Board::from_rows(&[
        "....",
        "I...",
        "XXXX",
        ".O..",
        "XXXX",
        "..T.",
    ])
    .unwrap();
    assert_eq!(board.clear_and_compact(), 2);
    assert_eq!(
        board.to_rows(),
        vec!["....", "....", "....", "I...", ".O..", "..T."]
    );
}

#[test]
fn test_clear_with_nothing_full() {
    let mut board = Board::from_rows(&["X...", "XX.X"]).unwrap();
    let before = board.clone();
    assert_eq!(board.clear_and_compact(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_inject_garbage_shifts_up() {
    let mut board = Board::from_rows(&["....", "....", ".O..", "TTT."]).unwrap();
    let overflow = board.inject_garbage(2, 0);
    assert!(!overflow);
    assert_eq!(board.to_rows(), vec![".O..", "TTT.", ".XXX", ".XXX"]);
}

#[test]
fn test_inject_garbage_reports_overflow() {
    let mut board = Board::from_rows(&["..Z.", "....", "....", "...."]).unwrap();
    assert!(board.inject_garbage(1, 3));
    assert_eq!(board.to_rows()[3], "XXX.");
}

#[test]
fn test_inject_more_rows_than_the_board_holds() {
    let mut board = Board::from_rows(&["....", "..L.", "...."]).unwrap();
    let overflow = board.inject_garbage(10, 1);
    assert!(overflow);
    assert_eq!(board.to_rows(), vec!["X.XX", "X.XX", "X.XX"]);
    assert_eq!(board.cells().len(), 12);
}
