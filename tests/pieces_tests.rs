//! Piece catalog and rotation tests

use falling_blocks::core::{get_shape, rotate_left, rotate_right, Board, Shape};
use falling_blocks::types::{Cell, PieceKind};
use proptest::prelude::*;

#[test]
fn test_every_piece_has_four_blocks() {
    for kind in PieceKind::ALL {
        let shape = get_shape(kind);
        assert_eq!(shape.filled_count(), 4, "{:?}", kind);
        assert!(shape.filled().all(|(_, _, c)| c == Cell::Block(kind)));
    }
}

#[test]
fn test_canonical_grids() {
    let rows = |kind| get_shape(kind).to_rows();
    assert_eq!(rows(PieceKind::I), vec![".I..", ".I..", ".I..", ".I.."]);
    assert_eq!(rows(PieceKind::O), vec!["OO", "OO"]);
    assert_eq!(rows(PieceKind::T), vec!["...", "TTT", ".T."]);
    assert_eq!(rows(PieceKind::J), vec!["...", "JJJ", "..J"]);
    assert_eq!(rows(PieceKind::L), vec!["...", "LLL", "L.."]);
    assert_eq!(rows(PieceKind::S), vec!["...", ".SS", "SS."]);
    assert_eq!(rows(PieceKind::Z), vec!["...", "ZZ.", ".ZZ"]);
}

#[test]
fn test_rotate_left_turns_counter_clockwise() {
    let t = get_shape(PieceKind::T);
    // The T's stem points down; a left turn points it right.
    assert_eq!(rotate_left(&t).to_rows(), vec![".T.", ".TT", ".T."]);
    assert_eq!(rotate_right(&t).to_rows(), vec![".T.", "TT.", ".T."]);
}

#[test]
fn test_i_piece_lies_flat_after_one_turn() {
    let i = rotate_left(&get_shape(PieceKind::I));
    assert_eq!(i.to_rows(), vec!["....", "....", "IIII", "...."]);
}

#[test]
fn test_o_piece_is_rotation_invariant() {
    let o = get_shape(PieceKind::O);
    assert_eq!(rotate_left(&o), o);
    assert_eq!(rotate_right(&o), o);
}

#[test]
fn test_shape_from_rows_pads_to_square() {
    let shape = Shape::from_rows(&["##"], Cell::Garbage).unwrap();
    assert_eq!(shape.size(), 2);
    assert_eq!(shape.to_rows(), vec!["XX", ".."]);
    assert!(Shape::from_rows(&["#####"], Cell::Garbage).is_none());
}

fn any_kind() -> impl Strategy<Value = PieceKind> {
    (0usize..7).prop_map(|i| PieceKind::ALL[i])
}

proptest! {
    #[test]
    fn four_left_turns_are_identity(kind in any_kind(), extra in 0usize..4) {
        let mut shape = get_shape(kind);
        for _ in 0..extra {
            shape = rotate_left(&shape);
        }
        let start = shape.clone();
        for _ in 0..4 {
            shape = rotate_left(&shape);
        }
        prop_assert_eq!(shape, start);
    }

    #[test]
    fn right_undoes_left(kind in any_kind()) {
        let shape = get_shape(kind);
        prop_assert_eq!(rotate_right(&rotate_left(&shape)), shape);
    }

    #[test]
    fn rotation_keeps_block_count(kind in any_kind(), turns in 0usize..8) {
        let mut shape = get_shape(kind);
        for _ in 0..turns {
            shape = rotate_right(&shape);
        }
        prop_assert_eq!(shape.filled_count(), 4);
    }

    #[test]
    fn placements_outside_the_walls_always_collide(
        kind in any_kind(),
        turns in 0usize..4,
        x in -8i16..20,
        y in -8i16..32,
        fill in proptest::collection::vec(any::<bool>(), 12 * 24),
    ) {
        let mut board = Board::new(12, 24);
        for (i, filled) in fill.iter().enumerate() {
            if *filled {
                board.set((i % 12) as i16, (i / 12) as i16, Cell::Garbage);
            }
        }
        let mut shape = get_shape(kind);
        for _ in 0..turns {
            shape = rotate_left(&shape);
        }
        let out_of_bounds = shape
            .filled()
            .any(|(dx, dy, _)| x + dx < 0 || x + dx >= 12 || y + dy >= 24);
        if out_of_bounds {
            prop_assert!(board.is_colliding(&shape, x, y));
        }
    }
}
