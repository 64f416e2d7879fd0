use falling_blocks::core::{Board, GarbageQueue, PieceSource, RotationPolicy, Session, Snapshot};
use falling_blocks::term::{footprint, AnchorY, BoardView, FrameBuffer, Viewport};
use falling_blocks::types::{Cell, PieceKind};

fn snapshot_of(rows: &[&str], kinds: &[PieceKind]) -> Snapshot {
    Session::from_parts(
        Board::from_rows(rows).unwrap(),
        PieceSource::scripted(1, kinds.iter().copied()),
        None,
        RotationPolicy::Checked,
    )
    .snapshot()
}

#[test]
fn term_view_draws_star_border_around_the_board() {
    let snap = Snapshot::default();
    let view = BoardView::default().with_anchor_y(AnchorY::Top);
    let (w, h) = footprint(&snap);
    let fb = view.render(&snap, Viewport::new(w, h));

    // 12 cells * 2 columns + 2 border columns.
    assert_eq!(fb.row_text(0)[..26], "*".repeat(26));
    assert_eq!(fb.row_text(25)[..26], "*".repeat(26));
    assert_eq!(fb.get(0, 12).unwrap().ch, '*');
    assert_eq!(fb.get(25, 12).unwrap().ch, '*');
}

#[test]
fn term_view_draws_cells_two_columns_wide() {
    let mut snap = Snapshot::default();
    snap.cells[23 * 12] = Cell::Garbage;
    let view = BoardView::default().with_anchor_y(AnchorY::Top);
    let (w, h) = footprint(&snap);
    let fb = view.render(&snap, Viewport::new(w, h));

    // Inside the border: (1, 1) origin.
    assert_eq!(fb.get(1, 24).unwrap().ch, '[');
    assert_eq!(fb.get(2, 24).unwrap().ch, ']');
    assert_eq!(fb.get(3, 24).unwrap().ch, ' ');
}

#[test]
fn term_view_shows_next_piece_and_score() {
    let snap = snapshot_of(&["....", "....", "....", "...."], &[PieceKind::O, PieceKind::T]);
    let view = BoardView::default();
    let fb = view.render(&snap, Viewport::new(40, 10));
    let text = fb.text();
    assert!(text.contains("Next piece: T"), "{}", text);
    assert!(text.contains("Score: {1: 0, 2: 0, 3: 0, 4: 0}"), "{}", text);
    assert!(!text.contains("Game over!"));
}

#[test]
fn term_view_draws_active_piece_and_ghost() {
    let snap = snapshot_of(&["....", "....", "....", "....", "...."], &[PieceKind::O]);
    let view = BoardView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&snap, Viewport::new(26, 8));

    // O at columns 1-2, rows 0-1; ghost on rows 3-4.
    let active = fb.get(3, 1).unwrap();
    let ghost = fb.get(3, 4).unwrap();
    assert_eq!(active.ch, '[');
    assert_eq!(ghost.ch, '[');
    assert!(!active.style.dim);
    assert!(ghost.style.dim);
}

#[test]
fn term_view_overlays_game_over() {
    let mut snap = Snapshot::default();
    snap.game_over = true;
    let view = BoardView::default();
    let fb = view.render(&snap, Viewport::new(60, 30));
    assert!(fb.text().contains("Game over!"));
}

#[test]
fn term_view_renders_both_players_side_by_side() {
    let player = |gap| {
        let mut session = Session::from_parts(
            Board::new(12, 24),
            PieceSource::scripted(1, [PieceKind::I, PieceKind::S]),
            Some(GarbageQueue::new(gap)),
            RotationPolicy::Checked,
        );
        session.receive_garbage(2);
        session.snapshot()
    };
    let (one, two) = (player(0), player(5));
    let (w, h) = footprint(&one);

    let view = BoardView::default().with_anchor_y(AnchorY::Top);
    let mut fb = FrameBuffer::new(0, 0);
    view.render_versus([&one, &two], Viewport::new(w * 2 + 4, h), &mut fb);

    let top = fb.row_text(0);
    assert_eq!(top.matches("Next piece: S").count(), 2, "{}", top);
    assert_eq!(fb.get(0, 0).unwrap().ch, '*');
    assert_eq!(fb.get(w + 4, 0).unwrap().ch, '*');
    assert_eq!(fb.text().matches("Incoming: 2").count(), 2);
}
