//! Session integration tests - scripted games through the public API

use falling_blocks::core::{
    Board, GameConfig, LockEvent, Outcome, Phase, PieceSource, RotationPolicy, Session,
};
use falling_blocks::types::{Cell, Command, PieceKind};

fn scripted(rows: &[&str], kinds: &[PieceKind]) -> Session {
    Session::from_parts(
        Board::from_rows(rows).unwrap(),
        PieceSource::scripted(99, kinds.iter().copied()),
        None,
        RotationPolicy::Checked,
    )
}

fn locked(outcome: Outcome) -> LockEvent {
    match outcome {
        Outcome::Locked(event) => event,
        other => panic!("expected a lock, got {:?}", other),
    }
}

#[test]
fn test_same_seed_same_game() {
    let config = GameConfig::default();
    let mut a = Session::new(&config, PieceSource::new(4242));
    let mut b = Session::new(&config, PieceSource::new(4242));
    for step in 0..200 {
        let command = Command::ALL[step % 6];
        assert_eq!(a.apply(command), b.apply(command));
        assert_eq!(a.gravity_tick(), b.gravity_tick());
    }
    assert_eq!(a.board(), b.board());
    assert_eq!(a.tally(), b.tally());
}

#[test]
fn test_gravity_eventually_locks_on_the_floor() {
    let config = GameConfig::default();
    let mut session = Session::new(&config, PieceSource::scripted(1, [PieceKind::O, PieceKind::T]));
    let mut ticks = 0;
    loop {
        ticks += 1;
        if let Outcome::Locked(event) = session.gravity_tick() {
            assert_eq!(event.lines_cleared, 0);
            break;
        }
        assert!(ticks < 100, "piece never locked");
    }
    // O spawns at row 0 and rests on rows 22-23: 22 moves then the lock.
    assert_eq!(ticks, 23);
    assert_eq!(session.board().get(5, 23), Some(Cell::Block(PieceKind::O)));
    assert_eq!(session.active().kind, PieceKind::T);
    assert_eq!((session.active().x, session.active().y), (5, 0));
}

#[test]
fn test_filling_the_gap_clears_one_line() {
    // 12 wide, bottom row full except column 5; a vertical I fills it.
    let mut rows = vec!["............"; 23];
    rows.push("XXXXX.XXXXXX");
    let mut session = scripted(&rows, &[PieceKind::I, PieceKind::O]);

    // I spawns at x = 4 with its blocks in column 5.
    assert_eq!(session.active().x, 4);
    let event = locked(session.apply(Command::HardDrop));
    assert_eq!(event.lines_cleared, 1);
    assert_eq!(session.tally().get(1), 1);
    assert!(session.board().row(0).iter().all(|c| *c == Cell::Empty));
    assert_eq!(session.board().filled_count(), 3);
}

#[test]
fn test_four_line_clear_counts_once_under_key_four() {
    let mut rows = vec!["...."; 4];
    rows.extend(["X.XX"; 4]);
    let mut session = scripted(&rows, &[PieceKind::I, PieceKind::O]);

    let event = locked(session.apply(Command::HardDrop));
    assert_eq!(event.lines_cleared, 4);
    assert_eq!(session.tally().counts(), &[0, 0, 0, 1]);
    assert_eq!(session.board().filled_count(), 0);
}

#[test]
fn test_occupied_spawn_rows_end_the_game() {
    // The I stops on the X with its top in row 1, right where the next O
    // spawns (columns 1-2, rows 0-1).
    let mut session = scripted(
        &["....", "....", "....", "....", "....", ".X.."],
        &[PieceKind::I, PieceKind::O],
    );
    let event = locked(session.apply(Command::HardDrop));
    assert!(event.game_over);
    assert_eq!(event.lines_cleared, 0);
    assert_eq!(session.phase(), Phase::GameOver);

    let board = session.board().clone();
    assert_eq!(session.gravity_tick(), Outcome::Halted);
    assert_eq!(session.apply(Command::RotateLeft), Outcome::Halted);
    assert_eq!(session.apply(Command::Quit), Outcome::Quit);
    assert_eq!(session.board(), &board);
}

#[test]
fn test_soft_drop_moves_but_never_locks() {
    let mut session = scripted(&["....", "....", "...."], &[PieceKind::O]);
    assert_eq!(session.apply(Command::SoftDrop), Outcome::Moved);
    assert_eq!(session.apply(Command::SoftDrop), Outcome::Blocked);
    assert_eq!(session.pieces_locked(), 0);
    assert!(matches!(session.gravity_tick(), Outcome::Locked(_)));
}

#[test]
fn test_snapshot_reuses_buffer() {
    let session = scripted(&["....", "....", "....", "XX.X"], &[PieceKind::O, PieceKind::T]);
    let mut snap = session.snapshot();
    let ptr = snap.cells.as_ptr();
    session.snapshot_into(&mut snap);
    assert_eq!(snap.cells.as_ptr(), ptr);
    assert_eq!(snap.next, PieceKind::T);
    assert_eq!(snap.width, 4);
    assert_eq!(snap.height, 4);
    assert!(!snap.game_over);
}
