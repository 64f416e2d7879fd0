//! Read-only view of a session for renderers
//!
//! A [`Snapshot`] is refilled in place every frame by
//! [`Session::snapshot_into`](crate::session::Session::snapshot_into), so the
//! render loop keeps one buffer per board and never allocates after warm-up.

use crate::pieces::{get_shape, Shape};
use crate::session::LineTally;
use crate::types::{Cell, PieceKind, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};

/// The falling piece in its current orientation.
///
/// Cells of `shape` above row 0 are not part of [`Snapshot::cells`]; this is
/// the only place a renderer can see them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i16,
    pub y: i16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub width: u8,
    pub height: u8,
    /// Composited grid, row-major: settled cells, ghost, active piece
    pub cells: Vec<Cell>,
    pub active: Option<ActiveSnapshot>,
    pub next: PieceKind,
    pub tally: LineTally,
    pub game_over: bool,
    pub pending_garbage: u32,
}

impl Snapshot {
    /// Cell at `(x, y)`; anything off the grid reads as empty.
    pub fn get(&self, x: usize, y: usize) -> Cell {
        if x >= self.width as usize || y >= self.height as usize {
            return Cell::Empty;
        }
        self.cells
            .get(y * self.width as usize + x)
            .copied()
            .unwrap_or_default()
    }

    pub fn row(&self, y: usize) -> &[Cell] {
        let w = self.width as usize;
        let start = (y * w).min(self.cells.len());
        let end = (start + w).min(self.cells.len());
        &self.cells[start..end]
    }

    /// Canonical shape of the preview piece
    pub fn next_shape(&self) -> Shape {
        get_shape(self.next)
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            cells: vec![Cell::Empty; DEFAULT_BOARD_WIDTH as usize * DEFAULT_BOARD_HEIGHT as usize],
            active: None,
            next: PieceKind::I,
            tally: LineTally::default(),
            game_over: false,
            pending_garbage: 0,
        }
    }
}
