//! BoardView: maps session snapshots into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout of one player, relative to its origin:
//!
//! ```text
//! ****************************  Next piece: T
//! *                          *    []
//! *          [][][]          *  [][][]
//! ...
//! ****************************
//! Score: {1: 0, 2: 0, 3: 0, 4: 0}
//! ```

use crate::core::Snapshot;
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::types::{Cell, PieceKind};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Columns between a board frame and its side panel
const PANEL_GAP: u16 = 2;
/// Wide enough for "Next piece: X" and a 4-cell preview
const PANEL_W: u16 = 14;
/// Columns between the two players in a versus match
const PLAYER_GAP: u16 = 4;

/// Draws one or two boards with their preview and tally.
#[derive(Debug, Clone, Copy)]
pub struct BoardView {
    anchor_y: AnchorY,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Center,
        }
    }
}

impl BoardView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render a single-player game into an existing framebuffer.
    ///
    /// Callers reuse the framebuffer across frames; it is only reallocated
    /// when the viewport grows.
    pub fn render_solo(&self, snap: &Snapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let (w, h) = footprint(snap);
        let (ox, oy) = self.origin(viewport, w, h);
        draw_player(fb, snap, ox, oy);
    }

    /// Render both players of a match side by side, player one on the left.
    pub fn render_versus(&self, snaps: [&Snapshot; 2], viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let (w1, h1) = footprint(snaps[0]);
        let (w2, h2) = footprint(snaps[1]);
        let (ox, oy) = self.origin(viewport, w1 + PLAYER_GAP + w2, h1.max(h2));
        draw_player(fb, snaps[0], ox, oy);
        draw_player(fb, snaps[1], ox + w1 + PLAYER_GAP, oy);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &Snapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_solo(snap, viewport, &mut fb);
        fb
    }

    fn origin(&self, viewport: Viewport, w: u16, h: u16) -> (u16, u16) {
        let x = viewport.width.saturating_sub(w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        (x, y)
    }
}

/// Terminal columns and rows one player occupies
pub fn footprint(snap: &Snapshot) -> (u16, u16) {
    let (frame_w, frame_h) = frame_size(snap);
    (frame_w + PANEL_GAP + PANEL_W, frame_h + 1)
}

fn frame_size(snap: &Snapshot) -> (u16, u16) {
    (snap.width as u16 * 2 + 2, snap.height as u16 + 2)
}

fn draw_player(fb: &mut FrameBuffer, snap: &Snapshot, ox: u16, oy: u16) {
    let (frame_w, frame_h) = frame_size(snap);

    draw_border(fb, ox, oy, frame_w, frame_h);

    for y in 0..snap.height as usize {
        for (x, cell) in snap.row(y).iter().enumerate() {
            if let Some(style) = cell_style(*cell) {
                let px = ox + 1 + 2 * x as u16;
                fb.put_str(px, oy + 1 + y as u16, "[]", style);
            }
        }
    }

    let panel_x = ox + frame_w + PANEL_GAP;
    draw_next_piece(fb, snap, panel_x, oy);
    if snap.pending_garbage > 0 {
        let label = Style::fg(Rgb::new(220, 120, 120)).bold();
        fb.put_str(panel_x, oy + 7, &format!("Incoming: {}", snap.pending_garbage), label);
    }

    let text = Style::default();
    fb.put_str(ox, oy + frame_h, &format!("Score: {}", snap.tally), text);

    if snap.game_over {
        draw_overlay_text(fb, ox, oy, frame_w, frame_h, "Game over!");
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    let style = Style::fg(Rgb::new(200, 200, 200));
    fb.hline(x, y, w, '*', style);
    fb.hline(x, y + h - 1, w, '*', style);
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '*', style);
        fb.put_char(x + w - 1, y + dy, '*', style);
    }
}

fn draw_next_piece(fb: &mut FrameBuffer, snap: &Snapshot, x: u16, y: u16) {
    let label = Style::default().bold();
    fb.put_str(x, y, "Next piece: ", label);
    fb.put_char(x + 12, y, snap.next.letter(), label);

    let style = piece_style(snap.next);
    for (dx, dy, _) in snap.next_shape().filled() {
        fb.put_str(x + 2 * dx as u16, y + 1 + dy as u16, "[]", style);
    }
}

fn draw_overlay_text(
    fb: &mut FrameBuffer,
    ox: u16,
    oy: u16,
    frame_w: u16,
    frame_h: u16,
    text: &str,
) {
    let text_w = text.chars().count() as u16;
    let x = ox + frame_w.saturating_sub(text_w) / 2;
    let style = Style::fg(Rgb::new(255, 255, 255)).bold();
    fb.put_str(x, oy + frame_h / 2, text, style);
}

fn cell_style(cell: Cell) -> Option<Style> {
    match cell {
        Cell::Empty => None,
        Cell::Block(kind) => Some(piece_style(kind)),
        Cell::Ghost => Some(Style::fg(Rgb::new(140, 140, 140)).dim()),
        Cell::Garbage => Some(Style::fg(Rgb::new(150, 150, 150))),
    }
}

fn piece_style(kind: PieceKind) -> Style {
    let fg = match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    };
    Style::fg(fg).bold()
}
