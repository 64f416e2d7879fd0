//! Session module - one player's game
//!
//! Ties together the board, the falling piece, the piece source, the line
//! tally and (in a two-player match) the garbage queue. Every mutation goes
//! through [`Session::gravity_tick`] or [`Session::apply`]; illegal moves are
//! silent no-ops and game over latches for good.

use std::fmt;

use tracing::{debug, info};

use crate::board::Board;
use crate::config::{GameConfig, RotationPolicy};
use crate::garbage::{lines_to_send, GarbageQueue};
use crate::pieces::{get_shape, rotate_left, rotate_right, spawn_column, Shape};
use crate::rng::PieceSource;
use crate::snapshot::{ActiveSnapshot, Snapshot};
use crate::types::{Cell, Command, PieceKind, MAX_LINES_PER_LOCK};

/// The falling piece: kind, current local grid, and board origin
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i16,
    pub y: i16,
}

impl ActivePiece {
    /// A piece in canonical orientation at the spawn origin
    pub fn spawn(kind: PieceKind, board_width: u8) -> Self {
        let shape = get_shape(kind);
        let x = spawn_column(board_width, &shape);
        Self { kind, shape, x, y: 0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Active,
    GameOver,
}

/// Occurrences of each cleared-line count (1 to 4 lines at once)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LineTally {
    counts: [u32; MAX_LINES_PER_LOCK as usize],
}

impl LineTally {
    /// Count one lock that cleared `lines` rows. Zero is not recorded.
    pub fn record(&mut self, lines: usize) {
        match lines {
            0 => {}
            n if n <= MAX_LINES_PER_LOCK as usize => self.counts[n - 1] += 1,
            n => debug!(lines = n, "clear larger than any tally key ignored"),
        }
    }

    /// Times exactly `lines` rows were cleared by one lock
    pub fn get(&self, lines: usize) -> u32 {
        match lines {
            1..=4 => self.counts[lines - 1],
            _ => 0,
        }
    }

    pub fn counts(&self) -> &[u32; MAX_LINES_PER_LOCK as usize] {
        &self.counts
    }

    pub fn total_lines(&self) -> u32 {
        self.counts
            .iter()
            .enumerate()
            .map(|(i, &n)| (i as u32 + 1) * n)
            .sum()
    }
}

impl fmt::Display for LineTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, n) in self.counts.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", i + 1, n)?;
        }
        write!(f, "}}")
    }
}

/// What one lock did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LockEvent {
    pub lines_cleared: u8,
    /// Rows staged for the opponent
    pub garbage_sent: u32,
    /// Queued rows injected into this board
    pub garbage_received: u32,
    /// The lock ended the game (blocked spawn or garbage overflow)
    pub game_over: bool,
}

/// Result of one tick or command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The piece moved or rotated
    Moved,
    /// Illegal move, nothing changed
    Blocked,
    /// The piece locked
    Locked(LockEvent),
    /// The game is over, nothing changed
    Halted,
    /// The player asked to leave
    Quit,
}

impl Outcome {
    /// Whether the visible state changed
    pub fn changed(&self) -> bool {
        matches!(self, Outcome::Moved | Outcome::Locked(_))
    }
}

/// Complete state of one player's game
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    active: ActivePiece,
    next: PieceKind,
    source: PieceSource,
    tally: LineTally,
    game_over: bool,
    garbage: Option<GarbageQueue>,
    outgoing: u32,
    rotation: RotationPolicy,
    pieces_locked: u32,
}

impl Session {
    /// Single-player session
    pub fn new(config: &GameConfig, source: PieceSource) -> Self {
        Self::from_parts(
            Board::new(config.board_width, config.board_height),
            source,
            None,
            config.rotation,
        )
    }

    /// Session that sends and receives garbage. The gap column is drawn
    /// from `source` once and kept for the life of the board.
    pub fn with_garbage(config: &GameConfig, mut source: PieceSource) -> Self {
        let gap = source.column(config.board_width);
        Self::from_parts(
            Board::new(config.board_width, config.board_height),
            source,
            Some(GarbageQueue::new(gap)),
            config.rotation,
        )
    }

    /// Session over a prepared board. Spawns the first piece immediately;
    /// if it does not fit, the session starts out game over.
    pub fn from_parts(
        board: Board,
        mut source: PieceSource,
        garbage: Option<GarbageQueue>,
        rotation: RotationPolicy,
    ) -> Self {
        let first = source.draw();
        let next = source.draw();
        let active = ActivePiece::spawn(first, board.width());
        let game_over = board.is_colliding(&active.shape, active.x, active.y);
        Self {
            board,
            active,
            next,
            source,
            tally: LineTally::default(),
            game_over,
            garbage,
            outgoing: 0,
            rotation,
            pieces_locked: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    pub fn next_piece(&self) -> PieceKind {
        self.next
    }

    pub fn tally(&self) -> &LineTally {
        &self.tally
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else {
            Phase::Active
        }
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    /// Garbage rows waiting to be injected on this board's next lock
    pub fn pending_garbage(&self) -> u32 {
        self.garbage.as_ref().map_or(0, GarbageQueue::pending)
    }

    /// Open column of this board's garbage rows (two-player sessions only)
    pub fn gap_column(&self) -> Option<u8> {
        self.garbage.as_ref().map(GarbageQueue::gap)
    }

    /// Queue rows sent by the opponent. Ignored without a garbage queue.
    pub fn receive_garbage(&mut self, rows: u32) {
        if rows == 0 {
            return;
        }
        match self.garbage.as_mut() {
            Some(queue) => queue.receive(rows),
            None => debug!(rows, "garbage sent to a single-player session ignored"),
        }
    }

    /// Take the rows this session has earned for its opponent
    pub fn take_outgoing_garbage(&mut self) -> u32 {
        std::mem::take(&mut self.outgoing)
    }

    /// Apply one input command
    pub fn apply(&mut self, command: Command) -> Outcome {
        match command {
            Command::Quit => Outcome::Quit,
            Command::MoveLeft => self.try_move(-1, 0),
            Command::MoveRight => self.try_move(1, 0),
            Command::SoftDrop => self.try_move(0, 1),
            Command::HardDrop => self.hard_drop(),
            Command::RotateLeft => self.try_rotate(rotate_left),
            Command::RotateRight => self.try_rotate(rotate_right),
        }
    }

    /// Advance gravity by one row, locking the piece when it cannot fall.
    pub fn gravity_tick(&mut self) -> Outcome {
        if self.game_over {
            return Outcome::Halted;
        }
        if self.fits(&self.active.shape, self.active.x, self.active.y + 1) {
            self.active.y += 1;
            return Outcome::Moved;
        }
        Outcome::Locked(self.lock())
    }

    /// Try to shift the active piece by `(dx, dy)`
    pub fn try_move(&mut self, dx: i16, dy: i16) -> Outcome {
        if self.game_over {
            return Outcome::Halted;
        }
        let (x, y) = (self.active.x + dx, self.active.y + dy);
        if !self.fits(&self.active.shape, x, y) {
            return Outcome::Blocked;
        }
        self.active.x = x;
        self.active.y = y;
        Outcome::Moved
    }

    fn try_rotate(&mut self, turn: fn(&Shape) -> Shape) -> Outcome {
        if self.game_over {
            return Outcome::Halted;
        }
        let rotated = turn(&self.active.shape);
        if self.rotation == RotationPolicy::Checked
            && !self.fits(&rotated, self.active.x, self.active.y)
        {
            return Outcome::Blocked;
        }
        self.active.shape = rotated;
        Outcome::Moved
    }

    /// Drop the piece as far as it goes and lock it right away
    pub fn hard_drop(&mut self) -> Outcome {
        if self.game_over {
            return Outcome::Halted;
        }
        self.active.y = self.landing_row();
        Outcome::Locked(self.lock())
    }

    /// Row the active piece would lock on if hard-dropped now
    pub fn ghost_row(&self) -> i16 {
        self.landing_row()
    }

    fn landing_row(&self) -> i16 {
        let mut y = self.active.y;
        while self.fits(&self.active.shape, self.active.x, y + 1) {
            y += 1;
        }
        y
    }

    #[inline]
    fn fits(&self, shape: &Shape, x: i16, y: i16) -> bool {
        !self.board.is_colliding(shape, x, y)
    }

    /// Merge, clear, settle garbage, then spawn the next piece.
    fn lock(&mut self) -> LockEvent {
        let ActivePiece { kind, shape, x, y } = &self.active;
        self.board.merge(shape, *x, *y);
        debug!(piece = %kind.letter(), x, y, "piece locked");

        let cleared = self.board.clear_and_compact();
        if cleared > 0 {
            self.tally.record(cleared);
            debug!(lines = cleared, "lines cleared");
        }

        let mut event = LockEvent {
            lines_cleared: cleared as u8,
            ..LockEvent::default()
        };

        let mut overflow = false;
        if let Some(queue) = self.garbage.as_mut() {
            event.garbage_sent = lines_to_send(cleared);
            self.outgoing += event.garbage_sent;

            let applied = queue.apply_to(&mut self.board);
            event.garbage_received = applied.rows;
            overflow = applied.overflow;
        }

        self.pieces_locked += 1;
        let spawned = self.spawn_next();

        if overflow || !spawned {
            self.game_over = true;
            event.game_over = true;
            info!(
                pieces = self.pieces_locked,
                tally = %self.tally,
                overflow,
                "game over"
            );
        }
        event
    }

    /// Promote the preview piece and draw a new preview.
    /// Returns false when the new piece collides at the spawn origin.
    fn spawn_next(&mut self) -> bool {
        let kind = std::mem::replace(&mut self.next, self.source.draw());
        self.active = ActivePiece::spawn(kind, self.board.width());
        self.fits(&self.active.shape, self.active.x, self.active.y)
    }

    /// Copy everything a renderer needs into `out`.
    ///
    /// The grid is composited: settled cells, then the ghost outline on empty
    /// cells, then the active piece. Reuses `out`'s buffer.
    pub fn snapshot_into(&self, out: &mut Snapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.cells.clear();
        out.cells.extend_from_slice(self.board.cells());

        let width = self.board.width() as i16;
        let height = self.board.height() as i16;
        let mut paint = |x: i16, y: i16, cell: Cell, over_filled: bool| {
            if x < 0 || x >= width || y < 0 || y >= height {
                return;
            }
            let slot = &mut out.cells[(y as usize) * (width as usize) + x as usize];
            if over_filled || !slot.is_filled() {
                *slot = cell;
            }
        };

        if !self.game_over {
            let ghost_y = self.ghost_row();
            for (dx, dy, cell) in self.active.shape.ghost().filled() {
                paint(self.active.x + dx, ghost_y + dy, cell, false);
            }
        }
        for (dx, dy, cell) in self.active.shape.filled() {
            paint(self.active.x + dx, self.active.y + dy, cell, true);
        }

        out.active = Some(ActiveSnapshot {
            kind: self.active.kind,
            shape: self.active.shape.clone(),
            x: self.active.x,
            y: self.active.y,
        });
        out.next = self.next;
        out.tally = self.tally;
        out.game_over = self.game_over;
        out.pending_garbage = self.pending_garbage();
    }

    pub fn snapshot(&self) -> Snapshot {
        let mut snap = Snapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}
