//! Garbage module - penalty rows between two players
//!
//! A lock that clears `n` lines sends `n - 1` rows to the opponent (a single
//! clears nothing). Rows wait in the receiver's queue until the receiver's
//! own piece locks, then rise from the bottom of its board with one open
//! column that stays fixed for the life of that board.

use tracing::{debug, warn};

use crate::board::Board;

/// Rows sent to the opponent for a lock that cleared `cleared` lines
pub fn lines_to_send(cleared: usize) -> u32 {
    cleared.saturating_sub(1) as u32
}

/// Result of applying queued garbage to a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GarbageApplied {
    /// Rows actually pushed in
    pub rows: u32,
    /// A discarded top row still held blocks
    pub overflow: bool,
}

/// Incoming garbage for one board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GarbageQueue {
    pending: u32,
    gap: u8,
}

impl GarbageQueue {
    /// Queue for a board whose garbage rows leave column `gap` open
    pub fn new(gap: u8) -> Self {
        Self { pending: 0, gap }
    }

    pub fn gap(&self) -> u8 {
        self.gap
    }

    /// Rows waiting for the next lock
    pub fn pending(&self) -> u32 {
        self.pending
    }

    pub fn receive(&mut self, rows: u32) {
        self.pending = self.pending.saturating_add(rows);
    }

    /// Inject every pending row into `board` and reset the counter.
    pub fn apply_to(&mut self, board: &mut Board) -> GarbageApplied {
        if self.pending == 0 {
            return GarbageApplied::default();
        }
        let rows = self.pending;
        self.pending = 0;

        let overflow = board.inject_garbage(rows as usize, self.gap);
        if overflow {
            warn!(rows, gap = self.gap, "garbage pushed blocks off the top");
        } else {
            debug!(rows, gap = self.gap, "garbage injected");
        }
        GarbageApplied { rows, overflow }
    }
}
